use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Simple scoped profiler recording cumulative time per frame phase.
pub struct Profiler {
    pub timings: HashMap<&'static str, Duration>,
    frames: u64,
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Profiler {
    pub fn new() -> Self {
        Self { timings: HashMap::new(), frames: 0 }
    }

    pub fn finish(&mut self, guard: &ProfilerGuard) {
        self.record(guard.name, guard.start.elapsed());
    }

    pub fn record(&mut self, name: &'static str, elapsed: Duration) {
        *self.timings.entry(name).or_default() += elapsed;
    }

    pub fn report_sorted(&self) -> Vec<(&'static str, Duration)> {
        let mut v: Vec<_> = self.timings.iter().map(|(n, d)| (*n, *d)).collect();
        v.sort_by(|a, b| b.1.cmp(&a.1));
        v
    }

    pub fn clear(&mut self) {
        self.timings.clear();
        self.frames = 0;
    }

    /// Count a completed frame; every `every` frames the totals are logged and reset.
    pub fn frame_done(&mut self, every: u64) {
        self.frames += 1;
        if every > 0 && self.frames >= every {
            self.log_and_clear();
        }
    }

    pub fn log_and_clear(&mut self) {
        let frames = self.frames.max(1) as u32;
        for (name, total) in self.report_sorted() {
            tracing::info!(section = name, total = ?total, per_frame = ?(total / frames), "profile");
        }
        self.clear();
    }
}

pub struct ProfilerGuard {
    name: &'static str,
    start: Instant,
}

/// Start a profiling section. Returns a guard that will update the global
/// profiler when dropped.
pub fn start(name: &'static str) -> ProfilerGuard {
    ProfilerGuard { name, start: Instant::now() }
}

#[cfg(feature = "profiling")]
impl Drop for ProfilerGuard {
    fn drop(&mut self) {
        crate::PROFILER.lock().finish(self);
    }
}

/// Macro helper to profile a scope only when the `profiling` feature is enabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _guard = $crate::profiler::start($name);
    };
}
