use crate::error::Result;
use crate::simulation::Engine;
use std::io::Write;
use std::thread;
use std::time::Duration;
use tracing::info;

/// ANSI: clear the screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Print the current board after clearing the terminal.
pub fn render<W: Write>(engine: &Engine, out: &mut W) -> Result<()> {
    write!(out, "{CLEAR_SCREEN}{}", engine.board())?;
    out.flush()?;
    Ok(())
}

/// Step, render, sleep; repeat until the configured frame limit (forever when unset).
/// Any engine error stops the loop.
pub fn run_simulation_loop<W: Write>(engine: &mut Engine, out: &mut W) -> Result<()> {
    let interval = Duration::from_millis(engine.config().frame_interval_ms);
    let max_frames = engine.config().max_frames;
    info!(
        particles = engine.len(),
        width = engine.board().width(),
        height = engine.board().height(),
        "simulation loop started"
    );

    loop {
        if max_frames.is_some_and(|limit| engine.frame() >= limit) {
            info!(frames = engine.frame(), "frame limit reached");
            return Ok(());
        }

        engine.update()?;
        render(engine, out)?;

        #[cfg(feature = "profiling")]
        {
            crate::PROFILER.lock().frame_done(crate::app::PROFILE_REPORT_FRAMES);
        }

        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }
}
