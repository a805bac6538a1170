// diagnostics.rs
// Per-frame summaries returned by the engine: what moved, what froze and which groups were resolved.

use crate::particle::ParticleId;
use crate::simulation::collision::CollisionGroup;

/// Outcome of one movement phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveSummary {
    /// Particles whose position advanced
    pub moved: usize,
    /// Particles held because they collided this frame
    pub frozen: usize,
    /// Particles held because the next cell was outside the movable interior
    pub blocked: usize,
}

/// Everything a single `update()` did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    pub moves: MoveSummary,
    /// Groups resolved this frame, in the order their last member was resolved
    pub groups: Vec<CollisionGroup>,
}

impl FrameReport {
    pub fn new(frame: u64) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    /// Number of particles that collided this frame.
    pub fn collided(&self) -> usize {
        self.groups.iter().map(CollisionGroup::len).sum()
    }

    pub fn collided_with_peer(&self, id: ParticleId) -> bool {
        self.groups.iter().any(|group| group.contains(id))
    }

    /// True when no particle collided.
    pub fn is_quiet(&self) -> bool {
        self.groups.is_empty()
    }
}
