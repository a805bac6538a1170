// simulation/engine.rs
// Contains the Engine struct and the per-frame pipeline (detect, move, resolve, redraw)

use super::collision::{CollisionGroup, CollisionSet};
use crate::board::Board;
use crate::config::{self, Rebound, SimConfig};
use crate::diagnostics::{FrameReport, MoveSummary};
use crate::error::{Error, Result};
use crate::particle::{Particle, ParticleId};
use crate::profile_scope;
use crate::vector::Vec2i;
use tracing::{debug, trace};

/// Owns the particles, the board and the current frame's collision groups.
///
/// Particles are processed in registration order in every phase; that order decides which
/// group is opened first and whose marker survives when two particles share a cell.
pub struct Engine {
    particles: Vec<Particle>,
    collisions: CollisionSet,
    board: Board,
    config: SimConfig,
    frame: u64,
}

impl Engine {
    pub fn new(width: i32, height: i32, fill: char) -> Result<Self> {
        Self::with_config(SimConfig::with_board(width, height, fill))
    }

    pub fn with_config(config: SimConfig) -> Result<Self> {
        let board = Board::new(config.width, config.height, config.fill)?;
        Ok(Self {
            particles: Vec::new(),
            collisions: CollisionSet::new(),
            board,
            config,
            frame: 0,
        })
    }

    /// Register a particle. Velocity defaults to `(0, 1)` and mass to 1.
    pub fn add_particle(
        &mut self,
        position: Vec2i,
        velocity: Option<Vec2i>,
        mass: Option<i32>,
    ) -> Result<ParticleId> {
        let particle = Particle::try_new(
            position,
            velocity.unwrap_or(config::DEFAULT_VELOCITY),
            mass.unwrap_or(config::DEFAULT_MASS),
        )?;
        self.push_particle(particle)
    }

    /// Register an already built particle. Its position must lie on the board.
    pub fn push_particle(&mut self, particle: Particle) -> Result<ParticleId> {
        if !self.board.contains(particle.position()) {
            return Err(Error::InvalidArgument(format!(
                "particle at {} is outside the {}x{} board",
                particle.position(),
                self.board.width(),
                self.board.height()
            )));
        }
        let id = ParticleId(self.particles.len());
        self.particles.push(particle);
        Ok(id)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn get_tile(&self, v: Vec2i) -> Result<char> {
        self.board.get_tile(v)
    }

    /// The board as printable text, one line per row.
    pub fn render(&self) -> String {
        self.board.to_string()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Frames completed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Collision groups still active. Empty between frames.
    pub fn collisions(&self) -> &CollisionSet {
        &self.collisions
    }

    /// Advance one tick: detect, move, resolve, redraw the board, then drop the frame's groups.
    pub fn update(&mut self) -> Result<FrameReport> {
        profile_scope!("frame");
        let mut report = self.update_particles();
        self.update_board()?;
        self.collisions.clear();
        report.frame = self.frame;
        self.frame += 1;
        debug!(
            frame = report.frame,
            moved = report.moves.moved,
            frozen = report.moves.frozen,
            blocked = report.moves.blocked,
            groups = report.groups.len(),
            "frame advanced"
        );
        Ok(report)
    }

    /// Detection, movement and resolution with a shared `DELTA_TIME`.
    pub fn update_particles(&mut self) -> FrameReport {
        let delta_time = config::DELTA_TIME;
        let mut report = FrameReport::new(self.frame);
        self.detect_collisions();
        report.moves = self.move_particles(delta_time);
        report.groups = self.resolve_collisions(delta_time);
        report
    }

    /// Rebuild the active collision set from current positions. Returns the number of groups.
    pub fn detect_collisions(&mut self) -> usize {
        profile_scope!("detect");
        self.collisions = CollisionSet::detect(&self.particles);
        self.collisions.len()
    }

    /// Advance every particle whose next cell is strictly inside the board and which has not
    /// collided this frame. Everything else stays put.
    pub fn move_particles(&mut self, delta_time: i32) -> MoveSummary {
        profile_scope!("move");
        let (width, height) = (self.board.width(), self.board.height());
        let mut summary = MoveSummary::default();
        for (i, particle) in self.particles.iter_mut().enumerate() {
            if self.collisions.has_collided(ParticleId(i)) {
                summary.frozen += 1;
                continue;
            }
            if !particle.next_position(delta_time).strictly_within(width, height) {
                summary.blocked += 1;
                continue;
            }
            particle.update(delta_time);
            summary.moved += 1;
        }
        summary
    }

    /// Roll back and reverse every collided particle, retiring each from the active set.
    /// Returns the groups whose members have all been resolved.
    pub fn resolve_collisions(&mut self, delta_time: i32) -> Vec<CollisionGroup> {
        profile_scope!("resolve");
        let (width, height) = (self.board.width(), self.board.height());
        let rebound = self.config.rebound;
        let mut resolved = Vec::new();
        for (i, particle) in self.particles.iter_mut().enumerate() {
            let id = ParticleId(i);
            if !self.collisions.has_collided(id) {
                continue;
            }
            match rebound {
                // Frozen in the move phase, so the pre-move position is the current one.
                Rebound::Hold => {}
                Rebound::StepBack => {
                    let back = particle.position() + particle.velocity() * -delta_time;
                    if back.within(width, height) {
                        particle.set_position(back);
                    }
                }
            }
            particle.set_velocity(Vec2i::ZERO - particle.velocity());
            if let Some(group) = self.collisions.retire(id) {
                trace!(
                    position = %group.position(),
                    members = group.len(),
                    "collision group resolved"
                );
                resolved.push(group);
            }
        }
        resolved
    }

    /// Reset the board to the fill character and stamp the marker at every particle,
    /// later particles overwriting earlier ones.
    pub fn update_board(&mut self) -> Result<()> {
        profile_scope!("board");
        self.board.clear(self.config.fill);
        for particle in &self.particles {
            self.board.set_tile(particle.position(), self.config.marker)?;
        }
        Ok(())
    }
}
