// particle.rs
// Defines the Particle struct (position, velocity, mass) and its per-tick position update.

use crate::config;
use crate::error::{Error, Result};
use crate::vector::Vec2i;

/// Stable index of a particle in the engine's arena, assigned in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub usize);

impl ParticleId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A point particle on the grid. Mass is carried but takes no part in collision response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Particle {
    position: Vec2i,
    velocity: Vec2i,
    mass: i32,
}

impl Particle {
    /// Particle at `position` with the default velocity `(0, 1)` and mass 1.
    pub fn new(position: Vec2i) -> Self {
        Self {
            position,
            velocity: config::DEFAULT_VELOCITY,
            mass: config::DEFAULT_MASS,
        }
    }

    /// Build a particle, rejecting a mass below 1.
    pub fn try_new(position: Vec2i, velocity: Vec2i, mass: i32) -> Result<Self> {
        if mass < 1 {
            return Err(Error::InvalidArgument(format!(
                "particle mass must be >= 1, got {mass}"
            )));
        }
        Ok(Self { position, velocity, mass })
    }

    pub fn with_velocity(mut self, velocity: Vec2i) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_mass(self, mass: i32) -> Result<Self> {
        Self::try_new(self.position, self.velocity, mass)
    }

    pub fn position(&self) -> Vec2i {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2i) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vec2i {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2i) {
        self.velocity = velocity;
    }

    pub fn mass(&self) -> i32 {
        self.mass
    }

    /// Where `update(delta_time)` would put this particle.
    pub fn next_position(&self, delta_time: i32) -> Vec2i {
        self.position + self.velocity * delta_time
    }

    pub fn update(&mut self, delta_time: i32) {
        self.position += delta_time * self.velocity;
    }
}
