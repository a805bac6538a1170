// init_config.rs
// Handles loading the initial particle population and board settings from init_config.toml

use crate::config::{self, SimConfig};
use crate::error::{Error, Result};
use crate::particle::Particle;
use crate::simulation::Engine;
use crate::vector::Vec2i;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InitConfig {
    #[serde(default)]
    pub simulation: SimConfig,
    #[serde(default)]
    pub particles: Vec<ParticleConfig>,
    #[serde(default)]
    pub random: Vec<RandomConfig>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ParticleConfig {
    pub x: i32,
    pub y: i32,
    /// `[vx, vy]`; falls back to the default downward velocity when omitted.
    pub velocity: Option<[i32; 2]>,
    pub mass: Option<i32>,
}

/// Scatter `count` particles over the movable interior (`0 < x < width`, `0 < y < height`).
#[derive(Debug, Deserialize, Serialize)]
pub struct RandomConfig {
    pub count: usize,
    /// Seed for the placement generator, so a scenario file always produces the same board.
    #[serde(default)]
    pub seed: u64,
    pub velocity: Option<[i32; 2]>,
    pub mass: Option<i32>,
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `init_config.toml` from the working directory. `Ok(None)` when the file is absent.
    pub fn load_default() -> Result<Option<Self>> {
        let path = Path::new(config::INIT_CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from_file(path).map(Some)
    }

    /// The built-in scenario: six particles falling on a 25x25 board.
    pub fn demo() -> Self {
        Self {
            simulation: SimConfig::default(),
            particles: config::DEMO_PARTICLES
                .iter()
                .map(|&(x, y)| ParticleConfig { x, y, velocity: None, mass: None })
                .collect(),
            random: Vec::new(),
        }
    }

    /// Build an engine and register every configured particle: explicit ones first,
    /// then each random batch in file order.
    pub fn build_engine(&self) -> Result<Engine> {
        let mut engine = Engine::with_config(self.simulation.clone())?;
        for p in &self.particles {
            engine.add_particle(Vec2i::new(p.x, p.y), p.velocity.map(Vec2i::from), p.mass)?;
        }
        for batch in &self.random {
            batch.populate(&mut engine)?;
        }
        debug!(particles = engine.len(), "scenario applied");
        Ok(engine)
    }
}

impl RandomConfig {
    fn populate(&self, engine: &mut Engine) -> Result<()> {
        let (width, height) = (engine.board().width(), engine.board().height());
        if width < 2 || height < 2 {
            return Err(Error::InvalidArgument(format!(
                "random placement needs a movable interior, board is {width}x{height}"
            )));
        }
        let velocity = self.velocity.map(Vec2i::from).unwrap_or(config::DEFAULT_VELOCITY);
        let mass = self.mass.unwrap_or(config::DEFAULT_MASS);
        let mut rng = StdRng::seed_from_u64(self.seed);
        for _ in 0..self.count {
            let position = Vec2i::new(rng.random_range(1..width), rng.random_range(1..height));
            engine.push_particle(Particle::try_new(position, velocity, mass)?)?;
        }
        Ok(())
    }
}
