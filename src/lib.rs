pub mod board;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod init_config;
pub mod particle;
pub mod profiler;
pub mod simulation;
pub mod vector;

pub mod app;

pub use board::Board;
pub use error::{Error, Result};
pub use particle::{Particle, ParticleId};
pub use simulation::{CollisionGroup, Engine};
pub use vector::Vec2i;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
