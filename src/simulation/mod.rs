// simulation/mod.rs
// Re-exports and module declarations for simulation submodules

pub mod collision;
pub mod engine;
pub use collision::{CollisionGroup, CollisionSet};
pub use engine::*;
