// Centralized configuration for simulation parameters

use crate::vector::Vec2i;
use serde::{Deserialize, Serialize};

// ====================
// Board Parameters
// ====================
pub const DEFAULT_BOARD_WIDTH: i32 = 25;
pub const DEFAULT_BOARD_HEIGHT: i32 = 25;
/// Character every cell is reset to before particles are stamped
pub const DEFAULT_FILL: char = ' ';
/// Character stamped at each particle position
pub const DEFAULT_MARKER: char = '#';

// ====================
// Particle Parameters
// ====================
pub const DEFAULT_VELOCITY: Vec2i = Vec2i::new(0, 1);
pub const DEFAULT_MASS: i32 = 1;

// ====================
// Simulation Parameters
// ====================
/// Ticks advanced per frame. Every phase of a frame uses the same value.
pub const DELTA_TIME: i32 = 1;

// ====================
// Frame Driver Parameters
// ====================
/// Delay between rendered frames in milliseconds
pub const FRAME_INTERVAL_MS: u64 = 300;
/// Scenario file looked up in the working directory at startup
pub const INIT_CONFIG_FILE: &str = "init_config.toml";

/// Demo population used when no scenario file is present.
pub const DEMO_PARTICLES: [(i32, i32); 6] = [(2, 4), (10, 20), (1, 7), (10, 18), (1, 6), (1, 22)];

/// How a collided particle's position is rolled back during resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rebound {
    /// Restore the pre-move position. Collided particles are frozen during the move phase,
    /// so their position stays put and only the velocity flips.
    #[default]
    Hold,
    /// Step one tick backwards along the old velocity (`position - velocity * dt`), the
    /// legacy behaviour. Skipped when the step would leave the board.
    StepBack,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: i32,
    pub height: i32,
    pub fill: char,
    pub marker: char,
    pub rebound: Rebound,
    /// Milliseconds between frames in the driver loop
    pub frame_interval_ms: u64,
    /// Stop after this many frames. `None` runs until the process is killed.
    pub max_frames: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            fill: DEFAULT_FILL,
            marker: DEFAULT_MARKER,
            rebound: Rebound::Hold,
            frame_interval_ms: FRAME_INTERVAL_MS,
            max_frames: None,
        }
    }
}

impl SimConfig {
    /// Board of the given size with every other setting at its default.
    pub fn with_board(width: i32, height: i32, fill: char) -> Self {
        Self {
            width,
            height,
            fill,
            ..Self::default()
        }
    }
}
