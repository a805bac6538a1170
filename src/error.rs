// error.rs
// Crate-wide error type for board access, engine setup and scenario loading

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the simulation core and its frame driver.
///
/// Every variant is a setup or logic error, never a transient fault: callers abort setup or
/// stop the frame loop instead of retrying.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad construction input: non-positive board dimensions, mass below 1, a particle placed
    /// off the board, or an unusable scenario value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Board read or write outside `[0, width) x [0, height)`.
    #[error("index out of range: ({x}, {y}) is outside a {width}x{height} board")]
    IndexOutOfRange {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    /// Malformed `init_config.toml`.
    #[error("failed to parse scenario: {0}")]
    Config(#[from] toml::de::Error),

    /// Scenario file or terminal I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
