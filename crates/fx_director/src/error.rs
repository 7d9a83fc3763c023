//! Director error types

use thiserror::Error;

/// Errors raised while configuring a director
#[derive(Error, Debug)]
pub enum DirectorError {
    /// Failed to read a configuration file
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is not valid TOML or has the wrong shape
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The prune cadence must be a positive number of frames
    #[error("frames_before_pruning must be at least 1, got {0}")]
    InvalidPruneInterval(u64),

    /// Canvas dimensions must be finite and non-negative
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvasSize { width: f32, height: f32 },
}

/// Result type for director operations
pub type Result<T> = std::result::Result<T, DirectorError>;
