//! Configuration error types

use thiserror::Error;

/// Errors raised while building controllers or loading their configuration
///
/// Scroll and velocity samples never produce errors; out-of-range input is
/// clamped. Only construction-time settings are validated.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Velocity threshold is negative, NaN or infinite
    #[error("Invalid {name} velocity threshold: {value}")]
    InvalidThreshold { name: &'static str, value: f32 },

    /// Opacity fade distance is not a positive finite number
    #[error("Invalid opacity fade distance: {0}")]
    InvalidFadeDistance(f32),

    /// Collapse threshold must be within 0.0..=1.0
    #[error("Invalid collapse threshold: {0} (expected 0.0..=1.0)")]
    InvalidCollapseThreshold(f32),

    /// Sample buffer must hold at least one sample
    #[error("Invalid sample buffer capacity: {0}")]
    InvalidCapacity(usize),

    /// Failed to read a configuration file
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse or serialize configuration
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
