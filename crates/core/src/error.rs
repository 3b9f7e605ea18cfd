//! Error types for the box-fill engine.
//!
//! Generation, clear checking and snapping never fail. Errors only come from
//! the configuration layer validating settings or a stage definition.

use thiserror::Error;

/// Result type alias for box-fill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating puzzle inputs.
#[derive(Debug, Error)]
pub enum Error {
    /// Generation settings are inconsistent.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A stage definition violates a generation invariant.
    #[error("Invalid stage: {0}")]
    InvalidStage(String),

    /// An item definition is malformed.
    #[error("Invalid item: {0}")]
    InvalidItem(String),
}
