//! Platform error type

use thiserror::Error;

/// Errors reported by platform collaborators
///
/// These never reach the user. Callers go through [`crate::fire_haptic`],
/// which logs and drops them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The device has no engine for this effect
    #[error("Effect not supported on this device: {0}")]
    Unsupported(String),

    /// The engine accepted the request but failed to deliver it
    #[error("Effect failed: {0}")]
    Failed(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
