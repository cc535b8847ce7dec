//! Error types for the vertex-buffer recorder
//!
//! Almost every misuse of the recorder is recoverable by design (it runs
//! inside a per-frame loop and must never panic for contention or a stale
//! session); those paths are logged and no-opped instead of surfacing here.
//! Only two conditions need a `Result`: construction-time misconfiguration
//! and detaching a region that was never attached.

use std::fmt;

/// Result type for recorder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Recorder errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Invalid construction parameters (e.g. zero scratch regions)
    InvalidConfig(String),

    /// `finish_editing` called without an attached region
    NoAttachedRegion,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::NoAttachedRegion => write!(f, "No attached region to finish editing"),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
