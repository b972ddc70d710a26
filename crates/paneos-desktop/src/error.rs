//! Error types for the window-manager core
//!
//! This module provides structured error types for all fallible operations
//! in the desktop crate. Operations on unknown window ids are silent no-ops
//! by contract and never produce an error.

use crate::types::WindowId;

/// Errors that can occur in window-manager operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// Content construction failed while opening a window
    ContentFailed {
        /// The window being opened
        id: WindowId,
        /// Why content construction failed
        reason: String,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),

    /// Writing the layout snapshot to the durable store failed
    PersistenceError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContentFailed { id, reason } => {
                write!(f, "content construction failed for '{}': {}", id, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            Self::PersistenceError(msg) => write!(f, "persistence error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
