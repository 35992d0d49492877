//! Error handling for the family graph engine.

use thiserror::Error;

/// Specialized error type for snapshot handling.
///
/// The graph algorithms themselves never fail: unreachable targets yield
/// empty labels and malformed references are simply not traversed. Errors
/// only arise at the snapshot edge, where records enter or leave the crate.
#[derive(Debug, Error)]
pub enum FamilyGraphError {
    /// Error reading or writing a snapshot file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error decoding or encoding snapshot JSON
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result type for snapshot operations
pub type Result<T> = std::result::Result<T, FamilyGraphError>;
