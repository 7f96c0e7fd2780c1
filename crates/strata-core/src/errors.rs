//! Error types for the Strata engine.

use thiserror::Error;

/// Top-level error type for the Strata engine.
#[derive(Debug, Error)]
pub enum StrataError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Structural problems with a foundation bundle.
///
/// Leaf values (hex strings, CSS lengths) are never checked here; only the
/// shape the encoders rely on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Malformed foundation bundle: {0}")]
    Malformed(String),

    #[error("Duplicate color group id: {id}")]
    DuplicateGroupId { id: String },

    #[error("Empty name in {category} at position {index}")]
    EmptyName { category: String, index: usize },

    #[error("Invalid column count for {context}: {count} (must be at least 1)")]
    InvalidColumnCount { context: String, count: u32 },

    #[error("Unknown foundation category: {name}")]
    UnknownCategory { name: String },
}

/// Errors during token export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Invalid foundation bundle: {0}")]
    InvalidBundle(#[from] ModelError),

    #[error("Serialization failed: {reason}")]
    Serialize { reason: String },
}
