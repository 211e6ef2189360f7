//! Error types for HCL document rendering

use thiserror::Error;

/// Result type for HCL operations
pub type Result<T> = std::result::Result<T, HclError>;

/// Errors that can occur while building or rendering a document
#[derive(Debug, Error, PartialEq)]
pub enum HclError {
    /// Attribute key, block type or traversal segment is not a valid identifier
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Traversal expression without any segment
    #[error("Empty traversal expression")]
    EmptyTraversal,

    /// NaN or infinite number, which HCL cannot represent
    #[error("Non-finite number in attribute {key}")]
    NonFiniteNumber {
        /// Attribute that carried the number
        key: String,
    },

    /// The `hcl-rs` formatter rejected the document
    #[error("HCL formatting failed: {0}")]
    Format(String),
}
