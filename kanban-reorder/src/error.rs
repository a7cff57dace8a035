//! Error types for the reorder engine

use std::path::PathBuf;
use thiserror::Error;

/// Result type for reorder engine operations
pub type Result<T> = std::result::Result<T, ReorderError>;

/// Errors that can occur outside the drag path.
///
/// Drag handling itself never fails: misses and malformed events are reported as
/// [`crate::DragOutcome`] values instead.
#[derive(Debug, Error)]
pub enum ReorderError {
    /// Container not found
    #[error("container not found: {id}")]
    ContainerNotFound { id: String },

    /// Item not found
    #[error("item not found: {id}")]
    ItemNotFound { id: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// No persisted board for the given user
    #[error("no stored board at {path}")]
    NotStored { path: PathBuf },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReorderError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// Check if this error means the board broke one of its structural invariants.
    ///
    /// These come from collaborator misuse (id collisions, foreign ids) and are
    /// not recoverable by retrying the same input.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::DuplicateId { .. } | Self::InvalidValue { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReorderError::ContainerNotFound {
            id: "container-abc".into(),
        };
        assert_eq!(err.to_string(), "container not found: container-abc");
    }

    #[test]
    fn test_missing_field() {
        let err = ReorderError::missing_field("title");
        assert_eq!(err.to_string(), "missing required field: title");
    }

    #[test]
    fn test_invariant_violation() {
        assert!(ReorderError::duplicate_id("item", "item-1").is_invariant_violation());
        assert!(!ReorderError::ItemNotFound { id: "x".into() }.is_invariant_violation());
        assert!(!ReorderError::missing_field("title").is_invariant_violation());
    }
}
