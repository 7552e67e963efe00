//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the tree's structural rules.
/// Every variant is raised before any mutation takes place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("parent not found: {0}")]
    NotFound(String),

    #[error("tree already has a root, cannot add orphan node: {0}")]
    DuplicateRoot(String),

    #[error("node name already present: {0}")]
    DuplicateName(String),

    #[error("malformed layout at layer {layer}: {reason}")]
    ImportMalformed { layer: usize, reason: String },
}

impl DomainError {
    pub(crate) fn malformed(layer: usize, reason: impl Into<String>) -> Self {
        Self::ImportMalformed {
            layer,
            reason: reason.into(),
        }
    }
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
