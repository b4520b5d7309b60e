//! Error types for catalog construction and lookup.

use thiserror::Error;

/// Errors raised while building or querying a project catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Identifier was blank after trimming.
    #[error("Invalid project ID: {0:?}")]
    InvalidProjectId(String),

    /// Two records share the same identifier.
    #[error("Duplicate project ID: {0}")]
    DuplicateId(String),

    /// No record with the requested identifier exists.
    #[error("Project not found: {0}")]
    UnknownProject(String),
}
