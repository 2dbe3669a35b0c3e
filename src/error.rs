//! Error types.
//!
//! Timeline computations never fail; only building a catalog from
//! external data can.

use thiserror::Error;

/// Result type for catalog construction.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while building an [`ArchetypeCatalog`](crate::catalog::ArchetypeCatalog).
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two archetypes share an id.
    #[error("Duplicate archetype ID: {0}")]
    DuplicateId(String),

    /// An archetype has no stints.
    #[error("Archetype '{0}' has an empty stint pattern")]
    EmptyPattern(String),

    /// The table could not be parsed.
    #[error("Invalid archetype table: {0}")]
    Json(#[from] serde_json::Error),
}
