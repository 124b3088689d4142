//! Error handling module for planwright
//!
//! Domain errors live next to their types ([`CatalogError`] in the catalog,
//! [`SelectionError`] in the selection). This module wraps them together with
//! I/O and parse failures into one crate-level error for callers that do not
//! care which layer failed.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::selection::SelectionError;

/// Main error type for planwright
#[derive(Error, Debug)]
pub enum PlanwrightError {
    /// IO errors (catalog files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog or template registry integrity faults
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Rejected selection operations
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    /// Validation errors (user input such as operation strings)
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for planwright operations
pub type Result<T> = std::result::Result<T, PlanwrightError>;

impl PlanwrightError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True when the error signals corrupt catalog data rather than a
    /// caller mistake.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Selection(e) => e.is_fatal(),
            Self::Catalog(CatalogError::Cycle { .. }) => true,
            _ => false,
        }
    }
}
