//! # Error Hierarchy
//!
//! Structured error types for the platform primitives, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Validation errors carry the rejected input so that operators can diagnose
//! a malformed upstream snapshot without guesswork.

use thiserror::Error;

/// Top-level error type for `hrops-core`.
///
/// Constructors of individual primitives return [`ValidationError`]
/// directly; inside a JSON snapshot the same failures surface as
/// [`CoreError::Json`].
#[derive(Error, Debug)]
pub enum CoreError {
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for domain primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Organization identifier is empty.
    #[error("invalid organization ID: must be non-empty")]
    InvalidOrgId,

    /// User identifier is empty.
    #[error("invalid user ID: must be non-empty")]
    InvalidUserId,

    /// String is not one of the four classification levels.
    #[error("unknown security classification: \"{0}\" (expected OFFICIAL, OFFICIAL_SENSITIVE, SECRET or TOP_SECRET)")]
    UnknownClassification(String),

    /// String is not one of the three residency zones.
    #[error("unknown residency zone: \"{0}\" (expected UK_ONLY, UK_AND_EEA or GLOBAL_RESTRICTED)")]
    UnknownResidencyZone(String),
}
