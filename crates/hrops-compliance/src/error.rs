//! # Error Types
//!
//! [`RepositoryAuthorizationError`] is the only failure the engine raises,
//! and only from the assertion gate. It always carries the full violation
//! detail; redacting that detail for end users is the caller's job, with
//! [`RepositoryAuthorizationError::user_message`] as the generic text.

use thiserror::Error;

use crate::result::{ComplianceValidationResult, ComplianceViolation};

/// Generic denial text safe to show to any end user.
pub const DEFAULT_AUTHORIZATION_FAILED_MESSAGE: &str = "Authorization failed.";

/// Prefix of every assertion failure message.
pub const COMPLIANCE_FAILURE_PREFIX: &str = "Data compliance validation failed: ";

/// A tenant-data operation was denied by the compliance gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RepositoryAuthorizationError {
    message: String,
    violations: Vec<ComplianceViolation>,
    suggested_remediation: Vec<String>,
}

impl RepositoryAuthorizationError {
    /// Build the denial for a failed validation result.
    pub fn from_result(result: ComplianceValidationResult) -> Self {
        let message = format!("{COMPLIANCE_FAILURE_PREFIX}{}", result.joined_violations());
        let (violations, suggested_remediation) = result.into_parts();
        Self {
            message,
            violations,
            suggested_remediation,
        }
    }

    /// Full message: prefix plus every violation joined with `"; "`.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn violations(&self) -> &[ComplianceViolation] {
        &self.violations
    }

    pub fn suggested_remediation(&self) -> &[String] {
        &self.suggested_remediation
    }

    /// Text for end users who must not see the violation detail.
    pub fn user_message(&self) -> &'static str {
        DEFAULT_AUTHORIZATION_FAILED_MESSAGE
    }
}

/// Errors loading [`crate::config::ComplianceConfig`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but is not a whole number of days in range.
    #[error("invalid value for {var}: \"{value}\" (expected 1 to 36500 days)")]
    InvalidValue {
        /// The environment variable name.
        var: String,
        /// The rejected raw value.
        value: String,
    },
}
