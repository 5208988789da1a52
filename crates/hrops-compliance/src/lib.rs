//! # hrops-compliance: Data Sovereignty & Classification Engine
//!
//! Decides whether an operation on a tenant's data is permitted under the
//! tenant's data-residency zone and security classification, and explains
//! every reason it is not.
//!
//! - **Hierarchy** (`hierarchy.rs`): residency satisfaction table,
//!   classification ranks, and the MFA-required classification set.
//!
//! - **Heuristics** (`heuristics.rs`): coarse string tests classifying an
//!   originating address as UK or UK/EEA. Not geolocation.
//!
//! - **Evaluators** (`residency.rs`, `classification.rs`): the two rule
//!   families behind the [`ComplianceEvaluator`] seam. Both accumulate
//!   every applicable violation; neither short-circuits.
//!
//! - **Gate** (`gate.rs`): the composer that runs residency then
//!   classification, and the assertion that turns a failed composition
//!   into a [`RepositoryAuthorizationError`].
//!
//! - **Access** (`access.rs`): per-resource requirements declared by guard
//!   layers, with a resource-level MFA check.
//!
//! - **Report** (`report.rs`): administrator compliance reports graded
//!   from violation codes, dated by [`ComplianceConfig`].
//!
//! ## Flow
//!
//! ```text
//! AuthorizationContext ─┬─► ResidencyEvaluator ──────┐
//!                       └─► ClassificationEvaluator ─┤
//!                                                    ▼
//!                                 ComplianceValidationResult
//!                                   │                  │
//!                     assert_data_compliance   ComplianceReportBuilder
//!                                   │                  │
//!                   Err(RepositoryAuthorizationError)  SecurityComplianceReport
//! ```
//!
//! ## Crate Policy
//!
//! - Evaluation is pure and synchronous: no I/O, no clock reads, no
//!   shared mutable state. Safe to call from any thread.
//! - Violation message text is an audit contract and is byte-stable.
//! - No `.unwrap()` outside tests.

pub mod access;
pub mod classification;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod gate;
pub mod heuristics;
pub mod hierarchy;
pub mod report;
pub mod residency;
pub mod result;

pub use access::DataAccessRequirement;
pub use classification::{validate_data_classification, ClassificationEvaluator};
pub use config::ComplianceConfig;
pub use error::{
    ConfigError, RepositoryAuthorizationError, COMPLIANCE_FAILURE_PREFIX,
    DEFAULT_AUTHORIZATION_FAILED_MESSAGE,
};
pub use evaluator::{ComplianceEvaluator, ComplianceRequirements, DEFAULT_OPERATION_DESCRIPTION};
pub use gate::{
    assert_data_compliance, assert_requirements, evaluate_requirements, validate_data_compliance,
};
pub use heuristics::{is_uk_ip_address, is_uk_or_eea_ip_address};
pub use hierarchy::{
    classification_rank, is_classification_compliant, is_residency_compliant,
    requires_mfa_for_classification, satisfied_zones, MFA_REQUIRED_CLASSIFICATIONS,
};
pub use report::{
    ComplianceReportBuilder, ComplianceStatus, FindingCategory, FindingSeverity, FindingStatus,
    SecurityComplianceReport, SecurityFinding,
};
pub use residency::{validate_data_residency, ResidencyEvaluator};
pub use result::{ComplianceValidationResult, ComplianceViolation, ViolationCode};

pub use hrops_core::{AuthorizationContext, ResidencyZone, SecurityClassification};
