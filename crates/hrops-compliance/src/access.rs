//! # Resource Data-Access Requirements
//!
//! Guard layers declare a [`DataAccessRequirement`] per resource and action
//! (e.g. `read` on `disciplinary_records`). Evaluating it runs the full
//! composer with the operation named `"{action} {resource}"`, then adds a
//! resource-level MFA check on top of the classification-driven ones.

use hrops_core::{AuthorizationContext, ResidencyZone, SecurityClassification};
use serde::{Deserialize, Serialize};

use crate::error::RepositoryAuthorizationError;
use crate::evaluator::ComplianceRequirements;
use crate::gate::{check_result, evaluate_requirements};
use crate::result::{ComplianceValidationResult, ViolationCode, ViolationLog};

/// Compliance constraints attached to one resource action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataAccessRequirement {
    pub resource: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_classification: Option<SecurityClassification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_residency: Option<ResidencyZone>,
    /// Demand a verified MFA session regardless of data classification.
    #[serde(default)]
    pub requires_mfa: bool,
    /// Informational for the audit pipeline; does not affect evaluation.
    #[serde(default)]
    pub audit_required: bool,
}

impl DataAccessRequirement {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
            required_classification: None,
            required_residency: None,
            requires_mfa: false,
            audit_required: false,
        }
    }

    pub fn with_classification(mut self, level: SecurityClassification) -> Self {
        self.required_classification = Some(level);
        self
    }

    pub fn with_residency(mut self, zone: ResidencyZone) -> Self {
        self.required_residency = Some(zone);
        self
    }

    pub fn with_requires_mfa(mut self, required: bool) -> Self {
        self.requires_mfa = required;
        self
    }

    pub fn with_audit_required(mut self, required: bool) -> Self {
        self.audit_required = required;
        self
    }

    /// Operation description used in violation messages.
    pub fn operation(&self) -> String {
        format!("{} {}", self.action, self.resource)
    }

    /// The composer inputs this requirement translates to.
    pub fn requirements(&self) -> ComplianceRequirements {
        ComplianceRequirements {
            required_residency: self.required_residency,
            required_classification: self.required_classification,
            operation: self.operation(),
        }
    }

    /// Composer result plus the resource-level MFA check.
    pub fn evaluate(&self, context: &AuthorizationContext) -> ComplianceValidationResult {
        let composed = evaluate_requirements(context, &self.requirements());

        let mut log = ViolationLog::new();
        if self.requires_mfa && !context.mfa_verified {
            log.record(
                ViolationCode::MfaRequiredForResource,
                format!(
                    "MFA verification required for {} on {}",
                    self.action, self.resource
                ),
                format!(
                    "Verify MFA before performing {} on {}",
                    self.action, self.resource
                ),
            );
        }
        composed.merge(log.finish())
    }

    /// Fail unless [`evaluate`](Self::evaluate) reports the context valid.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryAuthorizationError`] carrying every violation.
    pub fn assert(
        &self,
        context: &AuthorizationContext,
    ) -> Result<(), RepositoryAuthorizationError> {
        check_result(context, &self.operation(), self.evaluate(context))
    }
}
