//! # Evaluator Seam
//!
//! The [`ComplianceEvaluator`] trait and the optional inputs every
//! evaluator receives. Evaluators are pure: same context and requirements
//! in, structurally identical result out. They never fail; a policy breach
//! is data in the returned [`ComplianceValidationResult`].

use hrops_core::{AuthorizationContext, ResidencyZone, SecurityClassification};
use serde::{Deserialize, Serialize};

use crate::result::ComplianceValidationResult;

/// Operation description used in messages when the caller supplies none.
pub const DEFAULT_OPERATION_DESCRIPTION: &str = "data operation";

/// Optional constraints an operation places on the tenant's data.
///
/// An absent requirement means "no additional constraint requested" and
/// the corresponding check is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceRequirements {
    pub required_residency: Option<ResidencyZone>,
    pub required_classification: Option<SecurityClassification>,
    /// Human-readable operation name, used only in message text.
    pub operation: String,
}

impl ComplianceRequirements {
    /// No constraints, default operation description.
    pub fn new() -> Self {
        Self {
            required_residency: None,
            required_classification: None,
            operation: DEFAULT_OPERATION_DESCRIPTION.to_string(),
        }
    }

    pub fn with_residency(mut self, zone: ResidencyZone) -> Self {
        self.required_residency = Some(zone);
        self
    }

    pub fn with_classification(mut self, level: SecurityClassification) -> Self {
        self.required_classification = Some(level);
        self
    }

    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = operation.into();
        self
    }

    pub(crate) fn from_options(
        required_residency: Option<ResidencyZone>,
        required_classification: Option<SecurityClassification>,
        operation: Option<&str>,
    ) -> Self {
        Self {
            required_residency,
            required_classification,
            operation: operation
                .unwrap_or(DEFAULT_OPERATION_DESCRIPTION)
                .to_string(),
        }
    }
}

impl Default for ComplianceRequirements {
    fn default() -> Self {
        Self::new()
    }
}

/// A rule family that inspects an authorization context.
pub trait ComplianceEvaluator: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Evaluate the context against this rule family.
    fn evaluate(
        &self,
        context: &AuthorizationContext,
        requirements: &ComplianceRequirements,
    ) -> ComplianceValidationResult;
}
