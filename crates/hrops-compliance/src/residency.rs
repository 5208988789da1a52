//! # Residency Evaluator
//!
//! Two independent checks, both always run:
//!
//! 1. If the operation requires a zone, the tenant's current zone must
//!    satisfy it (see [`crate::hierarchy`]).
//! 2. Zone-specific rules keyed on the tenant's current zone: the
//!    originating address for `UK_ONLY` and `UK_AND_EEA`, and the data's
//!    classification for `GLOBAL_RESTRICTED`.
//!
//! An empty or missing IP address is not evidence of a violation.

use hrops_core::{AuthorizationContext, ResidencyZone, SecurityClassification};

use crate::evaluator::{ComplianceEvaluator, ComplianceRequirements};
use crate::heuristics::{is_uk_ip_address, is_uk_or_eea_ip_address, UK_MARKER};
use crate::hierarchy::is_residency_compliant;
use crate::result::{ComplianceValidationResult, ViolationCode, ViolationLog};

/// Residency rule family.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResidencyEvaluator;

impl ComplianceEvaluator for ResidencyEvaluator {
    fn name(&self) -> &'static str {
        "residency"
    }

    fn evaluate(
        &self,
        context: &AuthorizationContext,
        requirements: &ComplianceRequirements,
    ) -> ComplianceValidationResult {
        let mut log = ViolationLog::new();
        let current = context.data_residency;

        if let Some(required) = requirements.required_residency {
            if !is_residency_compliant(current, required) {
                log.record(
                    ViolationCode::ResidencyRequirementUnmet,
                    format!(
                        "Data residency violation: Operation '{}' requires {required} but current residency is {current}",
                        requirements.operation
                    ),
                    format!(
                        "Move data to compliant region ({required}) or adjust operational requirements"
                    ),
                );
            }
        }

        let ip = context.ip_address_or_empty();
        match current {
            ResidencyZone::UkOnly => {
                if !ip.is_empty() && !ip.contains(UK_MARKER) && !is_uk_ip_address(ip) {
                    log.record(
                        ViolationCode::UkOnlyIpOutsideUk,
                        format!(
                            "UK-only residency violation: Operation initiated from non-UK IP address {ip}"
                        ),
                        "Ensure operations are performed from UK-based systems",
                    );
                }
            }
            ResidencyZone::UkAndEea => {
                if !ip.is_empty() && !is_uk_or_eea_ip_address(ip) {
                    log.record(
                        ViolationCode::UkEeaIpOutsideRegion,
                        format!(
                            "UK-EEA residency violation: Operation initiated from non-UK/EEA IP address {ip}"
                        ),
                        "Ensure operations are performed from UK or EEA-based systems",
                    );
                }
            }
            ResidencyZone::GlobalRestricted => {
                let classification = context.data_classification;
                if matches!(
                    classification,
                    SecurityClassification::Secret | SecurityClassification::TopSecret
                ) {
                    log.record(
                        ViolationCode::HighlyClassifiedInGlobalZone,
                        format!(
                            "Global restricted residency violation: Highly classified data ({classification}) should not be processed in GLOBAL_RESTRICTED zone"
                        ),
                        "Move highly classified data to more restrictive residency zone",
                    );
                }
            }
        }

        log.finish()
    }
}

/// Validate residency requirements for an operation.
///
/// `operation` defaults to `"data operation"` and is used only in
/// message text.
pub fn validate_data_residency(
    context: &AuthorizationContext,
    required_residency: Option<ResidencyZone>,
    operation: Option<&str>,
) -> ComplianceValidationResult {
    let requirements = ComplianceRequirements::from_options(required_residency, None, operation);
    ResidencyEvaluator.evaluate(context, &requirements)
}
