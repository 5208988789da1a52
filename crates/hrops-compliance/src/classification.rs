//! # Classification Evaluator
//!
//! Checks the operation's minimum classification, then layers on the rules
//! attached to the tenant's own classification level:
//!
//! | Level | Rules |
//! |-------|-------|
//! | `OFFICIAL` | MFA not verified, only if the MFA table lists `OFFICIAL` |
//! | `OFFICIAL_SENSITIVE` | MFA not verified; MFA requirement not set on context |
//! | `SECRET` | as above, plus not in `GLOBAL_RESTRICTED` |
//! | `TOP_SECRET` | as above, plus only in `UK_ONLY` |
//!
//! Every rule in a row is independent and all of them append to the same
//! log; one context can produce several violations.

use hrops_core::{AuthorizationContext, ResidencyZone, SecurityClassification};

use crate::evaluator::{ComplianceEvaluator, ComplianceRequirements};
use crate::hierarchy::{is_classification_compliant, requires_mfa_for_classification};
use crate::result::{ComplianceValidationResult, ViolationCode, ViolationLog};

/// Classification rule family, including MFA-per-classification checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassificationEvaluator;

impl ComplianceEvaluator for ClassificationEvaluator {
    fn name(&self) -> &'static str {
        "classification"
    }

    fn evaluate(
        &self,
        context: &AuthorizationContext,
        requirements: &ComplianceRequirements,
    ) -> ComplianceValidationResult {
        let mut log = ViolationLog::new();
        let current = context.data_classification;

        if let Some(required) = requirements.required_classification {
            if !is_classification_compliant(current, required) {
                log.record(
                    ViolationCode::ClassificationBelowRequired,
                    format!(
                        "Data classification violation: Operation '{}' requires minimum {required} but current classification is {current}",
                        requirements.operation
                    ),
                    format!(
                        "Apply appropriate security controls for {required} classification or adjust operational requirements"
                    ),
                );
            }
        }

        record_classification_rules(context, &mut log);
        log.finish()
    }
}

fn record_classification_rules(context: &AuthorizationContext, log: &mut ViolationLog) {
    let level = context.data_classification;
    match level {
        SecurityClassification::Official => {
            // Unreachable while the MFA table excludes OFFICIAL.
            if !context.mfa_verified && requires_mfa_for_classification(level) {
                record_mfa_not_verified(level, log);
            }
        }
        SecurityClassification::OfficialSensitive => {
            record_mfa_rules(context, log);
        }
        SecurityClassification::Secret => {
            record_mfa_rules(context, log);
            if context.data_residency == ResidencyZone::GlobalRestricted {
                log.record(
                    ViolationCode::SecretInGlobalZone,
                    "SECRET classification violation: SECRET data should not be stored in GLOBAL_RESTRICTED residency zone",
                    "Move SECRET data to more restrictive residency zone (UK_ONLY or UK_AND_EEA)",
                );
            }
        }
        SecurityClassification::TopSecret => {
            record_mfa_rules(context, log);
            if context.data_residency != ResidencyZone::UkOnly {
                log.record(
                    ViolationCode::TopSecretOutsideUkOnly,
                    format!(
                        "TOP_SECRET classification violation: TOP_SECRET data must be stored in UK_ONLY residency zone but is in {}",
                        context.data_residency
                    ),
                    "Move TOP_SECRET data to UK_ONLY residency zone",
                );
            }
        }
    }
}

/// Verification and configuration MFA rules shared by the upper levels.
fn record_mfa_rules(context: &AuthorizationContext, log: &mut ViolationLog) {
    let level = context.data_classification;
    if !context.mfa_verified {
        record_mfa_not_verified(level, log);
    }
    if !context.requires_mfa {
        log.record(
            ViolationCode::MfaRequirementNotSet,
            format!(
                "{level} classification violation: MFA requirement not properly set for {level} data access"
            ),
            format!("Ensure MFA is required for {level} data access"),
        );
    }
}

fn record_mfa_not_verified(level: SecurityClassification, log: &mut ViolationLog) {
    log.record(
        ViolationCode::MfaNotVerified,
        format!(
            "{level} classification violation: MFA required for access to {level} data but not verified"
        ),
        format!("Enable and verify MFA for access to {level} data"),
    );
}

/// Validate classification requirements for an operation.
///
/// `operation` defaults to `"data operation"` and is used only in
/// message text.
pub fn validate_data_classification(
    context: &AuthorizationContext,
    required_classification: Option<SecurityClassification>,
    operation: Option<&str>,
) -> ComplianceValidationResult {
    let requirements =
        ComplianceRequirements::from_options(None, required_classification, operation);
    ClassificationEvaluator.evaluate(context, &requirements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrops_core::{OrgId, UserId};

    fn ctx(level: SecurityClassification, zone: ResidencyZone) -> AuthorizationContext {
        AuthorizationContext::new(
            OrgId::new("org-1").unwrap(),
            UserId::new("user-1").unwrap(),
            level,
            zone,
        )
    }

    #[test]
    fn official_without_mfa_is_valid() {
        let c = ctx(SecurityClassification::Official, ResidencyZone::GlobalRestricted);
        let r = validate_data_classification(&c, None, None);
        assert!(r.is_valid());
    }

    #[test]
    fn official_sensitive_reports_both_mfa_violations() {
        let c = ctx(SecurityClassification::OfficialSensitive, ResidencyZone::UkOnly);
        let r = validate_data_classification(&c, None, None);
        let messages: Vec<_> = r.violation_messages().collect();
        assert_eq!(
            messages,
            vec![
                "OFFICIAL_SENSITIVE classification violation: MFA required for access to OFFICIAL_SENSITIVE data but not verified",
                "OFFICIAL_SENSITIVE classification violation: MFA requirement not properly set for OFFICIAL_SENSITIVE data access",
            ]
        );
        assert_eq!(
            r.suggested_remediation(),
            &[
                "Enable and verify MFA for access to OFFICIAL_SENSITIVE data",
                "Ensure MFA is required for OFFICIAL_SENSITIVE data access",
            ]
        );
    }

    #[test]
    fn verified_but_unflagged_is_a_configuration_violation_only() {
        let c = ctx(SecurityClassification::OfficialSensitive, ResidencyZone::UkOnly)
            .with_mfa_verified(true);
        let r = validate_data_classification(&c, None, None);
        assert_eq!(r.codes().collect::<Vec<_>>(), vec![ViolationCode::MfaRequirementNotSet]);
    }

    #[test]
    fn secret_in_global_zone_with_mfa_has_single_violation() {
        let c = ctx(SecurityClassification::Secret, ResidencyZone::GlobalRestricted)
            .with_mfa_verified(true)
            .with_requires_mfa(true);
        let r = validate_data_classification(&c, None, None);
        assert_eq!(r.codes().collect::<Vec<_>>(), vec![ViolationCode::SecretInGlobalZone]);
        assert_eq!(
            r.suggested_remediation(),
            &["Move SECRET data to more restrictive residency zone (UK_ONLY or UK_AND_EEA)"]
        );
    }

    #[test]
    fn secret_in_uk_and_eea_with_mfa_is_valid() {
        let c = ctx(SecurityClassification::Secret, ResidencyZone::UkAndEea)
            .with_mfa_verified(true)
            .with_requires_mfa(true);
        assert!(validate_data_classification(&c, None, None).is_valid());
    }

    #[test]
    fn top_secret_outside_uk_only_reports_three_violations() {
        let c = ctx(SecurityClassification::TopSecret, ResidencyZone::UkAndEea);
        let r = validate_data_classification(&c, None, None);
        assert_eq!(
            r.codes().collect::<Vec<_>>(),
            vec![
                ViolationCode::MfaNotVerified,
                ViolationCode::MfaRequirementNotSet,
                ViolationCode::TopSecretOutsideUkOnly,
            ]
        );
        assert_eq!(
            r.violations()[2].message,
            "TOP_SECRET classification violation: TOP_SECRET data must be stored in UK_ONLY residency zone but is in UK_AND_EEA"
        );
    }

    #[test]
    fn top_secret_in_uk_only_with_mfa_is_valid() {
        let c = ctx(SecurityClassification::TopSecret, ResidencyZone::UkOnly)
            .with_mfa_verified(true)
            .with_requires_mfa(true);
        assert!(validate_data_classification(&c, None, None).is_valid());
    }

    #[test]
    fn required_classification_mismatch_reports_operation() {
        let c = ctx(SecurityClassification::Official, ResidencyZone::UkOnly);
        let r = validate_data_classification(
            &c,
            Some(SecurityClassification::Secret),
            Some("view disciplinary record"),
        );
        assert_eq!(
            r.violations()[0].message,
            "Data classification violation: Operation 'view disciplinary record' requires minimum SECRET but current classification is OFFICIAL"
        );
        assert_eq!(
            r.suggested_remediation()[0],
            "Apply appropriate security controls for SECRET classification or adjust operational requirements"
        );
    }

    #[test]
    fn higher_classification_meets_lower_requirement() {
        let c = ctx(SecurityClassification::Secret, ResidencyZone::UkOnly)
            .with_mfa_verified(true)
            .with_requires_mfa(true);
        let r = validate_data_classification(&c, Some(SecurityClassification::Official), None);
        assert!(r.is_valid());
    }
}
