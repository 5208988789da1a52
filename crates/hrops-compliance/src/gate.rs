//! # Compliance Composer & Assertion Gate
//!
//! [`validate_data_compliance`] runs the residency and classification
//! evaluators unconditionally, residency first, and concatenates their
//! output. [`assert_data_compliance`] turns a failed composition into a
//! [`RepositoryAuthorizationError`]; it is the only operation in the
//! engine that fails.
//!
//! Guard layers call the assertion before any read or write against
//! classified tenant data. Compliance report screens call the composer
//! directly to get the full breakdown.

use hrops_core::{AuthorizationContext, ResidencyZone, SecurityClassification};

use crate::classification::ClassificationEvaluator;
use crate::error::RepositoryAuthorizationError;
use crate::evaluator::{ComplianceEvaluator, ComplianceRequirements};
use crate::residency::ResidencyEvaluator;
use crate::result::ComplianceValidationResult;

/// Evaluators run by the composer, in output order.
static EVALUATORS: [&dyn ComplianceEvaluator; 2] = [&ResidencyEvaluator, &ClassificationEvaluator];

/// Validate both residency and classification requirements.
pub fn validate_data_compliance(
    context: &AuthorizationContext,
    required_residency: Option<ResidencyZone>,
    required_classification: Option<SecurityClassification>,
    operation: Option<&str>,
) -> ComplianceValidationResult {
    let requirements = ComplianceRequirements::from_options(
        required_residency,
        required_classification,
        operation,
    );
    evaluate_requirements(context, &requirements)
}

/// Composer entry point taking bundled requirements.
pub fn evaluate_requirements(
    context: &AuthorizationContext,
    requirements: &ComplianceRequirements,
) -> ComplianceValidationResult {
    EVALUATORS
        .iter()
        .fold(ComplianceValidationResult::valid(), |acc, evaluator| {
            let result = evaluator.evaluate(context, requirements);
            tracing::trace!(
                evaluator = evaluator.name(),
                violation_count = result.violations().len(),
                "evaluator finished"
            );
            acc.merge(result)
        })
}

/// Fail if the operation violates residency or classification policy.
///
/// # Errors
///
/// Returns [`RepositoryAuthorizationError`] carrying every violation when
/// [`validate_data_compliance`] reports the context invalid.
pub fn assert_data_compliance(
    context: &AuthorizationContext,
    required_residency: Option<ResidencyZone>,
    required_classification: Option<SecurityClassification>,
    operation: Option<&str>,
) -> Result<(), RepositoryAuthorizationError> {
    let requirements = ComplianceRequirements::from_options(
        required_residency,
        required_classification,
        operation,
    );
    assert_requirements(context, &requirements)
}

/// Assertion gate taking bundled requirements.
///
/// # Errors
///
/// Returns [`RepositoryAuthorizationError`] when any evaluator reports a
/// violation.
pub fn assert_requirements(
    context: &AuthorizationContext,
    requirements: &ComplianceRequirements,
) -> Result<(), RepositoryAuthorizationError> {
    check_result(context, &requirements.operation, evaluate_requirements(context, requirements))
}

/// Log and convert a composed result into the gate outcome.
pub(crate) fn check_result(
    context: &AuthorizationContext,
    operation: &str,
    result: ComplianceValidationResult,
) -> Result<(), RepositoryAuthorizationError> {
    let correlation_id = context
        .correlation_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    if result.is_valid() {
        tracing::debug!(
            org_id = %context.org_id,
            user_id = %context.user_id,
            correlation_id = %correlation_id,
            operation,
            "data compliance validation passed"
        );
        return Ok(());
    }

    let codes: Vec<&'static str> = result.codes().map(|c| c.as_str()).collect();
    tracing::warn!(
        org_id = %context.org_id,
        user_id = %context.user_id,
        correlation_id = %correlation_id,
        operation,
        classification = %context.data_classification,
        residency = %context.data_residency,
        violation_count = codes.len(),
        codes = ?codes,
        "data compliance validation failed"
    );
    Err(RepositoryAuthorizationError::from_result(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ViolationCode;
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
    fn composer_runs_residency_before_classification() {
        let c = ctx(SecurityClassification::Secret, ResidencyZone::GlobalRestricted)
            .with_mfa_verified(true)
            .with_requires_mfa(true);
        let r = validate_data_compliance(&c, None, None, None);
        assert_eq!(
            r.codes().collect::<Vec<_>>(),
            vec![
                ViolationCode::HighlyClassifiedInGlobalZone,
                ViolationCode::SecretInGlobalZone,
            ]
        );
    }

    #[test]
    fn composer_does_not_short_circuit() {
        let c = ctx(SecurityClassification::Official, ResidencyZone::UkOnly)
            .with_ip_address("8.8.8.8");
        let r = validate_data_compliance(
            &c,
            Some(ResidencyZone::UkAndEea),
            Some(SecurityClassification::Secret),
            Some("bulk export"),
        );
        assert!(!r.is_valid());
        assert!(r.has_code(ViolationCode::ResidencyRequirementUnmet));
        assert!(r.has_code(ViolationCode::UkOnlyIpOutsideUk));
        assert!(r.has_code(ViolationCode::ClassificationBelowRequired));
        assert_eq!(r.violations().len(), 3);
        assert_eq!(r.suggested_remediation().len(), 3);
    }

    #[test]
    fn compliant_context_passes_gate() {
        let c = ctx(SecurityClassification::Official, ResidencyZone::UkOnly)
            .with_ip_address("10.0.0.5");
        assert!(validate_data_compliance(&c, None, None, None).is_valid());
        assert!(assert_data_compliance(&c, None, None, None).is_ok());
    }

    #[test]
    fn gate_error_carries_joined_message() {
        let c = ctx(SecurityClassification::TopSecret, ResidencyZone::UkAndEea);
        let result = validate_data_compliance(&c, None, None, None);
        let err = assert_data_compliance(&c, None, None, None).unwrap_err();
        assert_eq!(
            err.message(),
            format!("Data compliance validation failed: {}", result.joined_violations())
        );
        assert_eq!(err.violations(), result.violations());
    }

    #[test]
    fn bundled_requirements_match_positional_form() {
        let c = ctx(SecurityClassification::Official, ResidencyZone::UkAndEea);
        let req = ComplianceRequirements::new()
            .with_residency(ResidencyZone::GlobalRestricted)
            .with_operation("sync to analytics");
        assert_eq!(
            evaluate_requirements(&c, &req),
            validate_data_compliance(
                &c,
                Some(ResidencyZone::GlobalRestricted),
                None,
                Some("sync to analytics")
            )
        );
        assert!(assert_requirements(&c, &req).is_err());
    }
}
