//! # Property Tests
//!
//! Algebraic properties of the hierarchies, the evaluators and the gate,
//! checked over arbitrary contexts.

use hrops_compliance::{
    assert_data_compliance, classification_rank, is_classification_compliant,
    is_residency_compliant, validate_data_classification, validate_data_compliance,
    validate_data_residency,
};
use hrops_core::{AuthorizationContext, OrgId, ResidencyZone, SecurityClassification, UserId};
use proptest::prelude::*;

fn zone() -> impl Strategy<Value = ResidencyZone> {
    prop::sample::select(ResidencyZone::all().to_vec())
}

fn classification() -> impl Strategy<Value = SecurityClassification> {
    prop::sample::select(SecurityClassification::all().to_vec())
}

fn ip_address() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("10.0.0.5".to_string())),
        Just(Some("8.8.8.8".to_string())),
        Just(Some("vpn.example.de".to_string())),
        Just(Some("office.example.co.uk".to_string())),
        "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}".prop_map(Some),
    ]
}

fn context() -> impl Strategy<Value = AuthorizationContext> {
    (
        classification(),
        zone(),
        any::<bool>(),
        any::<bool>(),
        ip_address(),
    )
        .prop_map(|(level, zone, verified, required, ip)| {
            let ctx = AuthorizationContext::new(
                OrgId::new("org-prop").unwrap(),
                UserId::new("user-prop").unwrap(),
                level,
                zone,
            )
            .with_mfa_verified(verified)
            .with_requires_mfa(required);
            match ip {
                Some(ip) => ctx.with_ip_address(ip),
                None => ctx,
            }
        })
}

proptest! {
    /// Every zone satisfies itself.
    #[test]
    fn residency_is_reflexive(z in zone()) {
        prop_assert!(is_residency_compliant(z, z));
    }

    /// Classification compliance is exactly rank ordering.
    #[test]
    fn classification_follows_rank(a in classification(), b in classification()) {
        prop_assert_eq!(
            is_classification_compliant(a, b),
            classification_rank(a) >= classification_rank(b)
        );
    }

    /// Evaluators hold no state between calls.
    #[test]
    fn evaluators_are_idempotent(
        ctx in context(),
        req_zone in prop::option::of(zone()),
        req_level in prop::option::of(classification()),
    ) {
        prop_assert_eq!(
            validate_data_residency(&ctx, req_zone, Some("op")),
            validate_data_residency(&ctx, req_zone, Some("op"))
        );
        prop_assert_eq!(
            validate_data_classification(&ctx, req_level, Some("op")),
            validate_data_classification(&ctx, req_level, Some("op"))
        );
    }

    /// The composer is residency output followed by classification output.
    #[test]
    fn composer_concatenates_evaluators(
        ctx in context(),
        req_zone in prop::option::of(zone()),
        req_level in prop::option::of(classification()),
    ) {
        let residency = validate_data_residency(&ctx, req_zone, None);
        let classification = validate_data_classification(&ctx, req_level, None);
        let combined = validate_data_compliance(&ctx, req_zone, req_level, None);

        let mut expected = residency.violations().to_vec();
        expected.extend_from_slice(classification.violations());
        prop_assert_eq!(combined.violations(), expected.as_slice());

        let mut remediation = residency.suggested_remediation().to_vec();
        remediation.extend_from_slice(classification.suggested_remediation());
        prop_assert_eq!(combined.suggested_remediation(), remediation.as_slice());

        prop_assert_eq!(combined.is_valid(), residency.is_valid() && classification.is_valid());
        prop_assert_eq!(combined.is_valid(), combined.violations().is_empty());
    }

    /// The gate fails exactly when the composer reports a violation.
    #[test]
    fn assertion_fails_iff_invalid(
        ctx in context(),
        req_zone in prop::option::of(zone()),
        req_level in prop::option::of(classification()),
    ) {
        let result = validate_data_compliance(&ctx, req_zone, req_level, None);
        match assert_data_compliance(&ctx, req_zone, req_level, None) {
            Ok(()) => prop_assert!(result.is_valid()),
            Err(err) => {
                prop_assert!(!result.is_valid());
                for message in result.violation_messages() {
                    prop_assert!(err.message().contains(message));
                }
                prop_assert_eq!(
                    err.message(),
                    format!("Data compliance validation failed: {}", result.joined_violations())
                );
            }
        }
    }

    /// An empty or absent address never produces an address violation.
    #[test]
    fn missing_address_is_not_evidence(
        level in classification(),
        z in zone(),
        empty in any::<bool>(),
    ) {
        let ctx = AuthorizationContext::new(
            OrgId::new("org-prop").unwrap(),
            UserId::new("user-prop").unwrap(),
            level,
            z,
        );
        let ctx = if empty { ctx.with_ip_address("") } else { ctx };
        let r = validate_data_residency(&ctx, None, None);
        prop_assert!(!r.violation_messages().any(|m| m.contains("IP address")));
    }
}
