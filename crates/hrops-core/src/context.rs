//! # Authorization Context
//!
//! [`AuthorizationContext`] is the per-request snapshot of actor identity,
//! tenant scope, classification, residency and MFA state. It is built by
//! the upstream session/permission layer and handed to the compliance
//! engine fully populated; the engine reads it and never mutates it.
//!
//! Two MFA fields exist and they mean different things:
//!
//! - `mfa_verified`: the actor has completed an MFA challenge.
//! - `requires_mfa`: the policy layer marked this request as one that
//!   must be MFA-protected. It is a configuration fact, not a
//!   verification fact.
//!
//! The serde form is camelCase so that JSON snapshots produced by the
//! session layer deserialize without a mapping step.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classification::{ResidencyZone, SecurityClassification};
use crate::error::CoreError;
use crate::identity::{CorrelationId, OrgId, UserId};

/// Resource name to granted actions, e.g. `"employees" -> ["read"]`.
pub type PermissionMap = BTreeMap<String, Vec<String>>;

/// Read-only snapshot of the acting principal and the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationContext {
    /// Tenant the request operates on.
    pub org_id: OrgId,
    /// Acting principal.
    pub user_id: UserId,
    /// Role key resolved by the permission layer (`"custom"` for ad-hoc roles).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_key: Option<String>,
    /// Permissions granted to the principal within the tenant.
    #[serde(default)]
    pub permissions: PermissionMap,
    /// Classification of the tenant's data.
    pub data_classification: SecurityClassification,
    /// Residency zone the tenant's data currently lives in.
    pub data_residency: ResidencyZone,
    /// Whether the actor has completed MFA.
    #[serde(default)]
    pub mfa_verified: bool,
    /// Whether policy declared this request MFA-protected.
    #[serde(default)]
    pub requires_mfa: bool,
    /// Whether the request touches personally identifiable information.
    #[serde(default)]
    pub pii_access_required: bool,
    /// Whether the request carries elevated data-breach risk.
    #[serde(default)]
    pub data_breach_risk: bool,
    /// Originating address, free text. Absent or empty means "unknown".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<CorrelationId>,
}

impl AuthorizationContext {
    /// Create a context with the mandatory fields set and every flag off.
    pub fn new(
        org_id: OrgId,
        user_id: UserId,
        data_classification: SecurityClassification,
        data_residency: ResidencyZone,
    ) -> Self {
        Self {
            org_id,
            user_id,
            role_key: None,
            permissions: PermissionMap::new(),
            data_classification,
            data_residency,
            mfa_verified: false,
            requires_mfa: false,
            pii_access_required: false,
            data_breach_risk: false,
            ip_address: None,
            user_agent: None,
            authenticated_at: None,
            session_expires_at: None,
            correlation_id: None,
        }
    }

    /// Deserialize a snapshot produced by the session layer.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Json`] for malformed JSON, unknown enum values
    /// or blank identifiers.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_role_key(mut self, role_key: impl Into<String>) -> Self {
        self.role_key = Some(role_key.into());
        self
    }

    pub fn with_permissions(mut self, permissions: PermissionMap) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn with_mfa_verified(mut self, verified: bool) -> Self {
        self.mfa_verified = verified;
        self
    }

    pub fn with_requires_mfa(mut self, required: bool) -> Self {
        self.requires_mfa = required;
        self
    }

    pub fn with_pii_access_required(mut self, required: bool) -> Self {
        self.pii_access_required = required;
        self
    }

    pub fn with_data_breach_risk(mut self, risk: bool) -> Self {
        self.data_breach_risk = risk;
        self
    }

    pub fn with_ip_address(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_session_window(
        mut self,
        authenticated_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        self.authenticated_at = Some(authenticated_at);
        self.session_expires_at = Some(expires_at);
        self
    }

    pub fn with_correlation_id(mut self, id: CorrelationId) -> Self {
        self.correlation_id = Some(id);
        self
    }

    /// The originating address, or `""` when unknown.
    pub fn ip_address_or_empty(&self) -> &str {
        self.ip_address.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> AuthorizationContext {
        AuthorizationContext::new(
            OrgId::new("org-1").unwrap(),
            UserId::new("user-1").unwrap(),
            SecurityClassification::Official,
            ResidencyZone::UkOnly,
        )
    }

    #[test]
    fn new_context_has_all_flags_off() {
        let ctx = base();
        assert!(!ctx.mfa_verified);
        assert!(!ctx.requires_mfa);
        assert!(!ctx.pii_access_required);
        assert!(!ctx.data_breach_risk);
        assert!(ctx.ip_address.is_none());
        assert_eq!(ctx.ip_address_or_empty(), "");
    }

    #[test]
    fn builder_sets_fields() {
        let cid = CorrelationId::new();
        let ctx = base()
            .with_role_key("hrAdmin")
            .with_mfa_verified(true)
            .with_requires_mfa(true)
            .with_ip_address("10.0.0.5")
            .with_user_agent("test-agent")
            .with_correlation_id(cid);
        assert_eq!(ctx.role_key.as_deref(), Some("hrAdmin"));
        assert!(ctx.mfa_verified);
        assert!(ctx.requires_mfa);
        assert_eq!(ctx.ip_address_or_empty(), "10.0.0.5");
        assert_eq!(ctx.correlation_id, Some(cid));
    }

    #[test]
    fn from_json_accepts_camel_case_snapshot() {
        let json = r#"{
            "orgId": "org-42",
            "userId": "user-7",
            "roleKey": "member",
            "permissions": {"employees": ["read"]},
            "dataClassification": "SECRET",
            "dataResidency": "UK_AND_EEA",
            "mfaVerified": true,
            "requiresMfa": true,
            "ipAddress": "81.2.69.142"
        }"#;
        let ctx = AuthorizationContext::from_json(json).unwrap();
        assert_eq!(ctx.org_id.as_str(), "org-42");
        assert_eq!(ctx.data_classification, SecurityClassification::Secret);
        assert_eq!(ctx.data_residency, ResidencyZone::UkAndEea);
        assert_eq!(ctx.permissions["employees"], vec!["read".to_string()]);
        assert!(!ctx.pii_access_required);
    }

    #[test]
    fn from_json_rejects_unknown_classification() {
        let json = r#"{
            "orgId": "org-42",
            "userId": "user-7",
            "dataClassification": "CONFIDENTIAL",
            "dataResidency": "UK_ONLY"
        }"#;
        assert!(matches!(
            AuthorizationContext::from_json(json),
            Err(CoreError::Json(_))
        ));
    }

    #[test]
    fn from_json_rejects_blank_org() {
        let json = r#"{
            "orgId": "",
            "userId": "user-7",
            "dataClassification": "OFFICIAL",
            "dataResidency": "UK_ONLY"
        }"#;
        assert!(AuthorizationContext::from_json(json).is_err());
    }

    #[test]
    fn serde_roundtrip_preserves_context() {
        let ctx = base().with_ip_address("192.168.1.4").with_requires_mfa(true);
        let json = serde_json::to_string(&ctx).unwrap();
        assert!(json.contains("\"dataResidency\":\"UK_ONLY\""));
        let back = AuthorizationContext::from_json(&json).unwrap();
        assert_eq!(back, ctx);
    }
}
