//! # Identity Newtypes
//!
//! Newtype wrappers for the identifiers that travel with every
//! authorization decision. You cannot pass a `UserId` where an `OrgId` is
//! expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Tenant (organization) identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrgId(String);

impl OrgId {
    /// Create an organization identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidOrgId`] if the string is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidOrgId);
        }
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OrgId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrgId> for String {
    fn from(id: OrgId) -> Self {
        id.0
    }
}

impl std::fmt::Display for OrgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Acting principal identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a user identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUserId`] if the string is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidUserId);
        }
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request correlation identifier, shared by every log line and audit
/// event of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrelationId(pub Uuid);

impl CorrelationId {
    /// Generate a new random correlation identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn org_id_rejects_empty() {
        assert_eq!(OrgId::new(""), Err(ValidationError::InvalidOrgId));
        assert_eq!(OrgId::new("   "), Err(ValidationError::InvalidOrgId));
    }

    #[test]
    fn user_id_rejects_empty() {
        assert_eq!(UserId::new(""), Err(ValidationError::InvalidUserId));
        assert_eq!(UserId::new("\t"), Err(ValidationError::InvalidUserId));
    }

    #[test]
    fn identifiers_preserve_value() {
        let org = OrgId::new("org-7f3a").unwrap();
        let user = UserId::new("user-19").unwrap();
        assert_eq!(org.as_str(), "org-7f3a");
        assert_eq!(user.to_string(), "user-19");
    }

    #[test]
    fn org_id_serializes_as_plain_string() {
        let org = OrgId::new("org-1").unwrap();
        assert_eq!(serde_json::to_string(&org).unwrap(), "\"org-1\"");
        let back: OrgId = serde_json::from_str("\"org-1\"").unwrap();
        assert_eq!(back, org);
    }

    #[test]
    fn deserialize_rejects_blank_identifiers() {
        assert!(serde_json::from_str::<OrgId>("\"\"").is_err());
        assert!(serde_json::from_str::<UserId>("\"  \"").is_err());
    }

    #[test]
    fn correlation_ids_are_unique() {
        assert_ne!(CorrelationId::new(), CorrelationId::new());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Whitespace-only identifiers are always rejected.
        #[test]
        fn blank_ids_rejected(s in "[ \t\n]{0,16}") {
            prop_assert_eq!(OrgId::new(s.clone()), Err(ValidationError::InvalidOrgId));
            prop_assert_eq!(UserId::new(s), Err(ValidationError::InvalidUserId));
        }

        /// Any identifier with visible content is kept verbatim.
        #[test]
        fn visible_ids_preserved(s in " ?[a-zA-Z0-9_-]{1,32} ?") {
            let org = OrgId::new(s.clone()).unwrap();
            prop_assert_eq!(org.as_str(), s.as_str());
            let json = serde_json::to_string(&org).unwrap();
            let back: OrgId = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, org);
        }
    }
}
