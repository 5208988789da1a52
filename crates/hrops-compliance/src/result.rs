//! # Validation Result
//!
//! [`ComplianceValidationResult`] is the unit of output of every evaluator
//! and of the composer. Violations and remediations are two independent
//! ordered lists of human-readable text: a violation may come with zero or
//! more remediation entries, and the lists are not index-aligned.
//!
//! Each violation is tagged with a [`ViolationCode`] so that report
//! consumers can group and grade findings, but the `message` text is the
//! audit contract and must stay byte-stable.

use serde::{Deserialize, Serialize};

use crate::report::{FindingCategory, FindingSeverity};

/// Machine-readable identity of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// Current residency does not satisfy the operation's required zone.
    ResidencyRequirementUnmet,
    /// UK-only tenant accessed from a non-UK address.
    UkOnlyIpOutsideUk,
    /// UK/EEA tenant accessed from outside the UK and EEA.
    UkEeaIpOutsideRegion,
    /// SECRET or TOP_SECRET data processed in the global zone.
    HighlyClassifiedInGlobalZone,
    /// Current classification is below the operation's required minimum.
    ClassificationBelowRequired,
    /// Classification mandates MFA but the actor has not verified it.
    MfaNotVerified,
    /// Classification mandates MFA but the context was not marked as requiring it.
    MfaRequirementNotSet,
    /// SECRET data stored in the global zone.
    SecretInGlobalZone,
    /// TOP_SECRET data stored outside UK_ONLY.
    TopSecretOutsideUkOnly,
    /// A resource-level requirement demands MFA the actor has not verified.
    MfaRequiredForResource,
}

impl ViolationCode {
    /// The snake_case identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResidencyRequirementUnmet => "residency_requirement_unmet",
            Self::UkOnlyIpOutsideUk => "uk_only_ip_outside_uk",
            Self::UkEeaIpOutsideRegion => "uk_eea_ip_outside_region",
            Self::HighlyClassifiedInGlobalZone => "highly_classified_in_global_zone",
            Self::ClassificationBelowRequired => "classification_below_required",
            Self::MfaNotVerified => "mfa_not_verified",
            Self::MfaRequirementNotSet => "mfa_requirement_not_set",
            Self::SecretInGlobalZone => "secret_in_global_zone",
            Self::TopSecretOutsideUkOnly => "top_secret_outside_uk_only",
            Self::MfaRequiredForResource => "mfa_required_for_resource",
        }
    }

    /// Severity a finding with this code is graded at.
    pub fn severity(&self) -> FindingSeverity {
        match self {
            Self::SecretInGlobalZone | Self::TopSecretOutsideUkOnly => FindingSeverity::Critical,
            Self::ResidencyRequirementUnmet
            | Self::HighlyClassifiedInGlobalZone
            | Self::ClassificationBelowRequired
            | Self::MfaNotVerified
            | Self::MfaRequiredForResource => FindingSeverity::High,
            Self::UkOnlyIpOutsideUk | Self::UkEeaIpOutsideRegion | Self::MfaRequirementNotSet => {
                FindingSeverity::Medium
            }
        }
    }

    /// Report category a finding with this code belongs to.
    pub fn category(&self) -> FindingCategory {
        match self {
            Self::UkOnlyIpOutsideUk | Self::UkEeaIpOutsideRegion => {
                FindingCategory::NetworkSecurity
            }
            Self::MfaNotVerified | Self::MfaRequirementNotSet | Self::MfaRequiredForResource => {
                FindingCategory::AccessControl
            }
            Self::ResidencyRequirementUnmet
            | Self::HighlyClassifiedInGlobalZone
            | Self::ClassificationBelowRequired
            | Self::SecretInGlobalZone
            | Self::TopSecretOutsideUkOnly => FindingCategory::DataProtection,
        }
    }
}

impl std::fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single policy violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplianceViolation {
    pub code: ViolationCode,
    pub message: String,
}

impl ComplianceViolation {
    pub fn new(code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ComplianceViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of a compliance evaluation.
///
/// `is_valid` is always `violations.is_empty()`; constructors maintain this
/// and the field is exposed read-only through [`is_valid`](Self::is_valid).
/// Deserialization recomputes it and ignores the incoming `isValid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ResultWire")]
pub struct ComplianceValidationResult {
    is_valid: bool,
    violations: Vec<ComplianceViolation>,
    suggested_remediation: Vec<String>,
}

impl ComplianceValidationResult {
    /// A result with no violations.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            violations: Vec::new(),
            suggested_remediation: Vec::new(),
        }
    }

    /// Build a result from accumulated violations and remediations.
    pub fn from_parts(
        violations: Vec<ComplianceViolation>,
        suggested_remediation: Vec<String>,
    ) -> Self {
        Self {
            is_valid: violations.is_empty(),
            violations,
            suggested_remediation,
        }
    }

    /// Concatenate two results, `self` first.
    ///
    /// The merged result is valid only if both inputs are.
    pub fn merge(mut self, other: ComplianceValidationResult) -> Self {
        self.is_valid = self.is_valid && other.is_valid;
        self.violations.extend(other.violations);
        self.suggested_remediation.extend(other.suggested_remediation);
        self
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn violations(&self) -> &[ComplianceViolation] {
        &self.violations
    }

    pub fn suggested_remediation(&self) -> &[String] {
        &self.suggested_remediation
    }

    /// Violation messages in order.
    pub fn violation_messages(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.message.as_str())
    }

    /// Violation codes in order.
    pub fn codes(&self) -> impl Iterator<Item = ViolationCode> + '_ {
        self.violations.iter().map(|v| v.code)
    }

    pub fn has_code(&self, code: ViolationCode) -> bool {
        self.violations.iter().any(|v| v.code == code)
    }

    /// Violation messages joined with `"; "`.
    pub fn joined_violations(&self) -> String {
        self.violation_messages().collect::<Vec<_>>().join("; ")
    }

    pub(crate) fn into_parts(self) -> (Vec<ComplianceViolation>, Vec<String>) {
        (self.violations, self.suggested_remediation)
    }
}

/// Incoming wire form of [`ComplianceValidationResult`]. `isValid` is
/// derived, so it is not read.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultWire {
    #[serde(default)]
    violations: Vec<ComplianceViolation>,
    #[serde(default)]
    suggested_remediation: Vec<String>,
}

impl From<ResultWire> for ComplianceValidationResult {
    fn from(wire: ResultWire) -> Self {
        Self::from_parts(wire.violations, wire.suggested_remediation)
    }
}

impl Default for ComplianceValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

/// Append-only accumulator used by the evaluators.
///
/// Rules never short-circuit: each branch records into the same log and the
/// result is built once at the end.
#[derive(Debug, Default)]
pub(crate) struct ViolationLog {
    violations: Vec<ComplianceViolation>,
    remediation: Vec<String>,
}

impl ViolationLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(
        &mut self,
        code: ViolationCode,
        message: impl Into<String>,
        remediation: impl Into<String>,
    ) {
        tracing::debug!(code = %code, "compliance violation recorded");
        self.violations.push(ComplianceViolation::new(code, message));
        self.remediation.push(remediation.into());
    }

    pub(crate) fn finish(self) -> ComplianceValidationResult {
        ComplianceValidationResult::from_parts(self.violations, self.remediation)
    }
}
