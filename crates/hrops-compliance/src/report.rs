//! # Administrator Compliance Report
//!
//! Turns a composer result into a [`SecurityComplianceReport`] for the
//! compliance-status screen: one finding per violation, graded by its
//! [`ViolationCode`], with remediation due dates and the next audit date
//! derived from [`ComplianceConfig`].
//!
//! The builder never reads the clock; callers pass `now`.
//!
//! Status grading:
//!
//! ```text
//! any High/Critical finding   -> Fail
//! only Low/Medium findings    -> Warning
//! no findings                 -> Pass
//! ```

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use hrops_core::{AuthorizationContext, OrgId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ComplianceConfig;
use crate::result::{ComplianceValidationResult, ComplianceViolation, ViolationCode};

/// Overall outcome of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Pass,
    Warning,
    Fail,
}

/// Area of the security programme a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    DataProtection,
    AccessControl,
    NetworkSecurity,
}

/// Severity grade of a finding, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Lifecycle of a finding. New findings are always `Open`.
///
/// ```text
/// Open ─► InProgress ─► Resolved
///   └─────────────────────▲
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingStatus {
    Open,
    InProgress,
    Resolved,
}

/// One graded violation in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityFinding {
    pub id: Uuid,
    pub code: ViolationCode,
    pub category: FindingCategory,
    pub severity: FindingSeverity,
    /// The violation message, verbatim.
    pub description: String,
    pub status: FindingStatus,
    pub remediation_due_date: DateTime<Utc>,
    /// Context facts that support the finding.
    pub evidence: Vec<String>,
}

/// Compliance status report for one tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityComplianceReport {
    pub org_id: OrgId,
    pub report_date: DateTime<Utc>,
    pub compliance_status: ComplianceStatus,
    pub findings: Vec<SecurityFinding>,
    /// Remediation text, de-duplicated in first-seen order.
    pub recommendations: Vec<String>,
    pub next_audit_date: DateTime<Utc>,
}

impl SecurityFinding {
    /// Move an open finding into remediation. No effect once resolved.
    pub fn start_remediation(&mut self) {
        if self.status == FindingStatus::Open {
            self.status = FindingStatus::InProgress;
        }
    }

    pub fn resolve(&mut self) {
        self.status = FindingStatus::Resolved;
    }

    /// Unresolved and past its remediation due date.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != FindingStatus::Resolved && now > self.remediation_due_date
    }
}

impl SecurityComplianceReport {
    /// The most severe finding grade, if any.
    pub fn highest_severity(&self) -> Option<FindingSeverity> {
        self.findings.iter().map(|f| f.severity).max()
    }
}

/// Builds [`SecurityComplianceReport`]s.
#[derive(Debug, Clone, Default)]
pub struct ComplianceReportBuilder {
    config: ComplianceConfig,
}

impl ComplianceReportBuilder {
    pub fn new(config: ComplianceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComplianceConfig {
        &self.config
    }

    /// Build a report for the tenant in `context` from a composer result.
    pub fn build(
        &self,
        context: &AuthorizationContext,
        result: &ComplianceValidationResult,
        now: DateTime<Utc>,
    ) -> SecurityComplianceReport {
        let findings: Vec<SecurityFinding> = result
            .violations()
            .iter()
            .map(|violation| self.finding(context, violation, now))
            .collect();

        let status = grade(&findings);
        tracing::debug!(
            org_id = %context.org_id,
            status = ?status,
            finding_count = findings.len(),
            "compliance report built"
        );

        SecurityComplianceReport {
            org_id: context.org_id.clone(),
            report_date: now,
            compliance_status: status,
            findings,
            recommendations: dedup_preserving_order(result.suggested_remediation()),
            next_audit_date: offset(now, self.config.audit_interval()),
        }
    }

    fn finding(
        &self,
        context: &AuthorizationContext,
        violation: &ComplianceViolation,
        now: DateTime<Utc>,
    ) -> SecurityFinding {
        let severity = violation.code.severity();
        SecurityFinding {
            id: Uuid::new_v4(),
            code: violation.code,
            category: violation.code.category(),
            severity,
            description: violation.message.clone(),
            status: FindingStatus::Open,
            remediation_due_date: offset(now, self.config.remediation_window(severity)),
            evidence: evidence_for(context, violation.code),
        }
    }
}

/// `now + by`, clamped to the latest representable instant.
fn offset(now: DateTime<Utc>, by: Duration) -> DateTime<Utc> {
    now.checked_add_signed(by).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

fn grade(findings: &[SecurityFinding]) -> ComplianceStatus {
    match findings.iter().map(|f| f.severity).max() {
        None => ComplianceStatus::Pass,
        Some(FindingSeverity::High | FindingSeverity::Critical) => ComplianceStatus::Fail,
        Some(FindingSeverity::Low | FindingSeverity::Medium) => ComplianceStatus::Warning,
    }
}

fn evidence_for(context: &AuthorizationContext, code: ViolationCode) -> Vec<String> {
    let mut evidence = vec![
        format!("dataClassification={}", context.data_classification),
        format!("dataResidency={}", context.data_residency),
    ];
    match code {
        ViolationCode::UkOnlyIpOutsideUk | ViolationCode::UkEeaIpOutsideRegion => {
            evidence.push(format!("ipAddress={}", context.ip_address_or_empty()));
        }
        ViolationCode::MfaNotVerified
        | ViolationCode::MfaRequirementNotSet
        | ViolationCode::MfaRequiredForResource => {
            evidence.push(format!("mfaVerified={}", context.mfa_verified));
            evidence.push(format!("requiresMfa={}", context.requires_mfa));
        }
        ViolationCode::ResidencyRequirementUnmet
        | ViolationCode::HighlyClassifiedInGlobalZone
        | ViolationCode::ClassificationBelowRequired
        | ViolationCode::SecretInGlobalZone
        | ViolationCode::TopSecretOutsideUkOnly => {}
    }
    if let Some(id) = context.correlation_id {
        evidence.push(format!("correlationId={id}"));
    }
    evidence
}

fn dedup_preserving_order(items: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(item.as_str()))
        .cloned()
        .collect()
}
