//! # Reporting Configuration
//!
//! Tunables for the administrator compliance report. The evaluators have
//! none: their tables are constants.
//!
//! ## Environment
//!
//! | Variable | Default |
//! |----------|---------|
//! | `HROPS_AUDIT_INTERVAL_DAYS` | 90 |
//! | `HROPS_REMEDIATION_DAYS_CRITICAL` | 1 |
//! | `HROPS_REMEDIATION_DAYS_HIGH` | 7 |
//! | `HROPS_REMEDIATION_DAYS_MEDIUM` | 30 |
//! | `HROPS_REMEDIATION_DAYS_LOW` | 90 |
//!
//! Unset variables fall back to the default. A set variable that is not a
//! whole number of days in `1..=MAX_DAYS` is an error, not a silent
//! fallback.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::report::FindingSeverity;

/// Upper bound on any configured interval (one hundred years).
pub const MAX_DAYS: u32 = 36_500;

/// Settings for [`crate::report::ComplianceReportBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceConfig {
    /// Days until the next scheduled audit.
    pub audit_interval_days: u32,
    /// Days to remediate a critical finding.
    pub remediation_days_critical: u32,
    pub remediation_days_high: u32,
    pub remediation_days_medium: u32,
    pub remediation_days_low: u32,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            audit_interval_days: 90,
            remediation_days_critical: 1,
            remediation_days_high: 7,
            remediation_days_medium: 30,
            remediation_days_low: 90,
        }
    }
}

impl ComplianceConfig {
    /// Load configuration from `HROPS_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a variable that is set but
    /// not a whole number of days in `1..=MAX_DAYS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            audit_interval_days: days(
                &lookup,
                "HROPS_AUDIT_INTERVAL_DAYS",
                defaults.audit_interval_days,
            )?,
            remediation_days_critical: days(
                &lookup,
                "HROPS_REMEDIATION_DAYS_CRITICAL",
                defaults.remediation_days_critical,
            )?,
            remediation_days_high: days(
                &lookup,
                "HROPS_REMEDIATION_DAYS_HIGH",
                defaults.remediation_days_high,
            )?,
            remediation_days_medium: days(
                &lookup,
                "HROPS_REMEDIATION_DAYS_MEDIUM",
                defaults.remediation_days_medium,
            )?,
            remediation_days_low: days(
                &lookup,
                "HROPS_REMEDIATION_DAYS_LOW",
                defaults.remediation_days_low,
            )?,
        })
    }

    /// Remediation window for a finding of the given severity.
    pub fn remediation_window(&self, severity: FindingSeverity) -> Duration {
        let days = match severity {
            FindingSeverity::Critical => self.remediation_days_critical,
            FindingSeverity::High => self.remediation_days_high,
            FindingSeverity::Medium => self.remediation_days_medium,
            FindingSeverity::Low => self.remediation_days_low,
        };
        Duration::days(i64::from(days))
    }

    /// Interval until the next scheduled audit.
    pub fn audit_interval(&self) -> Duration {
        Duration::days(i64::from(self.audit_interval_days))
    }
}

fn days<F>(lookup: &F, var: &str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(n) if (1..=MAX_DAYS).contains(&n) => Ok(n),
            _ => Err(ConfigError::InvalidValue {
                var: var.to_string(),
                value: raw,
            }),
        },
    }
}
