//! # Security Classification & Residency Zone
//!
//! The two policy axes attached to every tenant: how sensitive its data is
//! ([`SecurityClassification`]) and where that data may be placed and
//! processed ([`ResidencyZone`]).
//!
//! Both enums are deliberately plain: they carry identity and the canonical
//! wire form only. The ordering between levels and the satisfaction
//! relation between zones live in `hrops-compliance::hierarchy`, which is
//! the single place those tables may change.
//!
//! The canonical string form (`OFFICIAL_SENSITIVE`, `UK_AND_EEA`, ...) is
//! shared by serde, `Display` and `FromStr`, and is the exact text that
//! appears inside violation messages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Sensitivity tier of tenant data, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityClassification {
    /// Routine business data.
    Official,
    /// Official data whose compromise would cause measurable harm.
    OfficialSensitive,
    /// Data requiring strong protection against capable adversaries.
    Secret,
    /// The most sensitive tier.
    TopSecret,
}

impl SecurityClassification {
    /// All classification levels, lowest first.
    pub fn all() -> &'static [SecurityClassification] {
        &[
            Self::Official,
            Self::OfficialSensitive,
            Self::Secret,
            Self::TopSecret,
        ]
    }

    /// The canonical string name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Official => "OFFICIAL",
            Self::OfficialSensitive => "OFFICIAL_SENSITIVE",
            Self::Secret => "SECRET",
            Self::TopSecret => "TOP_SECRET",
        }
    }
}

impl fmt::Display for SecurityClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecurityClassification {
    type Err = ValidationError;

    /// Parse a classification from its canonical name. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OFFICIAL" => Ok(Self::Official),
            "OFFICIAL_SENSITIVE" => Ok(Self::OfficialSensitive),
            "SECRET" => Ok(Self::Secret),
            "TOP_SECRET" => Ok(Self::TopSecret),
            other => Err(ValidationError::UnknownClassification(other.to_string())),
        }
    }
}

/// Geographic/regulatory boundary within which tenant data must remain.
///
/// Note the naming: `GlobalRestricted` is the *least* restrictive zone
/// (broad placement allowed) and `UkOnly` the most restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResidencyZone {
    /// Data stays in the United Kingdom.
    UkOnly,
    /// Data stays in the United Kingdom or the European Economic Area.
    UkAndEea,
    /// Global placement, subject to classification restrictions.
    GlobalRestricted,
}

impl ResidencyZone {
    /// All residency zones, most restrictive first.
    pub fn all() -> &'static [ResidencyZone] {
        &[Self::UkOnly, Self::UkAndEea, Self::GlobalRestricted]
    }

    /// The canonical string name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UkOnly => "UK_ONLY",
            Self::UkAndEea => "UK_AND_EEA",
            Self::GlobalRestricted => "GLOBAL_RESTRICTED",
        }
    }
}

impl fmt::Display for ResidencyZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResidencyZone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UK_ONLY" => Ok(Self::UkOnly),
            "UK_AND_EEA" => Ok(Self::UkAndEea),
            "GLOBAL_RESTRICTED" => Ok(Self::GlobalRestricted),
            other => Err(ValidationError::UnknownResidencyZone(other.to_string())),
        }
    }
}
