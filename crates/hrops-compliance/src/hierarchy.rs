//! # Residency & Classification Hierarchies
//!
//! Static policy tables and the predicates built on them. Residency zones
//! form a partial order expressed as an explicit satisfaction table;
//! classification levels form a total order expressed as numeric ranks.
//!
//! ## Residency satisfaction table
//!
//! ```text
//! current zone        satisfies required zones
//! UK_ONLY             {UK_ONLY}
//! UK_AND_EEA          {UK_AND_EEA, UK_ONLY}
//! GLOBAL_RESTRICTED   {GLOBAL_RESTRICTED, UK_AND_EEA, UK_ONLY}
//! ```
//!
//! The table is the contract. Do not re-derive it from the English
//! meaning of the zone names: `GLOBAL_RESTRICTED` is the broadest zone and
//! satisfies every requirement.
//!
//! ## Classification ranks
//!
//! ```text
//! OFFICIAL = 1 < OFFICIAL_SENSITIVE = 2 < SECRET = 3 < TOP_SECRET = 4
//! ```
//!
//! All tables are compile-time constants; there is nothing to initialize
//! and nothing to lock.

use hrops_core::{ResidencyZone, SecurityClassification};

const UK_ONLY_SATISFIES: &[ResidencyZone] = &[ResidencyZone::UkOnly];

const UK_AND_EEA_SATISFIES: &[ResidencyZone] = &[ResidencyZone::UkAndEea, ResidencyZone::UkOnly];

const GLOBAL_RESTRICTED_SATISFIES: &[ResidencyZone] = &[
    ResidencyZone::GlobalRestricted,
    ResidencyZone::UkAndEea,
    ResidencyZone::UkOnly,
];

/// Classification levels that mandate MFA for access.
pub const MFA_REQUIRED_CLASSIFICATIONS: &[SecurityClassification] = &[
    SecurityClassification::OfficialSensitive,
    SecurityClassification::Secret,
    SecurityClassification::TopSecret,
];

/// The required zones a context in `current` may serve.
pub fn satisfied_zones(current: ResidencyZone) -> &'static [ResidencyZone] {
    match current {
        ResidencyZone::UkOnly => UK_ONLY_SATISFIES,
        ResidencyZone::UkAndEea => UK_AND_EEA_SATISFIES,
        ResidencyZone::GlobalRestricted => GLOBAL_RESTRICTED_SATISFIES,
    }
}

/// Numeric rank of a classification level.
pub fn classification_rank(level: SecurityClassification) -> u8 {
    match level {
        SecurityClassification::Official => 1,
        SecurityClassification::OfficialSensitive => 2,
        SecurityClassification::Secret => 3,
        SecurityClassification::TopSecret => 4,
    }
}

/// Whether data currently in `current` satisfies a `required` zone.
pub fn is_residency_compliant(current: ResidencyZone, required: ResidencyZone) -> bool {
    current == required || satisfied_zones(current).contains(&required)
}

/// Whether data classified `current` meets a `required` minimum level.
pub fn is_classification_compliant(
    current: SecurityClassification,
    required: SecurityClassification,
) -> bool {
    classification_rank(current) >= classification_rank(required)
}

/// Whether access to data at `level` must be MFA-protected.
pub fn requires_mfa_for_classification(level: SecurityClassification) -> bool {
    MFA_REQUIRED_CLASSIFICATIONS.contains(&level)
}
