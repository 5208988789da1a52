//! # hrops-core: Foundational Types for the HR Operations Platform
//!
//! Defines the primitives every tenant-data guard speaks in: the security
//! classification and residency zone attached to each tenant, validated
//! identity newtypes, and the per-request [`AuthorizationContext`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hrops-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public value types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod classification;
pub mod context;
pub mod error;
pub mod identity;

pub use classification::{ResidencyZone, SecurityClassification};
pub use context::{AuthorizationContext, PermissionMap};
pub use error::{CoreError, ValidationError};
pub use identity::{CorrelationId, OrgId, UserId};
