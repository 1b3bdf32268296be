//! Client-account user enrolment core.
//!
//! Validates a prospective user's identity fields, resolves the owning
//! client, applies tier-based credit policy, and persists accepted users
//! through a repository port. Persistence, the external credit-limit
//! lookup, and any transport layer live behind ports in
//! [`domain::ports`]; this crate contains no adapter wiring.

pub mod domain;

pub use domain::registration::{RegistrationOutcome, RegistrationRequest, RegistrationService};
