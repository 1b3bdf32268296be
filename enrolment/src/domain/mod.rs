//! Domain entities, validation, and enrolment services.
//!
//! Purpose: Define the strongly typed enrolment domain and the services
//! that orchestrate it. Keep entities immutable once constructed and
//! document invariants and serialisation contracts (serde) in each
//! type's Rustdoc.
//!
//! Public surface:
//! - Client / ClientId / ClientTier — the account owning the new user.
//! - CandidateUser / CreditStanding — the per-attempt user record.
//! - CreditEvaluator — tier-based credit policy.
//! - RegistrationService — the enrolment workflow root.

pub mod candidate;
pub mod client;
pub mod credit;
pub mod ports;
pub mod registration;
pub mod validation;

pub use self::candidate::{CandidateUser, CreditStanding};
pub use self::client::{Client, ClientId, ClientTier, CreditPolicy};
pub use self::credit::{CREDIT_LIMIT_THRESHOLD, CreditAssessmentError, CreditEvaluator};
pub use self::registration::{
    RegistrationOutcome, RegistrationRejection, RegistrationRequest, RegistrationService,
};
