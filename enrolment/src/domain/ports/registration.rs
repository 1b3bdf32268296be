//! Driving port for user enrolment.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it
//! to enrol a user without knowing (or importing) the backing
//! collaborators. Adapters can substitute a test double instead of
//! wiring a full service.

use async_trait::async_trait;

use crate::domain::registration::{RegistrationOutcome, RegistrationRequest};

/// Domain use-case port for user enrolment.
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Run the enrolment pipeline for one registration attempt.
    async fn register(&self, request: RegistrationRequest) -> RegistrationOutcome;
}
