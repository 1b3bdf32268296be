//! Port for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::candidate::CandidateUser;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "user repository query failed: {message}",
    }
}

/// Port for persisting accepted users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store an accepted user record.
    async fn add(&self, user: &CandidateUser) -> Result<(), UserPersistenceError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn add(&self, _user: &CandidateUser) -> Result<(), UserPersistenceError> {
        Ok(())
    }
}
