//! Port for client store lookups.

use async_trait::async_trait;

use crate::domain::client::{Client, ClientId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by client store adapters.
    pub enum ClientRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "client repository connection failed: {message}",
        /// Lookup failed during execution.
        Query { message: String } =>
            "client repository query failed: {message}",
    }
}

/// Port for resolving clients by identifier.
///
/// Absent clients are an expected outcome (`Ok(None)`), not an error;
/// callers decide how to treat an unresolvable identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Resolve a client by its externally assigned identifier.
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, ClientRepositoryError>;
}

/// Fixture implementation for tests that do not exercise client lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureClientRepository;

#[async_trait]
impl ClientRepository for FixtureClientRepository {
    async fn find_by_id(&self, _id: ClientId) -> Result<Option<Client>, ClientRepositoryError> {
        Ok(None)
    }
}
