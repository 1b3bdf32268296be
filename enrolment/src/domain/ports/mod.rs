//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod client_repository;
mod credit_limit_source;
mod registration;
mod user_repository;

#[cfg(test)]
pub use client_repository::MockClientRepository;
pub use client_repository::{ClientRepository, ClientRepositoryError, FixtureClientRepository};
#[cfg(test)]
pub use credit_limit_source::MockCreditLimitSource;
pub use credit_limit_source::{
    CreditLimitSource, CreditLimitSourceError, FixtureCreditLimitSource,
};
pub use registration::UserRegistration;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserPersistenceError, UserRepository};
