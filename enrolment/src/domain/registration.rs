//! User enrolment workflow.
//!
//! Sequential pipeline with early exit: validate identity fields,
//! resolve the owning client, assess credit, persist the accepted user.
//! Each step runs at most once per attempt, in that order, and no
//! collaborator is reached before every validation has passed. The
//! service is stateless; every attempt is independent.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::domain::candidate::CandidateUser;
use crate::domain::client::ClientId;
use crate::domain::credit::{CreditAssessmentError, CreditEvaluator};
use crate::domain::ports::{ClientRepository, CreditLimitSource, UserRegistration, UserRepository};
use crate::domain::validation::{is_valid_age, is_valid_email, is_valid_name};

/// Raw inputs for one registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client_id: ClientId,
}

/// Why a registration attempt was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum RegistrationRejection {
    /// First or last name is empty.
    #[error("first and last name must be provided")]
    InvalidName,
    /// The email address fails the containment checks.
    #[error("email address is not valid")]
    InvalidEmail,
    /// The candidate is younger than the minimum age.
    #[error("candidate is below the minimum age")]
    BelowMinimumAge,
    /// No client exists for the supplied identifier.
    #[error("client {client_id} not found")]
    ClientNotFound { client_id: ClientId },
    /// Credit evaluation declined the candidate.
    #[error("credit declined: {message}")]
    CreditDeclined { message: String },
    /// A collaborator failed while processing the attempt.
    #[error("collaborator unavailable: {message}")]
    CollaboratorUnavailable { message: String },
}

/// Result of one registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RegistrationOutcome {
    /// The user passed every check and was persisted.
    Registered,
    /// The attempt was rejected; nothing was persisted.
    Rejected(RegistrationRejection),
}

impl RegistrationOutcome {
    /// Boolean projection of the outcome.
    pub const fn is_registered(&self) -> bool {
        matches!(self, Self::Registered)
    }

    /// The rejection reason, when the attempt was rejected.
    pub const fn rejection(&self) -> Option<&RegistrationRejection> {
        match self {
            Self::Registered => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

/// Enrolment workflow service over the three collaborator ports.
///
/// Collaborators are injected at construction; the service holds no
/// other state. The clock supplies the current date for the age check.
#[derive(Clone)]
pub struct RegistrationService<C, S, U> {
    clients: Arc<C>,
    evaluator: CreditEvaluator<S>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<C, S, U> RegistrationService<C, S, U> {
    /// Create a registration service with explicit collaborators.
    pub fn new(
        clients: Arc<C>,
        credit_limits: Arc<S>,
        users: Arc<U>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            clients,
            evaluator: CreditEvaluator::new(credit_limits),
            users,
            clock,
        }
    }
}

impl<C, S, U> RegistrationService<C, S, U>
where
    C: ClientRepository,
    S: CreditLimitSource,
    U: UserRepository,
{
    /// Run the enrolment pipeline for one registration attempt.
    ///
    /// Rejections carry a structured reason; converted collaborator
    /// failures are logged at `warn` for diagnostics only.
    pub async fn register(&self, request: RegistrationRequest) -> RegistrationOutcome {
        if !is_valid_name(&request.first_name, &request.last_name) {
            return RegistrationOutcome::Rejected(RegistrationRejection::InvalidName);
        }
        if !is_valid_email(&request.email) {
            return RegistrationOutcome::Rejected(RegistrationRejection::InvalidEmail);
        }
        let today = self.clock.utc().date_naive();
        if !is_valid_age(request.date_of_birth, today) {
            return RegistrationOutcome::Rejected(RegistrationRejection::BelowMinimumAge);
        }

        let client = match self.clients.find_by_id(request.client_id).await {
            Ok(Some(client)) => client,
            Ok(None) => {
                tracing::warn!("client {} not found", request.client_id);
                return RegistrationOutcome::Rejected(RegistrationRejection::ClientNotFound {
                    client_id: request.client_id,
                });
            }
            Err(error) => {
                tracing::warn!("client lookup failed: {error}");
                return RegistrationOutcome::Rejected(
                    RegistrationRejection::CollaboratorUnavailable {
                        message: error.to_string(),
                    },
                );
            }
        };

        let candidate = CandidateUser::new(
            request.first_name,
            request.last_name,
            request.email,
            request.date_of_birth,
            client,
        );

        let standing = match self.evaluator.assess(&candidate).await {
            Ok(standing) => standing,
            Err(error) => {
                tracing::warn!("credit assessment failed: {error}");
                let message = error.to_string();
                let rejection = match error {
                    CreditAssessmentError::InsufficientCredit { .. } => {
                        RegistrationRejection::CreditDeclined { message }
                    }
                    CreditAssessmentError::Source(_) => {
                        RegistrationRejection::CollaboratorUnavailable { message }
                    }
                };
                return RegistrationOutcome::Rejected(rejection);
            }
        };

        let user = candidate.with_standing(standing);
        if let Err(error) = self.users.add(&user).await {
            tracing::warn!("user persistence failed: {error}");
            return RegistrationOutcome::Rejected(RegistrationRejection::CollaboratorUnavailable {
                message: error.to_string(),
            });
        }

        RegistrationOutcome::Registered
    }

    /// Minimal boolean operation: true iff the user was persisted.
    pub async fn register_user(
        &self,
        first_name: impl Into<String> + Send,
        last_name: impl Into<String> + Send,
        email: impl Into<String> + Send,
        date_of_birth: NaiveDate,
        client_id: ClientId,
    ) -> bool {
        self.register(RegistrationRequest {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            date_of_birth,
            client_id,
        })
        .await
        .is_registered()
    }
}

#[async_trait]
impl<C, S, U> UserRegistration for RegistrationService<C, S, U>
where
    C: ClientRepository,
    S: CreditLimitSource,
    U: UserRepository,
{
    async fn register(&self, request: RegistrationRequest) -> RegistrationOutcome {
        RegistrationService::register(self, request).await
    }
}

#[cfg(test)]
#[path = "registration_tests.rs"]
mod tests;
