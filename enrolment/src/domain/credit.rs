//! Credit eligibility evaluation.
//!
//! Applies the client tier's policy to a candidate: exempt tiers skip
//! the external lookup entirely, scaled tiers fetch a base limit and
//! multiply it, and scaled results below the acceptance threshold are
//! declined.

use std::sync::Arc;

use crate::domain::candidate::{CandidateUser, CreditStanding};
use crate::domain::client::CreditPolicy;
use crate::domain::ports::{CreditLimitSource, CreditLimitSourceError};

/// Minimum scaled credit limit accepted for enrolment.
pub const CREDIT_LIMIT_THRESHOLD: i64 = 500;

/// Outcome of a failed credit assessment.
///
/// Distinguishes a business decline from a collaborator failure so
/// callers can report them differently while still treating both as a
/// rejected attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreditAssessmentError {
    /// The scaled limit fell below [`CREDIT_LIMIT_THRESHOLD`].
    #[error(
        "insufficient credit for {first_name} {last_name}: limit {limit} is below {threshold}",
        threshold = CREDIT_LIMIT_THRESHOLD
    )]
    InsufficientCredit {
        first_name: String,
        last_name: String,
        limit: i64,
    },
    /// The credit-limit source failed.
    #[error(transparent)]
    Source(#[from] CreditLimitSourceError),
}

/// Evaluator applying tier-based credit policy to candidates.
#[derive(Clone)]
pub struct CreditEvaluator<S> {
    source: Arc<S>,
}

impl<S> CreditEvaluator<S> {
    /// Create an evaluator over a credit-limit source.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

impl<S> CreditEvaluator<S>
where
    S: CreditLimitSource,
{
    /// Assess a candidate against its client's tier policy.
    ///
    /// Exempt tiers never reach the source; scaled tiers fetch the base
    /// limit keyed by surname and birth date, multiply it, and must meet
    /// the threshold.
    pub async fn assess(
        &self,
        candidate: &CandidateUser,
    ) -> Result<CreditStanding, CreditAssessmentError> {
        let multiplier = match candidate.client().tier().credit_policy() {
            CreditPolicy::Exempt => return Ok(CreditStanding::Exempt),
            CreditPolicy::Scaled { multiplier } => multiplier,
        };

        let base = self
            .source
            .credit_limit(candidate.last_name(), candidate.date_of_birth())
            .await?;
        let limit = base.saturating_mul(multiplier);

        if limit < CREDIT_LIMIT_THRESHOLD {
            return Err(CreditAssessmentError::InsufficientCredit {
                first_name: candidate.first_name().to_owned(),
                last_name: candidate.last_name().to_owned(),
                limit,
            });
        }

        Ok(CreditStanding::Limited { limit })
    }
}

#[cfg(test)]
#[path = "credit_tests.rs"]
mod tests;
