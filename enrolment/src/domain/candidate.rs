//! Candidate user record built per enrolment attempt.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;

/// Credit position attached to a candidate after evaluation.
///
/// A freshly constructed candidate is `Unassessed`; the projection
/// accessors report no limit and a zero amount until the evaluator has
/// run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CreditStanding {
    /// Credit evaluation has not run for this candidate.
    Unassessed,
    /// No limit is imposed (exempt tier).
    Exempt,
    /// A limit applies, already scaled by tier policy.
    Limited { limit: i64 },
}

impl CreditStanding {
    /// Whether a credit limit applies to the candidate.
    pub const fn has_credit_limit(self) -> bool {
        matches!(self, Self::Limited { .. })
    }

    /// The applicable limit, or zero when none applies.
    pub const fn credit_limit(self) -> i64 {
        match self {
            Self::Limited { limit } => limit,
            Self::Unassessed | Self::Exempt => 0,
        }
    }
}

/// A prospective user awaiting acceptance into a client's account.
///
/// ## Invariants
/// - Constructed fresh per enrolment attempt from validated inputs and a
///   resolved [`Client`]; discarded on rejection.
/// - `credit` is [`CreditStanding::Unassessed`] until credit evaluation
///   has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateUser {
    first_name: String,
    last_name: String,
    email: String,
    date_of_birth: NaiveDate,
    client: Client,
    credit: CreditStanding,
}

impl CandidateUser {
    /// Build an unassessed candidate from validated inputs.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
        client: Client,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            date_of_birth,
            client,
            credit: CreditStanding::Unassessed,
        }
    }

    /// Attach the evaluator's standing to the candidate.
    pub fn with_standing(mut self, standing: CreditStanding) -> Self {
        self.credit = standing;
        self
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Date of birth.
    pub const fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// The client account the user enrols into.
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Credit position after evaluation.
    pub const fn credit_standing(&self) -> CreditStanding {
        self.credit
    }

    /// Whether a credit limit applies.
    pub const fn has_credit_limit(&self) -> bool {
        self.credit.has_credit_limit()
    }

    /// The applicable credit limit, or zero when none applies.
    pub const fn credit_limit(&self) -> i64 {
        self.credit.credit_limit()
    }
}
