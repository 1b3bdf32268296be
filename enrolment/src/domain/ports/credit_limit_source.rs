//! Port for the external credit-limit lookup.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::credit::CREDIT_LIMIT_THRESHOLD;

use super::define_port_error;

define_port_error! {
    /// Errors raised by credit-limit source adapters.
    pub enum CreditLimitSourceError {
        /// Source connection could not be established.
        Connection { message: String } =>
            "credit limit source connection failed: {message}",
        /// Lookup failed during execution.
        Lookup { message: String } =>
            "credit limit lookup failed: {message}",
    }
}

/// Port for fetching a base credit limit keyed by surname and birth date.
///
/// The returned amount is the raw base limit; tier scaling is the
/// evaluator's responsibility.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreditLimitSource: Send + Sync {
    /// Fetch the base credit limit for the given surname and birth date.
    async fn credit_limit(
        &self,
        last_name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<i64, CreditLimitSourceError>;
}

/// Fixture implementation for tests that do not exercise credit lookup.
///
/// Returns a base limit that passes the acceptance threshold unscaled.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCreditLimitSource;

#[async_trait]
impl CreditLimitSource for FixtureCreditLimitSource {
    async fn credit_limit(
        &self,
        _last_name: &str,
        _date_of_birth: NaiveDate,
    ) -> Result<i64, CreditLimitSourceError> {
        Ok(CREDIT_LIMIT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_limit_meets_threshold() {
        let source = FixtureCreditLimitSource;
        let date_of_birth = NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date");
        let limit = source
            .credit_limit("Doe", date_of_birth)
            .await
            .expect("fixture lookup succeeds");
        assert_eq!(limit, CREDIT_LIMIT_THRESHOLD);
    }

    #[rstest]
    fn lookup_error_formats_message() {
        let err = CreditLimitSourceError::lookup("upstream timeout");
        assert!(err.to_string().contains("upstream timeout"));
    }
}
