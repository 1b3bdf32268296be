//! Tests for credit evaluation.

use std::sync::Arc;

use chrono::NaiveDate;
use rstest::rstest;

use super::*;
use crate::domain::client::{Client, ClientId, ClientTier};
use crate::domain::ports::MockCreditLimitSource;

fn date_of_birth() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date")
}

fn candidate_with_tier(tier: ClientTier) -> CandidateUser {
    let client = Client::new(
        ClientId::new(1),
        "Acme",
        "ops@acme.example",
        "123 Main St",
        tier,
    );
    CandidateUser::new(
        "John",
        "Doe",
        "john.doe@example.com",
        date_of_birth(),
        client,
    )
}

#[tokio::test]
async fn exempt_tier_skips_the_source_entirely() {
    let mut source = MockCreditLimitSource::new();
    source.expect_credit_limit().times(0);

    let evaluator = CreditEvaluator::new(Arc::new(source));
    let standing = evaluator
        .assess(&candidate_with_tier(ClientTier::VeryImportantClient))
        .await
        .expect("exempt tier is always eligible");

    assert_eq!(standing, CreditStanding::Exempt);
}

#[tokio::test]
async fn important_tier_doubles_the_base_limit() {
    let mut source = MockCreditLimitSource::new();
    source
        .expect_credit_limit()
        .withf(|last_name, dob| last_name == "Doe" && *dob == date_of_birth())
        .times(1)
        .returning(|_, _| Ok(300));

    let evaluator = CreditEvaluator::new(Arc::new(source));
    let standing = evaluator
        .assess(&candidate_with_tier(ClientTier::ImportantClient))
        .await
        .expect("doubled limit meets the threshold");

    assert_eq!(standing, CreditStanding::Limited { limit: 600 });
}

#[rstest]
#[case(ClientTier::Default)]
#[case(ClientTier::Other("GoldPartner".to_owned()))]
#[tokio::test]
async fn default_policy_leaves_the_base_limit_unscaled(#[case] tier: ClientTier) {
    let mut source = MockCreditLimitSource::new();
    source
        .expect_credit_limit()
        .times(1)
        .returning(|_, _| Ok(CREDIT_LIMIT_THRESHOLD));

    let evaluator = CreditEvaluator::new(Arc::new(source));
    let standing = evaluator
        .assess(&candidate_with_tier(tier))
        .await
        .expect("threshold limit is accepted");

    assert_eq!(
        standing,
        CreditStanding::Limited {
            limit: CREDIT_LIMIT_THRESHOLD
        }
    );
}

#[rstest]
#[case(100, 100)]
#[case(CREDIT_LIMIT_THRESHOLD - 1, CREDIT_LIMIT_THRESHOLD - 1)]
#[tokio::test]
async fn limits_below_the_threshold_are_declined(#[case] base: i64, #[case] expected: i64) {
    let mut source = MockCreditLimitSource::new();
    source
        .expect_credit_limit()
        .times(1)
        .returning(move |_, _| Ok(base));

    let evaluator = CreditEvaluator::new(Arc::new(source));
    let error = evaluator
        .assess(&candidate_with_tier(ClientTier::Default))
        .await
        .expect_err("limit below threshold is declined");

    match error {
        CreditAssessmentError::InsufficientCredit {
            first_name,
            last_name,
            limit,
        } => {
            assert_eq!(first_name, "John");
            assert_eq!(last_name, "Doe");
            assert_eq!(limit, expected);
        }
        other => panic!("expected insufficient credit, got {other:?}"),
    }
}

#[tokio::test]
async fn decline_message_names_the_candidate() {
    let mut source = MockCreditLimitSource::new();
    source
        .expect_credit_limit()
        .times(1)
        .returning(|_, _| Ok(100));

    let evaluator = CreditEvaluator::new(Arc::new(source));
    let error = evaluator
        .assess(&candidate_with_tier(ClientTier::Default))
        .await
        .expect_err("limit below threshold is declined");

    let message = error.to_string();
    assert!(message.contains("John"));
    assert!(message.contains("Doe"));
}

#[tokio::test]
async fn source_failure_surfaces_as_collaborator_error() {
    let mut source = MockCreditLimitSource::new();
    source
        .expect_credit_limit()
        .times(1)
        .returning(|_, _| Err(CreditLimitSourceError::lookup("upstream timeout")));

    let evaluator = CreditEvaluator::new(Arc::new(source));
    let error = evaluator
        .assess(&candidate_with_tier(ClientTier::Default))
        .await
        .expect_err("source failure is an error");

    assert!(matches!(error, CreditAssessmentError::Source(_)));
}
