//! Identity validation predicates.
//!
//! Pure checks with no side effects. The name and email rules are
//! deliberately permissive and must stay that way: downstream stores
//! accept what these predicates accept.

use chrono::{Datelike, NaiveDate};

/// Minimum whole-year age accepted for enrolment.
pub const MINIMUM_AGE_YEARS: i32 = 21;

/// Both name parts must be non-empty.
///
/// Whitespace-only strings pass; emptiness is the only rule.
pub fn is_valid_name(first_name: &str, last_name: &str) -> bool {
    !first_name.is_empty() && !last_name.is_empty()
}

/// The address must contain an `@` and a `.`, in any position or order.
///
/// Containment checks only; full address grammar validation is out of
/// scope.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Whole-year age on `today`.
///
/// The naive year difference is reduced by one when this year's birthday
/// has not yet occurred.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if today.month() < date_of_birth.month()
        || (today.month() == date_of_birth.month() && today.day() < date_of_birth.day())
    {
        age -= 1;
    }
    age
}

/// Whether the candidate is at least [`MINIMUM_AGE_YEARS`] old on `today`.
pub fn is_valid_age(date_of_birth: NaiveDate, today: NaiveDate) -> bool {
    age_on(date_of_birth, today) >= MINIMUM_AGE_YEARS
}
