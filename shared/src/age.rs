//! Age derivation from a date of birth.

use chrono::{Datelike, NaiveDate};

/// Whole years between `birth` and `today`.
///
/// The year difference is reduced by one while `today` falls before the
/// birthday in the current year. A birth date after `today` yields a
/// negative value; callers validate against that separately.
pub fn derive_age(birth: NaiveDate, today: NaiveDate) -> i64 {
    let mut age = i64::from(today.year() - birth.year());
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}
