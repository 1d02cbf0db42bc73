// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shape validators for raw form input.
//!
//! Every validator is a pure, total predicate over the raw string the user
//! typed. None of them trim their input unless stated otherwise.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use time::Date;
use time::macros::format_description;

#[allow(clippy::expect_used)]
pub static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// Applied after whitespace has been stripped, so the grouped forms
// "(02) 1234 5678" and "02 1234 5678" reduce to the compact alternatives.
#[allow(clippy::expect_used)]
pub static AUSTRALIAN_PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:\+61|0)[2-9][0-9]{8}|\(0[2-9]\)[0-9]{8})$")
        .expect("phone pattern is valid")
});

/// The shape a field value is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// `local@domain.tld`.
    Email,
    /// Australian landline or mobile number.
    AustralianPhone,
    /// Letters, spaces, apostrophes and hyphens.
    PersonName,
    /// A `YYYY-MM-DD` date no earlier than today.
    FutureOrTodayDate,
}

impl Shape {
    /// Checks a raw value against this shape.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw field value
    /// * `today` - The current local calendar day, used by date shapes
    #[must_use]
    pub fn accepts(self, value: &str, today: Date) -> bool {
        match self {
            Self::Email => is_valid_email(value),
            Self::AustralianPhone => is_valid_australian_phone(value),
            Self::PersonName => is_valid_person_name(value),
            Self::FutureOrTodayDate => is_future_or_today_date(value, today),
        }
    }
}

/// Returns true if `value` has the shape `local@domain.tld`.
///
/// Each of the three parts must be a non-empty run without whitespace or `@`.
/// No length bound is enforced.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Returns true if `value` is an Australian phone number.
///
/// All whitespace is removed first. The remaining string must be ten
/// significant digits starting with `0` followed by a digit 2-9, where the
/// leading `0` may be replaced by `+61` or the area code may be written in
/// parentheses, e.g. `(02)`.
#[must_use]
pub fn is_valid_australian_phone(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    AUSTRALIAN_PHONE_PATTERN.is_match(&compact)
}

/// Returns true if `value` is a non-empty name made of ASCII letters,
/// whitespace, apostrophes and hyphens.
#[must_use]
pub fn is_valid_person_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '\'' || c == '-')
}

/// Returns true if `value` is a `YYYY-MM-DD` date on or after `today`.
///
/// Time of day plays no part in the comparison. A value that does not parse
/// as a calendar date is never accepted.
#[must_use]
pub fn is_future_or_today_date(value: &str, today: Date) -> bool {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .is_ok_and(|selected| selected >= today)
}
