// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Shape, is_future_or_today_date, is_valid_australian_phone, is_valid_email,
    is_valid_person_name,
};
use crate::validation::{AUSTRALIAN_PHONE_PATTERN, EMAIL_PATTERN};
use regex::Regex;
use std::sync::LazyLock;
use time::Date;
use time::macros::date;

const TODAY: Date = date!(2026 - 10 - 18);

#[test]
fn test_email_accepts_minimal_address() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("Reception@WellSpring.COM.AU"));
}

#[test]
fn test_email_rejects_missing_parts() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("plainaddress"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@.co"));
    assert!(!is_valid_email("a@b."));
}

#[test]
fn test_email_rejects_whitespace_and_extra_at() {
    assert!(!is_valid_email("a b@c.de"));
    assert!(!is_valid_email("a@b@c.de"));
    assert!(!is_valid_email(" a@b.co"));
}

#[test]
fn test_phone_accepts_compact_mobile_and_landline() {
    assert!(is_valid_australian_phone("0412345678"));
    assert!(is_valid_australian_phone("0212345678"));
    assert!(is_valid_australian_phone("0898765432"));
}

#[test]
fn test_phone_accepts_grouped_forms() {
    assert!(is_valid_australian_phone("0412 345 678"));
    assert!(is_valid_australian_phone("02 1234 5678"));
    assert!(is_valid_australian_phone("(02) 1234 5678"));
    assert!(is_valid_australian_phone("(03)98765432"));
}

#[test]
fn test_phone_accepts_international_prefix() {
    assert!(is_valid_australian_phone("+61412345678"));
    assert!(is_valid_australian_phone("+61 2 1234 5678"));
}

#[test]
fn test_phone_rejects_wrong_lengths() {
    assert!(!is_valid_australian_phone("12345"));
    assert!(!is_valid_australian_phone("0212 3456 7890"));
    assert!(!is_valid_australian_phone("041234567"));
    assert!(!is_valid_australian_phone("+610412345678"));
}

#[test]
fn test_phone_rejects_invalid_area_digit() {
    assert!(!is_valid_australian_phone("0112345678"));
    assert!(!is_valid_australian_phone("0012345678"));
    assert!(!is_valid_australian_phone("(01) 1234 5678"));
}

#[test]
fn test_phone_rejects_blank_and_letters() {
    assert!(!is_valid_australian_phone(""));
    assert!(!is_valid_australian_phone("   "));
    assert!(!is_valid_australian_phone("04123456ab"));
}

#[test]
fn test_person_name_accepts_letters_spaces_apostrophes_hyphens() {
    assert!(is_valid_person_name("Mary-Jane O'Neil"));
    assert!(is_valid_person_name("van der Berg"));
}

#[test]
fn test_person_name_rejects_digits_and_symbols() {
    assert!(!is_valid_person_name(""));
    assert!(!is_valid_person_name("R2D2"));
    assert!(!is_valid_person_name("Smith."));
    assert!(!is_valid_person_name("José"));
}

#[test]
fn test_date_accepts_today_and_later() {
    assert!(is_future_or_today_date("2026-10-18", TODAY));
    assert!(is_future_or_today_date("2026-10-19", TODAY));
    assert!(is_future_or_today_date("2027-01-01", TODAY));
}

#[test]
fn test_date_rejects_past_days() {
    assert!(!is_future_or_today_date("2026-10-17", TODAY));
    assert!(!is_future_or_today_date("1999-12-31", TODAY));
}

#[test]
fn test_date_rejects_unparseable_values() {
    assert!(!is_future_or_today_date("", TODAY));
    assert!(!is_future_or_today_date("tomorrow", TODAY));
    assert!(!is_future_or_today_date("2026-02-30", TODAY));
    assert!(!is_future_or_today_date("18/10/2026", TODAY));
}

#[test]
fn test_shape_dispatches_to_validator() {
    assert!(Shape::Email.accepts("a@b.co", TODAY));
    assert!(!Shape::Email.accepts("a@b", TODAY));
    assert!(Shape::AustralianPhone.accepts("0412345678", TODAY));
    assert!(Shape::PersonName.accepts("Ann", TODAY));
    assert!(Shape::FutureOrTodayDate.accepts("2026-10-18", TODAY));
    assert!(!Shape::FutureOrTodayDate.accepts("2026-10-17", TODAY));
}

#[test]
fn test_patterns_compile() {
    let email: &Regex = LazyLock::force(&EMAIL_PATTERN);
    let phone: &Regex = LazyLock::force(&AUSTRALIAN_PHONE_PATTERN);

    assert!(email.is_match("a@b.co"));
    assert!(phone.is_match("(02)12345678"));
}
