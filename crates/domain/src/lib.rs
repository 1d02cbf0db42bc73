// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod bmi;
mod catalog;
mod error;
mod form;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use bmi::{BmiCategory, BmiResult, classify_bmi};
pub use catalog::{
    APPOINTMENT_FORM, APPOINTMENT_SUCCESS, CONTACT_FORM, CONTACT_SUCCESS, PREFERRED_DATE,
    appointment_form, contact_form,
};
pub use error::{Measurement, ValidationError};
pub use form::{
    ErrorScope, FieldSpec, FieldValue, FormSnapshot, FormSpec, FormValidation, LengthRule,
    Requirement, ShapeRule, ValidationOutcome, validate_form,
};
pub use types::{ElementId, FieldId, HeightUnit};
pub use validation::{
    Shape, is_future_or_today_date, is_valid_australian_phone, is_valid_email,
    is_valid_person_name,
};
