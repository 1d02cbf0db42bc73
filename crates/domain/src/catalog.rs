// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The two forms published on the clinic site.

use crate::form::{ErrorScope, FieldSpec, FormSpec};
use crate::types::{ElementId, FieldId};
use crate::validation::Shape;

pub const APPOINTMENT_FORM: ElementId = ElementId::new("appointmentForm");
pub const APPOINTMENT_SUCCESS: ElementId = ElementId::new("successMessage");
pub const CONTACT_FORM: ElementId = ElementId::new("contactForm");
pub const CONTACT_SUCCESS: ElementId = ElementId::new("contactSuccessMessage");

/// The appointment date input. Its `min` attribute is set to today.
pub const PREFERRED_DATE: FieldId = FieldId::new("preferredDate");

const FIRST_NAME_LETTERS: &str = "First name should only contain letters";
const LAST_NAME_LETTERS: &str = "Last name should only contain letters";
const EMAIL_SHAPE: &str = "Please enter a valid email address";

/// Builds the appointment booking form.
///
/// Errors for this form are cleared across the whole page.
#[must_use]
pub fn appointment_form() -> FormSpec {
    FormSpec {
        name: "appointment",
        form_region: APPOINTMENT_FORM,
        success_region: APPOINTMENT_SUCCESS,
        clear_scope: ErrorScope::Document,
        fields: vec![
            FieldSpec::new(
                FieldId::new("firstName"),
                "first name",
                ElementId::new("firstNameError"),
            )
            .required("First name is required")
            .with_shape(Shape::PersonName, FIRST_NAME_LETTERS),
            FieldSpec::new(
                FieldId::new("lastName"),
                "last name",
                ElementId::new("lastNameError"),
            )
            .required("Last name is required")
            .with_shape(Shape::PersonName, LAST_NAME_LETTERS),
            FieldSpec::new(
                FieldId::new("email"),
                "email address",
                ElementId::new("emailError"),
            )
            .required("Email address is required")
            .with_shape(Shape::Email, EMAIL_SHAPE),
            FieldSpec::new(
                FieldId::new("phone"),
                "phone number",
                ElementId::new("phoneError"),
            )
            .required("Phone number is required")
            .with_shape(
                Shape::AustralianPhone,
                "Please enter a valid Australian phone number",
            ),
            FieldSpec::new(
                PREFERRED_DATE,
                "preferred date",
                ElementId::new("preferredDateError"),
            )
            .required("Preferred date is required")
            .with_shape(Shape::FutureOrTodayDate, "Please select a future date"),
            FieldSpec::new(
                FieldId::new("consent"),
                "consent",
                ElementId::new("consentError"),
            )
            .must_be_checked("You must consent to data collection"),
        ],
    }
}

/// Builds the general enquiry contact form.
///
/// Errors for this form are cleared only inside the form itself.
#[must_use]
pub fn contact_form() -> FormSpec {
    FormSpec {
        name: "contact",
        form_region: CONTACT_FORM,
        success_region: CONTACT_SUCCESS,
        clear_scope: ErrorScope::Within(CONTACT_FORM),
        fields: vec![
            FieldSpec::new(
                FieldId::new("contactFirstName"),
                "first name",
                ElementId::new("contactFirstNameError"),
            )
            .required("First name is required")
            .with_shape(Shape::PersonName, FIRST_NAME_LETTERS),
            FieldSpec::new(
                FieldId::new("contactLastName"),
                "last name",
                ElementId::new("contactLastNameError"),
            )
            .required("Last name is required")
            .with_shape(Shape::PersonName, LAST_NAME_LETTERS),
            FieldSpec::new(
                FieldId::new("contactEmail"),
                "email address",
                ElementId::new("contactEmailError"),
            )
            .required("Email address is required")
            .with_shape(Shape::Email, EMAIL_SHAPE),
            FieldSpec::new(
                FieldId::new("contactPhone"),
                "phone number",
                ElementId::new("contactPhoneError"),
            )
            .with_shape(Shape::AustralianPhone, "Please enter a valid phone number"),
            FieldSpec::new(
                FieldId::new("contactSubject"),
                "subject",
                ElementId::new("contactSubjectError"),
            )
            .required("Please select a subject"),
            FieldSpec::new(
                FieldId::new("contactMessage"),
                "message",
                ElementId::new("contactMessageError"),
            )
            .required("Message is required")
            .with_min_length(10, "Message should be at least 10 characters long"),
        ],
    }
}
