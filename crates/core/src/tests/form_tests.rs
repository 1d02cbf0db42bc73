// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{TODAY, fill_appointment, fill_contact, id};
use crate::{Border, DisplayState, FormController, MemoryView, ScrollAlign, SubmitOutcome, View};
use wellspring_domain::{
    APPOINTMENT_FORM, APPOINTMENT_SUCCESS, CONTACT_FORM, CONTACT_SUCCESS, FormSnapshot,
    appointment_form, contact_form,
};

fn submit(controller: &mut FormController, view: &mut MemoryView) -> SubmitOutcome {
    let snapshot: FormSnapshot = controller.read_snapshot(view);
    controller.handle_submit(view, &snapshot, TODAY)
}

fn error_messages(view: &MemoryView) -> Vec<(&'static str, String)> {
    view.visible_errors()
        .into_iter()
        .map(|(element, message)| (element.as_str(), message))
        .collect()
}

#[test]
fn test_valid_appointment_shows_success_region() {
    let mut view: MemoryView = MemoryView::clinic_page();
    fill_appointment(&mut view);
    let mut controller: FormController = FormController::new(appointment_form());

    let outcome: SubmitOutcome = submit(&mut controller, &mut view);

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(controller.state(), DisplayState::Submitted);
    assert!(!view.is_visible(APPOINTMENT_FORM));
    assert!(view.is_visible(APPOINTMENT_SUCCESS));
    assert!(view.has_class(APPOINTMENT_SUCCESS, "fade-in-up"));
    assert_eq!(
        view.scrolls().last(),
        Some(&(APPOINTMENT_SUCCESS, ScrollAlign::Center))
    );
    assert!(view.visible_errors().is_empty());
}

#[test]
fn test_missing_phone_shows_only_the_phone_error() {
    let mut view: MemoryView = MemoryView::clinic_page();
    fill_appointment(&mut view);
    view.type_value(id("phone"), "").unwrap();
    let mut controller: FormController = FormController::new(appointment_form());

    let outcome: SubmitOutcome = submit(&mut controller, &mut view);

    let SubmitOutcome::Rejected(failures) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(failures.len(), 1);
    assert_eq!(
        error_messages(&view),
        vec![("phoneError", String::from("Phone number is required"))]
    );
    assert_eq!(view.border(id("phone")), Some(Border::Error));
    assert_eq!(view.border(id("email")), Some(Border::Neutral));
    assert_eq!(view.focused(), Some(id("phone")));
    assert_eq!(controller.state(), DisplayState::Editing);
    assert!(view.is_visible(APPOINTMENT_FORM));
    assert!(!view.is_visible(APPOINTMENT_SUCCESS));
}

#[test]
fn test_empty_appointment_reports_every_field_and_focuses_the_first() {
    let mut view: MemoryView = MemoryView::clinic_page();
    let mut controller: FormController = FormController::new(appointment_form());

    let outcome: SubmitOutcome = submit(&mut controller, &mut view);

    let SubmitOutcome::Rejected(failures) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(failures.len(), 6);
    assert_eq!(view.visible_errors().len(), 6);
    assert_eq!(view.focused(), Some(id("firstName")));
    assert_eq!(
        view.text(id("consentError")).as_deref(),
        Some("You must consent to data collection")
    );
}

#[test]
fn test_resubmit_shows_only_the_fresh_failures() {
    let mut view: MemoryView = MemoryView::clinic_page();
    let mut controller: FormController = FormController::new(appointment_form());
    submit(&mut controller, &mut view);

    fill_appointment(&mut view);
    view.type_value(id("email"), "jane@").unwrap();
    submit(&mut controller, &mut view);

    assert_eq!(
        error_messages(&view),
        vec![(
            "emailError",
            String::from("Please enter a valid email address")
        )]
    );
    assert_eq!(view.border(id("firstName")), Some(Border::Neutral));
    assert_eq!(view.text(id("firstNameError")).as_deref(), Some(""));
    assert_eq!(view.focused(), Some(id("email")));
}

#[test]
fn test_preferred_date_must_not_be_in_the_past() {
    let mut view: MemoryView = MemoryView::clinic_page();
    fill_appointment(&mut view);
    view.type_value(id("preferredDate"), "2026-10-17").unwrap();
    let mut controller: FormController = FormController::new(appointment_form());

    submit(&mut controller, &mut view);
    assert_eq!(
        error_messages(&view),
        vec![(
            "preferredDateError",
            String::from("Please select a future date")
        )]
    );

    view.type_value(id("preferredDate"), "2026-10-18").unwrap();
    assert_eq!(
        submit(&mut controller, &mut view),
        SubmitOutcome::Submitted
    );
}

#[test]
fn test_unchecked_consent_is_rejected() {
    let mut view: MemoryView = MemoryView::clinic_page();
    fill_appointment(&mut view);
    view.set_checked(id("consent"), false).unwrap();
    let mut controller: FormController = FormController::new(appointment_form());

    submit(&mut controller, &mut view);

    assert_eq!(view.focused(), Some(id("consent")));
    assert_eq!(view.border(id("consent")), Some(Border::Error));
}

#[test]
fn test_contact_phone_is_optional_but_checked_when_given() {
    let mut view: MemoryView = MemoryView::clinic_page();
    fill_contact(&mut view);
    let mut controller: FormController = FormController::new(contact_form());

    assert_eq!(
        submit(&mut controller, &mut view),
        SubmitOutcome::Submitted
    );
    assert!(view.is_visible(CONTACT_SUCCESS));
    assert!(!view.is_visible(CONTACT_FORM));

    let mut view: MemoryView = MemoryView::clinic_page();
    fill_contact(&mut view);
    view.type_value(id("contactPhone"), "12345").unwrap();
    let mut controller: FormController = FormController::new(contact_form());
    submit(&mut controller, &mut view);

    assert_eq!(
        error_messages(&view),
        vec![(
            "contactPhoneError",
            String::from("Please enter a valid phone number")
        )]
    );
}

#[test]
fn test_contact_message_needs_ten_characters() {
    let mut view: MemoryView = MemoryView::clinic_page();
    fill_contact(&mut view);
    view.type_value(id("contactMessage"), "Too short").unwrap();
    let mut controller: FormController = FormController::new(contact_form());

    submit(&mut controller, &mut view);

    assert_eq!(
        error_messages(&view),
        vec![(
            "contactMessageError",
            String::from("Message should be at least 10 characters long")
        )]
    );
    assert_eq!(view.focused(), Some(id("contactMessage")));
}

#[test]
fn test_contact_submit_leaves_appointment_errors_alone() {
    let mut view: MemoryView = MemoryView::clinic_page();
    let mut appointment: FormController = FormController::new(appointment_form());
    let mut contact: FormController = FormController::new(contact_form());

    submit(&mut appointment, &mut view);
    fill_contact(&mut view);
    submit(&mut contact, &mut view);

    assert_eq!(view.visible_errors().len(), 6);
    assert_eq!(view.border(id("firstName")), Some(Border::Error));
}

#[test]
fn test_appointment_submit_clears_contact_errors() {
    let mut view: MemoryView = MemoryView::clinic_page();
    let mut appointment: FormController = FormController::new(appointment_form());
    let mut contact: FormController = FormController::new(contact_form());

    submit(&mut contact, &mut view);
    assert!(view.is_visible(id("contactFirstNameError")));

    fill_appointment(&mut view);
    submit(&mut appointment, &mut view);

    assert!(view.visible_errors().is_empty());
    assert_eq!(view.border(id("contactFirstName")), Some(Border::Neutral));
}

#[test]
fn test_reset_returns_to_an_empty_form() {
    let mut view: MemoryView = MemoryView::clinic_page();
    fill_appointment(&mut view);
    let mut controller: FormController = FormController::new(appointment_form());
    submit(&mut controller, &mut view);

    controller.reset(&mut view);

    assert_eq!(controller.state(), DisplayState::Editing);
    assert!(view.is_visible(APPOINTMENT_FORM));
    assert!(!view.is_visible(APPOINTMENT_SUCCESS));
    assert_eq!(view.value(id("firstName")).as_deref(), Some(""));
    assert!(!view.is_checked(id("consent")));
    assert_eq!(
        view.scrolls().last(),
        Some(&(APPOINTMENT_FORM, ScrollAlign::Start))
    );
}

#[test]
fn test_reset_while_editing_clears_errors() {
    let mut view: MemoryView = MemoryView::clinic_page();
    let mut controller: FormController = FormController::new(contact_form());
    submit(&mut controller, &mut view);

    controller.reset(&mut view);

    assert_eq!(controller.state(), DisplayState::Editing);
    assert!(view.visible_errors().is_empty());
    assert!(view.is_visible(CONTACT_FORM));
}

#[test]
fn test_read_snapshot_takes_checkbox_state() {
    let mut view: MemoryView = MemoryView::clinic_page();
    fill_appointment(&mut view);
    let controller: FormController = FormController::new(appointment_form());

    let snapshot: FormSnapshot = controller.read_snapshot(&view);

    assert!(snapshot.is_checked(wellspring_domain::FieldId::new("consent")));
    assert_eq!(
        snapshot.text(wellspring_domain::FieldId::new("firstName")),
        "Jane"
    );
}
