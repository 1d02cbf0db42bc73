// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::id;
use crate::{
    Border, DisplayCoordinator, DisplayState, Element, ElementKind, MemoryView, RegionPair, View,
    clear_all, report_error,
};
use wellspring_domain::{
    CONTACT_FORM, ErrorScope, FieldSpec, FormSpec, appointment_form, contact_form,
};

fn field(spec: &FormSpec, name: &'static str) -> FieldSpec {
    *spec
        .field(wellspring_domain::FieldId::new(name))
        .expect("field exists")
}

#[test]
fn test_report_error_shows_message_and_marks_input() {
    let mut view: MemoryView = MemoryView::clinic_page();
    let email: FieldSpec = field(&appointment_form(), "email");

    report_error(&mut view, &email, "Email address is required");

    assert!(view.is_visible(id("emailError")));
    assert_eq!(
        view.text(id("emailError")).as_deref(),
        Some("Email address is required")
    );
    assert_eq!(view.border(id("email")), Some(Border::Error));
}

#[test]
fn test_second_report_replaces_the_first() {
    let mut view: MemoryView = MemoryView::clinic_page();
    let email: FieldSpec = field(&appointment_form(), "email");

    report_error(&mut view, &email, "Email address is required");
    report_error(&mut view, &email, "Please enter a valid email address");

    assert_eq!(
        view.visible_errors(),
        vec![(
            id("emailError"),
            String::from("Please enter a valid email address")
        )]
    );
}

#[test]
fn test_report_without_error_element_still_marks_input() {
    let mut view: MemoryView = MemoryView::new();
    view.insert(id("email"), None, Element::new(ElementKind::Input));
    let email: FieldSpec = field(&appointment_form(), "email");

    report_error(&mut view, &email, "Email address is required");

    assert_eq!(view.border(id("email")), Some(Border::Error));
    assert!(view.visible_errors().is_empty());
}

#[test]
fn test_clear_all_within_a_form_leaves_other_errors() {
    let mut view: MemoryView = MemoryView::clinic_page();
    report_error(
        &mut view,
        &field(&appointment_form(), "phone"),
        "Phone number is required",
    );
    report_error(
        &mut view,
        &field(&contact_form(), "contactEmail"),
        "Email address is required",
    );

    clear_all(&mut view, ErrorScope::Within(CONTACT_FORM));

    assert_eq!(
        view.visible_errors(),
        vec![(id("phoneError"), String::from("Phone number is required"))]
    );
    assert_eq!(view.border(id("contactEmail")), Some(Border::Neutral));
    assert_eq!(view.border(id("phone")), Some(Border::Error));

    clear_all(&mut view, ErrorScope::Document);

    assert!(view.visible_errors().is_empty());
    assert_eq!(view.border(id("phone")), Some(Border::Neutral));
}

#[test]
fn test_border_colors() {
    assert_eq!(Border::Neutral.color(), "#e0e0e0");
    assert_eq!(Border::Error.color(), "#ef5350");
    assert_eq!(Border::default(), Border::Neutral);
}

#[test]
fn test_display_coordinator_swaps_regions() {
    let mut view: MemoryView = MemoryView::clinic_page();
    let mut display: DisplayCoordinator = DisplayCoordinator::new(RegionPair {
        form: CONTACT_FORM,
        result: id("contactSuccessMessage"),
    });
    assert_eq!(display.state(), DisplayState::Editing);

    display.submit(&mut view);
    assert_eq!(display.state(), DisplayState::Submitted);
    assert!(!view.is_visible(CONTACT_FORM));
    assert!(view.is_visible(id("contactSuccessMessage")));
    assert!(view.has_class(id("contactSuccessMessage"), "fade-in-up"));

    display.reset(&mut view);
    assert_eq!(display.state(), DisplayState::Editing);
    assert!(view.is_visible(CONTACT_FORM));
    assert!(!view.is_visible(id("contactSuccessMessage")));
}

#[test]
fn test_display_reset_is_idempotent() {
    let mut view: MemoryView = MemoryView::clinic_page();
    let mut display: DisplayCoordinator = DisplayCoordinator::new(RegionPair {
        form: CONTACT_FORM,
        result: id("contactSuccessMessage"),
    });

    display.reset(&mut view);
    display.reset(&mut view);

    assert_eq!(display.state(), DisplayState::Editing);
    assert!(view.is_visible(CONTACT_FORM));
    assert!(!view.is_visible(id("contactSuccessMessage")));
}

#[test]
fn test_display_tolerates_missing_regions() {
    let mut view: MemoryView = MemoryView::new();
    let mut display: DisplayCoordinator = DisplayCoordinator::new(RegionPair {
        form: id("missingForm"),
        result: id("missingResult"),
    });

    display.submit(&mut view);

    assert_eq!(display.state(), DisplayState::Submitted);
}
