// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Baseline accessibility affordances applied when the page loads.

use crate::error::ViewError;
use crate::nav::{HAMBURGER, NAV_LINK_CLASS};
use crate::view::{ElementKind, View, skip_missing};
use wellspring_domain::{ElementId, ErrorScope};

pub const SKIP_LINK: ElementId = ElementId::new("skipLink");
pub const MAIN_CONTENT: ElementId = ElementId::new("main-content");

const ACTIVATABLE_CLASSES: [&str; 3] = ["cta-button", "action-button", "service-cta"];
const ARIA_LABEL: &str = "aria-label";

/// Adds the skip link, makes the hamburger keyboard operable and labels
/// inputs and nav links that lack an accessible name.
///
/// # Errors
///
/// Returns an error if the skip link cannot be inserted.
pub fn install_accessibility(view: &mut dyn View) -> Result<(), ViewError> {
    view.prepend_element(SKIP_LINK, ElementKind::Link)?;
    view.set_attribute(SKIP_LINK, "href", &format!("#{MAIN_CONTENT}"))?;
    view.set_text(SKIP_LINK, "Skip to main content")?;
    view.add_class(SKIP_LINK, "skip-link")?;
    set_skip_link_focus(view, false);

    skip_missing(view.set_attribute(HAMBURGER, "tabindex", "0"));
    skip_missing(view.set_attribute(HAMBURGER, "role", "button"));
    skip_missing(view.set_attribute(HAMBURGER, ARIA_LABEL, "Toggle navigation menu"));

    for input in view.input_elements(ErrorScope::Document) {
        if view.has_label(input) || view.attribute(input, ARIA_LABEL).is_some() {
            continue;
        }
        if let Some(placeholder) = view.attribute(input, "placeholder") {
            skip_missing(view.set_attribute(input, ARIA_LABEL, &placeholder));
        }
    }

    for link in view.elements_with_class(NAV_LINK_CLASS) {
        if view.attribute(link, ARIA_LABEL).is_some() {
            continue;
        }
        let text: String = view.text(link).unwrap_or_default();
        skip_missing(view.set_attribute(link, ARIA_LABEL, &format!("Navigate to {text}")));
    }

    Ok(())
}

/// Slides the skip link on screen while it has focus.
pub fn set_skip_link_focus(view: &mut dyn View, focused: bool) {
    let top: &str = if focused { "top: 6px" } else { "top: -40px" };
    skip_missing(view.set_attribute(SKIP_LINK, "style", top));
}

/// Returns true if Enter or Space on `element` should act as a click.
#[must_use]
pub fn is_activatable(view: &dyn View, element: ElementId) -> bool {
    element == HAMBURGER
        || ACTIVATABLE_CLASSES
            .iter()
            .any(|class| view.has_class(element, class))
}
