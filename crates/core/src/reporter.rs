// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The single write path for inline field errors.

use crate::view::{Border, View, skip_missing};
use wellspring_domain::{ElementId, ErrorScope, FieldSpec};

/// Shows `message` beside `field` and marks its input as invalid.
///
/// Reporting a second error for the same field replaces the first.
/// A missing error element or input only skips that half of the report.
pub fn report_error(view: &mut dyn View, field: &FieldSpec, message: &str) {
    let error_element: ElementId = field.error_element();
    skip_missing(view.set_text(error_element, message));
    skip_missing(view.set_visible(error_element, true));
    skip_missing(view.set_border(field.id().element(), Border::Error));

    tracing::debug!(field = %field.id(), message, "reported field error");
}

/// Hides every inline error in `scope` and restores every input border in
/// `scope` to neutral.
pub fn clear_all(view: &mut dyn View, scope: ErrorScope) {
    for element in view.error_elements(scope) {
        skip_missing(view.set_visible(element, false));
        skip_missing(view.set_text(element, ""));
    }

    for input in view.input_elements(scope) {
        skip_missing(view.set_border(input, Border::Neutral));
    }
}
