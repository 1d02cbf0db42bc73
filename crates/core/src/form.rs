// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::display::{DisplayCoordinator, DisplayState, RegionPair};
use crate::reporter::{clear_all, report_error};
use crate::view::{ScrollAlign, View, skip_missing};
use time::Date;
use wellspring_domain::{
    ElementId, FieldSpec, FieldValue, FormSnapshot, FormSpec, FormValidation, Requirement,
    ValidationError, validate_form,
};

/// The result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every check passed and the success region is shown.
    Submitted,
    /// At least one field failed; the failures are shown inline.
    Rejected(Vec<ValidationError>),
}

/// Drives one form through validation and its success display.
///
/// `Editing` moves to `Submitted` only when a snapshot passes every check.
/// A rejected attempt stays in `Editing` with every failure shown. `reset`
/// returns to `Editing` from either state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormController {
    spec: FormSpec,
    display: DisplayCoordinator,
}

impl FormController {
    /// Creates a controller for a form in the `Editing` state.
    #[must_use]
    pub const fn new(spec: FormSpec) -> Self {
        let regions: RegionPair = RegionPair {
            form: spec.form_region,
            result: spec.success_region,
        };
        Self {
            spec,
            display: DisplayCoordinator::new(regions),
        }
    }

    #[must_use]
    pub const fn spec(&self) -> &FormSpec {
        &self.spec
    }

    #[must_use]
    pub const fn state(&self) -> DisplayState {
        self.display.state()
    }

    /// Reads the current value of every field from the page.
    #[must_use]
    pub fn read_snapshot(&self, view: &dyn View) -> FormSnapshot {
        let mut snapshot: FormSnapshot = FormSnapshot::new();
        for field in &self.spec.fields {
            let element: ElementId = field.id().element();
            let value: FieldValue = match field.requirement() {
                Requirement::Checked { .. } => FieldValue::Checkbox(view.is_checked(element)),
                Requirement::Optional | Requirement::NonEmpty { .. } => {
                    FieldValue::Text(view.value(element).unwrap_or_default())
                }
            };
            snapshot.set(field.id(), value);
        }
        snapshot
    }

    /// Validates a snapshot and either shows its failures or the success
    /// region.
    ///
    /// Errors from any previous attempt are cleared first, so the page shows
    /// exactly the failures of this snapshot. On rejection, keyboard focus
    /// moves to the first field whose error is showing.
    ///
    /// # Arguments
    ///
    /// * `view` - The page
    /// * `snapshot` - The values read at submission time
    /// * `today` - The current local calendar day
    pub fn handle_submit(
        &mut self,
        view: &mut dyn View,
        snapshot: &FormSnapshot,
        today: Date,
    ) -> SubmitOutcome {
        clear_all(view, self.spec.clear_scope);

        let validation: FormValidation = validate_form(&self.spec, snapshot, today);
        let failures: Vec<ValidationError> = validation.failures().cloned().collect();

        if !failures.is_empty() {
            for failure in &failures {
                if let Some(field) = failure.field().and_then(|id| self.spec.field(id)) {
                    report_error(view, field, &failure.to_string());
                }
            }
            self.focus_first_error(view);

            tracing::info!(
                form = self.spec.name,
                failures = failures.len(),
                "submission rejected"
            );
            return SubmitOutcome::Rejected(failures);
        }

        self.display.submit(view);
        skip_missing(view.scroll_into_view(self.spec.success_region, ScrollAlign::Center));

        tracing::info!(form = self.spec.name, "submission accepted");
        SubmitOutcome::Submitted
    }

    /// Returns the form to `Editing` with empty fields and no errors.
    pub fn reset(&mut self, view: &mut dyn View) {
        self.display.reset(view);
        skip_missing(view.reset_inputs(self.spec.form_region));
        clear_all(view, self.spec.clear_scope);
        skip_missing(view.scroll_into_view(self.spec.form_region, ScrollAlign::Start));
    }

    fn focus_first_error(&self, view: &mut dyn View) {
        let first: Option<&FieldSpec> = self
            .spec
            .fields
            .iter()
            .find(|field| view.is_visible(field.error_element()));

        if let Some(field) = first {
            skip_missing(view.focus(field.id().element()));
        }
    }
}
