// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Form field rules and the validation pass over a submitted snapshot.

use crate::error::ValidationError;
use crate::types::{ElementId, FieldId};
use crate::validation::Shape;
use std::collections::BTreeMap;
use time::Date;

/// What a field needs in order to count as present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The field may be left blank.
    Optional,
    /// The field must have a non-empty value.
    NonEmpty {
        /// Message shown when the field is empty.
        message: &'static str,
    },
    /// The checkbox must be checked.
    Checked {
        /// Message shown when the box is unchecked.
        message: &'static str,
    },
}

/// A shape check applied to non-empty values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeRule {
    /// The expected shape.
    pub shape: Shape,
    /// Message shown when the value does not match.
    pub message: &'static str,
}

/// A minimum length check applied to non-empty values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
    /// Minimum number of characters.
    pub min_chars: usize,
    /// Message shown when the value is too short.
    pub message: &'static str,
}

/// Static description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    id: FieldId,
    human_name: &'static str,
    error_element: ElementId,
    requirement: Requirement,
    shape: Option<ShapeRule>,
    min_length: Option<LengthRule>,
}

impl FieldSpec {
    /// Creates an optional field with no checks.
    ///
    /// # Arguments
    ///
    /// * `id` - The field (and input element) identifier
    /// * `human_name` - The name of the field as a person would say it
    /// * `error_element` - The element that displays this field's errors
    #[must_use]
    pub const fn new(id: FieldId, human_name: &'static str, error_element: ElementId) -> Self {
        Self {
            id,
            human_name,
            error_element,
            requirement: Requirement::Optional,
            shape: None,
            min_length: None,
        }
    }

    /// Marks the field as requiring a non-empty value.
    #[must_use]
    pub const fn required(mut self, message: &'static str) -> Self {
        self.requirement = Requirement::NonEmpty { message };
        self
    }

    /// Marks the field as a checkbox that must be checked.
    #[must_use]
    pub const fn must_be_checked(mut self, message: &'static str) -> Self {
        self.requirement = Requirement::Checked { message };
        self
    }

    /// Adds a shape check for non-empty values.
    #[must_use]
    pub const fn with_shape(mut self, shape: Shape, message: &'static str) -> Self {
        self.shape = Some(ShapeRule { shape, message });
        self
    }

    /// Adds a minimum length check for non-empty values.
    #[must_use]
    pub const fn with_min_length(mut self, min_chars: usize, message: &'static str) -> Self {
        self.min_length = Some(LengthRule { min_chars, message });
        self
    }

    #[must_use]
    pub const fn id(&self) -> FieldId {
        self.id
    }

    #[must_use]
    pub const fn human_name(&self) -> &'static str {
        self.human_name
    }

    #[must_use]
    pub const fn error_element(&self) -> ElementId {
        self.error_element
    }

    #[must_use]
    pub const fn requirement(&self) -> Requirement {
        self.requirement
    }

    #[must_use]
    pub const fn shape(&self) -> Option<ShapeRule> {
        self.shape
    }

    #[must_use]
    pub const fn min_length(&self) -> Option<LengthRule> {
        self.min_length
    }

    /// Returns true unless the field is optional.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        !matches!(self.requirement, Requirement::Optional)
    }

    /// Validates this field against a snapshot.
    ///
    /// Checks run in order: requirement, shape, minimum length. The first
    /// failing check decides the outcome. Shape and length checks only see
    /// non-empty values, and an optional field whose value is blank after
    /// trimming is not checked at all.
    #[must_use]
    pub fn validate(&self, snapshot: &FormSnapshot, today: Date) -> ValidationOutcome {
        let value: &str = snapshot.text(self.id);

        match self.requirement {
            Requirement::NonEmpty { message } if value.is_empty() => {
                return self.missing(message);
            }
            Requirement::Checked { message } if !snapshot.is_checked(self.id) => {
                return self.missing(message);
            }
            Requirement::Optional if value.trim().is_empty() => {
                return ValidationOutcome::Valid { field: self.id };
            }
            _ => {}
        }

        if value.is_empty() {
            return ValidationOutcome::Valid { field: self.id };
        }

        if let Some(rule) = self.shape.filter(|rule| !rule.shape.accepts(value, today)) {
            return ValidationOutcome::Invalid(ValidationError::InvalidShape {
                field: self.id,
                shape: rule.shape,
                message: rule.message,
            });
        }

        if let Some(rule) = self
            .min_length
            .filter(|rule| value.chars().count() < rule.min_chars)
        {
            return ValidationOutcome::Invalid(ValidationError::TooShort {
                field: self.id,
                min_length: rule.min_chars,
                message: rule.message,
            });
        }

        ValidationOutcome::Valid { field: self.id }
    }

    const fn missing(&self, message: &'static str) -> ValidationOutcome {
        ValidationOutcome::Invalid(ValidationError::MissingRequiredField {
            field: self.id,
            message,
        })
    }
}

/// Where a form's error state lives in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorScope {
    /// Every error element and input in the page.
    Document,
    /// Only elements inside the given container.
    Within(ElementId),
}

/// Static description of a whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    /// Short name used in logs.
    pub name: &'static str,
    /// The region holding the form itself.
    pub form_region: ElementId,
    /// The region shown after a successful submission.
    pub success_region: ElementId,
    /// The scope cleared before each validation pass.
    pub clear_scope: ErrorScope,
    /// Fields in declaration (and document) order.
    pub fields: Vec<FieldSpec>,
}

impl FormSpec {
    /// Looks up a field by identifier.
    #[must_use]
    pub fn field(&self, id: FieldId) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.id == id)
    }
}

/// Raw value of a field at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text typed or selected by the user.
    Text(String),
    /// Checked state of a checkbox.
    Checkbox(bool),
}

/// Values read from a form at the moment of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    values: BTreeMap<FieldId, FieldValue>,
}

impl FormSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Returns the snapshot with a text value set.
    #[must_use]
    pub fn with_text(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, FieldValue::Text(value.into()));
        self
    }

    /// Returns the snapshot with a checkbox state set.
    #[must_use]
    pub fn with_checkbox(mut self, field: FieldId, checked: bool) -> Self {
        self.set(field, FieldValue::Checkbox(checked));
        self
    }

    /// Sets the value of a field, replacing any previous value.
    pub fn set(&mut self, field: FieldId, value: FieldValue) {
        self.values.insert(field, value);
    }

    /// Returns the value of a field, if one was read.
    #[must_use]
    pub fn get(&self, field: FieldId) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// Returns the text of a field, or an empty string if absent.
    ///
    /// A checked checkbox reads as `"on"`, an unchecked one as empty.
    #[must_use]
    pub fn text(&self, field: FieldId) -> &str {
        match self.values.get(&field) {
            Some(FieldValue::Text(value)) => value,
            Some(FieldValue::Checkbox(true)) => "on",
            Some(FieldValue::Checkbox(false)) | None => "",
        }
    }

    /// Returns true if the field is a checked checkbox.
    #[must_use]
    pub fn is_checked(&self, field: FieldId) -> bool {
        matches!(self.values.get(&field), Some(FieldValue::Checkbox(true)))
    }
}

/// Result of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The field passed every check.
    Valid {
        /// The field that was checked.
        field: FieldId,
    },
    /// The field failed a check.
    Invalid(ValidationError),
}

impl ValidationOutcome {
    /// Returns the error, if the field failed.
    #[must_use]
    pub const fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid(err) => Some(err),
        }
    }
}

/// Outcomes for every field of a form, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation {
    outcomes: Vec<ValidationOutcome>,
}

impl FormValidation {
    /// Returns one outcome per field, in declaration order.
    #[must_use]
    pub fn outcomes(&self) -> &[ValidationOutcome] {
        &self.outcomes
    }

    /// Returns the failures, in declaration order.
    pub fn failures(&self) -> impl Iterator<Item = &ValidationError> {
        self.outcomes.iter().filter_map(ValidationOutcome::error)
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Validates every field of `spec` against `snapshot`.
///
/// All fields are checked; a failing field does not stop later fields
/// from being validated.
///
/// # Arguments
///
/// * `spec` - The form being submitted
/// * `snapshot` - The values read at submission time
/// * `today` - The current local calendar day
#[must_use]
pub fn validate_form(spec: &FormSpec, snapshot: &FormSnapshot, today: Date) -> FormValidation {
    let outcomes: Vec<ValidationOutcome> = spec
        .fields
        .iter()
        .map(|field| field.validate(snapshot, today))
        .collect();

    tracing::debug!(
        form = spec.name,
        failures = outcomes.iter().filter(|o| o.error().is_some()).count(),
        "validated form snapshot"
    );

    FormValidation { outcomes }
}
