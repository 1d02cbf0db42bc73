// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::FieldId;
use crate::validation::Shape;
use serde::Serialize;
use thiserror::Error;

/// A BMI measurement that can fall outside its accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    /// Height, accepted between 0.5 m and 2.5 m.
    Height,
    /// Weight, accepted between 20 kg and 300 kg.
    Weight,
}

impl Measurement {
    /// Returns the user-facing message for an out-of-range value.
    #[must_use]
    pub const fn range_message(&self) -> &'static str {
        match self {
            Self::Height => "Please enter a valid height between 50cm-250cm or 0.5m-2.5m.",
            Self::Weight => "Please enter a valid weight between 20kg-300kg.",
        }
    }
}

/// Errors produced while validating user input.
///
/// Every variant is local and recoverable. The `Display` output of each
/// variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// A required field was empty, or a consent checkbox was unchecked.
    #[error("{message}")]
    MissingRequiredField {
        /// The offending field.
        field: FieldId,
        /// The message to show beside the field.
        message: &'static str,
    },

    /// A non-empty value did not match the field's expected shape.
    #[error("{message}")]
    InvalidShape {
        /// The offending field.
        field: FieldId,
        /// The shape the value was checked against.
        shape: Shape,
        /// The message to show beside the field.
        message: &'static str,
    },

    /// A non-empty value was shorter than the field's minimum length.
    #[error("{message}")]
    TooShort {
        /// The offending field.
        field: FieldId,
        /// Minimum number of characters.
        min_length: usize,
        /// The message to show beside the field.
        message: &'static str,
    },

    /// A BMI input was missing, non-numeric, or not positive.
    #[error("Please enter valid height and weight values.")]
    InvalidInput,

    /// A BMI input was numeric but outside its accepted range.
    #[error("{}", .measurement.range_message())]
    OutOfRange {
        /// The measurement that was out of range.
        measurement: Measurement,
    },
}

impl ValidationError {
    /// Returns the field this error belongs to, if it is a field error.
    #[must_use]
    pub const fn field(&self) -> Option<FieldId> {
        match self {
            Self::MissingRequiredField { field, .. }
            | Self::InvalidShape { field, .. }
            | Self::TooShort { field, .. } => Some(*field),
            Self::InvalidInput | Self::OutOfRange { .. } => None,
        }
    }
}
