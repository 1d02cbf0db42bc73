// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ValidationError;
use serde::Serialize;
use std::str::FromStr;

/// Identifier of an element in the page markup.
///
/// Element identifiers are fixed by the markup, so they are always
/// static strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ElementId(&'static str);

impl ElementId {
    /// Creates a new element identifier.
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Returns the identifier as it appears in the markup.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Identifier of a form field.
///
/// A field identifier is also the identifier of the input element that
/// holds the field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FieldId(&'static str);

impl FieldId {
    /// Creates a new field identifier.
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Returns the field identifier value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Returns the input element carrying this field.
    #[must_use]
    pub const fn element(&self) -> ElementId {
        ElementId::new(self.0)
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Unit the BMI height input is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum HeightUnit {
    /// Centimetres. The calculator's default selection.
    #[default]
    Centimetres,
    /// Metres.
    Metres,
}

impl HeightUnit {
    /// Returns the option value used by the unit selector.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Centimetres => "cm",
            Self::Metres => "m",
        }
    }

    /// Converts a height in this unit to metres.
    #[must_use]
    pub fn to_metres(self, height: f64) -> f64 {
        match self {
            Self::Centimetres => height / 100.0,
            Self::Metres => height,
        }
    }
}

impl FromStr for HeightUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cm" => Ok(Self::Centimetres),
            "m" => Ok(Self::Metres),
            _ => Err(ValidationError::InvalidInput),
        }
    }
}

impl std::fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
