// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{Measurement, ValidationError};
use crate::types::HeightUnit;
use serde::Serialize;
use std::ops::RangeInclusive;

const HEIGHT_RANGE_METRES: RangeInclusive<f64> = 0.5..=2.5;
const WEIGHT_RANGE_KG: RangeInclusive<f64> = 20.0..=300.0;

/// Weight category derived from a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BmiCategory {
    /// BMI below 18.5.
    Underweight,
    /// BMI from 18.5 up to (not including) 25.
    Normal,
    /// BMI from 25 up to (not including) 30.
    Overweight,
    /// BMI of 30 or more.
    Obese,
}

impl BmiCategory {
    /// Classifies an unrounded BMI value.
    ///
    /// Each category includes its lower bound, so exactly 18.5 is `Normal`,
    /// exactly 25 is `Overweight` and exactly 30 is `Obese`.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Returns the heading shown in the result view.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal Weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Returns the short word used in the result description.
    #[must_use]
    pub const fn word(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Returns the style class applied to the category heading.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }

    /// All categories, lowest first.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Underweight, Self::Normal, Self::Overweight, Self::Obese]
    }
}

/// A classified BMI computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal place.
    pub value: f64,
    /// Category of the unrounded BMI.
    pub category: BmiCategory,
    /// One-line summary for the result view.
    pub description: String,
}

impl BmiResult {
    /// Returns the rounded value formatted with exactly one decimal.
    #[must_use]
    pub fn display_value(&self) -> String {
        format!("{:.1}", self.value)
    }
}

/// Computes and classifies a BMI from raw calculator input.
///
/// # Arguments
///
/// * `height_raw` - The height as typed, in `unit`
/// * `unit` - The unit selected for the height
/// * `weight_raw` - The weight as typed, in kilograms
///
/// # Errors
///
/// Returns an error if:
/// - Either value is empty, non-numeric, or not positive (`InvalidInput`)
/// - The height in metres is outside 0.5..=2.5 (`OutOfRange`)
/// - The weight is outside 20..=300 kg (`OutOfRange`)
pub fn classify_bmi(
    height_raw: &str,
    unit: HeightUnit,
    weight_raw: &str,
) -> Result<BmiResult, ValidationError> {
    let (Some(height), Some(weight)) = (parse_positive(height_raw), parse_positive(weight_raw))
    else {
        return Err(ValidationError::InvalidInput);
    };

    let height_metres: f64 = unit.to_metres(height);
    if !HEIGHT_RANGE_METRES.contains(&height_metres) {
        return Err(ValidationError::OutOfRange {
            measurement: Measurement::Height,
        });
    }

    if !WEIGHT_RANGE_KG.contains(&weight) {
        return Err(ValidationError::OutOfRange {
            measurement: Measurement::Weight,
        });
    }

    let bmi: f64 = weight / (height_metres * height_metres);
    let category: BmiCategory = BmiCategory::from_bmi(bmi);
    let shown: String = to_tenths(bmi);
    let value: f64 = shown.parse::<f64>().unwrap_or(bmi);

    tracing::debug!(bmi, ?category, "classified BMI");

    Ok(BmiResult {
        value,
        category,
        description: format!("Your BMI is {shown} — {}", category.word()),
    })
}

/// Formats a positive value to one decimal, rounding its exact binary value.
///
/// Only a true tie rounds up. `{:.1}` already rounds the exact value but
/// sends ties to even, and a tie at tenths is always a multiple of 0.25
/// whose quadruple is odd.
#[allow(clippy::float_cmp)]
fn to_tenths(value: f64) -> String {
    if (value * 4.0) % 2.0 == 1.0 {
        let up: f64 = (value * 10.0).ceil() / 10.0;
        return format!("{up:.1}");
    }
    format!("{value:.1}")
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}
