// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The BMI calculator widget.

use crate::display::{DisplayCoordinator, DisplayState, FADE_IN_UP, RegionPair};
use crate::view::{View, skip_missing};
use wellspring_domain::{
    BmiCategory, BmiResult, ElementId, HeightUnit, ValidationError, classify_bmi,
};

pub const CALCULATOR_FORM: ElementId = ElementId::new("calculatorForm");
pub const BMI_FORM: ElementId = ElementId::new("bmiForm");
pub const HEIGHT_INPUT: ElementId = ElementId::new("height");
pub const HEIGHT_UNIT: ElementId = ElementId::new("heightUnit");
pub const WEIGHT_INPUT: ElementId = ElementId::new("weight");
pub const ERROR_MESSAGE: ElementId = ElementId::new("errorMessage");
pub const RESULTS: ElementId = ElementId::new("results");
pub const BMI_VALUE: ElementId = ElementId::new("bmiValue");
pub const BMI_CATEGORY: ElementId = ElementId::new("bmiCategory");
pub const BMI_DESCRIPTION: ElementId = ElementId::new("bmiDescription");

const CATEGORY_BASE_CLASS: &str = "bmi-category";

/// Raw calculator input as read from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmiInput {
    /// Height as typed.
    pub height: String,
    /// Selected height unit.
    pub unit: HeightUnit,
    /// Weight in kilograms as typed.
    pub weight: String,
}

impl BmiInput {
    /// Reads the calculator inputs from the page.
    ///
    /// Any unit other than `cm` is taken as metres.
    #[must_use]
    pub fn from_view(view: &dyn View) -> Self {
        let unit: HeightUnit = view
            .value(HEIGHT_UNIT)
            .and_then(|value| value.parse().ok())
            .unwrap_or(HeightUnit::Metres);
        Self {
            height: view.value(HEIGHT_INPUT).unwrap_or_default(),
            unit,
            weight: view.value(WEIGHT_INPUT).unwrap_or_default(),
        }
    }
}

/// Controller for the calculator form, its error banner and result view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmiCalculator {
    display: DisplayCoordinator,
}

impl Default for BmiCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl BmiCalculator {
    /// Creates a calculator showing its input form.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            display: DisplayCoordinator::new(RegionPair {
                form: CALCULATOR_FORM,
                result: RESULTS,
            }),
        }
    }

    #[must_use]
    pub const fn state(&self) -> DisplayState {
        self.display.state()
    }

    /// Classifies the input and shows either the result or the error banner.
    ///
    /// # Errors
    ///
    /// Returns the validation failure after showing it in the error banner.
    /// The calculator stays in `Editing`.
    pub fn submit(
        &mut self,
        view: &mut dyn View,
        input: &BmiInput,
    ) -> Result<BmiResult, ValidationError> {
        let result: BmiResult = match classify_bmi(&input.height, input.unit, &input.weight) {
            Ok(result) => result,
            Err(err) => {
                Self::show_error(view, &err.to_string());
                tracing::info!(%err, "BMI input rejected");
                return Err(err);
            }
        };

        skip_missing(view.set_text(BMI_VALUE, &result.display_value()));
        skip_missing(view.set_text(BMI_CATEGORY, result.category.label()));
        for category in BmiCategory::all() {
            skip_missing(view.remove_class(BMI_CATEGORY, category.css_class()));
        }
        skip_missing(view.add_class(BMI_CATEGORY, CATEGORY_BASE_CLASS));
        skip_missing(view.add_class(BMI_CATEGORY, result.category.css_class()));
        skip_missing(view.set_text(BMI_DESCRIPTION, &result.description));

        self.display.submit(view);
        Self::hide_error(view);

        Ok(result)
    }

    /// Returns to the input form with default values and no error.
    pub fn reset(&mut self, view: &mut dyn View) {
        self.display.reset(view);
        skip_missing(view.reset_inputs(BMI_FORM));
        Self::hide_error(view);
        skip_missing(view.add_class(CALCULATOR_FORM, FADE_IN_UP));
    }

    fn show_error(view: &mut dyn View, message: &str) {
        skip_missing(view.set_text(ERROR_MESSAGE, message));
        DisplayCoordinator::show(view, ERROR_MESSAGE);
        skip_missing(view.add_class(ERROR_MESSAGE, FADE_IN_UP));
    }

    fn hide_error(view: &mut dyn View) {
        DisplayCoordinator::hide(view, ERROR_MESSAGE);
    }
}
