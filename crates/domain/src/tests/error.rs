// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FieldId, Measurement, Shape, ValidationError};

#[test]
fn test_field_errors_display_their_message() {
    let err: ValidationError = ValidationError::InvalidShape {
        field: FieldId::new("email"),
        shape: Shape::Email,
        message: "Please enter a valid email address",
    };

    assert_eq!(err.to_string(), "Please enter a valid email address");
    assert_eq!(err.field(), Some(FieldId::new("email")));
}

#[test]
fn test_bmi_errors_display_calculator_messages() {
    assert_eq!(
        ValidationError::InvalidInput.to_string(),
        "Please enter valid height and weight values."
    );
    assert_eq!(
        ValidationError::OutOfRange {
            measurement: Measurement::Height
        }
        .to_string(),
        "Please enter a valid height between 50cm-250cm or 0.5m-2.5m."
    );
    assert_eq!(
        ValidationError::OutOfRange {
            measurement: Measurement::Weight
        }
        .to_string(),
        "Please enter a valid weight between 20kg-300kg."
    );
    assert_eq!(ValidationError::InvalidInput.field(), None);
}
