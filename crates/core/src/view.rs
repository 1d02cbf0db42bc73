// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The capability interface between page behaviors and the rendered page.
//!
//! Controllers never touch markup directly. Everything they need from the
//! page is expressed as a small set of primitive operations on [`View`],
//! so a real renderer and the in-memory page used by tests are
//! interchangeable.

use crate::error::ViewError;
use wellspring_domain::{ElementId, ErrorScope};

/// Border treatment of a form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    /// The normal input border.
    #[default]
    Neutral,
    /// The border of an input holding an invalid value.
    Error,
}

impl Border {
    /// Returns the border color.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Neutral => "#e0e0e0",
            Self::Error => "#ef5350",
        }
    }
}

/// Where an element should land when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Top of the element aligned with the top of the viewport.
    Start,
    /// Element centered in the viewport.
    Center,
}

/// Broad kind of a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A container that is shown or hidden as a whole.
    Region,
    /// A single-line text, email, tel or date input.
    Input,
    /// A checkbox input.
    Checkbox,
    /// A drop-down selector.
    Select,
    /// A multi-line text input.
    TextArea,
    /// The inline message beside a form field.
    ErrorText,
    /// A clickable button.
    Button,
    /// A link.
    Link,
    /// Plain text content.
    Text,
}

impl ElementKind {
    /// Returns true for elements that hold user input.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(
            self,
            Self::Input | Self::Checkbox | Self::Select | Self::TextArea
        )
    }
}

/// Primitive operations on the rendered page.
///
/// Every mutating operation fails with [`ViewError::MissingElement`] if the
/// element is absent; it never fails for any other reason.
pub trait View {
    /// Replaces the text content of an element.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is absent.
    fn set_text(&mut self, element: ElementId, text: &str) -> Result<(), ViewError>;

    /// Shows or hides an element.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is absent.
    fn set_visible(&mut self, element: ElementId, visible: bool) -> Result<(), ViewError>;

    /// Sets the border of an input.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is absent.
    fn set_border(&mut self, element: ElementId, border: Border) -> Result<(), ViewError>;

    /// Adds a style class. Adding a class twice has no further effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is absent.
    fn add_class(&mut self, element: ElementId, class: &str) -> Result<(), ViewError>;

    /// Removes a style class if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is absent.
    fn remove_class(&mut self, element: ElementId, class: &str) -> Result<(), ViewError>;

    /// Sets an attribute, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is absent.
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str)
    -> Result<(), ViewError>;

    /// Moves keyboard focus to an element.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is absent.
    fn focus(&mut self, element: ElementId) -> Result<(), ViewError>;

    /// Scrolls an element into view.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is absent.
    fn scroll_into_view(&mut self, element: ElementId, align: ScrollAlign)
    -> Result<(), ViewError>;

    /// Restores every input inside `container` to its default value.
    ///
    /// # Errors
    ///
    /// Returns an error if the container is absent.
    fn reset_inputs(&mut self, container: ElementId) -> Result<(), ViewError>;

    /// Inserts a new element as the first child of the page body.
    ///
    /// # Errors
    ///
    /// Implementations may fail if the element cannot be created.
    fn prepend_element(&mut self, element: ElementId, kind: ElementKind) -> Result<(), ViewError>;

    /// Returns the current value of an input, if present.
    fn value(&self, element: ElementId) -> Option<String>;

    /// Returns true if the element is a checked checkbox.
    fn is_checked(&self, element: ElementId) -> bool;

    /// Returns the text content of an element, if present.
    fn text(&self, element: ElementId) -> Option<String>;

    /// Returns an attribute value, if the element and attribute exist.
    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    /// Returns true if the element exists and is shown.
    fn is_visible(&self, element: ElementId) -> bool;

    /// Returns true if the element exists and carries the class.
    fn has_class(&self, element: ElementId, class: &str) -> bool;

    /// Returns true if the element has an associated label.
    fn has_label(&self, element: ElementId) -> bool;

    /// Returns true if `element` is `ancestor` or lies inside it.
    fn contains(&self, ancestor: ElementId, element: ElementId) -> bool;

    /// Returns the elements carrying a class, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<ElementId>;

    /// Returns the inline error elements in scope, in document order.
    fn error_elements(&self, scope: ErrorScope) -> Vec<ElementId>;

    /// Returns the input, select and textarea elements in scope, in
    /// document order.
    fn input_elements(&self, scope: ErrorScope) -> Vec<ElementId>;
}

/// Logs and discards a failed view step.
///
/// A missing element only skips the step that needed it; the caller goes
/// on with the rest of its work.
pub(crate) fn skip_missing(result: Result<(), ViewError>) {
    if let Err(err) = result {
        tracing::debug!(%err, "skipping view step");
    }
}
