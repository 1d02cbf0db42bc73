// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! An in-memory page that implements [`View`].
//!
//! `MemoryView` keeps just enough state per element (visibility, text,
//! value, classes, attributes, border) to observe what the controllers
//! do. [`MemoryView::clinic_page`] builds the markup of the clinic site.

use crate::a11y::MAIN_CONTENT;
use crate::bmi::{
    BMI_CATEGORY, BMI_DESCRIPTION, BMI_FORM, BMI_VALUE, CALCULATOR_FORM, ERROR_MESSAGE,
    HEIGHT_INPUT, HEIGHT_UNIT, RESULTS, WEIGHT_INPUT,
};
use crate::error::ViewError;
use crate::nav::{HAMBURGER, NAV_LINK_CLASS, NAV_MENU};
use crate::popup::{GET_STARTED_BUTTON, STUDENT_INFO_BUTTON, WELCOME_POPUP};
use crate::view::{Border, ElementKind, ScrollAlign, View};
use std::collections::{BTreeMap, BTreeSet};
use wellspring_domain::{
    ElementId, ErrorScope, FieldId, FormSpec, Requirement, appointment_form, contact_form,
};

/// State of one element of the in-memory page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Broad kind of the element.
    pub kind: ElementKind,
    /// The containing element, if any.
    pub parent: Option<ElementId>,
    /// Text content.
    pub text: String,
    /// Current input value.
    pub value: String,
    /// Value restored by a form reset.
    pub default_value: String,
    /// Checked state of a checkbox.
    pub checked: bool,
    /// Whether the element is shown.
    pub visible: bool,
    /// Border treatment of an input.
    pub border: Border,
    /// Style classes.
    pub classes: BTreeSet<String>,
    /// Attributes.
    pub attributes: BTreeMap<String, String>,
    /// Whether a label is associated with the element.
    pub labelled: bool,
}

impl Element {
    /// Creates a visible, empty element of the given kind.
    #[must_use]
    pub const fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            parent: None,
            text: String::new(),
            value: String::new(),
            default_value: String::new(),
            checked: false,
            visible: true,
            border: Border::Neutral,
            classes: BTreeSet::new(),
            attributes: BTreeMap::new(),
            labelled: false,
        }
    }
}

/// A page held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    elements: BTreeMap<ElementId, Element>,
    order: Vec<ElementId>,
    focused: Option<ElementId>,
    scrolls: Vec<(ElementId, ScrollAlign)>,
}

impl MemoryView {
    /// Creates an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element at the end of the document.
    ///
    /// An element inserted under an existing identifier replaces it but
    /// keeps its document position.
    pub fn insert(&mut self, id: ElementId, parent: Option<ElementId>, mut element: Element) {
        element.parent = parent;
        if self.elements.insert(id, element).is_none() {
            self.order.push(id);
        }
    }

    /// Returns an element by identifier.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Types a value into an input, as a visitor would.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is absent.
    pub fn type_value(&mut self, id: ElementId, value: &str) -> Result<(), ViewError> {
        self.element_mut(id)?.value = value.to_string();
        Ok(())
    }

    /// Ticks or unticks a checkbox.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is absent.
    pub fn set_checked(&mut self, id: ElementId, checked: bool) -> Result<(), ViewError> {
        self.element_mut(id)?.checked = checked;
        Ok(())
    }

    /// Returns the element that currently has keyboard focus.
    #[must_use]
    pub const fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Returns every scroll request made so far, oldest first.
    #[must_use]
    pub fn scrolls(&self) -> &[(ElementId, ScrollAlign)] {
        &self.scrolls
    }

    /// Returns the border of an element, if present.
    #[must_use]
    pub fn border(&self, id: ElementId) -> Option<Border> {
        self.elements.get(&id).map(|element| element.border)
    }

    /// Returns the visible error elements with their messages, in
    /// document order.
    #[must_use]
    pub fn visible_errors(&self) -> Vec<(ElementId, String)> {
        self.order
            .iter()
            .filter_map(|id| self.elements.get(id).map(|element| (*id, element)))
            .filter(|(_, element)| element.kind == ElementKind::ErrorText && element.visible)
            .map(|(id, element)| (id, element.text.clone()))
            .collect()
    }

    /// Builds the markup of the clinic site.
    ///
    /// The page contains the navigation bar, the welcome popup, the BMI
    /// calculator, the appointment and contact forms, a handful of
    /// reveal-on-scroll cards and a footer newsletter input.
    #[must_use]
    pub fn clinic_page() -> Self {
        let mut page: Self = Self::new();

        page.insert(NAV_MENU, None, Element::new(ElementKind::Region));
        for (id, label) in [
            ("navHome", "Home"),
            ("navServices", "Services"),
            ("navBmi", "BMI Calculator"),
            ("navAppointments", "Appointments"),
            ("navContact", "Contact"),
        ] {
            let mut link: Element = Element::new(ElementKind::Link);
            link.text = label.to_string();
            link.classes.insert(NAV_LINK_CLASS.to_string());
            page.insert(ElementId::new(id), Some(NAV_MENU), link);
        }
        page.insert(
            STUDENT_INFO_BUTTON,
            Some(NAV_MENU),
            Element::new(ElementKind::Button),
        );
        page.insert(HAMBURGER, None, Element::new(ElementKind::Button));

        let mut popup: Element = Element::new(ElementKind::Region);
        popup.visible = false;
        page.insert(WELCOME_POPUP, None, popup);
        page.insert(
            GET_STARTED_BUTTON,
            Some(WELCOME_POPUP),
            Element::new(ElementKind::Button),
        );

        page.insert(MAIN_CONTENT, None, Element::new(ElementKind::Region));
        let mut hero: Element = Element::new(ElementKind::Region);
        hero.classes.insert(String::from("hero-content"));
        page.insert(ElementId::new("heroContent"), Some(MAIN_CONTENT), hero);
        let mut cta: Element = Element::new(ElementKind::Button);
        cta.classes.insert(String::from("cta-button"));
        page.insert(ElementId::new("bookNowButton"), Some(MAIN_CONTENT), cta);
        for id in ["serviceGeneral", "serviceChildHealth", "serviceVaccinations"] {
            let mut card: Element = Element::new(ElementKind::Region);
            card.classes.insert(String::from("service-card"));
            page.insert(ElementId::new(id), Some(MAIN_CONTENT), card);
        }

        page.add_bmi_calculator();
        page.add_form(&appointment_form());
        page.add_form(&contact_form());

        let mut newsletter: Element = Element::new(ElementKind::Input);
        newsletter
            .attributes
            .insert(String::from("placeholder"), String::from("Your email address"));
        page.insert(ElementId::new("newsletterEmail"), None, newsletter);

        page
    }

    fn add_bmi_calculator(&mut self) {
        self.insert(CALCULATOR_FORM, Some(MAIN_CONTENT), Element::new(ElementKind::Region));
        self.insert(BMI_FORM, Some(CALCULATOR_FORM), Element::new(ElementKind::Region));
        for id in [HEIGHT_INPUT, WEIGHT_INPUT] {
            let mut input: Element = Element::new(ElementKind::Input);
            input.labelled = true;
            self.insert(id, Some(BMI_FORM), input);
        }
        let mut unit: Element = Element::new(ElementKind::Select);
        unit.labelled = true;
        unit.value = String::from("cm");
        unit.default_value = String::from("cm");
        self.insert(HEIGHT_UNIT, Some(BMI_FORM), unit);

        let mut error: Element = Element::new(ElementKind::Region);
        error.visible = false;
        self.insert(ERROR_MESSAGE, Some(MAIN_CONTENT), error);

        let mut results: Element = Element::new(ElementKind::Region);
        results.visible = false;
        self.insert(RESULTS, Some(MAIN_CONTENT), results);
        for id in [BMI_VALUE, BMI_CATEGORY, BMI_DESCRIPTION] {
            self.insert(id, Some(RESULTS), Element::new(ElementKind::Text));
        }
    }

    fn add_form(&mut self, spec: &FormSpec) {
        self.insert(spec.form_region, Some(MAIN_CONTENT), Element::new(ElementKind::Region));
        for field in &spec.fields {
            let mut input: Element = Element::new(input_kind(field.id(), field.requirement()));
            input.labelled = true;
            self.insert(field.id().element(), Some(spec.form_region), input);

            let mut error: Element = Element::new(ElementKind::ErrorText);
            error.visible = false;
            error.classes.insert(String::from("error-text"));
            self.insert(field.error_element(), Some(spec.form_region), error);
        }

        let mut success: Element = Element::new(ElementKind::Region);
        success.visible = false;
        self.insert(spec.success_region, Some(MAIN_CONTENT), success);
    }

    fn element_mut(&mut self, id: ElementId) -> Result<&mut Element, ViewError> {
        self.elements
            .get_mut(&id)
            .ok_or(ViewError::MissingElement(id))
    }

    fn in_scope(&self, id: ElementId, scope: ErrorScope) -> bool {
        match scope {
            ErrorScope::Document => true,
            ErrorScope::Within(container) => self.contains(container, id),
        }
    }

    fn scoped(&self, scope: ErrorScope, keep: impl Fn(&Element) -> bool) -> Vec<ElementId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.elements.get(id).is_some_and(&keep))
            .filter(|id| self.in_scope(*id, scope))
            .collect()
    }
}

fn input_kind(field: FieldId, requirement: Requirement) -> ElementKind {
    match (field.as_str(), requirement) {
        (_, Requirement::Checked { .. }) => ElementKind::Checkbox,
        ("contactSubject", _) => ElementKind::Select,
        ("contactMessage", _) => ElementKind::TextArea,
        _ => ElementKind::Input,
    }
}

impl View for MemoryView {
    fn set_text(&mut self, element: ElementId, text: &str) -> Result<(), ViewError> {
        self.element_mut(element)?.text = text.to_string();
        Ok(())
    }

    fn set_visible(&mut self, element: ElementId, visible: bool) -> Result<(), ViewError> {
        self.element_mut(element)?.visible = visible;
        Ok(())
    }

    fn set_border(&mut self, element: ElementId, border: Border) -> Result<(), ViewError> {
        self.element_mut(element)?.border = border;
        Ok(())
    }

    fn add_class(&mut self, element: ElementId, class: &str) -> Result<(), ViewError> {
        self.element_mut(element)?.classes.insert(class.to_string());
        Ok(())
    }

    fn remove_class(&mut self, element: ElementId, class: &str) -> Result<(), ViewError> {
        self.element_mut(element)?.classes.remove(class);
        Ok(())
    }

    fn set_attribute(
        &mut self,
        element: ElementId,
        name: &str,
        value: &str,
    ) -> Result<(), ViewError> {
        self.element_mut(element)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn focus(&mut self, element: ElementId) -> Result<(), ViewError> {
        self.element_mut(element)?;
        self.focused = Some(element);
        Ok(())
    }

    fn scroll_into_view(
        &mut self,
        element: ElementId,
        align: ScrollAlign,
    ) -> Result<(), ViewError> {
        self.element_mut(element)?;
        self.scrolls.push((element, align));
        Ok(())
    }

    fn reset_inputs(&mut self, container: ElementId) -> Result<(), ViewError> {
        self.element_mut(container)?;
        let inputs: Vec<ElementId> = self.scoped(ErrorScope::Within(container), |element| {
            element.kind.is_input()
        });
        for id in inputs {
            let input: &mut Element = self.element_mut(id)?;
            input.value.clone_from(&input.default_value);
            input.checked = false;
        }
        Ok(())
    }

    fn prepend_element(&mut self, element: ElementId, kind: ElementKind) -> Result<(), ViewError> {
        if self.elements.insert(element, Element::new(kind)).is_none() {
            self.order.insert(0, element);
        }
        Ok(())
    }

    fn value(&self, element: ElementId) -> Option<String> {
        self.elements.get(&element).map(|e| e.value.clone())
    }

    fn is_checked(&self, element: ElementId) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|e| e.kind == ElementKind::Checkbox && e.checked)
    }

    fn text(&self, element: ElementId) -> Option<String> {
        self.elements.get(&element).map(|e| e.text.clone())
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.elements
            .get(&element)
            .and_then(|e| e.attributes.get(name).cloned())
    }

    fn is_visible(&self, element: ElementId) -> bool {
        self.elements.get(&element).is_some_and(|e| e.visible)
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|e| e.classes.contains(class))
    }

    fn has_label(&self, element: ElementId) -> bool {
        self.elements.get(&element).is_some_and(|e| e.labelled)
    }

    fn contains(&self, ancestor: ElementId, element: ElementId) -> bool {
        // A chain longer than the document has looped back on itself.
        let mut current: Option<ElementId> = Some(element);
        for _ in 0..=self.elements.len() {
            let Some(id) = current else {
                return false;
            };
            if id == ancestor {
                return true;
            }
            current = self.elements.get(&id).and_then(|e| e.parent);
        }
        false
    }

    fn elements_with_class(&self, class: &str) -> Vec<ElementId> {
        self.scoped(ErrorScope::Document, |element| element.classes.contains(class))
    }

    fn error_elements(&self, scope: ErrorScope) -> Vec<ElementId> {
        self.scoped(scope, |element| element.kind == ElementKind::ErrorText)
    }

    fn input_elements(&self, scope: ErrorScope) -> Vec<ElementId> {
        self.scoped(scope, |element| element.kind.is_input())
    }
}
