// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scenarios that drive the page engine against the in-memory clinic page.

use serde::Serialize;
use std::time::Duration;
use wellspring::{
    Clock, CoreError, FormKind, GET_STARTED_BUTTON, HEIGHT_INPUT, HEIGHT_UNIT, Key, MemoryView,
    Page, PopupState, PopupVariant, Reaction, STUDENT_INFO_BUTTON, SubmitOutcome, UiEvent,
    VisitStore, WEIGHT_INPUT, WELCOME_POPUP,
};
use wellspring_domain::{BmiResult, ElementId, HeightUnit, ValidationError};

const POPUP_DELAY: Duration = Duration::from_millis(500);
const ANIMATION_SETTLE: Duration = Duration::from_millis(300);

/// Values typed into the appointment form.
#[derive(Debug, Clone, Default)]
pub struct AppointmentInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_date: String,
    pub consent: bool,
}

/// Values typed into the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// How the visit scenario closes the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    Accept,
    ClickOutside,
    Escape,
}

/// Options for the welcome popup scenario.
#[derive(Debug, Clone)]
pub struct VisitInput {
    /// Open the popup from the nav bar button after loading.
    pub from_nav: bool,
    /// How to close the popup, if at all.
    pub dismiss: Option<Dismissal>,
}

/// One inline error as shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMessage {
    /// The field the error belongs to. Absent for the BMI banner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    pub message: String,
}

/// Outcome of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Report {
    /// The BMI calculator produced a result.
    Bmi {
        value: String,
        category: &'static str,
        description: String,
    },
    /// A form passed validation and its success message is showing.
    Submitted { form: &'static str },
    /// A form was rejected.
    Rejected {
        form: &'static str,
        errors: Vec<FieldMessage>,
    },
    /// The welcome popup scenario finished.
    Visit {
        popup_shown: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        variant: Option<&'static str>,
        dismissed: bool,
        visited: bool,
    },
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bmi {
                value,
                category,
                description,
            } => write!(f, "BMI {value} ({category})\n{description}"),
            Self::Submitted { form } => write!(f, "{form}: submitted"),
            Self::Rejected { form, errors } => {
                write!(f, "{form}: rejected")?;
                for error in errors {
                    match error.field {
                        Some(field) => write!(f, "\n  {field}: {}", error.message)?,
                        None => write!(f, "\n  {}", error.message)?,
                    }
                }
                Ok(())
            }
            Self::Visit {
                popup_shown,
                variant,
                dismissed,
                visited,
            } => {
                write!(
                    f,
                    "popup shown: {popup_shown}\ndismissed: {dismissed}\nvisited: {visited}"
                )?;
                if let Some(variant) = variant {
                    write!(f, "\nvariant: {variant}")?;
                }
                Ok(())
            }
        }
    }
}

/// A loaded clinic page and its clock.
pub struct Session<S, C> {
    page: Page<S, C>,
    view: MemoryView,
    now: Duration,
}

impl<S: VisitStore, C: Clock> Session<S, C> {
    /// Loads the clinic page at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the visited flag cannot be read or the page
    /// cannot be set up.
    pub fn open(store: S, clock: C, path: &str) -> Result<Self, CoreError> {
        let mut view: MemoryView = MemoryView::clinic_page();
        let mut page: Page<S, C> = Page::new(store, clock)?;
        page.dispatch(
            &mut view,
            Duration::ZERO,
            UiEvent::PageLoad {
                path: path.to_string(),
            },
        )?;
        Ok(Self {
            page,
            view,
            now: Duration::ZERO,
        })
    }

    fn dispatch(&mut self, event: UiEvent) -> Result<Reaction, CoreError> {
        self.page.dispatch(&mut self.view, self.now, event)
    }

    fn advance(&mut self, by: Duration) {
        self.now += by;
        self.page.tick(&mut self.view, self.now);
    }

    fn type_into(&mut self, element: &'static str, value: &str) -> Result<(), CoreError> {
        self.view.type_value(ElementId::new(element), value)?;
        Ok(())
    }

    /// Runs the BMI calculator.
    ///
    /// # Errors
    ///
    /// Returns an error if the calculator inputs are missing from the page.
    pub fn bmi(
        &mut self,
        height: &str,
        unit: HeightUnit,
        weight: &str,
    ) -> Result<Report, CoreError> {
        self.view.type_value(HEIGHT_INPUT, height)?;
        self.view.type_value(HEIGHT_UNIT, unit.as_str())?;
        self.view.type_value(WEIGHT_INPUT, weight)?;

        match self.dispatch(UiEvent::Submit(FormKind::Bmi))? {
            Reaction::BmiCalculated(result) => Ok(bmi_report(result)),
            _ => Ok(rejected("bmi", Vec::new())),
        }
    }

    /// Fills in and submits the appointment form.
    ///
    /// # Errors
    ///
    /// Returns an error if a form input is missing from the page.
    pub fn appointment(&mut self, input: &AppointmentInput) -> Result<Report, CoreError> {
        self.type_into("firstName", &input.first_name)?;
        self.type_into("lastName", &input.last_name)?;
        self.type_into("email", &input.email)?;
        self.type_into("phone", &input.phone)?;
        self.type_into("preferredDate", &input.preferred_date)?;
        self.view
            .set_checked(ElementId::new("consent"), input.consent)?;

        self.submit(FormKind::Appointment, "appointment")
    }

    /// Fills in and submits the contact form.
    ///
    /// # Errors
    ///
    /// Returns an error if a form input is missing from the page.
    pub fn contact(&mut self, input: &ContactInput) -> Result<Report, CoreError> {
        self.type_into("contactFirstName", &input.first_name)?;
        self.type_into("contactLastName", &input.last_name)?;
        self.type_into("contactEmail", &input.email)?;
        self.type_into("contactPhone", &input.phone)?;
        self.type_into("contactSubject", &input.subject)?;
        self.type_into("contactMessage", &input.message)?;

        self.submit(FormKind::Contact, "contact")
    }

    /// Waits for the welcome popup, optionally opens it from the nav bar,
    /// and optionally dismisses it.
    ///
    /// # Errors
    ///
    /// Returns an error if an event cannot be dispatched.
    pub fn visit(&mut self, input: &VisitInput) -> Result<Report, CoreError> {
        self.advance(POPUP_DELAY);
        if input.from_nav {
            self.dispatch(UiEvent::Click(STUDENT_INFO_BUTTON))?;
            self.advance(ANIMATION_SETTLE);
        }

        let shown: PopupState = self.page.popup().state();
        let variant: Option<&'static str> = match shown {
            PopupState::Showing(PopupVariant::FirstVisit) => Some("first_visit"),
            PopupState::Showing(PopupVariant::FromNav) => Some("from_nav"),
            PopupState::Hidden | PopupState::Pending | PopupState::Closing => None,
        };

        let mut dismissed: bool = false;
        if let Some(dismissal) = input.dismiss {
            let event: UiEvent = match dismissal {
                Dismissal::Accept => UiEvent::Click(GET_STARTED_BUTTON),
                Dismissal::ClickOutside => UiEvent::Click(WELCOME_POPUP),
                Dismissal::Escape => UiEvent::KeyDown {
                    target: WELCOME_POPUP,
                    key: Key::Escape,
                },
            };
            self.dispatch(event)?;
            dismissed = self.page.popup().state() == PopupState::Closing;
            self.advance(ANIMATION_SETTLE);
        }

        Ok(Report::Visit {
            popup_shown: variant.is_some(),
            variant,
            dismissed,
            visited: self.page.popup().has_visited(),
        })
    }

    fn submit(&mut self, kind: FormKind, form: &'static str) -> Result<Report, CoreError> {
        let reaction: Reaction = self.dispatch(UiEvent::Submit(kind))?;
        let report: Report = match reaction {
            Reaction::FormSubmitted(_, SubmitOutcome::Submitted) => Report::Submitted { form },
            Reaction::FormSubmitted(_, SubmitOutcome::Rejected(failures)) => {
                rejected(form, failures)
            }
            Reaction::Ignored | Reaction::Handled | Reaction::BmiCalculated(_) => {
                rejected(form, Vec::new())
            }
        };
        Ok(report)
    }
}

fn bmi_report(result: Result<BmiResult, ValidationError>) -> Report {
    match result {
        Ok(result) => Report::Bmi {
            value: result.display_value(),
            category: result.category.label(),
            description: result.description,
        },
        Err(err) => rejected("bmi", vec![err]),
    }
}

fn rejected(form: &'static str, failures: Vec<ValidationError>) -> Report {
    let errors: Vec<FieldMessage> = failures
        .iter()
        .map(|failure| FieldMessage {
            field: failure.field().map(|field| field.as_str()),
            message: failure.to_string(),
        })
        .collect();
    Report::Rejected { form, errors }
}
