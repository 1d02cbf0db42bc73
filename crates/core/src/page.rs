// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Routes page events to the controllers that handle them.
//!
//! `Page` plays the part of event-handler registration: the host feeds it
//! every user event together with the page clock, and ticks it so delayed
//! actions can fire. All handlers run synchronously, one at a time.

use crate::a11y::{SKIP_LINK, install_accessibility, is_activatable, set_skip_link_focus};
use crate::bmi::{BmiCalculator, BmiInput};
use crate::clock::Clock;
use crate::error::CoreError;
use crate::form::{FormController, SubmitOutcome};
use crate::nav::{HAMBURGER, NavMenu};
use crate::popup::{
    DismissAction, GET_STARTED_BUTTON, STUDENT_INFO_BUTTON, WELCOME_POPUP, WelcomePopup,
};
use crate::reveal::ScrollReveal;
use crate::store::VisitStore;
use crate::timers::{TimerAction, Timers};
use crate::view::{View, skip_missing};
use std::time::Duration;
use time::Date;
use wellspring_domain::{
    BmiResult, ElementId, FormSnapshot, PREFERRED_DATE, ValidationError, appointment_form,
    contact_form,
};

/// The widgets that accept a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// The appointment booking form.
    Appointment,
    /// The contact form.
    Contact,
    /// The BMI calculator.
    Bmi,
}

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Space,
    Escape,
    /// Any other key.
    Other,
}

impl Key {
    /// Returns true for keys that activate buttons.
    #[must_use]
    pub const fn activates(&self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// A user or browser event delivered to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The page finished loading at `path`.
    PageLoad {
        /// Location path of the page.
        path: String,
    },
    /// A form's submit button was pressed.
    Submit(FormKind),
    /// A form's "try again" or "send another" button was pressed.
    Reset(FormKind),
    /// An element was clicked.
    Click(ElementId),
    /// A key was pressed while `target` had focus.
    KeyDown {
        /// The focused element.
        target: ElementId,
        /// The key pressed.
        key: Key,
    },
    /// An element gained focus.
    Focus(ElementId),
    /// An element lost focus.
    Blur(ElementId),
    /// The window was resized.
    Resize {
        /// New viewport width in CSS pixels.
        width: u32,
    },
    /// The browser navigated back or forward.
    PopState,
    /// An element's visible fraction changed.
    Intersect {
        /// The element.
        target: ElementId,
        /// Visible fraction, from 0.0 to 1.0.
        ratio: f64,
    },
}

/// What the page did in response to an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Reaction {
    /// The event had no effect.
    Ignored,
    /// The event was handled.
    Handled,
    /// A form was submitted.
    FormSubmitted(FormKind, SubmitOutcome),
    /// The BMI calculator was submitted.
    BmiCalculated(Result<BmiResult, ValidationError>),
}

/// Every interactive behavior of the clinic page.
#[derive(Debug)]
pub struct Page<S, C> {
    appointment: FormController,
    contact: FormController,
    bmi: BmiCalculator,
    popup: WelcomePopup<S>,
    nav: NavMenu,
    reveal: ScrollReveal,
    timers: Timers,
    clock: C,
}

impl<S: VisitStore, C: Clock> Page<S, C> {
    /// Creates the page behaviors.
    ///
    /// # Arguments
    ///
    /// * `store` - Storage for the visited flag, read once here
    /// * `clock` - Source of the current calendar day
    ///
    /// # Errors
    ///
    /// Returns an error if the visited flag cannot be read.
    pub fn new(store: S, clock: C) -> Result<Self, CoreError> {
        Ok(Self {
            appointment: FormController::new(appointment_form()),
            contact: FormController::new(contact_form()),
            bmi: BmiCalculator::new(),
            popup: WelcomePopup::new(store)?,
            nav: NavMenu::new(),
            reveal: ScrollReveal::default(),
            timers: Timers::new(),
            clock,
        })
    }

    #[must_use]
    pub const fn appointment(&self) -> &FormController {
        &self.appointment
    }

    #[must_use]
    pub const fn contact(&self) -> &FormController {
        &self.contact
    }

    #[must_use]
    pub const fn bmi(&self) -> &BmiCalculator {
        &self.bmi
    }

    #[must_use]
    pub const fn popup(&self) -> &WelcomePopup<S> {
        &self.popup
    }

    #[must_use]
    pub const fn nav(&self) -> &NavMenu {
        &self.nav
    }

    #[must_use]
    pub const fn reveal(&self) -> &ScrollReveal {
        &self.reveal
    }

    /// Returns the next time at which [`Page::tick`] has work to do.
    #[must_use]
    pub fn next_wakeup(&self) -> Option<Duration> {
        match (self.timers.next_due(), self.nav.resize_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Handles one event at page time `now`.
    ///
    /// Delayed actions due at or before `now` run first.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be set up on load.
    pub fn dispatch(
        &mut self,
        view: &mut dyn View,
        now: Duration,
        event: UiEvent,
    ) -> Result<Reaction, CoreError> {
        self.tick(view, now);

        let reaction: Reaction = match event {
            UiEvent::PageLoad { path } => {
                self.load(view, now, &path)?;
                Reaction::Handled
            }
            UiEvent::Submit(kind) => self.submit(view, kind),
            UiEvent::Reset(kind) => {
                match kind {
                    FormKind::Appointment => self.appointment.reset(view),
                    FormKind::Contact => self.contact.reset(view),
                    FormKind::Bmi => self.bmi.reset(view),
                }
                Reaction::Handled
            }
            UiEvent::Click(target) => self.click(view, now, target),
            UiEvent::KeyDown { target, key } => self.key_down(view, now, target, key),
            UiEvent::Focus(target) | UiEvent::Blur(target) if target != SKIP_LINK => {
                Reaction::Ignored
            }
            UiEvent::Focus(_) => {
                set_skip_link_focus(view, true);
                Reaction::Handled
            }
            UiEvent::Blur(_) => {
                set_skip_link_focus(view, false);
                Reaction::Handled
            }
            UiEvent::Resize { width } => {
                self.nav.on_resize(now, width);
                Reaction::Handled
            }
            UiEvent::PopState => {
                self.nav.close(view);
                Reaction::Handled
            }
            UiEvent::Intersect { target, ratio } => {
                if self.reveal.on_intersect(view, target, ratio) {
                    Reaction::Handled
                } else {
                    Reaction::Ignored
                }
            }
        };

        Ok(reaction)
    }

    /// Runs every delayed action due at or before `now`.
    pub fn tick(&mut self, view: &mut dyn View, now: Duration) {
        for action in self.timers.take_due(now) {
            match action {
                TimerAction::ShowWelcomePopup => self.popup.show_first_visit(view),
                TimerAction::RevealNavPopup => self.popup.reveal_from_nav(view),
                TimerAction::HidePopup => self.popup.finish_closing(view),
                TimerAction::FocusFirstNavLink => self.nav.focus_first_link(view),
            }
        }
        self.nav.poll_resize(view, now);
    }

    fn load(&mut self, view: &mut dyn View, now: Duration, path: &str) -> Result<(), CoreError> {
        install_accessibility(view)?;
        self.popup.on_page_load(view, &mut self.timers, now, path);

        let today: Date = self.clock.today();
        skip_missing(view.set_attribute(PREFERRED_DATE.element(), "min", &today.to_string()));

        self.reveal = ScrollReveal::observe_page(view);

        tracing::info!(path, %today, "page loaded");
        Ok(())
    }

    fn submit(&mut self, view: &mut dyn View, kind: FormKind) -> Reaction {
        let today: Date = self.clock.today();
        let controller: &mut FormController = match kind {
            FormKind::Appointment => &mut self.appointment,
            FormKind::Contact => &mut self.contact,
            FormKind::Bmi => {
                let input: BmiInput = BmiInput::from_view(view);
                return Reaction::BmiCalculated(self.bmi.submit(view, &input));
            }
        };

        let snapshot: FormSnapshot = controller.read_snapshot(view);
        let outcome: SubmitOutcome = controller.handle_submit(view, &snapshot, today);
        Reaction::FormSubmitted(kind, outcome)
    }

    fn click(&mut self, view: &mut dyn View, now: Duration, target: ElementId) -> Reaction {
        if target == STUDENT_INFO_BUTTON {
            self.popup.open_from_nav(view, &mut self.timers, now);
            self.nav.close(view);
            return Reaction::Handled;
        }

        // The button's handler stops the click from reaching the document.
        if target == GET_STARTED_BUTTON {
            self.popup
                .dismiss(view, &mut self.timers, now, DismissAction::Accept);
            return Reaction::Handled;
        }

        if target == WELCOME_POPUP {
            self.popup
                .dismiss(view, &mut self.timers, now, DismissAction::ClickOutside);
        }
        if target == HAMBURGER {
            self.nav.toggle(view, &mut self.timers, now);
        }
        self.nav.on_document_click(view, target);
        Reaction::Handled
    }

    fn key_down(
        &mut self,
        view: &mut dyn View,
        now: Duration,
        target: ElementId,
        key: Key,
    ) -> Reaction {
        if key == Key::Escape
            && self
                .popup
                .dismiss(view, &mut self.timers, now, DismissAction::Escape)
        {
            return Reaction::Handled;
        }

        if key.activates() && is_activatable(view, target) {
            return self.click(view, now, target);
        }

        Reaction::Ignored
    }
}
