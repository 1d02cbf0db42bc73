// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The welcome popup.
//!
//! The popup appears on its own for first-time visitors to the home page,
//! and on demand from the "Student Info" button in the nav bar. The
//! visited flag is read once when the popup is created and written when
//! the visitor dismisses it.

use crate::error::StoreError;
use crate::store::VisitStore;
use crate::timers::{TimerAction, Timers};
use crate::view::{View, skip_missing};
use std::time::Duration;
use wellspring_domain::ElementId;

pub const WELCOME_POPUP: ElementId = ElementId::new("welcomePopup");
pub const GET_STARTED_BUTTON: ElementId = ElementId::new("getStartedBtn");
pub const STUDENT_INFO_BUTTON: ElementId = ElementId::new("studentInfoBtn");

const SHOW_CLASS: &str = "show";
const FROM_NAV_CLASS: &str = "from-nav";
const CLOSING_CLASS: &str = "closing";

const FIRST_VISIT_DELAY: Duration = Duration::from_millis(500);
const NAV_REVEAL_DELAY: Duration = Duration::from_millis(10);
const FIRST_VISIT_EXIT: Duration = Duration::from_millis(300);
const NAV_EXIT: Duration = Duration::from_millis(200);

/// How the popup was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopupVariant {
    /// Opened automatically on a first visit.
    FirstVisit,
    /// Opened from the nav bar button.
    FromNav,
}

/// How the visitor dismissed the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissAction {
    /// The "Get Started" button.
    Accept,
    /// A click on the backdrop outside the popup card.
    ClickOutside,
    /// The Escape key. Only closes the nav-opened popup.
    Escape,
}

/// Lifecycle of the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PopupState {
    /// Not displayed.
    #[default]
    Hidden,
    /// First-visit popup scheduled but not yet shown.
    Pending,
    /// Displayed.
    Showing(PopupVariant),
    /// Exit animation running.
    Closing,
}

/// Returns true if `path` is the site's home page.
#[must_use]
pub fn is_index_page(path: &str) -> bool {
    path.contains("index.html") || path.ends_with('/')
}

/// Controller for the welcome popup.
#[derive(Debug)]
pub struct WelcomePopup<S> {
    store: S,
    visited: bool,
    state: PopupState,
}

impl<S: VisitStore> WelcomePopup<S> {
    /// Creates the popup, reading the visited flag once.
    ///
    /// # Errors
    ///
    /// Returns an error if the visited flag cannot be read.
    pub fn new(store: S) -> Result<Self, StoreError> {
        let visited: bool = store.has_visited()?;
        Ok(Self {
            store,
            visited,
            state: PopupState::Hidden,
        })
    }

    #[must_use]
    pub const fn state(&self) -> PopupState {
        self.state
    }

    /// Returns the visited flag as last read or written.
    #[must_use]
    pub const fn has_visited(&self) -> bool {
        self.visited
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Decides whether the popup opens on its own for this page load.
    ///
    /// First-time visitors to the home page see the popup after a short
    /// delay; everyone else starts with it hidden.
    pub fn on_page_load(
        &mut self,
        view: &mut dyn View,
        timers: &mut Timers,
        now: Duration,
        path: &str,
    ) {
        if !self.visited && is_index_page(path) {
            timers.schedule(now + FIRST_VISIT_DELAY, TimerAction::ShowWelcomePopup);
            self.state = PopupState::Pending;
            tracing::debug!(path, "welcome popup scheduled");
        } else {
            skip_missing(view.set_visible(WELCOME_POPUP, false));
            skip_missing(view.remove_class(WELCOME_POPUP, SHOW_CLASS));
        }
    }

    /// Shows the first-visit popup once its delay has passed.
    pub fn show_first_visit(&mut self, view: &mut dyn View) {
        if self.state != PopupState::Pending {
            return;
        }
        skip_missing(view.set_visible(WELCOME_POPUP, true));
        skip_missing(view.add_class(WELCOME_POPUP, SHOW_CLASS));
        self.state = PopupState::Showing(PopupVariant::FirstVisit);
    }

    /// Opens the popup from the nav bar button.
    pub fn open_from_nav(&mut self, view: &mut dyn View, timers: &mut Timers, now: Duration) {
        timers.cancel(TimerAction::ShowWelcomePopup);
        timers.cancel(TimerAction::HidePopup);
        skip_missing(view.remove_class(WELCOME_POPUP, CLOSING_CLASS));
        skip_missing(view.set_visible(WELCOME_POPUP, true));
        timers.schedule(now + NAV_REVEAL_DELAY, TimerAction::RevealNavPopup);
        self.state = PopupState::Showing(PopupVariant::FromNav);
    }

    /// Starts the entrance animation of the nav-opened popup.
    pub fn reveal_from_nav(&self, view: &mut dyn View) {
        if self.state == PopupState::Showing(PopupVariant::FromNav) {
            skip_missing(view.add_class(WELCOME_POPUP, SHOW_CLASS));
            skip_missing(view.add_class(WELCOME_POPUP, FROM_NAV_CLASS));
        }
    }

    /// Dismisses the popup, recording the visit.
    ///
    /// Returns false if the popup was not showing, or if Escape was pressed
    /// on the first-visit popup.
    pub fn dismiss(
        &mut self,
        view: &mut dyn View,
        timers: &mut Timers,
        now: Duration,
        action: DismissAction,
    ) -> bool {
        let PopupState::Showing(variant) = self.state else {
            return false;
        };
        if action == DismissAction::Escape && variant != PopupVariant::FromNav {
            return false;
        }

        self.remember_visit();

        match variant {
            PopupVariant::FirstVisit => {
                skip_missing(view.remove_class(WELCOME_POPUP, SHOW_CLASS));
                timers.schedule(now + FIRST_VISIT_EXIT, TimerAction::HidePopup);
            }
            PopupVariant::FromNav => {
                skip_missing(view.add_class(WELCOME_POPUP, CLOSING_CLASS));
                skip_missing(view.remove_class(WELCOME_POPUP, SHOW_CLASS));
                skip_missing(view.remove_class(WELCOME_POPUP, FROM_NAV_CLASS));
                timers.schedule(now + NAV_EXIT, TimerAction::HidePopup);
            }
        }
        self.state = PopupState::Closing;

        tracing::info!(?variant, ?action, "welcome popup dismissed");
        true
    }

    /// Removes the popup once its exit animation has finished.
    pub fn finish_closing(&mut self, view: &mut dyn View) {
        if self.state != PopupState::Closing {
            return;
        }
        skip_missing(view.set_visible(WELCOME_POPUP, false));
        skip_missing(view.remove_class(WELCOME_POPUP, CLOSING_CLASS));
        self.state = PopupState::Hidden;
    }

    fn remember_visit(&mut self) {
        if self.visited {
            return;
        }
        match self.store.mark_visited() {
            Ok(()) => self.visited = true,
            Err(err) => tracing::warn!(%err, "could not record visit"),
        }
    }
}
