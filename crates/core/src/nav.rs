// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The collapsible mobile navigation menu.

use crate::timers::{Debouncer, TimerAction, Timers};
use crate::view::{View, skip_missing};
use std::time::Duration;
use wellspring_domain::ElementId;

pub const HAMBURGER: ElementId = ElementId::new("hamburger");
pub const NAV_MENU: ElementId = ElementId::new("navMenu");
pub const NAV_LINK_CLASS: &str = "nav-link";

/// Widths above this are desktop layouts where the menu is always inline.
pub const DESKTOP_MIN_WIDTH: u32 = 768;

const ACTIVE_CLASS: &str = "active";
const RESIZE_QUIET_PERIOD: Duration = Duration::from_millis(250);
const FOCUS_DELAY: Duration = Duration::from_millis(100);

/// Controller for the hamburger button and the menu it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
    resize: Debouncer<u32>,
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl NavMenu {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            open: false,
            resize: Debouncer::new(RESIZE_QUIET_PERIOD),
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Opens or closes the menu from the hamburger button.
    ///
    /// Opening the menu moves focus to its first link shortly afterwards.
    pub fn toggle(&mut self, view: &mut dyn View, timers: &mut Timers, now: Duration) {
        if self.open {
            self.close(view);
            return;
        }

        self.open = true;
        skip_missing(view.add_class(HAMBURGER, ACTIVE_CLASS));
        skip_missing(view.add_class(NAV_MENU, ACTIVE_CLASS));
        timers.schedule(now + FOCUS_DELAY, TimerAction::FocusFirstNavLink);
    }

    /// Closes the menu. Closing a closed menu does nothing visible.
    pub fn close(&mut self, view: &mut dyn View) {
        self.open = false;
        skip_missing(view.remove_class(HAMBURGER, ACTIVE_CLASS));
        skip_missing(view.remove_class(NAV_MENU, ACTIVE_CLASS));
    }

    /// Focuses the first link of the menu if it is still open.
    pub fn focus_first_link(&self, view: &mut dyn View) {
        if !self.open {
            return;
        }
        let first: Option<ElementId> = view
            .elements_with_class(NAV_LINK_CLASS)
            .into_iter()
            .find(|link| view.contains(NAV_MENU, *link));
        if let Some(link) = first {
            skip_missing(view.focus(link));
        }
    }

    /// Handles a click anywhere on the page.
    ///
    /// A click on a menu link, or anywhere outside both the menu and the
    /// hamburger button, closes the menu.
    pub fn on_document_click(&mut self, view: &mut dyn View, target: ElementId) {
        let on_link: bool = view.has_class(target, NAV_LINK_CLASS);
        let outside: bool = !view.contains(HAMBURGER, target) && !view.contains(NAV_MENU, target);
        if on_link || outside {
            self.close(view);
        }
    }

    /// Returns the time at which a pending resize settles.
    #[must_use]
    pub fn resize_deadline(&self) -> Option<Duration> {
        self.resize.deadline()
    }

    /// Records a window resize. Bursts are coalesced.
    pub fn on_resize(&mut self, now: Duration, width: u32) {
        self.resize.call(now, width);
    }

    /// Applies a settled resize: a desktop-width window closes the menu.
    pub fn poll_resize(&mut self, view: &mut dyn View, now: Duration) {
        let settled: Option<u32> = self.resize.poll(now);
        if let Some(width) = settled.filter(|width| *width > DESKTOP_MIN_WIDTH) {
            tracing::debug!(width, "desktop layout, closing menu");
            self.close(view);
        }
    }
}
