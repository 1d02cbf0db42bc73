// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod a11y;
mod bmi;
mod clock;
mod display;
mod error;
mod form;
mod memory;
mod nav;
mod page;
mod popup;
mod reporter;
mod reveal;
mod store;
mod timers;
mod view;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use a11y::{
    MAIN_CONTENT, SKIP_LINK, install_accessibility, is_activatable, set_skip_link_focus,
};
pub use bmi::{
    BMI_CATEGORY, BMI_DESCRIPTION, BMI_FORM, BMI_VALUE, BmiCalculator, BmiInput, CALCULATOR_FORM,
    ERROR_MESSAGE, HEIGHT_INPUT, HEIGHT_UNIT, RESULTS, WEIGHT_INPUT,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use display::{DisplayCoordinator, DisplayState, RegionPair};
pub use error::{CoreError, StoreError, ViewError};
pub use form::{FormController, SubmitOutcome};
pub use memory::{Element, MemoryView};
pub use nav::{DESKTOP_MIN_WIDTH, HAMBURGER, NAV_LINK_CLASS, NAV_MENU, NavMenu};
pub use page::{FormKind, Key, Page, Reaction, UiEvent};
pub use popup::{
    DismissAction, GET_STARTED_BUTTON, PopupState, PopupVariant, STUDENT_INFO_BUTTON,
    WELCOME_POPUP, WelcomePopup, is_index_page,
};
pub use reporter::{clear_all, report_error};
pub use reveal::{REVEAL_CLASS, REVEAL_TARGET_CLASSES, ScrollReveal};
pub use store::{VISITED_KEY, VisitStore};
pub use timers::{Debouncer, TimerAction, Timers};
pub use view::{Border, ElementKind, ScrollAlign, View};
