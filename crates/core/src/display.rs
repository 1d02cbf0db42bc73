// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::view::{View, skip_missing};
use wellspring_domain::ElementId;

/// Entrance animation class added to a region when it is revealed.
pub(crate) const FADE_IN_UP: &str = "fade-in-up";

/// Whether a widget is collecting input or showing its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayState {
    /// The input region is shown. Initial and reset state.
    #[default]
    Editing,
    /// The result region is shown.
    Submitted,
}

/// Two mutually exclusive regions: the input form and its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionPair {
    /// The region holding the inputs.
    pub form: ElementId,
    /// The region holding the result or success message.
    pub result: ElementId,
}

/// Toggles a [`RegionPair`] between its two states.
///
/// The coordinator only shows and hides regions; it knows nothing about
/// validation. Exactly one region of the pair is shown after every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCoordinator {
    regions: RegionPair,
    state: DisplayState,
}

impl DisplayCoordinator {
    /// Creates a coordinator in the `Editing` state.
    #[must_use]
    pub const fn new(regions: RegionPair) -> Self {
        Self {
            regions,
            state: DisplayState::Editing,
        }
    }

    #[must_use]
    pub const fn state(&self) -> DisplayState {
        self.state
    }

    #[must_use]
    pub const fn regions(&self) -> RegionPair {
        self.regions
    }

    /// Shows a region.
    pub fn show(view: &mut dyn View, region: ElementId) {
        skip_missing(view.set_visible(region, true));
    }

    /// Hides a region.
    pub fn hide(view: &mut dyn View, region: ElementId) {
        skip_missing(view.set_visible(region, false));
    }

    /// Swaps the form out for the result region.
    pub fn submit(&mut self, view: &mut dyn View) {
        Self::hide(view, self.regions.form);
        Self::show(view, self.regions.result);
        skip_missing(view.add_class(self.regions.result, FADE_IN_UP));
        self.state = DisplayState::Submitted;

        tracing::info!(region = %self.regions.result, "showing result region");
    }

    /// Swaps the result region out for the form.
    ///
    /// Safe to call from either state; always ends in `Editing`.
    pub fn reset(&mut self, view: &mut dyn View) {
        Self::hide(view, self.regions.result);
        Self::show(view, self.regions.form);
        self.state = DisplayState::Editing;

        tracing::info!(region = %self.regions.form, "showing form region");
    }
}
