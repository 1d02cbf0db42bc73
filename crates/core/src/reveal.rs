// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::display::FADE_IN_UP;
use crate::view::{View, skip_missing};
use wellspring_domain::ElementId;

/// Class added to an element the first time it scrolls into view.
pub const REVEAL_CLASS: &str = FADE_IN_UP;

/// Elements carrying any of these classes are revealed on scroll.
pub const REVEAL_TARGET_CLASSES: [&str; 11] = [
    "service-card",
    "action-item",
    "service-detail",
    "category-item",
    "doctor-card",
    "facility-item",
    "activity-item",
    "faq-item",
    "contact-method",
    "hero-content",
    "hero-image",
];

// Fraction of the element that must be on screen.
const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Reveals page sections once, the first time each scrolls into view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrollReveal {
    observed: Vec<ElementId>,
}

impl ScrollReveal {
    /// Starts observing every reveal target on the page.
    #[must_use]
    pub fn observe_page(view: &dyn View) -> Self {
        let mut observed: Vec<ElementId> = Vec::new();
        for class in REVEAL_TARGET_CLASSES {
            for element in view.elements_with_class(class) {
                if !observed.contains(&element) {
                    observed.push(element);
                }
            }
        }
        Self { observed }
    }

    #[must_use]
    pub fn is_observing(&self, element: ElementId) -> bool {
        self.observed.contains(&element)
    }

    /// Handles a visibility change of an observed element.
    ///
    /// Returns true if the element was revealed by this call. An element is
    /// revealed at most once and then no longer observed.
    pub fn on_intersect(&mut self, view: &mut dyn View, target: ElementId, ratio: f64) -> bool {
        if ratio.is_nan() || ratio < VISIBILITY_THRESHOLD {
            return false;
        }
        let Some(index) = self.observed.iter().position(|element| *element == target) else {
            return false;
        };

        self.observed.remove(index);
        skip_missing(view.add_class(target, REVEAL_CLASS));
        true
    }
}
