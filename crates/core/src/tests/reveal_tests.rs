// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::id;
use crate::{MemoryView, REVEAL_CLASS, ScrollReveal, View};
use wellspring_domain::ElementId;

#[test]
fn test_observes_every_reveal_target() {
    let view: MemoryView = MemoryView::clinic_page();

    let reveal: ScrollReveal = ScrollReveal::observe_page(&view);

    assert!(reveal.is_observing(id("heroContent")));
    assert!(reveal.is_observing(id("serviceGeneral")));
    assert!(reveal.is_observing(id("serviceVaccinations")));
    assert!(!reveal.is_observing(id("bookNowButton")));
}

#[test]
fn test_reveals_once_past_threshold() {
    let mut view: MemoryView = MemoryView::clinic_page();
    let mut reveal: ScrollReveal = ScrollReveal::observe_page(&view);
    let card: ElementId = id("serviceChildHealth");

    assert!(!reveal.on_intersect(&mut view, card, 0.05));
    assert!(!view.has_class(card, REVEAL_CLASS));

    assert!(reveal.on_intersect(&mut view, card, 0.1));
    assert!(view.has_class(card, REVEAL_CLASS));
    assert!(!reveal.is_observing(card));

    assert!(!reveal.on_intersect(&mut view, card, 1.0));
}

#[test]
fn test_ignores_unobserved_and_nan() {
    let mut view: MemoryView = MemoryView::clinic_page();
    let mut reveal: ScrollReveal = ScrollReveal::observe_page(&view);

    assert!(!reveal.on_intersect(&mut view, id("bookNowButton"), 1.0));
    assert!(!reveal.on_intersect(&mut view, id("heroContent"), f64::NAN));
    assert!(reveal.is_observing(id("heroContent")));
}
