// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FixedClock, MemoryView, Page, StoreError, VisitStore};
use std::time::Duration;
use time::Date;
use time::macros::date;
use wellspring_domain::ElementId;

pub const TODAY: Date = date!(2026 - 10 - 18);

/// Visit flag held in memory, counting writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub visited: bool,
    pub writes: usize,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn visited() -> Self {
        Self {
            visited: true,
            ..Self::default()
        }
    }
}

impl VisitStore for MemoryStore {
    fn has_visited(&self) -> Result<bool, StoreError> {
        if self.fail_reads {
            return Err(StoreError::new("storage disabled"));
        }
        Ok(self.visited)
    }

    fn mark_visited(&mut self) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::new("quota exceeded"));
        }
        self.visited = true;
        self.writes += 1;
        Ok(())
    }
}

pub const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

pub const fn id(name: &'static str) -> ElementId {
    ElementId::new(name)
}

pub fn new_page(store: MemoryStore) -> Page<MemoryStore, FixedClock> {
    Page::new(store, FixedClock(TODAY)).expect("store is readable")
}

pub fn fill_appointment(view: &mut MemoryView) {
    view.type_value(id("firstName"), "Jane").unwrap();
    view.type_value(id("lastName"), "O'Brien").unwrap();
    view.type_value(id("email"), "jane@example.com.au").unwrap();
    view.type_value(id("phone"), "0412 345 678").unwrap();
    view.type_value(id("preferredDate"), "2026-10-20").unwrap();
    view.set_checked(id("consent"), true).unwrap();
}

pub fn fill_contact(view: &mut MemoryView) {
    view.type_value(id("contactFirstName"), "Sam").unwrap();
    view.type_value(id("contactLastName"), "Nguyen").unwrap();
    view.type_value(id("contactEmail"), "sam@example.org").unwrap();
    view.type_value(id("contactSubject"), "general").unwrap();
    view.type_value(id("contactMessage"), "Do you bulk bill?").unwrap();
}
