// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use wellspring::{StoreError, VisitStore};

/// Keeps the visited flag in memory for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryVisitStore {
    visited: bool,
}

impl MemoryVisitStore {
    /// Creates a store holding the given flag.
    #[must_use]
    pub const fn new(visited: bool) -> Self {
        Self { visited }
    }
}

impl VisitStore for MemoryVisitStore {
    fn has_visited(&self) -> Result<bool, StoreError> {
        Ok(self.visited)
    }

    fn mark_visited(&mut self) -> Result<(), StoreError> {
        self.visited = true;
        Ok(())
    }
}
