// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;

/// Storage key of the visited flag.
pub const VISITED_KEY: &str = "wellspring_visited";

/// Persistent storage for the visited flag.
///
/// The flag is read once when the page loads and written once when the
/// visitor dismisses the welcome popup.
pub trait VisitStore {
    /// Returns true if the visitor has dismissed the welcome popup before.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored flag cannot be read.
    fn has_visited(&self) -> Result<bool, StoreError>;

    /// Records that the visitor has dismissed the welcome popup.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be written.
    fn mark_visited(&mut self) -> Result<(), StoreError>;
}
