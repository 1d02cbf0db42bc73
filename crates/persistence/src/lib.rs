// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage for the visited flag.
//!
//! Two [`VisitStore`](wellspring::VisitStore) implementations are provided:
//!
//! - [`JsonFileVisitStore`] keeps the flag in a small JSON document on disk,
//!   `{"wellspring_visited": true}`. A missing file means the visitor has
//!   not been here before.
//! - [`MemoryVisitStore`] keeps the flag for the lifetime of the process.

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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod json_file;
mod memory;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use json_file::{JsonFileVisitStore, VisitRecord};
pub use memory::MemoryVisitStore;
