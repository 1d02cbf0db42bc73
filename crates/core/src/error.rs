// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use wellspring_domain::ElementId;

/// Errors raised by a view when asked to touch the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The element is not present in the page.
    MissingElement(ElementId),
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingElement(element) => write!(f, "Element not found: #{element}"),
        }
    }
}

impl std::error::Error for ViewError {}

/// Errors raised by visit-flag storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    /// Description of the storage failure.
    pub message: String,
}

impl StoreError {
    /// Creates a new storage error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Visit flag storage failed: {}", self.message)
    }
}

impl std::error::Error for StoreError {}

/// Errors that can occur while driving the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A required element was missing from the page.
    View(ViewError),
    /// The visit flag could not be read or written.
    Store(StoreError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::View(err) => write!(f, "View error: {err}"),
            Self::Store(err) => write!(f, "Store error: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<ViewError> for CoreError {
    fn from(err: ViewError) -> Self {
        Self::View(err)
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
