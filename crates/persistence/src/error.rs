// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;
use wellspring::StoreError;

/// Errors that can occur while reading or writing the visited flag.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// The state file could not be read or written.
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        /// The state file.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The state file does not hold a valid record.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<PersistenceError> for StoreError {
    fn from(err: PersistenceError) -> Self {
        Self::new(err.to_string())
    }
}
