// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use wellspring::{StoreError, VisitStore};

/// The document stored in the state file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisitRecord {
    /// Whether the visitor has dismissed the welcome popup.
    #[serde(rename = "wellspring_visited", default)]
    pub visited: bool,
}

/// Keeps the visited flag in a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileVisitStore {
    path: PathBuf,
}

impl JsonFileVisitStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// Nothing is read or written until the flag is used.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored record.
    ///
    /// A missing file reads as a first visit.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<VisitRecord, PersistenceError> {
        let contents: String = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no state file, first visit");
                return Ok(VisitRecord::default());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let record: VisitRecord = serde_json::from_str(&contents)?;
        Ok(record)
    }

    /// Writes `record`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its directory cannot be written.
    pub fn save(&self, record: VisitRecord) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let json: String = serde_json::to_string_pretty(&record)?;
        fs::write(&self.path, json).map_err(|source| self.io_error(source))?;

        tracing::info!(
            path = %self.path.display(),
            visited = record.visited,
            "saved visit record"
        );
        Ok(())
    }

    /// Deletes the state file so the next load is a first visit.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "cleared visit record");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl VisitStore for JsonFileVisitStore {
    fn has_visited(&self) -> Result<bool, StoreError> {
        Ok(self.load()?.visited)
    }

    fn mark_visited(&mut self) -> Result<(), StoreError> {
        self.save(VisitRecord { visited: true })?;
        Ok(())
    }
}
