// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON file collaborators.
//!
//! The roster, the fixture history, the session config and the working
//! schedule all live in plain JSON files next to each other.

use std::path::{Path, PathBuf};

use matchday_api::{
    CollaboratorError, HistoricalFixtureLookup, HistoryRecord, InMemoryHistory, NoHistory,
    ParticipantDirectory, ScheduleStore, SessionConfig,
};
use matchday_domain::{Participant, Schedule};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Reads and decodes a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CollaboratorError> {
    let contents: String =
        std::fs::read_to_string(path).map_err(|source| CollaboratorError::Io {
            path: path.display().to_string(),
            source,
        })?;
    serde_json::from_str(&contents).map_err(|err| CollaboratorError::Parse {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}

/// Encodes a value as pretty JSON and writes it to a file.
///
/// # Errors
///
/// Returns an error if the value cannot be encoded or the file written.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CollaboratorError> {
    let contents: String =
        serde_json::to_string_pretty(value).map_err(|err| CollaboratorError::Parse {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
    std::fs::write(path, contents + "\n").map_err(|source| CollaboratorError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), "Wrote JSON file");
    Ok(())
}

/// Loads the session config, falling back to defaults without a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load_config(path: Option<&Path>) -> Result<SessionConfig, CollaboratorError> {
    path.map_or_else(|| Ok(SessionConfig::default()), read_json)
}

/// Loads the fixture history, or an empty history without a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load_history(
    path: Option<&Path>,
) -> Result<Box<dyn HistoricalFixtureLookup>, CollaboratorError> {
    match path {
        Some(path) => {
            let records: Vec<HistoryRecord> = read_json(path)?;
            debug!(path = %path.display(), records = records.len(), "Loaded fixture history");
            Ok(Box::new(InMemoryHistory::new(records)))
        }
        None => Ok(Box::new(NoHistory)),
    }
}

/// A participant roster stored as a JSON array of `{ "id", "name" }`.
#[derive(Debug, Clone)]
pub struct JsonRoster {
    path: PathBuf,
}

impl JsonRoster {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ParticipantDirectory for JsonRoster {
    fn participants(&self) -> Result<Vec<Participant>, CollaboratorError> {
        read_json(&self.path)
    }
}

/// Writes finalized schedules to a JSON file, replacing its contents.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScheduleStore for JsonFileStore {
    fn save(&mut self, schedule: &Schedule) -> Result<(), CollaboratorError> {
        write_json(&self.path, schedule)
    }
}
