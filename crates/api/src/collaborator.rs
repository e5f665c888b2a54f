// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! External collaborators of a scheduling session.
//!
//! The session never reaches out to storage or history services directly.
//! It talks to these traits, and the caller decides what stands behind them.

use matchday_domain::{HistoricalFixture, MatchupKey, Participant, ParticipantId, Schedule};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Collaborator failures.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// Reading or writing backing storage failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Backing data could not be decoded.
    #[error("Invalid data in {path}: {reason}")]
    Parse { path: String, reason: String },

    /// The collaborator cannot serve requests.
    #[error("{service} is unavailable: {reason}")]
    Unavailable { service: String, reason: String },
}

/// Supplies the participants of a tournament.
pub trait ParticipantDirectory {
    /// Returns every participant, in directory order.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn participants(&self) -> Result<Vec<Participant>, CollaboratorError>;
}

/// Looks up the prior fixture between two participants.
pub trait HistoricalFixtureLookup {
    /// Finds the fixture between `first` and `second` for a season, in either
    /// orientation.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be consulted.
    fn find(
        &self,
        first: &ParticipantId,
        second: &ParticipantId,
        season: Option<u16>,
    ) -> Result<Option<HistoricalFixture>, CollaboratorError>;
}

/// Persists finalized schedules.
pub trait ScheduleStore {
    /// Stores a schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule cannot be stored.
    fn save(&mut self, schedule: &Schedule) -> Result<(), CollaboratorError>;
}

/// A fixed list of participants.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    participants: Vec<Participant>,
}

impl StaticDirectory {
    #[must_use]
    pub const fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }
}

impl ParticipantDirectory for StaticDirectory {
    fn participants(&self) -> Result<Vec<Participant>, CollaboratorError> {
        Ok(self.participants.clone())
    }
}

/// A history with no prior fixtures.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl HistoricalFixtureLookup for NoHistory {
    fn find(
        &self,
        _first: &ParticipantId,
        _second: &ParticipantId,
        _season: Option<u16>,
    ) -> Result<Option<HistoricalFixture>, CollaboratorError> {
        Ok(None)
    }
}

/// One entry of a fixture history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// The season the fixture belongs to; `None` matches every season.
    #[serde(default)]
    pub season: Option<u16>,
    /// The fixture itself.
    #[serde(flatten)]
    pub fixture: HistoricalFixture,
}

/// A fixture history held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    records: Vec<HistoryRecord>,
}

impl InMemoryHistory {
    #[must_use]
    pub const fn new(records: Vec<HistoryRecord>) -> Self {
        Self { records }
    }

    /// Adds a fixture for a season.
    #[must_use]
    pub fn with_fixture(mut self, season: Option<u16>, fixture: HistoricalFixture) -> Self {
        self.records.push(HistoryRecord { season, fixture });
        self
    }
}

impl HistoricalFixtureLookup for InMemoryHistory {
    fn find(
        &self,
        first: &ParticipantId,
        second: &ParticipantId,
        season: Option<u16>,
    ) -> Result<Option<HistoricalFixture>, CollaboratorError> {
        let wanted = MatchupKey::new(first, second);
        Ok(self
            .records
            .iter()
            .filter(|record| record.season.is_none() || record.season == season)
            .find(|record| MatchupKey::new(&record.fixture.home, &record.fixture.away) == wanted)
            .map(|record| record.fixture.clone()))
    }
}

/// A store that keeps every saved schedule in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    saved: Vec<Schedule>,
}

impl InMemoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { saved: Vec::new() }
    }

    /// Every schedule saved so far, oldest first.
    #[must_use]
    pub fn saved(&self) -> &[Schedule] {
        &self.saved
    }
}

impl ScheduleStore for InMemoryStore {
    fn save(&mut self, schedule: &Schedule) -> Result<(), CollaboratorError> {
        self.saved.push(schedule.clone());
        Ok(())
    }
}
