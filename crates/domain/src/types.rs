// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The identifier of a participant (team).
///
/// Identifiers are compared lexicographically, which gives suggestions and
/// matchup keys a stable, reproducible order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Creates a new participant identifier.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A participant in the tournament.
///
/// Participants are owned by the team roster. The schedule keeps its own
/// copy of the roster it was created with and refers to participants by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// The participant's identifier.
    pub id: ParticipantId,
    /// The participant's display name.
    pub name: String,
}

impl Participant {
    /// Creates a new participant.
    ///
    /// # Arguments
    ///
    /// * `id` - The participant identifier
    /// * `name` - The display name
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: ParticipantId::new(id),
            name: name.to_string(),
        }
    }
}

/// Which side of a fixture a participant is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The home team.
    Home,
    /// The away team.
    Away,
}

impl Side {
    /// Converts this side to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Away => "away",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "away" => Ok(Self::Away),
            _ => Err(format!("Invalid side '{s}': expected 'home' or 'away'")),
        }
    }
}

/// The position of a fixture slot within a schedule.
///
/// Rounds are 1-based; slot indices are 0-based positions within the round.
/// Locations order round-major, so the natural ordering matches the order in
/// which slots appear in the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotLocation {
    /// The round number (1-based).
    pub round: u8,
    /// The slot index within the round (0-based).
    pub slot_index: usize,
}

impl SlotLocation {
    /// Creates a new slot location.
    #[must_use]
    pub const fn new(round: u8, slot_index: usize) -> Self {
        Self { round, slot_index }
    }
}

impl std::fmt::Display for SlotLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "round {}, fixture {}", self.round, self.slot_index + 1)
    }
}

/// Stadium information attached to a fixture.
///
/// Supplied by the historical-fixture lookup and stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StadiumAssignment {
    /// The stadium name.
    pub stadium: String,
    /// The stadium location (city or address), if known.
    pub location: Option<String>,
}

impl StadiumAssignment {
    /// Creates a new stadium assignment.
    #[must_use]
    pub fn new(stadium: &str, location: Option<&str>) -> Self {
        Self {
            stadium: stadium.to_string(),
            location: location.map(str::to_string),
        }
    }
}

/// A prior fixture between two participants, as returned by the historical
/// lookup.
///
/// Its orientation (who was at home) and stadium are used to fill in a slot
/// once both of its participants are known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalFixture {
    /// The home participant of the prior fixture.
    pub home: ParticipantId,
    /// The away participant of the prior fixture.
    pub away: ParticipantId,
    /// The stadium the prior fixture was played at.
    pub stadium: Option<StadiumAssignment>,
}
