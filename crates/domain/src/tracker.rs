// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Matchup and per-round trackers.
//!
//! Trackers are **derived**, never stored: they are pure functions of the
//! schedule and are recomputed after every change. Only completed slots
//! count towards them.

use crate::schedule::Schedule;
use crate::types::{Participant, ParticipantId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical, order-independent identifier of an unordered participant pair.
///
/// The two ids are stored sorted, so `MatchupKey::new(a, b)` equals
/// `MatchupKey::new(b, a)`. Serialized as `"first|second"` so it can key a
/// JSON object.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MatchupKey {
    first: ParticipantId,
    second: ParticipantId,
}

impl MatchupKey {
    /// Creates the key for a pair of participants.
    #[must_use]
    pub fn new(a: &ParticipantId, b: &ParticipantId) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            first: first.clone(),
            second: second.clone(),
        }
    }

    /// The lexicographically smaller participant.
    #[must_use]
    pub const fn first(&self) -> &ParticipantId {
        &self.first
    }

    /// The lexicographically larger participant.
    #[must_use]
    pub const fn second(&self) -> &ParticipantId {
        &self.second
    }
}

impl std::fmt::Display for MatchupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.first, self.second)
    }
}

impl From<MatchupKey> for String {
    fn from(key: MatchupKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for MatchupKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.split_once('|') {
            Some((a, b)) if !a.is_empty() && !b.is_empty() => {
                Ok(Self::new(&ParticipantId::new(a), &ParticipantId::new(b)))
            }
            _ => Err(format!("Invalid matchup key '{value}': expected 'a|b'")),
        }
    }
}

/// Which unordered pairs have already been scheduled.
pub type MatchupTracker = BTreeMap<MatchupKey, bool>;

/// Which participants are committed in each round.
pub type PerRoundTracker = BTreeMap<u8, BTreeMap<ParticipantId, bool>>;

/// Every unordered pair of distinct participants, in key order.
#[must_use]
pub fn all_matchups(participants: &[Participant]) -> Vec<MatchupKey> {
    let mut keys: Vec<MatchupKey> = participants
        .iter()
        .enumerate()
        .flat_map(|(index, a)| {
            participants[index + 1..]
                .iter()
                .filter(move |b| b.id != a.id)
                .map(move |b| MatchupKey::new(&a.id, &b.id))
        })
        .collect();
    keys.sort();
    keys.dedup();
    keys
}

/// Derives the matchup tracker of a schedule.
///
/// Every possible pair among `participants` starts out `false`; each pair
/// found in a completed, non-self-play slot is set to `true`.
#[must_use]
pub fn derive_matchup_tracker(schedule: &Schedule, participants: &[Participant]) -> MatchupTracker {
    let mut tracker: MatchupTracker = all_matchups(participants)
        .into_iter()
        .map(|key| (key, false))
        .collect();

    for fixture in schedule.completed().filter(|f| !f.is_self_play()) {
        tracker.insert(MatchupKey::new(fixture.home, fixture.away), true);
    }

    tracker
}

/// Derives the per-round tracker of a schedule.
///
/// For each round every participant starts out `false`; each participant
/// found (home or away) in a completed slot of that round is set to `true`.
#[must_use]
pub fn derive_per_round_tracker(
    schedule: &Schedule,
    participants: &[Participant],
) -> PerRoundTracker {
    let mut tracker: PerRoundTracker = schedule
        .round_numbers()
        .map(|round| {
            let committed = participants
                .iter()
                .map(|p| (p.id.clone(), false))
                .collect();
            (round, committed)
        })
        .collect();

    for fixture in schedule.completed() {
        let round = tracker.entry(fixture.location.round).or_default();
        round.insert(fixture.home.clone(), true);
        round.insert(fixture.away.clone(), true);
    }

    tracker
}

/// Both trackers of a schedule, derived together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trackers {
    /// Which pairs have been scheduled.
    pub matchups: MatchupTracker,
    /// Which participants are committed in each round.
    pub per_round: PerRoundTracker,
}

impl Trackers {
    /// Derives both trackers from the schedule's own participants.
    #[must_use]
    pub fn derive(schedule: &Schedule) -> Self {
        Self {
            matchups: derive_matchup_tracker(schedule, schedule.participants()),
            per_round: derive_per_round_tracker(schedule, schedule.participants()),
        }
    }

    /// Returns whether a pair has already been scheduled.
    #[must_use]
    pub fn is_played(&self, key: &MatchupKey) -> bool {
        self.matchups.get(key).copied().unwrap_or(false)
    }

    /// Returns whether a participant is committed in a round.
    #[must_use]
    pub fn is_committed(&self, round: u8, participant: &ParticipantId) -> bool {
        self.per_round
            .get(&round)
            .and_then(|committed| committed.get(participant))
            .copied()
            .unwrap_or(false)
    }

    /// The participants not yet committed in a round, in id order.
    #[must_use]
    pub fn available_in_round(&self, round: u8) -> Vec<&ParticipantId> {
        self.per_round
            .get(&round)
            .map(|committed| {
                committed
                    .iter()
                    .filter(|(_, committed)| !**committed)
                    .map(|(id, _)| id)
                    .collect()
            })
            .unwrap_or_default()
    }
}
