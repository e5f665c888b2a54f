// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pairing suggestions and conflict resolution.
//!
//! Suggestions are computed from the derived trackers: a pairing is offered
//! for a slot when neither participant is committed in the slot's round and
//! the pair has not met yet. When nothing can be offered, the resolver
//! explains why and points at the fixture that would have to be cleared.

use crate::validation::{ConflictSuggestion, ValidationError};
use matchday_domain::{
    DomainError, MatchupKey, ParticipantId, Schedule, SlotLocation, Trackers,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A candidate pairing for a slot, in id order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pairing {
    /// The lexicographically smaller participant.
    pub first: ParticipantId,
    /// The lexicographically larger participant.
    pub second: ParticipantId,
}

/// Why a pair of available participants cannot be placed in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfeasibilityReason {
    /// The pair has already met in a completed fixture.
    AlreadyPlayed,
    /// The trackers give no reason for the exclusion.
    Unknown,
}

impl InfeasibilityReason {
    /// Converts this reason to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyPlayed => "already played",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for InfeasibilityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A pair of available participants that cannot be placed in a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfeasiblePairing {
    /// The lexicographically smaller participant.
    pub first: ParticipantId,
    /// The lexicographically larger participant.
    pub second: ParticipantId,
    /// Why the pair cannot be placed.
    pub reason: InfeasibilityReason,
    /// Where the pair already meets; resetting that slot frees the pairing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub played_at: Option<SlotLocation>,
}

/// Every unordered pair of participants still available in the slot's round.
fn available_pairs<'a>(
    trackers: &'a Trackers,
    location: SlotLocation,
) -> Vec<(&'a ParticipantId, &'a ParticipantId)> {
    let available = trackers.available_in_round(location.round);
    available
        .iter()
        .enumerate()
        .flat_map(|(index, first)| {
            available[index + 1..]
                .iter()
                .map(move |second| (*first, *second))
        })
        .collect()
}

/// Suggests valid pairings for a slot.
///
/// Returns every unordered pair of participants not yet committed in the
/// slot's round whose matchup has not been played, ordered by participant id.
///
/// # Arguments
///
/// * `schedule` - The schedule the trackers were derived from
/// * `trackers` - The derived matchup and per-round trackers
/// * `location` - The target slot
///
/// # Errors
///
/// Returns `SlotOutOfRange` if the location does not exist.
pub fn suggest_pairings(
    schedule: &Schedule,
    trackers: &Trackers,
    location: SlotLocation,
) -> Result<Vec<Pairing>, DomainError> {
    schedule.slot(location)?;

    Ok(available_pairs(trackers, location)
        .into_iter()
        .filter(|(first, second)| !trackers.is_played(&MatchupKey::new(first, second)))
        .map(|(first, second)| Pairing {
            first: first.clone(),
            second: second.clone(),
        })
        .collect())
}

/// Explains why no pairing can be suggested for a slot.
///
/// Returns an empty list when `suggest_pairings` has suggestions. Otherwise
/// every pair of available participants is reported with its reason and,
/// when it has already been played, the slot where it was played.
///
/// # Errors
///
/// Returns `SlotOutOfRange` if the location does not exist.
pub fn explain_infeasibility(
    schedule: &Schedule,
    trackers: &Trackers,
    location: SlotLocation,
) -> Result<Vec<InfeasiblePairing>, DomainError> {
    if !suggest_pairings(schedule, trackers, location)?.is_empty() {
        return Ok(Vec::new());
    }

    let played_at: BTreeMap<MatchupKey, SlotLocation> =
        schedule
            .completed()
            .filter(|f| !f.is_self_play())
            .fold(BTreeMap::new(), |mut first_seen, fixture| {
                first_seen
                    .entry(MatchupKey::new(fixture.home, fixture.away))
                    .or_insert(fixture.location);
                first_seen
            });

    Ok(available_pairs(trackers, location)
        .into_iter()
        .map(|(first, second)| {
            let key = MatchupKey::new(first, second);
            let reason = if trackers.is_played(&key) {
                InfeasibilityReason::AlreadyPlayed
            } else {
                InfeasibilityReason::Unknown
            };
            InfeasiblePairing {
                first: first.clone(),
                second: second.clone(),
                reason,
                played_at: played_at.get(&key).copied(),
            }
        })
        .collect())
}

/// Groups the conflict suggestions of duplicate-pairing violations by the
/// offending slot.
#[must_use]
pub fn resolve_conflicts(
    violations: &[ValidationError],
) -> BTreeMap<SlotLocation, Vec<ConflictSuggestion>> {
    let mut grouped: BTreeMap<SlotLocation, Vec<ConflictSuggestion>> = BTreeMap::new();
    for violation in violations {
        if let (Some(location), Some(conflict)) = (violation.location, violation.conflict) {
            grouped.entry(location).or_default().push(conflict);
        }
    }
    grouped
}
