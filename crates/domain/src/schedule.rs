// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The in-memory round robin schedule.
//!
//! A schedule is created once per scheduling session from a participant set
//! and never changes shape afterwards: only slot contents change. Every slot
//! operation checks its location before touching anything, so a structural
//! error leaves the schedule unchanged.

use crate::config::TournamentConfig;
use crate::error::DomainError;
use crate::types::{
    HistoricalFixture, Participant, ParticipantId, Side, SlotLocation, StadiumAssignment,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use time::OffsetDateTime;

/// The observable state of a fixture slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotState {
    /// Untouched, no data.
    Empty,
    /// Touched, but missing at least one of home, away or date.
    PartiallyFilled,
    /// Home, away and date are all present.
    Completed,
}

/// One fixture placeholder within a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureSlot {
    round: u8,
    #[serde(default, with = "time::serde::rfc3339::option")]
    date: Option<OffsetDateTime>,
    home: Option<ParticipantId>,
    away: Option<ParticipantId>,
    stadium: Option<StadiumAssignment>,
    touched: bool,
}

impl FixtureSlot {
    /// Creates an empty, untouched slot in the given round.
    #[must_use]
    pub const fn empty(round: u8) -> Self {
        Self {
            round,
            date: None,
            home: None,
            away: None,
            stadium: None,
            touched: false,
        }
    }

    #[must_use]
    pub const fn round(&self) -> u8 {
        self.round
    }

    #[must_use]
    pub const fn date(&self) -> Option<OffsetDateTime> {
        self.date
    }

    #[must_use]
    pub const fn home(&self) -> Option<&ParticipantId> {
        self.home.as_ref()
    }

    #[must_use]
    pub const fn away(&self) -> Option<&ParticipantId> {
        self.away.as_ref()
    }

    /// Returns the participant on the given side, if any.
    #[must_use]
    pub const fn team(&self, side: Side) -> Option<&ParticipantId> {
        match side {
            Side::Home => self.home.as_ref(),
            Side::Away => self.away.as_ref(),
        }
    }

    #[must_use]
    pub const fn stadium(&self) -> Option<&StadiumAssignment> {
        self.stadium.as_ref()
    }

    /// Returns whether a user has interacted with this slot.
    #[must_use]
    pub const fn is_touched(&self) -> bool {
        self.touched
    }

    /// Returns whether home, away and date are all present.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.home.is_some() && self.away.is_some() && self.date.is_some()
    }

    /// Returns the observable state of this slot.
    #[must_use]
    pub const fn state(&self) -> SlotState {
        if self.is_completed() {
            SlotState::Completed
        } else if self.touched {
            SlotState::PartiallyFilled
        } else {
            SlotState::Empty
        }
    }

    fn assign(&mut self, side: Side, participant: ParticipantId) {
        match side {
            Side::Home => self.home = Some(participant),
            Side::Away => self.away = Some(participant),
        }
        // Stadium depends on both sides and is re-derived by the caller
        self.stadium = None;
        self.touched = true;
    }

    fn set_date(&mut self, date: OffsetDateTime) {
        self.date = Some(date);
        self.touched = true;
    }

    fn reset(&mut self) {
        *self = Self::empty(self.round);
    }
}

/// A completed slot, borrowed from its schedule.
///
/// Only completed slots take part in matchup, date and ordering checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedFixture<'a> {
    /// Where the slot sits in the schedule.
    pub location: SlotLocation,
    /// The home participant.
    pub home: &'a ParticipantId,
    /// The away participant.
    pub away: &'a ParticipantId,
    /// The fixture date.
    pub date: OffsetDateTime,
}

impl CompletedFixture<'_> {
    /// Returns whether the fixture pits a participant against itself.
    #[must_use]
    pub fn is_self_play(&self) -> bool {
        self.home == self.away
    }
}

/// A round robin schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    participants: Vec<Participant>,
    rounds: Vec<Vec<FixtureSlot>>,
}

impl Schedule {
    /// Creates an empty schedule for the default tournament size.
    ///
    /// # Errors
    ///
    /// See [`Schedule::initialize_with`].
    pub fn initialize(participants: Vec<Participant>) -> Result<Self, DomainError> {
        Self::initialize_with(&TournamentConfig::default(), participants)
    }

    /// Creates an empty schedule of `n - 1` rounds with `n / 2` slots each.
    ///
    /// # Arguments
    ///
    /// * `config` - The tournament shape
    /// * `participants` - The participants taking part
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The participant count is odd or differs from the configured size
    /// - Two participants share an identifier
    pub fn initialize_with(
        config: &TournamentConfig,
        participants: Vec<Participant>,
    ) -> Result<Self, DomainError> {
        let count = participants.len();
        if count != config.participant_count || count % 2 != 0 || count < 2 {
            return Err(DomainError::InvalidParticipantCount {
                count,
                expected: config.participant_count,
            });
        }

        let mut seen: HashSet<&ParticipantId> = HashSet::new();
        for participant in &participants {
            if !seen.insert(&participant.id) {
                return Err(DomainError::DuplicateParticipant(participant.id.clone()));
            }
        }

        let rounds = (1..count)
            .map(|number| {
                let round = u8::try_from(number).map_err(|_| {
                    DomainError::InvalidParticipantCount {
                        count,
                        expected: config.participant_count,
                    }
                })?;
                Ok(vec![FixtureSlot::empty(round); count / 2])
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Self {
            participants,
            rounds,
        })
    }

    /// Checks that a schedule obtained from outside (for example, by
    /// deserialization) has the shape `initialize_with` would have produced.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The participant count or identifiers are invalid
    /// - The round or slot counts do not match the participant count
    /// - A slot carries the wrong round number
    /// - A slot refers to a participant outside the schedule
    /// - An untouched slot holds a team, date or stadium
    pub fn verify_shape(&self, config: &TournamentConfig) -> Result<(), DomainError> {
        let expected = Self::initialize_with(config, self.participants.clone())?;

        if self.round_count() != expected.round_count() {
            return Err(DomainError::MalformedSchedule {
                reason: format!(
                    "expected {} rounds, found {}",
                    expected.round_count(),
                    self.round_count()
                ),
            });
        }

        for (index, slots) in self.rounds.iter().enumerate() {
            let number = index + 1;
            if slots.len() != expected.slots_per_round() {
                return Err(DomainError::MalformedSchedule {
                    reason: format!(
                        "round {number} has {} fixtures, expected {}",
                        slots.len(),
                        expected.slots_per_round()
                    ),
                });
            }
            if let Some(slot) = slots.iter().find(|s| usize::from(s.round) != number) {
                return Err(DomainError::MalformedSchedule {
                    reason: format!(
                        "fixture in round {number} is labelled round {}",
                        slot.round
                    ),
                });
            }
        }

        for (location, slot) in self.slots() {
            let has_data = slot.home.is_some()
                || slot.away.is_some()
                || slot.date.is_some()
                || slot.stadium.is_some();
            if has_data && !slot.touched {
                return Err(DomainError::MalformedSchedule {
                    reason: format!("{location} holds data but is marked untouched"),
                });
            }
            for id in [slot.home.as_ref(), slot.away.as_ref()].into_iter().flatten() {
                self.require_participant(id)?;
            }
        }

        Ok(())
    }

    /// The participants this schedule was created with.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Looks up a participant by id.
    #[must_use]
    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    /// Returns the display name for a participant id, falling back to the id.
    #[must_use]
    pub fn display_name(&self, id: &ParticipantId) -> String {
        self.participant(id)
            .map_or_else(|| id.to_string(), |p| p.name.clone())
    }

    /// The number of rounds.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// The number of slots in each round.
    #[must_use]
    pub fn slots_per_round(&self) -> usize {
        self.rounds.first().map_or(0, Vec::len)
    }

    /// Returns the slots of a round (1-based), if it exists.
    #[must_use]
    pub fn round(&self, round: u8) -> Option<&[FixtureSlot]> {
        usize::from(round)
            .checked_sub(1)
            .and_then(|index| self.rounds.get(index))
            .map(Vec::as_slice)
    }

    /// Iterates over the round numbers in order.
    pub fn round_numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.rounds
            .iter()
            .filter_map(|slots| slots.first().map(FixtureSlot::round))
    }

    /// Iterates over every slot with its location, round-major.
    pub fn slots(&self) -> impl Iterator<Item = (SlotLocation, &FixtureSlot)> {
        self.rounds.iter().flat_map(|slots| {
            slots
                .iter()
                .enumerate()
                .map(|(index, slot)| (SlotLocation::new(slot.round, index), slot))
        })
    }

    /// Iterates over every completed slot, round-major.
    pub fn completed(&self) -> impl Iterator<Item = CompletedFixture<'_>> {
        self.slots().filter_map(|(location, slot)| {
            match (slot.home.as_ref(), slot.away.as_ref(), slot.date) {
                (Some(home), Some(away), Some(date)) => Some(CompletedFixture {
                    location,
                    home,
                    away,
                    date,
                }),
                _ => None,
            }
        })
    }

    /// Returns the slot at a location.
    ///
    /// # Errors
    ///
    /// Returns `SlotOutOfRange` if the round or slot index does not exist.
    pub fn slot(&self, location: SlotLocation) -> Result<&FixtureSlot, DomainError> {
        self.round(location.round)
            .and_then(|slots| slots.get(location.slot_index))
            .ok_or_else(|| self.out_of_range(location))
    }

    fn slot_mut(&mut self, location: SlotLocation) -> Result<&mut FixtureSlot, DomainError> {
        let error = self.out_of_range(location);
        usize::from(location.round)
            .checked_sub(1)
            .and_then(|index| self.rounds.get_mut(index))
            .and_then(|slots| slots.get_mut(location.slot_index))
            .ok_or(error)
    }

    fn out_of_range(&self, location: SlotLocation) -> DomainError {
        DomainError::SlotOutOfRange {
            location,
            rounds: self.round_count(),
            slots_per_round: self.slots_per_round(),
        }
    }

    fn require_participant(&self, id: &ParticipantId) -> Result<(), DomainError> {
        if self.participant(id).is_none() {
            return Err(DomainError::UnknownParticipant(id.clone()));
        }
        Ok(())
    }

    /// Returns whether any slot has been touched.
    #[must_use]
    pub fn any_touched(&self) -> bool {
        self.slots().any(|(_, slot)| slot.touched)
    }

    /// Returns whether every slot has been touched.
    #[must_use]
    pub fn all_touched(&self) -> bool {
        self.slots().all(|(_, slot)| slot.touched)
    }

    /// Assigns a participant to one side of a slot.
    ///
    /// Marks the slot touched and clears its stadium assignment, which must be
    /// looked up again once both sides are known.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The location does not exist
    /// - The participant is not part of this schedule
    pub fn assign_team(
        &mut self,
        location: SlotLocation,
        side: Side,
        participant: &ParticipantId,
    ) -> Result<(), DomainError> {
        self.require_participant(participant)?;
        self.slot_mut(location)?.assign(side, participant.clone());
        Ok(())
    }

    /// Sets the date of a slot and marks it touched.
    ///
    /// # Errors
    ///
    /// Returns `SlotOutOfRange` if the location does not exist.
    pub fn set_date(
        &mut self,
        location: SlotLocation,
        date: OffsetDateTime,
    ) -> Result<(), DomainError> {
        self.slot_mut(location)?.set_date(date);
        Ok(())
    }

    /// Returns a slot to its empty, untouched state.
    ///
    /// # Errors
    ///
    /// Returns `SlotOutOfRange` if the location does not exist.
    pub fn reset_slot(&mut self, location: SlotLocation) -> Result<(), DomainError> {
        self.slot_mut(location)?.reset();
        Ok(())
    }

    /// Stores the orientation and stadium of a historical fixture on a slot.
    ///
    /// The historical fixture must involve exactly the two participants
    /// already assigned to the slot; otherwise the slot is left unchanged and
    /// `false` is returned.
    ///
    /// # Errors
    ///
    /// Returns `SlotOutOfRange` if the location does not exist.
    pub fn apply_historical_defaults(
        &mut self,
        location: SlotLocation,
        fixture: &HistoricalFixture,
    ) -> Result<bool, DomainError> {
        let slot = self.slot_mut(location)?;
        let (Some(home), Some(away)) = (slot.home.as_ref(), slot.away.as_ref()) else {
            return Ok(false);
        };

        let same_pair = (home == &fixture.home && away == &fixture.away)
            || (home == &fixture.away && away == &fixture.home);
        if !same_pair {
            return Ok(false);
        }

        slot.home = Some(fixture.home.clone());
        slot.away = Some(fixture.away.clone());
        slot.stadium.clone_from(&fixture.stadium);
        slot.touched = true;
        Ok(true)
    }
}
