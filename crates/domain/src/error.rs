// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{ParticipantId, SlotLocation};

/// Structural errors raised by schedule construction and slot operations.
///
/// These are fatal for the operation that raised them: the schedule is left
/// exactly as it was. Rule violations of a well-formed schedule are not
/// errors; they are reported by the validator as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The participant count is odd or differs from the configured size.
    InvalidParticipantCount {
        /// The number of participants supplied.
        count: usize,
        /// The number of participants the tournament requires.
        expected: usize,
    },
    /// Two participants share the same identifier.
    DuplicateParticipant(ParticipantId),
    /// The round number or slot index does not exist in the schedule.
    SlotOutOfRange {
        /// The requested location.
        location: SlotLocation,
        /// The number of rounds in the schedule.
        rounds: usize,
        /// The number of slots in each round.
        slots_per_round: usize,
    },
    /// The participant is not part of this schedule.
    UnknownParticipant(ParticipantId),
    /// A deserialized schedule does not have the shape of a round robin.
    MalformedSchedule {
        /// Description of the problem.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParticipantCount { count, expected } => {
                write!(
                    f,
                    "Invalid participant count: {count}. Must be exactly {expected}"
                )
            }
            Self::DuplicateParticipant(id) => {
                write!(f, "Participant '{id}' appears more than once")
            }
            Self::SlotOutOfRange {
                location,
                rounds,
                slots_per_round,
            } => {
                write!(
                    f,
                    "Slot {location} does not exist: schedule has {rounds} rounds of {slots_per_round} fixtures"
                )
            }
            Self::UnknownParticipant(id) => {
                write!(f, "Participant '{id}' is not part of this schedule")
            }
            Self::MalformedSchedule { reason } => {
                write!(f, "Malformed schedule: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
