// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchday_domain::{HistoricalFixture, ParticipantId, Side, SlotLocation};
use time::OffsetDateTime;

/// A command represents an edit to a schedule as data only.
///
/// Commands are the only way to request schedule changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Assign a participant to one side of a slot.
    AssignTeam {
        /// The target slot.
        location: SlotLocation,
        /// The side to assign.
        side: Side,
        /// The participant to assign.
        participant: ParticipantId,
    },
    /// Set the date of a slot.
    SetDate {
        /// The target slot.
        location: SlotLocation,
        /// The fixture date.
        date: OffsetDateTime,
    },
    /// Return a slot to its empty, untouched state.
    ResetSlot {
        /// The target slot.
        location: SlotLocation,
    },
    /// Store the orientation and stadium of a historical fixture on a slot.
    ApplyHistoricalDefaults {
        /// The target slot.
        location: SlotLocation,
        /// The fixture returned by the historical lookup.
        fixture: HistoricalFixture,
    },
}

impl Command {
    /// The name of this command, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AssignTeam { .. } => "AssignTeam",
            Self::SetDate { .. } => "SetDate",
            Self::ResetSlot { .. } => "ResetSlot",
            Self::ApplyHistoricalDefaults { .. } => "ApplyHistoricalDefaults",
        }
    }

    /// The slot this command targets.
    #[must_use]
    pub const fn location(&self) -> SlotLocation {
        match self {
            Self::AssignTeam { location, .. }
            | Self::SetDate { location, .. }
            | Self::ResetSlot { location }
            | Self::ApplyHistoricalDefaults { location, .. } => *location,
        }
    }
}
