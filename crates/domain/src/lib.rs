// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod config;
mod error;
mod schedule;
mod tracker;
mod types;

#[cfg(test)]
mod tests;

pub use calendar::{
    AnchorKey, is_within_allowed_window, is_within_competition_months, previous_weekend_anchor,
    week_of_month, weekend_anchor,
};
pub use config::{DEFAULT_PARTICIPANT_COUNT, TournamentConfig};
pub use error::DomainError;
pub use schedule::{CompletedFixture, FixtureSlot, Schedule, SlotState};
pub use tracker::{
    MatchupKey, MatchupTracker, PerRoundTracker, Trackers, all_matchups, derive_matchup_tracker,
    derive_per_round_tracker,
};
pub use types::{
    HistoricalFixture, Participant, ParticipantId, Side, SlotLocation, StadiumAssignment,
};
