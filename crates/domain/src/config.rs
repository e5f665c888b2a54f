// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The default number of participants in the tournament.
pub const DEFAULT_PARTICIPANT_COUNT: usize = 6;

/// Shape parameters of the tournament.
///
/// A round robin of `n` participants has `n - 1` rounds of `n / 2` fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// The exact number of participants a schedule must be created with.
    pub participant_count: usize,
}

impl TournamentConfig {
    /// Creates a configuration for the given participant count.
    #[must_use]
    pub const fn new(participant_count: usize) -> Self {
        Self { participant_count }
    }

    /// The number of rounds in a full round robin.
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.participant_count.saturating_sub(1)
    }

    /// The number of fixtures in each round.
    #[must_use]
    pub const fn slots_per_round(&self) -> usize {
        self.participant_count / 2
    }
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PARTICIPANT_COUNT)
    }
}
