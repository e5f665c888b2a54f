// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchday_domain::TournamentConfig;
use serde::{Deserialize, Serialize};

/// Settings for one scheduling session.
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// The shape of the tournament.
    pub tournament: TournamentConfig,
    /// The season passed to historical fixture lookups.
    pub season: Option<u16>,
}
