// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use matchday::{
    ConflictSuggestion, ConstraintResults, Evaluation, InfeasiblePairing, Pairing,
    ValidationError,
};
use matchday_domain::SlotLocation;
use serde::{Deserialize, Serialize};

/// API request to assign a participant to one side of a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignTeamRequest {
    /// The round (1-based).
    pub round: u8,
    /// The fixture within the round (0-based).
    pub slot_index: usize,
    /// The side, `home` or `away`.
    pub side: String,
    /// The participant identifier.
    pub participant_id: String,
}

/// API request to set the date of a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetDateRequest {
    /// The round (1-based).
    pub round: u8,
    /// The fixture within the round (0-based).
    pub slot_index: usize,
    /// The kick-off time (RFC 3339).
    pub date: String,
}

/// API request addressing a single fixture.
///
/// Used for resets and for suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRequest {
    /// The round (1-based).
    pub round: u8,
    /// The fixture within the round (0-based).
    pub slot_index: usize,
}

impl SlotRequest {
    #[must_use]
    pub const fn location(&self) -> SlotLocation {
        SlotLocation::new(self.round, self.slot_index)
    }
}

/// API response describing the current state of the rules.
///
/// Returned after every mutation and by explicit validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    /// Every rule violation.
    pub violations: Vec<ValidationError>,
    /// Per-rule results; absent until a fixture is completed.
    pub results: Option<ConstraintResults>,
    /// Fixtures that were started but not completed.
    pub incomplete_slots: Vec<SlotLocation>,
    /// Proposed resets for duplicate pairings, ordered by offending fixture.
    pub conflicts: Vec<ConflictSuggestion>,
    /// Whether the schedule can be saved.
    pub is_final: bool,
}

impl From<&Evaluation> for EvaluationResponse {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            violations: evaluation.report.violations.clone(),
            results: evaluation.report.results,
            incomplete_slots: evaluation.report.incomplete_slots.clone(),
            conflicts: evaluation.conflicts.values().flatten().copied().collect(),
            is_final: evaluation.report.is_final(),
        }
    }
}

/// API response listing the pairings available for a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    /// The fixture the suggestions are for.
    pub location: SlotLocation,
    /// Valid pairings, in participant order.
    pub pairings: Vec<Pairing>,
    /// Why no pairing fits; empty whenever `pairings` is not.
    pub infeasible: Vec<InfeasiblePairing>,
}

/// API response for a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    /// The number of fixtures saved.
    pub fixture_count: usize,
    /// A success message.
    pub message: String,
}
