// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::suggestion::resolve_conflicts;
use crate::validation::{ConflictSuggestion, ValidationReport, validate};
use matchday_domain::{Schedule, SlotLocation, Trackers};
use std::collections::BTreeMap;

/// Everything derived from one schedule snapshot.
///
/// An evaluation is always recomputed from scratch; it is never updated in
/// place alongside the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The validation report.
    pub report: ValidationReport,
    /// The matchup and per-round trackers.
    pub trackers: Trackers,
    /// Duplicate-pairing remedies grouped by offending slot.
    pub conflicts: BTreeMap<SlotLocation, Vec<ConflictSuggestion>>,
}

impl Evaluation {
    /// Derives trackers, validation report and conflict suggestions.
    #[must_use]
    pub fn of(schedule: &Schedule) -> Self {
        let report = validate(schedule);
        let conflicts = resolve_conflicts(&report.violations);
        Self {
            report,
            trackers: Trackers::derive(schedule),
            conflicts,
        }
    }
}

/// The result of a successful command application.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new schedule after the transition.
    pub new_schedule: Schedule,
    /// The evaluation of the new schedule.
    pub evaluation: Evaluation,
}
