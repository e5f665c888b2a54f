// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule validation.
//!
//! Validation is **computed**, not stored. `validate` is a pure function of
//! the schedule: it re-evaluates every rule on every call and never stops at
//! the first failure, so the caller always sees the complete violation set.
//!
//! Only completed slots (home, away and date present) take part in the
//! semantic checks. A touched slot that is still incomplete is listed in the
//! report but never produces a violation of its own.

use matchday_domain::{
    AnchorKey, CompletedFixture, MatchupKey, ParticipantId, Schedule, SlotLocation,
    is_within_allowed_window, is_within_competition_months, previous_weekend_anchor,
    week_of_month, weekend_anchor,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use time::format_description::well_known::Rfc3339;
use time::{Month, OffsetDateTime};

/// The rule families checked by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintRule {
    /// Each participant appears at most once per round.
    RoundExclusivity,
    /// A started round has every fixture completed with every participant once.
    RoundCompleteness,
    /// No participant plays against itself.
    NoSelfPlay,
    /// Each pair of participants meets at most once.
    UniquePairing,
    /// Fixture dates fall inside the match window and competition months.
    DateWindow,
    /// All fixtures of a round share one weekend.
    SingleWeekendPerRound,
    /// No two rounds share a weekend.
    NoCrossRoundCollision,
    /// Each round is played after the previous one.
    ChronologicalOrder,
    /// Round 1 is played in the first week of February.
    Round1Placement,
    /// No round is played on the weekend before round 1.
    NoPreRound1,
    /// Every slot has been touched.
    AllTouched,
}

impl ConstraintRule {
    /// Every rule, in checklist order.
    pub const ALL: [Self; 11] = [
        Self::RoundExclusivity,
        Self::RoundCompleteness,
        Self::NoSelfPlay,
        Self::UniquePairing,
        Self::DateWindow,
        Self::SingleWeekendPerRound,
        Self::NoCrossRoundCollision,
        Self::ChronologicalOrder,
        Self::Round1Placement,
        Self::NoPreRound1,
        Self::AllTouched,
    ];

    /// Converts this rule to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RoundExclusivity => "round_exclusivity",
            Self::RoundCompleteness => "round_completeness",
            Self::NoSelfPlay => "no_self_play",
            Self::UniquePairing => "unique_pairing",
            Self::DateWindow => "date_window",
            Self::SingleWeekendPerRound => "single_weekend_per_round",
            Self::NoCrossRoundCollision => "no_cross_round_collision",
            Self::ChronologicalOrder => "chronological_order",
            Self::Round1Placement => "round1_placement",
            Self::NoPreRound1 => "no_pre_round1",
            Self::AllTouched => "all_touched",
        }
    }

    /// A one-line description suitable for a rule checklist.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::RoundExclusivity => "Each team plays at most once per round",
            Self::RoundCompleteness => "Started rounds have every team playing exactly once",
            Self::NoSelfPlay => "No team plays against itself",
            Self::UniquePairing => "Each pair of teams meets exactly once",
            Self::DateWindow => {
                "Fixtures are Friday from 18:00 to Sunday 20:00, in February or March"
            }
            Self::SingleWeekendPerRound => "All fixtures of a round are on the same weekend",
            Self::NoCrossRoundCollision => "No two rounds share a weekend",
            Self::ChronologicalOrder => "Rounds are played in order",
            Self::Round1Placement => "Round 1 is played in the first week of February",
            Self::NoPreRound1 => "No round is played the weekend before round 1",
            Self::AllTouched => "Every fixture has been filled in",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ConstraintRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One boolean per rule family.
///
/// Serialized as a map from rule name to result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<ConstraintRule, bool>",
    from = "BTreeMap<ConstraintRule, bool>"
)]
pub struct ConstraintResults {
    passed: [bool; ConstraintRule::ALL.len()],
}

impl ConstraintResults {
    fn from_violations(violations: &[ValidationError], all_touched: bool) -> Self {
        let mut passed = [true; ConstraintRule::ALL.len()];
        for violation in violations {
            passed[violation.rule.index()] = false;
        }
        passed[ConstraintRule::AllTouched.index()] = all_touched;
        Self { passed }
    }

    /// Returns whether a rule passed.
    #[must_use]
    pub const fn passed(&self, rule: ConstraintRule) -> bool {
        self.passed[rule.index()]
    }

    /// Returns whether every rule passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.passed.iter().all(|passed| *passed)
    }

    /// Iterates over every rule with its result, in checklist order.
    pub fn iter(&self) -> impl Iterator<Item = (ConstraintRule, bool)> + '_ {
        ConstraintRule::ALL
            .iter()
            .map(|rule| (*rule, self.passed(*rule)))
    }
}

impl From<ConstraintResults> for BTreeMap<ConstraintRule, bool> {
    fn from(results: ConstraintResults) -> Self {
        results.iter().collect()
    }
}

impl From<BTreeMap<ConstraintRule, bool>> for ConstraintResults {
    fn from(map: BTreeMap<ConstraintRule, bool>) -> Self {
        let mut passed = [false; ConstraintRule::ALL.len()];
        for (rule, result) in map {
            passed[rule.index()] = result;
        }
        Self { passed }
    }
}

/// A proposed remedy for a duplicate pairing: reset one of the two slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConflictSuggestion {
    /// The slot holding the duplicate occurrence.
    pub slot_to_reset: SlotLocation,
    /// The slot holding the first occurrence of the pairing.
    pub conflicting_slot: SlotLocation,
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The rule family that was violated.
    pub rule: ConstraintRule,
    /// A human-readable description of the violation.
    pub message: String,
    /// The offending slot; `None` for schedule-wide violations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SlotLocation>,
    /// The proposed remedy, for duplicate pairings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict: Option<ConflictSuggestion>,
}

impl ValidationError {
    fn at(rule: ConstraintRule, location: SlotLocation, message: String) -> Self {
        Self {
            rule,
            message,
            location: Some(location),
            conflict: None,
        }
    }

    fn schedule_wide(rule: ConstraintRule, message: String) -> Self {
        Self {
            rule,
            message,
            location: None,
            conflict: None,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.location {
            Some(location) => write!(f, "{location}: {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// The outcome of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Every violation found, in rule order.
    pub violations: Vec<ValidationError>,
    /// Per-rule results; `None` until at least one slot is completed.
    pub results: Option<ConstraintResults>,
    /// Touched slots that are not yet completed.
    pub incomplete_slots: Vec<SlotLocation>,
}

impl ValidationReport {
    /// Returns whether no violations were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns whether the schedule is complete and satisfies every rule.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.is_clean()
            && self.incomplete_slots.is_empty()
            && self.results.is_some_and(|results| results.all_passed())
    }

    /// The violations localized to a slot.
    pub fn violations_at(&self, location: SlotLocation) -> impl Iterator<Item = &ValidationError> {
        self.violations
            .iter()
            .filter(move |violation| violation.location == Some(location))
    }
}

/// Validates a schedule.
///
/// An untouched schedule is neither valid nor invalid: it yields no
/// violations and no results. A schedule with touched but no completed slots
/// is likewise not yet checkable and only lists its incomplete slots.
#[must_use]
pub fn validate(schedule: &Schedule) -> ValidationReport {
    let incomplete_slots: Vec<SlotLocation> = schedule
        .slots()
        .filter(|(_, slot)| slot.is_touched() && !slot.is_completed())
        .map(|(location, _)| location)
        .collect();

    let completed: Vec<CompletedFixture<'_>> = schedule.completed().collect();
    if !schedule.any_touched() || completed.is_empty() {
        return ValidationReport {
            violations: Vec::new(),
            results: None,
            incomplete_slots,
        };
    }

    let mut violations: Vec<ValidationError> = Vec::new();
    check_round_exclusivity(schedule, &completed, &mut violations);
    check_round_completeness(schedule, &completed, &mut violations);
    check_self_play(schedule, &completed, &mut violations);
    check_unique_pairing(schedule, &completed, &mut violations);
    check_date_window(&completed, &mut violations);
    check_single_weekend(&completed, &mut violations);

    let round_dates = established_round_dates(&completed);
    check_cross_round_collision(&round_dates, &mut violations);
    check_chronological_order(&round_dates, &mut violations);
    check_round1_placement(&round_dates, &mut violations);
    check_pre_round1(&round_dates, &mut violations);

    let results = ConstraintResults::from_violations(&violations, schedule.all_touched());
    ValidationReport {
        violations,
        results: Some(results),
        incomplete_slots,
    }
}

fn format_date(date: OffsetDateTime) -> String {
    date.format(&Rfc3339).unwrap_or_else(|_| date.to_string())
}

/// The participants of a fixture, counting a self-play participant once.
fn fixture_participants<'a>(fixture: &CompletedFixture<'a>) -> Vec<&'a ParticipantId> {
    if fixture.is_self_play() {
        vec![fixture.home]
    } else {
        vec![fixture.home, fixture.away]
    }
}

fn check_round_exclusivity(
    schedule: &Schedule,
    completed: &[CompletedFixture<'_>],
    violations: &mut Vec<ValidationError>,
) {
    let mut seen: BTreeMap<u8, BTreeSet<&ParticipantId>> = BTreeMap::new();
    for fixture in completed {
        let round = fixture.location.round;
        let committed = seen.entry(round).or_default();
        for participant in fixture_participants(fixture) {
            if !committed.insert(participant) {
                violations.push(ValidationError::at(
                    ConstraintRule::RoundExclusivity,
                    fixture.location,
                    format!(
                        "{} is already playing in round {round}",
                        schedule.display_name(participant)
                    ),
                ));
            }
        }
    }
}

fn check_round_completeness(
    schedule: &Schedule,
    completed: &[CompletedFixture<'_>],
    violations: &mut Vec<ValidationError>,
) {
    let mut appearances: BTreeMap<u8, BTreeMap<&ParticipantId, usize>> = BTreeMap::new();
    let mut completed_slots: BTreeMap<u8, usize> = BTreeMap::new();
    for fixture in completed {
        let round = fixture.location.round;
        *completed_slots.entry(round).or_default() += 1;
        let counts = appearances.entry(round).or_default();
        *counts.entry(fixture.home).or_default() += 1;
        *counts.entry(fixture.away).or_default() += 1;
    }

    for (round, counts) in &appearances {
        let all_completed = completed_slots.get(round).copied().unwrap_or(0)
            == schedule.slots_per_round();
        let everyone_once = schedule
            .participants()
            .iter()
            .all(|p| counts.get(&p.id).copied().unwrap_or(0) == 1);

        if !(all_completed && everyone_once) {
            violations.push(ValidationError::schedule_wide(
                ConstraintRule::RoundCompleteness,
                format!(
                    "Round {round} is incomplete: all {} fixtures must be completed with every team playing exactly once",
                    schedule.slots_per_round()
                ),
            ));
        }
    }
}

fn check_self_play(
    schedule: &Schedule,
    completed: &[CompletedFixture<'_>],
    violations: &mut Vec<ValidationError>,
) {
    for fixture in completed.iter().filter(|f| f.is_self_play()) {
        violations.push(ValidationError::at(
            ConstraintRule::NoSelfPlay,
            fixture.location,
            format!(
                "{} cannot play against itself",
                schedule.display_name(fixture.home)
            ),
        ));
    }
}

fn check_unique_pairing(
    schedule: &Schedule,
    completed: &[CompletedFixture<'_>],
    violations: &mut Vec<ValidationError>,
) {
    let mut first_seen: BTreeMap<MatchupKey, SlotLocation> = BTreeMap::new();
    for fixture in completed.iter().filter(|f| !f.is_self_play()) {
        let key = MatchupKey::new(fixture.home, fixture.away);
        match first_seen.get(&key) {
            Some(first) => violations.push(ValidationError {
                rule: ConstraintRule::UniquePairing,
                message: format!(
                    "{} vs {} is already scheduled in {first}",
                    schedule.display_name(fixture.home),
                    schedule.display_name(fixture.away)
                ),
                location: Some(fixture.location),
                conflict: Some(ConflictSuggestion {
                    slot_to_reset: fixture.location,
                    conflicting_slot: *first,
                }),
            }),
            None => {
                first_seen.insert(key, fixture.location);
            }
        }
    }
}

fn check_date_window(completed: &[CompletedFixture<'_>], violations: &mut Vec<ValidationError>) {
    for fixture in completed {
        if !is_within_allowed_window(fixture.date) {
            violations.push(ValidationError::at(
                ConstraintRule::DateWindow,
                fixture.location,
                format!(
                    "{} is outside the match window (Friday from 18:00, Saturday, or Sunday until 20:00 UTC)",
                    format_date(fixture.date)
                ),
            ));
        }
        if !is_within_competition_months(fixture.date) {
            violations.push(ValidationError::at(
                ConstraintRule::DateWindow,
                fixture.location,
                format!(
                    "{} is outside the competition months (February and March)",
                    format_date(fixture.date)
                ),
            ));
        }
    }
}

fn check_single_weekend(completed: &[CompletedFixture<'_>], violations: &mut Vec<ValidationError>) {
    let mut round_anchor: BTreeMap<u8, AnchorKey> = BTreeMap::new();
    for fixture in completed {
        let round = fixture.location.round;
        let anchor = weekend_anchor(fixture.date);
        let expected = *round_anchor.entry(round).or_insert(anchor);
        if anchor != expected {
            violations.push(ValidationError::at(
                ConstraintRule::SingleWeekendPerRound,
                fixture.location,
                format!(
                    "Fixture is on the weekend of {anchor}, but round {round} is played on the weekend of {expected}"
                ),
            ));
        }
    }
}

/// The date of each round's first completed slot.
fn established_round_dates(completed: &[CompletedFixture<'_>]) -> BTreeMap<u8, OffsetDateTime> {
    let mut dates: BTreeMap<u8, OffsetDateTime> = BTreeMap::new();
    for fixture in completed {
        dates.entry(fixture.location.round).or_insert(fixture.date);
    }
    dates
}

fn check_cross_round_collision(
    round_dates: &BTreeMap<u8, OffsetDateTime>,
    violations: &mut Vec<ValidationError>,
) {
    let anchors: Vec<(u8, AnchorKey)> = round_dates
        .iter()
        .map(|(round, date)| (*round, weekend_anchor(*date)))
        .collect();

    for (index, (round, anchor)) in anchors.iter().enumerate() {
        for (other_round, other_anchor) in &anchors[index + 1..] {
            if anchor == other_anchor {
                violations.push(ValidationError::schedule_wide(
                    ConstraintRule::NoCrossRoundCollision,
                    format!("Round {round} and Round {other_round} share the weekend of {anchor}"),
                ));
            }
        }
    }
}

fn check_chronological_order(
    round_dates: &BTreeMap<u8, OffsetDateTime>,
    violations: &mut Vec<ValidationError>,
) {
    for (round, date) in round_dates {
        let Some(previous_round) = round.checked_sub(1) else {
            continue;
        };
        let Some(previous_date) = round_dates.get(&previous_round) else {
            continue;
        };
        if date <= previous_date {
            violations.push(ValidationError::schedule_wide(
                ConstraintRule::ChronologicalOrder,
                format!("Round {round} must be played after Round {previous_round}"),
            ));
        }
    }
}

fn check_round1_placement(
    round_dates: &BTreeMap<u8, OffsetDateTime>,
    violations: &mut Vec<ValidationError>,
) {
    let Some(date) = round_dates.get(&1) else {
        return;
    };
    let utc = date.to_offset(time::UtcOffset::UTC);
    if utc.month() != Month::February || week_of_month(*date) != 1 {
        violations.push(ValidationError::schedule_wide(
            ConstraintRule::Round1Placement,
            format!(
                "Round 1 must be played in the first week of February, but is dated {}",
                format_date(*date)
            ),
        ));
    }
}

fn check_pre_round1(
    round_dates: &BTreeMap<u8, OffsetDateTime>,
    violations: &mut Vec<ValidationError>,
) {
    let Some(round1_date) = round_dates.get(&1) else {
        return;
    };
    let forbidden = previous_weekend_anchor(*round1_date);
    for (round, date) in round_dates.iter().filter(|(round, _)| **round != 1) {
        if weekend_anchor(*date) == forbidden {
            violations.push(ValidationError::schedule_wide(
                ConstraintRule::NoPreRound1,
                format!(
                    "Round {round} cannot be played on the weekend before Round 1 ({forbidden})"
                ),
            ));
        }
    }
}
