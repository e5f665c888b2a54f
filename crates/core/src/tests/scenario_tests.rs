// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_schedule, fill_slot, id, loc, violations_of};
use crate::{
    ConstraintRule, InfeasibilityReason, InfeasiblePairing, Pairing, ValidationReport,
    explain_infeasibility, suggest_pairings, validate,
};
use matchday_domain::{Schedule, Trackers};
use time::macros::datetime;

#[test]
fn test_scenario_a_empty_schedule_is_unstarted() {
    let schedule: Schedule = create_test_schedule();

    let report: ValidationReport = validate(&schedule);
    assert!(report.violations.is_empty());
    assert!(report.results.is_none());
    assert!(report.incomplete_slots.is_empty());
}

#[test]
fn test_scenario_b_participant_twice_in_round() {
    let mut schedule: Schedule = create_test_schedule();
    fill_slot(&mut schedule, loc(1, 0), "A", "B", datetime!(2026-02-07 15:00 UTC));
    fill_slot(&mut schedule, loc(1, 1), "A", "C", datetime!(2026-02-07 17:00 UTC));

    let report: ValidationReport = validate(&schedule);
    let exclusivity = violations_of(&report, ConstraintRule::RoundExclusivity);

    assert_eq!(exclusivity.len(), 1);
    assert_eq!(exclusivity[0].location, Some(loc(1, 1)));
    assert!(exclusivity[0].message.contains("Team A"));
    assert!(!report.results.unwrap().passed(ConstraintRule::RoundExclusivity));
}

#[test]
fn test_scenario_c_rounds_share_a_weekend() {
    let mut schedule: Schedule = create_test_schedule();
    fill_slot(&mut schedule, loc(1, 0), "A", "B", datetime!(2026-02-07 15:00 UTC));
    fill_slot(&mut schedule, loc(3, 0), "C", "D", datetime!(2026-02-07 18:00 UTC));

    let report: ValidationReport = validate(&schedule);
    let collisions = violations_of(&report, ConstraintRule::NoCrossRoundCollision);

    assert_eq!(collisions.len(), 1);
    assert_eq!(collisions[0].location, None);
    assert_eq!(
        collisions[0].message,
        "Round 1 and Round 3 share the weekend of 2026-02-07"
    );
    assert!(
        !report
            .results
            .unwrap()
            .passed(ConstraintRule::NoCrossRoundCollision)
    );
}

#[test]
fn test_scenario_d_date_outside_competition_months() {
    let mut schedule: Schedule = create_test_schedule();
    fill_slot(&mut schedule, loc(2, 0), "A", "B", datetime!(2026-04-01 19:00 UTC));

    let report: ValidationReport = validate(&schedule);
    let window = violations_of(&report, ConstraintRule::DateWindow);

    assert!(!window.is_empty());
    assert!(window.iter().all(|v| v.location == Some(loc(2, 0))));
    assert!(
        window
            .iter()
            .any(|v| v.message.contains("outside the competition months"))
    );
    assert!(!report.results.unwrap().passed(ConstraintRule::DateWindow));
}

#[test]
fn test_scenario_e_only_remaining_pair_already_played() {
    let mut schedule: Schedule = create_test_schedule();
    fill_slot(&mut schedule, loc(1, 0), "A", "B", datetime!(2026-02-07 15:00 UTC));
    fill_slot(&mut schedule, loc(3, 0), "C", "D", datetime!(2026-02-21 15:00 UTC));
    fill_slot(&mut schedule, loc(3, 1), "E", "F", datetime!(2026-02-21 17:00 UTC));
    let trackers: Trackers = Trackers::derive(&schedule);

    let suggestions: Vec<Pairing> = suggest_pairings(&schedule, &trackers, loc(3, 2)).unwrap();
    assert!(suggestions.is_empty());

    let explanation: Vec<InfeasiblePairing> =
        explain_infeasibility(&schedule, &trackers, loc(3, 2)).unwrap();
    assert_eq!(
        explanation,
        vec![InfeasiblePairing {
            first: id("A"),
            second: id("B"),
            reason: InfeasibilityReason::AlreadyPlayed,
            played_at: Some(loc(1, 0)),
        }]
    );
    assert_eq!(explanation[0].reason.to_string(), "already played");
}

#[test]
fn test_scenario_f_round_one_in_second_week() {
    let mut schedule: Schedule = create_test_schedule();
    fill_slot(&mut schedule, loc(1, 0), "A", "B", datetime!(2026-02-14 15:00 UTC));

    let report: ValidationReport = validate(&schedule);
    let placement = violations_of(&report, ConstraintRule::Round1Placement);

    assert_eq!(placement.len(), 1);
    assert_eq!(placement[0].location, None);
    assert!(
        placement[0]
            .message
            .starts_with("Round 1 must be played in the first week of February")
    );
    assert!(!report.results.unwrap().passed(ConstraintRule::Round1Placement));
}
