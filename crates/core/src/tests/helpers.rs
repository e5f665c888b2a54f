// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ConstraintRule, ValidationError, ValidationReport};
use matchday_domain::{Participant, ParticipantId, Schedule, Side, SlotLocation};
use time::OffsetDateTime;
use time::macros::datetime;

/// A valid round robin for teams A-F, one Saturday per round.
pub const VALID_ROUNDS: [[(&str, &str); 3]; 5] = [
    [("A", "F"), ("B", "E"), ("C", "D")],
    [("A", "E"), ("F", "D"), ("B", "C")],
    [("A", "D"), ("E", "C"), ("F", "B")],
    [("A", "C"), ("D", "B"), ("E", "F")],
    [("A", "B"), ("C", "F"), ("D", "E")],
];

pub const ROUND_DATES: [OffsetDateTime; 5] = [
    datetime!(2026-02-07 15:00 UTC),
    datetime!(2026-02-14 15:00 UTC),
    datetime!(2026-02-21 15:00 UTC),
    datetime!(2026-02-28 15:00 UTC),
    datetime!(2026-03-07 15:00 UTC),
];

pub fn create_test_participants() -> Vec<Participant> {
    ["A", "B", "C", "D", "E", "F"]
        .iter()
        .map(|id| Participant::new(id, &format!("Team {id}")))
        .collect()
}

pub fn create_test_schedule() -> Schedule {
    Schedule::initialize(create_test_participants()).unwrap()
}

pub fn id(value: &str) -> ParticipantId {
    ParticipantId::new(value)
}

pub const fn loc(round: u8, slot_index: usize) -> SlotLocation {
    SlotLocation::new(round, slot_index)
}

pub fn fill_slot(
    schedule: &mut Schedule,
    location: SlotLocation,
    home: &str,
    away: &str,
    date: OffsetDateTime,
) {
    schedule.assign_team(location, Side::Home, &id(home)).unwrap();
    schedule.assign_team(location, Side::Away, &id(away)).unwrap();
    schedule.set_date(location, date).unwrap();
}

/// Fills every slot of a round with the valid pairings for that round.
pub fn fill_round(schedule: &mut Schedule, round: u8, date: OffsetDateTime) {
    let pairings = VALID_ROUNDS[usize::from(round) - 1];
    for (index, (home, away)) in pairings.iter().enumerate() {
        fill_slot(schedule, loc(round, index), home, away, date);
    }
}

pub fn create_complete_schedule() -> Schedule {
    let mut schedule: Schedule = create_test_schedule();
    for (index, date) in ROUND_DATES.iter().enumerate() {
        fill_round(&mut schedule, u8::try_from(index + 1).unwrap(), *date);
    }
    schedule
}

pub fn violations_of(report: &ValidationReport, rule: ConstraintRule) -> Vec<&ValidationError> {
    report
        .violations
        .iter()
        .filter(|violation| violation.rule == rule)
        .collect()
}
