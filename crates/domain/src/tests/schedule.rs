// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_participants, create_test_schedule, fill_slot, id};
use crate::{
    DomainError, HistoricalFixture, Participant, Schedule, Side, SlotLocation, SlotState,
    StadiumAssignment, TournamentConfig,
};
use time::macros::datetime;

#[test]
fn test_initialize_builds_five_rounds_of_three() {
    let schedule: Schedule = create_test_schedule();

    assert_eq!(schedule.round_count(), 5);
    assert_eq!(schedule.slots_per_round(), 3);
    assert_eq!(schedule.slots().count(), 15);
    assert_eq!(
        schedule.round_numbers().collect::<Vec<u8>>(),
        vec![1, 2, 3, 4, 5]
    );
    assert!(
        schedule
            .slots()
            .all(|(location, slot)| slot.state() == SlotState::Empty
                && slot.round() == location.round)
    );
    assert!(!schedule.any_touched());
}

#[test]
fn test_initialize_rejects_odd_participant_count() {
    let mut participants: Vec<Participant> = create_test_participants();
    participants.pop();

    let result: Result<Schedule, DomainError> = Schedule::initialize(participants);
    assert_eq!(
        result,
        Err(DomainError::InvalidParticipantCount {
            count: 5,
            expected: 6
        })
    );
}

#[test]
fn test_initialize_rejects_wrong_size() {
    let mut participants: Vec<Participant> = create_test_participants();
    participants.push(Participant::new("G", "Team G"));
    participants.push(Participant::new("H", "Team H"));

    let result: Result<Schedule, DomainError> = Schedule::initialize(participants);
    assert!(matches!(
        result,
        Err(DomainError::InvalidParticipantCount { count: 8, .. })
    ));
}

#[test]
fn test_initialize_with_custom_size() {
    let participants: Vec<Participant> = ["A", "B", "C", "D"]
        .iter()
        .map(|id| Participant::new(id, id))
        .collect();

    let schedule: Schedule =
        Schedule::initialize_with(&TournamentConfig::new(4), participants).unwrap();
    assert_eq!(schedule.round_count(), 3);
    assert_eq!(schedule.slots_per_round(), 2);
}

#[test]
fn test_initialize_rejects_duplicate_participants() {
    let mut participants: Vec<Participant> = create_test_participants();
    participants[5] = Participant::new("A", "Another A");

    let result: Result<Schedule, DomainError> = Schedule::initialize(participants);
    assert_eq!(result, Err(DomainError::DuplicateParticipant(id("A"))));
}

#[test]
fn test_assign_team_marks_slot_touched() {
    let mut schedule: Schedule = create_test_schedule();
    let location: SlotLocation = SlotLocation::new(2, 1);

    schedule.assign_team(location, Side::Home, &id("A")).unwrap();

    let slot = schedule.slot(location).unwrap();
    assert_eq!(slot.home(), Some(&id("A")));
    assert_eq!(slot.away(), None);
    assert!(slot.is_touched());
    assert_eq!(slot.state(), SlotState::PartiallyFilled);
}

#[test]
fn test_assign_team_clears_stadium() {
    let mut schedule: Schedule = create_test_schedule();
    let location: SlotLocation = SlotLocation::new(1, 0);
    fill_slot(&mut schedule, location, "A", "B", datetime!(2026-02-07 15:00 UTC));
    let applied: bool = schedule
        .apply_historical_defaults(
            location,
            &HistoricalFixture {
                home: id("A"),
                away: id("B"),
                stadium: Some(StadiumAssignment::new("Arena A", Some("North"))),
            },
        )
        .unwrap();
    assert!(applied);
    assert!(schedule.slot(location).unwrap().stadium().is_some());

    schedule.assign_team(location, Side::Away, &id("C")).unwrap();
    assert!(schedule.slot(location).unwrap().stadium().is_none());
}

#[test]
fn test_assign_unknown_participant_leaves_schedule_unchanged() {
    let mut schedule: Schedule = create_test_schedule();
    let before: Schedule = schedule.clone();

    let result = schedule.assign_team(SlotLocation::new(1, 0), Side::Home, &id("Z"));
    assert_eq!(result, Err(DomainError::UnknownParticipant(id("Z"))));
    assert_eq!(schedule, before);
}

#[test]
fn test_slot_operations_reject_out_of_range_locations() {
    let mut schedule: Schedule = create_test_schedule();
    let before: Schedule = schedule.clone();

    for location in [
        SlotLocation::new(0, 0),
        SlotLocation::new(6, 0),
        SlotLocation::new(1, 3),
    ] {
        assert!(matches!(
            schedule.assign_team(location, Side::Home, &id("A")),
            Err(DomainError::SlotOutOfRange { .. })
        ));
        assert!(matches!(
            schedule.set_date(location, datetime!(2026-02-07 15:00 UTC)),
            Err(DomainError::SlotOutOfRange { .. })
        ));
        assert!(matches!(
            schedule.reset_slot(location),
            Err(DomainError::SlotOutOfRange { .. })
        ));
    }

    assert_eq!(schedule, before);
}

#[test]
fn test_set_date_completes_slot() {
    let mut schedule: Schedule = create_test_schedule();
    let location: SlotLocation = SlotLocation::new(1, 0);

    schedule
        .set_date(location, datetime!(2026-02-07 15:00 UTC))
        .unwrap();
    assert_eq!(
        schedule.slot(location).unwrap().state(),
        SlotState::PartiallyFilled
    );

    schedule.assign_team(location, Side::Home, &id("A")).unwrap();
    schedule.assign_team(location, Side::Away, &id("B")).unwrap();
    assert_eq!(
        schedule.slot(location).unwrap().state(),
        SlotState::Completed
    );
    assert_eq!(schedule.completed().count(), 1);
}

#[test]
fn test_reset_slot_returns_to_empty() {
    let mut schedule: Schedule = create_test_schedule();
    let location: SlotLocation = SlotLocation::new(3, 2);
    fill_slot(&mut schedule, location, "A", "B", datetime!(2026-02-21 15:00 UTC));

    schedule.reset_slot(location).unwrap();

    let slot = schedule.slot(location).unwrap();
    assert_eq!(slot.state(), SlotState::Empty);
    assert!(!slot.is_touched());
    assert_eq!(slot.round(), 3);
    assert_eq!(schedule, create_test_schedule());
}

#[test]
fn test_reset_then_refill_reproduces_slot() {
    let mut schedule: Schedule = create_test_schedule();
    let location: SlotLocation = SlotLocation::new(2, 0);
    fill_slot(&mut schedule, location, "C", "D", datetime!(2026-02-14 15:00 UTC));
    let original: Schedule = schedule.clone();

    schedule.reset_slot(location).unwrap();
    fill_slot(&mut schedule, location, "C", "D", datetime!(2026-02-14 15:00 UTC));

    assert_eq!(schedule, original);
}

#[test]
fn test_historical_defaults_set_orientation() {
    let mut schedule: Schedule = create_test_schedule();
    let location: SlotLocation = SlotLocation::new(1, 0);
    fill_slot(&mut schedule, location, "A", "B", datetime!(2026-02-07 15:00 UTC));

    let applied: bool = schedule
        .apply_historical_defaults(
            location,
            &HistoricalFixture {
                home: id("B"),
                away: id("A"),
                stadium: Some(StadiumAssignment::new("Arena B", None)),
            },
        )
        .unwrap();

    assert!(applied);
    let slot = schedule.slot(location).unwrap();
    assert_eq!(slot.home(), Some(&id("B")));
    assert_eq!(slot.away(), Some(&id("A")));
    assert_eq!(slot.stadium().unwrap().stadium, "Arena B");
}

#[test]
fn test_historical_defaults_for_other_pair_are_ignored() {
    let mut schedule: Schedule = create_test_schedule();
    let location: SlotLocation = SlotLocation::new(1, 0);
    fill_slot(&mut schedule, location, "A", "B", datetime!(2026-02-07 15:00 UTC));
    let before: Schedule = schedule.clone();

    let applied: bool = schedule
        .apply_historical_defaults(
            location,
            &HistoricalFixture {
                home: id("C"),
                away: id("A"),
                stadium: None,
            },
        )
        .unwrap();

    assert!(!applied);
    assert_eq!(schedule, before);
}

#[test]
fn test_schedule_serialization_round_trip_preserves_dates() {
    let mut schedule: Schedule = create_test_schedule();
    fill_slot(
        &mut schedule,
        SlotLocation::new(1, 0),
        "A",
        "B",
        datetime!(2026-02-06 19:30 UTC),
    );

    let json: String = serde_json::to_string(&schedule).unwrap();
    assert!(json.contains("2026-02-06T19:30:00Z"));

    let restored: Schedule = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, schedule);
    assert!(restored.verify_shape(&TournamentConfig::default()).is_ok());
}

#[test]
fn test_verify_shape_rejects_foreign_participant() {
    let mut schedule: Schedule = create_test_schedule();
    schedule
        .assign_team(SlotLocation::new(1, 0), Side::Home, &id("A"))
        .unwrap();
    let json: String = serde_json::to_string(&schedule)
        .unwrap()
        .replacen("\"home\":\"A\"", "\"home\":\"Z\"", 1);

    let restored: Schedule = serde_json::from_str(&json).unwrap();
    assert_eq!(
        restored.verify_shape(&TournamentConfig::default()),
        Err(DomainError::UnknownParticipant(id("Z")))
    );
}

#[test]
fn test_verify_shape_rejects_wrong_round_count() {
    let participants: Vec<Participant> = create_test_participants()[..4].to_vec();
    let schedule: Schedule =
        Schedule::initialize_with(&TournamentConfig::new(4), participants).unwrap();

    assert!(matches!(
        schedule.verify_shape(&TournamentConfig::default()),
        Err(DomainError::InvalidParticipantCount { count: 4, .. })
    ));
}

#[test]
fn test_verify_shape_rejects_untouched_slot_with_data() {
    let schedule: Schedule = create_test_schedule();
    let json: String = serde_json::to_string(&schedule)
        .unwrap()
        .replacen("\"home\":null", "\"home\":\"A\"", 1);

    let restored: Schedule = serde_json::from_str(&json).unwrap();
    assert!(!restored.any_touched());
    assert_eq!(
        restored.verify_shape(&TournamentConfig::default()),
        Err(DomainError::MalformedSchedule {
            reason: String::from("round 1, fixture 1 holds data but is marked untouched"),
        })
    );
}

#[test]
fn test_display_name_falls_back_to_id() {
    let schedule: Schedule = create_test_schedule();
    assert_eq!(schedule.display_name(&id("A")), "Team A");
    assert_eq!(schedule.display_name(&id("Z")), "Z");
}
