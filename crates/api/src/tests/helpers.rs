// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use matchday_domain::{HistoricalFixture, Participant, ParticipantId, StadiumAssignment};

use crate::{
    AssignTeamRequest, HistoricalFixtureLookup, NoHistory, SchedulingSession, SessionConfig,
    SetDateRequest, StaticDirectory,
};

/// A valid round robin for teams A-F, one Saturday per round.
pub const VALID_ROUNDS: [[(&str, &str); 3]; 5] = [
    [("A", "F"), ("B", "E"), ("C", "D")],
    [("A", "E"), ("F", "D"), ("B", "C")],
    [("A", "D"), ("E", "C"), ("F", "B")],
    [("A", "C"), ("D", "B"), ("E", "F")],
    [("A", "B"), ("C", "F"), ("D", "E")],
];

pub const ROUND_DATES: [&str; 5] = [
    "2026-02-07T15:00:00Z",
    "2026-02-14T15:00:00Z",
    "2026-02-21T15:00:00Z",
    "2026-02-28T15:00:00Z",
    "2026-03-07T15:00:00Z",
];

pub fn create_test_participants() -> Vec<Participant> {
    ["A", "B", "C", "D", "E", "F"]
        .iter()
        .map(|id| Participant::new(id, &format!("Team {id}")))
        .collect()
}

pub fn create_test_directory() -> StaticDirectory {
    StaticDirectory::new(create_test_participants())
}

pub fn create_test_session() -> SchedulingSession {
    create_session_with_history(Box::new(NoHistory))
}

pub fn create_session_with_history(history: Box<dyn HistoricalFixtureLookup>) -> SchedulingSession {
    let config: SessionConfig = SessionConfig {
        season: Some(2026),
        ..SessionConfig::default()
    };
    SchedulingSession::start(config, &create_test_directory(), history).unwrap()
}

pub fn assign_request(
    round: u8,
    slot_index: usize,
    side: &str,
    participant: &str,
) -> AssignTeamRequest {
    AssignTeamRequest {
        round,
        slot_index,
        side: String::from(side),
        participant_id: String::from(participant),
    }
}

pub fn date_request(round: u8, slot_index: usize, date: &str) -> SetDateRequest {
    SetDateRequest {
        round,
        slot_index,
        date: String::from(date),
    }
}

pub fn fill_fixture(
    session: &mut SchedulingSession,
    round: u8,
    slot_index: usize,
    home: &str,
    away: &str,
    date: &str,
) {
    session
        .assign_team(&assign_request(round, slot_index, "home", home))
        .unwrap();
    session
        .assign_team(&assign_request(round, slot_index, "away", away))
        .unwrap();
    session
        .set_date(&date_request(round, slot_index, date))
        .unwrap();
}

pub fn fill_all_rounds(session: &mut SchedulingSession) {
    for (round_index, pairings) in VALID_ROUNDS.iter().enumerate() {
        let round: u8 = u8::try_from(round_index + 1).unwrap();
        for (slot_index, (home, away)) in pairings.iter().enumerate() {
            fill_fixture(session, round, slot_index, home, away, ROUND_DATES[round_index]);
        }
    }
}

pub fn historical_fixture(home: &str, away: &str, stadium: &str) -> HistoricalFixture {
    HistoricalFixture {
        home: ParticipantId::new(home),
        away: ParticipantId::new(away),
        stadium: Some(StadiumAssignment::new(stadium, None)),
    }
}
