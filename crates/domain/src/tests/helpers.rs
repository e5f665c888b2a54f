// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Participant, ParticipantId, Schedule, Side, SlotLocation};
use time::OffsetDateTime;

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
