// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar rules for fixture dates.
//!
//! This module classifies fixture timestamps against the competition
//! calendar:
//! - Fixtures are played Friday from 18:00, any time Saturday, or Sunday
//!   until 20:00
//! - The competition runs in February and March
//! - Friday, Saturday and Sunday of one week form a single "weekend",
//!   identified by its Saturday (the weekend anchor)
//!
//! ## Invariants
//!
//! - All classification happens in UTC; timestamps carrying another offset
//!   are converted first
//! - Monday to Thursday dates are never moved by `weekend_anchor`; they
//!   anchor to themselves
//! - Date arithmetic saturates at the limits of the supported calendar

use serde::{Deserialize, Serialize};
use time::macros::time;
use time::{Date, Duration, Month, OffsetDateTime, Time, UtcOffset, Weekday};

/// Earliest kick-off on a Friday.
const FRIDAY_OPENS: Time = time!(18:00);

/// Latest kick-off on a Sunday (inclusive).
const SUNDAY_CLOSES: Time = time!(20:00);

/// The Saturday identifying the weekend a fixture belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnchorKey(Date);

impl AnchorKey {
    /// Returns the anchor as a calendar date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.0
    }

    /// The calendar year of the anchor.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.0.year()
    }

    /// The calendar month of the anchor.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.0.month()
    }

    /// The day of the month of the anchor.
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.0.day()
    }
}

impl std::fmt::Display for AnchorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            u8::from(self.month()),
            self.day()
        )
    }
}

fn to_utc(timestamp: OffsetDateTime) -> OffsetDateTime {
    timestamp.to_offset(UtcOffset::UTC)
}

/// Returns whether a timestamp falls inside the weekly match window.
///
/// The window opens Friday at 18:00, covers all of Saturday, and closes
/// Sunday at 20:00 (inclusive).
#[must_use]
pub fn is_within_allowed_window(timestamp: OffsetDateTime) -> bool {
    let utc = to_utc(timestamp);
    match utc.weekday() {
        Weekday::Friday => utc.time() >= FRIDAY_OPENS,
        Weekday::Saturday => true,
        Weekday::Sunday => utc.time() <= SUNDAY_CLOSES,
        _ => false,
    }
}

/// Returns whether a timestamp falls in February or March.
#[must_use]
pub fn is_within_competition_months(timestamp: OffsetDateTime) -> bool {
    matches!(to_utc(timestamp).month(), Month::February | Month::March)
}

/// Computes the weekend anchor of a timestamp.
///
/// Friday moves forward one day and Sunday moves back one day, so every
/// fixture of a weekend anchors to the same Saturday. Other days are
/// returned unchanged.
#[must_use]
pub fn weekend_anchor(timestamp: OffsetDateTime) -> AnchorKey {
    let date = to_utc(timestamp).date();
    let anchored = match date.weekday() {
        Weekday::Friday => date.saturating_add(Duration::DAY),
        Weekday::Sunday => date.saturating_sub(Duration::DAY),
        _ => date,
    };
    AnchorKey(anchored)
}

/// Returns the 1-based week of the month: `ceil(day / 7)`.
#[must_use]
pub fn week_of_month(timestamp: OffsetDateTime) -> u8 {
    to_utc(timestamp).day().div_ceil(7)
}

/// Returns the anchor of the weekend immediately before the timestamp's own
/// weekend.
#[must_use]
pub fn previous_weekend_anchor(timestamp: OffsetDateTime) -> AnchorKey {
    AnchorKey(weekend_anchor(timestamp).0.saturating_sub(Duration::WEEK))
}
