// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Evaluation, TransitionResult};
use matchday_domain::Schedule;
use tracing::{debug, warn};

/// Applies a command to a schedule, producing a new schedule and its
/// evaluation.
///
/// The input schedule is never modified. Every successful application
/// re-derives trackers, violations and conflict suggestions from the new
/// schedule.
///
/// # Arguments
///
/// * `schedule` - The current schedule (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new schedule and its evaluation
/// * `Err(CoreError)` if the command is structurally invalid
///
/// # Errors
///
/// Returns an error if:
/// - The target slot does not exist
/// - The participant is not part of the schedule
pub fn apply(schedule: &Schedule, command: Command) -> Result<TransitionResult, CoreError> {
    let location = command.location();
    debug!(command = command.name(), %location, "Applying command");

    let mut new_schedule: Schedule = schedule.clone();
    let result = match command {
        Command::AssignTeam {
            location,
            side,
            participant,
        } => new_schedule.assign_team(location, side, &participant),
        Command::SetDate { location, date } => new_schedule.set_date(location, date),
        Command::ResetSlot { location } => new_schedule.reset_slot(location),
        Command::ApplyHistoricalDefaults { location, fixture } => new_schedule
            .apply_historical_defaults(location, &fixture)
            .map(|applied| {
                if !applied {
                    debug!(%location, "Historical fixture does not match slot; ignored");
                }
            }),
    };

    if let Err(err) = result {
        warn!(%location, error = %err, "Command rejected");
        return Err(CoreError::from(err));
    }

    let evaluation: Evaluation = Evaluation::of(&new_schedule);
    debug!(
        violations = evaluation.report.violations.len(),
        incomplete = evaluation.report.incomplete_slots.len(),
        "Re-evaluated schedule"
    );

    Ok(TransitionResult {
        new_schedule,
        evaluation,
    })
}
