// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The scheduling session.
//!
//! A session owns exactly one schedule. Every mutation goes through
//! `matchday::apply`, which hands back a new schedule together with a fresh
//! evaluation; the session swaps both in only when the command succeeds.

use std::str::FromStr;

use matchday::{Command, Evaluation, apply, explain_infeasibility, suggest_pairings};
use matchday_domain::{Participant, ParticipantId, Schedule, Side, SlotLocation};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, info, warn};

use crate::collaborator::{HistoricalFixtureLookup, ParticipantDirectory, ScheduleStore};
use crate::config::SessionConfig;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AssignTeamRequest, EvaluationResponse, SaveResponse, SetDateRequest, SlotRequest,
    SuggestionResponse,
};

/// An editing session over one schedule.
pub struct SchedulingSession {
    config: SessionConfig,
    schedule: Schedule,
    evaluation: Evaluation,
    history: Box<dyn HistoricalFixtureLookup>,
}

impl std::fmt::Debug for SchedulingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchedulingSession")
            .field("config", &self.config)
            .field("schedule", &self.schedule)
            .finish_non_exhaustive()
    }
}

impl SchedulingSession {
    /// Starts a session with an empty schedule for the directory's participants.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory cannot be read
    /// - The participants do not fit the configured tournament
    pub fn start(
        config: SessionConfig,
        directory: &dyn ParticipantDirectory,
        history: Box<dyn HistoricalFixtureLookup>,
    ) -> Result<Self, ApiError> {
        let participants: Vec<Participant> = directory.participants()?;
        let schedule: Schedule = Schedule::initialize_with(&config.tournament, participants)
            .map_err(translate_domain_error)?;

        info!(
            participants = schedule.participants().len(),
            rounds = schedule.round_count(),
            season = ?config.season,
            "Started scheduling session"
        );

        Ok(Self::with_schedule(config, schedule, history))
    }

    /// Resumes a session over a previously stored schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule does not have the configured shape.
    pub fn resume(
        config: SessionConfig,
        schedule: Schedule,
        history: Box<dyn HistoricalFixtureLookup>,
    ) -> Result<Self, ApiError> {
        schedule
            .verify_shape(&config.tournament)
            .map_err(translate_domain_error)?;

        debug!(
            touched = schedule.slots().filter(|(_, slot)| slot.is_touched()).count(),
            "Resumed scheduling session"
        );

        Ok(Self::with_schedule(config, schedule, history))
    }

    fn with_schedule(
        config: SessionConfig,
        schedule: Schedule,
        history: Box<dyn HistoricalFixtureLookup>,
    ) -> Self {
        let evaluation: Evaluation = Evaluation::of(&schedule);
        Self {
            config,
            schedule,
            evaluation,
            history,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    #[must_use]
    pub const fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Consumes the session, returning its schedule.
    #[must_use]
    pub fn into_schedule(self) -> Schedule {
        self.schedule
    }

    fn execute(&mut self, command: Command) -> Result<(), ApiError> {
        let result = apply(&self.schedule, command).map_err(translate_core_error)?;
        self.schedule = result.new_schedule;
        self.evaluation = result.evaluation;
        Ok(())
    }

    /// Asks the history for the fixture now occupying a slot and adopts its
    /// orientation and stadium.
    ///
    /// History is advisory: a failing lookup leaves the assignment in place.
    fn fill_from_history(&mut self, location: SlotLocation) -> Result<(), ApiError> {
        let slot = self.schedule.slot(location).map_err(translate_domain_error)?;
        let (Some(home), Some(away)) = (slot.home(), slot.away()) else {
            return Ok(());
        };
        if home == away {
            return Ok(());
        }

        match self.history.find(home, away, self.config.season) {
            Ok(Some(fixture)) => {
                debug!(
                    %location,
                    home = %fixture.home,
                    away = %fixture.away,
                    "Applying historical fixture"
                );
                self.execute(Command::ApplyHistoricalDefaults { location, fixture })
            }
            Ok(None) => Ok(()),
            Err(err) => {
                warn!(%location, error = %err, "Historical fixture lookup failed");
                Ok(())
            }
        }
    }

    /// Assigns a participant to one side of a fixture.
    ///
    /// Once both sides are known the historical fixture between the two
    /// participants, if any, supplies the orientation and stadium.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The side is not `home` or `away`
    /// - The fixture does not exist
    /// - The participant is not part of the schedule
    pub fn assign_team(
        &mut self,
        request: &AssignTeamRequest,
    ) -> Result<EvaluationResponse, ApiError> {
        let side: Side = Side::from_str(&request.side).map_err(|message| ApiError::InvalidInput {
            field: String::from("side"),
            message,
        })?;
        let location: SlotLocation = SlotLocation::new(request.round, request.slot_index);

        self.execute(Command::AssignTeam {
            location,
            side,
            participant: ParticipantId::new(&request.participant_id),
        })?;
        self.fill_from_history(location)?;

        info!(%location, %side, participant = %request.participant_id, "Assigned team");
        Ok(self.validate())
    }

    /// Sets the date of a fixture.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The date is not valid RFC 3339
    /// - The fixture does not exist
    pub fn set_date(&mut self, request: &SetDateRequest) -> Result<EvaluationResponse, ApiError> {
        let date: OffsetDateTime =
            OffsetDateTime::parse(&request.date, &Rfc3339).map_err(|err| {
                ApiError::InvalidInput {
                    field: String::from("date"),
                    message: format!("Failed to parse date '{}': {err}", request.date),
                }
            })?;
        let location: SlotLocation = SlotLocation::new(request.round, request.slot_index);

        self.execute(Command::SetDate { location, date })?;

        info!(%location, date = %request.date, "Set fixture date");
        Ok(self.validate())
    }

    /// Returns a fixture to its empty, untouched state.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture does not exist.
    pub fn reset_slot(&mut self, request: &SlotRequest) -> Result<EvaluationResponse, ApiError> {
        let location: SlotLocation = request.location();
        self.execute(Command::ResetSlot { location })?;

        info!(%location, "Reset fixture");
        Ok(self.validate())
    }

    /// The current evaluation of the schedule.
    #[must_use]
    pub fn validate(&self) -> EvaluationResponse {
        EvaluationResponse::from(&self.evaluation)
    }

    /// Suggests pairings for a fixture, explaining why when there are none.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture does not exist.
    pub fn suggest(&self, request: &SlotRequest) -> Result<SuggestionResponse, ApiError> {
        let location: SlotLocation = request.location();
        let trackers = &self.evaluation.trackers;

        let pairings = suggest_pairings(&self.schedule, trackers, location)
            .map_err(translate_domain_error)?;
        let infeasible = explain_infeasibility(&self.schedule, trackers, location)
            .map_err(translate_domain_error)?;

        debug!(
            %location,
            pairings = pairings.len(),
            infeasible = infeasible.len(),
            "Computed suggestions"
        );
        Ok(SuggestionResponse {
            location,
            pairings,
            infeasible,
        })
    }

    /// Hands the schedule to the store.
    ///
    /// Only a final schedule (every fixture completed, every rule satisfied)
    /// is saved.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The schedule is not final
    /// - The store fails
    pub fn save(&self, store: &mut dyn ScheduleStore) -> Result<SaveResponse, ApiError> {
        let report = &self.evaluation.report;
        if !report.is_final() {
            let untouched_count = self
                .schedule
                .slots()
                .filter(|(_, slot)| !slot.is_touched())
                .count();
            warn!(
                violations = report.violations.len(),
                incomplete = report.incomplete_slots.len(),
                untouched = untouched_count,
                "Refusing to save schedule that is not final"
            );
            return Err(ApiError::ScheduleNotFinal {
                violation_count: report.violations.len(),
                incomplete_count: report.incomplete_slots.len(),
                untouched_count,
            });
        }

        store.save(&self.schedule)?;

        let fixture_count: usize = self.schedule.completed().count();
        info!(fixtures = fixture_count, "Saved schedule");
        Ok(SaveResponse {
            fixture_count,
            message: format!("Saved schedule with {fixture_count} fixtures"),
        })
    }
}
