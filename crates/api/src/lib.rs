// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod collaborator;
mod config;
mod error;
mod request_response;
mod session;

#[cfg(test)]
mod tests;

pub use collaborator::{
    CollaboratorError, HistoricalFixtureLookup, HistoryRecord, InMemoryHistory, InMemoryStore,
    NoHistory, ParticipantDirectory, ScheduleStore, StaticDirectory,
};
pub use config::SessionConfig;
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use request_response::{
    AssignTeamRequest, EvaluationResponse, SaveResponse, SetDateRequest, SlotRequest,
    SuggestionResponse,
};
pub use session::SchedulingSession;
