// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::collaborator::CollaboratorError;
use matchday::CoreError;
use matchday_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The schedule cannot be handed to the store yet.
    ScheduleNotFinal {
        /// The number of rule violations.
        violation_count: usize,
        /// The number of touched but incomplete fixtures.
        incomplete_count: usize,
        /// The number of fixtures never filled in.
        untouched_count: usize,
    },
    /// An external collaborator failed.
    Collaborator {
        /// A description of the failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ScheduleNotFinal {
                violation_count,
                incomplete_count,
                untouched_count,
            } => {
                write!(
                    f,
                    "Schedule is not final: {violation_count} violation(s), {incomplete_count} incomplete and {untouched_count} untouched fixture(s)"
                )
            }
            Self::Collaborator { message } => {
                write!(f, "Collaborator error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<CollaboratorError> for ApiError {
    fn from(err: CollaboratorError) -> Self {
        Self::Collaborator {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message = err.to_string();
    match err {
        DomainError::InvalidParticipantCount { .. } => ApiError::InvalidInput {
            field: String::from("participants"),
            message,
        },
        DomainError::DuplicateParticipant(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_participant"),
            message,
        },
        DomainError::SlotOutOfRange { .. } => ApiError::InvalidInput {
            field: String::from("location"),
            message,
        },
        DomainError::UnknownParticipant(_) => ApiError::InvalidInput {
            field: String::from("participant_id"),
            message,
        },
        DomainError::MalformedSchedule { .. } => ApiError::InvalidInput {
            field: String::from("schedule"),
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
