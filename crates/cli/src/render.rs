// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of session responses.

use std::fmt::{self, Write};

use matchday::ConstraintRule;
use matchday_api::{EvaluationResponse, SuggestionResponse};
use matchday_domain::Schedule;

/// Renders the rule checklist, violations, incomplete fixtures and
/// conflicts of an evaluation.
///
/// # Errors
///
/// Returns an error if writing to the output buffer fails.
pub fn render_evaluation(response: &EvaluationResponse) -> Result<String, fmt::Error> {
    let mut out = String::new();

    match response.results {
        Some(results) => {
            writeln!(out, "Rules:")?;
            for (rule, passed) in results.iter() {
                let mark = if passed { "x" } else { " " };
                writeln!(out, "  [{mark}] {}", rule.description())?;
            }
        }
        None => {
            writeln!(out, "No fixtures completed yet.")?;
        }
    }

    if !response.violations.is_empty() {
        writeln!(out, "Violations ({}):", response.violations.len())?;
        for violation in &response.violations {
            writeln!(out, "  {violation}")?;
        }
    }

    if !response.incomplete_slots.is_empty() {
        writeln!(out, "Incomplete fixtures:")?;
        for location in &response.incomplete_slots {
            writeln!(out, "  {location}")?;
        }
    }

    if !response.conflicts.is_empty() {
        writeln!(out, "Conflicts:")?;
        for conflict in &response.conflicts {
            writeln!(
                out,
                "  reset {} (repeats {})",
                conflict.slot_to_reset, conflict.conflicting_slot
            )?;
        }
    }

    let status = if response.is_final {
        "Schedule is final."
    } else {
        "Schedule is not final."
    };
    writeln!(out, "{status}")?;
    Ok(out)
}

/// Renders the suggestions for a fixture, using display names from the
/// schedule.
///
/// # Errors
///
/// Returns an error if writing to the output buffer fails.
pub fn render_suggestions(
    response: &SuggestionResponse,
    schedule: &Schedule,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Suggestions for {}:", response.location)?;

    if response.pairings.is_empty() {
        writeln!(out, "  none")?;
    }
    for pairing in &response.pairings {
        writeln!(
            out,
            "  {} vs {}",
            schedule.display_name(&pairing.first),
            schedule.display_name(&pairing.second)
        )?;
    }

    if !response.infeasible.is_empty() {
        writeln!(out, "Blocked pairings:")?;
        for blocked in &response.infeasible {
            write!(
                out,
                "  {} vs {}: {}",
                schedule.display_name(&blocked.first),
                schedule.display_name(&blocked.second),
                blocked.reason
            )?;
            match blocked.played_at {
                Some(location) => writeln!(out, " (reset {location} to free it)")?,
                None => writeln!(out)?,
            }
        }
    }
    Ok(out)
}

/// The number of rules an evaluation fails.
#[must_use]
pub fn failed_rule_count(response: &EvaluationResponse) -> usize {
    response.results.map_or(0, |results| {
        ConstraintRule::ALL
            .iter()
            .filter(|rule| !results.passed(**rule))
            .count()
    })
}
