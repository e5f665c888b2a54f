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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod files;
mod render;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, bail},
};
use matchday_api::{
    AssignTeamRequest, EvaluationResponse, SchedulingSession, SessionConfig, SetDateRequest,
    SlotRequest,
};
use matchday_domain::Schedule;
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::files::{JsonFileStore, JsonRoster, load_config, load_history, read_json, write_json};
use crate::render::{failed_rule_count, render_evaluation, render_suggestions};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| args.fallback_filter());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Matchday - build and validate a round robin fixture schedule
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// The working schedule file
    #[arg(short, long, global = true, default_value = "schedule.json")]
    schedule: PathBuf,

    /// Session config file (JSON); defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Fixture history file (JSON) used to fill in orientation and stadium
    #[arg(long, global = true)]
    history: Option<PathBuf>,

    /// Print responses as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Create an empty schedule from a roster file
    Init {
        /// Roster file: a JSON array of `{ "id", "name" }`
        #[arg(short, long)]
        roster: PathBuf,

        /// Overwrite an existing schedule file
        #[arg(short, long)]
        force: bool,
    },

    /// Assign a team to one side of a fixture
    #[command(visible_alias = "a")]
    Assign {
        /// Round number (1-based)
        round: u8,
        /// Fixture number within the round (1-based)
        fixture: usize,
        /// `home` or `away`
        side: String,
        /// Team identifier
        team: String,
    },

    /// Set the kick-off time of a fixture
    #[command(visible_alias = "d")]
    Date {
        /// Round number (1-based)
        round: u8,
        /// Fixture number within the round (1-based)
        fixture: usize,
        /// Kick-off time (RFC 3339, e.g. 2026-02-07T15:00:00Z)
        date: String,
    },

    /// Clear a fixture
    #[command(visible_alias = "r")]
    Reset {
        /// Round number (1-based)
        round: u8,
        /// Fixture number within the round (1-based)
        fixture: usize,
    },

    /// Check the schedule against every rule
    #[command(visible_alias = "v")]
    Validate,

    /// List the pairings that still fit a fixture
    #[command(visible_alias = "s")]
    Suggest {
        /// Round number (1-based)
        round: u8,
        /// Fixture number within the round (1-based)
        fixture: usize,
    },

    /// Write the final schedule to an output file
    Save {
        /// Destination file
        #[arg(short, long)]
        output: PathBuf,
    },
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    /// The filter used when `RUST_LOG` is unset or unparsable.
    fn fallback_filter(&self) -> EnvFilter {
        EnvFilter::new(self.log_level().to_string())
    }

    fn run(&self) -> Result<()> {
        let config: SessionConfig = load_config(self.config.as_deref())?;

        match &self.command {
            Command::Init { roster, force } => self.init(config, roster, *force),
            Command::Assign {
                round,
                fixture,
                side,
                team,
            } => {
                let mut session: SchedulingSession = self.resume(config)?;
                let response = session.assign_team(&AssignTeamRequest {
                    round: *round,
                    slot_index: slot_index(*fixture)?,
                    side: side.clone(),
                    participant_id: team.clone(),
                })?;
                self.store(&session)?;
                self.print_evaluation(&response)
            }
            Command::Date {
                round,
                fixture,
                date,
            } => {
                let mut session: SchedulingSession = self.resume(config)?;
                let response = session.set_date(&SetDateRequest {
                    round: *round,
                    slot_index: slot_index(*fixture)?,
                    date: date.clone(),
                })?;
                self.store(&session)?;
                self.print_evaluation(&response)
            }
            Command::Reset { round, fixture } => {
                let mut session: SchedulingSession = self.resume(config)?;
                let response = session.reset_slot(&SlotRequest {
                    round: *round,
                    slot_index: slot_index(*fixture)?,
                })?;
                self.store(&session)?;
                self.print_evaluation(&response)
            }
            Command::Validate => {
                let session: SchedulingSession = self.resume(config)?;
                self.print_evaluation(&session.validate())
            }
            Command::Suggest { round, fixture } => {
                let session: SchedulingSession = self.resume(config)?;
                let response = session.suggest(&SlotRequest {
                    round: *round,
                    slot_index: slot_index(*fixture)?,
                })?;
                if self.json {
                    print_json(&response)
                } else {
                    print!("{}", render_suggestions(&response, session.schedule())?);
                    Ok(())
                }
            }
            Command::Save { output } => {
                let session: SchedulingSession = self.resume(config)?;
                let mut store: JsonFileStore = JsonFileStore::new(output);
                let response = session.save(&mut store)?;
                info!(output = %output.display(), "Schedule saved");
                if self.json {
                    print_json(&response)
                } else {
                    println!("{}", response.message);
                    Ok(())
                }
            }
        }
    }

    fn init(&self, config: SessionConfig, roster: &Path, force: bool) -> Result<()> {
        if self.schedule.exists() && !force {
            bail!(
                "{} already exists; pass --force to replace it",
                self.schedule.display()
            );
        }

        let history = load_history(self.history.as_deref())?;
        let session: SchedulingSession =
            SchedulingSession::start(config, &JsonRoster::new(roster), history)
                .wrap_err_with(|| format!("Failed to start a schedule from {}", roster.display()))?;
        self.store(&session)?;

        info!(schedule = %self.schedule.display(), "Created empty schedule");
        self.print_evaluation(&session.validate())
    }

    fn resume(&self, config: SessionConfig) -> Result<SchedulingSession> {
        let schedule: Schedule = read_json(&self.schedule)
            .wrap_err("No working schedule; run `matchday init` first")?;
        let history = load_history(self.history.as_deref())?;
        Ok(SchedulingSession::resume(config, schedule, history)?)
    }

    fn store(&self, session: &SchedulingSession) -> Result<()> {
        write_json(&self.schedule, session.schedule())
            .wrap_err_with(|| format!("Failed to write {}", self.schedule.display()))
    }

    fn print_evaluation(&self, response: &EvaluationResponse) -> Result<()> {
        if self.json {
            return print_json(response);
        }
        print!("{}", render_evaluation(response)?);
        if failed_rule_count(response) > 0 {
            info!(failed = failed_rule_count(response), "Schedule breaks rules");
        }
        Ok(())
    }
}

/// Converts the 1-based fixture number shown to users into a slot index.
fn slot_index(fixture: usize) -> Result<usize> {
    match fixture.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("Fixture numbers start at 1"),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
