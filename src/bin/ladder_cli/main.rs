// ABOUTME: Ladder CLI - command-line front end for logging sessions and reading suggestions
// ABOUTME: Works directly against the configured SQLite database, no server required
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors
//!
//! Usage:
//! ```bash
//! # What should I do today?
//! ladder-cli --user 6f1c... suggest
//!
//! # Force a heavy day suggestion
//! ladder-cli --user 6f1c... suggest --intensity heavy
//!
//! # Log today's session, rolling the dice for the duration
//! ladder-cli --user 6f1c... log --intensity heavy --ladder 3,3,3,3,0 --pulls 60 --roll
//!
//! # Show history and statistics
//! ladder-cli --user 6f1c... list --from 2025-03-01
//! ladder-cli --user 6f1c... stats
//!
//! # Roll two dice
//! ladder-cli roll
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use kettlebell_ladder::{
    config::{DatabaseUrl, ServerConfig},
    errors::{AppError, AppResult},
    logging::LoggingConfig,
    models::{Intensity, LadderSets},
    resources::ServerResources,
};
use tracing::debug;
use uuid::Uuid;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "ladder-cli",
    about = "Kettlebell ladder tracker CLI",
    long_about = "Log kettlebell ladder sessions, get the next session's suggestion, and review streaks."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// User the command acts on
    #[arg(long, short = 'u', global = true)]
    user: Option<Uuid>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Suggest the next session's intensity and ladder configuration
    Suggest {
        /// Intensity to plan for (defaults to the cycle's suggestion)
        #[arg(long, short = 'i')]
        intensity: Option<Intensity>,
    },

    /// Log a practice session
    Log {
        /// Session date (defaults to today, UTC)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Session intensity
        #[arg(long, short = 'i')]
        intensity: Intensity,

        /// Ladder heights, e.g. "3,3,3,0,0"
        #[arg(long, short = 'l', alias = "ladders")]
        ladder: LadderSets,

        /// Minutes spent (2-12)
        #[arg(long, conflicts_with = "roll")]
        dice: Option<u8>,

        /// Roll two dice for the duration
        #[arg(long)]
        roll: bool,

        /// Repetitions performed
        #[arg(long, short = 'p', default_value = "0")]
        pulls: u32,

        /// Kettlebell weight in kilograms
        #[arg(long, short = 'w')]
        weight: Option<f64>,

        /// Mark the session as not achieved
        #[arg(long)]
        failed: bool,
    },

    /// List logged sessions
    List {
        /// First day to include
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day to include
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Delete the session logged on a day
    Delete {
        /// Session date
        date: NaiveDate,
    },

    /// Show streak and volume statistics
    Stats {
        /// Reference day for the current streak (defaults to today, UTC)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Roll two six-sided dice for a session duration
    Roll,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose)
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    if matches!(cli.command, Command::Roll) {
        commands::roll::roll();
        return Ok(());
    }

    let user_id = cli
        .user
        .ok_or_else(|| AppError::invalid_input("--user <UUID> is required for this command"))?;

    let mut config = ServerConfig::from_env()?;
    if let Some(url) = cli.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(url)?;
    }
    debug!("Connecting to database: {}", config.database.url);
    let resources = ServerResources::new(config).await?;
    let service = &resources.practice;

    match cli.command {
        Command::Suggest { intensity } => {
            commands::session::suggest(service, user_id, intensity).await?;
        }
        Command::Log {
            date,
            intensity,
            ladder,
            dice,
            roll,
            pulls,
            weight,
            failed,
        } => {
            let entry = commands::session::LogEntry {
                date,
                intensity,
                ladder,
                dice,
                roll,
                pulls,
                weight,
                success: !failed,
            };
            commands::session::log(service, user_id, entry).await?;
        }
        Command::List { from, to } => {
            commands::session::list(service, user_id, from, to).await?;
        }
        Command::Delete { date } => {
            commands::session::delete(service, user_id, date).await?;
        }
        Command::Stats { today } => {
            commands::stats::show(service, user_id, today).await?;
        }
        Command::Roll => {}
    }

    Ok(())
}
