// ABOUTME: Tracing subscriber setup for the server and CLI plus structured practice events
// ABOUTME: Level and format come from the environment; dependency noise is filtered out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

//! Structured logging configuration
//!
//! The server logs pretty output in development and JSON in production; the CLI logs
//! compactly to stderr so command output on stdout stays clean.

use std::env;
use std::io;

use anyhow::Result;
use ladder_core::models::{Intensity, LadderSets};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};
use uuid::Uuid;

use crate::config::Environment;
use crate::constants::service_names;

/// Dependency targets that are only interesting when something goes wrong
const QUIET_TARGETS: [(&str, Level); 5] = [
    ("hyper", Level::WARN),
    ("hyper::proto", Level::WARN),
    ("sqlx", Level::WARN),
    ("sqlx::query", Level::WARN),
    ("tower_http", Level::INFO),
];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-line human-readable output
    Pretty,
    /// Single-line output for terminals
    Compact,
}

impl LogFormat {
    /// Parse `LOG_FORMAT`, falling back to `default` for anything unrecognised
    #[must_use]
    pub fn parse_or(value: Option<&str>, default: Self) -> Self {
        match value.map(str::to_lowercase).as_deref() {
            Some("json") => Self::Json,
            Some("pretty") => Self::Pretty,
            Some("compact") => Self::Compact,
            _ => default,
        }
    }
}

/// Subscriber settings
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string, e.g. `info` or `kettlebell_ladder=debug`
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include file and line of each event
    pub include_location: bool,
    /// Include thread ids and names
    pub include_thread: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Write to stderr instead of stdout
    pub use_stderr: bool,
    /// Service name attached to the startup event
    pub service_name: String,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            use_stderr: false,
            service_name: service_names::LADDER_SERVER.into(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `ENVIRONMENT`, `LOG_FORMAT`, `LOG_INCLUDE_*` and `SERVICE_NAME`
    #[must_use]
    pub fn from_env() -> Self {
        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_default(),
        );
        let production = environment.is_production();
        let default_format = if production {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        };

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: LogFormat::parse_or(env::var("LOG_FORMAT").ok().as_deref(), default_format),
            include_location: production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            use_stderr: false,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::LADDER_SERVER.into()),
            environment,
        }
    }

    /// Compact stderr logging for the command-line tool
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        let fallback = if verbose { "debug" } else { "warn" };
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| fallback.into()),
            format: LogFormat::Compact,
            use_stderr: true,
            service_name: service_names::LADDER_CLI.into(),
            ..Self::default()
        }
    }

    /// Configured level plus the fixed dependency directives
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        QUIET_TARGETS
            .iter()
            .fold(EnvFilter::new(&self.level), |filter, &(target, level)| {
                let directive = format!("{target}={level}")
                    .parse::<Directive>()
                    .unwrap_or_else(|_| level.into());
                filter.add_directive(directive)
            })
    }

    fn writer(&self) -> BoxMakeWriter {
        if self.use_stderr {
            BoxMakeWriter::new(io::stderr)
        } else {
            BoxMakeWriter::new(io::stdout)
        }
    }

    fn format_layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let layer = fmt::layer()
            .with_writer(self.writer())
            .with_span_events(span_events)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread);

        match self.format {
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Pretty => layer.boxed(),
            LogFormat::Compact => layer.compact().with_target(false).boxed(),
        }
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.format_layer().with_filter(self.env_filter()))
            .try_init()?;

        debug!(
            service.name = %self.service_name,
            service.version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Install the subscriber described by the environment
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Structured events for the practice workflow
pub struct AppLogger;

impl AppLogger {
    /// A session passed validation and was stored
    pub fn log_session_recorded(
        user_id: Uuid,
        date: &str,
        intensity: Intensity,
        ladder_sets: &LadderSets,
        success: bool,
    ) {
        info!(
            user.id = %user_id,
            session.date = %date,
            session.intensity = %intensity,
            session.ladder_sets = %ladder_sets,
            session.success = success,
            "Practice session recorded"
        );
    }

    /// A session payload failed validation
    pub fn log_session_rejected(user_id: Uuid, date: &str, reason: &str) {
        warn!(
            user.id = %user_id,
            session.date = %date,
            session.reason = %reason,
            "Practice session rejected"
        );
    }

    /// A next-session suggestion was computed
    pub fn log_suggestion(user_id: Uuid, intensity: Intensity, ladder_sets: &LadderSets) {
        debug!(
            user.id = %user_id,
            suggestion.intensity = %intensity,
            suggestion.ladder_sets = %ladder_sets,
            "Next session suggested"
        );
    }
}
