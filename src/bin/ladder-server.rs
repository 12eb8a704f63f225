// ABOUTME: HTTP server binary for the kettlebell ladder tracker
// ABOUTME: Loads configuration from the environment, opens the database, and serves the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

//! # Ladder Server Binary
//!
//! Starts the REST API over the configured `SQLite` database.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use kettlebell_ladder::{config::ServerConfig, logging, resources::ServerResources, server};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "ladder-server")]
#[command(about = "Kettlebell ladder tracker - REST API for practice sessions and progression")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url.as_deref() {
        config.database.url = kettlebell_ladder::config::DatabaseUrl::parse_url(url)?;
    }
    config.validate()?;

    info!("Starting kettlebell ladder server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::new(config).await?);
    info!("Database initialized successfully");

    if let Err(e) = server::run(resources).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
