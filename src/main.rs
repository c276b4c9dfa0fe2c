// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! edgeup - staged, risk-ordered SD-WAN edge upgrades
//!
//! Entry point for the edgeup CLI application.

use clap::Parser;

use edgeup::cli::{Cli, Commands};
use edgeup::commands;
use edgeup::config::Settings;
use edgeup::error::Result;
use edgeup::utils;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // Practical debug toggle: `-v` enables workflow diagnostics without
    // requiring users to know target names up front. `RUST_LOG` still
    // takes precedence.
    if cli.verbose > 0 {
        let directive = if cli.verbose > 1 {
            "edgeup=trace"
        } else {
            "edgeup=debug"
        };
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Err(e) = run(cli).await {
        eprintln!("{}", utils::format_error(&e));
        std::process::exit(1);
    }
}

/// Dispatch to the selected subcommand.
async fn run(cli: Cli) -> Result<()> {
    // Load settings; flags override them per field
    let settings = Settings::load()?;

    match &cli.command {
        Commands::Upgrade(args) => commands::upgrade::execute(args, &cli, &settings).await,
        Commands::Profiles => commands::profiles::execute(&cli, &settings).await,
        Commands::Edges(args) => commands::edges::execute(args, &cli, &settings).await,
        Commands::Init => commands::init::execute(),
    }
}
