// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Upgrade command
//!
//! Assembles the immutable run configuration, runs the staged workflow
//! against the portal, and renders the final report.

use std::io::{self, Write};

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use crate::cli::{Cli, UpgradeArgs};
use crate::config::{RunConfig, Settings};
use crate::error::Result;
use crate::portal::PortalClient;
use crate::workflow::{RunReport, TerminalGate, UpgradeWorkflow};

use super::{
    insecure, operator_login, password_from_env, resolve_enterprise, resolve_host,
    resolve_username,
};

/// Execute the upgrade command
pub async fn execute(args: &UpgradeArgs, cli: &Cli, settings: &Settings) -> Result<()> {
    let password = password_from_env()?;
    let config = build_run_config(args, cli, settings, password)?;

    let portal = PortalClient::with_options(&config.host, config.insecure, config.operator_login)?;
    let workflow = UpgradeWorkflow::new(&portal, &config);
    let mut gate = TerminalGate::new();

    let report = workflow.run(&mut gate).await?;
    print_summary(&report)?;
    Ok(())
}

/// Merge flags, environment, and the settings file into one immutable
/// run configuration. Flags win over the file.
fn build_run_config(
    args: &UpgradeArgs,
    cli: &Cli,
    settings: &Settings,
    password: String,
) -> Result<RunConfig> {
    Ok(RunConfig {
        host: resolve_host(cli, settings)?,
        username: resolve_username(cli, settings)?,
        password,
        enterprise_id: resolve_enterprise(args.enterprise, settings)?,
        profile_name: args.profile.clone(),
        edge_names: args.edges.clone(),
        insecure: insecure(cli, settings),
        operator_login: operator_login(cli, settings),
    })
}

/// Render the per-edge outcome summary.
fn print_summary(report: &RunReport) -> Result<()> {
    let mut stdout = io::stdout();

    println!();
    for outcome in &report.outcomes {
        if outcome.outcome.is_success() {
            stdout.execute(SetForegroundColor(Color::Green))?;
            print!("  ✓ ");
        } else {
            stdout.execute(SetForegroundColor(Color::Red))?;
            print!("  ✗ ");
        }
        stdout.execute(ResetColor)?;
        println!("{} ({})", outcome.name, outcome.tier);
    }

    for name in &report.missing {
        stdout.execute(SetForegroundColor(Color::Yellow))?;
        print!("  ? ");
        stdout.execute(ResetColor)?;
        println!("{} (not found in enterprise)", name);
    }

    if report.spokes_cancelled {
        println!("\nSpoke tier was cancelled at the gate.");
    }

    let failed = report.failures().count();
    if failed == 0 && report.missing.is_empty() {
        println!("\nAll {} upgrade requests accepted.", report.outcomes.len());
    } else {
        println!(
            "\n{} of {} upgrade requests accepted, {} failed.",
            report.outcomes.len() - failed,
            report.outcomes.len(),
            failed
        );
    }
    stdout.flush()?;

    Ok(())
}
