// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for edgeup. The
//! login password is deliberately not a flag; it is read from
//! `EDGEUP_PASSWORD` only, so it never lands in shell history.

use clap::{Parser, Subcommand};

/// edgeup - staged, risk-ordered SD-WAN edge upgrades
#[derive(Parser, Debug)]
#[command(name = "edgeup")]
#[command(version, about = "Staged, risk-ordered SD-WAN edge upgrades from your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Portal hostname or base URL
    #[arg(long, global = true, env = "EDGEUP_HOST")]
    pub host: Option<String>,

    /// Login username (password comes from EDGEUP_PASSWORD)
    #[arg(short, long, global = true, env = "EDGEUP_USERNAME")]
    pub username: Option<String>,

    /// Accept self-signed portal certificates
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Authenticate against the operator login endpoint
    #[arg(long, global = true)]
    pub operator: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Roll out an operator profile across the listed edges, hubs first
    Upgrade(UpgradeArgs),

    /// List the operator profiles visible to this login
    Profiles,

    /// List an enterprise's edges with their risk tiers
    Edges(EdgesArgs),

    /// Write a settings file skeleton
    Init,
}

/// Arguments for the upgrade subcommand
#[derive(clap::Args, Debug)]
pub struct UpgradeArgs {
    /// Edge names to upgrade; nothing outside this list is touched
    #[arg(required = true)]
    pub edges: Vec<String>,

    /// Enterprise (tenant) id owning the edges
    #[arg(short, long, env = "EDGEUP_ENTERPRISE")]
    pub enterprise: Option<i64>,

    /// Operator profile name to roll out
    #[arg(short, long)]
    pub profile: String,
}

/// Arguments for the edges subcommand
#[derive(clap::Args, Debug)]
pub struct EdgesArgs {
    /// Enterprise (tenant) id to list
    #[arg(short, long, env = "EDGEUP_ENTERPRISE")]
    pub enterprise: Option<i64>,
}
