// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Profiles command
//!
//! Lists the operator profiles visible to this login, the same listing
//! the upgrade workflow resolves a profile name against.

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::Result;
use crate::portal::PortalApi;

use super::connect;

/// Execute the profiles command
pub async fn execute(cli: &Cli, settings: &Settings) -> Result<()> {
    let portal = connect(cli, settings).await?;
    let profiles = portal.get_operator_profiles().await?;

    if profiles.is_empty() {
        println!("No operator profiles visible to this login.");
        return Ok(());
    }

    println!("{:>8}  {:<32}  TYPE", "ID", "NAME");
    for profile in &profiles {
        println!(
            "{:>8}  {:<32}  {}",
            profile.id, profile.name, profile.configuration_type
        );
    }

    Ok(())
}
