// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Edges command
//!
//! Lists an enterprise's edges with their risk tiers, for operators
//! assembling an upgrade list.

use crate::cli::{Cli, EdgesArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::portal::PortalApi;
use crate::workflow::Tier;

use super::{connect, resolve_enterprise};

/// Execute the edges command
pub async fn execute(args: &EdgesArgs, cli: &Cli, settings: &Settings) -> Result<()> {
    let enterprise_id = resolve_enterprise(args.enterprise, settings)?;

    let portal = connect(cli, settings).await?;
    let edges = portal.get_enterprise_edges(enterprise_id).await?;

    if edges.is_empty() {
        println!("Enterprise {} has no edges.", enterprise_id);
        return Ok(());
    }

    println!("{:>8}  {:<32}  TIER", "ID", "NAME");
    for edge in &edges {
        let tier = if edge.is_hub { Tier::Hub } else { Tier::Spoke };
        println!("{:>8}  {:<32}  {}", edge.id, edge.name, tier);
    }

    Ok(())
}
