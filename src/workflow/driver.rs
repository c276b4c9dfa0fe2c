// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Workflow driver
//!
//! Composes authentication, resolution, tier classification, the
//! confirmation gates, and the executor into the end-to-end rollout:
//!
//! ```text
//! Unauthenticated → Resolving → Resolved → HubGate → HubExecuting
//!                                        → SpokeGate → SpokeExecuting → Done
//! ```
//!
//! A hub-gate denial aborts the whole run; spokes must never be upgraded
//! ahead of their hubs. A spoke-gate denial only ends that tier.

use crate::config::RunConfig;
use crate::error::{EdgeupError, Result};
use crate::portal::types::OperatorProfile;
use crate::portal::PortalApi;
use crate::workflow::executor::{EdgeOutcome, RolloutIds, UpgradeExecutor};
use crate::workflow::gate::ConfirmationGate;
use crate::workflow::resolver::EntityResolver;
use crate::workflow::tiers::Tier;

/// Workflow phase, logged at each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Unauthenticated,
    Resolving,
    Resolved,
    HubGate,
    HubExecuting,
    SpokeGate,
    SpokeExecuting,
    Done,
}

fn advance(phase: &mut Phase, next: Phase) {
    tracing::debug!(from = ?phase, to = ?next, "workflow phase");
    *phase = next;
}

/// What one run did, for the CLI layer to render.
#[derive(Debug)]
pub struct RunReport {
    /// The resolved operator profile
    pub profile: OperatorProfile,
    /// The enterprise's network id
    pub network_id: i64,
    /// Requested names with no matching edge
    pub missing: Vec<String>,
    /// Per-edge outcomes, in submission order
    pub outcomes: Vec<EdgeOutcome>,
    /// The operator declined the spoke tier
    pub spokes_cancelled: bool,
}

impl RunReport {
    /// Outcomes that did not land.
    pub fn failures(&self) -> impl Iterator<Item = &EdgeOutcome> {
        self.outcomes.iter().filter(|o| !o.outcome.is_success())
    }

    /// True when every attempted edge succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// The end-to-end upgrade workflow for one run.
pub struct UpgradeWorkflow<'a> {
    portal: &'a dyn PortalApi,
    config: &'a RunConfig,
}

impl<'a> UpgradeWorkflow<'a> {
    pub fn new(portal: &'a dyn PortalApi, config: &'a RunConfig) -> Self {
        Self { portal, config }
    }

    /// Run the workflow to completion.
    ///
    /// Fatal conditions (bad input, auth failure, resolution failure,
    /// hub-gate denial) surface as errors; per-edge submission failures
    /// live in the report instead.
    pub async fn run(&self, gate: &mut dyn ConfirmationGate) -> Result<RunReport> {
        if self.config.edge_names.is_empty() {
            return Err(EdgeupError::Config(
                "no edge names requested; list at least one edge to upgrade".to_string(),
            ));
        }

        let mut phase = Phase::Unauthenticated;
        self.portal
            .authenticate(&self.config.username, &self.config.password)
            .await?;
        advance(&mut phase, Phase::Resolving);

        let resolver = EntityResolver::new(self.portal);

        let network_id = resolver.resolve_network(self.config.enterprise_id).await?;
        let profile = resolver.resolve_profile(&self.config.profile_name).await?;
        println!(
            "Found operator profile \"{}\" with id {}",
            profile.name, profile.id
        );

        let targets = resolver
            .resolve_edges(self.config.enterprise_id, &self.config.edge_names)
            .await?;
        for name in &targets.missing {
            tracing::warn!(edge = %name, "requested edge not found in enterprise");
            println!(
                "Warning: edge \"{}\" not found in enterprise {}, skipping",
                name, self.config.enterprise_id
            );
        }
        advance(&mut phase, Phase::Resolved);

        let ids = RolloutIds {
            enterprise_id: self.config.enterprise_id,
            configuration_id: profile.id,
            network_id,
        };
        let executor = UpgradeExecutor::new(self.portal);
        let mut outcomes = Vec::new();
        let mut spokes_cancelled = false;

        // Empty tiers skip their gate and executor trivially.
        advance(&mut phase, Phase::HubGate);
        if !targets.tiers.hubs.is_empty() {
            if !gate.confirm(Tier::Hub, &targets.tiers.hubs)? {
                return Err(EdgeupError::Cancelled(
                    "hub upgrades declined; spokes are skipped so they are never upgraded ahead of their hubs"
                        .to_string(),
                ));
            }
            advance(&mut phase, Phase::HubExecuting);
            outcomes.extend(
                executor
                    .run_tier(Tier::Hub, &targets.tiers.hubs, ids)
                    .await,
            );
        }

        advance(&mut phase, Phase::SpokeGate);
        if !targets.tiers.spokes.is_empty() {
            if gate.confirm(Tier::Spoke, &targets.tiers.spokes)? {
                advance(&mut phase, Phase::SpokeExecuting);
                outcomes.extend(
                    executor
                        .run_tier(Tier::Spoke, &targets.tiers.spokes, ids)
                        .await,
                );
            } else {
                spokes_cancelled = true;
                println!("Spoke upgrades cancelled.");
            }
        }

        advance(&mut phase, Phase::Done);
        Ok(RunReport {
            profile,
            network_id,
            missing: targets.missing,
            outcomes,
            spokes_cancelled,
        })
    }
}
