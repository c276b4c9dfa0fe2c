// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Upgrade executor
//!
//! Submits one upgrade request per edge of a tier, strictly sequentially,
//! and classifies each response. One failed edge never stops its
//! siblings, and no edge is ever attempted twice in a run.

use serde::Deserialize;
use serde_json::Value;

use crate::portal::types::{Edge, RowsAffected, UpgradeRequest};
use crate::portal::PortalApi;
use crate::workflow::tiers::Tier;

/// Identifiers shared by every request in a run.
#[derive(Debug, Clone, Copy)]
pub struct RolloutIds {
    pub enterprise_id: i64,
    pub configuration_id: i64,
    pub network_id: i64,
}

/// Per-edge result of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum UpgradeOutcome {
    /// The portal accepted the request
    Requested,
    /// The submission failed; the reason is operator-facing text
    Failed(String),
}

impl UpgradeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UpgradeOutcome::Requested)
    }
}

/// One edge's outcome report.
#[derive(Debug, Clone)]
pub struct EdgeOutcome {
    pub name: String,
    pub id: i64,
    pub tier: Tier,
    pub outcome: UpgradeOutcome,
}

/// True iff the body is structurally the single-field `{"rows": 1}` shape.
///
/// The check is structural, not textual: key order and whitespace cannot
/// produce false negatives, and any extra key disqualifies the body.
pub(crate) fn is_success_shape(body: &Value) -> bool {
    matches!(RowsAffected::deserialize(body), Ok(RowsAffected { rows: 1 }))
}

/// Submits a tier's upgrade requests.
pub struct UpgradeExecutor<'a> {
    portal: &'a dyn PortalApi,
}

impl<'a> UpgradeExecutor<'a> {
    pub fn new(portal: &'a dyn PortalApi) -> Self {
        Self { portal }
    }

    /// Attempt every edge of the tier once, in listed order.
    ///
    /// Never fails as a whole: submission and transport errors become
    /// that edge's failure outcome and the next edge is still attempted.
    pub async fn run_tier(&self, tier: Tier, edges: &[Edge], ids: RolloutIds) -> Vec<EdgeOutcome> {
        let mut outcomes = Vec::with_capacity(edges.len());

        for edge in edges {
            let request = UpgradeRequest {
                edge_id: edge.id,
                enterprise_id: ids.enterprise_id,
                configuration_id: ids.configuration_id,
                network_id: ids.network_id,
            };

            let outcome = match self.portal.set_edge_operator_configuration(&request).await {
                Ok(body) if is_success_shape(&body) => UpgradeOutcome::Requested,
                Ok(body) => UpgradeOutcome::Failed(format!("unexpected response: {}", body)),
                Err(err) => UpgradeOutcome::Failed(err.to_string()),
            };

            match &outcome {
                UpgradeOutcome::Requested => {
                    println!("Upgrade requested for {}", edge.name);
                }
                UpgradeOutcome::Failed(reason) => {
                    tracing::warn!(edge = %edge.name, %reason, "upgrade request failed");
                    println!(
                        "Upgrade request failed for {}: {}. Check the portal logs.",
                        edge.name, reason
                    );
                }
            }

            outcomes.push(EdgeOutcome {
                name: edge.name.clone(),
                id: edge.id,
                tier,
                outcome,
            });
        }

        outcomes
    }
}
