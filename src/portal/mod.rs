// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Orchestrator portal client
//!
//! Defines the abstraction layer over the remote orchestration service:
//! the `PortalApi` trait consumed by the upgrade workflow, the reqwest
//! implementation speaking the portal's JSON-RPC dialect, and a mock for
//! tests.

pub mod client;
pub mod mock;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;
use types::{Edge, Enterprise, OperatorProfile, UpgradeRequest};

pub use client::PortalClient;
pub use mock::{MockPortal, MockSubmitResponse};
pub use types::{ConfigurationType, RowsAffected};

/// Remote orchestrator capability consumed by the upgrade workflow.
///
/// Every method is a blocking request/response call; the workflow never
/// runs two of them concurrently.
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Establish an authenticated session.
    ///
    /// Must succeed before any other method is invoked; there are no
    /// retries, a failure is fatal to the run.
    async fn authenticate(&self, username: &str, password: &str) -> Result<()>;

    /// Fetch an enterprise record by id.
    async fn get_enterprise(&self, enterprise_id: i64) -> Result<Enterprise>;

    /// List the operator profiles visible to the caller.
    async fn get_operator_profiles(&self) -> Result<Vec<OperatorProfile>>;

    /// List the enterprise's edges, in the portal's listing order.
    async fn get_enterprise_edges(&self, enterprise_id: i64) -> Result<Vec<Edge>>;

    /// Submit one upgrade request.
    ///
    /// Returns the raw response body; the executor owns success
    /// classification, so no shape checking happens here.
    async fn set_edge_operator_configuration(
        &self,
        request: &UpgradeRequest,
    ) -> Result<serde_json::Value>;
}
