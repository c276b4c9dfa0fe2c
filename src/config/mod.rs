// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module for edgeup
//!
//! Handles the settings file and the immutable per-run configuration
//! value handed to the workflow.

pub mod settings;

pub use settings::Settings;

/// Immutable, validated inputs for one upgrade run.
///
/// Assembled once at the CLI boundary from flags, environment variables,
/// and the settings file; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Portal hostname or base URL
    pub host: String,
    /// Login username
    pub username: String,
    /// Login password, sourced from the environment only
    pub password: String,
    /// Enterprise (tenant) id owning the edges
    pub enterprise_id: i64,
    /// Operator profile name to roll out
    pub profile_name: String,
    /// Edge names requested by the operator; nothing else is touched
    pub edge_names: Vec<String>,
    /// Accept self-signed portal certificates
    pub insecure: bool,
    /// Authenticate against the operator login endpoint
    pub operator_login: bool,
}
