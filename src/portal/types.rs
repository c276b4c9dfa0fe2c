// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Wire types for the orchestrator portal
//!
//! Only the shape-significant fields of each portal object are modeled;
//! everything else the portal sends is ignored on deserialization.

use serde::{Deserialize, Serialize};

/// An enterprise (tenant) record, scoped to the fields the workflow needs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enterprise {
    /// Opaque enterprise id
    pub id: i64,
    /// Network id used to scope subsequent calls
    pub network_id: i64,
    /// Display name, when the portal includes one
    #[serde(default)]
    pub name: Option<String>,
}

/// How an operator profile is applied by the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigurationType {
    /// Applied per device; the only type this tool can roll out
    DeviceBased,
    /// Applied network-wide; rejected as a hard precondition failure
    NetworkBased,
}

impl ConfigurationType {
    /// The portal's wire name for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigurationType::DeviceBased => "DEVICE_BASED",
            ConfigurationType::NetworkBased => "NETWORK_BASED",
        }
    }
}

impl std::fmt::Display for ConfigurationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named policy bundle offered by the portal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorProfile {
    /// Opaque profile id
    pub id: i64,
    /// Human key, matched exactly and case-sensitively
    pub name: String,
    /// Whether the profile is device- or network-based
    pub configuration_type: ConfigurationType,
}

/// An edge device as listed by the portal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Opaque edge id
    pub id: i64,
    /// Human key, unique within the enterprise
    pub name: String,
    /// Risk-tier flag: hubs are aggregation points, upgraded first
    #[serde(default)]
    pub is_hub: bool,
}

/// One upgrade submission, serialized verbatim as the portal call params.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeRequest {
    pub edge_id: i64,
    pub enterprise_id: i64,
    pub configuration_id: i64,
    pub network_id: i64,
}

/// The single-field body the portal returns when a submission landed.
///
/// `deny_unknown_fields` makes the success check structural: a body with
/// any extra key is not the success shape, whatever its `rows` value.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RowsAffected {
    pub rows: u64,
}
