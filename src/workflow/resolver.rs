// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Entity resolution
//!
//! Turns the human-meaningful names an operator supplies into the
//! identifiers the portal requires: network id, operator profile id, and
//! per-edge ids. Resolution is single-pass and matches names exactly and
//! case-sensitively; operators are expected to supply canonical names.

use crate::error::{ApiError, EdgeupError, Result};
use crate::portal::types::OperatorProfile;
use crate::portal::{ConfigurationType, PortalApi};
use crate::workflow::tiers::{partition, TierSet};

/// The requested edges, resolved and split by risk tier.
#[derive(Debug, Clone, Default)]
pub struct ResolvedTargets {
    /// Resolved edges by tier, portal listing order preserved
    pub tiers: TierSet,
    /// Requested names with no matching edge in the enterprise
    pub missing: Vec<String>,
}

/// Resolves names against the portal for one run.
pub struct EntityResolver<'a> {
    portal: &'a dyn PortalApi,
}

impl<'a> EntityResolver<'a> {
    pub fn new(portal: &'a dyn PortalApi) -> Self {
        Self { portal }
    }

    /// Resolve the enterprise's network id.
    pub async fn resolve_network(&self, enterprise_id: i64) -> Result<i64> {
        // The portal reports unknown ids through the RPC error envelope.
        match self.portal.get_enterprise(enterprise_id).await {
            Ok(enterprise) => Ok(enterprise.network_id),
            Err(EdgeupError::Api(ApiError::Rpc { .. })) => {
                Err(EdgeupError::EnterpriseNotFound(enterprise_id))
            }
            Err(err) => Err(err),
        }
    }

    /// Resolve an operator profile by exact name.
    ///
    /// Network-based profiles are rejected here, before any edge list is
    /// fetched; they cannot be pushed per device.
    pub async fn resolve_profile(&self, name: &str) -> Result<OperatorProfile> {
        let profiles = self.portal.get_operator_profiles().await?;

        let profile = profiles
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| EdgeupError::ProfileNotFound(name.to_string()))?;

        if profile.configuration_type == ConfigurationType::NetworkBased {
            return Err(EdgeupError::UnsupportedProfile {
                name: profile.name,
                kind: profile.configuration_type.to_string(),
            });
        }

        Ok(profile)
    }

    /// Resolve the requested edge names against the enterprise's edge list.
    ///
    /// Only requested edges are kept; names that resolve to nothing are
    /// reported in `missing` rather than silently dropped.
    pub async fn resolve_edges(
        &self,
        enterprise_id: i64,
        requested: &[String],
    ) -> Result<ResolvedTargets> {
        let edges = self.portal.get_enterprise_edges(enterprise_id).await?;

        let selected: Vec<_> = edges
            .into_iter()
            .filter(|edge| requested.iter().any(|name| *name == edge.name))
            .collect();

        let missing = requested
            .iter()
            .filter(|name| !selected.iter().any(|edge| edge.name == **name))
            .cloned()
            .collect();

        Ok(ResolvedTargets {
            tiers: partition(selected),
            missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::types::Edge;
    use crate::portal::MockPortal;

    fn profile(id: i64, name: &str, kind: ConfigurationType) -> OperatorProfile {
        OperatorProfile {
            id,
            name: name.to_string(),
            configuration_type: kind,
        }
    }

    fn edge(id: i64, name: &str, is_hub: bool) -> Edge {
        Edge {
            id,
            name: name.to_string(),
            is_hub,
        }
    }

    #[tokio::test]
    async fn test_resolve_network() {
        let portal = MockPortal::new().with_enterprise(10, 3);
        let resolver = EntityResolver::new(&portal);

        assert_eq!(resolver.resolve_network(10).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_resolve_network_unknown_enterprise() {
        let portal = MockPortal::new();
        let resolver = EntityResolver::new(&portal);

        let err = resolver.resolve_network(99).await.unwrap_err();
        assert!(matches!(err, EdgeupError::EnterpriseNotFound(99)));
    }

    #[tokio::test]
    async fn test_resolve_profile_first_exact_match() {
        let portal = MockPortal::new().with_profiles(vec![
            profile(54, "R331", ConfigurationType::DeviceBased),
            profile(55, "R332P1", ConfigurationType::DeviceBased),
            profile(56, "R332P1", ConfigurationType::DeviceBased),
        ]);
        let resolver = EntityResolver::new(&portal);

        let resolved = resolver.resolve_profile("R332P1").await.unwrap();
        assert_eq!(resolved.id, 55);
    }

    #[tokio::test]
    async fn test_resolve_profile_is_case_sensitive() {
        let portal = MockPortal::new().with_profiles(vec![profile(
            55,
            "R332P1",
            ConfigurationType::DeviceBased,
        )]);
        let resolver = EntityResolver::new(&portal);

        let err = resolver.resolve_profile("r332p1").await.unwrap_err();
        assert!(matches!(err, EdgeupError::ProfileNotFound(_)));
    }

    #[tokio::test]
    async fn test_resolve_profile_rejects_network_based() {
        let portal = MockPortal::new().with_profiles(vec![profile(
            60,
            "Net332",
            ConfigurationType::NetworkBased,
        )]);
        let resolver = EntityResolver::new(&portal);

        let err = resolver.resolve_profile("Net332").await.unwrap_err();
        match err {
            EdgeupError::UnsupportedProfile { name, kind } => {
                assert_eq!(name, "Net332");
                assert_eq!(kind, "NETWORK_BASED");
            }
            other => panic!("expected UnsupportedProfile, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_edges_filters_to_requested_only() {
        let portal = MockPortal::new().with_edges(vec![
            edge(1, "HQ", true),
            edge(2, "Branch1", false),
            edge(3, "Branch2", false),
        ]);
        let resolver = EntityResolver::new(&portal);

        let requested = vec!["HQ".to_string(), "Branch2".to_string()];
        let targets = resolver.resolve_edges(10, &requested).await.unwrap();

        assert_eq!(targets.tiers.hubs.len(), 1);
        assert_eq!(targets.tiers.spokes.len(), 1);
        assert_eq!(targets.tiers.spokes[0].name, "Branch2");
        assert!(targets.missing.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_edges_reports_missing_names() {
        let portal = MockPortal::new().with_edges(vec![edge(2, "Branch1", false)]);
        let resolver = EntityResolver::new(&portal);

        let requested = vec!["Branch1".to_string(), "Ghost".to_string()];
        let targets = resolver.resolve_edges(10, &requested).await.unwrap();

        assert_eq!(targets.tiers.len(), 1);
        assert_eq!(targets.missing, vec!["Ghost".to_string()]);
    }
}
