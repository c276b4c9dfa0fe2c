// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Risk-tier classification
//!
//! Splits a resolved edge set into hubs and spokes. Hubs are aggregation
//! points and are always offered for upgrade before any spoke.

use crate::portal::types::Edge;

/// Risk tier of an edge within a rollout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Hub,
    Spoke,
}

impl Tier {
    /// Lowercase label used in prompts and progress lines.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Hub => "hub",
            Tier::Spoke => "spoke",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved edge set split by risk tier.
///
/// Order within each tier preserves the portal's listing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierSet {
    pub hubs: Vec<Edge>,
    pub spokes: Vec<Edge>,
}

impl TierSet {
    /// Edges of one tier.
    pub fn tier(&self, tier: Tier) -> &[Edge] {
        match tier {
            Tier::Hub => &self.hubs,
            Tier::Spoke => &self.spokes,
        }
    }

    /// Total edge count across both tiers.
    pub fn len(&self) -> usize {
        self.hubs.len() + self.spokes.len()
    }

    /// True when neither tier has any edge.
    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty() && self.spokes.is_empty()
    }
}

/// Partition edges by their hub flag, preserving input order.
pub fn partition(edges: Vec<Edge>) -> TierSet {
    let mut tiers = TierSet::default();
    for edge in edges {
        if edge.is_hub {
            tiers.hubs.push(edge);
        } else {
            tiers.spokes.push(edge);
        }
    }
    tiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn edge(id: i64, name: &str, is_hub: bool) -> Edge {
        Edge {
            id,
            name: name.to_string(),
            is_hub,
        }
    }

    #[test]
    fn test_partition_splits_by_hub_flag() {
        let tiers = partition(vec![
            edge(1, "HQ", true),
            edge(2, "Branch1", false),
            edge(3, "DC2", true),
        ]);

        assert_eq!(tiers.hubs.len(), 2);
        assert_eq!(tiers.spokes.len(), 1);
        assert!(tiers.hubs.iter().all(|e| e.is_hub));
        assert!(tiers.spokes.iter().all(|e| !e.is_hub));
    }

    #[test]
    fn test_partition_preserves_listing_order() {
        let tiers = partition(vec![
            edge(3, "DC2", true),
            edge(2, "Branch1", false),
            edge(1, "HQ", true),
            edge(4, "Branch2", false),
        ]);

        let hub_ids: Vec<i64> = tiers.hubs.iter().map(|e| e.id).collect();
        let spoke_ids: Vec<i64> = tiers.spokes.iter().map(|e| e.id).collect();
        assert_eq!(hub_ids, vec![3, 1]);
        assert_eq!(spoke_ids, vec![2, 4]);
    }

    #[test]
    fn test_partition_empty() {
        let tiers = partition(vec![]);
        assert!(tiers.is_empty());
        assert_eq!(tiers.len(), 0);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(Tier::Hub.label(), "hub");
        assert_eq!(Tier::Spoke.to_string(), "spoke");
    }

    #[test]
    fn test_tier_accessor() {
        let tiers = partition(vec![edge(1, "HQ", true), edge(2, "Branch1", false)]);
        assert_eq!(tiers.tier(Tier::Hub).len(), 1);
        assert_eq!(tiers.tier(Tier::Spoke)[0].name, "Branch1");
    }

    proptest! {
        // Tiers partition the input completely and disjointly, keyed only
        // by the hub flag.
        #[test]
        fn prop_partition_is_complete_and_disjoint(flags in prop::collection::vec(any::<bool>(), 0..32)) {
            let edges: Vec<Edge> = flags
                .iter()
                .enumerate()
                .map(|(i, &is_hub)| edge(i as i64, &format!("edge-{}", i), is_hub))
                .collect();

            let tiers = partition(edges.clone());

            prop_assert_eq!(tiers.len(), edges.len());
            for e in &edges {
                let in_hubs = tiers.hubs.contains(e);
                let in_spokes = tiers.spokes.contains(e);
                prop_assert!(in_hubs != in_spokes);
                prop_assert_eq!(in_hubs, e.is_hub);
            }
        }
    }
}
