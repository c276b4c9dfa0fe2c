// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Upgrade orchestration workflow
//!
//! The staged rollout pipeline: resolve names to portal identifiers,
//! split the edges into risk tiers, gate each tier behind operator
//! confirmation, submit sequentially, and report per-edge outcomes.

pub mod driver;
pub mod executor;
pub mod gate;
pub mod resolver;
pub mod tiers;

pub use driver::{RunReport, UpgradeWorkflow};
pub use executor::{EdgeOutcome, RolloutIds, UpgradeExecutor, UpgradeOutcome};
pub use gate::{ConfirmationGate, ScriptedGate, TerminalGate};
pub use resolver::{EntityResolver, ResolvedTargets};
pub use tiers::{partition, Tier, TierSet};
