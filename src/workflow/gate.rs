// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Confirmation gate
//!
//! A blocking yes/no checkpoint in front of each tier's execution. The
//! terminal implementation re-prompts on invalid input, but bounds the
//! loop: once the attempts run out the answer resolves to a denial, the
//! safe direction for a change-management tool.

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::error::Result;
use crate::portal::types::Edge;
use crate::workflow::tiers::Tier;

/// Invalid answers tolerated before the gate resolves to a denial.
const MAX_PROMPT_ATTEMPTS: usize = 5;

/// Blocking operator checkpoint gating one tier's execution.
pub trait ConfirmationGate {
    /// Present the tier's members and block until the operator answers.
    fn confirm(&mut self, tier: Tier, edges: &[Edge]) -> Result<bool>;
}

/// Interpret one line of operator input as an answer.
///
/// Accepts `y`/`yes` and `n`/`no` in any case; anything else is invalid.
pub(crate) fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Gate reading the answer from the terminal.
#[derive(Debug, Default)]
pub struct TerminalGate;

impl TerminalGate {
    pub fn new() -> Self {
        Self
    }

    fn headline(tier: Tier) -> &'static str {
        match tier {
            Tier::Hub => "Hubs to upgrade (hubs are rolled out before any spoke):",
            Tier::Spoke => "Spokes to upgrade:",
        }
    }
}

impl ConfirmationGate for TerminalGate {
    fn confirm(&mut self, tier: Tier, edges: &[Edge]) -> Result<bool> {
        println!("{}", Self::headline(tier));
        for edge in edges {
            println!("\t- {}", edge.name);
        }

        let stdin = io::stdin();
        for _ in 0..MAX_PROMPT_ATTEMPTS {
            print!("Start the {} upgrades? [y/n] ", tier.label());
            io::stdout().flush()?;

            let mut input = String::new();
            stdin.read_line(&mut input)?;

            if let Some(answer) = parse_answer(&input) {
                return Ok(answer);
            }
            println!("Please answer y or n.");
        }

        println!(
            "No valid answer after {} attempts, treating as no.",
            MAX_PROMPT_ATTEMPTS
        );
        Ok(false)
    }
}

/// Gate fed from a prepared answer list, for tests.
///
/// Records every prompt it was shown so tests can assert on gate order
/// and tier membership.
#[derive(Debug, Default)]
pub struct ScriptedGate {
    answers: VecDeque<bool>,
    /// Prompts seen so far: tier plus member names, in order
    pub prompts: Vec<(Tier, Vec<String>)>,
}

impl ScriptedGate {
    /// Answers are consumed in order; a drained script answers no.
    pub fn new(answers: Vec<bool>) -> Self {
        Self {
            answers: answers.into(),
            prompts: Vec::new(),
        }
    }
}

impl ConfirmationGate for ScriptedGate {
    fn confirm(&mut self, tier: Tier, edges: &[Edge]) -> Result<bool> {
        self.prompts
            .push((tier, edges.iter().map(|e| e.name.clone()).collect()));
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(id: i64, name: &str, is_hub: bool) -> Edge {
        Edge {
            id,
            name: name.to_string(),
            is_hub,
        }
    }

    #[test]
    fn test_parse_answer_affirmative() {
        assert_eq!(parse_answer("y"), Some(true));
        assert_eq!(parse_answer("Y"), Some(true));
        assert_eq!(parse_answer("yes"), Some(true));
        assert_eq!(parse_answer("  YES \n"), Some(true));
    }

    #[test]
    fn test_parse_answer_negative() {
        assert_eq!(parse_answer("n"), Some(false));
        assert_eq!(parse_answer("No"), Some(false));
    }

    #[test]
    fn test_parse_answer_invalid() {
        assert_eq!(parse_answer(""), None);
        assert_eq!(parse_answer("maybe"), None);
        assert_eq!(parse_answer("yep"), None);
    }

    #[test]
    fn test_scripted_gate_consumes_answers_in_order() {
        let mut gate = ScriptedGate::new(vec![true, false]);
        let hubs = [edge(1, "HQ", true)];
        let spokes = [edge(2, "Branch1", false)];

        assert!(gate.confirm(Tier::Hub, &hubs).unwrap());
        assert!(!gate.confirm(Tier::Spoke, &spokes).unwrap());
        // Drained script answers no
        assert!(!gate.confirm(Tier::Spoke, &spokes).unwrap());
    }

    #[test]
    fn test_scripted_gate_records_prompts() {
        let mut gate = ScriptedGate::new(vec![true]);
        let hubs = [edge(1, "HQ", true), edge(3, "DC2", true)];

        gate.confirm(Tier::Hub, &hubs).unwrap();

        assert_eq!(gate.prompts.len(), 1);
        assert_eq!(gate.prompts[0].0, Tier::Hub);
        assert_eq!(gate.prompts[0].1, vec!["HQ".to_string(), "DC2".to_string()]);
    }
}
