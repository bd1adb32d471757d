// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule evaluation.

use crate::error::Result;
use crate::facts::{ActionFacts, FactsBuilder};

use super::builtin::RULES;
use super::verdict::Verdict;

/// Evaluate an action against every built-in rule.
///
/// All rules run, so the verdict lists every violation rather than the first.
pub fn evaluate(facts: &ActionFacts) -> Verdict {
    let mut violations = Vec::new();

    for rule in &RULES {
        let violated = rule.is_violated(facts);
        tracing::trace!("{} ({}): violated={}", rule.id, rule.code, violated);
        if violated {
            violations.push(rule.violation());
        }
    }

    let verdict = Verdict::new(violations);
    tracing::debug!("Verdict: {}", verdict);
    verdict
}

/// Evaluate facts that may still be incomplete.
///
/// Fails with `IncompleteInput` before any rule runs if a fact is missing.
pub fn try_evaluate(facts: &FactsBuilder) -> Result<Verdict> {
    let facts = facts.build()?;
    Ok(evaluate(&facts))
}
