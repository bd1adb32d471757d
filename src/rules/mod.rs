// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule evaluator.
//!
//! Six fixed predicates over [`ActionFacts`](crate::facts::ActionFacts). Each
//! one is independent; evaluation runs them all and collects every violation
//! in ascending rule order.

mod builtin;
mod engine;
mod verdict;

#[cfg(test)]
mod properties;

pub use builtin::{Rule, RuleId, RuleViolation, RULES};
pub use engine::{evaluate, try_evaluate};
pub use verdict::Verdict;
