// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Facts about a candidate action.
//!
//! [`ActionFacts`] is the complete record the evaluator works on.
//! [`FactsBuilder`] collects facts from files, stdin, overrides or prompts and
//! refuses to produce a record until every fact is known.

mod action;
mod loader;

pub use action::{ActionFacts, Fact, FactsBuilder};
pub use loader::{
    apply_overrides, load_facts_from, parse_facts, parse_override, read_facts, FactsFormat,
};
