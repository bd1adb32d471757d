// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Property-based tests for the evaluator.
//!
//! These cover determinism, ordering, the permissible/violations link and
//! monotonicity with respect to each fact's non-violating polarity.

use crate::facts::{ActionFacts, Fact, FactsBuilder};
use crate::rules::{evaluate, try_evaluate, RuleId, RULES};
use proptest::prelude::*;

fn facts_from_bits(bits: u16) -> ActionFacts {
    Fact::ALL
        .iter()
        .enumerate()
        .fold(FactsBuilder::new(), |b, (i, f)| b.with(*f, bits & (1 << i) != 0))
        .build()
        .expect("every fact is set")
}

fn arb_facts() -> impl Strategy<Value = ActionFacts> {
    (0u16..1024).prop_map(facts_from_bits)
}

fn arb_fact() -> impl Strategy<Value = Fact> {
    prop::sample::select(Fact::ALL.to_vec())
}

/// Value a fact takes when it cannot contribute to a violation.
///
/// `causes_minor_harm` is absent: it triggers rule 2 but also enables the
/// rule 4 exemption, so neither polarity is safe for every rule.
fn non_violating_value(fact: Fact) -> Option<bool> {
    match fact {
        Fact::CausesSevereHarm
        | Fact::ViolatesPrivacy
        | Fact::InvolvesDeception
        | Fact::UsesHistoricalData => Some(false),
        Fact::PreventsCatastrophe
        | Fact::HasConsent
        | Fact::HasEthicsApproval
        | Fact::HasExplanation
        | Fact::HasBiasMitigation => Some(true),
        Fact::CausesMinorHarm => None,
    }
}

#[test]
fn exhaustive_invariants_hold_for_every_combination() {
    for bits in 0u16..1024 {
        let facts = facts_from_bits(bits);
        let verdict = evaluate(&facts);

        assert_eq!(verdict.is_permissible(), verdict.violations().is_empty());
        assert!(verdict
            .violations()
            .windows(2)
            .all(|w| w[0].id < w[1].id));
        assert!(verdict.violations().len() <= 6);
    }
}

#[test]
fn minor_harm_is_not_monotone() {
    let facts = ActionFacts {
        causes_severe_harm: false,
        causes_minor_harm: true,
        prevents_catastrophe: true,
        violates_privacy: false,
        has_consent: false,
        involves_deception: true,
        has_ethics_approval: true,
        has_explanation: true,
        uses_historical_data: false,
        has_bias_mitigation: false,
    };
    assert!(evaluate(&facts).is_permissible());
    assert!(!evaluate(&facts.with(Fact::CausesMinorHarm, false)).is_permissible());
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(facts in arb_facts()) {
        prop_assert_eq!(evaluate(&facts), evaluate(&facts));
    }

    #[test]
    fn permissible_iff_no_violations(facts in arb_facts()) {
        let verdict = evaluate(&facts);
        prop_assert_eq!(verdict.is_permissible(), verdict.violations().is_empty());
    }

    #[test]
    fn violations_strictly_ascending(facts in arb_facts()) {
        let verdict = evaluate(&facts);
        let ids: Vec<u8> = verdict.violations().iter().map(|v| v.id.number()).collect();
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(ids.iter().all(|id| (1..=6).contains(id)));
    }

    #[test]
    fn violations_follow_rule_table_order(facts in arb_facts()) {
        let expected: Vec<RuleId> = RULES
            .iter()
            .filter(|rule| rule.is_violated(&facts))
            .map(|rule| rule.id)
            .collect();
        let actual: Vec<RuleId> = evaluate(&facts).violations().iter().map(|v| v.id).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn flipping_to_non_violating_never_adds_violations(facts in arb_facts(), fact in arb_fact()) {
        if let Some(safe) = non_violating_value(fact) {
            let before = evaluate(&facts);
            let after = evaluate(&facts.with(fact, safe));
            for violation in after.violations() {
                prop_assert!(
                    before.violations().contains(violation),
                    "{} appeared after setting {} = {}",
                    violation.id,
                    fact,
                    safe
                );
            }
        }
    }

    #[test]
    fn missing_fact_is_never_defaulted(facts in arb_facts(), fact in arb_fact()) {
        let mut builder = FactsBuilder::new();
        for other in Fact::ALL.iter().filter(|f| **f != fact) {
            builder.set(*other, facts.get(*other));
        }
        let err = try_evaluate(&builder).unwrap_err();
        prop_assert!(err.is_incomplete_input());
    }
}
