// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in reference scenarios.
//!
//! Three predictive-policing cases with a predicted outcome each: one clearly
//! permissible, one violating every rule, and one ambiguous case the rules
//! classify as permissible. Running them checks the evaluator against the
//! predictions.

use crate::error::{Result, ScenarioError};
use crate::facts::ActionFacts;
use crate::rules::{evaluate, RuleId, Verdict};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A reference action with its predicted outcome.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Short lookup key (`a`, `b`, `c`).
    pub key: &'static str,
    /// One-line title.
    pub title: &'static str,
    /// Facts describing the action.
    pub facts: ActionFacts,
    /// Rules the action is predicted to violate, ascending.
    pub expected_violations: &'static [RuleId],
}

impl Scenario {
    /// Whether the action is predicted to be permissible.
    pub fn expected_permissible(&self) -> bool {
        self.expected_violations.is_empty()
    }

    /// Evaluate the scenario.
    pub fn run(&self) -> ScenarioOutcome {
        tracing::debug!("Running scenario {}: {}", self.key, self.title);
        ScenarioOutcome {
            scenario: *self,
            verdict: evaluate(&self.facts),
        }
    }
}

/// Result of running one scenario.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub verdict: Verdict,
}

impl ScenarioOutcome {
    /// Whether the verdict agrees with the prediction.
    pub fn matches(&self) -> bool {
        let actual: Vec<RuleId> = self.verdict.violations().iter().map(|v| v.id).collect();
        self.verdict.is_permissible() == self.scenario.expected_permissible()
            && actual == self.scenario.expected_violations
    }
}

impl Serialize for ScenarioOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ScenarioOutcome", 7)?;
        state.serialize_field("scenario", self.scenario.key)?;
        state.serialize_field("title", self.scenario.title)?;
        state.serialize_field("facts", &self.scenario.facts)?;
        state.serialize_field("expected_permissible", &self.scenario.expected_permissible())?;
        state.serialize_field("expected_violations", self.scenario.expected_violations)?;
        state.serialize_field("verdict", &self.verdict)?;
        state.serialize_field("matches", &self.matches())?;
        state.end()
    }
}

/// All built-in scenarios.
pub const SCENARIOS: [Scenario; 3] = [
    Scenario {
        key: "a",
        title: "Location-based Patrol Optimization with Oversight",
        facts: ActionFacts {
            causes_severe_harm: false,
            causes_minor_harm: true,
            prevents_catastrophe: true,
            violates_privacy: false,
            has_consent: true,
            involves_deception: false,
            has_ethics_approval: true,
            has_explanation: true,
            uses_historical_data: false,
            has_bias_mitigation: true,
        },
        expected_violations: &[],
    },
    Scenario {
        key: "b",
        title: "Individual Risk Scoring with Secret Blacklist",
        facts: ActionFacts {
            causes_severe_harm: true,
            causes_minor_harm: true,
            prevents_catastrophe: false,
            violates_privacy: true,
            has_consent: false,
            involves_deception: true,
            has_ethics_approval: false,
            has_explanation: false,
            uses_historical_data: true,
            has_bias_mitigation: false,
        },
        expected_violations: &[
            RuleId::SevereHarm,
            RuleId::UnjustifiedMinorHarm,
            RuleId::PrivacyWithoutConsent,
            RuleId::UnjustifiedDeception,
            RuleId::MissingExplanation,
            RuleId::UnmitigatedHistoricalBias,
        ],
    },
    Scenario {
        key: "c",
        title: "Targeted Undercover Intervention with Strong Safeguards",
        facts: ActionFacts {
            causes_severe_harm: false,
            causes_minor_harm: true,
            prevents_catastrophe: true,
            violates_privacy: true,
            has_consent: true,
            involves_deception: true,
            has_ethics_approval: true,
            has_explanation: true,
            uses_historical_data: true,
            has_bias_mitigation: true,
        },
        expected_violations: &[],
    },
];

/// Look up a scenario by key, case-insensitively.
pub fn find(key: &str) -> Result<&'static Scenario> {
    let wanted = key.trim().to_lowercase();
    SCENARIOS
        .iter()
        .find(|s| s.key == wanted)
        .ok_or_else(|| {
            ScenarioError::Unknown {
                name: key.to_string(),
            }
            .into()
        })
}

/// Run every built-in scenario in order.
pub fn run_all() -> Vec<ScenarioOutcome> {
    SCENARIOS.iter().map(Scenario::run).collect()
}
