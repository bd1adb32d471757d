// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The fact record describing one candidate action.

use crate::error::{EgfError, FactsError, Result};
use serde::{Deserialize, Serialize};

/// Name of a single boolean fact about an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fact {
    CausesSevereHarm,
    CausesMinorHarm,
    PreventsCatastrophe,
    ViolatesPrivacy,
    HasConsent,
    InvolvesDeception,
    HasEthicsApproval,
    HasExplanation,
    UsesHistoricalData,
    HasBiasMitigation,
}

impl Fact {
    /// All facts, in declaration order.
    pub const ALL: [Fact; 10] = [
        Fact::CausesSevereHarm,
        Fact::CausesMinorHarm,
        Fact::PreventsCatastrophe,
        Fact::ViolatesPrivacy,
        Fact::HasConsent,
        Fact::InvolvesDeception,
        Fact::HasEthicsApproval,
        Fact::HasExplanation,
        Fact::UsesHistoricalData,
        Fact::HasBiasMitigation,
    ];

    /// The key used in facts files and `--set` overrides.
    pub fn key(&self) -> &'static str {
        match self {
            Fact::CausesSevereHarm => "causes_severe_harm",
            Fact::CausesMinorHarm => "causes_minor_harm",
            Fact::PreventsCatastrophe => "prevents_catastrophe",
            Fact::ViolatesPrivacy => "violates_privacy",
            Fact::HasConsent => "has_consent",
            Fact::InvolvesDeception => "involves_deception",
            Fact::HasEthicsApproval => "has_ethics_approval",
            Fact::HasExplanation => "has_explanation",
            Fact::UsesHistoricalData => "uses_historical_data",
            Fact::HasBiasMitigation => "has_bias_mitigation",
        }
    }

    /// Look up a fact by key. Accepts `deceives_human` for deception.
    ///
    /// Keys match exactly, as they do in facts files.
    pub fn from_key(key: &str) -> Option<Fact> {
        let key = key.trim();
        if key == "deceives_human" {
            return Some(Fact::InvolvesDeception);
        }
        Fact::ALL.iter().copied().find(|f| f.key() == key)
    }

    /// Question asked for this fact in interactive mode.
    pub fn question(&self) -> &'static str {
        match self {
            Fact::CausesSevereHarm => {
                "Does the action cause severe harm (wrongful arrest, violence, life-changing harm)?"
            }
            Fact::CausesMinorHarm => {
                "Does the action cause minor harm (stress, repeated stops, brief detainment)?"
            }
            Fact::PreventsCatastrophe => "Does the action prevent a catastrophe?",
            Fact::ViolatesPrivacy => "Does the action use personal data beyond what people agreed to?",
            Fact::HasConsent => "Is there informed consent or a transparent legal mandate?",
            Fact::InvolvesDeception => "Are people misled about what the system is doing?",
            Fact::HasEthicsApproval => "Has an independent ethics board approved the action?",
            Fact::HasExplanation => "Can the decision be explained and traced to responsible humans?",
            Fact::UsesHistoricalData => "Does the system rely on historical data that may carry bias?",
            Fact::HasBiasMitigation => "Are bias mitigation measures and audits in place?",
        }
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Fact {
    type Err = FactsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Fact::from_key(s).ok_or_else(|| FactsError::UnknownFact {
            name: s.to_string(),
        })
    }
}

/// Complete set of facts about one candidate action.
///
/// Every field is required. Build one with a struct literal when all values
/// are known up front, or through [`FactsBuilder`] when they arrive piecemeal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActionFacts {
    pub causes_severe_harm: bool,
    pub causes_minor_harm: bool,
    pub prevents_catastrophe: bool,
    pub violates_privacy: bool,
    pub has_consent: bool,
    pub involves_deception: bool,
    pub has_ethics_approval: bool,
    pub has_explanation: bool,
    pub uses_historical_data: bool,
    pub has_bias_mitigation: bool,
}

impl ActionFacts {
    /// Read a fact by name.
    pub fn get(&self, fact: Fact) -> bool {
        match fact {
            Fact::CausesSevereHarm => self.causes_severe_harm,
            Fact::CausesMinorHarm => self.causes_minor_harm,
            Fact::PreventsCatastrophe => self.prevents_catastrophe,
            Fact::ViolatesPrivacy => self.violates_privacy,
            Fact::HasConsent => self.has_consent,
            Fact::InvolvesDeception => self.involves_deception,
            Fact::HasEthicsApproval => self.has_ethics_approval,
            Fact::HasExplanation => self.has_explanation,
            Fact::UsesHistoricalData => self.uses_historical_data,
            Fact::HasBiasMitigation => self.has_bias_mitigation,
        }
    }

    /// Return a copy with one fact replaced.
    pub fn with(mut self, fact: Fact, value: bool) -> Self {
        let slot = match fact {
            Fact::CausesSevereHarm => &mut self.causes_severe_harm,
            Fact::CausesMinorHarm => &mut self.causes_minor_harm,
            Fact::PreventsCatastrophe => &mut self.prevents_catastrophe,
            Fact::ViolatesPrivacy => &mut self.violates_privacy,
            Fact::HasConsent => &mut self.has_consent,
            Fact::InvolvesDeception => &mut self.involves_deception,
            Fact::HasEthicsApproval => &mut self.has_ethics_approval,
            Fact::HasExplanation => &mut self.has_explanation,
            Fact::UsesHistoricalData => &mut self.uses_historical_data,
            Fact::HasBiasMitigation => &mut self.has_bias_mitigation,
        };
        *slot = value;
        self
    }
}

/// Facts gathered so far, any of which may still be missing.
///
/// This is what facts files deserialize into. A `null` value counts as
/// missing. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactsBuilder {
    causes_severe_harm: Option<bool>,
    causes_minor_harm: Option<bool>,
    prevents_catastrophe: Option<bool>,
    violates_privacy: Option<bool>,
    has_consent: Option<bool>,
    #[serde(alias = "deceives_human")]
    involves_deception: Option<bool>,
    has_ethics_approval: Option<bool>,
    has_explanation: Option<bool>,
    uses_historical_data: Option<bool>,
    has_bias_mitigation: Option<bool>,
}

impl FactsBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, fact: Fact) -> &mut Option<bool> {
        match fact {
            Fact::CausesSevereHarm => &mut self.causes_severe_harm,
            Fact::CausesMinorHarm => &mut self.causes_minor_harm,
            Fact::PreventsCatastrophe => &mut self.prevents_catastrophe,
            Fact::ViolatesPrivacy => &mut self.violates_privacy,
            Fact::HasConsent => &mut self.has_consent,
            Fact::InvolvesDeception => &mut self.involves_deception,
            Fact::HasEthicsApproval => &mut self.has_ethics_approval,
            Fact::HasExplanation => &mut self.has_explanation,
            Fact::UsesHistoricalData => &mut self.uses_historical_data,
            Fact::HasBiasMitigation => &mut self.has_bias_mitigation,
        }
    }

    /// Current value of a fact, if known.
    pub fn get(&self, fact: Fact) -> Option<bool> {
        match fact {
            Fact::CausesSevereHarm => self.causes_severe_harm,
            Fact::CausesMinorHarm => self.causes_minor_harm,
            Fact::PreventsCatastrophe => self.prevents_catastrophe,
            Fact::ViolatesPrivacy => self.violates_privacy,
            Fact::HasConsent => self.has_consent,
            Fact::InvolvesDeception => self.involves_deception,
            Fact::HasEthicsApproval => self.has_ethics_approval,
            Fact::HasExplanation => self.has_explanation,
            Fact::UsesHistoricalData => self.uses_historical_data,
            Fact::HasBiasMitigation => self.has_bias_mitigation,
        }
    }

    /// Set a fact, replacing any earlier value.
    pub fn set(&mut self, fact: Fact, value: bool) -> &mut Self {
        *self.slot(fact) = Some(value);
        self
    }

    /// Set a fact (builder style).
    pub fn with(mut self, fact: Fact, value: bool) -> Self {
        self.set(fact, value);
        self
    }

    /// Keys of the facts that are still missing, in declaration order.
    pub fn missing(&self) -> Vec<&'static str> {
        Fact::ALL
            .iter()
            .filter(|f| self.get(**f).is_none())
            .map(|f| f.key())
            .collect()
    }

    /// Produce the complete record, or fail listing every missing fact.
    pub fn build(&self) -> Result<ActionFacts> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(EgfError::IncompleteInput { missing });
        }

        let value = |fact: Fact| self.get(fact).unwrap_or_default();
        Ok(ActionFacts {
            causes_severe_harm: value(Fact::CausesSevereHarm),
            causes_minor_harm: value(Fact::CausesMinorHarm),
            prevents_catastrophe: value(Fact::PreventsCatastrophe),
            violates_privacy: value(Fact::ViolatesPrivacy),
            has_consent: value(Fact::HasConsent),
            involves_deception: value(Fact::InvolvesDeception),
            has_ethics_approval: value(Fact::HasEthicsApproval),
            has_explanation: value(Fact::HasExplanation),
            uses_historical_data: value(Fact::UsesHistoricalData),
            has_bias_mitigation: value(Fact::HasBiasMitigation),
        })
    }
}

impl From<ActionFacts> for FactsBuilder {
    fn from(facts: ActionFacts) -> Self {
        Fact::ALL
            .iter()
            .fold(FactsBuilder::new(), |b, f| b.with(*f, facts.get(*f)))
    }
}
