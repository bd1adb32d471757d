// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The six built-in ethics rules.

use crate::facts::ActionFacts;
use serde::Serialize;

/// Identifier of a built-in rule, 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum RuleId {
    SevereHarm = 1,
    UnjustifiedMinorHarm = 2,
    PrivacyWithoutConsent = 3,
    UnjustifiedDeception = 4,
    MissingExplanation = 5,
    UnmitigatedHistoricalBias = 6,
}

impl RuleId {
    /// Numeric rule id.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// The rule definition for this id.
    pub fn rule(&self) -> &'static Rule {
        &RULES[usize::from(self.number() - 1)]
    }
}

impl From<RuleId> for u8 {
    fn from(id: RuleId) -> u8 {
        id.number()
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rule {}", self.number())
    }
}

/// A rule that was violated by an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RuleViolation {
    /// Rule identifier.
    pub id: RuleId,
    /// Short machine-friendly code.
    pub code: &'static str,
    /// Principle the rule protects.
    pub name: &'static str,
    /// Fixed human-readable description.
    pub description: &'static str,
}

/// Definition of one built-in rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// The violation condition, written out for display.
    pub condition: &'static str,
    check: fn(&ActionFacts) -> bool,
}

impl Rule {
    /// Whether the facts violate this rule.
    pub fn is_violated(&self, facts: &ActionFacts) -> bool {
        (self.check)(facts)
    }

    /// The violation record reported for this rule.
    pub fn violation(&self) -> RuleViolation {
        RuleViolation {
            id: self.id,
            code: self.code,
            name: self.name,
            description: self.description,
        }
    }
}

/// All built-in rules, in ascending id order.
pub const RULES: [Rule; 6] = [
    Rule {
        id: RuleId::SevereHarm,
        code: "severe-harm",
        name: "Non-Maleficence",
        description: "Severe Harm",
        condition: "causes_severe_harm",
        check: severe_harm,
    },
    Rule {
        id: RuleId::UnjustifiedMinorHarm,
        code: "unjustified-minor-harm",
        name: "Harm-Mitigation",
        description: "Unjustified Minor Harm",
        condition: "causes_minor_harm AND NOT prevents_catastrophe",
        check: unjustified_minor_harm,
    },
    Rule {
        id: RuleId::PrivacyWithoutConsent,
        code: "privacy-without-consent",
        name: "Data-Stewardship",
        description: "Privacy without Consent",
        condition: "violates_privacy AND NOT has_consent",
        check: privacy_without_consent,
    },
    Rule {
        id: RuleId::UnjustifiedDeception,
        code: "unjustified-deception",
        name: "Honesty",
        description: "Unjustified Deception",
        condition: "involves_deception AND NOT (causes_minor_harm AND has_ethics_approval)",
        check: unjustified_deception,
    },
    Rule {
        id: RuleId::MissingExplanation,
        code: "missing-explanation",
        name: "Accountability",
        description: "No Explanation / Traceability",
        condition: "NOT has_explanation",
        check: missing_explanation,
    },
    Rule {
        id: RuleId::UnmitigatedHistoricalBias,
        code: "unmitigated-historical-bias",
        name: "Bias Governance",
        description: "Unmitigated Historical Bias",
        condition: "uses_historical_data AND NOT has_bias_mitigation",
        check: unmitigated_historical_bias,
    },
];

fn severe_harm(facts: &ActionFacts) -> bool {
    facts.causes_severe_harm
}

fn unjustified_minor_harm(facts: &ActionFacts) -> bool {
    facts.causes_minor_harm && !facts.prevents_catastrophe
}

fn privacy_without_consent(facts: &ActionFacts) -> bool {
    facts.violates_privacy && !facts.has_consent
}

/// Deception is excused only when it comes with minor harm and ethics approval.
fn unjustified_deception(facts: &ActionFacts) -> bool {
    facts.involves_deception && !(facts.causes_minor_harm && facts.has_ethics_approval)
}

fn missing_explanation(facts: &ActionFacts) -> bool {
    !facts.has_explanation
}

fn unmitigated_historical_bias(facts: &ActionFacts) -> bool {
    facts.uses_historical_data && !facts.has_bias_mitigation
}
