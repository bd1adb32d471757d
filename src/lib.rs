// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! egf - Ethics Governance Framework evaluator
//!
//! Decides whether a proposed action is ethically permissible under six fixed
//! rules, and reports every rule it violates.
//!
//! # Rules
//!
//! 1. **Non-Maleficence**: the action causes severe harm.
//! 2. **Harm-Mitigation**: minor harm that does not prevent a catastrophe.
//! 3. **Data-Stewardship**: privacy is violated without consent.
//! 4. **Honesty**: deception, unless it comes with minor harm and ethics approval.
//! 5. **Accountability**: the decision has no explanation.
//! 6. **Bias Governance**: historical data is used without bias mitigation.
//!
//! # Example
//!
//! ```
//! use egf::{evaluate, ActionFacts};
//!
//! let facts = ActionFacts {
//!     causes_severe_harm: false,
//!     causes_minor_harm: false,
//!     prevents_catastrophe: false,
//!     violates_privacy: true,
//!     has_consent: false,
//!     involves_deception: false,
//!     has_ethics_approval: false,
//!     has_explanation: true,
//!     uses_historical_data: true,
//!     has_bias_mitigation: false,
//! };
//!
//! let verdict = evaluate(&facts);
//! assert!(!verdict.is_permissible());
//! assert_eq!(verdict.summary(), "IMPERMISSIBLE: Rule 3 violated, Rule 6 violated");
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod facts;
pub mod rules;
pub mod scenarios;

// Re-exports for convenience
pub use config::EgfConfig;
pub use error::{EgfError, Result};
pub use facts::{ActionFacts, Fact, FactsBuilder};
pub use rules::{evaluate, try_evaluate, RuleId, RuleViolation, Verdict};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of egf.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
