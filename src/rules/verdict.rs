// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Verdict types.

use crate::cli::args::OutputFormat;
use crate::config::UiConfig;
use console::style;
use serde::Serialize;

use super::builtin::RuleViolation;

/// Outcome of evaluating one action.
///
/// `permissible` always equals `violations().is_empty()`; there is no way to
/// set it independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Verdict {
    permissible: bool,
    violations: Vec<RuleViolation>,
}

impl Verdict {
    /// Build a verdict from the violated rules, which must already be
    /// strictly ascending by id.
    pub(crate) fn new(violations: Vec<RuleViolation>) -> Self {
        debug_assert!(
            violations.windows(2).all(|w| w[0].id < w[1].id),
            "violations must be strictly ascending by rule id"
        );
        Self {
            permissible: violations.is_empty(),
            violations,
        }
    }

    /// Whether the action is permissible.
    pub fn is_permissible(&self) -> bool {
        self.permissible
    }

    /// Violated rules, ascending by id.
    pub fn violations(&self) -> &[RuleViolation] {
        &self.violations
    }

    /// One-line status, e.g. `IMPERMISSIBLE: Rule 3 violated, Rule 6 violated`.
    pub fn summary(&self) -> String {
        if self.permissible {
            return "PERMISSIBLE".to_string();
        }

        let rules = self
            .violations
            .iter()
            .map(|v| format!("{} violated", v.id))
            .collect::<Vec<_>>()
            .join(", ");
        format!("IMPERMISSIBLE: {}", rules)
    }

    /// Render the verdict for terminal or machine output.
    pub fn render(&self, format: OutputFormat, ui: &UiConfig) -> String {
        match format {
            OutputFormat::Json => self.render_json(),
            OutputFormat::Text => self.render_text(ui),
        }
    }

    /// Print the verdict to stdout.
    pub fn print(&self, format: OutputFormat, ui: &UiConfig) {
        println!("{}", self.render(format, ui));
    }

    fn render_text(&self, ui: &UiConfig) -> String {
        let (mark, summary) = if self.permissible {
            (
                style(if ui.emoji { "✓" } else { "+" }).green().bold(),
                style(self.summary()).green().bold(),
            )
        } else {
            (
                style(if ui.emoji { "✗" } else { "x" }).red().bold(),
                style(self.summary()).red().bold(),
            )
        };

        let mut output = format!("{} {}", mark, summary);
        for violation in &self.violations {
            output.push_str(&format!(
                "\n  {} {} {} ({})",
                style(violation.id).red(),
                style(violation.code).dim(),
                violation.name,
                violation.description
            ));
        }
        output
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}
