// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Interactive fact entry.

use crate::error::Result;
use crate::facts::{Fact, FactsBuilder};
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Ask one yes/no question per fact that is not already known.
///
/// There is no default answer: every fact must be confirmed explicitly.
pub fn prompt_facts(mut builder: FactsBuilder) -> Result<FactsBuilder> {
    let term = Term::stderr();
    let theme = ColorfulTheme::default();

    term.write_line(&format!(
        "\n{}\n",
        style("Describe the proposed action.").dim()
    ))?;

    for fact in Fact::ALL {
        if builder.get(fact).is_some() {
            continue;
        }
        let answer = Confirm::with_theme(&theme)
            .with_prompt(fact.question())
            .interact_on(&term)?;
        tracing::debug!("Answered {} = {}", fact, answer);
        builder.set(fact, answer);
    }

    Ok(builder)
}
