// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::EgfConfig;
use crate::error::{EgfError, Result, ResultExt, ScenarioError};
use crate::facts::{self, FactsBuilder};
use crate::rules::{self, RULES};
use crate::scenarios::{self, ScenarioOutcome, SCENARIOS};
use console::style;
use std::io::IsTerminal;

use super::args::{Cli, Commands, EvaluateArgs, InitArgs, OutputFormat, ScenariosArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let config = effective_config(&cli)?;

    if !config.ui.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Evaluate(args) => run_evaluate(&config, args),
        Commands::Ask => run_ask(&config),
        Commands::Rules => run_rules(&config),
        Commands::Scenarios(args) => run_scenarios(&config, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Load configuration and apply command-line overrides.
fn effective_config(cli: &Cli) -> Result<EgfConfig> {
    let mut config = if let Some(config_path) = &cli.config {
        EgfConfig::load_from(config_path)?
    } else {
        EgfConfig::load()?
    };

    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.no_color {
        config.ui.color = false;
    }

    Ok(config)
}

/// Run the evaluate command.
fn run_evaluate(config: &EgfConfig, args: EvaluateArgs) -> Result<()> {
    tracing::debug!("Running evaluate command with args: {:?}", args);

    let mut builder = match &args.file {
        Some(path) if !args.reads_stdin() => facts::load_facts_from(path)?,
        // Only overrides on an interactive terminal: nothing to read.
        _ if !args.overrides.is_empty() && std::io::stdin().is_terminal() => FactsBuilder::new(),
        _ => facts::read_facts(std::io::stdin().lock())?,
    };
    facts::apply_overrides(&mut builder, &args.overrides)?;

    let verdict = rules::try_evaluate(&builder)?;
    verdict.print(config.output.format, &config.ui);
    Ok(())
}

/// Run the ask command.
fn run_ask(config: &EgfConfig) -> Result<()> {
    tracing::debug!("Running ask command");

    let builder = super::prompt::prompt_facts(FactsBuilder::new())?;
    let verdict = rules::try_evaluate(&builder)?;
    verdict.print(config.output.format, &config.ui);
    Ok(())
}

/// Run the rules command.
fn run_rules(config: &EgfConfig) -> Result<()> {
    tracing::debug!("Running rules command");

    match config.output.format {
        OutputFormat::Json => {
            let json = serde_json::json!(RULES
                .iter()
                .map(|rule| {
                    serde_json::json!({
                        "id": rule.id,
                        "code": rule.code,
                        "name": rule.name,
                        "description": rule.description,
                        "condition": rule.condition,
                    })
                })
                .collect::<Vec<_>>());
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        OutputFormat::Text => {
            for rule in &RULES {
                println!(
                    "{} {} {} ({})",
                    style(rule.id).bold(),
                    style(rule.code).cyan(),
                    rule.name,
                    rule.description
                );
                println!("    {} {}", style("violated when").dim(), rule.condition);
            }
        }
    }

    Ok(())
}

/// Run the scenarios command.
fn run_scenarios(config: &EgfConfig, args: ScenariosArgs) -> Result<()> {
    tracing::debug!("Running scenarios command with args: {:?}", args);

    if args.list {
        for scenario in &SCENARIOS {
            println!(
                "{} {}",
                style(scenario.key.to_uppercase()).bold(),
                scenario.title
            );
        }
        return Ok(());
    }

    let outcomes = match &args.name {
        Some(name) => vec![scenarios::find(name)?.run()],
        None => scenarios::run_all(),
    };

    match config.output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&outcomes).unwrap_or_default()
            );
        }
        OutputFormat::Text => {
            for outcome in &outcomes {
                print_outcome(outcome, config);
            }
        }
    }

    let mismatches = outcomes.iter().filter(|o| !o.matches()).count();
    if mismatches > 0 {
        return Err(EgfError::Scenario(ScenarioError::Mismatch { count: mismatches }));
    }

    Ok(())
}

fn print_outcome(outcome: &ScenarioOutcome, config: &EgfConfig) {
    let scenario = &outcome.scenario;
    let status = match (outcome.matches(), config.ui.emoji) {
        (true, true) => style("✓").green().bold(),
        (true, false) => style("ok").green().bold(),
        (false, true) => style("✗").red().bold(),
        (false, false) => style("MISMATCH").red().bold(),
    };

    let expected = if scenario.expected_permissible() {
        "PERMISSIBLE".to_string()
    } else {
        let rules = scenario
            .expected_violations
            .iter()
            .map(|id| format!("{} violated", id))
            .collect::<Vec<_>>()
            .join(", ");
        format!("IMPERMISSIBLE: {}", rules)
    };

    println!(
        "{} Scenario {}: {}",
        status,
        scenario.key.to_uppercase(),
        scenario.title
    );
    println!("  {} {}", style("expected").dim(), expected);
    println!("  {} {}", style("actual  ").dim(), outcome.verdict.summary());
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::{example_config, facts_template};

    tracing::debug!("Running init command with args: {:?}", args);

    let target = args.target();

    if target.exists() && !args.force {
        return Err(EgfError::WithContext {
            context: "init".to_string(),
            message: format!(
                "{} already exists. Use --force to overwrite.",
                target.display()
            ),
        });
    }

    let content = if args.config_file {
        example_config()
    } else {
        facts_template()
    };

    std::fs::write(&target, content).context("init")?;

    println!("✓ Created {}", target.display());

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("egf {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
