// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// egf - Ethics governance evaluator
///
/// Decides whether a proposed action is permissible under six fixed rules.
#[derive(Parser, Debug)]
#[command(name = "egf")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Ethics governance rule evaluator", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format (overrides the configuration file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for terminals and scripts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Evaluate the facts of one action
    Evaluate(EvaluateArgs),

    /// Answer questions about an action and evaluate it
    Ask,

    /// List the built-in rules
    Rules,

    /// Run the built-in reference scenarios
    Scenarios(ScenariosArgs),

    /// Write a facts template or configuration file
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the evaluate command.
#[derive(Parser, Debug, Default, Clone)]
pub struct EvaluateArgs {
    /// Facts file (.toml or .json); reads stdin when omitted or "-"
    pub file: Option<PathBuf>,

    /// Set a fact, e.g. --set has_consent=true (repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

impl EvaluateArgs {
    /// Whether facts should come from stdin.
    pub fn reads_stdin(&self) -> bool {
        match &self.file {
            None => true,
            Some(path) => path.as_os_str() == "-",
        }
    }
}

/// Arguments for the scenarios command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ScenariosArgs {
    /// Scenario key (a, b, c); runs all when omitted
    pub name: Option<String>,

    /// Only list the scenarios
    #[arg(short, long)]
    pub list: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Where to write the file
    pub path: Option<PathBuf>,

    /// Write an egf.toml configuration instead of a facts template
    #[arg(long = "config-file")]
    pub config_file: bool,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

impl InitArgs {
    /// Target path, defaulting by file kind.
    pub fn target(&self) -> PathBuf {
        match &self.path {
            Some(path) => path.clone(),
            None if self.config_file => PathBuf::from("egf.toml"),
            None => PathBuf::from("action.toml"),
        }
    }
}
