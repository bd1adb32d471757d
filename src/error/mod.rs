// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for egf.
//!
//! `IncompleteInput` is the only error the evaluator itself can raise. The
//! remaining kinds belong to the presentation layer (loading facts, reading
//! configuration, running reference scenarios).

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for usage, I/O and other non-evaluation failures.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code when required facts are missing.
pub const EXIT_INCOMPLETE_INPUT: i32 = 2;

/// The main error type for egf operations.
#[derive(Error, Debug)]
pub enum EgfError {
    /// One or more required facts were absent at evaluation time.
    #[error("Incomplete input: missing {}", .missing.join(", "))]
    IncompleteInput { missing: Vec<&'static str> },

    // Fact loading errors
    #[error("Facts error: {0}")]
    Facts(#[from] FactsError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Reference scenario errors
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl EgfError {
    /// Process exit code for this error.
    ///
    /// Missing facts are a data error and get their own code so callers can
    /// tell them apart from every other failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            EgfError::IncompleteInput { .. } => EXIT_INCOMPLETE_INPUT,
            _ => EXIT_FAILURE,
        }
    }

    /// Whether this error means the evaluator was handed partial facts.
    pub fn is_incomplete_input(&self) -> bool {
        matches!(self, EgfError::IncompleteInput { .. })
    }
}

impl From<dialoguer::Error> for EgfError {
    fn from(err: dialoguer::Error) -> Self {
        EgfError::Ui(err.to_string())
    }
}

/// Errors raised while reading facts from files, stdin or overrides.
#[derive(Error, Debug)]
pub enum FactsError {
    #[error("Facts file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse {format} facts: {message}")]
    ParseError {
        format: &'static str,
        message: String,
    },

    #[error("Invalid fact override '{input}': expected key=true|false")]
    InvalidOverride { input: String },

    #[error("Unknown fact: '{name}'")]
    UnknownFact { name: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Errors from the built-in reference scenarios.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Unknown scenario: '{name}'")]
    Unknown { name: String },

    #[error("{count} scenario(s) did not match their expected outcome")]
    Mismatch { count: usize },
}

/// Result type alias for egf operations.
pub type Result<T> = std::result::Result<T, EgfError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| EgfError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
