// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from egf.toml.

use crate::cli::args::OutputFormat;
use serde::{Deserialize, Serialize};

/// The main configuration structure for egf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EgfConfig {
    /// Output configuration.
    pub output: OutputConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl EgfConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format when `--format` is not given.
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
        }
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,

    /// Whether to use emoji markers.
    pub emoji: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            emoji: true,
        }
    }
}
