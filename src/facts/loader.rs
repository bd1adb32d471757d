// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Loading facts from files, stdin and command-line overrides.

use crate::error::{EgfError, FactsError, Result};
use std::io::Read;
use std::path::Path;

use super::action::{Fact, FactsBuilder};

/// Serialization format of a facts document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactsFormat {
    Toml,
    Json,
}

impl FactsFormat {
    /// Pick a format from a file extension. Anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FactsFormat::Json,
            _ => FactsFormat::Toml,
        }
    }

    /// Guess the format of raw content. A leading `{` means JSON.
    pub fn sniff(content: &str) -> Self {
        if strip_bom(content).trim_start().starts_with('{') {
            FactsFormat::Json
        } else {
            FactsFormat::Toml
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            FactsFormat::Toml => "TOML",
            FactsFormat::Json => "JSON",
        }
    }
}

fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

/// Parse a facts document. A leading byte order mark is ignored.
pub fn parse_facts(content: &str, format: FactsFormat) -> Result<FactsBuilder> {
    let content = strip_bom(content);
    let parsed: std::result::Result<FactsBuilder, String> = match format {
        FactsFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        FactsFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| {
        EgfError::Facts(FactsError::ParseError {
            format: format.name(),
            message,
        })
    })
}

/// Load facts from a file, choosing the format by extension.
pub fn load_facts_from(path: &Path) -> Result<FactsBuilder> {
    tracing::debug!("Loading facts from: {:?}", path);

    if !path.exists() {
        return Err(EgfError::Facts(FactsError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path)?;
    parse_facts(&content, FactsFormat::from_path(path))
}

/// Read facts from any reader, sniffing the format.
pub fn read_facts(mut reader: impl Read) -> Result<FactsBuilder> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    let format = FactsFormat::sniff(&content);
    tracing::debug!("Reading {} facts from stream", format.name());
    parse_facts(&content, format)
}

/// Parse a `key=value` override.
///
/// Values accept `true`/`false`, `yes`/`no` and `1`/`0`, case-insensitively.
pub fn parse_override(input: &str) -> Result<(Fact, bool)> {
    let invalid = || {
        EgfError::Facts(FactsError::InvalidOverride {
            input: input.to_string(),
        })
    };

    let (key, value) = input.split_once('=').ok_or_else(invalid)?;
    let fact: Fact = key.parse()?;

    let value = match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => true,
        "false" | "no" | "0" => false,
        _ => return Err(invalid()),
    };

    Ok((fact, value))
}

/// Apply a list of overrides to a builder, in order.
pub fn apply_overrides(builder: &mut FactsBuilder, overrides: &[String]) -> Result<()> {
    for input in overrides {
        let (fact, value) = parse_override(input)?;
        tracing::debug!("Override {} = {}", fact, value);
        builder.set(fact, value);
    }
    Ok(())
}
