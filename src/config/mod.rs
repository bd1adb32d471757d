// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for egf.
//!
//! Configuration only affects presentation (output format, colors, emoji).
//! Rule evaluation has no configurable state.

pub mod default;
mod loader;
mod schema;

pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
