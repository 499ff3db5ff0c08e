// Copyright 2024-2026 ServingRuntime Contributors
// SPDX-License-Identifier: Apache-2.0

//! Config CLI subcommand: show.
//!
//! Reads configuration directly from environment variables.

use crate::config::EnvConfig;

/// Print effective config as key-value pairs to stdout.
pub fn run_show(config: &EnvConfig) {
    print!("{}", format_config(config));
}

fn format_config(config: &EnvConfig) -> String {
    config
        .effective()
        .into_iter()
        .map(|(key, value)| format!("{}={}\n", key, value))
        .collect()
}
