// Copyright 2024-2026 ServingRuntime Contributors
// SPDX-License-Identifier: Apache-2.0

//! `crd` subcommand: print the CustomResourceDefinitions.

use super::{EXIT_OK, EXIT_USAGE};
use crate::config::OutputFormat;
use crate::k8s::crd;

/// Run `srtctl crd [--json|--yaml]`; the flag overrides `SRT_OUTPUT_FORMAT`.
pub fn run_crd(args: &[String], default_format: OutputFormat) -> i32 {
    let format = match args.first().map(String::as_str) {
        None => default_format,
        Some("--json") => OutputFormat::Json,
        Some("--yaml") => OutputFormat::Yaml,
        Some(other) => {
            eprintln!("crd: unknown option {}", other);
            return EXIT_USAGE;
        }
    };

    match crd::render_all(format) {
        Ok(rendered) => {
            println!("{}", rendered);
            EXIT_OK
        }
        Err(e) => {
            eprintln!("crd: {}", e);
            EXIT_USAGE
        }
    }
}
