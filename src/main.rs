// Copyright 2024-2026 ServingRuntime Contributors
// SPDX-License-Identifier: Apache-2.0

//! `srtctl` entry point.
//!
//! ## CLI Subcommands
//!
//! - `srtctl validate <file>...` - Validate ServingRuntime manifests (exit 0/1)
//! - `srtctl crd [--json|--yaml]` - Print the CustomResourceDefinitions
//! - `srtctl config show` - Show effective configuration

use std::process::ExitCode;

use serving_runtime::cli::{self, EXIT_USAGE};
use serving_runtime::config;
use serving_runtime::telemetry;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("help");
    let rest = args.get(2..).unwrap_or_default();

    let env = config::load();
    if let Err(e) = telemetry::init_logging(&env.log) {
        eprintln!("Logging disabled: {}", e);
    }

    let code = match command {
        "validate" => cli::run_validate(rest, &env),
        "crd" => cli::run_crd(rest, env.output_format),
        "config" => match rest.first().map(String::as_str).unwrap_or("show") {
            "show" => {
                cli::run_show(&env);
                0
            }
            other => {
                eprintln!("Unknown config subcommand: {}", other);
                print_usage();
                EXIT_USAGE
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("srtctl {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            EXIT_USAGE
        }
    };
    ExitCode::from(code as u8)
}

fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        "srtctl - ServingRuntime manifest tooling v{}

USAGE:
    srtctl <COMMAND> [OPTIONS]

COMMANDS:
    validate <FILE>...  Validate ServingRuntime/ClusterServingRuntime manifests
    crd                 Print CustomResourceDefinitions for both kinds
    config show         Show effective configuration
    version             Show version information
    help                Show this help message

OPTIONS:
    crd --json | --yaml  Override SRT_OUTPUT_FORMAT

ENVIRONMENT:
    SRT_LOG_LEVEL          Log filter (default: warn)
    SRT_LOG_FORMAT         json or pretty (default: json)
    SRT_LOG_FILE           Write logs to a file instead of stderr
    SRT_OUTPUT_FORMAT      yaml or json (default: yaml)
    SRT_DEFAULT_NAMESPACE  Namespace for runtimes without one (default: default)

EXIT CODES:
    0  Success / all manifests valid
    1  One or more manifests invalid
    2  Usage or configuration error
",
        version
    );
}
