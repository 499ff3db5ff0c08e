// Copyright 2024-2026 ServingRuntime Contributors
// SPDX-License-Identifier: Apache-2.0

//! `validate` subcommand: load manifests and apply them to a fresh registry.

use std::path::{Path, PathBuf};

use super::{EXIT_INVALID, EXIT_OK, EXIT_USAGE};
use crate::config::EnvConfig;
use crate::manifest;
use crate::registry::RuntimeRegistry;

/// Per-object results of a validation run.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// `(reference, outcome)` for accepted objects.
    pub accepted: Vec<(String, String)>,
    /// `(source, message)` for rejected objects or unreadable files.
    pub rejected: Vec<(String, String)>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Validate every object in `paths` against a single registry.
///
/// Later objects with the same identity replace earlier ones, exactly as a
/// sequence of `kubectl apply` calls would.
pub fn validate_paths(paths: &[PathBuf], config: &EnvConfig) -> ValidationReport {
    let registry = RuntimeRegistry::with_default_namespace(config.default_namespace.clone());
    let mut report = ValidationReport::default();

    for path in paths {
        let objects = match manifest::load_file(path) {
            Ok(objects) => objects,
            Err(e) => {
                report.rejected.push((display(path), e.to_string()));
                continue;
            }
        };
        for object in objects {
            let reference = object.reference();
            match registry.apply(object) {
                Ok(outcome) => report.accepted.push((reference, outcome.to_string())),
                Err(e) => report.rejected.push((reference, e.to_string())),
            }
        }
    }
    report
}

/// Run `srtctl validate <file>...`; returns the process exit code.
pub fn run_validate(args: &[String], config: &EnvConfig) -> i32 {
    if args.is_empty() {
        eprintln!("validate: at least one manifest file is required");
        return EXIT_USAGE;
    }
    let paths: Vec<PathBuf> = args.iter().map(PathBuf::from).collect();
    let report = validate_paths(&paths, config);

    for (reference, outcome) in &report.accepted {
        println!("{} {}", reference, outcome);
    }
    for (source, message) in &report.rejected {
        eprintln!("{}: {}", source, message);
    }

    if report.is_ok() {
        EXIT_OK
    } else {
        EXIT_INVALID
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
