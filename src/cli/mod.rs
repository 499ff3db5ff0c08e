// Copyright 2024-2026 ServingRuntime Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI module for `srtctl` commands.
//!
//! ## Usage
//!
//! ```bash
//! srtctl validate runtimes.yaml   # Validate manifests, exits 0 when all are valid
//! srtctl crd                      # Print both CRDs
//! srtctl config show              # Show effective configuration
//! ```

pub mod config_cmd;
pub mod crd_cmd;
pub mod validate_cmd;

pub use config_cmd::run_show;
pub use crd_cmd::run_crd;
pub use validate_cmd::{run_validate, validate_paths, ValidationReport};

/// Exit code for success.
pub const EXIT_OK: i32 = 0;
/// Exit code when any manifest is invalid.
pub const EXIT_INVALID: i32 = 1;
/// Exit code for usage or configuration errors.
pub const EXIT_USAGE: i32 = 2;
