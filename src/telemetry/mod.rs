// Copyright 2024-2026 ServingRuntime Contributors
// SPDX-License-Identifier: Apache-2.0

//! Telemetry: structured logging via `tracing`.

mod logging;

pub use logging::{init_logging, LogConfig, LogError, LogFormat};
