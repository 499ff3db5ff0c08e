// Copyright 2024-2026 ServingRuntime Contributors
// SPDX-License-Identifier: Apache-2.0

//! Validation error types.
//!
//! Every rejection names the offending field by its persisted path,
//! e.g. `spec.containers[1].name`.

use thiserror::Error;

use crate::k8s::{EndpointError, ServerType};

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    #[error("missing required field")]
    Required,

    #[error("missing container: at least one container is required")]
    MissingContainer,

    #[error("duplicate name {0:?}")]
    DuplicateName(String),

    #[error("invalid version {0:?}: expected major, major.minor or major.minor.patch")]
    InvalidVersion(String),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] EndpointError),

    #[error("unsupported serverType: {0} must match the name of exactly one container")]
    AdapterMismatch(ServerType),

    #[error("value {value} out of range [{min}, {max}]")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

/// A rejected field and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {kind}")]
pub struct FieldError {
    pub path: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(path: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self { path: path.into(), kind }
    }
}

/// All field errors found in one object. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", join(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Field error reported at `path`, if any.
    pub fn at(&self, path: &str) -> Option<&FieldErrorKind> {
        self.errors.iter().find(|e| e.path == path).map(|e| &e.kind)
    }

    pub fn has(&self, predicate: impl Fn(&FieldErrorKind) -> bool) -> bool {
        self.errors.iter().any(|e| predicate(&e.kind))
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
