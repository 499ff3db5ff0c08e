// Copyright 2024-2026 ServingRuntime Contributors
// SPDX-License-Identifier: Apache-2.0

//! Structural validation for ServingRuntime specs.
//!
//! Validation is pure: it never mutates the spec and collects every offending
//! field before rejecting.
//!
//! Checks performed on a [`ServingRuntimeSpec`]:
//!
//! - at least one container, with unique non-empty names and non-empty images
//! - framework names non-empty, versions `major[.minor[.patch]]`
//! - endpoints parse as `port:<1-65535>` or `unix:<absolute path>`
//! - a built-in adapter's `serverType` names exactly one container
//! - adapter port within 0-65535, buffer and timeout non-negative

mod error;

pub use error::{FieldError, FieldErrorKind, ValidationError};

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::k8s::{
    BuiltInAdapter, ClusterServingRuntime, Container, Endpoint, Framework, ServingRuntime,
    ServingRuntimeSpec,
};

static VERSION_PATTERN: OnceLock<Regex> = OnceLock::new();

fn version_pattern() -> &'static Regex {
    VERSION_PATTERN.get_or_init(|| {
        Regex::new(r"^[0-9]+(\.[0-9]+(\.[0-9]+)?)?$").expect("version pattern compiles")
    })
}

/// True if `version` is "major", "major.minor" or "major.minor.patch".
pub fn is_valid_version(version: &str) -> bool {
    version_pattern().is_match(version)
}

/// Validate a spec, reporting field paths rooted at `spec`.
pub fn validate_spec(spec: &ServingRuntimeSpec) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    check_frameworks(spec.supported_model_types(), &mut errors);
    check_containers(spec.containers(), &mut errors);
    check_endpoint(
        "spec.grpcEndpoint",
        spec.grpc_multi_model_management_endpoint.as_deref(),
        &mut errors,
    );
    check_endpoint("spec.grpcDataEndpoint", spec.grpc_data_endpoint.as_deref(), &mut errors);
    check_endpoint("spec.httpDataEndpoint", spec.http_data_endpoint.as_deref(), &mut errors);
    if let Some(adapter) = &spec.built_in_adapter {
        check_adapter(adapter, spec.containers(), &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(
            error_count = errors.len(),
            first = %errors[0],
            "serving runtime spec rejected"
        );
        Err(ValidationError { errors })
    }
}

fn check_frameworks(frameworks: &[Framework], errors: &mut Vec<FieldError>) {
    for (i, framework) in frameworks.iter().enumerate() {
        let path = format!("spec.supportedModelTypes[{}]", i);
        if framework.name.is_empty() {
            errors.push(FieldError::new(format!("{}.name", path), FieldErrorKind::Required));
        }
        if let Some(version) = &framework.version {
            if !is_valid_version(version) {
                errors.push(FieldError::new(
                    format!("{}.version", path),
                    FieldErrorKind::InvalidVersion(version.clone()),
                ));
            }
        }
    }
}

fn check_containers(containers: &[Container], errors: &mut Vec<FieldError>) {
    if containers.is_empty() {
        errors.push(FieldError::new("spec.containers", FieldErrorKind::MissingContainer));
        return;
    }

    let mut seen = HashSet::new();
    for (i, container) in containers.iter().enumerate() {
        let path = format!("spec.containers[{}]", i);
        if container.name.is_empty() {
            errors.push(FieldError::new(format!("{}.name", path), FieldErrorKind::Required));
        } else if !seen.insert(container.name.as_str()) {
            errors.push(FieldError::new(
                format!("{}.name", path),
                FieldErrorKind::DuplicateName(container.name.clone()),
            ));
        }
        if container.image.is_empty() {
            errors.push(FieldError::new(format!("{}.image", path), FieldErrorKind::Required));
        }
    }
}

fn check_endpoint(path: &str, value: Option<&str>, errors: &mut Vec<FieldError>) {
    if let Some(Err(e)) = value.map(str::parse::<Endpoint>) {
        errors.push(FieldError::new(path, e.into()));
    }
}

fn check_adapter(adapter: &BuiltInAdapter, containers: &[Container], errors: &mut Vec<FieldError>) {
    match adapter.server_type {
        None => errors.push(FieldError::new(
            "spec.builtInAdapter.serverType",
            FieldErrorKind::Required,
        )),
        Some(server_type) => {
            let server_name = server_type.as_str();
            let matches = containers.iter().filter(|c| c.name == server_name).count();
            if matches != 1 {
                errors.push(FieldError::new(
                    "spec.builtInAdapter.serverType",
                    FieldErrorKind::AdapterMismatch(server_type),
                ));
            }
        }
    }

    check_range(
        "spec.builtInAdapter.runtimeManagementPort",
        i64::from(adapter.runtime_management_port),
        0,
        i64::from(u16::MAX),
        errors,
    );
    check_range(
        "spec.builtInAdapter.memBufferBytes",
        adapter.mem_buffer_bytes,
        0,
        i64::MAX,
        errors,
    );
    check_range(
        "spec.builtInAdapter.modelLoadingTimeoutMillis",
        adapter.model_loading_timeout_millis,
        0,
        i64::MAX,
        errors,
    );
}

fn check_range(path: &str, value: i64, min: i64, max: i64, errors: &mut Vec<FieldError>) {
    if value < min || value > max {
        errors.push(FieldError::new(path, FieldErrorKind::OutOfRange { value, min, max }));
    }
}

impl ServingRuntimeSpec {
    /// Structural validation; see [`validate_spec`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_spec(self)
    }
}

impl ServingRuntime {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_spec(&self.spec)
    }
}

impl ClusterServingRuntime {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_spec(&self.spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::k8s::{ServerType, ServingRuntimePodSpec};

    fn spec(containers: Vec<Container>) -> ServingRuntimeSpec {
        ServingRuntimeSpec {
            pod_spec: ServingRuntimePodSpec {
                containers,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_version_pattern() {
        for ok in ["1", "2.0", "23.05.1", "0", "10.20.30"] {
            assert!(is_valid_version(ok), "{ok}");
        }
        for bad in ["", "v1", "1.", ".1", "1.2.3.4", "1.x", "1.2-rc1", " 1", "1..2", "١"] {
            assert!(!is_valid_version(bad), "{bad:?}");
        }
    }

    #[test]
    fn test_minimal_spec_valid() {
        assert!(spec(vec![Container::new("server", "img:1")]).validate().is_ok());
    }

    #[test]
    fn test_all_errors_collected() {
        let mut s = spec(vec![Container::new("", ""), Container::new("a", "img")]);
        s.grpc_data_endpoint = Some("tcp:80".into());
        s.supported_model_types = Some(vec![Framework::new("onnx").with_version("one")]);

        let err = s.validate().unwrap_err();
        assert_eq!(err.errors().len(), 4);
        assert_eq!(err.at("spec.containers[0].name"), Some(&FieldErrorKind::Required));
        assert_eq!(err.at("spec.containers[0].image"), Some(&FieldErrorKind::Required));
        assert!(matches!(
            err.at("spec.grpcDataEndpoint"),
            Some(FieldErrorKind::InvalidEndpoint(_))
        ));
        assert_eq!(
            err.at("spec.supportedModelTypes[0].version"),
            Some(&FieldErrorKind::InvalidVersion("one".into()))
        );
    }

    #[test]
    fn test_empty_names_not_reported_as_duplicates() {
        let s = spec(vec![Container::new("", "img"), Container::new("", "img")]);
        let err = s.validate().unwrap_err();
        assert!(!err.has(|k| matches!(k, FieldErrorKind::DuplicateName(_))));
    }

    #[test]
    fn test_adapter_ranges() {
        let mut s = spec(vec![Container::new("triton", "img")]);
        let mut adapter = BuiltInAdapter::new(ServerType::Triton);
        adapter.runtime_management_port = 70000;
        adapter.mem_buffer_bytes = -1;
        s.built_in_adapter = Some(adapter);

        let err = s.validate().unwrap_err();
        assert_eq!(
            err.at("spec.builtInAdapter.runtimeManagementPort"),
            Some(&FieldErrorKind::OutOfRange { value: 70000, min: 0, max: 65535 })
        );
        assert!(err.at("spec.builtInAdapter.memBufferBytes").is_some());
        assert!(err.at("spec.builtInAdapter.serverType").is_none());
    }

    #[test]
    fn test_adapter_without_server_type_is_required() {
        let mut s = spec(vec![Container::new("triton", "img")]);
        let mut adapter = BuiltInAdapter::new(ServerType::Triton);
        adapter.server_type = None;
        s.built_in_adapter = Some(adapter);

        let err = s.validate().unwrap_err();
        assert_eq!(
            err.at("spec.builtInAdapter.serverType"),
            Some(&FieldErrorKind::Required)
        );
    }
}
