// Copyright 2024-2026 ServingRuntime Contributors
// SPDX-License-Identifier: Apache-2.0

//! Resource types for the `serving.kserve.io/v1alpha1` ServingRuntime API.
//!
//! Field names and optionality mirror the persisted JSON/YAML layout. The pod
//! spec is composed into [`ServingRuntimeSpec`] and flattened on the wire, so
//! `containers`, `nodeSelector`, `affinity` and `tolerations` sit directly
//! under `spec`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use k8s_openapi::api::core::v1::{Affinity, EnvVar, Probe, ResourceRequirements, Toleration};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::endpoint::{Endpoint, EndpointError};

pub const API_GROUP: &str = "serving.kserve.io";
pub const API_VERSION: &str = "v1alpha1";

fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// A model format and version supported by a runtime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Framework {
    /// Name of the model format/framework.
    pub name: String,
    /// Version of the model format/framework.
    /// Can be "major", "major.minor" or "major.minor.patch".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Framework {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), version: None }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// A container belonging to the serving runtime pod.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<EnvVar>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
    /// Periodic probe of container liveness.
    /// Container will be restarted if the probe fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<Probe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness_probe: Option<Probe>,
}

impl Container {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            ..Default::default()
        }
    }
}

/// Storage helper (model puller) settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StorageHelper {
    #[serde(default, skip_serializing_if = "is_default")]
    pub disabled: bool,
}

/// Pod-level fields of a serving runtime.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServingRuntimePodSpec {
    /// List of containers belonging to the pod.
    /// There must be at least one container, and names must be unique.
    #[serde(default)]
    pub containers: Vec<Container>,

    /// Selector which must match a node's labels for the pod to be scheduled on that node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,

    /// If specified, the pod's scheduling constraints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affinity: Option<Affinity>,

    /// If specified, the pod's tolerations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<Toleration>>,
}

/// Desired state of a ServingRuntime.
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "serving.kserve.io",
    version = "v1alpha1",
    kind = "ServingRuntime",
    plural = "servingruntimes",
    namespaced,
    status = "ServingRuntimeStatus",
    derive = "PartialEq",
    derive = "Default",
    printcolumn = r#"{"name":"Disabled","type":"boolean","jsonPath":".spec.disabled"}"#,
    printcolumn = r#"{"name":"ModelType","type":"string","jsonPath":".spec.supportedModelTypes[*].name"}"#,
    printcolumn = r#"{"name":"Containers","type":"string","jsonPath":".spec.containers[*].name"}"#,
    printcolumn = r#"{"name":"Age","type":"date","jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ServingRuntimeSpec {
    /// Model formats and versions supported by this runtime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_model_types: Option<Vec<Framework>>,

    /// Set to true to disable use of this runtime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    #[serde(flatten)]
    pub pod_spec: ServingRuntimePodSpec,

    /// gRPC endpoint for internal model management.
    /// Assumed to be a single-model runtime if omitted.
    #[serde(
        rename = "grpcEndpoint",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub grpc_multi_model_management_endpoint: Option<String>,

    /// gRPC endpoint for inferencing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grpc_data_endpoint: Option<String>,

    /// HTTP endpoint for inferencing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_data_endpoint: Option<String>,

    /// Number of replicas in the Deployment generated by this runtime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<u16>,

    /// Storage helper configuration. Enabled unless explicitly disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_helper: Option<StorageHelper>,

    /// Details about the built-in runtime adapter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub built_in_adapter: Option<BuiltInAdapter>,
}

impl ServingRuntimeSpec {
    /// True only when `disabled` is explicitly set to `true`.
    pub fn is_disabled(&self) -> bool {
        self.disabled == Some(true)
    }

    /// The storage helper runs unless a `storageHelper` block disables it.
    pub fn storage_helper_enabled(&self) -> bool {
        !self.storage_helper.as_ref().is_some_and(|helper| helper.disabled)
    }

    pub fn containers(&self) -> &[Container] {
        &self.pod_spec.containers
    }

    pub fn container(&self, name: &str) -> Option<&Container> {
        self.pod_spec.containers.iter().find(|c| c.name == name)
    }

    pub fn supported_model_types(&self) -> &[Framework] {
        self.supported_model_types.as_deref().unwrap_or_default()
    }

    /// Single-model runtimes have no model-management endpoint.
    pub fn is_multi_model(&self) -> bool {
        self.grpc_multi_model_management_endpoint.is_some()
    }

    pub fn grpc_endpoint(&self) -> Option<Result<Endpoint, EndpointError>> {
        self.grpc_multi_model_management_endpoint.as_deref().map(str::parse)
    }

    pub fn grpc_data_endpoint(&self) -> Option<Result<Endpoint, EndpointError>> {
        self.grpc_data_endpoint.as_deref().map(str::parse)
    }

    pub fn http_data_endpoint(&self) -> Option<Result<Endpoint, EndpointError>> {
        self.http_data_endpoint.as_deref().map(str::parse)
    }
}

/// Observed state of a ServingRuntime. Carries no fields yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ServingRuntimeStatus {}

/// Model server behind a built-in adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ServerType {
    #[serde(rename = "triton")]
    Triton,
    #[serde(rename = "mlserver")]
    MlServer,
}

impl ServerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Triton => "triton",
            Self::MlServer => "mlserver",
        }
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "triton" => Ok(Self::Triton),
            "mlserver" => Ok(Self::MlServer),
            other => Err(format!("unsupported serverType: {}", other)),
        }
    }
}

/// Built-in adapter bridging a raw model server to the model-management protocol.
///
/// Integer fields are omitted from the persisted form when zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuiltInAdapter {
    /// One of triton/mlserver; the runtime's container must have the same name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_type: Option<ServerType>,
    /// Port which the runtime server listens on for model management requests.
    #[serde(default, skip_serializing_if = "is_default")]
    pub runtime_management_port: i32,
    /// Fixed memory overhead subtracted from the container's memory allocation
    /// to determine model capacity.
    #[serde(default, skip_serializing_if = "is_default")]
    pub mem_buffer_bytes: i64,
    /// Timeout for model loading operations in milliseconds.
    #[serde(default, skip_serializing_if = "is_default")]
    pub model_loading_timeout_millis: i64,
}

impl BuiltInAdapter {
    pub fn new(server_type: ServerType) -> Self {
        Self {
            server_type: Some(server_type),
            runtime_management_port: 0,
            mem_buffer_bytes: 0,
            model_loading_timeout_millis: 0,
        }
    }
}
