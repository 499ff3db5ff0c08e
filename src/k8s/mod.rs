// Copyright 2024-2026 ServingRuntime Contributors
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes integration types.
//!
//! Defines Rust types matching the ServingRuntime and ClusterServingRuntime CRDs.

pub mod cluster;
pub mod crd;
pub mod endpoint;
pub mod types;

use kube::core::ObjectList;

pub use cluster::{ClusterServingRuntime, CLUSTER_KIND};
pub use endpoint::{Endpoint, EndpointError};
pub use types::{
    BuiltInAdapter, Container, Framework, ServerType, ServingRuntime, ServingRuntimePodSpec,
    ServingRuntimeSpec, ServingRuntimeStatus, StorageHelper, API_GROUP, API_VERSION,
};

pub const KIND: &str = "ServingRuntime";

pub type ServingRuntimeList = ObjectList<ServingRuntime>;
pub type ClusterServingRuntimeList = ObjectList<ClusterServingRuntime>;

/// `apiVersion` value shared by both kinds.
pub fn api_version() -> String {
    format!("{}/{}", API_GROUP, API_VERSION)
}
