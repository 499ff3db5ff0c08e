// Copyright 2024-2026 ServingRuntime Contributors
// SPDX-License-Identifier: Apache-2.0

//! Cluster-scoped ServingRuntime.
//!
//! Shares [`ServingRuntimeSpec`] and [`ServingRuntimeStatus`] with the
//! namespaced kind. The derive macro emits one kind per spec type, so this
//! resource implements [`Resource`] directly and reuses the namespaced CRD
//! schema for its own definition.

use std::borrow::Cow;

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, CustomResourceDefinitionNames,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::ClusterResourceScope;
use kube::core::{CustomResourceExt, Resource};
use serde::{Deserialize, Serialize};

use super::types::{
    ServingRuntime, ServingRuntimeSpec, ServingRuntimeStatus, API_GROUP, API_VERSION,
};

pub const CLUSTER_KIND: &str = "ClusterServingRuntime";
const CLUSTER_PLURAL: &str = "clusterservingruntimes";
const CLUSTER_SINGULAR: &str = "clusterservingruntime";

fn default_api_version() -> String {
    super::api_version()
}

fn default_kind() -> String {
    CLUSTER_KIND.to_string()
}

/// Cluster-scoped runtime descriptor, shared across namespaces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServingRuntime {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: ServingRuntimeSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ServingRuntimeStatus>,
}

impl ClusterServingRuntime {
    pub fn new(name: &str, spec: ServingRuntimeSpec) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
            spec,
            status: None,
        }
    }

    /// CRD for the cluster-scoped kind: the namespaced schema with cluster scope and names.
    pub fn crd() -> CustomResourceDefinition {
        let mut crd = ServingRuntime::crd();
        crd.metadata.name = Some(format!("{}.{}", CLUSTER_PLURAL, API_GROUP));
        crd.spec.scope = "Cluster".to_string();
        crd.spec.names = CustomResourceDefinitionNames {
            kind: CLUSTER_KIND.to_string(),
            list_kind: Some(format!("{}List", CLUSTER_KIND)),
            plural: CLUSTER_PLURAL.to_string(),
            singular: Some(CLUSTER_SINGULAR.to_string()),
            ..Default::default()
        };
        crd
    }
}

impl Default for ClusterServingRuntime {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            metadata: ObjectMeta::default(),
            spec: ServingRuntimeSpec::default(),
            status: None,
        }
    }
}

impl Resource for ClusterServingRuntime {
    type DynamicType = ();
    type Scope = ClusterResourceScope;

    fn kind(_: &()) -> Cow<'_, str> {
        CLUSTER_KIND.into()
    }

    fn group(_: &()) -> Cow<'_, str> {
        API_GROUP.into()
    }

    fn version(_: &()) -> Cow<'_, str> {
        API_VERSION.into()
    }

    fn plural(_: &()) -> Cow<'_, str> {
        CLUSTER_PLURAL.into()
    }

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}
