// Copyright 2024-2026 ServingRuntime Contributors
// SPDX-License-Identifier: Apache-2.0

//! CustomResourceDefinition rendering for both runtime kinds.

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::core::CustomResourceExt;
use thiserror::Error;

use super::{ClusterServingRuntime, ServingRuntime};
use crate::config::OutputFormat;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to render CRD as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to render CRD as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Both CRDs, namespaced kind first.
pub fn definitions() -> Vec<CustomResourceDefinition> {
    vec![ServingRuntime::crd(), ClusterServingRuntime::crd()]
}

/// Render all CRDs as a multi-document YAML stream or a JSON array.
pub fn render_all(format: OutputFormat) -> Result<String, RenderError> {
    let crds = definitions();
    match format {
        OutputFormat::Yaml => {
            let mut out = String::new();
            for crd in &crds {
                out.push_str("---\n");
                out.push_str(&serde_yaml::to_string(crd)?);
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&crds)?),
    }
}
