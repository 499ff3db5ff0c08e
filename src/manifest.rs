// Copyright 2024-2026 ServingRuntime Contributors
// SPDX-License-Identifier: Apache-2.0

//! Manifest loading for runtime resources.
//!
//! Accepts JSON or multi-document YAML. Each document is dispatched on its
//! `kind`; list kinds are expanded into their items.

use std::path::{Path, PathBuf};

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::k8s::{
    self, ClusterServingRuntime, ServingRuntime, ServingRuntimeSpec, CLUSTER_KIND, KIND,
};
use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("document {index}: missing apiVersion or kind")]
    MissingTypeMeta { index: usize },

    #[error("document {index}: unsupported apiVersion {api_version:?}")]
    UnsupportedApiVersion { index: usize, api_version: String },

    #[error("document {index}: unsupported kind {kind:?}")]
    UnsupportedKind { index: usize, kind: String },

    #[error("document {index}: {kind} requires an items list")]
    MissingItems { index: usize, kind: String },

    #[error("document {index}: invalid {kind}: {source}")]
    Invalid {
        index: usize,
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A decoded runtime resource of either scope.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeObject {
    ServingRuntime(ServingRuntime),
    ClusterServingRuntime(ClusterServingRuntime),
}

impl RuntimeObject {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ServingRuntime(_) => KIND,
            Self::ClusterServingRuntime(_) => CLUSTER_KIND,
        }
    }

    pub fn metadata(&self) -> &ObjectMeta {
        match self {
            Self::ServingRuntime(sr) => &sr.metadata,
            Self::ClusterServingRuntime(csr) => &csr.metadata,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata().name.as_deref()
    }

    pub fn spec(&self) -> &ServingRuntimeSpec {
        match self {
            Self::ServingRuntime(sr) => &sr.spec,
            Self::ClusterServingRuntime(csr) => &csr.spec,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.spec().validate()
    }

    /// `kind/name` reference for messages.
    pub fn reference(&self) -> String {
        format!(
            "{}/{}",
            self.kind().to_ascii_lowercase(),
            self.name().unwrap_or("<unnamed>")
        )
    }
}

/// Parse every runtime resource in `input`.
pub fn parse_str(input: &str) -> Result<Vec<RuntimeObject>, ManifestError> {
    let mut objects = Vec::new();
    for (index, document) in serde_yaml::Deserializer::from_str(input).enumerate() {
        let value = Value::deserialize(document)?;
        if value.is_null() {
            continue;
        }
        decode_document(index, value, &mut objects)?;
    }
    tracing::debug!(count = objects.len(), "parsed runtime manifests");
    Ok(objects)
}

/// Read and parse a manifest file.
pub fn load_file(path: &Path) -> Result<Vec<RuntimeObject>, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let objects = parse_str(&content)?;
    tracing::info!(path = %path.display(), count = objects.len(), "loaded manifest");
    Ok(objects)
}

fn decode_document(
    index: usize,
    value: Value,
    out: &mut Vec<RuntimeObject>,
) -> Result<(), ManifestError> {
    let (api_version, kind) = match (
        value.get("apiVersion").and_then(Value::as_str),
        value.get("kind").and_then(Value::as_str),
    ) {
        (Some(api_version), Some(kind)) => (api_version.to_string(), kind.to_string()),
        _ => return Err(ManifestError::MissingTypeMeta { index }),
    };

    if api_version != k8s::api_version() {
        return Err(ManifestError::UnsupportedApiVersion { index, api_version });
    }

    match kind.as_str() {
        KIND => out.push(RuntimeObject::ServingRuntime(decode(index, &kind, value)?)),
        CLUSTER_KIND => out.push(RuntimeObject::ClusterServingRuntime(decode(
            index, &kind, value,
        )?)),
        "ServingRuntimeList" | "ClusterServingRuntimeList" => {
            let item_kind = kind.trim_end_matches("List");
            let items = list_items(index, &kind, value)?;
            for item in items {
                decode_list_item(index, item_kind, item, out)?;
            }
        }
        _ => return Err(ManifestError::UnsupportedKind { index, kind }),
    }
    Ok(())
}

fn list_items(index: usize, kind: &str, mut value: Value) -> Result<Vec<Value>, ManifestError> {
    match value.get_mut("items").map(Value::take) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(ManifestError::MissingItems {
            index,
            kind: kind.to_string(),
        }),
    }
}

/// Items may omit `apiVersion`/`kind`; when present they must name the list's item type.
fn check_item_type_meta(index: usize, kind: &str, item: &Value) -> Result<(), ManifestError> {
    if let Some(api_version) = item.get("apiVersion") {
        if api_version.as_str() != Some(k8s::api_version().as_str()) {
            return Err(ManifestError::UnsupportedApiVersion {
                index,
                api_version: api_version.as_str().unwrap_or_default().to_string(),
            });
        }
    }
    if let Some(item_kind) = item.get("kind") {
        if item_kind.as_str() != Some(kind) {
            return Err(ManifestError::UnsupportedKind {
                index,
                kind: item_kind.as_str().unwrap_or_default().to_string(),
            });
        }
    }
    Ok(())
}

fn decode_list_item(
    index: usize,
    kind: &str,
    item: Value,
    out: &mut Vec<RuntimeObject>,
) -> Result<(), ManifestError> {
    check_item_type_meta(index, kind, &item)?;
    if kind == KIND {
        out.push(RuntimeObject::ServingRuntime(decode(index, kind, item)?));
    } else {
        let mut csr: ClusterServingRuntime = decode(index, kind, item)?;
        csr.api_version = k8s::api_version();
        csr.kind = CLUSTER_KIND.to_string();
        out.push(RuntimeObject::ClusterServingRuntime(csr));
    }
    Ok(())
}

fn decode<T: serde::de::DeserializeOwned>(
    index: usize,
    kind: &str,
    value: Value,
) -> Result<T, ManifestError> {
    serde_json::from_value(value).map_err(|source| ManifestError::Invalid {
        index,
        kind: kind.to_string(),
        source,
    })
}
