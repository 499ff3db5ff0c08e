// Copyright 2024-2026 ServingRuntime Contributors
// SPDX-License-Identifier: Apache-2.0

//! In-memory registry of accepted serving runtimes.
//!
//! Only structurally valid objects are stored. Namespaced runtimes are keyed by
//! `(namespace, name)`, cluster runtimes by `name`.

use std::collections::BTreeMap;
use std::fmt;

use parking_lot::RwLock;
use thiserror::Error;

use crate::config::DEFAULT_NAMESPACE;
use crate::k8s::{ClusterServingRuntime, ServingRuntime};
use crate::manifest::RuntimeObject;
use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{kind} has no metadata.name")]
    MissingName { kind: &'static str },

    #[error("{reference} rejected: {source}")]
    Invalid {
        reference: String,
        #[source]
        source: ValidationError,
    },
}

/// Result of applying an object, in `kubectl apply` terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Created,
    Configured,
    Unchanged,
}

impl fmt::Display for ApplyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::Configured => "configured",
            Self::Unchanged => "unchanged",
        })
    }
}

/// Thread-safe store of ServingRuntime and ClusterServingRuntime objects.
pub struct RuntimeRegistry {
    namespaced: RwLock<BTreeMap<(String, String), ServingRuntime>>,
    cluster: RwLock<BTreeMap<String, ClusterServingRuntime>>,
    default_namespace: String,
}

impl RuntimeRegistry {
    pub fn new() -> Self {
        Self::with_default_namespace(DEFAULT_NAMESPACE)
    }

    /// Registry that files namespace-less runtimes under `namespace`.
    pub fn with_default_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespaced: RwLock::new(BTreeMap::new()),
            cluster: RwLock::new(BTreeMap::new()),
            default_namespace: namespace.into(),
        }
    }

    /// Validate and store either kind.
    pub fn apply(&self, object: RuntimeObject) -> Result<ApplyOutcome, RegistryError> {
        match object {
            RuntimeObject::ServingRuntime(sr) => self.apply_namespaced(sr),
            RuntimeObject::ClusterServingRuntime(csr) => self.apply_cluster(csr),
        }
    }

    /// Validate and create or replace a namespaced runtime.
    pub fn apply_namespaced(&self, mut runtime: ServingRuntime) -> Result<ApplyOutcome, RegistryError> {
        let name = runtime
            .metadata
            .name
            .clone()
            .ok_or(RegistryError::MissingName { kind: crate::k8s::KIND })?;
        let namespace = runtime
            .metadata
            .namespace
            .get_or_insert_with(|| self.default_namespace.clone())
            .clone();

        runtime.validate().map_err(|source| {
            tracing::warn!(%namespace, %name, %source, "rejected ServingRuntime");
            RegistryError::Invalid {
                reference: format!("servingruntime/{}", name),
                source,
            }
        })?;

        let mut store = self.namespaced.write();
        let key = (namespace, name);
        let outcome = match store.get(&key) {
            None => ApplyOutcome::Created,
            Some(existing) if *existing == runtime => ApplyOutcome::Unchanged,
            Some(_) => ApplyOutcome::Configured,
        };
        tracing::info!(namespace = %key.0, name = %key.1, %outcome, "applied ServingRuntime");
        store.insert(key, runtime);
        Ok(outcome)
    }

    /// Validate and create or replace a cluster runtime.
    pub fn apply_cluster(&self, runtime: ClusterServingRuntime) -> Result<ApplyOutcome, RegistryError> {
        let name = runtime
            .metadata
            .name
            .clone()
            .ok_or(RegistryError::MissingName { kind: crate::k8s::CLUSTER_KIND })?;

        runtime.validate().map_err(|source| {
            tracing::warn!(%name, %source, "rejected ClusterServingRuntime");
            RegistryError::Invalid {
                reference: format!("clusterservingruntime/{}", name),
                source,
            }
        })?;

        let mut store = self.cluster.write();
        let outcome = match store.get(&name) {
            None => ApplyOutcome::Created,
            Some(existing) if *existing == runtime => ApplyOutcome::Unchanged,
            Some(_) => ApplyOutcome::Configured,
        };
        tracing::info!(%name, %outcome, "applied ClusterServingRuntime");
        store.insert(name, runtime);
        Ok(outcome)
    }

    pub fn get(&self, namespace: &str, name: &str) -> Option<ServingRuntime> {
        self.namespaced
            .read()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
    }

    pub fn get_cluster(&self, name: &str) -> Option<ClusterServingRuntime> {
        self.cluster.read().get(name).cloned()
    }

    pub fn delete(&self, namespace: &str, name: &str) -> Option<ServingRuntime> {
        let removed = self
            .namespaced
            .write()
            .remove(&(namespace.to_string(), name.to_string()));
        if removed.is_some() {
            tracing::info!(%namespace, %name, "deleted ServingRuntime");
        }
        removed
    }

    pub fn delete_cluster(&self, name: &str) -> Option<ClusterServingRuntime> {
        let removed = self.cluster.write().remove(name);
        if removed.is_some() {
            tracing::info!(%name, "deleted ClusterServingRuntime");
        }
        removed
    }

    /// Namespaced runtimes ordered by namespace then name, optionally filtered.
    pub fn list(&self, namespace: Option<&str>) -> Vec<ServingRuntime> {
        self.namespaced
            .read()
            .iter()
            .filter(|((ns, _), _)| namespace.map_or(true, |want| ns == want))
            .map(|(_, runtime)| runtime.clone())
            .collect()
    }

    pub fn list_cluster(&self) -> Vec<ClusterServingRuntime> {
        self.cluster.read().values().cloned().collect()
    }

    /// Total number of stored runtimes of both kinds.
    pub fn len(&self) -> usize {
        self.namespaced.read().len() + self.cluster.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RuntimeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
