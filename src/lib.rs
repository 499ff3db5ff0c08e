//! ServingRuntime resource model
//!
//! Typed definitions for the `serving.kserve.io/v1alpha1` ServingRuntime and
//! ClusterServingRuntime resources, which describe how model-serving
//! containers are deployed.
//!
//! # Components
//!
//! - [`k8s`]: resource types, endpoints and CRD generation
//! - [`validation`]: pure structural validation with field-path errors
//! - [`manifest`]: JSON / multi-document YAML loading
//! - [`registry`]: in-memory store that only accepts valid runtimes
//!
//! Reconciliation, scheduling and runtime selection live elsewhere; this crate
//! is the input contract they consume.

pub mod cli;
pub mod config;
pub mod k8s;
pub mod manifest;
pub mod registry;
pub mod telemetry;
pub mod validation;

pub use k8s::{
    BuiltInAdapter, ClusterServingRuntime, Container, Endpoint, Framework, ServerType,
    ServingRuntime, ServingRuntimeSpec,
};
pub use manifest::RuntimeObject;
pub use registry::{ApplyOutcome, RuntimeRegistry};
pub use validation::{FieldError, FieldErrorKind, ValidationError};
