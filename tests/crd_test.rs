//! Generated CustomResourceDefinitions.

use kube::core::CustomResourceExt;
use serde_json::Value;
use serving_runtime::config::OutputFormat;
use serving_runtime::k8s::crd;
use serving_runtime::{ClusterServingRuntime, ServingRuntime};

fn spec_properties(crd: &Value) -> &serde_json::Map<String, Value> {
    crd.pointer("/spec/versions/0/schema/openAPIV3Schema/properties/spec/properties")
        .and_then(Value::as_object)
        .expect("spec schema properties")
}

#[test]
fn namespaced_crd_identity() {
    let crd = ServingRuntime::crd();
    assert_eq!(crd.spec.group, "serving.kserve.io");
    assert_eq!(crd.spec.scope, "Namespaced");
    assert_eq!(crd.spec.names.kind, "ServingRuntime");
    assert_eq!(crd.spec.names.plural, "servingruntimes");
    assert_eq!(crd.spec.versions[0].name, "v1alpha1");
}

#[test]
fn pod_spec_fields_are_flattened_into_spec_schema() {
    let crd = serde_json::to_value(ServingRuntime::crd()).unwrap();
    let props = spec_properties(&crd);
    for field in [
        "supportedModelTypes",
        "disabled",
        "containers",
        "nodeSelector",
        "affinity",
        "tolerations",
        "grpcEndpoint",
        "grpcDataEndpoint",
        "httpDataEndpoint",
        "replicas",
        "storageHelper",
        "builtInAdapter",
    ] {
        assert!(props.contains_key(field), "missing {field}");
    }
    assert!(!props.contains_key("podSpec"));
}

#[test]
fn server_type_schema_is_closed_enum() {
    let crd = serde_json::to_value(ServingRuntime::crd()).unwrap();
    let server_type = &spec_properties(&crd)["builtInAdapter"]["properties"]["serverType"];
    let mut values: Vec<_> = server_type["enum"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    values.sort_unstable();
    assert_eq!(values, ["mlserver", "triton"]);
}

#[test]
fn printer_columns_present() {
    let crd = ServingRuntime::crd();
    let columns: Vec<_> = crd.spec.versions[0]
        .additional_printer_columns
        .as_ref()
        .unwrap()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(columns, ["Disabled", "ModelType", "Containers", "Age"]);
}

#[test]
fn cluster_crd_reuses_schema() {
    let namespaced = ServingRuntime::crd();
    let cluster = ClusterServingRuntime::crd();
    assert_eq!(cluster.spec.scope, "Cluster");
    assert_eq!(cluster.spec.names.list_kind.as_deref(), Some("ClusterServingRuntimeList"));
    assert_eq!(cluster.spec.versions, namespaced.spec.versions);
}

#[test]
fn render_all_yaml_parses_back() {
    let yaml = crd::render_all(OutputFormat::Yaml).unwrap();
    let docs: Vec<Value> = serde_yaml::Deserializer::from_str(&yaml)
        .map(|doc| serde::Deserialize::deserialize(doc).unwrap())
        .filter(|v: &Value| !v.is_null())
        .collect();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1]["spec"]["scope"], "Cluster");
}
