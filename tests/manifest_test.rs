//! Loading runtime manifests from files and validating them end to end.

use std::io::Write;
use std::path::PathBuf;

use serving_runtime::cli::validate_paths;
use serving_runtime::config::EnvConfig;
use serving_runtime::manifest::{self, ManifestError, RuntimeObject};

const RUNTIMES: &str = r#"
apiVersion: serving.kserve.io/v1alpha1
kind: ClusterServingRuntime
metadata:
  name: mlserver-0.x
spec:
  supportedModelTypes:
    - name: sklearn
      version: "0"
    - name: xgboost
      version: "1"
  grpcEndpoint: "port:8085"
  grpcDataEndpoint: "port:8001"
  containers:
    - name: mlserver
      image: seldonio/mlserver:0.5.2
      env:
        - name: MLSERVER_MODELS_DIR
          value: "/models/_mlserver_models/"
      resources:
        requests:
          cpu: 500m
          memory: 1Gi
  builtInAdapter:
    serverType: mlserver
    runtimeManagementPort: 8001
    memBufferBytes: 134217728
    modelLoadingTimeoutMillis: 90000
---
apiVersion: serving.kserve.io/v1alpha1
kind: ServingRuntimeList
metadata: {}
items:
  - metadata:
      name: triton-2.x
      namespace: team-a
    spec:
      containers:
        - name: triton
          image: nvcr.io/nvidia/tritonserver:21.06.1-py3
  - metadata:
      name: custom
    spec:
      disabled: true
      containers:
        - name: server
          image: example.com/custom-runtime:1.0
"#;

fn write_manifest(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn load_file_expands_lists() {
    let file = write_manifest(RUNTIMES);
    let objects = manifest::load_file(file.path()).unwrap();

    let refs: Vec<_> = objects.iter().map(RuntimeObject::reference).collect();
    assert_eq!(
        refs,
        [
            "clusterservingruntime/mlserver-0.x",
            "servingruntime/triton-2.x",
            "servingruntime/custom",
        ]
    );
    assert!(objects.iter().all(|o| o.validate().is_ok()));
    assert!(objects[2].spec().is_disabled());
}

#[test]
fn load_missing_file_reports_path() {
    let err = manifest::load_file(&PathBuf::from("/does/not/exist.yaml")).unwrap_err();
    assert!(matches!(err, ManifestError::Io { .. }));
    assert!(err.to_string().contains("/does/not/exist.yaml"));
}

#[test]
fn validate_paths_accepts_valid_manifests() {
    let file = write_manifest(RUNTIMES);
    let report = validate_paths(&[file.path().to_path_buf()], &EnvConfig::default());
    assert!(report.is_ok(), "{:?}", report.rejected);
    assert_eq!(report.accepted.len(), 3);
    assert!(report.accepted.iter().all(|(_, outcome)| outcome == "created"));
}

#[test]
fn validate_paths_reports_invalid_runtime() {
    let file = write_manifest(
        r#"
apiVersion: serving.kserve.io/v1alpha1
kind: ServingRuntime
metadata:
  name: mismatched
spec:
  containers:
    - name: mlserver
      image: seldonio/mlserver:1.3.2
  builtInAdapter:
    serverType: triton
"#,
    );
    let report = validate_paths(&[file.path().to_path_buf()], &EnvConfig::default());
    assert!(!report.is_ok());
    let (reference, message) = &report.rejected[0];
    assert_eq!(reference, "servingruntime/mismatched");
    assert!(message.contains("spec.builtInAdapter.serverType"), "{message}");
}

#[test]
fn reapplying_same_object_is_unchanged() {
    let file = write_manifest(RUNTIMES);
    let path = file.path().to_path_buf();
    let report = validate_paths(&[path.clone(), path], &EnvConfig::default());
    assert!(report.is_ok());
    assert_eq!(report.accepted.len(), 6);
    assert!(report.accepted[3..].iter().all(|(_, outcome)| outcome == "unchanged"));
}

#[test]
fn validate_paths_rejects_list_without_items() {
    let file = write_manifest(
        "apiVersion: serving.kserve.io/v1alpha1\nkind: ServingRuntimeList\nmetadata: {}\n",
    );
    let report = validate_paths(&[file.path().to_path_buf()], &EnvConfig::default());
    assert!(!report.is_ok());
    assert!(report.accepted.is_empty());
    assert!(report.rejected[0].1.contains("requires an items list"), "{:?}", report.rejected);
}

#[test]
fn validate_paths_rejects_foreign_list_item() {
    let file = write_manifest(
        r#"
apiVersion: serving.kserve.io/v1alpha1
kind: ClusterServingRuntimeList
items:
  - apiVersion: apps/v1
    kind: Deployment
    metadata:
      name: not-a-runtime
    spec:
      containers:
        - name: mlserver
          image: seldonio/mlserver:1.3.2
"#,
    );
    let report = validate_paths(&[file.path().to_path_buf()], &EnvConfig::default());
    assert!(!report.is_ok());
    assert!(report.accepted.is_empty());
    assert!(report.rejected[0].1.contains("apps/v1"), "{:?}", report.rejected);
}
