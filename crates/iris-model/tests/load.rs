use std::fs;
use std::path::{Path, PathBuf};

use iris_core::{class_label, FeatureRecord};
use iris_model::{Model, ModelError};

fn reference_artifact() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../model.json")
}

fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("iris-model-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn reference_artifact_classifies_canonical_samples() {
    let model = Model::load(reference_artifact()).unwrap();

    let cases = [
        (FeatureRecord::new(5.1, 3.5, 1.4, 0.2), "setosa"),
        (FeatureRecord::new(5.9, 3.0, 4.2, 1.5), "versicolor"),
        (FeatureRecord::new(6.7, 3.0, 5.2, 2.3), "virginica"),
    ];
    for (record, expected) in cases {
        let class = model.predict(&record).unwrap();
        assert_eq!(class_label(class), expected, "{:?}", record);
    }
}

#[test]
fn missing_file_reports_path() {
    let path = scratch_dir().join("model.json");
    let err = Model::load(&path).unwrap_err();
    match err {
        ModelError::NotFound { path: reported } => assert_eq!(reported, path.display().to_string()),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn garbage_file_is_a_parse_error() {
    let path = scratch_dir().join("model.json");
    fs::write(&path, b"\x80\x04\x95 not json").unwrap();
    let err = Model::load(&path).unwrap_err();
    assert!(matches!(err, ModelError::Io { .. } | ModelError::Parse(_)));
}

#[test]
fn structurally_invalid_artifact_is_rejected() {
    let path = scratch_dir().join("model.json");
    fs::write(
        &path,
        r#"{
            "feature_names": ["sepal_length", "sepal_width", "petal_length", "petal_width"],
            "estimator": {"kind": "decision_tree", "nodes": [{"split": {"feature": 0, "threshold": 1.0, "left": 0, "right": 0}}]}
        }"#,
    )
    .unwrap();
    assert!(matches!(Model::load(&path), Err(ModelError::Invalid(_))));
}

#[test]
fn out_of_domain_class_is_returned_unchanged() {
    let model = Model::from_json(
        r#"{
            "feature_names": ["sepal_length", "sepal_width", "petal_length", "petal_width"],
            "estimator": {"kind": "decision_tree", "nodes": [{"leaf": {"class": 3}}]}
        }"#,
    )
    .unwrap();
    let class = model.predict(&FeatureRecord::new(5.1, 3.5, 1.4, 0.2)).unwrap();
    assert_eq!(class, 3);
    assert_eq!(class_label(class), "Unknown");
}
