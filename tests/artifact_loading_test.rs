use tempfile::TempDir;
use titanic_survival::{
    ArtifactPaths, EmbarkPort, LocalArtifactStore, PassengerRecord, PredictError, Sex,
    SurvivalService, TicketClass,
};

const SCALER_JSON: &str = r#"{
    "mean": [2.3086, 0.3524, 29.6991, 0.5258, 0.3816, 32.2042, 0.3614],
    "scale": [0.8347, 0.4777, 14.5265, 1.1027, 0.8057, 49.6655, 0.6358]
}"#;

const MODEL_JSON: &str = r#"{
    "kernel": {
        "type": "linear",
        "weights": [-0.8715, 1.2438, -0.3981, -0.2862, -0.0915, 0.1521, 0.0855]
    },
    "intercept": -0.4731,
    "platt": {"a": -1.6834, "b": 0.0452}
}"#;

fn any_record() -> PassengerRecord {
    PassengerRecord {
        class: TicketClass::Second,
        sex: Sex::Male,
        age: 40.0,
        siblings_spouses: 1,
        parents_children: 0,
        fare: 26.0,
        port: EmbarkPort::Southampton,
    }
}

#[tokio::test]
async fn test_missing_scaler_is_a_load_failure() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("model.json"), MODEL_JSON).unwrap();

    let store = LocalArtifactStore::new(dir.path().to_str().unwrap().to_string());
    let paths = ArtifactPaths {
        scaler_path: "scaler.json".to_string(),
        model_path: "model.json".to_string(),
    };

    let err = SurvivalService::try_load(&store, &paths).await.unwrap_err();
    match err {
        PredictError::ArtifactLoadError { path, .. } => assert_eq!(path, "scaler.json"),
        other => panic!("expected ArtifactLoadError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_corrupt_classifier_means_no_partial_success() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("scaler.json"), SCALER_JSON).unwrap();
    std::fs::write(dir.path().join("model.json"), "definitely not json").unwrap();

    let store = LocalArtifactStore::new(dir.path().to_str().unwrap().to_string());
    let paths = ArtifactPaths {
        scaler_path: "scaler.json".to_string(),
        model_path: "model.json".to_string(),
    };

    // The scaler loaded fine, but the pair is all-or-nothing.
    let err = SurvivalService::try_load(&store, &paths).await.unwrap_err();
    assert!(matches!(err, PredictError::ArtifactLoadError { .. }));
}

#[tokio::test]
async fn test_failed_load_disables_prediction_without_further_file_access() {
    let dir = TempDir::new().unwrap();
    let store = LocalArtifactStore::new(dir.path().to_str().unwrap().to_string());
    let paths = ArtifactPaths {
        scaler_path: "scaler.json".to_string(),
        model_path: "model.json".to_string(),
    };

    let service = SurvivalService::load(&store, &paths).await;
    assert!(!service.is_ready());

    // Remove the directory entirely: if predict touched the filesystem it
    // could not still produce the original load failure.
    drop(dir);

    for _ in 0..2 {
        let err = service.predict(&any_record()).unwrap_err();
        match err {
            PredictError::UnavailableError { reason } => {
                assert!(reason.contains("scaler.json"));
            }
            other => panic!("expected UnavailableError, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_mismatched_artifact_pair_is_rejected_at_load() {
    let dir = TempDir::new().unwrap();
    // A six-feature scaler cannot serve seven-feature records.
    std::fs::write(
        dir.path().join("scaler.json"),
        r#"{"mean": [0,0,0,0,0,0], "scale": [1,1,1,1,1,1]}"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("model.json"), MODEL_JSON).unwrap();

    let store = LocalArtifactStore::new(dir.path().to_str().unwrap().to_string());
    let paths = ArtifactPaths {
        scaler_path: "scaler.json".to_string(),
        model_path: "model.json".to_string(),
    };

    let err = SurvivalService::try_load(&store, &paths).await.unwrap_err();
    assert!(matches!(err, PredictError::ArtifactLoadError { .. }));
}

#[tokio::test]
async fn test_model_without_probability_support_fails_at_predict() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("scaler.json"), SCALER_JSON).unwrap();
    std::fs::write(
        dir.path().join("model.json"),
        r#"{
            "kernel": {
                "type": "linear",
                "weights": [-0.8715, 1.2438, -0.3981, -0.2862, -0.0915, 0.1521, 0.0855]
            },
            "intercept": -0.4731,
            "platt": null
        }"#,
    )
    .unwrap();

    let store = LocalArtifactStore::new(dir.path().to_str().unwrap().to_string());
    let paths = ArtifactPaths {
        scaler_path: "scaler.json".to_string(),
        model_path: "model.json".to_string(),
    };

    // Loads fine; only probability estimation is unsupported.
    let service = SurvivalService::load(&store, &paths).await;
    assert!(service.is_ready());

    let err = service.predict(&any_record()).unwrap_err();
    assert!(matches!(err, PredictError::PredictionError { .. }));

    // The failure aborts only that request; the service stays ready.
    assert!(service.is_ready());
}
