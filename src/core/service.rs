use crate::artifacts::{StandardScaler, SvmClassifier};
use crate::config::ArtifactPaths;
use crate::domain::model::{PassengerRecord, FEATURE_COUNT};
use crate::domain::ports::{ArtifactStore, Classifier, Scaler};
use crate::utils::error::{PredictError, Result};

#[derive(Debug)]
enum ServiceState<S, C> {
    Ready { scaler: S, classifier: C },
    Unavailable { cause: String },
}

/// The inference wrapper. Constructed once at startup and injected into the
/// request path; artifacts are read-only after load, so shared use across
/// requests needs no locking.
///
/// Two states: `Ready` after a successful load, or terminal `Unavailable`
/// when the one-time load failed, in which case every predict call is
/// rejected without touching the artifacts again.
#[derive(Debug)]
pub struct SurvivalService<S: Scaler, C: Classifier> {
    state: ServiceState<S, C>,
}

impl SurvivalService<StandardScaler, SvmClassifier> {
    /// One-time artifact load. Never panics: a failed load yields a service
    /// that rejects every request with the captured cause.
    pub async fn load(store: &impl ArtifactStore, paths: &ArtifactPaths) -> Self {
        match Self::try_load(store, paths).await {
            Ok(service) => {
                tracing::info!("✅ Model and scaler loaded successfully");
                service
            }
            Err(e) => {
                tracing::error!("❌ Artifact load failed: {}", e);
                Self::unavailable(e.to_string())
            }
        }
    }

    /// Load both artifacts or neither. Any failure leaves no handle set.
    pub async fn try_load(store: &impl ArtifactStore, paths: &ArtifactPaths) -> Result<Self> {
        tracing::debug!("Loading scaler artifact: {}", paths.scaler_path);
        let scaler_bytes = store.read_artifact(&paths.scaler_path).await.map_err(|e| {
            PredictError::ArtifactLoadError {
                path: paths.scaler_path.clone(),
                reason: e.to_string(),
            }
        })?;
        let scaler = StandardScaler::from_json(&scaler_bytes).map_err(|e| {
            PredictError::ArtifactLoadError {
                path: paths.scaler_path.clone(),
                reason: e.to_string(),
            }
        })?;

        tracing::debug!("Loading classifier artifact: {}", paths.model_path);
        let model_bytes = store.read_artifact(&paths.model_path).await.map_err(|e| {
            PredictError::ArtifactLoadError {
                path: paths.model_path.clone(),
                reason: e.to_string(),
            }
        })?;
        let classifier = SvmClassifier::from_json(&model_bytes).map_err(|e| {
            PredictError::ArtifactLoadError {
                path: paths.model_path.clone(),
                reason: e.to_string(),
            }
        })?;

        // The pair must agree with each other and with the record layout.
        if scaler.n_features() != FEATURE_COUNT || classifier.n_features() != FEATURE_COUNT {
            return Err(PredictError::ArtifactLoadError {
                path: paths.model_path.clone(),
                reason: format!(
                    "artifact pair expects {}/{} features, records have {}",
                    scaler.n_features(),
                    classifier.n_features(),
                    FEATURE_COUNT
                ),
            });
        }

        Ok(Self::ready(scaler, classifier))
    }
}

impl<S: Scaler, C: Classifier> SurvivalService<S, C> {
    pub fn ready(scaler: S, classifier: C) -> Self {
        Self {
            state: ServiceState::Ready { scaler, classifier },
        }
    }

    pub fn unavailable(cause: impl Into<String>) -> Self {
        Self {
            state: ServiceState::Unavailable {
                cause: cause.into(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ServiceState::Ready { .. })
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.state {
            ServiceState::Unavailable { cause } => Some(cause),
            ServiceState::Ready { .. } => None,
        }
    }

    /// Survival probability for one record, as a percentage in [0, 100].
    /// A failure aborts only this request; the loaded artifacts stay valid.
    pub fn predict(&self, record: &PassengerRecord) -> Result<f64> {
        let (scaler, classifier) = match &self.state {
            ServiceState::Ready { scaler, classifier } => (scaler, classifier),
            ServiceState::Unavailable { cause } => {
                return Err(PredictError::UnavailableError {
                    reason: cause.clone(),
                })
            }
        };

        let features = record.to_feature_vector();
        let scaled = scaler.transform(&features)?;
        let [_, survived] = classifier.predict_proba(&scaled)?;

        let percentage = (survived * 100.0).clamp(0.0, 100.0);
        tracing::debug!("Predicted survival probability: {:.2}%", percentage);
        Ok(percentage)
    }
}
