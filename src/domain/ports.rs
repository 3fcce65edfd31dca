use crate::utils::error::Result;
use async_trait::async_trait;

/// Read access to serialized model artifacts.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn read_artifact(&self, path: &str) -> Result<Vec<u8>>;
}

/// A fitted feature transform. Input length must match what the transform
/// was fit on.
pub trait Scaler: Send + Sync {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>>;

    /// Number of features the transform was fit on.
    fn n_features(&self) -> usize;
}

/// A fitted binary classifier with probability output. Index 0 is the
/// negative ("did not survive") class, index 1 the positive class.
pub trait Classifier: Send + Sync {
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2]>;

    fn n_features(&self) -> usize;
}
