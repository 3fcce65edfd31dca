use crate::domain::ports::Scaler;
use crate::utils::error::{PredictError, Result};
use serde::{Deserialize, Serialize};

/// A fitted standard scaler: per-feature mean and scale, applied as
/// `(x - mean) / scale`. Deserialized from a JSON artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let scaler: StandardScaler =
            serde_json::from_slice(data).map_err(|e| PredictError::InvalidArtifactError {
                reason: format!("not a valid scaler artifact: {}", e),
            })?;
        scaler.validate_shape()?;
        Ok(scaler)
    }

    #[cfg(test)]
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self { mean, scale }
    }

    fn validate_shape(&self) -> Result<()> {
        if self.mean.is_empty() || self.mean.len() != self.scale.len() {
            return Err(PredictError::InvalidArtifactError {
                reason: format!(
                    "scaler mean/scale lengths differ or are empty ({} vs {})",
                    self.mean.len(),
                    self.scale.len()
                ),
            });
        }
        for (i, s) in self.scale.iter().enumerate() {
            if !s.is_finite() || *s == 0.0 {
                return Err(PredictError::InvalidArtifactError {
                    reason: format!("scaler scale[{}] is {}, cannot divide by it", i, s),
                });
            }
        }
        Ok(())
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != self.mean.len() {
            return Err(PredictError::ScalingError {
                reason: format!(
                    "expected {} features, got {}",
                    self.mean.len(),
                    features.len()
                ),
            });
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (m, s))| (x - m) / s)
            .collect())
    }

    fn n_features(&self) -> usize {
        self.mean.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_centers_and_scales() {
        let scaler = StandardScaler::new(vec![10.0, 0.0], vec![2.0, 4.0]);
        let scaled = scaler.transform(&[14.0, 2.0]).unwrap();
        assert_eq!(scaled, vec![2.0, 0.5]);
    }

    #[test]
    fn test_transform_rejects_wrong_column_count() {
        let scaler = StandardScaler::new(vec![0.0, 0.0], vec![1.0, 1.0]);
        let err = scaler.transform(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, PredictError::ScalingError { .. }));
    }

    #[test]
    fn test_from_json() {
        let scaler =
            StandardScaler::from_json(br#"{"mean": [1.0, 2.0], "scale": [0.5, 2.0]}"#).unwrap();
        assert_eq!(scaler.n_features(), 2);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(StandardScaler::from_json(b"not json").is_err());
        assert!(StandardScaler::from_json(br#"{"mean": [1.0], "scale": []}"#).is_err());
        assert!(StandardScaler::from_json(br#"{"mean": [1.0], "scale": [0.0]}"#).is_err());
    }
}
