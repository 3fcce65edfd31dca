use crate::domain::ports::Classifier;
use crate::utils::error::{PredictError, Result};
use serde::{Deserialize, Serialize};

/// SVM kernel, as exported with the artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Kernel {
    Linear {
        weights: Vec<f64>,
    },
    Rbf {
        gamma: f64,
        support_vectors: Vec<Vec<f64>>,
        dual_coef: Vec<f64>,
    },
}

/// Platt sigmoid parameters for mapping decision values to probabilities:
/// `p = 1 / (1 + exp(a * f + b))`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlattScaling {
    pub a: f64,
    pub b: f64,
}

/// A fitted binary SVM. Probability output is only available when the model
/// was exported with Platt calibration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SvmClassifier {
    kernel: Kernel,
    intercept: f64,
    platt: Option<PlattScaling>,
}

impl SvmClassifier {
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let model: SvmClassifier =
            serde_json::from_slice(data).map_err(|e| PredictError::InvalidArtifactError {
                reason: format!("not a valid classifier artifact: {}", e),
            })?;
        model.validate_shape()?;
        Ok(model)
    }

    #[cfg(test)]
    pub fn new(kernel: Kernel, intercept: f64, platt: Option<PlattScaling>) -> Self {
        Self {
            kernel,
            intercept,
            platt,
        }
    }

    fn validate_shape(&self) -> Result<()> {
        match &self.kernel {
            Kernel::Linear { weights } => {
                if weights.is_empty() {
                    return Err(PredictError::InvalidArtifactError {
                        reason: "linear kernel has no weights".to_string(),
                    });
                }
            }
            Kernel::Rbf {
                support_vectors,
                dual_coef,
                ..
            } => {
                if support_vectors.is_empty() || support_vectors.len() != dual_coef.len() {
                    return Err(PredictError::InvalidArtifactError {
                        reason: format!(
                            "rbf kernel has {} support vectors but {} dual coefficients",
                            support_vectors.len(),
                            dual_coef.len()
                        ),
                    });
                }
                let width = support_vectors[0].len();
                if width == 0 || support_vectors.iter().any(|sv| sv.len() != width) {
                    return Err(PredictError::InvalidArtifactError {
                        reason: "rbf support vectors have inconsistent widths".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Signed distance to the separating hyperplane.
    fn decision_function(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.n_features() {
            return Err(PredictError::PredictionError {
                reason: format!(
                    "expected {} features, got {}",
                    self.n_features(),
                    features.len()
                ),
            });
        }

        let value = match &self.kernel {
            Kernel::Linear { weights } => weights
                .iter()
                .zip(features.iter())
                .map(|(w, x)| w * x)
                .sum::<f64>(),
            Kernel::Rbf {
                gamma,
                support_vectors,
                dual_coef,
            } => support_vectors
                .iter()
                .zip(dual_coef.iter())
                .map(|(sv, alpha)| {
                    let sq_dist: f64 = sv
                        .iter()
                        .zip(features.iter())
                        .map(|(a, b)| (a - b) * (a - b))
                        .sum();
                    alpha * (-gamma * sq_dist).exp()
                })
                .sum::<f64>(),
        };

        Ok(value + self.intercept)
    }
}

impl Classifier for SvmClassifier {
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2]> {
        let platt = self
            .platt
            .as_ref()
            .ok_or_else(|| PredictError::PredictionError {
                reason: "model was exported without probability estimates".to_string(),
            })?;

        let decision = self.decision_function(features)?;
        let positive = 1.0 / (1.0 + (platt.a * decision + platt.b).exp());
        Ok([1.0 - positive, positive])
    }

    fn n_features(&self) -> usize {
        match &self.kernel {
            Kernel::Linear { weights } => weights.len(),
            Kernel::Rbf {
                support_vectors, ..
            } => support_vectors[0].len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_model() -> SvmClassifier {
        SvmClassifier::new(
            Kernel::Linear {
                weights: vec![1.0, -2.0],
            },
            0.5,
            Some(PlattScaling { a: -1.0, b: 0.0 }),
        )
    }

    #[test]
    fn test_linear_decision_function() {
        let model = linear_model();
        // 1*3 + (-2)*1 + 0.5
        assert!((model.decision_function(&[3.0, 1.0]).unwrap() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_proba_is_sigmoid_of_decision() {
        let model = linear_model();
        let [neg, pos] = model.predict_proba(&[3.0, 1.0]).unwrap();
        let expected = 1.0 / (1.0 + (-1.5f64).exp());
        assert!((pos - expected).abs() < 1e-12);
        assert!((neg + pos - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_proba_requires_platt_calibration() {
        let model = SvmClassifier::new(
            Kernel::Linear {
                weights: vec![1.0],
            },
            0.0,
            None,
        );
        let err = model.predict_proba(&[1.0]).unwrap_err();
        assert!(matches!(err, PredictError::PredictionError { .. }));
    }

    #[test]
    fn test_wrong_column_count_is_a_prediction_error() {
        let model = linear_model();
        let err = model.predict_proba(&[1.0]).unwrap_err();
        assert!(matches!(err, PredictError::PredictionError { .. }));
    }

    #[test]
    fn test_rbf_kernel() {
        let model = SvmClassifier::new(
            Kernel::Rbf {
                gamma: 0.5,
                support_vectors: vec![vec![0.0, 0.0], vec![1.0, 1.0]],
                dual_coef: vec![1.0, -1.0],
            },
            0.0,
            Some(PlattScaling { a: -1.0, b: 0.0 }),
        );
        // At a support vector the matching term dominates.
        let at_first = model.decision_function(&[0.0, 0.0]).unwrap();
        assert!(at_first > 0.0);
        let at_second = model.decision_function(&[1.0, 1.0]).unwrap();
        assert!(at_second < 0.0);
    }

    #[test]
    fn test_from_json_linear() {
        let model = SvmClassifier::from_json(
            br#"{
                "kernel": {"type": "linear", "weights": [0.1, 0.2, 0.3]},
                "intercept": -0.5,
                "platt": {"a": -1.7, "b": 0.05}
            }"#,
        )
        .unwrap();
        assert_eq!(model.n_features(), 3);
    }

    #[test]
    fn test_from_json_rejects_inconsistent_rbf() {
        let result = SvmClassifier::from_json(
            br#"{
                "kernel": {"type": "rbf", "gamma": 0.1, "support_vectors": [[1.0, 2.0]], "dual_coef": [1.0, 2.0]},
                "intercept": 0.0,
                "platt": null
            }"#,
        );
        assert!(result.is_err());
    }
}
