use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictError {
    #[error("Failed to load artifact from {path}: {reason}")]
    ArtifactLoadError { path: String, reason: String },

    #[error("Invalid artifact: {reason}")]
    InvalidArtifactError { reason: String },

    #[error("Model artifacts unavailable: {reason}")]
    UnavailableError { reason: String },

    #[error("Feature scaling failed: {reason}")]
    ScalingError { reason: String },

    #[error("Prediction failed: {reason}")]
    PredictionError { reason: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PredictError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Artifact,
    Inference,
    Validation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PredictError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PredictError::ArtifactLoadError { .. }
            | PredictError::InvalidArtifactError { .. }
            | PredictError::UnavailableError { .. } => ErrorCategory::Artifact,
            PredictError::ScalingError { .. } | PredictError::PredictionError { .. } => {
                ErrorCategory::Inference
            }
            PredictError::ValidationError { .. } => ErrorCategory::Validation,
            PredictError::ConfigError { .. }
            | PredictError::InvalidConfigValueError { .. }
            | PredictError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PredictError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A failed load disables prediction for the whole process.
            PredictError::ArtifactLoadError { .. }
            | PredictError::InvalidArtifactError { .. }
            | PredictError::UnavailableError { .. } => ErrorSeverity::Critical,
            PredictError::ScalingError { .. } | PredictError::PredictionError { .. } => {
                ErrorSeverity::High
            }
            // Submit-time validation is a warning, the form stays usable.
            PredictError::ValidationError { .. } => ErrorSeverity::Low,
            PredictError::ConfigError { .. }
            | PredictError::InvalidConfigValueError { .. }
            | PredictError::MissingConfigError { .. } => ErrorSeverity::Medium,
            PredictError::IoError(_) => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PredictError::ArtifactLoadError { path, .. } => format!(
                "Check that '{}' exists and holds a valid JSON model artifact",
                path
            ),
            PredictError::InvalidArtifactError { .. } => {
                "Re-export the scaler/model pair; the file contents are not a valid artifact"
                    .to_string()
            }
            PredictError::UnavailableError { .. } => {
                "Fix the artifact paths and restart; prediction stays disabled until then"
                    .to_string()
            }
            PredictError::ScalingError { .. } => {
                "Verify the record has exactly the feature columns the scaler was fit on"
                    .to_string()
            }
            PredictError::PredictionError { .. } => {
                "Use a model exported with probability estimates enabled".to_string()
            }
            PredictError::ValidationError { .. } => {
                "Correct the highlighted field and submit again".to_string()
            }
            PredictError::ConfigError { .. }
            | PredictError::InvalidConfigValueError { .. }
            | PredictError::MissingConfigError { .. } => {
                "Pass --scaler-path/--model-path, set the SURVIVAL_* env vars, or point --config at a TOML file"
                    .to_string()
            }
            PredictError::IoError(_) => {
                "Check filesystem permissions and paths".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PredictError::ArtifactLoadError { .. }
            | PredictError::InvalidArtifactError { .. }
            | PredictError::UnavailableError { .. } => {
                format!("Could not load the model or scaler. {}", self)
            }
            PredictError::ScalingError { .. } => format!("Could not scale the input data. {}", self),
            PredictError::PredictionError { .. } => {
                format!("Could not compute a prediction. {}", self)
            }
            PredictError::ValidationError { message } => message.clone(),
            PredictError::ConfigError { .. }
            | PredictError::InvalidConfigValueError { .. }
            | PredictError::MissingConfigError { .. } => format!("Configuration problem: {}", self),
            PredictError::IoError(e) => format!("File access problem: {}", e),
        }
    }
}
