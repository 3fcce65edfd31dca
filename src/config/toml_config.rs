use crate::config::ArtifactPaths;
use crate::utils::error::{PredictError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML config file, for deployments where flags and env vars are awkward:
///
/// ```toml
/// [artifacts]
/// scaler_path = "artifacts/scaler.json"
/// model_path = "artifacts/model.json"
///
/// [logging]
/// verbose = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub artifacts: ArtifactPaths,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PredictError::ConfigError {
            message: format!("cannot read config file {}: {}", path.display(), e),
        })?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig =
            toml::from_str(content).map_err(|e| PredictError::ConfigError {
                message: format!("invalid config file: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.artifacts.validate()
    }
}
