#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};

/// Resolved locations of the two fitted artifacts. Always configuration,
/// never hard-coded: flags and env vars win over a TOML config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactPaths {
    pub scaler_path: String,
    pub model_path: String,
}

impl Validate for ArtifactPaths {
    fn validate(&self) -> Result<()> {
        validate_path("scaler_path", &self.scaler_path)?;
        validate_path("model_path", &self.model_path)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;
