pub mod app;
pub mod artifacts;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::form::FormRequest;
pub use artifacts::{LocalArtifactStore, StandardScaler, SvmClassifier};
pub use config::ArtifactPaths;
pub use core::service::SurvivalService;
pub use domain::model::{EmbarkPort, PassengerRecord, Sex, TicketClass};
pub use utils::error::{PredictError, Result};
