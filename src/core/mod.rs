pub mod service;

pub use crate::domain::model::{PassengerRecord, FEATURE_COUNT, FEATURE_NAMES};
pub use crate::domain::ports::{ArtifactStore, Classifier, Scaler};
pub use crate::utils::error::Result;
pub use service::SurvivalService;
