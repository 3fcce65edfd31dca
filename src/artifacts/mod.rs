// Concrete artifact implementations: the filesystem store and the two
// deserialized model objects the service runs against.

pub mod classifier;
pub mod scaler;
pub mod store;

pub use classifier::SvmClassifier;
pub use scaler::StandardScaler;
pub use store::LocalArtifactStore;
