use crate::domain::ports::ArtifactStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::path::Path;

/// Filesystem-backed artifact store. Paths are resolved against a base
/// directory so configuration can use short relative names.
#[derive(Debug, Clone)]
pub struct LocalArtifactStore {
    base_path: String,
}

impl LocalArtifactStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn read_artifact(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        tracing::debug!("Reading artifact from: {}", full_path.display());
        let data = fs::read(full_path)?;
        Ok(data)
    }
}
