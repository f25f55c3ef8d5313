use crate::storage::FileBackend;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    path: Option<PathBuf>,
}

impl StorageConfig {
    pub fn path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(FileBackend::default_path)
    }
}
