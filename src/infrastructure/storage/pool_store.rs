//! JSON file store for the pool registry

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::domain::pool::{Pool, PoolManager};
use crate::shared::errors::PoolError;

/// Keeps the pool list in a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonPoolStore {
    path: PathBuf,
}

impl JsonPoolStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the registry; a missing file is an empty registry
    pub fn load(&self) -> Result<PoolManager, PoolError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No pool store at {}, starting empty", self.path.display());
                return Ok(PoolManager::new());
            }
            Err(e) => {
                return Err(PoolError::Store(format!("Failed to read {}: {}", self.path.display(), e)));
            }
        };

        let pools: Vec<Pool> = serde_json::from_str(&content)
            .map_err(|e| PoolError::Store(format!("Failed to parse {}: {}", self.path.display(), e)))?;
        Ok(PoolManager::from_pools(pools))
    }

    pub fn save(&self, manager: &PoolManager) -> Result<(), PoolError> {
        let content = serde_json::to_string_pretty(manager.get_pools())
            .map_err(|e| PoolError::Store(format!("Failed to serialize pools: {}", e)))?;
        fs::write(&self.path, content)
            .map_err(|e| PoolError::Store(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
