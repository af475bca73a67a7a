use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_DATA_DIR: &str = "data";

/// Durable key-value storage: string keys, string values, whole-value
/// overwrite. Synchronous on purpose; every operation runs to completion
/// inside the caller's event handler.
pub trait Storage: Send + Sync {
    /// Returns the stored value, or `None` if the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the value under `key`, creating it if absent.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-per-key storage: each key lives at `<dir>/<key>.json`.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Data directory from `REELMARK_DATA_DIR`, defaulting to `data`.
    pub fn from_env() -> Self {
        let dir =
            std::env::var("REELMARK_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        Self::new(dir)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.path_for(key);
        fs::write(&path, value)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
