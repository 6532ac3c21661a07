//! Durable key-value blob storage
//!
//! The store mirrors each collection into a single string value under a fixed
//! key. [`FileStore`] keeps one `<key>.json` file per key in the data
//! directory; [`MemoryStore`] keeps values in a map and backs tests and
//! `--ephemeral` sessions.

use crate::core::error::{Error, Result};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Flat string storage addressed by logical keys
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed storage rooted at a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage in the user's XDG data directory
    pub fn in_data_dir() -> Result<Self> {
        crate::utils::get_data_dir()
            .map(Self::new)
            .ok_or(Error::DataDirUnavailable)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes through a temp file in the same directory, then renames it over
    /// the target so a crash never leaves a half-written entry.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        let mut temp = tempfile::NamedTempFile::new_in(&self.dir)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }

        temp.write_all(value.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(self.path_for(key)).map_err(|e| e.error)?;
        Ok(())
    }
}

/// In-process storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose writes always fail, as when quota is exhausted
    pub fn unavailable() -> Self {
        Self {
            entries: HashMap::new(),
            unavailable: true,
        }
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.unavailable {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::StorageFull,
                "storage quota exceeded",
            )));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
