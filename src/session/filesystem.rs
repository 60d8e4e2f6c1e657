use super::storage::Storage;
use crate::error::{Result, SetlistError};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const STORAGE_FILE: &str = "storage.json";

/// Stores every key in a single JSON object on disk.
pub struct FilesystemStorage {
    path: PathBuf,
}

impl FilesystemStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.cache/setlist/storage.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".cache").join("setlist").join(STORAGE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Like `read_all`, but a file that no longer parses is replaced by the
    /// next write instead of blocking it.
    fn read_for_write(&self) -> Result<BTreeMap<String, String>> {
        match self.read_all() {
            Err(SetlistError::JsonError(_)) => Ok(BTreeMap::new()),
            other => other,
        }
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
            if dir.exists() && !dir.is_dir() {
                return Err(SetlistError::StorageError(format!(
                    "{} is not a directory",
                    dir.display()
                )));
            }
        }
        let content = serde_json::to_string_pretty(items)?;
        let mut file = open_private(&self.path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

/// The file holds the bearer token, so it is readable by the owner only.
#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // `mode` only applies on creation
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

impl Storage for FilesystemStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read_for_write()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.read_for_write()?;
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }
}
