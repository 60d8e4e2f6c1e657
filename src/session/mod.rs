mod filesystem;
mod memory;
mod storage;
mod store;

pub use filesystem::FilesystemStorage;
pub use memory::MemoryStorage;
pub use storage::Storage;
pub use store::{SessionStore, TOKEN_KEY, USERNAME_KEY};

use std::path::PathBuf;
use std::sync::Arc;

/// Storage for the configured path, or in-memory storage when no home
/// directory can be found.
pub fn open_storage(path: Option<PathBuf>) -> Arc<dyn Storage> {
    match path.or_else(FilesystemStorage::default_path) {
        Some(path) => Arc::new(FilesystemStorage::new(path)),
        None => Arc::new(MemoryStorage::new()),
    }
}
