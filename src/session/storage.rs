use crate::error::Result;

/// Trait for persistent key/value storage backends
pub trait Storage: Send + Sync {
    /// Read a value. A missing key is `Ok(None)`.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}
