use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Storage file. `${VAR}` references are expanded.
    #[serde(default)]
    pub path: Option<String>,
}
