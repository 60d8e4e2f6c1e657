mod api;
mod defaults;
mod storage;
mod validation;

use crate::cli::Args;
use crate::error::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use api::ApiConfig;
pub use storage::StorageConfig;
pub use validation::{expand_env_var_in_string, normalize_base_url, parse_flag};

pub const ENV_API_URL: &str = "SETLIST_API_URL";
pub const ENV_STORAGE_PATH: &str = "SETLIST_STORAGE_PATH";
pub const ENV_VERBOSE: &str = "SETLIST_VERBOSE";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub storage_path: Option<PathBuf>,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub verbose: Option<bool>,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self> {
        let file_config = FileConfig::load()?;
        Self::resolve(args.api_url.clone(), args.verbose, &file_config, |key| {
            env::var(key).ok()
        })
    }

    /// Merge the layers: CLI args > env vars > config file > default.
    pub fn resolve(
        cli_api_url: Option<String>,
        cli_verbose: bool,
        file_config: &FileConfig,
        env_var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let api_base_url = cli_api_url
            .or_else(|| env_var(ENV_API_URL))
            .or_else(|| file_config.api.base_url.clone())
            .unwrap_or_else(defaults::default_base_url);
        let api_base_url = normalize_base_url(&api_base_url)?;

        let storage_path = env_var(ENV_STORAGE_PATH)
            .or_else(|| file_config.storage.path.clone())
            .map(|p| expand_env_var_in_string(&p))
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let verbose = cli_verbose
            || env_var(ENV_VERBOSE)
                .map(|v| parse_flag(&v))
                .or(file_config.verbose)
                .unwrap_or_else(defaults::default_verbose);

        Ok(Config {
            api_base_url,
            storage_path,
            verbose,
        })
    }
}

impl FileConfig {
    pub fn load() -> anyhow::Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        // No config file found, return default
        Ok(FileConfig::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|s| s.to_str());
        let config = if matches!(extension, Some("yaml") | Some("yml")) {
            serde_yaml::from_str(&contents).with_context(|| {
                format!("Failed to parse YAML config file: {}", path.display())
            })?
        } else {
            serde_json::from_str(&contents).with_context(|| {
                format!("Failed to parse JSON config file: {}", path.display())
            })?
        };

        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            // Current directory takes precedence over the global config
            PathBuf::from(".setlist.yaml"),
            PathBuf::from(".setlist.yml"),
            PathBuf::from(".setlist.json"),
        ];

        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("setlist");
            paths.push(config_dir.join("setlist.yaml"));
            paths.push(config_dir.join("setlist.yml"));
            paths.push(config_dir.join("setlist.json"));
        }

        paths
    }
}
