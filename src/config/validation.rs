use crate::error::{Result, SetlistError};
use regex::Regex;
use std::env;

/// Expand environment variables in a string using ${VAR_NAME} syntax.
/// Unset variables are left as written.
pub fn expand_env_var_in_string(value: &str) -> String {
    let re = match Regex::new(r"\$\{([^}]+)\}") {
        Ok(re) => re,
        Err(_) => return value.to_string(),
    };

    re.replace_all(value, |caps: &regex::Captures| {
        env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    })
    .into_owned()
}

/// Normalize a base URL: surrounding whitespace and trailing slashes go, and
/// the result must be an absolute http(s) URL.
pub fn normalize_base_url(value: &str) -> Result<String> {
    let trimmed = value.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(trimmed)
        .map_err(|e| SetlistError::ConfigError(format!("Invalid API URL '{}': {}", value, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        scheme => Err(SetlistError::ConfigError(format!(
            "Unsupported API URL scheme '{}' in '{}'",
            scheme, value
        ))),
    }
}

pub fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}
