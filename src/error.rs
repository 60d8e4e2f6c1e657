use std::fmt;

#[derive(Debug)]
pub enum SetlistError {
    /// Non-2xx response. `message` is the `error` field of the body, when the
    /// backend sent one.
    Api {
        status: u16,
        message: Option<String>,
    },
    ConfigError(String),
    StorageError(String),
    NetworkError(reqwest::Error),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    Other(String),
}

impl SetlistError {
    /// Text for a view's error slot: the backend message if there was one,
    /// otherwise `fallback`. Every other failure class collapses to the
    /// fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            SetlistError::Api {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            SetlistError::Api { status, .. } => Some(*status),
            SetlistError::NetworkError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl fmt::Display for SetlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetlistError::Api {
                status,
                message: Some(message),
            } => write!(f, "API error (status {}): {}", status, message),
            SetlistError::Api {
                status,
                message: None,
            } => write!(f, "API error (status {})", status),
            SetlistError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SetlistError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            SetlistError::NetworkError(e) => write!(f, "Network error: {}", e),
            SetlistError::IoError(e) => write!(f, "IO error: {}", e),
            SetlistError::JsonError(e) => write!(f, "JSON error: {}", e),
            SetlistError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SetlistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetlistError::NetworkError(e) => Some(e),
            SetlistError::IoError(e) => Some(e),
            SetlistError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SetlistError {
    fn from(err: reqwest::Error) -> Self {
        SetlistError::NetworkError(err)
    }
}

impl From<std::io::Error> for SetlistError {
    fn from(err: std::io::Error) -> Self {
        SetlistError::IoError(err)
    }
}

impl From<serde_json::Error> for SetlistError {
    fn from(err: serde_json::Error) -> Self {
        SetlistError::JsonError(err)
    }
}

impl From<anyhow::Error> for SetlistError {
    fn from(err: anyhow::Error) -> Self {
        SetlistError::ConfigError(err.to_string())
    }
}

impl From<String> for SetlistError {
    fn from(msg: String) -> Self {
        SetlistError::Other(msg)
    }
}

pub type Result<T> = std::result::Result<T, SetlistError>;
