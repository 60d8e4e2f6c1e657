use super::storage::Storage;
use crate::models::Session;
use crate::observable::Observable;
use crate::ui::log;
use std::sync::Arc;

pub const TOKEN_KEY: &str = "jwt";
pub const USERNAME_KEY: &str = "username";

/// Holds the current token and username, mirrored to persistent storage.
///
/// Storage failures never surface: an unreadable store is an empty session
/// and a failed write only leaves the in-memory state updated.
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    token: Observable<Option<String>>,
    username: Observable<Option<String>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let token = safe_get(storage.as_ref(), TOKEN_KEY);
        let username = safe_get(storage.as_ref(), USERNAME_KEY);
        Self {
            storage,
            token: Observable::new(token),
            username: Observable::new(username),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn username(&self) -> Option<String> {
        self.username.get()
    }

    pub fn session(&self) -> Session {
        Session {
            token: self.token(),
            username: self.username(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    pub fn token_state(&self) -> &Observable<Option<String>> {
        &self.token
    }

    pub fn username_state(&self) -> &Observable<Option<String>> {
        &self.username
    }

    pub fn set_auth(&self, token: &str, username: &str) {
        if let Err(e) = self.storage.set_item(TOKEN_KEY, token) {
            log::verbose(format!("Failed to persist token: {}", e));
        }
        if let Err(e) = self.storage.set_item(USERNAME_KEY, username) {
            log::verbose(format!("Failed to persist username: {}", e));
        }
        self.token.set(Some(token.to_string()));
        self.username.set(Some(username.to_string()));
        log::verbose(format!("Signed in as {}", username));
    }

    pub fn logout(&self) {
        for key in [TOKEN_KEY, USERNAME_KEY] {
            if let Err(e) = self.storage.remove_item(key) {
                log::verbose(format!("Failed to remove {} from storage: {}", key, e));
            }
        }
        self.token.set(None);
        self.username.set(None);
        log::verbose("Signed out");
    }
}

fn safe_get(storage: &dyn Storage, key: &str) -> Option<String> {
    match storage.get_item(key) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            log::verbose(format!("Ignoring unreadable storage key {}: {}", key, e));
            None
        }
    }
}
