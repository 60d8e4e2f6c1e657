use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::router::{Route, Router};
use crate::session::{open_storage, SessionStore, Storage};
use crate::views::{ConcertsView, LoginView, RegisterView, SetlistView};
use std::sync::Arc;

/// Application shell: one session, one API client and one router shared by
/// every view it hands out.
pub struct App {
    session: Arc<SessionStore>,
    api: Arc<ApiClient>,
    router: Arc<Router>,
}

impl App {
    pub fn new(base_url: &str, storage: Arc<dyn Storage>) -> Result<Self> {
        let session = Arc::new(SessionStore::new(storage));
        let api = Arc::new(ApiClient::new(base_url, session.clone())?);
        Ok(Self {
            session,
            api,
            router: Arc::new(Router::new()),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base_url, open_storage(config.storage_path.clone()))
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    /// Name shown in the header while signed in.
    pub fn signed_in_as(&self) -> Option<String> {
        self.session.username()
    }

    pub fn logout(&self) {
        self.session.logout();
        self.router.navigate(Route::Login);
    }

    pub fn login_view(&self) -> LoginView {
        LoginView::new(self.api.clone(), self.session.clone(), self.router.clone())
    }

    pub fn register_view(&self) -> RegisterView {
        RegisterView::new(self.api.clone(), self.router.clone())
    }

    pub fn concerts_view(&self) -> ConcertsView {
        ConcertsView::new(self.api.clone(), self.session.clone(), self.router.clone())
    }

    pub fn setlist_view(&self, concert_id: i64) -> SetlistView {
        SetlistView::new(
            self.api.clone(),
            self.api.clone(),
            self.router.clone(),
            concert_id,
        )
    }
}
