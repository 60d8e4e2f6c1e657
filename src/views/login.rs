use crate::api::AuthApi;
use crate::observable::Observable;
use crate::router::{Route, Router};
use crate::session::SessionStore;
use std::sync::Arc;

pub const LOGIN_FAILED: &str = "Login failed";

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

pub struct LoginView {
    auth: Arc<dyn AuthApi>,
    session: Arc<SessionStore>,
    router: Arc<Router>,
    pub form: LoginForm,
    error: Observable<Option<String>>,
}

impl LoginView {
    pub fn new(auth: Arc<dyn AuthApi>, session: Arc<SessionStore>, router: Arc<Router>) -> Self {
        Self {
            auth,
            session,
            router,
            form: LoginForm::default(),
            error: Observable::new(None),
        }
    }

    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    pub fn error_state(&self) -> &Observable<Option<String>> {
        &self.error
    }

    /// Log in with the current form values. On success the session is stored
    /// and the view moves on to the concert list.
    pub async fn submit(&self) -> bool {
        if !self.form.is_complete() {
            return false;
        }
        self.error.set(None);

        match self.auth.login(&self.form.username, &self.form.password).await {
            Ok(response) => {
                self.session.set_auth(&response.token, &response.user.username);
                self.router.navigate(Route::Concerts);
                true
            }
            Err(e) => {
                self.error.set(Some(e.user_message(LOGIN_FAILED)));
                false
            }
        }
    }
}
