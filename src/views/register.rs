use crate::api::AuthApi;
use crate::observable::Observable;
use crate::router::{Route, Router};
use std::sync::Arc;
use std::time::Duration;

pub const REGISTER_FAILED: &str = "Register failed";
pub const REGISTERED: &str = "Registered! You can login now.";

/// Pause between the success message and the redirect to the login view.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
}

impl RegisterForm {
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

pub struct RegisterView {
    auth: Arc<dyn AuthApi>,
    router: Arc<Router>,
    pub form: RegisterForm,
    error: Observable<Option<String>>,
    message: Observable<Option<String>>,
}

impl RegisterView {
    pub fn new(auth: Arc<dyn AuthApi>, router: Arc<Router>) -> Self {
        Self {
            auth,
            router,
            form: RegisterForm::default(),
            error: Observable::new(None),
            message: Observable::new(None),
        }
    }

    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    pub fn message(&self) -> Option<String> {
        self.message.get()
    }

    pub fn error_state(&self) -> &Observable<Option<String>> {
        &self.error
    }

    pub fn message_state(&self) -> &Observable<Option<String>> {
        &self.message
    }

    /// Create the account. Registering does not log in; after a short pause
    /// the view sends the user to the login page.
    pub async fn submit(&self) -> bool {
        if !self.form.is_complete() {
            return false;
        }
        self.error.set(None);
        self.message.set(None);

        match self
            .auth
            .register(&self.form.username, &self.form.password)
            .await
        {
            Ok(_) => {
                self.message.set(Some(REGISTERED.to_string()));
                tokio::time::sleep(REDIRECT_DELAY).await;
                self.router.navigate(Route::Login);
                true
            }
            Err(e) => {
                self.error.set(Some(e.user_message(REGISTER_FAILED)));
                false
            }
        }
    }
}
