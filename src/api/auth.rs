use super::client::ApiClient;
use crate::error::Result;
use crate::models::{Credentials, LoginResponse};
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Create an account. The body of a successful response carries nothing
    /// the client relies on.
    async fn register(&self, username: &str, password: &str) -> Result<Value>;

    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse>;
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn register(&self, username: &str, password: &str) -> Result<Value> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post("/register", &credentials).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post("/login", &credentials).await
    }
}
