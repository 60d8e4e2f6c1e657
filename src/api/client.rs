use super::interceptor::Authenticator;
use super::response::{api_error, decode_body};
use crate::error::Result;
use crate::session::SessionStore;
use crate::ui::log;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Shared HTTP plumbing for the auth, concerts and songs endpoints.
///
/// Every request built here passes through the [`Authenticator`]. A failed
/// call is a single error; nothing is retried.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    authenticator: Authenticator,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Arc<SessionStore>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            authenticator: Authenticator::new(session),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// A request for `path` with the session token already attached.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        self.authenticator.authorize(builder)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::GET, path, self.request(Method::GET, path)).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).json(body);
        self.send(Method::POST, path, builder).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path).json(body);
        self.send(Method::PUT, path, builder).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::DELETE, path, self.request(Method::DELETE, path)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T> {
        log::verbose(format!("{} {}", method, self.url(path)));
        let response = builder.send().await?;
        let status = response.status();
        log::verbose(format!("{} {} -> {}", method, path, status));

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &body));
        }

        let body = response.bytes().await?;
        decode_body(&body)
    }
}
