use crate::session::SessionStore;
use reqwest::RequestBuilder;
use std::sync::Arc;

/// Attaches the session token to outgoing requests.
///
/// Runs once per request with no refresh: an expired token reaches the
/// backend as-is and comes back as an authorization error.
#[derive(Clone)]
pub struct Authenticator {
    session: Arc<SessionStore>,
}

impl Authenticator {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        attach_token(request, self.session.token().as_deref())
    }
}

/// `Authorization: Bearer <token>` when a token is present, otherwise the
/// request is forwarded unmodified.
pub fn attach_token(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) if !token.is_empty() => request.bearer_auth(token),
        _ => request,
    }
}
