pub mod auth;
pub mod client;
pub mod concerts;
pub mod interceptor;
pub mod response;
pub mod songs;

pub use auth::AuthApi;
pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use concerts::ConcertsApi;
pub use interceptor::{attach_token, Authenticator};
pub use songs::SongsApi;
