pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod observable;
pub mod router;
pub mod session;
pub mod ui;
pub mod views;

pub use app::App;
pub use error::{Result, SetlistError};
