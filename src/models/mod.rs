mod auth;
mod concert;
mod responses;
mod song;

pub use auth::{Credentials, LoginResponse, Session, User};
pub use concert::{Concert, NewConcert};
pub use responses::{Deleted, ErrorBody, Updated};
pub use song::{NewSong, Song, SongOrderUpdate};
