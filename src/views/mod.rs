pub mod concerts;
pub mod login;
pub mod register;
pub mod setlist;

pub use concerts::{ConcertForm, ConcertsView};
pub use login::{LoginForm, LoginView};
pub use register::{RegisterForm, RegisterView};
pub use setlist::{SetlistView, SongForm};
