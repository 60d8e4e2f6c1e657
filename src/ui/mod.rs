pub mod log;
mod output;

pub use output::{render_concerts, render_setlist, render_status};
