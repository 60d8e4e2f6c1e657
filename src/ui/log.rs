use colored::*;
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Dimmed diagnostic line on stderr, only when verbose output is enabled
pub fn verbose(message: impl Display) {
    if is_verbose() {
        eprintln!("{}", format!("[setlist] {}", message).dimmed());
    }
}

pub fn success(message: impl Display) {
    println!("{}", message.to_string().green());
}

pub fn error(message: impl Display) {
    eprintln!("{} {}", "Error:".red(), message);
}
