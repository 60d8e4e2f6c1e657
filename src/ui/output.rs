use crate::views::{ConcertsView, SetlistView};
use colored::*;

const RULE: &str = "──────────────────────────────────────────────";
const FOOTER: &str = "└──────────────────────────────────────────────────────────";

fn header(title: &str) {
    println!("{}", format!("{}[{}]{}", "┌─".dimmed(), title, RULE.dimmed()).cyan());
}

fn footer() {
    println!("{}", FOOTER.dimmed());
}

/// Print the concert list, or its empty-state message
pub fn render_concerts(view: &ConcertsView) {
    header("Your concerts");
    if let Some(empty) = view.empty_message() {
        println!("{}", empty.dimmed());
    }
    for concert in view.concerts() {
        println!(
            "{} {}",
            format!("#{:<4}", concert.id).dimmed(),
            concert.title.bold()
        );
        println!(
            "      {}",
            format!("{} • {}", concert.display_date(), concert.location).dimmed()
        );
    }
    footer();
}

/// Print a setlist in order, numbered from 1
pub fn render_setlist(view: &SetlistView) {
    let title = view.title();
    let heading = if title.is_empty() {
        format!("Concert {} setlist", view.concert_id())
    } else {
        format!("{} setlist", title)
    };
    header(&heading);
    if let Some(empty) = view.empty_message() {
        println!("{}", empty.dimmed());
    }
    for (index, song) in view.songs().iter().enumerate() {
        println!(
            "{:>3}. {} {}",
            index + 1,
            song.title.bold(),
            format!("(#{})", song.id).dimmed()
        );
        if !song.notes.is_empty() {
            println!("     {}", song.notes.dimmed());
        }
    }
    footer();
}

/// Print the header line: who is signed in, or how to sign in
pub fn render_status(username: Option<&str>) {
    match username {
        Some(name) => println!("Signed in as {}", name.green().bold()),
        None => println!("{}", "Not signed in. Run `setlist login <username>`.".yellow()),
    }
}
