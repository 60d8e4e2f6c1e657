use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "setlist")]
#[command(about = "Manage concerts and their setlists from the terminal", long_about = None)]
pub struct Args {
    #[arg(
        long = "api-url",
        global = true,
        help = "Backend base URL (e.g., http://localhost:8080)"
    )]
    pub api_url: Option<String>,

    #[arg(short = 'v', long = "verbose", global = true, help = "Print requests and state changes")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an account
    Register {
        username: String,
        #[arg(short = 'p', long = "password", help = "Read from stdin when omitted")]
        password: Option<String>,
    },
    /// Log in and remember the session
    Login {
        username: String,
        #[arg(short = 'p', long = "password", help = "Read from stdin when omitted")]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show who is signed in
    Whoami,
    /// List, add or delete concerts
    Concerts {
        #[command(subcommand)]
        action: Option<ConcertsAction>,
    },
    /// Show or edit the setlist of a concert
    Setlist {
        concert_id: i64,
        #[command(subcommand)]
        action: Option<SetlistAction>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConcertsAction {
    /// List your concerts
    List,
    /// Add a concert
    Add {
        #[arg(short = 't', long)]
        title: String,
        #[arg(short = 'd', long, help = "Date (YYYY-MM-DD)")]
        date: String,
        #[arg(short = 'l', long)]
        location: String,
    },
    /// Delete a concert
    Rm { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum SetlistAction {
    /// Show the setlist
    Show,
    /// Append a song
    Add {
        title: String,
        #[arg(short = 'n', long, default_value = "")]
        notes: String,
    },
    /// Remove a song
    Rm { song_id: i64 },
    /// Move a song to a 1-based position
    Move { song_id: i64, position: usize },
}
