use clap::Parser;
use setlist::cli::{Args, Command, ConcertsAction, SetlistAction};
use setlist::config::Config;
use setlist::observable::Observable;
use setlist::router::Route;
use setlist::ui::{self, log};
use setlist::views::{ConcertForm, LoginForm, RegisterForm, SongForm};
use setlist::App;
use std::io::{self, BufRead, Write};
use std::process;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error(e);
            process::exit(1);
        }
    };
    log::set_verbose(config.verbose);
    log::verbose(format!("API base URL: {}", config.api_base_url));

    let app = App::from_config(&config)?;
    app.router()
        .state()
        .subscribe(|route| log::verbose(format!("at {}", route)));

    if !run(&app, args.command).await? {
        process::exit(1);
    }
    Ok(())
}

async fn run(app: &App, command: Command) -> io::Result<bool> {
    match command {
        Command::Register { username, password } => {
            let password = password_or_prompt(password)?;
            let mut view = app.register_view();
            report_errors(view.error_state());
            view.message_state().subscribe(|message| {
                if let Some(message) = message {
                    log::success(message);
                }
            });
            view.form = RegisterForm { username, password };
            Ok(view.submit().await)
        }
        Command::Login { username, password } => {
            let password = password_or_prompt(password)?;
            let mut view = app.login_view();
            report_errors(view.error_state());
            view.form = LoginForm { username, password };
            if !view.submit().await {
                return Ok(false);
            }
            ui::render_status(app.signed_in_as().as_deref());
            if app.router().current() == Route::Concerts {
                return Ok(show_concerts(app, None).await);
            }
            Ok(true)
        }
        Command::Logout => {
            app.logout();
            log::success("Logged out.");
            Ok(true)
        }
        Command::Whoami => {
            ui::render_status(app.signed_in_as().as_deref());
            Ok(app.session().is_authenticated())
        }
        Command::Concerts { action } => Ok(show_concerts(app, action).await),
        Command::Setlist { concert_id, action } => Ok(show_setlist(app, concert_id, action).await),
    }
}

async fn show_concerts(app: &App, action: Option<ConcertsAction>) -> bool {
    app.router().navigate(Route::Concerts);
    let mut view = app.concerts_view();
    report_errors(view.error_state());

    if !view.open().await {
        log::error(format!(
            "Not signed in, redirected to {}. Run `setlist login <username>`.",
            app.router().current()
        ));
        return false;
    }

    let ok = match action.unwrap_or(ConcertsAction::List) {
        ConcertsAction::List => view.error().is_none(),
        ConcertsAction::Add {
            title,
            date,
            location,
        } => {
            view.form = ConcertForm {
                title,
                date,
                location,
            };
            if !view.form.is_complete() {
                log::error("Title, date and location are required.");
                return false;
            }
            view.add().await
        }
        ConcertsAction::Rm { id } => view.remove(id).await,
    };

    ui::render_concerts(&view);
    ok
}

async fn show_setlist(app: &App, concert_id: i64, action: Option<SetlistAction>) -> bool {
    let route = app
        .router()
        .navigate_by_url(&Route::Setlist(concert_id).path());
    if route != Route::Setlist(concert_id) {
        log::error(format!("Invalid concert id: {}", concert_id));
        return false;
    }

    let mut view = app.setlist_view(concert_id);
    report_errors(view.error_state());
    view.open().await;

    let ok = match action.unwrap_or(SetlistAction::Show) {
        SetlistAction::Show => view.error().is_none(),
        SetlistAction::Add { title, notes } => {
            view.form = SongForm { title, notes };
            if view.form.title.trim().is_empty() {
                log::error("Song title is required.");
                return false;
            }
            view.add_song().await
        }
        SetlistAction::Rm { song_id } => view.remove_song(song_id).await,
        SetlistAction::Move { song_id, position } => {
            if !view.contains_song(song_id) {
                log::error(format!("Song {} is not in this setlist.", song_id));
                return false;
            }
            let moved = view.move_song(song_id, position.saturating_sub(1)).await;
            moved || view.error().is_none()
        }
    };

    ui::render_setlist(&view);
    ok
}

/// Print every message that lands in a view's error slot.
fn report_errors(error: &Observable<Option<String>>) {
    error.subscribe(|message| {
        if let Some(message) = message {
            log::error(message);
        }
    });
}

fn password_or_prompt(password: Option<String>) -> io::Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }
    eprint!("Password: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
