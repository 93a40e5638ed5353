//! Interactive login demo driven by a small command REPL.
//!
//! Fill in the form one field at a time, then submit:
//!
//! ```text
//! > user admin
//! > pass admin123
//! > remember
//! > submit
//! logged in as admin (persistent session)
//! > restart
//! browser reopened: still logged in as admin (session was remembered)
//! ```
//!
//! The persistent tier lives in a `session.json` under the user cache
//! directory, so quitting the demo and starting it again restores a
//! remembered session for real. Set `RUST_LOG=debug` to watch the
//! controller and store at work.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use signon::prelude::*;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// ---------------------------------------------------------------------------
// Form errors
// ---------------------------------------------------------------------------

/// What the login form currently shows as wrong: a flag per field
/// plus one general message. Editing a field clears that field's flag
/// and the message, so stale errors never outlive a correction.
#[derive(Debug, Default, PartialEq, Eq)]
struct FormErrors {
    username: bool,
    password: bool,
    general: Option<String>,
}

impl FormErrors {
    fn from_error(err: &SignonError) -> Self {
        let mut errors = Self {
            general: Some(err.to_string()),
            ..Self::default()
        };
        if let SignonError::Validation(validation) = err {
            match validation.field() {
                Field::Username => errors.username = true,
                Field::Password => errors.password = true,
                Field::Both => {
                    errors.username = true;
                    errors.password = true;
                }
            }
        }
        errors
    }

    fn on_username_edit(&mut self) {
        self.username = false;
        self.general = None;
    }

    fn on_password_edit(&mut self) {
        self.password = false;
        self.general = None;
    }

    fn on_remember_edit(&mut self) {
        self.general = None;
    }

    fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    SetUsername(String),
    SetPassword(String),
    ToggleRemember,
    Submit,
    Logout,
    Restart,
    ShowState,
    Help,
    Quit,
}

/// Parses one REPL line. Returns `None` for commands it does not know.
fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "user" => Some(Command::SetUsername(rest.to_string())),
        "pass" => Some(Command::SetPassword(rest.to_string())),
        "remember" => Some(Command::ToggleRemember),
        "submit" | "login" => Some(Command::Submit),
        "logout" => Some(Command::Logout),
        "restart" => Some(Command::Restart),
        "state" => Some(Command::ShowState),
        "help" | "?" => Some(Command::Help),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// The app
// ---------------------------------------------------------------------------

struct LoginApp<S: SessionStore> {
    controller: SessionController<S>,
    form: FormInput,
    errors: FormErrors,
}

impl<S: SessionStore> LoginApp<S> {
    fn new(controller: SessionController<S>) -> Self {
        Self {
            controller,
            form: FormInput::default(),
            errors: FormErrors::default(),
        }
    }

    /// Applies one command. Returns `false` when the app should exit.
    fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::SetUsername(value) => {
                self.form.username = value;
                self.errors.on_username_edit();
                println!("username: {:?}", self.form.username);
            }
            Command::SetPassword(value) => {
                self.form.password = value;
                self.errors.on_password_edit();
                println!("password: {}", mask(&self.form.password));
            }
            Command::ToggleRemember => {
                self.form.remember = !self.form.remember;
                self.errors.on_remember_edit();
                println!("remember: {}", self.form.remember);
            }
            Command::Submit => self.submit(),
            Command::Logout => {
                self.controller.logout();
                self.form = FormInput::default();
                self.errors = FormErrors::default();
                println!("logged out, form cleared");
            }
            Command::Restart => match self.controller.simulate_restart() {
                SessionState::LoggedIn { username } => {
                    println!(
                        "browser reopened: still logged in as {username} \
                         (session was remembered)"
                    );
                }
                SessionState::LoggedOut => {
                    println!(
                        "browser reopened: logged out \
                         (session was not remembered)"
                    );
                }
            },
            Command::ShowState => {
                println!("state: {}", self.controller.session_state());
                println!(
                    "form: username={:?} password={} remember={}",
                    self.form.username,
                    mask(&self.form.password),
                    self.form.remember
                );
                if !self.errors.is_clear() {
                    self.print_errors();
                }
            }
            Command::Help => print_help(),
            Command::Quit => {
                println!("bye");
                return false;
            }
        }
        true
    }

    fn submit(&mut self) {
        let tier = SessionTier::for_remember(self.form.remember);
        match self.controller.login(&self.form) {
            Ok(state) => {
                println!("{state} ({tier} session)");
                self.errors = FormErrors::default();
            }
            Err(err) => {
                self.errors = FormErrors::from_error(&err);
                self.print_errors();
            }
        }
    }

    fn print_errors(&self) {
        if let Some(message) = &self.errors.general {
            println!("login failed: {message}");
        }
        if self.errors.username {
            println!("  check the username field");
        }
        if self.errors.password {
            println!("  check the password field");
        }
    }
}

fn mask(password: &str) -> String {
    if password.is_empty() {
        "(empty)".to_string()
    } else {
        "*".repeat(password.chars().count())
    }
}

fn print_help() {
    println!("commands:");
    println!("  user <name>   set the username field");
    println!("  pass <word>   set the password field");
    println!("  remember      toggle the remember-me checkbox");
    println!("  submit        submit the login form");
    println!("  logout        log out and clear the form");
    println!("  restart       simulate closing and reopening the browser");
    println!("  state         show session state and form contents");
    println!("  quit          exit");
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn session_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("login-demo")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("login demo starting");

    let dir = session_dir();
    let controller = SessionController::builder()
        .store(FileStore::new(&dir))
        .build();
    let mut app = LoginApp::new(controller);

    println!("login-demo: a two-tier login session manager");
    println!("known users: admin/admin123, user1/password1, testuser/test123");
    println!("session dir: {}", dir.display());
    match app.controller.current_user() {
        Some(username) => println!("restored session: logged in as {username}"),
        None => println!("no saved session, logged out"),
    }
    println!("type 'help' for commands");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_command(trimmed) {
            Some(command) => {
                if !app.apply(command) {
                    break;
                }
            }
            None => println!("unknown command: {trimmed} (try 'help')"),
        }
    }

    info!("login demo shutting down");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
