//! `culinary`: command-line consumer of the CulinaryTech account layer.
//!
//! The session lives in a JSON file (`--session-file`) with the same `user` and
//! `token` keys the web client keeps in `localStorage`.

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;
use std::process::ExitCode;

use accounts::api::{HttpRegisterApi, TokioTimer};
use accounts::config::{ApiConfig, ConfigError, parse_origin};
use accounts::profile::ProfileView;
use accounts::register::{Navigator, RegistrationDraft, RegistrationFlow, TransportError};
use accounts::session::{Session, SessionError, SessionStore};
use accounts::storage::FileStorage;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("{0}; run `culinary logout` to discard it")]
    Session(#[from] SessionError),
    #[error("{0}")]
    Registration(String),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "culinary", about = "CulinaryTech account CLI")]
struct Cli {
    #[arg(long, env = "CULINARY_API_ORIGIN")]
    api_origin: Option<String>,

    #[arg(long, env = "CULINARY_SESSION_FILE", default_value = ".culinary/session.json")]
    session_file: PathBuf,

    #[arg(short, long, help = "Log debug output to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account, then point at the login step.
    Register(RegisterArgs),
    /// Store a user record obtained elsewhere as the active session.
    Login(LoginArgs),
    /// Show the active session.
    Whoami {
        #[arg(long)]
        json: bool,
    },
    /// Drop the active session and any stored token.
    Logout,
}

// Blank defaults let the registration flow report missing fields itself.
#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long, default_value = "")]
    username: String,
    #[arg(long, default_value = "")]
    full_name: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, env = "CULINARY_PASSWORD", hide_env_values = true, default_value = "")]
    password: String,
    #[arg(long, env = "CULINARY_CONFIRM_PASSWORD", hide_env_values = true, default_value = "")]
    confirm_password: String,
}

impl RegisterArgs {
    fn into_draft(self) -> RegistrationDraft {
        RegistrationDraft {
            username: self.username,
            full_name: self.full_name,
            phone: self.phone,
            email: self.email,
            password: self.password,
            confirm_password: self.confirm_password,
        }
    }
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    full_name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
}

impl LoginArgs {
    fn into_session(self) -> Session {
        Session { username: self.username, full_name: self.full_name, email: self.email, phone: self.phone }
    }
}

/// Prints where the user goes next instead of changing pages.
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn redirect(&self, path: &str) {
        println!("next: {}", next_step_hint(path));
    }
}

fn next_step_hint(path: &str) -> String {
    match path {
        accounts::register::LOGIN_PATH => "sign in (culinary login --username ... --full-name ...)".to_owned(),
        other => format!("open {other}"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let storage = FileStorage::new(&cli.session_file);
    match cli.command {
        Command::Register(args) => {
            let config = api_config(cli.api_origin.as_deref())?;
            let mut store = SessionStore::open_or_signed_out(storage);
            run_register(&config, &mut store, args).await
        }
        Command::Login(args) => {
            let mut store = SessionStore::open_or_signed_out(storage);
            run_login(&mut store, args);
            Ok(())
        }
        Command::Whoami { json } => {
            let store = SessionStore::open(storage)?;
            println!("{}", render_whoami(&store, json)?);
            Ok(())
        }
        Command::Logout => {
            SessionStore::open_or_signed_out(storage).logout();
            println!("signed out");
            Ok(())
        }
    }
}

fn api_config(origin_override: Option<&str>) -> Result<ApiConfig, CliError> {
    let mut config = ApiConfig::from_env()?;
    if let Some(raw) = origin_override {
        config.origin = parse_origin(raw)?;
    }
    Ok(config)
}

async fn run_register(
    config: &ApiConfig,
    store: &mut SessionStore<FileStorage>,
    args: RegisterArgs,
) -> Result<(), CliError> {
    let flow = RegistrationFlow::new(HttpRegisterApi::new(config)?, TokioTimer, TerminalNavigator);
    let outcome = flow
        .submit_and_redirect(&args.into_draft(), |o| {
            if !o.message.is_error() {
                println!("{}", o.message.text);
            }
        })
        .await;

    if outcome.message.is_error() {
        return Err(CliError::Registration(outcome.message.text));
    }
    if let Some(user) = outcome.user {
        store.login(user);
    }
    Ok(())
}

fn run_login(store: &mut SessionStore<FileStorage>, args: LoginArgs) {
    let session = args.into_session();
    println!("signed in as {}", session.username);
    store.login(session);
}

fn render_whoami(store: &SessionStore<FileStorage>, json: bool) -> Result<String, CliError> {
    if json {
        return Ok(serde_json::to_string_pretty(&store.current())?);
    }
    Ok(ProfileView::from_session(store.current()).to_text())
}
