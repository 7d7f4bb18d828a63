mod http;
mod storage;

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

use std::io::{self, BufRead, Write};

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use portal::login::DEV_BYPASS_TOKEN;
use portal::{Credentials, LoginConfig, LoginController, LoginError, Role, SessionStore};
use serde_json::Value;

use crate::http::HttpApi;
use crate::storage::FileStorage;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `college-cli login` first")]
    NotLoggedIn,
    #[error("{0}")]
    Login(#[from] LoginError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "college-cli", about = "College portal login CLI")]
struct Cli {
    #[arg(long, env = "COLLEGE_BASE_URL", default_value = "http://127.0.0.1:4000")]
    base_url: String,

    #[arg(long, env = "COLLEGE_SESSION_FILE", default_value = ".college-session.json")]
    session_file: String,

    /// Accepts `1/true/yes/on` and `0/false/no/off`, like the web client.
    #[arg(long, env = "COLLEGE_DEV_BYPASS_ADMIN", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    dev_bypass_admin: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// Log in and store the session.
    Login {
        #[arg(long, default_value_t = Role::Student)]
        role: Role,
        #[arg(long)]
        email: String,
        /// Prompted on stdin when omitted.
        #[arg(long, env = "COLLEGE_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Show the stored session and the account behind it.
    Whoami,
    /// Revoke and forget the stored session.
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let api = HttpApi::new(cli.base_url);
    let store = SessionStore::new(FileStorage::new(cli.session_file));
    let config = LoginConfig { dev_bypass_admin: cli.dev_bypass_admin };

    match cli.command {
        Command::Ping => run_ping(&api).await,
        Command::Login { role, email, password } => run_login(&api, store, config, role, email, password).await,
        Command::Whoami => run_whoami(&api, &store).await,
        Command::Logout => run_logout(&api, store, config).await,
    }
}

async fn run_ping(api: &HttpApi) -> Result<(), CliError> {
    api.healthz().await?;
    println!("ok");
    Ok(())
}

async fn run_login(
    api: &HttpApi,
    store: SessionStore<FileStorage>,
    config: LoginConfig,
    role: Role,
    email: String,
    password: Option<String>,
) -> Result<(), CliError> {
    let password = match password {
        Some(password) => password,
        None => prompt_password()?,
    };
    let controller = LoginController::new(config, api, store);
    let ok = controller.submit(role, &Credentials::new(email, password)).await?;

    println!("{}", ok.notice);
    println!("role: {}", ok.session.role);
    println!("home: {}", ok.redirect);
    Ok(())
}

async fn run_whoami(api: &HttpApi, store: &SessionStore<FileStorage>) -> Result<(), CliError> {
    let session = store.get().ok_or(CliError::NotLoggedIn)?;
    println!("role: {}", session.role);
    println!("home: {}", session.home_route());
    if session.token == DEV_BYPASS_TOKEN {
        println!("dev bypass session; no server account");
        return Ok(());
    }
    let account = api.me(&session.token).await?;
    print_json(account.get("data").unwrap_or(&Value::Null))
}

async fn run_logout(api: &HttpApi, store: SessionStore<FileStorage>, config: LoginConfig) -> Result<(), CliError> {
    if let Some(session) = store.get() {
        if session.token != DEV_BYPASS_TOKEN {
            if let Err(e) = api.logout(&session.token).await {
                eprintln!("warning: server logout failed: {e}");
            }
        }
    }
    LoginController::new(config, api, store).logout()?;
    println!("logged out");
    Ok(())
}

fn prompt_password() -> Result<String, CliError> {
    print!("password: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
