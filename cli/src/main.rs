//! `geolens` command-line front end.
//!
//! One-shot subcommands run against a fresh in-memory session; `shell` keeps
//! one session (and its refresh cookie) across many commands.

mod error;
mod http;
mod shell;

use clap::{Parser, Subcommand};
use serde::Serialize;
use store::config::{
    DEFAULT_API_BASE_URL, DEFAULT_HISTORY_USER_ID, DEFAULT_PUBLIC_IP_URL, ENV_API_BASE_URL, ENV_HISTORY_USER_ID,
    ENV_PUBLIC_IP_URL,
};
use store::types::Credentials;
use store::{ApiConfig, LocalStore, StateHandle, ops};

use crate::error::CliError;
use crate::http::HttpApi;

#[derive(Parser, Debug)]
#[command(name = "geolens", about = "IP geolocation lookup CLI")]
struct Cli {
    #[arg(long, env = ENV_API_BASE_URL, default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = ENV_PUBLIC_IP_URL, default_value = DEFAULT_PUBLIC_IP_URL)]
    public_ip_url: String,

    /// User whose search history is listed and deleted.
    #[arg(long, env = ENV_HISTORY_USER_ID, default_value_t = DEFAULT_HISTORY_USER_ID)]
    user_id: u64,

    /// Access token to start the session with.
    #[arg(long, env = "GEOLENS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Log in before running the command.
    #[arg(long, env = "GEOLENS_EMAIL")]
    email: Option<String>,

    #[arg(long, env = "GEOLENS_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in with --email/--password and print the access token.
    Login,
    /// Look up an IP, or your own public IP when omitted.
    Lookup { ip: Option<String> },
    /// Print the search history.
    History,
    /// Delete history entries by id, then print the remaining history.
    Delete {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Print your public IP address.
    MyIp,
    /// Interactive session.
    Shell,
}

/// A unit of work shared by one-shot commands and the shell.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Login { email: String, password: String },
    Logout,
    Lookup { ip: Option<String> },
    History,
    Delete { ids: Vec<i64> },
    MyIp,
    Status,
}

#[derive(Serialize)]
struct SessionStatus<'a> {
    logged_in: bool,
    status: &'a str,
    error: Option<&'a str>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ApiConfig::from_lookup(|key| match key {
        ENV_API_BASE_URL => Some(cli.base_url.clone()),
        ENV_PUBLIC_IP_URL => Some(cli.public_ip_url.clone()),
        ENV_HISTORY_USER_ID => Some(cli.user_id.to_string()),
        _ => None,
    });
    tracing::debug!(base_url = %config.base_url, user_id = config.history_user_id, "configured");

    let api = HttpApi::new(config)?;
    let store = LocalStore::default();
    if let Some(token) = cli.token.clone() {
        ops::set_token(&store, token);
    }

    let login = match (cli.email, cli.password) {
        (Some(email), Some(password)) => Some(Action::Login { email, password }),
        (None, None) => None,
        _ => return Err(CliError::MissingCredentials),
    };

    match cli.command {
        Command::Login => run_action(&api, &store, login.ok_or(CliError::MissingCredentials)?).await,
        Command::Shell => {
            if let Some(login) = login {
                run_action(&api, &store, login).await?;
            }
            shell::run(&api, &store).await
        }
        command => {
            if let Some(login) = login {
                login_quietly(&api, &store, login).await?;
            }
            run_action(&api, &store, one_shot(command)).await
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();
}

fn one_shot(command: Command) -> Action {
    match command {
        Command::Lookup { ip } => Action::Lookup { ip },
        Command::History => Action::History,
        Command::Delete { ids } => Action::Delete { ids },
        Command::MyIp => Action::MyIp,
        Command::Login | Command::Shell => Action::Status,
    }
}

async fn login_quietly(api: &HttpApi, store: &LocalStore, action: Action) -> Result<(), CliError> {
    if let Action::Login { email, password } = action {
        ops::login(api, store, &Credentials::new(email, password)).await?;
    }
    Ok(())
}

pub(crate) async fn run_action(api: &HttpApi, store: &LocalStore, action: Action) -> Result<(), CliError> {
    let user_id = api.config().history_user_id;
    match action {
        Action::Login { email, password } => {
            ops::login(api, store, &Credentials::new(email, password)).await?;
            println!("{}", store.token().unwrap_or_default());
        }
        Action::Logout => {
            ops::logout(store);
            println!("logged out");
        }
        Action::Lookup { ip: Some(ip) } => {
            let lookup = ops::fetch_geo_info(api, store, &ip).await?;
            print_json(&lookup)?;
        }
        Action::Lookup { ip: None } => {
            let lookup = ops::lookup_own_ip(api, store).await?.ok_or(CliError::NoPublicIp)?;
            print_json(&lookup)?;
        }
        Action::History => {
            let history = ops::fetch_history(api, store, user_id).await?;
            print_json(&history)?;
        }
        Action::Delete { ids } => {
            let history = ops::delete_history(api, store, &ids, user_id).await?;
            print_json(&history)?;
        }
        Action::MyIp => {
            let ip = ops::discover_public_ip(api).await.ok_or(CliError::NoPublicIp)?;
            println!("{ip}");
        }
        Action::Status => {
            let state = store.state();
            print_json(&SessionStatus {
                logged_in: state.session.has_token(),
                status: state.session.status.as_str(),
                error: state.session.error.as_deref(),
            })?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
