//! Interactive shell: one process, one in-memory session.
//!
//! Each input line is split on whitespace and parsed with clap, so the shell
//! accepts the same verbs as the one-shot commands plus `logout` and `exit`.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use store::LocalStore;

use crate::error::CliError;
use crate::http::HttpApi;
use crate::{Action, run_action};

#[derive(Parser, Debug)]
#[command(name = "geolens", no_binary_name = true, disable_help_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Log in and keep the token for the rest of the shell.
    Login { email: String, password: String },
    /// Drop the session token.
    Logout,
    /// Look up an IP, or your own public IP when omitted.
    Lookup { ip: Option<String> },
    /// Show the search history.
    History,
    /// Delete history entries by id.
    Delete {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Print your public IP address.
    #[command(alias = "myip")]
    MyIp,
    /// Show session status.
    Status,
    /// Leave the shell.
    #[command(alias = "quit")]
    Exit,
}

/// Parse one input line. `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    ShellLine::try_parse_from(words).map(|parsed| Some(parsed.command))
}

fn to_action(command: ShellCommand) -> Option<Action> {
    match command {
        ShellCommand::Login { email, password } => Some(Action::Login { email, password }),
        ShellCommand::Logout => Some(Action::Logout),
        ShellCommand::Lookup { ip } => Some(Action::Lookup { ip }),
        ShellCommand::History => Some(Action::History),
        ShellCommand::Delete { ids } => Some(Action::Delete { ids }),
        ShellCommand::MyIp => Some(Action::MyIp),
        ShellCommand::Status => Some(Action::Status),
        ShellCommand::Exit => None,
    }
}

pub async fn run(api: &HttpApi, store: &LocalStore) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("geolens> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let command = match parse_line(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        let Some(action) = to_action(command) else {
            return Ok(());
        };
        if let Err(err) = run_action(api, store, action).await {
            eprintln!("error: {err}");
        }
    }
}
