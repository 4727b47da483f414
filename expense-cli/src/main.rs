//! Expense tracker CLI - track spending in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;
mod view;

use commands::{categories, logs, session};

/// Expense tracker - add, filter and undo expenses in your terminal
#[derive(Parser)]
#[command(name = "expense", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a tracking session (the default)
    Session {
        /// Read session commands from a file instead of the prompt
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List the categories transactions may use
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => session::run(None),
        Some(Commands::Session { file }) => session::run(file),
        Some(Commands::Categories { json }) => categories::run(json),
        Some(Commands::Logs { command }) => logs::run(command),
    }
}
