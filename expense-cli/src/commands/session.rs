//! Session command - the interactive expense table
//!
//! Transactions only live as long as the session. Lines come from the
//! prompt on a terminal, or from a file / piped stdin for scripted use.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;
use rust_decimal::Decimal;

use expense_core::services::{apply_filter, summarize};
use expense_core::{
    AmountFilter, AmountMatch, CategoryFilter, Error, ExpenseController, Filter, LogEvent,
    LoggingService,
};

use super::{get_context, get_logger, log_event};
use crate::output::{self, create_table};
use crate::view::TerminalView;

/// One line typed into the session
#[derive(Parser, Debug)]
#[command(name = "session", no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
enum SessionCommand {
    /// Add a transaction
    Add {
        /// Amount spent, e.g. 12.50
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category, e.g. food
        category: String,
    },

    /// Highlight rows matching a filter
    Filter {
        #[command(subcommand)]
        by: FilterBy,
    },

    /// Remove the highlight
    Clear,

    /// Remove the transaction in the given row
    Undo {
        /// Row number as shown in the # column
        row: usize,
    },

    /// Show the table
    List,

    /// Totals for this session
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug, PartialEq)]
enum FilterBy {
    /// Amounts equal to a value
    Amount {
        #[arg(allow_hyphen_values = true)]
        threshold: String,
        /// Match amounts at or above the value instead
        #[arg(long)]
        at_least: bool,
    },
    /// A single category
    Category { name: String },
}

/// Whether the session should keep reading
#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

/// Parse one input line; blank lines and `#` comments give `None`
fn parse_line(line: &str) -> std::result::Result<Option<SessionCommand>, clap::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    SessionLine::try_parse_from(trimmed.split_whitespace()).map(|l| Some(l.command))
}

fn parse_amount(value: &str) -> Result<Decimal, Error> {
    Decimal::from_str(value.trim()).map_err(|_| Error::InvalidAmount)
}

fn build_filter(by: FilterBy) -> Result<Filter, Error> {
    let filter = match by {
        FilterBy::Amount { threshold, at_least } => {
            let mode = if at_least {
                AmountMatch::AtLeast
            } else {
                AmountMatch::Exact
            };
            AmountFilter::with_mode(parse_amount(&threshold)?, mode)?.into()
        }
        FilterBy::Category { name } => CategoryFilter::new(name)?.into(),
    };
    Ok(filter)
}

struct Session {
    controller: ExpenseController<TerminalView>,
    logger: Option<LoggingService>,
}

impl Session {
    fn new(controller: ExpenseController<TerminalView>, logger: Option<LoggingService>) -> Self {
        Self { controller, logger }
    }

    /// Parse and run one line
    fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match parse_line(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                // Covers --help output as well as usage errors
                e.print()?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute(&mut self, command: SessionCommand) -> Result<Flow> {
        match command {
            SessionCommand::Add { amount, category } => self.add(&amount, &category),
            SessionCommand::Filter { by } => self.filter(by),
            SessionCommand::Clear => {
                self.controller.clear_filter();
                log_event(&self.logger, LogEvent::new("filter_cleared"));
            }
            SessionCommand::Undo { row } => self.undo(row),
            SessionCommand::List => self.controller.view().show(),
            SessionCommand::Status { json } => self.status(json)?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self, amount: &str, category: &str) {
        let result = parse_amount(amount)
            .and_then(|amount| self.controller.try_add_transaction(amount, category));

        match result {
            Ok(()) => {
                log_event(&self.logger, LogEvent::new("transaction_added"));
                output::success("Transaction added");
            }
            Err(e) => self.reject("transaction_rejected", "add", &e),
        }
    }

    fn filter(&mut self, by: FilterBy) {
        let filter = match build_filter(by) {
            Ok(f) => f,
            Err(e) => return self.reject("filter_rejected", "filter", &e),
        };

        let transactions = self.controller.model().transactions();
        let matched = apply_filter(&filter, transactions).count();
        let total = transactions.len();
        let description = filter.to_string();

        self.controller.set_filter(filter);
        self.controller.apply_filter();

        log_event(&self.logger, LogEvent::new("filter_applied"));
        output::info(&format!("{} of {} row(s) match {}", matched, total, description));
    }

    fn undo(&mut self, row: usize) {
        match self.controller.try_remove_selected_transaction(row) {
            Ok(removed) => {
                log_event(&self.logger, LogEvent::new("transaction_removed"));
                output::success(&format!(
                    "Removed {:.2} ({})",
                    removed.amount(),
                    removed.category()
                ));
            }
            Err(e) if self.controller.model().is_empty() => {
                self.log_rejection("undo_rejected", "undo", &e);
                output::warning("Nothing to undo");
            }
            Err(e) => self.reject("undo_rejected", "undo", &e),
        }
    }

    fn status(&self, json: bool) -> Result<()> {
        let summary = summarize(self.controller.model());

        if json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        let mut table = create_table();
        table.set_header(vec!["Category", "Count", "Total"]);
        for entry in &summary.categories {
            table.add_row(vec![
                entry.category.clone(),
                entry.count.to_string(),
                format!("{:.2}", entry.total),
            ]);
        }
        table.add_row(vec![
            "All".to_string(),
            summary.total_transactions.to_string(),
            format!("{:.2}", summary.total_amount),
        ]);
        println!("{}", table);

        if let Some(filter) = self.controller.current_filter() {
            println!("Filter: {}", filter);
        }
        Ok(())
    }

    fn reject(&self, event: &str, command: &str, error: &Error) {
        self.log_rejection(event, command, error);
        output::error(&error.to_string());
    }

    fn log_rejection(&self, event: &str, command: &str, error: &Error) {
        log_event(
            &self.logger,
            LogEvent::new(event)
                .with_command(command)
                .with_error(error.to_string())
                .with_error_details(format!("{:?}", error)),
        );
    }
}

pub fn run(file: Option<PathBuf>) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    log_event(&logger, LogEvent::new("session_started"));

    let mut session = Session::new(ctx.controller(TerminalView::new()), logger);

    if let Some(path) = file {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?;
        run_script(&mut session, content.lines())?;
    } else if atty::isnt(atty::Stream::Stdin) {
        let lines = io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .context("Failed to read commands from stdin")?;
        run_script(&mut session, lines.iter().map(String::as_str))?;
    } else {
        run_interactive(&mut session)?;
    }

    log_event(&session.logger, LogEvent::new("session_ended"));
    Ok(())
}

fn run_script<'a>(session: &mut Session, lines: impl Iterator<Item = &'a str>) -> Result<()> {
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        println!("{}", format!("> {}", line.trim()).dimmed());
        if session.handle_line(line)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

fn run_interactive(session: &mut Session) -> Result<()> {
    println!("{}", "Expense tracker".bold());
    println!(
        "{}",
        "Type 'help' for commands. Transactions are kept for this session only.".dimmed()
    );
    session.controller.refresh();

    loop {
        let line = match Input::<String>::new()
            .with_prompt("expense")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            // Closed input ends the session
            Err(_) => break,
        };

        if session.handle_line(&line)? == Flow::Quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(ExpenseController::new(TerminalView::quiet()), None)
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            parse_line("add 12.50 food").unwrap(),
            Some(SessionCommand::Add {
                amount: "12.50".into(),
                category: "food".into()
            })
        );
    }

    #[test]
    fn test_parse_negative_amount() {
        assert_eq!(
            parse_line("add -50 food").unwrap(),
            Some(SessionCommand::Add {
                amount: "-50".into(),
                category: "food".into()
            })
        );
    }

    #[test]
    fn test_parse_filters() {
        assert_eq!(
            parse_line("filter amount 30").unwrap(),
            Some(SessionCommand::Filter {
                by: FilterBy::Amount {
                    threshold: "30".into(),
                    at_least: false
                }
            })
        );
        assert_eq!(
            parse_line("filter amount 30 --at-least").unwrap(),
            Some(SessionCommand::Filter {
                by: FilterBy::Amount {
                    threshold: "30".into(),
                    at_least: true
                }
            })
        );
        assert_eq!(
            parse_line("filter category food").unwrap(),
            Some(SessionCommand::Filter {
                by: FilterBy::Category { name: "food".into() }
            })
        );
    }

    #[test]
    fn test_parse_blank_and_comment() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# setup").unwrap(), None);
    }

    #[test]
    fn test_parse_exit_alias() {
        assert_eq!(parse_line("exit").unwrap(), Some(SessionCommand::Quit));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(parse_line("launch rockets").is_err());
        assert!(parse_line("undo first").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12.5 ").unwrap(), Decimal::new(125, 1));
        assert!(matches!(parse_amount("twelve"), Err(Error::InvalidAmount)));
    }

    #[test]
    fn test_build_filter() {
        let filter = build_filter(FilterBy::Amount {
            threshold: "30".into(),
            at_least: false,
        })
        .unwrap();
        assert_eq!(filter.to_string(), "amount = 30.00");

        let filter = build_filter(FilterBy::Amount {
            threshold: "30".into(),
            at_least: true,
        })
        .unwrap();
        assert_eq!(filter.to_string(), "amount >= 30.00");

        assert!(build_filter(FilterBy::Amount {
            threshold: "0".into(),
            at_least: true
        })
        .is_err());
    }

    #[test]
    fn test_session_script() {
        let mut s = session();
        for line in ["add 30 food", "add 60 bills", "add -5 food", "add 5 xyz"] {
            assert_eq!(s.handle_line(line).unwrap(), Flow::Continue);
        }
        assert_eq!(s.controller.model().len(), 2);

        s.handle_line("filter category food").unwrap();
        assert!(s.controller.current_filter().is_some());

        s.handle_line("undo 5").unwrap();
        assert_eq!(s.controller.model().len(), 2);

        s.handle_line("undo 0").unwrap();
        assert_eq!(s.controller.model().len(), 1);
        assert_eq!(s.controller.model().get(0).unwrap().category(), "bills");

        assert_eq!(s.handle_line("quit").unwrap(), Flow::Quit);
    }

    #[test]
    fn test_plain_amount_filter_highlights_equal_rows() {
        let mut s = session();
        s.handle_line("add 30 food").unwrap();
        s.handle_line("add 60 bills").unwrap();

        s.handle_line("filter amount 30").unwrap();
        assert_eq!(s.controller.view().highlighted(), &[true, false]);

        s.handle_line("filter amount 30 --at-least").unwrap();
        assert_eq!(s.controller.view().highlighted(), &[true, true]);
    }

    #[test]
    fn test_undo_on_empty_session() {
        let mut s = session();
        s.handle_line("undo 0").unwrap();
        assert!(s.controller.model().is_empty());
    }
}
