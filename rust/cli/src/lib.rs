//! # Decksync CLI Library
//!
//! Command-line front end for the decksync engine: builds decklists from files
//! or stdin, reports them as JSON and exports them for deck builders.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["decksync", "export", "--input", "temur.txt", "--profile", "manastack"];
//! let code = decksync_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `check`: Build a deck and print it as JSON
//! - `export`: Build a deck and print its export string
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
#[macro_use]
mod macros;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, DecksyncCli};
use commands::{handle_cfg_command, handle_check_command, handle_export_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
/// Commands reading `--input -` consume the process stdin.
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`]
///
/// # Example
///
/// ```
/// use std::io;
/// let code = decksync_cli::run(vec!["decksync", "cfg"], &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["check", "export", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match DecksyncCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout with a success code
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: decksync <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: decksync --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    let result = match cli.cmd {
        Commands::Check { deck } => handle_check_command(&deck, &mut stdin_lock, out, err),
        Commands::Export { deck, profile } => {
            handle_export_command(&deck, profile.as_deref(), &mut stdin_lock, out, err)
        }
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
