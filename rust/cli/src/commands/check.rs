//! Deck check command.
//!
//! Builds the submitted deck and prints it as pretty JSON: metadata followed
//! by the main deck, sideboard, commander and companion groups.

use super::build_deck;
use crate::cli::DeckArgs;
use crate::config;
use crate::error::CliError;
use std::io::{Read, Write};

pub fn handle_check_command(
    args: &DeckArgs,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let deck = build_deck(args, &cfg, stdin, err)?;
    let json = serde_json::to_string_pretty(&deck).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
