//! Command handlers for the decksync CLI.
//!
//! Each handler takes its parsed arguments plus the output streams and
//! returns `Result<(), CliError>`; [`crate::run`] maps the result to an exit code.

pub mod cfg;
pub mod check;
pub mod export;

pub use cfg::handle_cfg_command;
pub use check::handle_check_command;
pub use export::handle_export_command;

use crate::cli::DeckArgs;
use crate::config::Config;
use crate::error::CliError;
use crate::io_utils::{read_input, read_text};
use crate::ui;
use decksync_engine::metadata::parse_metadata_line;
use decksync_engine::{CardCatalog, Deck, DeckError, Submission};
use std::io::{Read, Write};

/// Reads the submission named by `args` and runs the full build pipeline on it.
pub(crate) fn build_deck(
    args: &DeckArgs,
    cfg: &Config,
    stdin: &mut dyn Read,
    err: &mut dyn Write,
) -> Result<Deck, CliError> {
    let text = read_input(&args.input, stdin)
        .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", args.input, e)))?;

    let (fields, body) = match &args.meta {
        Some(meta) => (parse_metadata_line(meta), text),
        None => {
            let submission = Submission::parse(&text);
            (submission.metadata, submission.body)
        }
    };

    let mut deck = Deck::new(&fields)
        .map_err(DeckError::from)?
        .with_rules(cfg.rules());

    let translate = args.translate || cfg.translate;
    let catalog = if translate {
        load_catalog(args.catalog.as_deref().or(cfg.catalog.as_deref()))?
    } else {
        if args.catalog.is_some() {
            ui::display_warning(err, "--catalog is ignored without --translate")?;
        }
        CardCatalog::new()
    };

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    runtime.block_on(deck.build_deck(&body, translate, &catalog))?;
    Ok(deck)
}

fn load_catalog(path: Option<&str>) -> Result<CardCatalog, CliError> {
    let path = path.ok_or_else(|| {
        CliError::Config("--translate requires a card catalog (--catalog or DECKSYNC_CATALOG)".into())
    })?;
    let text = read_text(path)
        .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", path, e)))?;
    CardCatalog::from_json(&text)
        .map_err(|e| CliError::InvalidInput(format!("Invalid card catalog {}: {}", path, e)))
}
