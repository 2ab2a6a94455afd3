//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "decksync",
    version,
    about = "Parse, validate and export card game decklists"
)]
pub struct DecksyncCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Options shared by every command that builds a deck.
#[derive(Args, Debug, Clone)]
pub struct DeckArgs {
    /// Decklist file, or `-` for stdin
    #[arg(long, default_value = "-")]
    pub input: String,
    /// Metadata as `Name // format // description`; defaults to the first input line
    #[arg(long)]
    pub meta: Option<String>,
    /// Resolve every card to its canonical name through the catalog
    #[arg(long)]
    pub translate: bool,
    /// JSON card catalog used by --translate
    #[arg(long)]
    pub catalog: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a deck and print it as JSON
    Check {
        #[command(flatten)]
        deck: DeckArgs,
    },
    /// Build a deck and print its export for a deck builder
    Export {
        #[command(flatten)]
        deck: DeckArgs,
        /// canonical, manastack or archidekt
        #[arg(long)]
        profile: Option<String>,
    },
    /// Display the resolved configuration with value sources
    Cfg,
}
