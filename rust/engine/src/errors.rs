use thiserror::Error;

use crate::resolver::ResolveError;

/// A decklist line that does not follow `<quantity> <name> (<edition>) <collector-id>`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Error when parsing a line in decklist, please verify decklist: `{line}`")]
pub struct ParsingError {
    /// The offending line, as submitted
    pub line: String,
}

impl ParsingError {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }
}

/// A structural invariant of the deck was violated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeckBuildingError {
    #[error("Deck name is missing from metadata")]
    MissingDeckName,
    #[error("Error building deck, no section found in decklist")]
    NoSections,
    #[error("Error building deck, empty section `{header}`")]
    EmptySection { header: String },
    #[error("Error building deck, too many cards in single-card section `{header}` ({lines} lines)")]
    TooManyCards { header: String, lines: usize },
    #[error("Error building deck, main part is empty")]
    EmptyMainDeck,
    #[error("Error building deck, main part needs {minimum} cards, at least (found {count})")]
    MainDeckTooSmall { count: u64, minimum: u32 },
    #[error("Error building deck, side part is limited to a maximum of {maximum} cards (found {count})")]
    SideboardTooLarge { count: u64, maximum: u32 },
    #[error("Error building deck, commander must be a single card (found {quantity})")]
    CommanderNotSingleton { quantity: u32 },
    #[error("Error building deck, companion must be a single card (found {quantity})")]
    CompanionNotSingleton { quantity: u32 },
}

/// The name resolver could not produce a canonical name for a card.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Error translating the following card {name} ({edition}) {collector_id}: {cause}")]
pub struct TranslateError {
    pub name: String,
    pub edition: String,
    pub collector_id: String,
    #[source]
    pub cause: ResolveError,
}

/// Any failure of the deck building pipeline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error(transparent)]
    Parsing(#[from] ParsingError),
    #[error(transparent)]
    Building(#[from] DeckBuildingError),
    #[error(transparent)]
    Translate(#[from] TranslateError),
}
