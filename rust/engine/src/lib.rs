//! # decksync-engine: Decklist Parsing and Validation Core
//!
//! Turns a free-form, multi-section, multi-language decklist into a validated
//! [`deck::Deck`], optionally resolves every card to its canonical name, and
//! renders the deck for deck builders.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card value, edition normalization and lookup keys
//! - [`grammar`] - The card line grammar
//! - [`sections`] - Block segmentation and localized section headers
//! - [`metadata`] - Deck name, format and description
//! - [`deck`] - Parse, validate and resolve pipeline
//! - [`resolver`] - Name resolution seam and an in-memory catalog
//! - [`export`] - Canonical and per-builder export profiles
//! - [`errors`] - Error types for the pipeline
//!
//! ## Quick Start
//!
//! ```rust
//! use decksync_engine::deck::Deck;
//! use decksync_engine::metadata::Format;
//!
//! let list = "Commander\n\
//!             1 Niv-Mizzet Reborn (WAR) 208\n\
//!             \n\
//!             Mazzo\n\
//!             40 Island (ELD) 254";
//!
//! let mut deck = Deck::new(&["Niv to Light", "standard"]).unwrap();
//! deck.parse_deck(list).unwrap();
//!
//! assert_eq!(deck.metadata.format, Format::Brawl);
//! assert_eq!(deck.export(), "1 Niv-Mizzet Reborn (WAR)\n40 Island (ELD)\n");
//! ```
//!
//! ## Name Resolution
//!
//! ```rust
//! use decksync_engine::deck::Deck;
//! use decksync_engine::resolver::CardCatalog;
//!
//! # tokio_test_block(async {
//! let catalog = CardCatalog::new().with("ELD", "254", "Island");
//! let mut deck = Deck::new(&["Mono U"]).unwrap();
//! deck.build_deck("Deck\n40 Île (ELD) 254", true, &catalog).await.unwrap();
//! assert_eq!(deck.main()[0].name(), "Island");
//! # });
//! # fn tokio_test_block<F: std::future::Future<Output = ()>>(f: F) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod export;
pub mod grammar;
pub mod metadata;
pub mod resolver;
pub mod sections;

pub use cards::{card_count, Card, CardKey};
pub use deck::{Deck, DeckRules, MAIN_DECK_MIN, SIDEBOARD_MAX};
pub use errors::{DeckBuildingError, DeckError, ParsingError, TranslateError};
pub use export::ExportProfile;
pub use metadata::{Format, Metadata, Submission};
pub use resolver::{CardCatalog, NameResolver, ResolveError};
pub use sections::SectionKind;
