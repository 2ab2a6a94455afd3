use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::{card_count, Card, CardKey};
use crate::errors::{DeckBuildingError, DeckError, TranslateError};
use crate::export::{render, ExportProfile, Groups};
use crate::grammar::parse_card_line;
use crate::metadata::{Format, Metadata};
use crate::resolver::{NameResolver, ResolveError};
use crate::sections::{classify_header, segment_blocks, SectionKind};

/// Minimum number of cards in the main deck, whatever the format.
pub const MAIN_DECK_MIN: u32 = 40;

/// Maximum number of cards in the sideboard.
pub const SIDEBOARD_MAX: u32 = 15;

/// Size limits checked once a decklist has been parsed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct DeckRules {
    pub main_min: u32,
    pub sideboard_max: u32,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            main_min: MAIN_DECK_MIN,
            sideboard_max: SIDEBOARD_MAX,
        }
    }
}

/// A decklist: metadata plus main deck, sideboard, commander and companion.
///
/// A deck starts with metadata only and is filled in one pass by
/// [`Deck::parse_deck`] or [`Deck::build_deck`]. Parsing again starts over:
/// groups are cleared and a brawl format forced by a commander section is
/// reverted. When either returns an error the groups are in an unspecified
/// state and the deck must not be used.
///
/// # Examples
///
/// ```
/// use decksync_engine::deck::Deck;
///
/// let mut deck = Deck::new(&["Burn", "modern"]).unwrap();
/// deck.parse_deck("Deck\n20 Mountain (M20) 273\n20 Lightning Bolt (M10) 146").unwrap();
/// assert_eq!(deck.main_count(), 40);
/// assert_eq!(deck.export(), "20 Mountain (M20)\n20 Lightning Bolt (M10)\n");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    pub metadata: Metadata,
    main: Vec<Card>,
    side: Vec<Card>,
    commander: Option<Card>,
    companion: Option<Card>,
    #[serde(skip)]
    rules: DeckRules,
    // Format in effect before a commander section forced brawl.
    #[serde(skip)]
    format_before_commander: Option<Format>,
}

impl Deck {
    /// Creates an empty deck from the ordered metadata fields `name`, `format`, `description`.
    pub fn new<S: AsRef<str>>(fields: &[S]) -> Result<Self, DeckBuildingError> {
        Ok(Self::from_metadata(Metadata::from_fields(fields)?))
    }

    pub fn from_metadata(metadata: Metadata) -> Self {
        Self {
            metadata,
            main: Vec::new(),
            side: Vec::new(),
            commander: None,
            companion: None,
            rules: DeckRules::default(),
            format_before_commander: None,
        }
    }

    pub fn with_rules(mut self, rules: DeckRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> DeckRules {
        self.rules
    }

    pub fn main(&self) -> &[Card] {
        &self.main
    }

    pub fn side(&self) -> &[Card] {
        &self.side
    }

    pub fn commander(&self) -> Option<&Card> {
        self.commander.as_ref()
    }

    pub fn companion(&self) -> Option<&Card> {
        self.companion.as_ref()
    }

    pub fn main_count(&self) -> u64 {
        card_count(&self.main)
    }

    pub fn side_count(&self) -> u64 {
        card_count(&self.side)
    }

    /// Parses a decklist and checks the deck constraints, without name resolution.
    ///
    /// # Errors
    ///
    /// - [`DeckError::Parsing`] for a line outside the card line grammar
    /// - [`DeckError::Building`] for a malformed section or a violated constraint
    pub fn parse_deck(&mut self, raw: &str) -> Result<(), DeckError> {
        self.parse_sections(raw)?;
        self.check_constraints()?;
        info!(
            deck = %self.metadata.name,
            format = %self.metadata.format,
            main = self.main_count(),
            side = self.side_count(),
            "decklist built"
        );
        Ok(())
    }

    /// Parses, validates and, when `translate` is set, resolves every card name.
    ///
    /// # Errors
    ///
    /// Everything [`Deck::parse_deck`] returns, plus [`DeckError::Translate`]
    /// when resolution fails. A deck failing resolution has passed validation.
    pub async fn build_deck<R>(
        &mut self,
        raw: &str,
        translate: bool,
        resolver: &R,
    ) -> Result<(), DeckError>
    where
        R: NameResolver + ?Sized,
    {
        self.parse_deck(raw)?;
        if translate {
            self.resolve_names(resolver).await?;
        }
        Ok(())
    }

    fn parse_sections(&mut self, raw: &str) -> Result<(), DeckError> {
        self.main.clear();
        self.side.clear();
        self.commander = None;
        self.companion = None;
        if let Some(format) = self.format_before_commander.take() {
            self.metadata.format = format;
        }

        for block in segment_blocks(raw)? {
            let header = &block[0];
            let Some(kind) = classify_header(header) else {
                warn!(header = %header, lines = block.len(), "skipping unrecognized decklist section");
                continue;
            };
            if block.len() < 2 {
                return Err(DeckBuildingError::EmptySection {
                    header: header.clone(),
                }
                .into());
            }
            if kind.is_single_card() && block.len() > 2 {
                return Err(DeckBuildingError::TooManyCards {
                    header: header.clone(),
                    lines: block.len() - 1,
                }
                .into());
            }

            let cards = block[1..]
                .iter()
                .map(|line| parse_card_line(line))
                .collect::<Result<Vec<_>, _>>()?;
            debug!(?kind, cards = cards.len(), "parsed decklist section");

            match kind {
                SectionKind::Deck => self.main = cards,
                SectionKind::Sideboard => self.side = cards,
                SectionKind::Commander => {
                    self.commander = cards.into_iter().next();
                    if self.format_before_commander.is_none() {
                        self.format_before_commander = Some(self.metadata.format);
                    }
                    self.metadata.format = Format::Brawl;
                }
                SectionKind::Companion => self.companion = cards.into_iter().next(),
            }
        }
        Ok(())
    }

    /// Checks, in order: companion singleton, commander singleton, main deck
    /// floor, sideboard ceiling. Stops at the first violation.
    pub fn check_constraints(&self) -> Result<(), DeckBuildingError> {
        if let Some(companion) = &self.companion {
            if companion.quantity() != 1 {
                return Err(DeckBuildingError::CompanionNotSingleton {
                    quantity: companion.quantity(),
                });
            }
        }
        if let Some(commander) = &self.commander {
            if commander.quantity() != 1 {
                return Err(DeckBuildingError::CommanderNotSingleton {
                    quantity: commander.quantity(),
                });
            }
        }
        if self.main.is_empty() {
            return Err(DeckBuildingError::EmptyMainDeck);
        }
        let main = self.main_count();
        if main < u64::from(self.rules.main_min) {
            return Err(DeckBuildingError::MainDeckTooSmall {
                count: main,
                minimum: self.rules.main_min,
            });
        }
        let side = self.side_count();
        if side > u64::from(self.rules.sideboard_max) {
            return Err(DeckBuildingError::SideboardTooLarge {
                count: side,
                maximum: self.rules.sideboard_max,
            });
        }
        Ok(())
    }

    /// Replaces every card name by its canonical name.
    ///
    /// Batches run in order commander, companion, main deck, sideboard. A
    /// failing batch leaves its own cards and every later batch untouched;
    /// batches resolved before it keep their new names.
    pub async fn resolve_names<R>(&mut self, resolver: &R) -> Result<(), TranslateError>
    where
        R: NameResolver + ?Sized,
    {
        if let Some(commander) = self.commander.as_mut() {
            resolve_batch(resolver, std::slice::from_mut(commander)).await?;
        }
        if let Some(companion) = self.companion.as_mut() {
            resolve_batch(resolver, std::slice::from_mut(companion)).await?;
        }
        resolve_batch(resolver, &mut self.main).await?;
        resolve_batch(resolver, &mut self.side).await?;
        Ok(())
    }

    /// Canonical export, see [`ExportProfile::Canonical`].
    pub fn export(&self) -> String {
        self.export_to(ExportProfile::Canonical)
    }

    pub fn export_to(&self, profile: ExportProfile) -> String {
        render(
            &Groups {
                main: &self.main,
                side: &self.side,
                commander: self.commander.as_ref(),
                companion: self.companion.as_ref(),
            },
            profile,
        )
    }
}

async fn resolve_batch<R>(resolver: &R, cards: &mut [Card]) -> Result<(), TranslateError>
where
    R: NameResolver + ?Sized,
{
    if cards.is_empty() {
        return Ok(());
    }
    let keys: Vec<CardKey> = cards.iter().map(Card::key).collect();
    debug!(batch = keys.len(), "resolving card names");

    let names = resolver
        .resolve(&keys)
        .await
        .map_err(|cause| translate_error(cards, cause))?;

    if names.len() < cards.len() {
        let missing = &cards[names.len()];
        return Err(translate_error(cards, ResolveError::not_found(&missing.key())));
    }
    if names.len() > cards.len() {
        return Err(translate_error(
            cards,
            ResolveError::Unavailable(format!(
                "{} names returned for {} cards",
                names.len(),
                cards.len()
            )),
        ));
    }

    for (card, name) in cards.iter_mut().zip(names) {
        card.set_name(name);
    }
    Ok(())
}

// Attributes the failure to the card it names, or to the first card of the batch.
fn translate_error(cards: &[Card], cause: ResolveError) -> TranslateError {
    let card = match &cause {
        ResolveError::NotFound {
            edition,
            collector_id,
        } => cards
            .iter()
            .find(|c| c.edition() == edition.as_str() && c.collector_id() == collector_id.as_str()),
        ResolveError::Unavailable(_) => None,
    }
    .or_else(|| cards.first());

    TranslateError {
        name: card.map(|c| c.name().to_string()).unwrap_or_default(),
        edition: card.map(|c| c.edition().to_string()).unwrap_or_default(),
        collector_id: card.map(|c| c.collector_id().to_string()).unwrap_or_default(),
        cause,
    }
}
