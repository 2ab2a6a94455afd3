use serde::{Deserialize, Serialize};
use std::fmt;

/// Edition codes emitted by some clients that differ from the code the rest of
/// the ecosystem knows the set under. Left side is matched after uppercasing.
pub const EDITION_ALIASES: &[(&str, &str)] = &[("DAR", "DOM")];

/// Normalizes an edition code: uppercase, then mapped through [`EDITION_ALIASES`].
///
/// ```
/// use decksync_engine::cards::normalize_edition;
///
/// assert_eq!(normalize_edition("grn"), "GRN");
/// assert_eq!(normalize_edition("dar"), "DOM");
/// ```
pub fn normalize_edition(edition: &str) -> String {
    let upper = edition.trim().to_ascii_uppercase();
    EDITION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == upper)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or(upper)
}

/// Lookup key of a printed card: normalized edition plus collector identifier.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CardKey {
    pub edition: String,
    pub collector_id: String,
}

impl CardKey {
    pub fn new(edition: &str, collector_id: &str) -> Self {
        Self {
            edition: normalize_edition(edition),
            collector_id: collector_id.trim().to_string(),
        }
    }
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.edition, self.collector_id)
    }
}

/// One printed card line of a decklist.
///
/// Edition and collector id are fixed at construction; the name can only be
/// replaced by name resolution.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Card {
    name: String,
    edition: String,
    collector_id: String,
    quantity: u32,
}

impl Card {
    /// Builds a card, normalizing the edition code. Returns `None` for a zero quantity.
    pub fn new(name: &str, edition: &str, collector_id: &str, quantity: u32) -> Option<Self> {
        if quantity == 0 {
            return None;
        }
        Some(Self {
            name: name.trim().to_string(),
            edition: normalize_edition(edition),
            collector_id: collector_id.trim().to_string(),
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text before the first `//` of split and transforming card names.
    pub fn first_part_name(&self) -> &str {
        self.name
            .split("//")
            .next()
            .map(str::trim)
            .unwrap_or(&self.name)
    }

    pub fn edition(&self) -> &str {
        &self.edition
    }

    pub fn collector_id(&self) -> &str {
        &self.collector_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn key(&self) -> CardKey {
        CardKey {
            edition: self.edition.clone(),
            collector_id: self.collector_id.clone(),
        }
    }

    /// `<quantity> <first part of name> (<EDITION>)`, the shape consumed by deck builders.
    pub fn export_line(&self) -> String {
        format!(
            "{} {} ({})",
            self.quantity,
            self.first_part_name(),
            self.edition
        )
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// Renders the full decklist line, which parses back into an equal card.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {}",
            self.quantity, self.name, self.edition, self.collector_id
        )
    }
}

/// Sum of quantities of a card group.
pub fn card_count(cards: &[Card]) -> u64 {
    cards.iter().map(|c| u64::from(c.quantity())).sum()
}
