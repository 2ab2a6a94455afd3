//! Section segmentation and header classification.
//!
//! A decklist is a sequence of blocks separated by blank lines. The first line
//! of each block is a header naming the section in one of the supported
//! languages:
//!
//! ```text
//! Commandant
//! 1 Niv-Mizzet revenu à la vie (WAR) 208
//!
//! Deck
//! 1 Œuf d'or (ELD) 220
//! ...
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::errors::DeckBuildingError;

/// Kind of a decklist section, as named by its header line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Main deck
    Deck,
    /// Sideboard
    Sideboard,
    /// Single commander card
    Commander,
    /// Single companion card
    Companion,
}

impl SectionKind {
    /// Whether the section holds exactly one card line.
    pub fn is_single_card(self) -> bool {
        matches!(self, SectionKind::Commander | SectionKind::Companion)
    }
}

/// Header keywords per section kind (English, French, Portuguese, Italian, German, Spanish).
pub const SECTION_KEYWORDS: &[(SectionKind, &[&str])] = &[
    (SectionKind::Deck, &["deck", "mazzo", "baralho", "mazo"]),
    (
        SectionKind::Sideboard,
        &["sideboard", "réserve", "reserve", "reserva", "banquillo", "panchina"],
    ),
    (
        SectionKind::Commander,
        &["commander", "commandant", "comandante", "kommandeur"],
    ),
    (
        SectionKind::Companion,
        &[
            "companion",
            "compagnon",
            "companheiro",
            "compagno",
            "gefährte",
            "compañero",
        ],
    ),
];

static KEYWORDS: LazyLock<HashMap<String, SectionKind>> = LazyLock::new(|| {
    SECTION_KEYWORDS
        .iter()
        .flat_map(|(kind, words)| words.iter().map(move |w| (w.to_lowercase(), *kind)))
        .collect()
});

/// Classifies a header line, ignoring case, surrounding whitespace and one trailing `:`.
///
/// ```
/// use decksync_engine::sections::{classify_header, SectionKind};
///
/// assert_eq!(classify_header("Mazzo"), Some(SectionKind::Deck));
/// assert_eq!(classify_header("Sideboard:"), Some(SectionKind::Sideboard));
/// assert_eq!(classify_header("Notes"), None);
/// ```
pub fn classify_header(header: &str) -> Option<SectionKind> {
    let trimmed = header.trim();
    let word = trimmed.strip_suffix(':').unwrap_or(trimmed).trim_end();
    KEYWORDS.get(&word.to_lowercase()).copied()
}

/// Splits raw decklist text into blocks of non-blank, trimmed lines.
///
/// `\r\n` and `\r` line endings are treated as `\n`; one or more blank (or
/// whitespace-only) lines separate blocks.
///
/// # Errors
///
/// Returns [`DeckBuildingError::NoSections`] when the text holds no block at all.
pub fn segment_blocks(raw: &str) -> Result<Vec<Vec<String>>, DeckBuildingError> {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");

    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for line in normalized.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.to_string());
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    if blocks.is_empty() {
        return Err(DeckBuildingError::NoSections);
    }
    Ok(blocks)
}
