//! Card line grammar.
//!
//! A card line reads `<quantity> <card name> (<edition>) <collector-id>`:
//!
//! ```text
//! 4 Nissa, celle qui fait trembler le monde (WAR) 169
//! ```
//!
//! The name runs up to the last parenthesized group, so names carrying `//`
//! (split and transforming cards) or commas parse as a whole.

use std::sync::LazyLock;

use regex::Regex;

use crate::cards::Card;
use crate::errors::ParsingError;

static CARD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s+(.+)\s+\(([A-Za-z0-9]{3,4})\)\s+([A-Za-z0-9]+)$")
        .expect("card line pattern is valid")
});

/// Parses a single decklist line into a [`Card`].
///
/// # Errors
///
/// Returns [`ParsingError`] carrying the line when it does not match the
/// grammar, or when its quantity is zero or does not fit a `u32`.
///
/// # Examples
///
/// ```
/// use decksync_engine::grammar::parse_card_line;
///
/// let card = parse_card_line("2 Cavalier of Thorns (M20) 167").unwrap();
/// assert_eq!(card.name(), "Cavalier of Thorns");
/// assert_eq!(card.quantity(), 2);
///
/// assert!(parse_card_line("Cavalier of Thorns").is_err());
/// ```
pub fn parse_card_line(line: &str) -> Result<Card, ParsingError> {
    let trimmed = line.trim();
    let caps = CARD_LINE
        .captures(trimmed)
        .ok_or_else(|| ParsingError::new(trimmed))?;

    let quantity: u32 = caps[1].parse().map_err(|_| ParsingError::new(trimmed))?;
    Card::new(&caps[2], &caps[3], &caps[4], quantity).ok_or_else(|| ParsingError::new(trimmed))
}
