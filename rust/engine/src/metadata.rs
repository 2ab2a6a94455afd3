use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DeckBuildingError;

/// Play formats a deck can be published under.
///
/// Discriminants are the numeric format ids used by deck builders.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Standard = 1,
    Modern = 2,
    Legacy = 3,
    Vintage = 4,
    Commander = 5,
    Sealed = 6,
    Tiny = 7,
    Pauper = 8,
    #[default]
    Casual = 9,
    Brawl = 10,
}

impl Format {
    pub const ALL: [Format; 10] = [
        Format::Standard,
        Format::Modern,
        Format::Legacy,
        Format::Vintage,
        Format::Commander,
        Format::Sealed,
        Format::Tiny,
        Format::Pauper,
        Format::Casual,
        Format::Brawl,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Standard => "standard",
            Format::Modern => "modern",
            Format::Legacy => "legacy",
            Format::Vintage => "vintage",
            Format::Commander => "commander",
            Format::Sealed => "sealed",
            Format::Tiny => "tiny",
            Format::Pauper => "pauper",
            Format::Casual => "casual",
            Format::Brawl => "brawl",
        }
    }

    /// Looks a format token up, falling back to [`Format::Casual`] for anything unknown.
    pub fn from_token(token: &str) -> Format {
        token.parse().unwrap_or_default()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Format::ALL
            .into_iter()
            .find(|f| f.as_str() == token)
            .ok_or_else(|| format!("unknown format `{}`", s.trim()))
    }
}

/// Deck level descriptive fields.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub format: Format,
    #[serde(default)]
    pub description: String,
}

impl Metadata {
    /// Builds metadata from the ordered fields `name`, `format`, `description`.
    ///
    /// Only the name is required; an unknown or missing format falls back to
    /// casual and a missing description to the empty string. Fields past the
    /// third are ignored.
    ///
    /// # Errors
    ///
    /// [`DeckBuildingError::MissingDeckName`] when there is no field or the name is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use decksync_engine::metadata::{Format, Metadata};
    ///
    /// let meta = Metadata::from_fields(&["Temur Elementals", "standard"]).unwrap();
    /// assert_eq!(meta.format, Format::Standard);
    /// assert_eq!(meta.description, "");
    ///
    /// assert!(Metadata::from_fields::<&str>(&[]).is_err());
    /// ```
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, DeckBuildingError> {
        let name = fields
            .first()
            .map(|n| n.as_ref().trim())
            .filter(|n| !n.is_empty())
            .ok_or(DeckBuildingError::MissingDeckName)?;

        let format = fields
            .get(1)
            .map(|f| Format::from_token(f.as_ref()))
            .unwrap_or_default();
        let description = fields
            .get(2)
            .map(|d| d.as_ref().trim().to_string())
            .unwrap_or_default();

        if fields.len() > 3 {
            tracing::debug!(extra = fields.len() - 3, "ignoring extra metadata fields");
        }

        Ok(Self {
            name: name.to_string(),
            format,
            description,
        })
    }
}

/// Splits a submission metadata line, `Name // format // description`, into trimmed fields.
///
/// The first `:` is dropped, so `Temur Elementals :` yields `["Temur Elementals"]`.
///
/// ```
/// use decksync_engine::metadata::parse_metadata_line;
///
/// assert_eq!(
///     parse_metadata_line("La Simplexité // casual // This is a test"),
///     vec!["La Simplexité", "casual", "This is a test"]
/// );
/// ```
pub fn parse_metadata_line(line: &str) -> Vec<String> {
    line.replacen(':', "", 1)
        .trim()
        .split("//")
        .map(|field| field.trim().to_string())
        .collect()
}

/// A raw submission: a metadata line followed by the decklist body.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Submission {
    pub metadata: Vec<String>,
    pub body: String,
}

impl Submission {
    /// Splits off the first line as metadata; everything after it is the decklist.
    ///
    /// ```
    /// use decksync_engine::metadata::Submission;
    ///
    /// let sub = Submission::parse("Temur // standard\nDeck\n4 Shock (M20) 160");
    /// assert_eq!(sub.metadata, vec!["Temur", "standard"]);
    /// assert_eq!(sub.body, "Deck\n4 Shock (M20) 160");
    /// ```
    pub fn parse(text: &str) -> Self {
        let text = text.trim_start_matches(['\r', '\n']);
        let (first, body) = match text.find('\n') {
            Some(idx) => (&text[..idx], &text[idx + 1..]),
            None => (text, ""),
        };
        Self {
            metadata: parse_metadata_line(first.trim_end_matches('\r')),
            body: body.to_string(),
        }
    }
}
