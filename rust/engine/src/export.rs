//! Decklist export.
//!
//! [`ExportProfile::Canonical`] is the engine's own rendering: commander, main
//! deck, then a literal `Sideboard:` line followed by companion and sideboard.
//! The other profiles reshape the same groups for a specific deck builder.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cards::Card;

/// Literal header line opening the sideboard part of an export.
pub const SIDEBOARD_HEADER: &str = "Sideboard:";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportProfile {
    #[default]
    Canonical,
    ManaStack,
    Archidekt,
}

impl ExportProfile {
    pub const ALL: [ExportProfile; 3] = [
        ExportProfile::Canonical,
        ExportProfile::ManaStack,
        ExportProfile::Archidekt,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExportProfile::Canonical => "canonical",
            ExportProfile::ManaStack => "manastack",
            ExportProfile::Archidekt => "archidekt",
        }
    }
}

impl fmt::Display for ExportProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        ExportProfile::ALL
            .into_iter()
            .find(|p| p.as_str() == token)
            .ok_or_else(|| format!("unknown export profile `{}`", s.trim()))
    }
}

/// Borrowed view of the card groups of a deck.
pub(crate) struct Groups<'a> {
    pub main: &'a [Card],
    pub side: &'a [Card],
    pub commander: Option<&'a Card>,
    pub companion: Option<&'a Card>,
}

pub(crate) fn render(groups: &Groups<'_>, profile: ExportProfile) -> String {
    match profile {
        ExportProfile::Canonical => canonical(groups),
        ExportProfile::ManaStack => manastack(groups),
        ExportProfile::Archidekt => archidekt(groups),
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn canonical(g: &Groups<'_>) -> String {
    let mut out = String::new();
    if let Some(commander) = g.commander {
        push_line(&mut out, &commander.export_line());
    }
    for card in g.main {
        push_line(&mut out, &card.export_line());
    }
    if !g.side.is_empty() || g.companion.is_some() {
        push_line(&mut out, SIDEBOARD_HEADER);
        if let Some(companion) = g.companion {
            push_line(&mut out, &companion.export_line());
        }
        for card in g.side {
            push_line(&mut out, &card.export_line());
        }
    }
    out
}

// Commanders are not displayed by ManaStack outside of the sideboard.
fn manastack(g: &Groups<'_>) -> String {
    let mut out = String::new();
    for card in g.main {
        push_line(&mut out, &card.export_line());
    }
    if g.companion.is_some() || g.commander.is_some() || !g.side.is_empty() {
        push_line(&mut out, SIDEBOARD_HEADER);
        for card in g.companion.into_iter().chain(g.commander) {
            push_line(&mut out, &card.export_line());
        }
        for card in g.side {
            push_line(&mut out, &card.export_line());
        }
    }
    out
}

fn archidekt_line(card: &Card, tag: Option<&str>) -> String {
    let line = format!(
        "{} {} ({})",
        card.quantity(),
        card.name(),
        card.edition().to_ascii_lowercase()
    );
    match tag {
        Some(tag) => format!("{} [{}]", line, tag),
        None => line,
    }
}

fn archidekt(g: &Groups<'_>) -> String {
    let mut main = String::new();
    if let Some(commander) = g.commander {
        push_line(&mut main, &archidekt_line(commander, Some("Commander")));
    }
    for card in g.main {
        push_line(&mut main, &archidekt_line(card, None));
    }

    let mut side = String::new();
    if let Some(companion) = g.companion {
        push_line(&mut side, &archidekt_line(companion, Some("Companion")));
    }
    for card in g.side {
        push_line(&mut side, &archidekt_line(card, Some("Sideboard")));
    }

    if side.is_empty() {
        main
    } else {
        format!("{}\n{}", main, side)
    }
}
