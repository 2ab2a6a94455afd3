//! Deck export command.
//!
//! Prints the deck rendered for a deck builder. The profile comes from
//! `--profile`, then the configured default.

use super::build_deck;
use crate::cli::DeckArgs;
use crate::config;
use crate::error::CliError;
use decksync_engine::ExportProfile;
use std::io::{Read, Write};

pub fn handle_export_command(
    args: &DeckArgs,
    profile: Option<&str>,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let profile = match profile {
        Some(p) => p.parse::<ExportProfile>().map_err(CliError::InvalidInput)?,
        None => cfg.profile,
    };
    let deck = build_deck(args, &cfg, stdin, err)?;
    write!(out, "{}", deck.export_to(profile))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Cursor;

    const LIST: &str = "Niv to Light // standard\n\
                        Commander\n\
                        1 Niv-Mizzet Reborn (WAR) 208\n\
                        \n\
                        Deck\n\
                        40 Island (ELD) 254\n";

    fn args() -> DeckArgs {
        DeckArgs {
            input: "-".into(),
            meta: None,
            translate: false,
            catalog: None,
        }
    }

    fn export(profile: Option<&str>) -> Result<String, CliError> {
        let mut stdin = Cursor::new(LIST.as_bytes());
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_export_command(&args(), profile, &mut stdin, &mut out, &mut err)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    #[serial]
    fn test_export_defaults_to_canonical() {
        assert_eq!(
            export(None).unwrap(),
            "1 Niv-Mizzet Reborn (WAR)\n40 Island (ELD)\n"
        );
    }

    #[test]
    #[serial]
    fn test_export_manastack_profile() {
        assert_eq!(
            export(Some("manastack")).unwrap(),
            "40 Island (ELD)\nSideboard:\n1 Niv-Mizzet Reborn (WAR)\n"
        );
    }

    #[test]
    #[serial]
    fn test_export_unknown_profile() {
        let result = export(Some("moxfield"));
        assert!(matches!(result, Err(CliError::InvalidInput(msg)) if msg.contains("moxfield")));
    }
}
