//! Input helpers for decklists and card catalogs.
//!
//! Inputs are read whole as UTF-8 text. A leading UTF-8 BOM, which some text
//! editors add when saving, is removed before the text reaches the engine.

use std::io::Read;

/// Path value selecting standard input.
pub const STDIN_PATH: &str = "-";

/// Reads a text file, or the given reader when `path` is [`STDIN_PATH`].
///
/// # Example
///
/// ```rust,no_run
/// # use decksync_cli::io_utils::read_input;
/// let mut stdin = std::io::stdin();
/// let list = read_input("decks/temur.txt", &mut stdin).unwrap();
/// ```
pub fn read_input(path: &str, stdin: &mut dyn Read) -> std::io::Result<String> {
    let mut content = if path == STDIN_PATH {
        let mut buf = String::new();
        stdin.read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Reads a text file, stripping a leading UTF-8 BOM.
pub fn read_text(path: &str) -> std::io::Result<String> {
    let mut content = std::fs::read_to_string(path)?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_strip_utf8_bom() {
        let mut s = "\u{feff}hello".to_string();
        strip_utf8_bom(&mut s);
        assert_eq!(s, "hello");
    }

    #[test]
    fn test_strip_utf8_bom_no_bom() {
        let mut s = "hello".to_string();
        strip_utf8_bom(&mut s);
        assert_eq!(s, "hello");
    }

    #[test]
    fn test_read_input_from_stdin() {
        let mut stdin = Cursor::new("\u{feff}Deck\n4 Shock (M20) 160\n".as_bytes());
        let text = read_input(STDIN_PATH, &mut stdin).unwrap();
        assert_eq!(text, "Deck\n4 Shock (M20) 160\n");
    }

    #[test]
    fn test_read_input_from_file_ignores_stdin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\u{feff}Sideboard").unwrap();
        let mut stdin = Cursor::new("unused".as_bytes());
        let text = read_input(file.path().to_str().unwrap(), &mut stdin).unwrap();
        assert_eq!(text, "Sideboard");
    }

    #[test]
    fn test_read_text_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(read_text(missing.to_str().unwrap()).is_err());
    }
}
