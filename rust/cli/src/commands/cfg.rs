//! Configuration command handler.
//!
//! Displays the resolved decksync configuration with the source of every
//! value (default, environment, or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "main_min": {
//!     "value": 40,
//!     "source": "default"
//!   },
//!   "profile": {
//!     "value": "canonical",
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "main_min": {
            "value": config.main_min,
            "source": sources.main_min,
        },
        "sideboard_max": {
            "value": config.sideboard_max,
            "source": sources.sideboard_max,
        },
        "translate": {
            "value": config.translate,
            "source": sources.translate,
        },
        "profile": {
            "value": config.profile,
            "source": sources.profile,
        },
        "catalog": {
            "value": config.catalog,
            "source": sources.catalog,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_displays_json_output() {
        let mut out = Vec::new();
        handle_cfg_command(&mut out).expect("cfg should succeed");

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");

        for key in ["main_min", "sideboard_max", "translate", "profile", "catalog"] {
            assert!(json.get(key).is_some(), "missing {}", key);
            assert!(json[key].get("source").is_some());
        }
        assert!(output.contains("  "), "output should be indented");
    }

    #[test]
    #[serial]
    fn test_cfg_reports_env_source() {
        // SAFETY: env-mutating tests are serialized with `#[serial]`.
        unsafe { std::env::set_var("DECKSYNC_PROFILE", "archidekt") };
        let mut out = Vec::new();
        let result = handle_cfg_command(&mut out);
        unsafe { std::env::remove_var("DECKSYNC_PROFILE") };
        result.unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["profile"]["value"], "archidekt");
        assert_eq!(json["profile"]["source"], "env");
    }
}
