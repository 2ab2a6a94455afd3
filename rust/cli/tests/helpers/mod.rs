#![allow(dead_code)]

use std::path::Path;

#[derive(Debug)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliResult {
    let mut argv = vec!["decksync"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let exit_code = decksync_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8(out).expect("stdout is utf-8"),
        stderr: String::from_utf8(err).expect("stderr is utf-8"),
    }
}

/// Writes `contents` into `dir/name` and returns the path as a string.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path.to_string_lossy().into_owned()
}

pub const TEMUR: &str = "Temur Elementals // standard // Sixty cards\n\
Deck\n\
4 Shock (M20) 160\n\
4 Opt (ELD) 59\n\
12 Forest (ELD) 266\n\
20 Island (ELD) 254\n\
20 Mountain (M20) 273\n\
\n\
Sideboard\n\
3 Negate (M20) 69\n\
2 Bonecrusher Giant // Stomp (ELD) 115\n";

pub const CATALOG: &str = r#"[
  {"set": "M20", "collector_number": "160", "name": "Shock"},
  {"set": "ELD", "collector_number": "59", "name": "Opt"},
  {"set": "ELD", "collector_number": "266", "name": "Forest"},
  {"set": "ELD", "collector_number": "254", "name": "Island"},
  {"set": "M20", "collector_number": "273", "name": "Mountain"},
  {"set": "M20", "collector_number": "69", "name": "Negate"},
  {"set": "ELD", "collector_number": "115", "name": "Bonecrusher Giant // Stomp"}
]"#;

/// Removes every `DECKSYNC_*` variable read by the configuration loader.
pub fn clear_env() {
    for var in [
        "DECKSYNC_CONFIG",
        "DECKSYNC_MAIN_MIN",
        "DECKSYNC_SIDEBOARD_MAX",
        "DECKSYNC_TRANSLATE",
        "DECKSYNC_PROFILE",
        "DECKSYNC_CATALOG",
    ] {
        // SAFETY: env-mutating tests are serialized with `#[serial]`.
        unsafe { std::env::remove_var(var) };
    }
}

pub fn set_env(key: &str, value: &str) {
    // SAFETY: env-mutating tests are serialized with `#[serial]`.
    unsafe { std::env::set_var(key, value) };
}
