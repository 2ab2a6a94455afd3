use decksync_engine::{DeckRules, ExportProfile, MAIN_DECK_MIN, SIDEBOARD_MAX};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub main_min: u32,
    pub sideboard_max: u32,
    pub translate: bool,
    pub profile: ExportProfile,
    pub catalog: Option<String>,
}

impl Config {
    pub fn rules(&self) -> DeckRules {
        DeckRules {
            main_min: self.main_min,
            sideboard_max: self.sideboard_max,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub main_min: ValueSource,
    pub sideboard_max: ValueSource,
    pub translate: ValueSource,
    pub profile: ValueSource,
    pub catalog: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            main_min: ValueSource::Default,
            sideboard_max: ValueSource::Default,
            translate: ValueSource::Default,
            profile: ValueSource::Default,
            catalog: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            main_min: MAIN_DECK_MIN,
            sideboard_max: SIDEBOARD_MAX,
            translate: false,
            profile: ExportProfile::Canonical,
            catalog: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("DECKSYNC_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.main_min {
            cfg.main_min = v;
            sources.main_min = ValueSource::File;
        }
        if let Some(v) = f.sideboard_max {
            cfg.sideboard_max = v;
            sources.sideboard_max = ValueSource::File;
        }
        if let Some(v) = f.translate {
            cfg.translate = v;
            sources.translate = ValueSource::File;
        }
        if let Some(v) = f.profile {
            cfg.profile = v;
            sources.profile = ValueSource::File;
        }
        if let Some(v) = f.catalog {
            cfg.catalog = Some(v);
            sources.catalog = ValueSource::File;
        }
    }

    if let Ok(v) = std::env::var("DECKSYNC_MAIN_MIN")
        && !v.is_empty()
    {
        cfg.main_min = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid main_min".into()))?;
        sources.main_min = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("DECKSYNC_SIDEBOARD_MAX")
        && !v.is_empty()
    {
        cfg.sideboard_max = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid sideboard_max".into()))?;
        sources.sideboard_max = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("DECKSYNC_TRANSLATE")
        && !v.is_empty()
    {
        cfg.translate =
            parse_bool(&v).ok_or_else(|| ConfigError::Invalid("Invalid translate".into()))?;
        sources.translate = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("DECKSYNC_PROFILE")
        && !v.is_empty()
    {
        cfg.profile = v.parse().map_err(ConfigError::Invalid)?;
        sources.profile = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("DECKSYNC_CATALOG")
        && !v.is_empty()
    {
        cfg.catalog = Some(v);
        sources.catalog = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    main_min: Option<u32>,
    #[serde(default)]
    sideboard_max: Option<u32>,
    #[serde(default)]
    translate: Option<bool>,
    #[serde(default)]
    profile: Option<ExportProfile>,
    #[serde(default)]
    catalog: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.main_min == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: main_min must be >=1".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
