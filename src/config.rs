use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use quarry_items::Family;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuarryConfig {
    pub logging: LoggingConfig,
    pub items: ItemsConfig,
    pub creative: CreativeConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ItemsConfig {
    pub disabled_families: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreativeConfig {
    /// Stacks appended after the catalog, in this order.
    pub extra: Vec<ExtraStack>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ExtraStack {
    pub id: i32,
    #[serde(default)]
    pub meta: i16,
}

impl QuarryConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&s)?)
    }
}

/// Parses a level name; an unknown name is reported on stderr (logging is not up yet) and ignored.
pub fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.parse() {
        Ok(l) => Some(l),
        Err(_) => {
            eprintln!("unknown log level {s:?}; ignored");
            None
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.level.as_deref().and_then(parse_level)
    }
}

impl ItemsConfig {
    /// Every built-in family not named in `disabled_families`.
    pub fn enabled_families(&self) -> Vec<Family> {
        for name in &self.disabled_families {
            if Family::from_name(name).is_none() {
                log::warn!("quarry.toml: unknown item family {:?}", name);
            }
        }
        Family::ALL
            .iter()
            .copied()
            .filter(|f| !self.disabled_families.iter().any(|n| n == f.name()))
            .collect()
    }
}
