//! Configuration file handling for ascii-face.
//!
//! A config file is only read from an explicit `--config` path. Every key is
//! optional and command-line flags win over it.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::Preset;
use crate::backend::Filter;
use crate::convert::ConvertOptions;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    pub width: Option<i64>,
    pub chars: Option<String>,
    #[serde(default, deserialize_with = "deserialize_preset")]
    pub preset: Option<Preset>,
    #[serde(default)]
    pub invert: bool,
    pub scale: Option<f64>,
    pub filter: Option<Filter>,
}

fn deserialize_preset<'de, D>(deserializer: D) -> Result<Option<Preset>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let name: Option<String> = Option::deserialize(deserializer)?;
    name.map(|n| {
        Preset::from_name(&n).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "unknown preset '{n}', expected one of: standard, blocks, minimal"
            ))
        })
    })
    .transpose()
}

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub width: Option<i64>,
    pub chars: Option<String>,
    pub preset: Option<Preset>,
    pub invert: bool,
    pub scale: Option<f64>,
    pub filter: Option<Filter>,
}

impl Config {
    /// Load configuration from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Merge settings: CLI overrides > config file > built-in defaults.
    pub fn resolve(&self, cli: Overrides) -> ConvertOptions {
        let defaults = ConvertOptions::default();
        let render = &self.render;

        let chars = cli
            .chars
            .or_else(|| cli.preset.map(|p| p.chars().to_string()))
            .or_else(|| render.chars.clone())
            .or_else(|| render.preset.map(|p| p.chars().to_string()))
            .unwrap_or(defaults.chars);

        ConvertOptions {
            width: cli.width.or(render.width).unwrap_or(defaults.width),
            chars,
            invert: cli.invert || render.invert,
            scale: cli.scale.or(render.scale).unwrap_or(defaults.scale),
            filter: cli.filter.or(render.filter).unwrap_or(defaults.filter),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
