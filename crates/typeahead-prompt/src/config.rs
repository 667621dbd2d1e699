use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use typeahead::prelude::*;

const BUILTIN_WORDS: &str = include_str!("../data/words.txt");

fn default_true() -> bool {
    true
}

/// Settings read from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptConfig {
    /// Engine settings, such as `max_suggestions`
    #[serde(flatten)]
    pub engine: EngineConfig,

    /// Word lists to load, one word per line
    #[serde(default)]
    pub dictionaries: Vec<PathBuf>,

    /// Extra words to complete, listed inline
    #[serde(default)]
    pub words: Vec<String>,

    /// Whether to include the built-in English word list
    #[serde(default = "default_true")]
    pub builtin_words: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        PromptConfig {
            engine: EngineConfig::default(),
            dictionaries: vec![],
            words: vec![],
            builtin_words: true,
        }
    }
}

impl PromptConfig {
    /// Where the config file lives when `--config` isn't given
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("typeahead").join("config.toml"))
    }

    /// Load the config at `path`, or from the default location.
    ///
    /// An explicitly requested file has to exist, but a missing default file just means
    /// running with the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::read(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(PromptConfig::default())
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        // Word lists are relative to the config file, not to wherever we were started.
        if let Some(base) = path.parent() {
            for dict in config.dictionaries.iter_mut() {
                if dict.is_relative() {
                    *dict = base.join(&*dict);
                }
            }
        }

        tracing::info!(path = %path.display(), "Loaded config");

        Ok(config)
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the static dictionary described by this config.
    pub fn dictionary(&self) -> Result<Dictionary> {
        let mut dict = if self.builtin_words {
            Dictionary::from_reader(BUILTIN_WORDS.as_bytes())?
        } else {
            Dictionary::new()
        };

        for path in self.dictionaries.iter() {
            let words = Dictionary::load(path)?;
            dict.extend_from(&words);
        }

        for word in self.words.iter() {
            if !dict.insert(word) && !dict.contains(word) {
                tracing::warn!("Ignoring invalid word in config: {:?}", word);
            }
        }

        Ok(dict)
    }
}
