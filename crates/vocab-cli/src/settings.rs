//! User settings loaded from TOML.
//!
//! ```toml
//! [filter]
//! min_letters = 4
//! min_occurrences = 2
//! require_initial_capital = false
//! enabled = true
//! exclusion_lists = ["~/words/seen.txt"]
//!
//! [export]
//! states = ["unknown"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use vocab_model::{ExclusionSet, FilterConfig, WordState};
use vocab_store::load_word_list;

/// File name inside the platform config directory.
pub const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Filter applied to new sessions.
    pub filter: FilterSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    pub min_letters: usize,
    pub min_occurrences: u32,
    pub require_initial_capital: bool,
    pub enabled: bool,
    /// Word list files; each becomes an exclusion set named after the file.
    pub exclusion_lists: Vec<PathBuf>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            min_letters: 0,
            min_occurrences: 0,
            require_initial_capital: false,
            enabled: true,
            exclusion_lists: Vec::new(),
        }
    }
}

impl FilterSettings {
    /// Build the filter, reading every configured exclusion list.
    pub fn to_filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::default()
            .with_min_letters(self.min_letters)
            .with_min_occurrences(self.min_occurrences)
            .with_initial_capital(self.require_initial_capital)
            .with_filters_enabled(self.enabled);
        for path in &self.exclusion_lists {
            let words = load_word_list(path)
                .with_context(|| format!("read exclusion list {}", path.display()))?;
            config.add_exclusion_set(ExclusionSet::from_words(list_name(path), words));
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// States exported when `--state` is not given.
    pub states: Vec<WordState>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            states: vec![WordState::Unknown],
        }
    }
}

impl Settings {
    /// Load from `path`, else from the platform config directory, else defaults.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read settings {}", path.display()))?;
        let settings = Self::parse(&text)
            .with_context(|| format!("parse settings {}", path.display()))?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// `settings.toml` in the user config directory, if the platform has one.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("io.github", "vocab", "vocab")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

/// Exclusion set name for a word list file.
pub fn list_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("word list")
        .to_string()
}
