//! User configuration
//!
//! Stored as TOML at `<config_dir>/slidecast/config.toml` (or the path in
//! `SLIDECAST_CONFIG`). Every field has a default, so a missing file or a
//! partial file both load.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item};

use crate::player::engine::{is_valid_rate, MAX_RATE, MIN_RATE};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SLIDECAST_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub logging: LoggingConfig,
}

/// Interactive player settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Deck file to play when none is given (empty = built-in deck)
    pub deck: String,
    /// Start playing the first slide immediately
    pub autoplay: bool,
    /// Initial playback speed multiplier
    pub speed: f64,
    /// Open the help overlay on start
    pub show_help_on_start: bool,
    /// Color theme: slate, classic or ocean
    pub theme: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            deck: String::new(),
            autoplay: false,
            speed: 1.0,
            show_help_on_start: false,
            theme: "slate".to_string(),
        }
    }
}

impl PlayerConfig {
    /// Configured deck path, if any.
    pub fn deck_path(&self) -> Option<&Path> {
        if self.deck.is_empty() {
            None
        } else {
            Some(Path::new(&self.deck))
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when SLIDECAST_LOG is unset (e.g. "info", "slidecast=debug")
    pub level: String,
    /// Log file for the interactive player (empty = cache dir)
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: String::new(),
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("slidecast").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Check values serde cannot constrain.
    pub fn validate(&self) -> Result<()> {
        let speed = self.player.speed;
        if !is_valid_rate(speed) {
            bail!(
                "player.speed = {} must be between {} and {}",
                speed,
                MIN_RATE,
                MAX_RATE
            );
        }
        Ok(())
    }

    /// Write the config file, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Outcome of `migrate_config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateResult {
    /// Migrated file content
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that were missing entirely
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add fields missing from `content` using the default config.
///
/// Existing values, comments and ordering are kept; only absent keys and
/// sections are appended.
pub fn migrate_config(content: &str) -> Result<MigrateResult> {
    let mut doc: DocumentMut = content.parse().context("Failed to parse config")?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?
        .parse()
        .context("Failed to build default config")?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        if !doc.contains_key(section) {
            doc.insert(section, Item::Table(default_table.clone()));
            sections_added.push(section.to_string());
            added_fields.extend(
                default_table
                    .iter()
                    .map(|(key, _)| format!("{}.{}", section, key)),
            );
            continue;
        }

        // A non-table value under a section name is left for the user to fix
        let Some(table) = doc[section].as_table_mut() else {
            continue;
        };
        for (key, value) in default_table.iter() {
            if !table.contains_key(key) {
                table.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
