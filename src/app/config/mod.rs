// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[reveal]` - Scroll-triggered entrance transitions (threshold, duration)
//! - `[hero]` - Rotating word timing
//! - `[gallery]` - Carousel behavior on reopen
//! - `[content]` - Location of downloadable documents
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config::{self, ReopenPolicy};
//!
//! let (mut config, _warning) = config::load();
//! config.gallery.reopen_at = ReopenPolicy::First;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// Where the gallery carousel lands when it is opened again.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReopenPolicy {
    /// Resume at the last item shown before closing.
    #[default]
    LastViewed,
    /// Always start from the first item.
    First,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "it").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Entrance transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevealConfig {
    /// Visible fraction of a block required to trigger its reveal.
    #[serde(default = "default_threshold", skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f32>,

    /// Length of the fade/slide transition in milliseconds.
    #[serde(
        default = "default_reveal_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_ms: Option<u32>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            duration_ms: default_reveal_duration_ms(),
        }
    }
}

/// Hero word rotation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroConfig {
    #[serde(
        default = "default_hero_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_ms: Option<u32>,

    #[serde(default = "default_hero_swap_ms", skip_serializing_if = "Option::is_none")]
    pub swap_ms: Option<u32>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_hero_interval_ms(),
            swap_ms: default_hero_swap_ms(),
        }
    }
}

/// Gallery carousel settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    #[serde(default)]
    pub reopen_at: ReopenPolicy,
}

/// Bundled content settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    /// Directory holding the resume, thesis and presentation files.
    /// Falls back to `<data dir>/documents` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_dir: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub reveal: RevealConfig,

    #[serde(default)]
    pub hero: HeroConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub content: ContentConfig,
}

impl Config {
    /// Resolves the documents directory: config value first, platform default second.
    pub fn documents_dir(&self) -> Option<PathBuf> {
        self.content
            .documents_dir
            .clone()
            .or_else(paths::get_default_documents_dir)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_threshold() -> Option<f32> {
    Some(DEFAULT_REVEAL_THRESHOLD)
}

fn default_reveal_duration_ms() -> Option<u32> {
    Some(DEFAULT_REVEAL_DURATION_MS)
}

fn default_hero_interval_ms() -> Option<u32> {
    Some(DEFAULT_HERO_INTERVAL_MS)
}

fn default_hero_swap_ms() -> Option<u32> {
    Some(DEFAULT_HERO_SWAP_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some(err.i18n_key().to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.reveal.threshold, Some(DEFAULT_REVEAL_THRESHOLD));
        assert_eq!(config.reveal.duration_ms, Some(DEFAULT_REVEAL_DURATION_MS));
        assert_eq!(config.hero.interval_ms, Some(DEFAULT_HERO_INTERVAL_MS));
        assert_eq!(config.hero.swap_ms, Some(DEFAULT_HERO_SWAP_MS));
        assert_eq!(config.gallery.reopen_at, ReopenPolicy::LastViewed);
        assert_eq!(config.content.documents_dir, None);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        let config = Config {
            general: GeneralConfig {
                language: Some("it".to_string()),
                theme_mode: ThemeMode::Light,
            },
            reveal: RevealConfig {
                threshold: Some(0.3),
                duration_ms: Some(600),
            },
            hero: HeroConfig {
                interval_ms: Some(3000),
                swap_ms: Some(250),
            },
            gallery: GalleryConfig {
                reopen_at: ReopenPolicy::First,
            },
            content: ContentConfig {
                documents_dir: Some(PathBuf::from("/srv/docs")),
            },
        };

        save_to_path(&config, &config_path).expect("save should succeed");
        let loaded = load_from_path(&config_path).expect("load should succeed");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is not valid toml").expect("write file");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("a").join("b").join("settings.toml");

        save_to_path(&Config::default(), &nested).expect("save should succeed");
        assert!(nested.exists());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[gallery]\nreopen_at = \"first\"\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.gallery.reopen_at, ReopenPolicy::First);
        assert_eq!(loaded.reveal, RevealConfig::default());
        assert_eq!(loaded.hero, HeroConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let loaded: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_reopen_policy_is_rejected() {
        let parsed = toml::from_str::<Config>("[gallery]\nreopen_at = \"middle\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        config.reveal.threshold = Some(0.5);

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.reveal.threshold, Some(0.5));
        assert_eq!(loaded.general.language, Some("en-US".to_string()));
    }

    #[test]
    fn configured_documents_dir_wins_over_default() {
        let mut config = Config::default();
        config.content.documents_dir = Some(PathBuf::from("/opt/folio"));
        assert_eq!(config.documents_dir(), Some(PathBuf::from("/opt/folio")));
    }
}
