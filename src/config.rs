//! Configuration management for the application.
//!
//! This module handles loading and saving application configuration in TOML
//! format with platform-specific directory resolution.

use anyhow::{Context, Result};
use crossterm::event::KeyModifiers;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Parses a case-insensitive mode name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

/// Modifier key that lets a click reach the preview while inspecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PassthroughModifier {
    /// Alt / Option
    #[default]
    Alt,
    /// Control
    Control,
    /// Shift
    Shift,
}

impl PassthroughModifier {
    /// The crossterm modifier flag for this key.
    #[must_use]
    pub const fn key_modifiers(&self) -> KeyModifiers {
        match self {
            Self::Alt => KeyModifiers::ALT,
            Self::Control => KeyModifiers::CONTROL,
            Self::Shift => KeyModifiers::SHIFT,
        }
    }

    /// Display name used in hints.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Alt => "Alt",
            Self::Control => "Ctrl",
            Self::Shift => "Shift",
        }
    }

    /// Parses a case-insensitive key name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "alt" | "option" => Some(Self::Alt),
            "ctrl" | "control" => Some(Self::Control),
            "shift" => Some(Self::Shift),
            _ => None,
        }
    }
}

/// Which inspector shell presents the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InspectorLayout {
    /// Fixed panel beside the preview
    #[default]
    Docked,
    /// Floating panel over the preview
    Floating,
}

impl InspectorLayout {
    /// The other layout.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Docked => Self::Floating,
            Self::Floating => Self::Docked,
        }
    }

    /// Parses a case-insensitive layout name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "docked" => Some(Self::Docked),
            "floating" => Some(Self::Floating),
            _ => None,
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Inspector behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InspectorConfig {
    /// Modifier that lets clicks pass through while inspecting
    #[serde(default)]
    pub passthrough_modifier: PassthroughModifier,
    /// Docked or floating inspector
    #[serde(default)]
    pub layout: InspectorLayout,
    /// Whether inspector mode is on at startup
    #[serde(default)]
    pub start_active: bool,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/TeamSkin/config.toml`
/// - macOS: `~/Library/Application Support/TeamSkin/config.toml`
/// - Windows: `%APPDATA%\TeamSkin\config.toml`
///
/// `TEAMSKIN_CONFIG_DIR` overrides the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Inspector preferences
    #[serde(default)]
    pub inspector: InspectorConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path, honoring `TEAMSKIN_CONFIG_DIR`.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        Ok(dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME))
    }

    /// Gets the full path to the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the path of the editor's log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("teamskin.log"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem step fails.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.inspector.passthrough_modifier, PassthroughModifier::Alt);
        assert_eq!(config.inspector.layout, InspectorLayout::Docked);
        assert!(!config.inspector.start_active);
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Light;
        config.inspector.passthrough_modifier = PassthroughModifier::Control;
        config.inspector.layout = InspectorLayout::Floating;

        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: Config = toml::from_str("[inspector]\nstart_active = true\n").unwrap();
        assert!(parsed.inspector.start_active);
        assert_eq!(parsed.inspector.layout, InspectorLayout::Docked);
        assert_eq!(parsed.ui.theme_mode, ThemeMode::Auto);
    }

    #[test]
    fn test_name_parsing() {
        assert_eq!(ThemeMode::from_name("DARK"), Some(ThemeMode::Dark));
        assert_eq!(PassthroughModifier::from_name("ctrl"), Some(PassthroughModifier::Control));
        assert_eq!(PassthroughModifier::from_name("meta"), None);
        assert_eq!(InspectorLayout::from_name("floating"), Some(InspectorLayout::Floating));
        assert_eq!(InspectorLayout::Docked.toggled(), InspectorLayout::Floating);
    }
}
