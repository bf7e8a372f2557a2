//! Configuration management CLI commands.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::config::{Config, InspectorLayout, PassthroughModifier, ThemeMode};
use crate::constants::APP_NAME;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Click-through modifier while inspecting (alt, ctrl, or shift)
    #[arg(long, value_name = "KEY")]
    modifier: Option<String>,

    /// Inspector layout (docked or floating)
    #[arg(long, value_name = "LAYOUT")]
    layout: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    ui: UiOutput,
    inspector: InspectorOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
}

#[derive(Serialize, Debug)]
struct InspectorOutput {
    passthrough_modifier: String,
    layout: String,
    start_active: bool,
}

impl From<&Config> for ConfigOutput {
    fn from(config: &Config) -> Self {
        Self {
            ui: UiOutput {
                theme: format!("{:?}", config.ui.theme_mode).to_lowercase(),
            },
            inspector: InspectorOutput {
                passthrough_modifier: format!("{:?}", config.inspector.passthrough_modifier).to_lowercase(),
                layout: format!("{:?}", config.inspector.layout).to_lowercase(),
                start_active: config.inspector.start_active,
            },
        }
    }
}

impl ConfigArgs {
    /// Execute config subcommand
    ///
    /// # Errors
    ///
    /// Returns error if the configuration cannot be loaded, validated or saved
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    fn execute(&self) -> Result<()> {
        let config = Config::load().context("Failed to load configuration")?;
        let output = ConfigOutput::from(&config);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        println!("{APP_NAME} Configuration");
        println!("=====================");
        println!();
        println!("UI:");
        println!("  Theme Mode: {}", output.ui.theme);
        println!();
        println!("Inspector:");
        println!("  Passthrough Modifier: {}", output.inspector.passthrough_modifier);
        println!("  Layout: {}", output.inspector.layout);
        println!("  Start Active: {}", output.inspector.start_active);
        Ok(())
    }
}

impl ConfigSetArgs {
    fn execute(&self) -> Result<()> {
        if self.theme.is_none() && self.modifier.is_none() && self.layout.is_none() {
            bail!("At least one configuration option must be specified: --theme, --modifier, or --layout");
        }

        let mut config = Config::load().unwrap_or_default();
        self.apply(&mut config)?;
        config.save().context("Failed to save configuration")?;

        println!("Configuration updated successfully.");
        Ok(())
    }

    fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(name) = &self.theme {
            config.ui.theme_mode = ThemeMode::from_name(name)
                .with_context(|| format!("Invalid theme mode '{name}'. Must be 'auto', 'light', or 'dark'"))?;
        }
        if let Some(name) = &self.modifier {
            config.inspector.passthrough_modifier = PassthroughModifier::from_name(name)
                .with_context(|| format!("Invalid modifier '{name}'. Must be 'alt', 'ctrl', or 'shift'"))?;
        }
        if let Some(name) = &self.layout {
            config.inspector.layout = InspectorLayout::from_name(name)
                .with_context(|| format!("Invalid layout '{name}'. Must be 'docked' or 'floating'"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(theme: Option<&str>, modifier: Option<&str>, layout: Option<&str>) -> ConfigSetArgs {
        ConfigSetArgs {
            theme: theme.map(String::from),
            modifier: modifier.map(String::from),
            layout: layout.map(String::from),
        }
    }

    #[test]
    fn test_apply_parses_names() {
        let mut config = Config::default();
        set(Some("Dark"), Some("ctrl"), Some("floating"))
            .apply(&mut config)
            .unwrap();
        assert_eq!(config.ui.theme_mode, ThemeMode::Dark);
        assert_eq!(config.inspector.passthrough_modifier, PassthroughModifier::Control);
        assert_eq!(config.inspector.layout, InspectorLayout::Floating);
    }

    #[test]
    fn test_apply_rejects_unknown_values() {
        let mut config = Config::default();
        assert!(set(Some("sepia"), None, None).apply(&mut config).is_err());
        assert!(set(None, Some("meta"), None).apply(&mut config).is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(ConfigOutput::from(&Config::default())).unwrap();
        assert_eq!(json["ui"]["theme"], "auto");
        assert_eq!(json["inspector"]["passthrough_modifier"], "alt");
        assert_eq!(json["inspector"]["layout"], "docked");
    }
}
