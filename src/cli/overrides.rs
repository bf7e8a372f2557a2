//! `overrides`: show, set and reset per-element overrides in a project file.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::models::{ElementId, Override, OverrideValue, ProjectConfig};

/// Override management commands
#[derive(Args, Debug)]
pub struct OverridesArgs {
    #[command(subcommand)]
    command: OverridesCommand,
}

#[derive(Subcommand, Debug)]
enum OverridesCommand {
    /// Display the project's overrides
    Show(ShowArgs),
    /// Write one override value
    Set(SetArgs),
    /// Remove all overrides of one element
    Reset(ResetArgs),
}

/// Display the project's overrides
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Project file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write one override value
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Project file (created when missing)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Element id, e.g. `home_hero_card`
    #[arg(value_name = "ID")]
    id: String,

    /// Property key, e.g. `backgroundColor`
    #[arg(value_name = "KEY")]
    key: String,

    /// Value; `true` and `false` are stored as booleans
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    value: String,
}

/// Remove all overrides of one element
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Project file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Element id
    #[arg(value_name = "ID")]
    id: String,
}

impl OverridesArgs {
    /// Execute overrides subcommand
    ///
    /// # Errors
    ///
    /// Returns error if the project cannot be read or written
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            OverridesCommand::Show(args) => args.execute(),
            OverridesCommand::Set(args) => args.execute(),
            OverridesCommand::Reset(args) => args.execute(),
        }
    }
}

impl ShowArgs {
    fn execute(&self) -> Result<()> {
        let project = ProjectConfig::load(&self.file)?;
        let store = &project.component_overrides;

        if self.json {
            let entries: BTreeMap<&ElementId, &Override> = store.iter().collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        println!("{} ({} overridden elements)", project.name, store.len());
        for (id, entry) in store.iter() {
            println!();
            println!("{id}");
            for (key, value) in entry.entries() {
                println!("  {key:<22} {value}");
            }
        }
        Ok(())
    }
}

impl SetArgs {
    fn execute(&self) -> Result<()> {
        let id = validated_id(&self.id)?;
        if self.key.trim().is_empty() {
            bail!("Property key must not be empty");
        }
        let key = self.key.trim();
        let value = OverrideValue::parse_input(&self.value);

        let mut project = ProjectConfig::load_or_new(&self.file)?;
        if !project.component_overrides.write(&id, key, value) {
            bail!("Invalid value '{}' for {key}", self.value);
        }
        project.touch();
        project.save(&self.file)?;
        println!("Set {id}.{key} in {}", self.file.display());
        Ok(())
    }
}

impl ResetArgs {
    fn execute(&self) -> Result<()> {
        let id = validated_id(&self.id)?;
        let mut project = ProjectConfig::load(&self.file)?;
        if !project.component_overrides.contains(&id) {
            println!("{id} has no overrides");
            return Ok(());
        }
        project.component_overrides.reset(&id);
        project.touch();
        project.save(&self.file)?;
        println!("Reset {id} in {}", self.file.display());
        Ok(())
    }
}

fn validated_id(raw: &str) -> Result<ElementId> {
    let id = ElementId::new(raw.trim());
    if id.as_str().is_empty() {
        bail!("Element id must not be empty");
    }
    if !id.follows_convention() {
        tracing::warn!(id = %id, "element id does not follow the domain_role[_index] convention");
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::overrides::keys;
    use tempfile::TempDir;

    #[test]
    fn test_set_creates_project_and_parses_booleans() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("gulls.json");

        SetArgs {
            file: file.clone(),
            id: "home_hero_card".to_string(),
            key: keys::VISIBLE.to_string(),
            value: "false".to_string(),
        }
        .execute()
        .unwrap();

        let project = ProjectConfig::load(&file).unwrap();
        assert_eq!(project.name, "gulls");
        assert!(project.component_overrides.is_hidden(&ElementId::new("home_hero_card")));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("project.json");
        let mut project = ProjectConfig::new("Reset");
        project
            .component_overrides
            .write(&ElementId::new("shop_card_0"), keys::PADDING, "2".into());
        project.save(&file).unwrap();

        let reset = ResetArgs {
            file: file.clone(),
            id: "shop_card_0".to_string(),
        };
        reset.execute().unwrap();
        reset.execute().unwrap();
        assert!(ProjectConfig::load(&file).unwrap().component_overrides.is_empty());
    }

    #[test]
    fn test_set_rejects_non_boolean_visibility() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("project.json");
        ProjectConfig::new("Strict").save(&file).unwrap();

        let result = SetArgs {
            file: file.clone(),
            id: "shop_add_0".to_string(),
            key: keys::VISIBLE.to_string(),
            value: "maybe".to_string(),
        }
        .execute();

        assert!(result.is_err());
        let project = ProjectConfig::load(&file).unwrap();
        assert!(!project.component_overrides.contains(&ElementId::new("shop_add_0")));
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(validated_id("  ").is_err());
    }
}
