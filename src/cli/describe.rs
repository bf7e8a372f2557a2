//! `describe`: resolve the editable properties of a component.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::models::{ElementId, ProjectConfig};
use crate::registry::{ComponentType, PropertyKind, Trait};
use crate::resolver::{attach_values, merge_descriptors_by_name, EditableProp};

/// Print the merged property list for a component type and traits
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Component type (header, card, text, icon, container, button, image, tab, badge)
    #[arg(long = "type", value_name = "TYPE")]
    component_type: String,

    /// Comma-separated traits, in declaration order
    #[arg(long, value_delimiter = ',', value_name = "TRAITS")]
    traits: Vec<String>,

    /// Element id whose current values are shown
    #[arg(long, value_name = "ID")]
    id: Option<String>,

    /// Project file to read current values from
    #[arg(long, value_name = "FILE", requires = "id")]
    project: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable description
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct DescribeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    component_type: String,
    traits: Vec<String>,
    editable_props: Vec<EditableProp>,
}

impl DescribeArgs {
    /// Execute describe command
    ///
    /// # Errors
    ///
    /// Returns error if the project file cannot be read
    pub fn execute(&self) -> Result<()> {
        let output = self.resolve()?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            print_human_readable(&output);
        }
        Ok(())
    }

    fn resolve(&self) -> Result<DescribeOutput> {
        if ComponentType::from_name(&self.component_type).is_none() {
            tracing::warn!(name = %self.component_type, "unknown component type, no type properties");
        }
        for name in &self.traits {
            if Trait::from_name(name).is_none() {
                tracing::warn!(name = %name, "unknown trait, ignored");
            }
        }

        let project = self.project.as_deref().map(ProjectConfig::load).transpose()?;
        let id = self.id.as_deref().map(ElementId::new);
        let entry = project
            .as_ref()
            .zip(id.as_ref())
            .and_then(|(project, id)| project.component_overrides.entry(id));

        let editable_props = attach_values(
            merge_descriptors_by_name(&self.component_type, &self.traits),
            entry,
        );

        Ok(DescribeOutput {
            id: id.map(|id| id.to_string()),
            component_type: self.component_type.trim().to_ascii_lowercase(),
            traits: self.traits.iter().map(|t| t.trim().to_ascii_lowercase()).collect(),
            editable_props,
        })
    }
}

fn kind_name(kind: &PropertyKind) -> String {
    match kind {
        PropertyKind::Text { .. } => "text".to_string(),
        PropertyKind::Color => "color".to_string(),
        PropertyKind::Slider { min, max, unit, .. } => format!("slider {min}..{max}{unit}"),
        PropertyKind::Number { min, max, unit, .. } => format!("number {min}..{max}{unit}"),
        PropertyKind::Select { options } => format!("select [{}]", options.join("|")),
        PropertyKind::Toggle => "toggle".to_string(),
        PropertyKind::ImageUpload => "image upload".to_string(),
    }
}

fn print_human_readable(output: &DescribeOutput) {
    match &output.id {
        Some(id) => println!("{} ({id})", output.component_type),
        None => println!("{}", output.component_type),
    }
    if !output.traits.is_empty() {
        println!("Traits: {}", output.traits.join(", "));
    }
    println!();

    if output.editable_props.is_empty() {
        println!("  (no editable properties)");
        return;
    }
    for prop in &output.editable_props {
        let value = if prop.is_overridden() {
            format!(" = {}", prop.value)
        } else {
            String::new()
        };
        println!(
            "  {:<22} {:<20} {}{value}",
            prop.descriptor.key,
            prop.descriptor.label,
            kind_name(&prop.descriptor.kind)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OverrideValue;
    use crate::models::overrides::keys;
    use tempfile::TempDir;

    fn args(component_type: &str, traits: &[&str]) -> DescribeArgs {
        DescribeArgs {
            component_type: component_type.to_string(),
            traits: traits.iter().map(ToString::to_string).collect(),
            id: None,
            project: None,
            json: true,
        }
    }

    #[test]
    fn test_unknown_type_degrades_to_empty() {
        let output = args("carousel", &[]).resolve().unwrap();
        assert!(output.editable_props.is_empty());
    }

    #[test]
    fn test_values_read_from_project() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("project.json");
        let mut project = ProjectConfig::new("Describe");
        project
            .component_overrides
            .write(&ElementId::new("home_news_0"), keys::TEXT, "Breaking".into());
        project.save(&path).unwrap();

        let mut describe = args("text", &["content", "typography"]);
        describe.id = Some("home_news_0".to_string());
        describe.project = Some(path);
        let output = describe.resolve().unwrap();

        let text = output
            .editable_props
            .iter()
            .find(|p| p.descriptor.key == keys::TEXT)
            .unwrap();
        assert_eq!(text.value, OverrideValue::from("Breaking"));
        assert!(output
            .editable_props
            .iter()
            .filter(|p| p.descriptor.key != keys::TEXT)
            .all(|p| !p.is_overridden()));
    }
}
