//! Project aggregate: team theme, header configuration and component overrides.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use super::RgbColor;
use crate::store::OverrideStore;

/// Preview screen shown in the simulated app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Landing screen with hero header
    #[default]
    Home,
    /// Player roster
    Roster,
    /// Merchandise shop
    Shop,
}

impl Page {
    /// All pages in tab order.
    pub const ALL: [Self; 3] = [Self::Home, Self::Roster, Self::Shop];

    /// Display title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Roster => "Roster",
            Self::Shop => "Shop",
        }
    }

    /// Next page, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::Roster,
            Self::Roster => Self::Shop,
            Self::Shop => Self::Home,
        }
    }

    /// Tab index (0-based).
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::Roster => 1,
            Self::Shop => 2,
        }
    }
}

/// Team branding used as the design-system defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamTheme {
    /// Team display name
    pub name: String,
    /// Primary brand color
    pub primary: RgbColor,
    /// Secondary brand color
    pub secondary: RgbColor,
}

impl Default for TeamTheme {
    fn default() -> Self {
        Self {
            name: "Harbor City Gulls".to_string(),
            primary: RgbColor::new(0x1E, 0x3A, 0x8A),
            secondary: RgbColor::new(0x0E, 0xA5, 0xE9),
        }
    }
}

/// The theme/config aggregate owned by an editor session.
///
/// Loaded and replaced as a whole; the session never patches a loaded
/// project field by field from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Project identity
    pub id: Uuid,
    /// Project display name
    pub name: String,
    /// Team branding
    #[serde(default)]
    pub team: TeamTheme,
    /// Page currently shown in the preview
    #[serde(default)]
    pub page: Page,
    /// Whether the persistent quick-access menu row is shown under the header
    #[serde(default)]
    pub quick_access_menu: bool,
    /// Whether tab navigation is embedded in the header
    #[serde(default = "default_header_tabs")]
    pub header_tabs: bool,
    /// Last modification timestamp
    pub modified: DateTime<Utc>,
    /// Sparse per-element overrides
    #[serde(default)]
    pub component_overrides: OverrideStore,
}

const fn default_header_tabs() -> bool {
    true
}

impl ProjectConfig {
    /// Creates a fresh project with an empty override store.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            team: TeamTheme::default(),
            page: Page::default(),
            quick_access_menu: false,
            header_tabs: default_header_tabs(),
            modified: Utc::now(),
            component_overrides: OverrideStore::new(),
        }
    }

    /// Loads a project from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read project file: {}", path.display()))?;
        let project: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse project file: {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            overrides = project.component_overrides.len(),
            "project loaded"
        );
        Ok(project)
    }

    /// Loads a project, or creates a new one named after the file when it
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load_or_new(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load(path);
        }
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("Untitled");
        Ok(Self::new(name))
    }

    /// Saves the project as pretty JSON using temp file + rename.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem step fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize project")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create project directory: {}", parent.display())
            })?;
        }

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp project file: {}", temp_path.display())
        })?;
        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp project file to: {}", path.display())
        })?;

        tracing::info!(path = %path.display(), "project saved");
        Ok(())
    }

    /// Marks the project as modified now.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::overrides::keys;
    use crate::models::ElementId;
    use tempfile::TempDir;

    #[test]
    fn test_new_project_has_empty_store() {
        let project = ProjectConfig::new("Demo");
        assert!(project.component_overrides.is_empty());
        assert_eq!(project.page, Page::Home);
        assert!(project.header_tabs);
        assert!(!project.quick_access_menu);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("demo.json");

        let mut project = ProjectConfig::new("Demo");
        project.component_overrides.write(
            &ElementId::new("header_main"),
            keys::GRADIENT_START,
            "#112233".into(),
        );
        project.save(&path).unwrap();

        let loaded = ProjectConfig::load(&path).unwrap();
        assert_eq!(loaded, project);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_load_or_new_missing_file() {
        let temp = TempDir::new().unwrap();
        let project = ProjectConfig::load_or_new(&temp.path().join("gulls.json")).unwrap();
        assert_eq!(project.name, "gulls");
    }

    #[test]
    fn test_load_rejects_garbage() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = ProjectConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse project file"));
    }

    #[test]
    fn test_page_cycle() {
        assert_eq!(Page::Home.next(), Page::Roster);
        assert_eq!(Page::Shop.next(), Page::Home);
        assert_eq!(Page::Shop.index(), 2);
    }
}
