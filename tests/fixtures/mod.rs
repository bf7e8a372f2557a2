//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test file uses every fixture

use chrono::{TimeZone, Utc};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use teamskin::models::{ElementId, Page, ProjectConfig};
use teamskin::tui::{Preview, PreviewFrame, SelectContext, Theme};
use uuid::Uuid;

/// Preview size used by rendering tests.
pub const PREVIEW_AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 46,
    height: 40,
};

/// A project with deterministic identity and timestamp.
pub fn test_project(page: Page) -> ProjectConfig {
    let mut project = ProjectConfig::new("Harbor City Gulls");
    project.id = Uuid::nil();
    project.modified = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    project.page = page;
    project
}

/// Draws the preview once and returns the buffer and frame facts.
pub fn draw_preview(project: &ProjectConfig, inspector_active: bool) -> (Buffer, PreviewFrame) {
    draw_preview_with_selection(project, inspector_active, None)
}

/// Draws the preview with `selected` highlighted.
pub fn draw_preview_with_selection(
    project: &ProjectConfig,
    inspector_active: bool,
    selected: Option<&ElementId>,
) -> (Buffer, PreviewFrame) {
    let theme = Theme::dark();
    let mut buf = Buffer::empty(PREVIEW_AREA);
    let context = SelectContext {
        inspector_active,
        selected,
        hover: None,
        theme: &theme,
    };
    let rows = teamskin::tui::HeaderInputs::from_project(project).predict();
    let frame = Preview::new(project, 0, rows).render(PREVIEW_AREA, &mut buf, &context);
    (buf, frame)
}

/// Text of one buffer row.
pub fn row_text(buf: &Buffer, y: u16) -> String {
    (buf.area.left()..buf.area.right())
        .map(|x| buf[(x, y)].symbol())
        .collect()
}

/// Whole buffer as text.
pub fn buffer_text(buf: &Buffer) -> String {
    (buf.area.top()..buf.area.bottom())
        .map(|y| row_text(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes `project` into a fresh temp directory.
pub fn project_file(project: &ProjectConfig) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("project.json");
    project.save(&path).unwrap();
    (dir, path)
}

/// Reads a project back from disk.
pub fn reload(path: &Path) -> ProjectConfig {
    ProjectConfig::load(path).unwrap()
}
