//! Data models for projects, element ids and overrides.
//!
//! Models are independent of the terminal UI and of the resolver logic.

pub mod element_id;
pub mod overrides;
pub mod project;
pub mod rgb;

// Re-export all model types
pub use element_id::ElementId;
pub use overrides::{Override, OverrideValue};
pub use project::{Page, ProjectConfig, TeamTheme};
pub use rgb::RgbColor;
