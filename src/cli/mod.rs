//! CLI command handlers for TeamSkin.
//!
//! This module provides headless, scriptable access to the theming engine
//! for automation, testing, and CI integration.

pub mod config;
pub mod describe;
pub mod overrides;

use clap::Subcommand;

// Re-export types used by main.rs and tests
pub use config::ConfigArgs;
pub use describe::DescribeArgs;
pub use overrides::OverridesArgs;

/// Headless subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the editable properties of a component
    Describe(DescribeArgs),
    /// Inspect and edit a project's overrides
    Overrides(OverridesArgs),
    /// Manage application configuration
    Config(ConfigArgs),
}

impl Commands {
    /// Execute the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns error if the subcommand fails
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Self::Describe(args) => args.execute(),
            Self::Overrides(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}
