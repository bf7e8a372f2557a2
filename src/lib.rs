//! TeamSkin Library
//!
//! This library provides the theming engine behind the TeamSkin editor:
//! the descriptor registry, the override store and resolver, the editor
//! session, and the terminal preview and inspector built on them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod host;
pub mod models;
pub mod registry;
pub mod resolver;
pub mod session;
pub mod store;
pub mod tui;
