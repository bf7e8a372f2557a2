//! Stable identifiers for themeable preview elements.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Opaque, per-project unique identifier of a themeable element.
///
/// Ids follow the `domain_role[_index]` convention (`header_main`,
/// `player_name_7`, `shop_add_0`) and must stay stable across re-renders of
/// the same logical element. Two live elements sharing an id is not detected
/// at runtime: the last one registered wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

fn convention() -> &'static Regex {
    static CONVENTION: OnceLock<Regex> = OnceLock::new();
    CONVENTION.get_or_init(|| {
        Regex::new(r"^[a-z][a-z0-9]*(_[a-z][a-z0-9]*)*(_[0-9]+)?$")
            .unwrap_or_else(|err| unreachable!("element id pattern is valid: {err}"))
    })
}

impl ElementId {
    /// Creates an id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds an indexed id, e.g. `indexed("player_name", 7)` → `player_name_7`.
    #[must_use]
    pub fn indexed(prefix: &str, index: usize) -> Self {
        Self(format!("{prefix}_{index}"))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id follows the `domain_role[_index]` naming convention.
    #[must_use]
    pub fn follows_convention(&self) -> bool {
        convention().is_match(&self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ElementId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed() {
        assert_eq!(ElementId::indexed("player_name", 7).as_str(), "player_name_7");
    }

    #[test]
    fn test_convention_accepts_known_ids() {
        for id in ["header_main", "player_name_7", "shop_add_0", "nav_tab_2", "hero"] {
            assert!(ElementId::new(id).follows_convention(), "{id} should be accepted");
        }
    }

    #[test]
    fn test_convention_rejects_malformed_ids() {
        for id in ["", "Header_main", "header-main", "_header", "header__main", "7_header", "a_1_b"] {
            assert!(!ElementId::new(id).follows_convention(), "{id} should be rejected");
        }
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ElementId::new("header_main")).unwrap();
        assert_eq!(json, "\"header_main\"");
    }
}
