//! Override store: the sparse `ElementId → Override` map.
//!
//! The map lives behind an `Arc` and is never mutated in place. Every write or
//! reset builds a new map and swaps the pointer, so a snapshot taken before the
//! change keeps observing the old state and identity comparison
//! ([`OverrideStore::same_snapshot`]) detects that something changed.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::models::{ElementId, Override, OverrideValue};

/// Explicit update channel for one element.
///
/// Resetting is its own variant so no property name can collide with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideCommand {
    /// Set `key` to `value`, merging into the element's existing entry
    Update {
        /// Property key
        key: String,
        /// New value
        value: OverrideValue,
    },
    /// Delete the element's whole entry
    Reset,
}

impl OverrideCommand {
    /// Convenience constructor for [`OverrideCommand::Update`].
    #[must_use]
    pub fn update(key: impl Into<String>, value: impl Into<OverrideValue>) -> Self {
        Self::Update {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Immutable-update map of per-element overrides.
#[derive(Debug, Clone, Default)]
pub struct OverrideStore {
    entries: Arc<BTreeMap<ElementId, Override>>,
}

impl OverrideStore {
    /// Creates an empty store (project init).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an existing map (project load).
    #[must_use]
    pub fn from_map(entries: BTreeMap<ElementId, Override>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Reads a single key for an element. Never applies a default.
    #[must_use]
    pub fn read(&self, id: &ElementId, key: &str) -> Option<OverrideValue> {
        self.entries.get(id).and_then(|entry| entry.get(key))
    }

    /// Reads a string-valued key.
    #[must_use]
    pub fn read_text(&self, id: &ElementId, key: &str) -> Option<String> {
        match self.read(id, key)? {
            OverrideValue::Text(text) => Some(text),
            OverrideValue::Bool(flag) => Some(flag.to_string()),
        }
    }

    /// Whether the element carries an explicit `visible: false`.
    #[must_use]
    pub fn is_hidden(&self, id: &ElementId) -> bool {
        self.entries
            .get(id)
            .and_then(|entry| entry.visible)
            .is_some_and(|visible| !visible)
    }

    /// The full entry for an element, if it was ever edited.
    #[must_use]
    pub fn entry(&self, id: &ElementId) -> Option<&Override> {
        self.entries.get(id)
    }

    /// Sets one key, creating the entry on first edit.
    ///
    /// A value the field rejects leaves the store as it was, so no empty
    /// entry appears for an element that was never really edited.
    pub fn write(&mut self, id: &ElementId, key: &str, value: OverrideValue) -> bool {
        let mut entry = self.entries.get(id).cloned().unwrap_or_default();
        if !entry.set(key, value) {
            return false;
        }
        let mut next = (*self.entries).clone();
        next.insert(id.clone(), entry);
        tracing::debug!(id = %id, key, "override written");
        self.entries = Arc::new(next);
        true
    }

    /// Deletes the whole entry for an element. A missing entry is a no-op.
    pub fn reset(&mut self, id: &ElementId) {
        if !self.entries.contains_key(id) {
            return;
        }
        let mut next = (*self.entries).clone();
        next.remove(id);
        tracing::debug!(id = %id, "overrides reset");
        self.entries = Arc::new(next);
    }

    /// Applies an explicit command.
    pub fn apply(&mut self, id: &ElementId, command: OverrideCommand) {
        match command {
            OverrideCommand::Update { key, value } => {
                self.write(id, &key, value);
            }
            OverrideCommand::Reset => self.reset(id),
        }
    }

    /// Whether both stores share the same underlying map (no write in between).
    #[must_use]
    pub fn same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Number of elements with overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no element has overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the element has an entry.
    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.entries.contains_key(id)
    }

    /// Iterates entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ElementId, &Override)> {
        self.entries.iter()
    }
}

impl PartialEq for OverrideStore {
    fn eq(&self, other: &Self) -> bool {
        self.same_snapshot(other) || self.entries == other.entries
    }
}

impl Eq for OverrideStore {}

impl Serialize for OverrideStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OverrideStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<ElementId, Override>::deserialize(deserializer).map(Self::from_map)
    }
}
