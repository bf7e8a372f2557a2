//! Descriptor registry: which properties each component type and trait exposes.
//!
//! Lookups are static and side-effect free. Component types and traits are
//! closed enums so adding one forces every `match` below to be updated; names
//! coming from outside (CLI, files) go through `from_name`, and an unknown
//! name resolves to an empty descriptor list rather than an error.

mod catalog;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Editor control family of a property, with kind-specific constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PropertyKind {
    /// Free text input
    Text {
        /// Hint shown while the value is empty
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<&'static str>,
    },
    /// Hex color input with swatch
    Color,
    /// Bounded slider
    Slider {
        /// Minimum value
        min: i32,
        /// Maximum value
        max: i32,
        /// Increment per step
        step: i32,
        /// Display unit
        unit: &'static str,
    },
    /// Bounded numeric field
    Number {
        /// Minimum value
        min: i32,
        /// Maximum value
        max: i32,
        /// Increment per step
        step: i32,
        /// Display unit
        unit: &'static str,
    },
    /// One of a fixed set of options
    Select {
        /// Allowed values in display order
        options: &'static [&'static str],
    },
    /// Boolean switch
    Toggle,
    /// Asset upload; handled by the host's upload pipeline, not the editor
    ImageUpload,
}

/// One editable property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    /// Override key the property writes to
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Control family and constraints
    #[serde(flatten)]
    pub kind: PropertyKind,
}

impl PropertyDescriptor {
    /// Text property.
    #[must_use]
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: PropertyKind::Text { placeholder: None },
        }
    }

    /// Text property with placeholder.
    #[must_use]
    pub const fn text_with_placeholder(
        key: &'static str,
        label: &'static str,
        placeholder: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            kind: PropertyKind::Text {
                placeholder: Some(placeholder),
            },
        }
    }

    /// Color property.
    #[must_use]
    pub const fn color(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: PropertyKind::Color,
        }
    }

    /// Slider property.
    #[must_use]
    pub const fn slider(
        key: &'static str,
        label: &'static str,
        min: i32,
        max: i32,
        step: i32,
        unit: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            kind: PropertyKind::Slider {
                min,
                max,
                step,
                unit,
            },
        }
    }

    /// Numeric property.
    #[must_use]
    pub const fn number(
        key: &'static str,
        label: &'static str,
        min: i32,
        max: i32,
        step: i32,
        unit: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            kind: PropertyKind::Number {
                min,
                max,
                step,
                unit,
            },
        }
    }

    /// Select property.
    #[must_use]
    pub const fn select(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            kind: PropertyKind::Select { options },
        }
    }

    /// Toggle property.
    #[must_use]
    pub const fn toggle(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: PropertyKind::Toggle,
        }
    }

    /// Asset upload property.
    #[must_use]
    pub const fn image_upload(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: PropertyKind::ImageUpload,
        }
    }
}

/// Legacy component type of a themeable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    /// Page header with gradient background
    Header,
    /// Boxed content card
    Card,
    /// Text run
    Text,
    /// Glyph icon
    Icon,
    /// Layout container
    Container,
    /// Clickable button
    Button,
    /// Picture
    Image,
    /// Navigation tab
    Tab,
    /// Small status badge
    Badge,
}

impl ComponentType {
    /// All component types.
    pub const ALL: [Self; 9] = [
        Self::Header,
        Self::Card,
        Self::Text,
        Self::Icon,
        Self::Container,
        Self::Button,
        Self::Image,
        Self::Tab,
        Self::Badge,
    ];

    /// Lowercase name as used in files and on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Card => "card",
            Self::Text => "text",
            Self::Icon => "icon",
            Self::Container => "container",
            Self::Button => "button",
            Self::Image => "image",
            Self::Tab => "tab",
            Self::Badge => "badge",
        }
    }

    /// Parses a name; unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|ty| ty.name() == name)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reusable bundle of property descriptors attached per element instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    /// Editable text content
    Content,
    /// Text color, size and weight
    Typography,
    /// Visibility and hover behavior
    Interaction,
    /// Background fill
    Background,
    /// Border color and width
    Border,
    /// Padding and margin
    Spacing,
    /// Icon source and tint
    Icon,
    /// Alignment and gaps
    Layout,
    /// Frosted glass surface
    Glass,
}

impl Trait {
    /// All traits.
    pub const ALL: [Self; 9] = [
        Self::Content,
        Self::Typography,
        Self::Interaction,
        Self::Background,
        Self::Border,
        Self::Spacing,
        Self::Icon,
        Self::Layout,
        Self::Glass,
    ];

    /// Lowercase name as used in files and on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Typography => "typography",
            Self::Interaction => "interaction",
            Self::Background => "background",
            Self::Border => "border",
            Self::Spacing => "spacing",
            Self::Icon => "icon",
            Self::Layout => "layout",
            Self::Glass => "glass",
        }
    }

    /// Parses a name; unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Base descriptors of a component type, in display order.
#[must_use]
pub const fn descriptors_for_type(ty: ComponentType) -> &'static [PropertyDescriptor] {
    match ty {
        ComponentType::Header => catalog::HEADER,
        ComponentType::Card => catalog::CARD,
        ComponentType::Text => catalog::TEXT,
        ComponentType::Icon => catalog::ICON,
        ComponentType::Container => catalog::CONTAINER,
        ComponentType::Button => catalog::BUTTON,
        ComponentType::Image => catalog::IMAGE,
        ComponentType::Tab => catalog::TAB,
        ComponentType::Badge => catalog::BADGE,
    }
}

/// Descriptors contributed by a trait, in display order.
#[must_use]
pub const fn descriptors_for_trait(t: Trait) -> &'static [PropertyDescriptor] {
    match t {
        Trait::Content => catalog::CONTENT,
        Trait::Typography => catalog::TYPOGRAPHY,
        Trait::Interaction => catalog::INTERACTION,
        Trait::Background => catalog::BACKGROUND,
        Trait::Border => catalog::BORDER,
        Trait::Spacing => catalog::SPACING,
        Trait::Icon => catalog::ICON_TRAIT,
        Trait::Layout => catalog::LAYOUT,
        Trait::Glass => catalog::GLASS,
    }
}

/// Name-based type lookup; unknown names return an empty list.
#[must_use]
pub fn descriptors_for_type_name(name: &str) -> &'static [PropertyDescriptor] {
    match ComponentType::from_name(name) {
        Some(ty) => descriptors_for_type(ty),
        None => {
            tracing::debug!(name, "unknown component type");
            &[]
        }
    }
}

/// Name-based trait lookup; unknown names return an empty list.
#[must_use]
pub fn descriptors_for_trait_name(name: &str) -> &'static [PropertyDescriptor] {
    match Trait::from_name(name) {
        Some(t) => descriptors_for_trait(t),
        None => {
            tracing::debug!(name, "unknown trait");
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_roundtrip() {
        for ty in ComponentType::ALL {
            assert_eq!(ComponentType::from_name(ty.name()), Some(ty));
        }
        for t in Trait::ALL {
            assert_eq!(Trait::from_name(t.name()), Some(t));
        }
        assert_eq!(ComponentType::from_name(" Header "), Some(ComponentType::Header));
    }

    #[test]
    fn test_unknown_names_yield_empty_lists() {
        assert!(descriptors_for_type_name("carousel").is_empty());
        assert!(descriptors_for_trait_name("sparkle").is_empty());
        assert!(!descriptors_for_type_name("text").is_empty());
    }

    #[test]
    fn test_no_duplicate_keys_within_a_table() {
        let tables = ComponentType::ALL
            .into_iter()
            .map(descriptors_for_type)
            .chain(Trait::ALL.into_iter().map(descriptors_for_trait));
        for table in tables {
            let mut seen = HashSet::new();
            for descriptor in table {
                assert!(seen.insert(descriptor.key), "duplicate key {}", descriptor.key);
            }
        }
    }

    #[test]
    fn test_constraints_are_sane() {
        let tables = ComponentType::ALL
            .into_iter()
            .map(descriptors_for_type)
            .chain(Trait::ALL.into_iter().map(descriptors_for_trait));
        for descriptor in tables.flatten() {
            match descriptor.kind {
                PropertyKind::Slider { min, max, step, .. }
                | PropertyKind::Number { min, max, step, .. } => {
                    assert!(min < max, "{}: min must be below max", descriptor.key);
                    assert!(step > 0, "{}: step must be positive", descriptor.key);
                }
                PropertyKind::Select { options } => {
                    assert!(!options.is_empty(), "{}: empty options", descriptor.key);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_descriptor_serializes_flat() {
        let json = serde_json::to_value(PropertyDescriptor::slider("padding", "Padding", 0, 4, 1, "cells"))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "key": "padding",
                "label": "Padding",
                "kind": "slider",
                "min": 0,
                "max": 4,
                "step": 1,
                "unit": "cells"
            })
        );
    }
}
