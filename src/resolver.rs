//! Resolver: effective editable properties and render-time values.
//!
//! Everything here is pure. The store answers "what did the operator set";
//! the resolver combines that with the registry, and render call sites add
//! their own built-in defaults.

use ratatui::style::{Modifier, Style};
use serde::Serialize;
use std::collections::HashMap;

use crate::models::overrides::keys;
use crate::models::{ElementId, Override, OverrideValue, RgbColor};
use crate::registry::{
    descriptors_for_trait, descriptors_for_trait_name, descriptors_for_type, descriptors_for_type_name,
    ComponentType, PropertyDescriptor, Trait,
};

/// A descriptor paired with the element's current override value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditableProp {
    /// What the property is and how to edit it
    #[serde(flatten)]
    pub descriptor: PropertyDescriptor,
    /// Current override, or the empty-string sentinel when none is set
    pub value: OverrideValue,
}

impl EditableProp {
    /// Whether the element overrides this property.
    #[must_use]
    pub fn is_overridden(&self) -> bool {
        !self.value.is_unset()
    }
}

/// Resolved per-instance snapshot handed to the inspector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    /// Element id
    pub id: ElementId,
    /// Legacy component type
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    /// Display label
    pub label: String,
    /// Optional location path, outermost first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumb: Option<Vec<String>>,
    /// Effective properties with current values
    pub editable_props: Vec<EditableProp>,
    /// Traits declared on the instance, in declaration order
    pub traits: Vec<Trait>,
}

impl ComponentMetadata {
    /// Current value of a property, if the element exposes it.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&OverrideValue> {
        self.editable_props
            .iter()
            .find(|prop| prop.descriptor.key == key)
            .map(|prop| &prop.value)
    }

    /// Whether the resolved `visible` value is `false`.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.value(keys::VISIBLE)
            .and_then(OverrideValue::as_bool)
            .is_some_and(|visible| !visible)
    }

    /// Mirrors a store update into this snapshot.
    pub fn set_value(&mut self, key: &str, value: OverrideValue) {
        if let Some(prop) = self
            .editable_props
            .iter_mut()
            .find(|prop| prop.descriptor.key == key)
        {
            prop.value = value;
        }
    }

    /// Mirrors a store reset: every value back to the empty sentinel.
    pub fn clear_values(&mut self) {
        for prop in &mut self.editable_props {
            prop.value = OverrideValue::unset();
        }
    }
}

/// Merges type and trait descriptors.
///
/// Concatenates the type's descriptors followed by each trait's descriptors in
/// declaration order, then deduplicates by key keeping the last occurrence.
/// A shadowing descriptor takes the slot where its key first appeared, so the
/// type's ordering stays stable in the inspector.
#[must_use]
pub fn merge_descriptors(ty: ComponentType, traits: &[Trait]) -> Vec<PropertyDescriptor> {
    merge_lists(
        std::iter::once(descriptors_for_type(ty))
            .chain(traits.iter().map(|t| descriptors_for_trait(*t))),
    )
}

/// Same merge for names read from files or the command line.
///
/// Unknown type or trait names contribute nothing.
#[must_use]
pub fn merge_descriptors_by_name<S: AsRef<str>>(type_name: &str, trait_names: &[S]) -> Vec<PropertyDescriptor> {
    merge_lists(
        std::iter::once(descriptors_for_type_name(type_name))
            .chain(trait_names.iter().map(|name| descriptors_for_trait_name(name.as_ref()))),
    )
}

fn merge_lists<'a>(lists: impl Iterator<Item = &'a [PropertyDescriptor]>) -> Vec<PropertyDescriptor> {
    let all = lists.flatten();

    let mut merged: Vec<PropertyDescriptor> = Vec::new();
    let mut slots: HashMap<&'static str, usize> = HashMap::new();
    for descriptor in all {
        match slots.get(descriptor.key) {
            Some(&slot) => merged[slot] = *descriptor,
            None => {
                slots.insert(descriptor.key, merged.len());
                merged.push(*descriptor);
            }
        }
    }
    merged
}

/// Builds the inspector snapshot for one element instance.
#[must_use]
pub fn build_metadata(
    id: &ElementId,
    ty: ComponentType,
    label: &str,
    breadcrumb: Option<&[String]>,
    traits: &[Trait],
    overrides: Option<&Override>,
) -> ComponentMetadata {
    ComponentMetadata {
        id: id.clone(),
        component_type: ty,
        label: label.to_string(),
        breadcrumb: breadcrumb.map(<[String]>::to_vec),
        editable_props: attach_values(merge_descriptors(ty, traits), overrides),
        traits: traits.to_vec(),
    }
}

/// Pairs each descriptor with the element's current value.
#[must_use]
pub fn attach_values(descriptors: Vec<PropertyDescriptor>, overrides: Option<&Override>) -> Vec<EditableProp> {
    descriptors
        .into_iter()
        .map(|descriptor| EditableProp {
            value: current_value(overrides, descriptor.key),
            descriptor,
        })
        .collect()
}

/// The override for `key`, or the empty-string sentinel when none is set.
#[must_use]
pub fn current_value(overrides: Option<&Override>, key: &str) -> OverrideValue {
    overrides
        .and_then(|entry| entry.get(key))
        .unwrap_or_else(OverrideValue::unset)
}

/// How a leaf should be drawn given its override and the inspector flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Draw normally
    Shown,
    /// Hidden by override but drawn ghosted so it stays selectable
    Ghosted,
    /// Not drawn at all
    Removed,
}

/// Visibility gate: `visible: false` removes the leaf unless inspecting.
#[must_use]
pub fn resolve_visibility(overrides: Option<&Override>, inspector_active: bool) -> Visibility {
    let hidden = overrides
        .and_then(|entry| entry.visible)
        .is_some_and(|visible| !visible);
    match (hidden, inspector_active) {
        (false, _) => Visibility::Shown,
        (true, true) => Visibility::Ghosted,
        (true, false) => Visibility::Removed,
    }
}

/// Content: a non-empty text override, otherwise the built-in default.
#[must_use]
pub fn resolve_text(overrides: Option<&Override>, default: &str) -> String {
    overrides
        .and_then(|entry| entry.text.as_deref())
        .filter(|text| !text.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Parses a color-valued override key.
#[must_use]
pub fn resolve_color(overrides: Option<&Override>, key: &str) -> Option<RgbColor> {
    let value = overrides?.get(key)?;
    RgbColor::parse_lenient(value.as_str()?)
}

/// Parses a numeric override key, clamped to `[min, max]`.
#[must_use]
pub fn resolve_number(overrides: Option<&Override>, key: &str, min: i32, max: i32) -> Option<i32> {
    let value = overrides?.get(key)?;
    value
        .as_str()?
        .trim()
        .parse::<i32>()
        .ok()
        .map(|n| n.clamp(min, max))
}

/// Builds the additive style layer for an element.
///
/// The result only carries what the override sets; callers patch it on top
/// of their own base style, so the base rendering stays unaware of overrides.
#[must_use]
pub fn override_style(overrides: Option<&Override>) -> Style {
    let Some(entry) = overrides else {
        return Style::default();
    };
    let mut style = Style::default();

    if let Some(color) = resolve_color(Some(entry), keys::TEXT_COLOR) {
        style = style.fg(color.to_ratatui_color());
    }
    if let Some(color) = resolve_color(Some(entry), keys::BACKGROUND_COLOR) {
        style = style.bg(color.to_ratatui_color());
    }
    match entry.font_weight.as_deref() {
        Some("semibold" | "bold" | "black") => style = style.add_modifier(Modifier::BOLD),
        Some("normal") => style = style.remove_modifier(Modifier::BOLD),
        _ => {}
    }
    match entry.font_size.as_deref() {
        Some("xs" | "sm") => style = style.add_modifier(Modifier::DIM),
        Some("lg" | "xl" | "2xl" | "3xl") => style = style.add_modifier(Modifier::BOLD),
        _ => {}
    }
    style
}

/// Whether the font size override asks for display (uppercase) text.
#[must_use]
pub fn is_display_size(overrides: Option<&Override>) -> bool {
    matches!(
        overrides.and_then(|entry| entry.font_size.as_deref()),
        Some("2xl" | "3xl")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn keys_of(descriptors: &[PropertyDescriptor]) -> Vec<&'static str> {
        descriptors.iter().map(|d| d.key).collect()
    }

    #[test]
    fn test_merge_without_traits_is_type_table() {
        let merged = merge_descriptors(ComponentType::Card, &[]);
        assert_eq!(merged, descriptors_for_type(ComponentType::Card));
    }

    #[test]
    fn test_trait_shadows_type_descriptor() {
        let merged = merge_descriptors(ComponentType::Text, &[Trait::Interaction]);
        let visible = merged.iter().find(|d| d.key == keys::VISIBLE).unwrap();
        assert_eq!(visible.label, "Show Element");
        assert_eq!(merged.iter().filter(|d| d.key == keys::VISIBLE).count(), 1);
    }

    #[test]
    fn test_later_trait_shadows_earlier_trait() {
        let label_of = |traits: &[Trait]| {
            merge_descriptors(ComponentType::Card, traits)
                .into_iter()
                .find(|d| d.key == keys::BACKGROUND_COLOR)
                .map(|d| d.label)
        };
        assert_eq!(label_of(&[]), Some("Card Background"));
        assert_eq!(label_of(&[Trait::Background, Trait::Glass]), Some("Glass Fill"));
        assert_eq!(label_of(&[Trait::Glass, Trait::Background]), Some("Background Color"));
    }

    #[test]
    fn test_merge_by_name_skips_unknown_names() {
        let by_name = merge_descriptors_by_name("TEXT", &["interaction", "sparkle"]);
        assert_eq!(by_name, merge_descriptors(ComponentType::Text, &[Trait::Interaction]));

        let unknown_type = merge_descriptors_by_name("carousel", &["content"]);
        assert_eq!(unknown_type, descriptors_for_trait(Trait::Content));
        assert!(merge_descriptors_by_name::<&str>("carousel", &[]).is_empty());
    }

    #[test]
    fn test_declaration_order_changes_slots() {
        let a = merge_descriptors(ComponentType::Container, &[Trait::Typography, Trait::Content]);
        let b = merge_descriptors(ComponentType::Container, &[Trait::Content, Trait::Typography]);
        assert_ne!(keys_of(&a), keys_of(&b));
    }

    #[test]
    fn test_merge_keeps_first_slot() {
        let merged = merge_descriptors(
            ComponentType::Text,
            &[Trait::Content, Trait::Typography, Trait::Interaction],
        );
        assert_eq!(
            keys_of(&merged),
            vec![keys::TEXT, keys::TEXT_COLOR, keys::FONT_SIZE, keys::VISIBLE, keys::FONT_WEIGHT]
        );
        assert_eq!(merged[0].label, "Content");
        assert_eq!(merged[1].label, "Text Color");
    }

    #[test]
    fn test_build_metadata_attaches_values_or_sentinel() {
        let mut entry = Override::default();
        entry.set(keys::TEXT_COLOR, "#fff".into());
        let meta = build_metadata(
            &ElementId::new("player_name_7"),
            ComponentType::Text,
            "Player Name",
            None,
            &[Trait::Typography],
            Some(&entry),
        );
        assert_eq!(meta.value(keys::TEXT_COLOR), Some(&OverrideValue::from("#fff")));
        assert_eq!(meta.value(keys::FONT_SIZE), Some(&OverrideValue::unset()));
        assert_eq!(meta.value("missing"), None);
        assert!(!meta.is_hidden());
    }

    #[test]
    fn test_attach_values_matches_build_metadata() {
        let mut entry = Override::default();
        entry.set(keys::VISIBLE, false.into());
        let by_name = attach_values(merge_descriptors_by_name("button", &["content"]), Some(&entry));
        let meta = build_metadata(
            &ElementId::new("shop_add_0"),
            ComponentType::Button,
            "Add",
            None,
            &[Trait::Content],
            Some(&entry),
        );
        assert_eq!(by_name, meta.editable_props);
        assert_eq!(current_value(None, keys::TEXT), OverrideValue::unset());
    }

    #[test]
    fn test_metadata_mirrors_updates_and_clears() {
        let mut meta = build_metadata(
            &ElementId::new("shop_add_0"),
            ComponentType::Button,
            "Add",
            Some(&["Shop".to_string()][..]),
            &[],
            None,
        );
        meta.set_value(keys::VISIBLE, false.into());
        assert!(meta.is_hidden());
        meta.clear_values();
        assert!(meta.editable_props.iter().all(|p| !p.is_overridden()));
        assert_eq!(meta.breadcrumb.as_deref(), Some(&["Shop".to_string()][..]));
    }

    #[test]
    fn test_visibility_gate() {
        let mut hidden = Override::default();
        hidden.set(keys::VISIBLE, false.into());
        assert_eq!(resolve_visibility(None, false), Visibility::Shown);
        assert_eq!(resolve_visibility(Some(&hidden), false), Visibility::Removed);
        assert_eq!(resolve_visibility(Some(&hidden), true), Visibility::Ghosted);
    }

    #[test]
    fn test_resolve_text_falls_back_on_empty() {
        let mut entry = Override::default();
        assert_eq!(resolve_text(Some(&entry), "Default"), "Default");
        entry.set(keys::TEXT, "".into());
        assert_eq!(resolve_text(Some(&entry), "Default"), "Default");
        entry.set(keys::TEXT, "Custom".into());
        assert_eq!(resolve_text(Some(&entry), "Default"), "Custom");
    }

    #[test]
    fn test_override_style_is_sparse() {
        assert_eq!(override_style(None), Style::default());

        let mut entry = Override::default();
        entry.set(keys::TEXT_COLOR, "#112233".into());
        entry.set(keys::BACKGROUND_COLOR, "not a color".into());
        entry.set(keys::FONT_WEIGHT, "bold".into());
        let style = override_style(Some(&entry));
        assert_eq!(style.fg, Some(Color::Rgb(0x11, 0x22, 0x33)));
        assert_eq!(style.bg, None);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_resolve_number_clamps() {
        let mut entry = Override::default();
        entry.set(keys::PADDING, "9".into());
        assert_eq!(resolve_number(Some(&entry), keys::PADDING, 0, 4), Some(4));
        entry.set(keys::PADDING, "abc".into());
        assert_eq!(resolve_number(Some(&entry), keys::PADDING, 0, 4), None);
    }
}
