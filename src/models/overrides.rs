//! Sparse per-element override records.
//!
//! An [`Override`] is a partial record: every field is optional and an absent
//! field always means "inherit the element's built-in default". There is no
//! separate "inherit" value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Well-known override keys (camelCase, as persisted).
pub mod keys {
    /// Text/foreground color
    pub const TEXT_COLOR: &str = "textColor";
    /// Background color
    pub const BACKGROUND_COLOR: &str = "backgroundColor";
    /// Font size token (xs, sm, md, lg, xl, 2xl, 3xl)
    pub const FONT_SIZE: &str = "fontSize";
    /// Font weight token (normal, medium, semibold, bold, black)
    pub const FONT_WEIGHT: &str = "fontWeight";
    /// Border color
    pub const BORDER_COLOR: &str = "borderColor";
    /// Text content
    pub const TEXT: &str = "text";
    /// Visibility flag
    pub const VISIBLE: &str = "visible";
    /// Icon or image URL
    pub const ICON_URL: &str = "iconUrl";
    /// First header gradient stop
    pub const GRADIENT_START: &str = "customGradientStart";
    /// Last header gradient stop
    pub const GRADIENT_END: &str = "customGradientEnd";
    /// Border width in cells
    pub const BORDER_WIDTH: &str = "borderWidth";
    /// Inner padding in cells
    pub const PADDING: &str = "padding";
    /// Horizontal alignment (left, center, right)
    pub const ALIGN: &str = "align";
    /// Gap between children in cells
    pub const GAP: &str = "gap";
    /// Horizontal outer inset in cells
    pub const MARGIN: &str = "margin";
    /// Icon tint color
    pub const ICON_COLOR: &str = "iconColor";
    /// Glass effect opacity percentage
    pub const GLASS_OPACITY: &str = "glassOpacity";
    /// Glass effect tint color
    pub const GLASS_TINT: &str = "glassTint";
}

/// A single persisted override value: JSON `string | boolean`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideValue {
    /// Boolean value (visibility)
    Bool(bool),
    /// String value (colors, tokens, text, numbers rendered as text)
    Text(String),
}

impl OverrideValue {
    /// The empty-string sentinel used for "no override" in editable props.
    #[must_use]
    pub const fn unset() -> Self {
        Self::Text(String::new())
    }

    /// Whether this is the empty-string sentinel.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }

    /// String contents, if this is a text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Bool(_) => None,
        }
    }

    /// Boolean contents, if this is a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            Self::Text(_) => None,
        }
    }

    /// Parses CLI/user input: `true`/`false` become booleans, anything else text.
    #[must_use]
    pub fn parse_input(raw: &str) -> Self {
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            other => Self::Text(other.to_string()),
        }
    }
}

impl fmt::Display for OverrideValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for OverrideValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OverrideValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for OverrideValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Partial record of visual overrides for one element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Override {
    /// Text color (hex)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Background color (hex)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Font size token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    /// Font weight token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Border color (hex)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Visibility: `Some(false)` hides, absent inherits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Icon or image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Trait-contributed keys without a dedicated field
    #[serde(flatten)]
    pub extra: BTreeMap<String, OverrideValue>,
}

impl Override {
    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text_color.is_none()
            && self.background_color.is_none()
            && self.font_size.is_none()
            && self.font_weight.is_none()
            && self.border_color.is_none()
            && self.text.is_none()
            && self.visible.is_none()
            && self.icon_url.is_none()
            && self.extra.is_empty()
    }

    fn text_slot(&self, key: &str) -> Option<&Option<String>> {
        match key {
            keys::TEXT_COLOR => Some(&self.text_color),
            keys::BACKGROUND_COLOR => Some(&self.background_color),
            keys::FONT_SIZE => Some(&self.font_size),
            keys::FONT_WEIGHT => Some(&self.font_weight),
            keys::BORDER_COLOR => Some(&self.border_color),
            keys::TEXT => Some(&self.text),
            keys::ICON_URL => Some(&self.icon_url),
            _ => None,
        }
    }

    fn text_slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            keys::TEXT_COLOR => Some(&mut self.text_color),
            keys::BACKGROUND_COLOR => Some(&mut self.background_color),
            keys::FONT_SIZE => Some(&mut self.font_size),
            keys::FONT_WEIGHT => Some(&mut self.font_weight),
            keys::BORDER_COLOR => Some(&mut self.border_color),
            keys::TEXT => Some(&mut self.text),
            keys::ICON_URL => Some(&mut self.icon_url),
            _ => None,
        }
    }

    /// Reads one key. Never applies a default.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<OverrideValue> {
        if key == keys::VISIBLE {
            return self.visible.map(OverrideValue::Bool);
        }
        match self.text_slot(key) {
            Some(slot) => slot.clone().map(OverrideValue::Text),
            None => self.extra.get(key).cloned(),
        }
    }

    /// Sets one key, coercing the value to the field's persisted type.
    ///
    /// Booleans written to string fields are stored as `"true"`/`"false"`;
    /// text written to `visible` is accepted only as `"true"`/`"false"`.
    /// Returns `false`, leaving the record untouched, when the value is
    /// rejected.
    pub fn set(&mut self, key: &str, value: OverrideValue) -> bool {
        if key == keys::VISIBLE {
            let flag = match value {
                OverrideValue::Bool(flag) => flag,
                OverrideValue::Text(text) => match text.as_str() {
                    "true" => true,
                    "false" => false,
                    other => {
                        tracing::warn!(value = other, "ignoring non-boolean visibility override");
                        return false;
                    }
                },
            };
            self.visible = Some(flag);
            return true;
        }
        match self.text_slot_mut(key) {
            Some(slot) => *slot = Some(value.to_string()),
            None => {
                self.extra.insert(key.to_string(), value);
            }
        }
        true
    }

    /// All set keys with their values, well-known fields first.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, OverrideValue)> {
        let known = [
            keys::TEXT_COLOR,
            keys::BACKGROUND_COLOR,
            keys::FONT_SIZE,
            keys::FONT_WEIGHT,
            keys::BORDER_COLOR,
            keys::TEXT,
            keys::VISIBLE,
            keys::ICON_URL,
        ];
        known
            .iter()
            .filter_map(|key| self.get(key).map(|value| ((*key).to_string(), value)))
            .chain(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())))
            .collect()
    }
}
