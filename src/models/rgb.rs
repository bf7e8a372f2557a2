//! RGB color handling for override values and preview rendering.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Override values store colors as CSS-style hex strings; this type is the
/// parsed form used when painting the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB` and the short `#RGB` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use teamskin::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#112233").unwrap();
    /// assert_eq!(color, RgbColor::new(0x11, 0x22, 0x33));
    ///
    /// let short = RgbColor::from_hex("#fff").unwrap();
    /// assert_eq!(short, RgbColor::new(255, 255, 255));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected 3 or 6 hex digits"
            ),
        };

        let channel = |range: std::ops::Range<usize>, name: &str| {
            expanded
                .get(range)
                .context(format!("Invalid {name} channel in hex color '{hex}'"))
                .and_then(|digits| {
                    u8::from_str_radix(digits, 16)
                        .context(format!("Invalid {name} channel in hex color '{hex}'"))
                })
        };

        Ok(Self::new(
            channel(0..2, "red")?,
            channel(2..4, "green")?,
            channel(4..6, "blue")?,
        ))
    }

    /// Parses a hex string, returning `None` instead of an error.
    ///
    /// Render paths use this: a malformed override degrades to the base color.
    #[must_use]
    pub fn parse_lenient(hex: &str) -> Option<Self> {
        match Self::from_hex(hex) {
            Ok(color) => Some(color),
            Err(err) => {
                tracing::debug!(value = hex, error = %err, "ignoring unparseable color override");
                None
            }
        }
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Returns a dimmed version of the color at the given percentage.
    ///
    /// `percent` is clamped to 0-100: 0 = black, 100 = original color.
    #[must_use]
    pub const fn dim(&self, percent: u8) -> Self {
        let percent = if percent > 100 { 100 } else { percent };
        Self {
            r: (self.r as u16 * percent as u16 / 100) as u8,
            g: (self.g as u16 * percent as u16 / 100) as u8,
            b: (self.b as u16 * percent as u16 / 100) as u8,
        }
    }

    /// Returns the luma-weighted gray of this color (Rec. 601 weights).
    #[must_use]
    pub const fn grayscale(&self) -> Self {
        let luma = (self.r as u32 * 299 + self.g as u32 * 587 + self.b as u32 * 114) / 1000;
        let luma = luma as u8;
        Self::new(luma, luma, luma)
    }

    /// Linear interpolation towards `other`, `t` in thousandths (0..=1000).
    #[must_use]
    pub fn lerp(&self, other: &Self, t: u16) -> Self {
        let t = i32::from(t.min(1000));
        let mix = |a: u8, b: u8| -> u8 {
            let a = i32::from(a);
            let b = i32::from(b);
            (a + (b - a) * t / 1000) as u8
        };
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        assert_eq!(RgbColor::from_hex("#FF0000").unwrap(), RgbColor::new(255, 0, 0));
        assert_eq!(RgbColor::from_hex("00ff00").unwrap(), RgbColor::new(0, 255, 0));
        assert_eq!(RgbColor::from_hex("  #0000FF ").unwrap(), RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_from_hex_short_form() {
        assert_eq!(RgbColor::from_hex("#fff").unwrap(), RgbColor::new(255, 255, 255));
        assert_eq!(RgbColor::from_hex("#1a3").unwrap(), RgbColor::new(0x11, 0xAA, 0x33));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#GG0000").is_err());
        assert!(RgbColor::from_hex("#12345").is_err());
        assert!(RgbColor::from_hex("").is_err());
        // Multi-byte input must not panic on slicing
        assert!(RgbColor::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(RgbColor::parse_lenient("#112233"), Some(RgbColor::new(0x11, 0x22, 0x33)));
        assert_eq!(RgbColor::parse_lenient("teal-ish"), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
    }

    #[test]
    fn test_dim_and_grayscale() {
        assert_eq!(RgbColor::new(200, 100, 50).dim(50), RgbColor::new(100, 50, 25));
        assert_eq!(RgbColor::new(200, 100, 50).dim(150), RgbColor::new(200, 100, 50));

        let gray = RgbColor::new(255, 0, 0).grayscale();
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.g, gray.b);
        assert_eq!(gray.r, 76);
    }

    #[test]
    fn test_lerp_endpoints() {
        let start = RgbColor::new(0, 0, 0);
        let end = RgbColor::new(200, 100, 50);
        assert_eq!(start.lerp(&end, 0), start);
        assert_eq!(start.lerp(&end, 1000), end);
        assert_eq!(start.lerp(&end, 500), RgbColor::new(100, 50, 25));
        // Descending channels interpolate too
        assert_eq!(end.lerp(&start, 500), RgbColor::new(100, 50, 25));
    }
}
