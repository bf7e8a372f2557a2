//! Host capabilities injected into the engine.
//!
//! The resolver and store never look at terminal events or layout directly.
//! Whatever renders the preview supplies these two capabilities, which keeps
//! the engine testable without a terminal.

use crossterm::event::{KeyModifiers, MouseEvent};

use crate::config::PassthroughModifier;

/// Answers whether the click-through modifier was held at click time.
pub trait PointerModifierSource {
    /// `true` when the click should reach the underlying element instead of
    /// selecting it.
    fn passthrough_held(&self) -> bool;
}

/// Reports the header height actually laid out in the last frame.
pub trait LayoutMeasurementSource {
    /// Rows used by the header, or `None` before anything was drawn.
    fn measured_header_height(&self) -> Option<u16>;
}

/// Modifier state captured from a crossterm mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseModifiers {
    held: KeyModifiers,
    passthrough: KeyModifiers,
}

impl MouseModifiers {
    /// Captures the modifiers of `event` against the configured passthrough key.
    #[must_use]
    pub fn from_event(event: &MouseEvent, passthrough: PassthroughModifier) -> Self {
        Self {
            held: event.modifiers,
            passthrough: passthrough.key_modifiers(),
        }
    }
}

impl PointerModifierSource for MouseModifiers {
    fn passthrough_held(&self) -> bool {
        self.held.contains(self.passthrough)
    }
}

/// Fixed answer, for headless callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaticModifier(pub bool);

impl PointerModifierSource for StaticModifier {
    fn passthrough_held(&self) -> bool {
        self.0
    }
}

/// Layout facts recorded while drawing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameLayout {
    /// Rows the header occupied
    pub header_height: Option<u16>,
}

impl LayoutMeasurementSource for FrameLayout {
    fn measured_header_height(&self) -> Option<u16> {
        self.header_height
    }
}
