//! Static descriptor tables.

use super::PropertyDescriptor as P;
use crate::models::overrides::keys;

const FONT_SIZES: &[&str] = &["xs", "sm", "md", "lg", "xl", "2xl", "3xl"];
const FONT_WEIGHTS: &[&str] = &["normal", "medium", "semibold", "bold", "black"];
const ALIGNMENTS: &[&str] = &["left", "center", "right"];

// Component types

pub(super) const HEADER: &[P] = &[
    P::color(keys::GRADIENT_START, "Gradient Start"),
    P::color(keys::GRADIENT_END, "Gradient End"),
    P::color(keys::TEXT_COLOR, "Title Color"),
    P::text_with_placeholder(keys::TEXT, "Title", "Team name"),
];

pub(super) const CARD: &[P] = &[
    P::color(keys::BACKGROUND_COLOR, "Card Background"),
    P::color(keys::BORDER_COLOR, "Card Border"),
    P::toggle(keys::VISIBLE, "Visible"),
];

pub(super) const TEXT: &[P] = &[
    P::text(keys::TEXT, "Text"),
    P::color(keys::TEXT_COLOR, "Color"),
    P::select(keys::FONT_SIZE, "Size", FONT_SIZES),
    P::toggle(keys::VISIBLE, "Visible"),
];

pub(super) const ICON: &[P] = &[
    P::text_with_placeholder(keys::ICON_URL, "Icon URL", "https://…/icon.png"),
    P::color(keys::TEXT_COLOR, "Glyph Color"),
    P::toggle(keys::VISIBLE, "Visible"),
];

pub(super) const CONTAINER: &[P] = &[
    P::color(keys::BACKGROUND_COLOR, "Background"),
    P::toggle(keys::VISIBLE, "Visible"),
];

pub(super) const BUTTON: &[P] = &[
    P::text(keys::TEXT, "Label"),
    P::color(keys::TEXT_COLOR, "Label Color"),
    P::color(keys::BACKGROUND_COLOR, "Fill"),
    P::toggle(keys::VISIBLE, "Visible"),
];

pub(super) const IMAGE: &[P] = &[
    P::text_with_placeholder(keys::ICON_URL, "Image URL", "https://…/photo.jpg"),
    P::image_upload("imageUpload", "Upload Image"),
    P::toggle(keys::VISIBLE, "Visible"),
];

pub(super) const TAB: &[P] = &[
    P::text(keys::TEXT, "Tab Label"),
    P::color(keys::TEXT_COLOR, "Label Color"),
    P::toggle(keys::VISIBLE, "Visible"),
];

pub(super) const BADGE: &[P] = &[
    P::text(keys::TEXT, "Badge Text"),
    P::color(keys::BACKGROUND_COLOR, "Badge Fill"),
    P::toggle(keys::VISIBLE, "Visible"),
];

// Traits

pub(super) const CONTENT: &[P] = &[P::text_with_placeholder(keys::TEXT, "Content", "Default text")];

pub(super) const TYPOGRAPHY: &[P] = &[
    P::color(keys::TEXT_COLOR, "Text Color"),
    P::select(keys::FONT_SIZE, "Font Size", FONT_SIZES),
    P::select(keys::FONT_WEIGHT, "Font Weight", FONT_WEIGHTS),
];

pub(super) const INTERACTION: &[P] = &[P::toggle(keys::VISIBLE, "Show Element")];

pub(super) const BACKGROUND: &[P] = &[P::color(keys::BACKGROUND_COLOR, "Background Color")];

pub(super) const BORDER: &[P] = &[
    P::color(keys::BORDER_COLOR, "Border Color"),
    P::slider(keys::BORDER_WIDTH, "Border Width", 0, 2, 1, "cells"),
];

pub(super) const SPACING: &[P] = &[
    P::slider(keys::PADDING, "Padding", 0, 4, 1, "cells"),
    P::number(keys::MARGIN, "Margin", 0, 4, 1, "cells"),
];

pub(super) const ICON_TRAIT: &[P] = &[
    P::text_with_placeholder(keys::ICON_URL, "Icon Source", "https://…/icon.png"),
    P::color(keys::ICON_COLOR, "Icon Tint"),
    P::image_upload("iconUpload", "Upload Icon"),
];

pub(super) const LAYOUT: &[P] = &[
    P::select(keys::ALIGN, "Alignment", ALIGNMENTS),
    P::slider(keys::GAP, "Gap", 0, 3, 1, "cells"),
];

pub(super) const GLASS: &[P] = &[
    P::color(keys::BACKGROUND_COLOR, "Glass Fill"),
    P::slider(keys::GLASS_OPACITY, "Glass Opacity", 0, 100, 10, "%"),
    P::color(keys::GLASS_TINT, "Glass Tint"),
];
