//! Simulated team app drawn inside the editor.
//!
//! Every themeable leaf goes through [`Selectable`] and reads its own store
//! entry; base styles below know nothing about overrides beyond that single
//! read, and overrides are patched on top of them.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use crate::host::FrameLayout;
use crate::models::overrides::keys;
use crate::models::{ElementId, Override, Page, ProjectConfig, RgbColor};
use crate::registry::{ComponentType, Trait};
use crate::resolver::{
    is_display_size, override_style, resolve_color, resolve_number, resolve_text, Visibility,
};
use crate::store::OverrideStore;
use crate::tui::header::Header;
use crate::tui::selectable::{ghost, HitMap, PreviewAction, SelectContext, SelectTarget, Selectable};

const BACKGROUND: Color = Color::Rgb(15, 23, 42);
const SURFACE: RgbColor = RgbColor::new(30, 41, 59);
const TEXT: Color = Color::Rgb(226, 232, 240);
const MUTED: Color = Color::Rgb(148, 163, 184);
const BORDER: Color = Color::Rgb(71, 85, 105);

const TEXT_TRAITS: &[Trait] = &[Trait::Content, Trait::Typography, Trait::Interaction];
const CARD_TRAITS: &[Trait] = &[Trait::Background, Trait::Border, Trait::Spacing, Trait::Layout];
const BUTTON_TRAITS: &[Trait] = &[Trait::Content, Trait::Background, Trait::Interaction];

const NEWS: [&str; 3] = [
    "Gulls clinch playoff spot",
    "New away kit revealed",
    "Community day this Sunday",
];

/// Roster entries: name and shirt number.
pub const PLAYERS: [(&str, u8); 8] = [
    ("Jordan Reyes", 1),
    ("Sam Okafor", 4),
    ("Lee Tanaka", 5),
    ("Alex Moreau", 8),
    ("Chris Novak", 9),
    ("Robin Silva", 10),
    ("Taylor Brandt", 11),
    ("Morgan Ellis", 23),
];

/// Shop products: name, price and image.
pub const PRODUCTS: [(&str, &str, &str); 3] = [
    ("Home Jersey", "$89", "https://cdn.gulls.example/jersey.png"),
    ("Scarf", "$25", "https://cdn.gulls.example/scarf.png"),
    ("Cap", "$30", "https://cdn.gulls.example/cap.png"),
];

/// What drawing the preview produced.
#[derive(Debug, Clone, Default)]
pub struct PreviewFrame {
    /// Click targets, in drawing order
    pub hits: HitMap,
    /// Layout facts for the header height propagator
    pub layout: FrameLayout,
}

/// The simulated app for one frame.
pub struct Preview<'a> {
    project: &'a ProjectConfig,
    cart_items: usize,
    top_padding: u16,
}

impl<'a> Preview<'a> {
    /// Preview of `project`; content starts `top_padding` rows below the top.
    #[must_use]
    pub const fn new(project: &'a ProjectConfig, cart_items: usize, top_padding: u16) -> Self {
        Self {
            project,
            cart_items,
            top_padding,
        }
    }

    /// Draws the page, then the header over it, then inspector overlays.
    pub fn render(&self, area: Rect, buf: &mut Buffer, context: &SelectContext<'_>) -> PreviewFrame {
        buf.set_style(area, Style::default().bg(BACKGROUND).fg(TEXT));

        let mut canvas = Canvas {
            buf,
            hits: HitMap::new(),
            context: *context,
            store: &self.project.component_overrides,
        };

        let padding = self.top_padding.min(area.height);
        let content = Rect::new(
            area.x + 1,
            area.y + padding,
            area.width.saturating_sub(2),
            area.height - padding,
        );
        match self.project.page {
            Page::Home => self.render_home(&mut canvas, content),
            Page::Roster => self.render_roster(&mut canvas, content),
            Page::Shop => self.render_shop(&mut canvas, content),
        }

        let header_rows = Header::new(self.project).render(area, canvas.buf, &mut canvas.hits, context);
        canvas.hits.render_overlays(canvas.buf, context);

        PreviewFrame {
            hits: canvas.hits,
            layout: FrameLayout {
                header_height: Some(header_rows),
            },
        }
    }

    fn render_home(&self, canvas: &mut Canvas<'_, '_>, area: Rect) {
        let mut rows = Rows::new(area);

        if let Some(row) = rows.take(1) {
            let icon = Rect::new(row.x, row.y, 3.min(row.width), 1);
            canvas.icon(
                icon,
                SelectTarget::new("home_logo_icon", ComponentType::Icon, "Team Logo")
                    .with_traits(&[Trait::Icon])
                    .with_breadcrumb(&["Home"]),
                "◉",
                self.project.team.secondary.to_ratatui_color(),
            );
            let text = Rect::new(row.x + 4, row.y, row.width.saturating_sub(4), 1);
            canvas.text(
                text,
                SelectTarget::new("home_welcome_text", ComponentType::Text, "Welcome")
                    .with_traits(&[Trait::Content, Trait::Typography])
                    .with_breadcrumb(&["Home"]),
                "Welcome back, fans!",
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                Alignment::Left,
            );
        }
        rows.gap(1);

        let hero_id = ElementId::new("home_hero_card");
        if let Some(card) = rows.take(4 + canvas.child_gap(&hero_id)) {
            let hero = canvas.card(
                card,
                SelectTarget::new(hero_id, ComponentType::Card, "Next Match")
                    .with_traits(CARD_TRAITS)
                    .with_breadcrumb(&["Home"]),
                true,
            );
            if let Some(inner) = hero.inner {
                let title = Rect::new(inner.x, inner.y, inner.width, 1.min(inner.height));
                canvas.text(
                    title,
                    SelectTarget::new("home_hero_title", ComponentType::Text, "Match Title")
                        .with_traits(&[Trait::Content, Trait::Typography])
                        .with_breadcrumb(&["Home", "Next Match"]),
                    "Next match: Saturday 7pm",
                    Style::default().fg(MUTED),
                    hero.align,
                );
                let body_y = inner.y + 1 + hero.gap;
                if body_y < inner.bottom() {
                    canvas.text(
                        Rect::new(inner.x, body_y, inner.width, 1),
                        SelectTarget::new("home_hero_body", ComponentType::Text, "Match Teams")
                            .with_traits(TEXT_TRAITS)
                            .with_breadcrumb(&["Home", "Next Match"]),
                        "Gulls vs. Rivertown Rays",
                        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                        hero.align,
                    );
                }
                canvas.finish_card(&hero);
            }
        }
        rows.gap(1);

        if let Some(row) = rows.take(1) {
            canvas.text(
                row,
                SelectTarget::new("home_news_title", ComponentType::Text, "News Heading")
                    .with_traits(&[Trait::Content, Trait::Typography])
                    .with_breadcrumb(&["Home", "News"]),
                "Latest News",
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                Alignment::Left,
            );
        }
        for (index, headline) in NEWS.into_iter().enumerate() {
            let Some(row) = rows.take(1) else { break };
            canvas.text(
                row,
                SelectTarget::new(ElementId::indexed("home_news", index), ComponentType::Text, "Headline")
                    .with_traits(TEXT_TRAITS)
                    .with_breadcrumb(&["Home", "News"]),
                &format!("• {headline}"),
                Style::default().fg(MUTED),
                Alignment::Left,
            );
        }
        rows.gap(1);

        if let Some(row) = rows.take(1) {
            let width = 17.min(row.width);
            let button = Rect::new(row.x + (row.width - width) / 2, row.y, width, 1);
            canvas.text(
                button,
                SelectTarget::new("home_cta_button", ComponentType::Button, "Buy Tickets")
                    .with_traits(BUTTON_TRAITS)
                    .with_breadcrumb(&["Home"]),
                "Buy Tickets",
                self.button_style(),
                Alignment::Center,
            );
        }
    }

    fn render_roster(&self, canvas: &mut Canvas<'_, '_>, area: Rect) {
        let mut rows = Rows::new(area);

        if let Some(row) = rows.take(1) {
            canvas.text(
                row,
                SelectTarget::new("roster_title", ComponentType::Text, "Roster Heading")
                    .with_traits(&[Trait::Content, Trait::Typography])
                    .with_breadcrumb(&["Roster"]),
                "First Team",
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                Alignment::Left,
            );
        }
        rows.gap(1);

        for (index, (name, number)) in PLAYERS.into_iter().enumerate() {
            let card_id = ElementId::indexed("player_card", index);
            let bordered = canvas.border_width(&card_id, 0) > 0;
            let Some(row) = rows.take(if bordered { 3 } else { 1 }) else {
                break;
            };
            let card = canvas.card(
                row,
                SelectTarget::new(card_id, ComponentType::Card, "Player Card")
                    .with_traits(&[Trait::Background, Trait::Border, Trait::Spacing])
                    .with_breadcrumb(&["Roster"]),
                false,
            );
            let Some(inner) = card.inner else { continue };
            if inner.height == 0 || inner.width < 10 {
                canvas.finish_card(&card);
                continue;
            }
            let line = Rect::new(inner.x, inner.y, inner.width, 1);

            canvas.icon(
                Rect::new(line.x, line.y, 2, 1),
                SelectTarget::new(ElementId::indexed("player_photo", index), ComponentType::Image, "Photo")
                    .with_breadcrumb(&["Roster", name]),
                "☺",
                MUTED,
            );
            canvas.text(
                Rect::new(line.x + 3, line.y, 4, 1),
                SelectTarget::new(ElementId::indexed("player_number", index), ComponentType::Badge, "Shirt Number")
                    .with_traits(&[Trait::Content, Trait::Background])
                    .with_breadcrumb(&["Roster", name]),
                &format!("{number:>2}"),
                Style::default()
                    .fg(Color::White)
                    .bg(self.project.team.primary.to_ratatui_color())
                    .add_modifier(Modifier::BOLD),
                Alignment::Center,
            );
            canvas.text(
                Rect::new(line.x + 8, line.y, line.width - 8, 1),
                SelectTarget::new(ElementId::indexed("player_name", index), ComponentType::Text, "Player Name")
                    .with_traits(TEXT_TRAITS)
                    .with_breadcrumb(&["Roster", name]),
                name,
                Style::default().fg(TEXT),
                card.align,
            );
            canvas.finish_card(&card);
        }
    }

    fn render_shop(&self, canvas: &mut Canvas<'_, '_>, area: Rect) {
        let mut rows = Rows::new(area);

        if let Some(row) = rows.take(1) {
            canvas.text(
                row,
                SelectTarget::new("shop_title", ComponentType::Text, "Shop Heading")
                    .with_traits(&[Trait::Content, Trait::Typography])
                    .with_breadcrumb(&["Shop"]),
                "Team Store",
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                Alignment::Left,
            );
            let width = 10.min(row.width);
            canvas.text(
                Rect::new(row.right() - width, row.y, width, 1),
                SelectTarget::new("shop_cart_badge", ComponentType::Badge, "Cart")
                    .with_traits(&[Trait::Background])
                    .with_breadcrumb(&["Shop"]),
                &format!("Cart: {}", self.cart_items),
                Style::default()
                    .fg(Color::White)
                    .bg(self.project.team.secondary.to_ratatui_color()),
                Alignment::Center,
            );
        }
        rows.gap(1);

        for (index, (product, price, image)) in PRODUCTS.into_iter().enumerate() {
            let card_id = ElementId::indexed("shop_card", index);
            let Some(row) = rows.take(4 + canvas.child_gap(&card_id)) else {
                break;
            };
            let card = canvas.card(
                row,
                SelectTarget::new(card_id, ComponentType::Card, "Product Card")
                    .with_traits(&[
                        Trait::Background,
                        Trait::Border,
                        Trait::Spacing,
                        Trait::Layout,
                        Trait::Glass,
                    ])
                    .with_breadcrumb(&["Shop"]),
                true,
            );
            let Some(inner) = card.inner else { continue };
            if inner.height < 2 + card.gap || inner.width < 16 {
                canvas.finish_card(&card);
                continue;
            }
            let crumb = ["Shop", product];
            let second_y = inner.y + 1 + card.gap;

            canvas.text(
                Rect::new(inner.x, inner.y, inner.width - 6, 1),
                SelectTarget::new(ElementId::indexed("shop_product", index), ComponentType::Text, "Product Name")
                    .with_traits(&[Trait::Content, Trait::Typography])
                    .with_breadcrumb(&crumb),
                product,
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                card.align,
            );
            canvas.text(
                Rect::new(inner.right() - 5, inner.y, 5, 1),
                SelectTarget::new(ElementId::indexed("shop_price", index), ComponentType::Text, "Price")
                    .with_traits(&[Trait::Content, Trait::Typography])
                    .with_breadcrumb(&crumb),
                price,
                Style::default().fg(MUTED),
                Alignment::Right,
            );
            canvas.image(
                Rect::new(inner.x, second_y, inner.width - 10, 1),
                SelectTarget::new(ElementId::indexed("shop_image", index), ComponentType::Image, "Product Image")
                    .with_breadcrumb(&crumb),
                image,
            );
            canvas.text(
                Rect::new(inner.right() - 9, second_y, 9, 1),
                SelectTarget::new(ElementId::indexed("shop_add", index), ComponentType::Button, "Add to Cart")
                    .with_traits(BUTTON_TRAITS)
                    .with_breadcrumb(&crumb)
                    .with_action(PreviewAction::AddToCart(index)),
                "Add",
                self.button_style(),
                Alignment::Center,
            );
            canvas.finish_card(&card);
        }
    }

    fn button_style(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.project.team.primary.to_ratatui_color())
            .add_modifier(Modifier::BOLD)
    }
}

/// Vertical cursor over the content area.
struct Rows {
    area: Rect,
    y: u16,
}

impl Rows {
    const fn new(area: Rect) -> Self {
        Self { y: area.y, area }
    }

    fn take(&mut self, height: u16) -> Option<Rect> {
        if self.y + height > self.area.bottom() || self.area.width == 0 {
            return None;
        }
        let row = Rect::new(self.area.x, self.y, self.area.width, height);
        self.y += height;
        Some(row)
    }

    fn gap(&mut self, rows: u16) {
        self.y = self.y.saturating_add(rows).min(self.area.bottom());
    }
}

/// A drawn card: where its children go and how they align.
struct CardArea {
    area: Rect,
    inner: Option<Rect>,
    align: Alignment,
    /// Blank rows between child lines
    gap: u16,
    ghosted: bool,
}

struct Canvas<'b, 's> {
    buf: &'b mut Buffer,
    hits: HitMap,
    context: SelectContext<'s>,
    store: &'s OverrideStore,
}

impl Canvas<'_, '_> {
    fn border_width(&self, id: &ElementId, default: i32) -> i32 {
        resolve_number(self.store.entry(id), keys::BORDER_WIDTH, 0, 2).unwrap_or(default)
    }

    /// Rows a card adds between its child lines.
    fn child_gap(&self, id: &ElementId) -> u16 {
        cells(self.store.entry(id), keys::GAP, 3)
    }

    /// Text leaf: content fallback, additive style, alignment.
    fn text(&mut self, area: Rect, target: SelectTarget, default: &str, base: Style, align: Alignment) -> Visibility {
        let store = self.store;
        let entry = store.entry(&target.id);
        let mut text = resolve_text(entry, default);
        if is_display_size(entry) {
            text = text.to_uppercase();
        }
        let align = resolve_alignment(entry).unwrap_or(align);
        let widget = Paragraph::new(text)
            .alignment(align)
            .style(base.patch(override_style(entry)));
        Selectable::new(target, entry, widget).render(area, self.buf, &mut self.hits, &self.context)
    }

    /// Icon leaf: default glyph unless an icon URL is set.
    fn icon(&mut self, area: Rect, target: SelectTarget, glyph: &str, color: Color) -> Visibility {
        let store = self.store;
        let entry = store.entry(&target.id);
        let shown = entry
            .and_then(|e| e.icon_url.as_deref())
            .filter(|url| !url.is_empty())
            .map_or_else(|| glyph.to_string(), icon_label);
        let tint = resolve_color(entry, keys::ICON_COLOR)
            .or_else(|| resolve_color(entry, keys::TEXT_COLOR))
            .map_or(color, |c| c.to_ratatui_color());
        let widget = Paragraph::new(shown).style(Style::default().fg(tint));
        Selectable::new(target, entry, widget).render(area, self.buf, &mut self.hits, &self.context)
    }

    /// Image leaf: always shows the source's file name or the fallback glyph.
    fn image(&mut self, area: Rect, target: SelectTarget, default_url: &str) -> Visibility {
        let store = self.store;
        let entry = store.entry(&target.id);
        let url = entry
            .and_then(|e| e.icon_url.as_deref())
            .filter(|url| !url.is_empty())
            .unwrap_or(default_url);
        let widget = Paragraph::new(icon_label(url)).style(Style::default().fg(MUTED));
        Selectable::new(target, entry, widget).render(area, self.buf, &mut self.hits, &self.context)
    }

    /// Card container: margin, fill, optional border, padding and child alignment.
    fn card(&mut self, area: Rect, target: SelectTarget, bordered_by_default: bool) -> CardArea {
        let store = self.store;
        let entry = store.entry(&target.id);
        let margin = cells(entry, keys::MARGIN, 4).min(area.width / 2);
        let area = Rect {
            x: area.x + margin,
            width: area.width - 2 * margin,
            ..area
        };
        let mut fill = resolve_color(entry, keys::BACKGROUND_COLOR).unwrap_or(SURFACE);
        if let Some(opacity) = resolve_number(entry, keys::GLASS_OPACITY, 0, 100) {
            let tint = resolve_color(entry, keys::GLASS_TINT).unwrap_or_default();
            fill = fill.lerp(&tint, u16::try_from(opacity).unwrap_or_default() * 10);
        }
        let border_width = resolve_number(entry, keys::BORDER_WIDTH, 0, 2)
            .unwrap_or(i32::from(bordered_by_default));
        let border_color = resolve_color(entry, keys::BORDER_COLOR)
            .map_or(BORDER, |c| c.to_ratatui_color());
        let padding = cells(entry, keys::PADDING, 4);
        let align = resolve_alignment(entry).unwrap_or(Alignment::Left);

        let mut block = Block::default()
            .style(Style::default().bg(fill.to_ratatui_color()))
            .padding(Padding::horizontal(padding));
        if border_width > 0 && area.height >= 3 {
            block = block
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color));
            if border_width > 1 {
                block = block.border_type(BorderType::Thick);
            }
        }
        let inner = block.inner(area);
        let visibility = Selectable::new(target, entry, block).render(area, self.buf, &mut self.hits, &self.context);
        CardArea {
            area,
            inner: (visibility != Visibility::Removed).then_some(inner),
            align,
            gap: cells(entry, keys::GAP, 3),
            ghosted: visibility == Visibility::Ghosted,
        }
    }

    /// Re-applies a hidden card's ghosting over its children.
    fn finish_card(&mut self, card: &CardArea) {
        if card.ghosted {
            ghost(card.area, self.buf);
        }
    }
}

/// A cell count override, clamped to `0..=max`; absent means zero.
fn cells(entry: Option<&Override>, key: &str, max: i32) -> u16 {
    resolve_number(entry, key, 0, max)
        .and_then(|n| u16::try_from(n).ok())
        .unwrap_or(0)
}

fn resolve_alignment(entry: Option<&Override>) -> Option<Alignment> {
    match entry?.get(keys::ALIGN)?.as_str()? {
        "left" => Some(Alignment::Left),
        "center" => Some(Alignment::Center),
        "right" => Some(Alignment::Right),
        _ => None,
    }
}

/// Picture glyph plus file name, or the fallback glyph for unusable sources.
#[must_use]
pub fn icon_label(url: &str) -> String {
    const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "svg", "webp"];
    let url = url.trim();
    let is_remote = url.starts_with("http://") || url.starts_with("https://");
    let file = url
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .rsplit('/')
        .next()
        .unwrap_or_default();
    let has_image_extension = file
        .rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));

    if (is_remote && !file.is_empty()) || has_image_extension {
        format!("▣ {file}")
    } else {
        tracing::debug!(url, "unusable image source, showing fallback");
        "⊘ image".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::Theme;
    use std::collections::HashSet;

    fn draw(project: &ProjectConfig, inspector_active: bool) -> (Buffer, PreviewFrame) {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 44, 40);
        let mut buf = Buffer::empty(area);
        let context = SelectContext {
            inspector_active,
            selected: None,
            hover: None,
            theme: &theme,
        };
        let frame = Preview::new(project, 0, 6).render(area, &mut buf, &context);
        (buf, frame)
    }

    #[test]
    fn test_ids_unique_and_follow_convention() {
        for page in Page::ALL {
            let mut project = ProjectConfig::new("Ids");
            project.page = page;
            project.quick_access_menu = true;
            let (_, frame) = draw(&project, true);

            let mut seen = HashSet::new();
            for id in frame.hits.ids() {
                assert!(id.follows_convention(), "{id} breaks the naming convention");
                assert!(seen.insert(id.clone()), "{id} registered twice on {page:?}");
            }
            assert!(!seen.is_empty());
        }
    }

    #[test]
    fn test_roster_has_player_name_7() {
        let mut project = ProjectConfig::new("Roster");
        project.page = Page::Roster;
        let (_, frame) = draw(&project, true);
        assert!(frame.hits.find(&ElementId::new("player_name_7")).is_some());
    }

    #[test]
    fn test_header_measurement_reported() {
        let project = ProjectConfig::new("Header");
        let (_, frame) = draw(&project, false);
        assert_eq!(frame.layout.header_height, Some(5));
    }

    #[test]
    fn test_card_margin_and_gap_move_children() {
        let mut project = ProjectConfig::new("Spacing");
        project.page = Page::Shop;
        let (plain_buf, plain) = draw(&project, false);

        let card = ElementId::new("shop_card_0");
        project.component_overrides.write(&card, keys::MARGIN, "3".into());
        project.component_overrides.write(&card, keys::GAP, "2".into());
        let (spaced_buf, spaced) = draw(&project, false);
        assert_ne!(plain_buf, spaced_buf);

        let before = plain.hits.find(&card).unwrap().area;
        let after = spaced.hits.find(&card).unwrap().area;
        assert_eq!(after.x, before.x + 3);
        assert_eq!(after.width, before.width - 6);
        assert_eq!(after.height, before.height + 2);

        let add = ElementId::new("shop_add_0");
        let add_before = plain.hits.find(&add).unwrap().area;
        let add_after = spaced.hits.find(&add).unwrap().area;
        assert_eq!(add_after.y, add_before.y + 2);
        assert_eq!(add_after.right(), add_before.right() - 3);

        // Later cards shift down by the extra rows
        let next = ElementId::new("shop_card_1");
        assert_eq!(
            spaced.hits.find(&next).unwrap().area.y,
            plain.hits.find(&next).unwrap().area.y + 2
        );
    }

    #[test]
    fn test_hero_gap_separates_title_and_body() {
        let mut project = ProjectConfig::new("Gap");
        let (_, plain) = draw(&project, false);
        project
            .component_overrides
            .write(&ElementId::new("home_hero_card"), keys::GAP, "1".into());
        let (_, spaced) = draw(&project, false);

        let body = ElementId::new("home_hero_body");
        let title = ElementId::new("home_hero_title");
        assert_eq!(
            spaced.hits.find(&body).unwrap().area.y,
            plain.hits.find(&body).unwrap().area.y + 1
        );
        assert_eq!(
            spaced.hits.find(&title).unwrap().area.y,
            plain.hits.find(&title).unwrap().area.y
        );
    }

    #[test]
    fn test_icon_label() {
        assert_eq!(icon_label("https://cdn.example/logo.png?v=2"), "▣ logo.png");
        assert_eq!(icon_label("assets/crest.SVG"), "▣ crest.SVG");
        assert_eq!(icon_label("not a url"), "⊘ image");
        assert_eq!(icon_label("ftp://host/file.txt"), "⊘ image");
    }
}
