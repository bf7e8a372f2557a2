//! Selectable boundary: turns drawn preview leaves into click targets.
//!
//! Every themeable leaf is drawn through [`Selectable`]. It applies the
//! visibility gate, records the leaf's screen region in a [`HitMap`] and, when
//! inspector mode is on, adds a non-interactive overlay. Clicks are resolved
//! afterwards against the hit map by [`resolve_click`]; the boundary itself
//! holds no mode state, the inspector flag is passed in on every frame.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::host::PointerModifierSource;
use crate::models::{ElementId, Override, Page, RgbColor};
use crate::registry::{ComponentType, Trait};
use crate::resolver::{build_metadata, resolve_visibility, ComponentMetadata, Visibility};
use crate::store::OverrideStore;
use crate::tui::Theme;

/// Behavior of a leaf in the simulated app itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewAction {
    /// Navigation tab
    SwitchPage(Page),
    /// Shop "Add" button for a product index
    AddToCart(usize),
}

/// Identity and editing surface of one themeable leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectTarget {
    /// Stable element id
    pub id: ElementId,
    /// Legacy component type
    pub component_type: ComponentType,
    /// Human label shown in the overlay tag and inspector title
    pub label: String,
    /// Traits declared on this instance, in order
    pub traits: Vec<Trait>,
    /// Location path, outermost first
    pub breadcrumb: Option<Vec<String>>,
    /// What a passed-through click does
    pub action: Option<PreviewAction>,
}

impl SelectTarget {
    /// Creates a target without traits.
    #[must_use]
    pub fn new(id: impl Into<ElementId>, component_type: ComponentType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_type,
            label: label.into(),
            traits: Vec::new(),
            breadcrumb: None,
            action: None,
        }
    }

    /// Declares the instance's traits.
    #[must_use]
    pub fn with_traits(mut self, traits: &[Trait]) -> Self {
        self.traits = traits.to_vec();
        self
    }

    /// Sets the breadcrumb path.
    #[must_use]
    pub fn with_breadcrumb(mut self, path: &[&str]) -> Self {
        self.breadcrumb = Some(path.iter().map(|segment| (*segment).to_string()).collect());
        self
    }

    /// Sets the app behavior of the leaf.
    #[must_use]
    pub const fn with_action(mut self, action: PreviewAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Resolves the inspector snapshot against the current store.
    #[must_use]
    pub fn metadata(&self, overrides: &OverrideStore) -> ComponentMetadata {
        build_metadata(
            &self.id,
            self.component_type,
            &self.label,
            self.breadcrumb.as_deref(),
            &self.traits,
            overrides.entry(&self.id),
        )
    }
}

/// A drawn leaf's screen region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    /// Cells the leaf occupies
    pub area: Rect,
    /// The leaf
    pub target: SelectTarget,
    /// Drawn ghosted because of `visible: false`
    pub hidden: bool,
}

/// Regions registered while drawing one frame.
///
/// Later registrations sit on top: a click resolves to the last region
/// containing it, and a duplicated id resolves to its last registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<HitRegion>,
}

impl HitMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a drawn leaf.
    pub fn register(&mut self, area: Rect, target: SelectTarget, hidden: bool) {
        self.regions.push(HitRegion { area, target, hidden });
    }

    /// Topmost region at a cell.
    #[must_use]
    pub fn region_at(&self, column: u16, row: u16) -> Option<&HitRegion> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|region| region.area.contains(position))
    }

    /// Last registered region for an id.
    #[must_use]
    pub fn find(&self, id: &ElementId) -> Option<&HitRegion> {
        self.regions.iter().rev().find(|region| &region.target.id == id)
    }

    /// Every registered id, in drawing order, duplicates included.
    pub fn ids(&self) -> impl Iterator<Item = &ElementId> {
        self.regions.iter().map(|region| &region.target.id)
    }

    /// All regions in drawing order.
    #[must_use]
    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    /// Number of registered regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether nothing was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Draws overlay tags and HIDDEN badges on top of the finished frame.
    pub fn render_overlays(&self, buf: &mut Buffer, context: &SelectContext<'_>) {
        if !context.inspector_active {
            return;
        }
        for region in &self.regions {
            if region.hidden {
                render_hidden_badge(region.area, buf, context.theme);
            }
        }
        let tagged = context
            .hover
            .and_then(|pos| self.region_at(pos.x, pos.y))
            .into_iter()
            .chain(context.selected.and_then(|id| self.find(id)));
        for region in tagged {
            render_tag(region, buf, context.theme);
        }
    }
}

/// Per-frame inputs shared by every boundary.
#[derive(Debug, Clone, Copy)]
pub struct SelectContext<'a> {
    /// Inspector-mode flag owned by the session
    pub inspector_active: bool,
    /// Currently selected element
    pub selected: Option<&'a ElementId>,
    /// Last known mouse position
    pub hover: Option<Position>,
    /// Editor chrome colors
    pub theme: &'a Theme,
}

/// Wraps a leaf widget with the visibility gate and inspector overlay.
pub struct Selectable<'a, W> {
    target: SelectTarget,
    overrides: Option<&'a Override>,
    child: W,
}

impl<'a, W: Widget> Selectable<'a, W> {
    /// Wraps `child`; `overrides` is the leaf's own store entry.
    pub fn new(target: SelectTarget, overrides: Option<&'a Override>, child: W) -> Self {
        Self {
            target,
            overrides,
            child,
        }
    }

    /// Draws the leaf and returns how the visibility gate resolved.
    pub fn render(
        self,
        area: Rect,
        buf: &mut Buffer,
        hits: &mut HitMap,
        context: &SelectContext<'_>,
    ) -> Visibility {
        let visibility = resolve_visibility(self.overrides, context.inspector_active);
        if visibility == Visibility::Removed {
            return visibility;
        }

        self.child.render(area, buf);
        let hidden = visibility == Visibility::Ghosted;
        if hidden {
            ghost(area, buf);
        }

        if context.inspector_active {
            let color = if context.selected == Some(&self.target.id) {
                context.theme.selected
            } else {
                context.theme.selection
            };
            buf.set_style(
                area,
                Style::default()
                    .add_modifier(Modifier::UNDERLINED)
                    .underline_color(color),
            );
        }

        hits.register(area, self.target, hidden);
        visibility
    }
}

/// Outcome of a primary click on the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No leaf under the pointer
    Missed,
    /// The click reaches the app itself
    PassThrough(Option<PreviewAction>),
    /// The click selected a leaf for inspection
    Selected(Box<ComponentMetadata>),
}

/// Resolves a left click at `(column, row)`.
///
/// In inspector mode the click selects the leaf unless the passthrough
/// modifier is held; outside inspector mode it always reaches the app.
pub fn resolve_click(
    hits: &HitMap,
    column: u16,
    row: u16,
    inspector_active: bool,
    modifiers: &dyn PointerModifierSource,
    overrides: &OverrideStore,
) -> ClickOutcome {
    let Some(region) = hits.region_at(column, row) else {
        return ClickOutcome::Missed;
    };
    if !inspector_active || modifiers.passthrough_held() {
        return ClickOutcome::PassThrough(region.target.action);
    }
    let metadata = region.target.metadata(overrides);
    tracing::debug!(id = %metadata.id, "selection click");
    ClickOutcome::Selected(Box::new(metadata))
}

/// Grayscale, dimmed and struck-through treatment for hidden leaves.
pub fn ghost(area: Rect, buf: &mut Buffer) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &mut buf[(x, y)];
            cell.fg = ghost_color(cell.fg);
            if cell.bg != Color::Reset {
                cell.bg = ghost_color(cell.bg);
            }
            cell.modifier |= Modifier::DIM | Modifier::CROSSED_OUT;
        }
    }
}

fn ghost_color(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => RgbColor::new(r, g, b).grayscale().to_ratatui_color(),
        Color::Reset | Color::Black => color,
        _ => Color::DarkGray,
    }
}

fn render_tag(region: &HitRegion, buf: &mut Buffer, theme: &Theme) {
    let tag = format!(" {}: {} ", region.target.component_type, region.target.label);
    // Above the leaf when there is room, on its first row otherwise
    let y = if region.area.y > buf.area.y {
        region.area.y - 1
    } else {
        region.area.y
    };
    let width = buf.area.right().saturating_sub(region.area.x);
    buf.set_stringn(
        region.area.x,
        y,
        tag,
        width as usize,
        Style::default().fg(Color::Black).bg(theme.selection),
    );
}

fn render_hidden_badge(area: Rect, buf: &mut Buffer, theme: &Theme) {
    const BADGE: &str = "HIDDEN";
    let width = BADGE.len() as u16;
    if area.width < width || area.height == 0 {
        return;
    }
    let x = area.right() - width;
    buf.set_string(
        x,
        area.y,
        BADGE,
        Style::default()
            .fg(Color::White)
            .bg(theme.hidden_badge)
            .add_modifier(Modifier::BOLD),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticModifier;
    use crate::models::overrides::keys;
    use crate::models::OverrideValue;
    use ratatui::widgets::Paragraph;

    fn button(index: usize) -> SelectTarget {
        SelectTarget::new(ElementId::indexed("shop_add", index), ComponentType::Button, "Add")
            .with_action(PreviewAction::AddToCart(index))
    }

    fn draw(
        store: &OverrideStore,
        inspector_active: bool,
        theme: &Theme,
    ) -> (Buffer, HitMap, Visibility) {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();
        let context = SelectContext {
            inspector_active,
            selected: None,
            hover: None,
            theme,
        };
        let target = button(0);
        let entry = store.entry(&target.id);
        let drawn = Selectable::new(target, entry, Paragraph::new("Add to cart"))
            .render(Rect::new(0, 1, 12, 1), &mut buf, &mut hits, &context);
        hits.render_overlays(&mut buf, &context);
        (buf, hits, drawn)
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_inert_mode_adds_no_overlay() {
        let theme = Theme::dark();
        let (buf, hits, drawn) = draw(&OverrideStore::new(), false, &theme);
        assert_eq!(drawn, Visibility::Shown);
        assert_eq!(hits.len(), 1);
        assert!(!buf[(0, 1)].modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_active_mode_underlines_leaf() {
        let theme = Theme::dark();
        let (buf, _, _) = draw(&OverrideStore::new(), true, &theme);
        assert!(buf[(0, 1)].modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_hidden_leaf_removed_outside_inspector() {
        let theme = Theme::dark();
        let mut store = OverrideStore::new();
        store.write(&ElementId::new("shop_add_0"), keys::VISIBLE, OverrideValue::from(false));
        let (buf, hits, drawn) = draw(&store, false, &theme);
        assert_eq!(drawn, Visibility::Removed);
        assert!(hits.is_empty());
        assert!(!row_text(&buf, 1).contains("Add"));
    }

    #[test]
    fn test_hidden_leaf_ghosted_with_badge_in_inspector() {
        let theme = Theme::dark();
        let mut store = OverrideStore::new();
        store.write(&ElementId::new("shop_add_0"), keys::VISIBLE, OverrideValue::from(false));
        let (buf, hits, drawn) = draw(&store, true, &theme);
        assert_eq!(drawn, Visibility::Ghosted);
        assert!(hits.regions()[0].hidden);
        assert!(row_text(&buf, 1).starts_with("Add"));
        assert!(row_text(&buf, 1).ends_with("HIDDEN"));
        assert!(buf[(0, 1)].modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_click_selects_unless_modifier_held() {
        let theme = Theme::dark();
        let store = OverrideStore::new();
        let (_, hits, _) = draw(&store, true, &theme);

        match resolve_click(&hits, 2, 1, true, &StaticModifier(false), &store) {
            ClickOutcome::Selected(meta) => {
                assert_eq!(meta.id.as_str(), "shop_add_0");
                assert_eq!(meta.component_type, ComponentType::Button);
            }
            other => panic!("expected selection, got {other:?}"),
        }
        assert_eq!(
            resolve_click(&hits, 2, 1, true, &StaticModifier(true), &store),
            ClickOutcome::PassThrough(Some(PreviewAction::AddToCart(0)))
        );
        assert_eq!(
            resolve_click(&hits, 2, 1, false, &StaticModifier(false), &store),
            ClickOutcome::PassThrough(Some(PreviewAction::AddToCart(0)))
        );
        assert_eq!(
            resolve_click(&hits, 2, 0, true, &StaticModifier(false), &store),
            ClickOutcome::Missed
        );
    }

    #[test]
    fn test_duplicate_ids_last_registration_wins() {
        let mut hits = HitMap::new();
        hits.register(Rect::new(0, 0, 4, 1), SelectTarget::new("dup_id", ComponentType::Text, "First"), false);
        hits.register(Rect::new(0, 1, 4, 1), SelectTarget::new("dup_id", ComponentType::Badge, "Second"), false);
        let found = hits.find(&ElementId::new("dup_id")).unwrap();
        assert_eq!(found.target.label, "Second");
        assert_eq!(hits.ids().count(), 2);
    }

    #[test]
    fn test_hover_shows_type_label_tag() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();
        let context = SelectContext {
            inspector_active: true,
            selected: None,
            hover: Some(Position::new(1, 2)),
            theme: &theme,
        };
        Selectable::new(
            SelectTarget::new("player_name_7", ComponentType::Text, "Player"),
            None,
            Paragraph::new("Jordan"),
        )
        .render(Rect::new(0, 2, 20, 1), &mut buf, &mut hits, &context);
        hits.render_overlays(&mut buf, &context);
        assert!(row_text(&buf, 1).starts_with(" text: Player "));
    }
}
