//! Inspector host: docked and floating panels for the current selection.
//!
//! Both shells share one contract. The host keeps its own copy of the
//! selection's metadata and updates it on every edit and reset, so the panel
//! reflects the store without being rebuilt.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::InspectorLayout;
use crate::resolver::ComponentMetadata;
use crate::store::OverrideCommand;
use crate::tui::component::{Component, ComponentEvent};
use crate::tui::property_editor::{self, PropertyUpdate};
use crate::tui::Theme;

const RESET_LABEL: &str = "[ Reset ]";
const CLOSE_LABEL: &str = "[ Close ]";
const HEADER_ROWS: u16 = 3;

/// Screen regions of an inspector drawn into a given area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectorRegions {
    /// Title, id and path rows
    pub header: Rect,
    /// Property controls
    pub body: Rect,
    /// Reset button
    pub reset: Rect,
    /// Close button
    pub close: Rect,
}

/// Panel presenting the property editor for the selected element.
#[derive(Debug, Clone)]
pub struct InspectorHost {
    metadata: Option<ComponentMetadata>,
    focus: usize,
    layout: InspectorLayout,
}

impl InspectorHost {
    /// Creates an empty host in the given shell.
    #[must_use]
    pub const fn new(layout: InspectorLayout) -> Self {
        Self {
            metadata: None,
            focus: 0,
            layout,
        }
    }

    /// Current shell.
    #[must_use]
    pub const fn layout(&self) -> InspectorLayout {
        self.layout
    }

    /// Switches between docked and floating.
    pub fn set_layout(&mut self, layout: InspectorLayout) {
        self.layout = layout;
    }

    /// The host's copy of the selection.
    #[must_use]
    pub const fn metadata(&self) -> Option<&ComponentMetadata> {
        self.metadata.as_ref()
    }

    /// Index of the focused property.
    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    /// Presents `metadata`, or the empty state for `None`.
    ///
    /// Focus is kept when the same element is shown again.
    pub fn show(&mut self, metadata: Option<ComponentMetadata>) {
        let same_element = matches!(
            (&self.metadata, &metadata),
            (Some(old), Some(new)) if old.id == new.id
        );
        if !same_element {
            self.focus = metadata
                .as_ref()
                .and_then(|meta| property_editor::first_focus(&meta.editable_props))
                .unwrap_or(0);
        }
        self.metadata = metadata;
    }

    /// Clears the element's overrides and mirrors that locally.
    pub fn reset(&mut self) -> Option<ComponentEvent> {
        let metadata = self.metadata.as_mut()?;
        metadata.clear_values();
        Some(ComponentEvent::Override {
            id: metadata.id.clone(),
            command: OverrideCommand::Reset,
        })
    }

    /// Closes the panel.
    pub fn close(&mut self) -> ComponentEvent {
        self.metadata = None;
        self.focus = 0;
        ComponentEvent::Closed
    }

    /// Computes the panel's regions inside `area`.
    #[must_use]
    pub fn regions(area: Rect) -> InspectorRegions {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let header_rows = HEADER_ROWS.min(inner.height);
        let header = Rect::new(inner.x, inner.y, inner.width, header_rows);
        let footer_y = inner.bottom().saturating_sub(1).max(inner.y);
        let body_top = (inner.y + header_rows + 1).min(footer_y);
        let body = Rect::new(
            inner.x,
            body_top,
            inner.width,
            footer_y.saturating_sub(body_top).saturating_sub(1),
        );
        let reset_width = (RESET_LABEL.len() as u16).min(inner.width);
        let reset = Rect::new(inner.x, footer_y, reset_width, 1);
        let close_x = inner.x + reset_width + 2;
        let close = Rect::new(
            close_x,
            footer_y,
            (CLOSE_LABEL.len() as u16).min(inner.right().saturating_sub(close_x)),
            1,
        );
        InspectorRegions {
            header,
            body,
            reset,
            close,
        }
    }

    /// Handles a left click at `(column, row)` on a panel drawn into `area`.
    pub fn handle_click(&mut self, area: Rect, column: u16, row: u16) -> Option<ComponentEvent> {
        let position = Position::new(column, row);
        if !area.contains(position) {
            return None;
        }
        let regions = Self::regions(area);
        if regions.close.contains(position) {
            return Some(self.close());
        }
        if regions.reset.contains(position) {
            return self.reset();
        }
        let metadata = self.metadata.as_ref()?;
        let hit = property_editor::layout_properties(regions.body, &metadata.editable_props, self.focus)
            .into_iter()
            .find(|(_, rect)| rect.contains(position));
        if let Some((index, _)) = hit {
            self.focus = index;
        }
        None
    }

    fn apply_update(&mut self, update: PropertyUpdate) -> Option<ComponentEvent> {
        let metadata = self.metadata.as_mut()?;
        metadata.set_value(update.key, update.value.clone());
        Some(ComponentEvent::Override {
            id: metadata.id.clone(),
            command: OverrideCommand::update(update.key, update.value),
        })
    }

    fn render_header(&self, f: &mut Frame, area: Rect, metadata: &ComponentMetadata, theme: &Theme) {
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{}: ", metadata.component_type),
                    Style::default().fg(theme.text_secondary),
                ),
                Span::styled(
                    metadata.label.clone(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                if metadata.is_hidden() {
                    Span::styled(
                        " HIDDEN",
                        Style::default()
                            .fg(theme.hidden_badge)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::raw("")
                },
            ]),
            Line::from(Span::styled(
                metadata.id.to_string(),
                Style::default().fg(theme.text_muted),
            )),
        ];

        if let Some(path) = &metadata.breadcrumb {
            lines.push(Line::from(Span::styled(
                path.join(" › "),
                Style::default().fg(theme.text_muted),
            )));
        } else if !metadata.traits.is_empty() {
            let names: Vec<&str> = metadata.traits.iter().map(|t| t.name()).collect();
            lines.push(Line::from(Span::styled(
                format!("traits: {}", names.join(", ")),
                Style::default().fg(theme.text_muted),
            )));
        }

        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_empty(f: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No element selected",
                Style::default().fg(theme.text_secondary),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press i, then click an element in the preview",
                Style::default().fg(theme.text_muted),
            )),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_buttons(f: &mut Frame, regions: &InspectorRegions, theme: &Theme) {
        f.render_widget(
            Paragraph::new(Span::styled(RESET_LABEL, Style::default().fg(theme.warning))),
            regions.reset,
        );
        f.render_widget(
            Paragraph::new(Span::styled(CLOSE_LABEL, Style::default().fg(theme.text_secondary))),
            regions.close,
        );
    }
}

impl Component for InspectorHost {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => return Some(self.close()),
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => return self.reset(),
            _ => {}
        }

        let metadata = self.metadata.as_ref()?;
        let props = &metadata.editable_props;
        match key.code {
            KeyCode::Down => {
                self.focus = property_editor::next_focus(props, self.focus);
                None
            }
            KeyCode::Up => {
                self.focus = property_editor::previous_focus(props, self.focus);
                None
            }
            _ => {
                let prop = props.get(self.focus)?;
                let update = property_editor::handle_key(prop, key)?;
                self.apply_update(update)
            }
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = match self.layout {
            InspectorLayout::Docked => Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(" Inspector "),
            InspectorLayout::Floating => {
                f.render_widget(Clear, area);
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.accent))
                    .style(Style::default().bg(theme.surface))
                    .title(" Inspector (floating) ")
            }
        };
        let inner = block.inner(area);
        f.render_widget(block, area);

        let Some(metadata) = &self.metadata else {
            Self::render_empty(f, inner, theme);
            return;
        };

        let regions = Self::regions(area);
        self.render_header(f, regions.header, metadata, theme);
        if metadata.editable_props.is_empty() {
            f.render_widget(
                Paragraph::new(Span::styled(
                    "No editable properties",
                    Style::default().fg(theme.text_muted),
                )),
                regions.body,
            );
        } else {
            property_editor::render_properties(
                f,
                regions.body,
                &metadata.editable_props,
                self.focus,
                theme,
            );
        }
        Self::render_buttons(f, &regions, theme);
    }

    fn should_close(&self) -> bool {
        self.metadata.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::overrides::keys;
    use crate::models::{ElementId, Override, OverrideValue};
    use crate::registry::{ComponentType, Trait};
    use crate::resolver::build_metadata;
    use ratatui::{backend::TestBackend, Terminal};

    fn player_name(entry: Option<&Override>) -> ComponentMetadata {
        build_metadata(
            &ElementId::new("player_name_7"),
            ComponentType::Text,
            "Player Name",
            None,
            &[Trait::Content, Trait::Typography, Trait::Interaction],
            entry,
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen_text(host: &InspectorHost, width: u16, height: u16) -> String {
        let theme = Theme::dark();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| host.render(f, f.area(), &theme)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_state_for_none() {
        let host = InspectorHost::new(InspectorLayout::Docked);
        assert!(screen_text(&host, 40, 12).contains("No element selected"));
    }

    #[test]
    fn test_edit_updates_local_copy_and_emits() {
        let mut host = InspectorHost::new(InspectorLayout::Docked);
        host.show(Some(player_name(None)));
        assert_eq!(host.focus(), 0);

        let event = host.handle_input(key(KeyCode::Char('A'))).unwrap();
        assert_eq!(
            event,
            ComponentEvent::Override {
                id: ElementId::new("player_name_7"),
                command: OverrideCommand::update(keys::TEXT, "A"),
            }
        );
        assert_eq!(host.metadata().unwrap().value(keys::TEXT), Some(&"A".into()));
    }

    #[test]
    fn test_reset_clears_without_remount() {
        let mut entry = Override::default();
        entry.set(keys::TEXT_COLOR, "#ff0000".into());
        entry.set(keys::VISIBLE, false.into());
        let mut host = InspectorHost::new(InspectorLayout::Floating);
        host.show(Some(player_name(Some(&entry))));
        host.handle_input(key(KeyCode::Down));
        let focus = host.focus();

        let event = host
            .handle_input(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(matches!(event, ComponentEvent::Override { command: OverrideCommand::Reset, .. }));
        let meta = host.metadata().unwrap();
        assert!(meta.editable_props.iter().all(|p| p.value == OverrideValue::unset()));
        assert_eq!(host.focus(), focus);
    }

    #[test]
    fn test_escape_closes() {
        let mut host = InspectorHost::new(InspectorLayout::Docked);
        host.show(Some(player_name(None)));
        assert_eq!(host.handle_input(key(KeyCode::Esc)), Some(ComponentEvent::Closed));
        assert!(host.should_close());
    }

    #[test]
    fn test_render_shows_title_and_controls() {
        let mut host = InspectorHost::new(InspectorLayout::Docked);
        host.show(Some(player_name(None)));
        let text = screen_text(&host, 44, 20);
        assert!(text.contains("text: Player Name"));
        assert!(text.contains("player_name_7"));
        assert!(text.contains("Content"));
        assert!(text.contains("[ Reset ]"));
    }

    #[test]
    fn test_click_buttons() {
        let area = Rect::new(0, 0, 40, 20);
        let regions = InspectorHost::regions(area);
        let mut host = InspectorHost::new(InspectorLayout::Docked);
        host.show(Some(player_name(None)));

        let event = host.handle_click(area, regions.reset.x, regions.reset.y);
        assert!(matches!(event, Some(ComponentEvent::Override { command: OverrideCommand::Reset, .. })));
        let event = host.handle_click(area, regions.close.x + 1, regions.close.y);
        assert_eq!(event, Some(ComponentEvent::Closed));
        assert!(host.metadata().is_none());
    }

    #[test]
    fn test_click_focuses_property() {
        let area = Rect::new(0, 0, 40, 20);
        let regions = InspectorHost::regions(area);
        let mut host = InspectorHost::new(InspectorLayout::Docked);
        host.show(Some(player_name(None)));
        // Second control starts two rows below the first
        assert_eq!(host.handle_click(area, regions.body.x + 1, regions.body.y + 2), None);
        assert_eq!(host.focus(), 1);
    }
}
