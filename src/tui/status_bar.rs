//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: mode line, message line and key hints.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines = vec![Self::mode_line(state, theme)];

        if let Some(error) = &state.error_message {
            lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ]));
        } else if state.status_message.is_empty() {
            lines.push(Line::from(""));
        } else {
            lines.push(Line::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.text_secondary),
            ));
        }

        lines.push(Self::hints_line(state, theme));

        let status = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(status, area);
    }

    fn mode_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let session = &state.session;
        let project = session.project();

        let mode = if session.inspector_mode() {
            Span::styled(
                " INSPECT ",
                Style::default()
                    .fg(theme.background)
                    .bg(theme.selection)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                " PREVIEW ",
                Style::default()
                    .fg(theme.background)
                    .bg(theme.text_muted)
                    .add_modifier(Modifier::BOLD),
            )
        };

        let mut spans = vec![
            mode,
            Span::raw(" "),
            Span::styled(project.page.title().to_string(), Style::default().fg(theme.primary)),
            Span::styled(
                format!(" | Cart: {}", state.cart_items),
                Style::default().fg(theme.text_muted),
            ),
            Span::styled(
                format!(" | Overrides: {}", session.overrides().len()),
                Style::default().fg(theme.text_muted),
            ),
        ];
        if session.is_dirty() {
            spans.push(Span::styled(" | unsaved", Style::default().fg(theme.warning)));
        }
        if let Some(selection) = session.selection() {
            spans.push(Span::styled(
                format!(" | {}", selection.id),
                Style::default().fg(theme.selected),
            ));
        }
        Line::from(spans)
    }

    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let passthrough = format!("{}+Click", state.config.inspector.passthrough_modifier.display_name());
        let hints: Vec<(String, &str)> = if state.session.selection().is_some() {
            vec![
                ("↑↓".to_string(), "Property"),
                ("←→".to_string(), "Adjust"),
                ("Ctrl+R".to_string(), "Reset"),
                ("Esc".to_string(), "Close"),
            ]
        } else if state.session.inspector_mode() {
            vec![
                ("Click".to_string(), "Select"),
                (passthrough, "Use app"),
                ("d".to_string(), "Dock/float"),
                ("i".to_string(), "Leave"),
            ]
        } else {
            vec![
                ("i".to_string(), "Inspect"),
                ("Tab".to_string(), "Page"),
                ("q/t".to_string(), "Menu/tabs"),
                ("Ctrl+S".to_string(), "Save"),
                ("Ctrl+Q".to_string(), "Quit"),
            ]
        };

        let mut spans = Vec::new();
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(key, Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(action.to_string()));
        }
        Line::from(spans)
    }
}
