//! Property editor: one typed control per editable property.
//!
//! The editor is stateless. Rendering takes the props (each carrying its
//! current value) and the focused index; input handling takes one prop and a
//! key and returns the `(key, value)` update to dispatch, if any.

// Slider math converts between i32 and gauge ratios
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use crate::models::{OverrideValue, RgbColor};
use crate::registry::PropertyKind;
use crate::resolver::EditableProp;
use crate::tui::Theme;

/// A change produced by a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyUpdate {
    /// Property key
    pub key: &'static str,
    /// New value
    pub value: OverrideValue,
}

/// Rows a control occupies: a label row plus the control row.
///
/// Upload controls belong to the host's asset pipeline and take no rows here.
#[must_use]
pub const fn control_height(kind: &PropertyKind) -> u16 {
    match kind {
        PropertyKind::ImageUpload => 0,
        _ => 2,
    }
}

/// Whether a control can take focus.
#[must_use]
pub const fn is_focusable(kind: &PropertyKind) -> bool {
    control_height(kind) > 0
}

/// Index of the next focusable prop after `from`, wrapping.
#[must_use]
pub fn next_focus(props: &[EditableProp], from: usize) -> usize {
    step_focus(props, from, 1)
}

/// Index of the previous focusable prop before `from`, wrapping.
#[must_use]
pub fn previous_focus(props: &[EditableProp], from: usize) -> usize {
    step_focus(props, from, props.len().saturating_sub(1))
}

fn step_focus(props: &[EditableProp], from: usize, stride: usize) -> usize {
    let len = props.len();
    if len == 0 {
        return 0;
    }
    let mut index = from % len;
    for _ in 0..len {
        index = (index + stride) % len;
        if is_focusable(&props[index].descriptor.kind) {
            return index;
        }
    }
    from
}

/// First focusable index, if any prop can take focus.
#[must_use]
pub fn first_focus(props: &[EditableProp]) -> Option<usize> {
    props
        .iter()
        .position(|prop| is_focusable(&prop.descriptor.kind))
}

/// Screen rows of each rendered control, scrolled so `focus` stays visible.
#[must_use]
pub fn layout_properties(area: Rect, props: &[EditableProp], focus: usize) -> Vec<(usize, Rect)> {
    let heights: Vec<u16> = props
        .iter()
        .map(|prop| control_height(&prop.descriptor.kind))
        .collect();

    // Skip leading props until the focused control fits
    let mut first = 0;
    let focus_bottom = |first: usize| -> u32 {
        heights[first..=focus.min(heights.len().saturating_sub(1))]
            .iter()
            .map(|h| u32::from(*h))
            .sum()
    };
    if !heights.is_empty() {
        while first < focus && focus_bottom(first) > u32::from(area.height) {
            first += 1;
        }
    }

    let mut rows = Vec::new();
    let mut y = area.y;
    for (index, height) in heights.iter().enumerate().skip(first) {
        if *height == 0 {
            continue;
        }
        if y + height > area.bottom() {
            break;
        }
        rows.push((index, Rect::new(area.x, y, area.width, *height)));
        y += height;
    }
    rows
}

/// Renders all controls into `area`.
pub fn render_properties(
    f: &mut Frame,
    area: Rect,
    props: &[EditableProp],
    focus: usize,
    theme: &Theme,
) {
    for (index, row) in layout_properties(area, props, focus) {
        render_property(f, row, &props[index], index == focus, theme);
    }
}

/// Renders one control. Upload props render nothing.
pub fn render_property(f: &mut Frame, area: Rect, prop: &EditableProp, focused: bool, theme: &Theme) {
    if area.height < 2 || !is_focusable(&prop.descriptor.kind) {
        return;
    }

    let label_style = if focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_secondary)
    };
    let marker = if focused { "▶ " } else { "  " };
    let mut label = vec![Span::styled(
        format!("{marker}{}", prop.descriptor.label),
        label_style,
    )];
    if prop.is_overridden() {
        label.push(Span::styled(" •", Style::default().fg(theme.primary)));
    }
    f.render_widget(Paragraph::new(Line::from(label)), Rect::new(area.x, area.y, area.width, 1));

    let control = Rect::new(area.x + 2, area.y + 1, area.width.saturating_sub(2), 1);
    let row_style = if focused {
        Style::default().bg(theme.highlight_bg)
    } else {
        Style::default()
    };

    match prop.descriptor.kind {
        PropertyKind::Text { placeholder } => {
            let line = text_line(prop.value.as_str().unwrap_or_default(), placeholder, focused, theme);
            f.render_widget(Paragraph::new(line).style(row_style), control);
        }
        PropertyKind::Color => {
            f.render_widget(Paragraph::new(color_line(&prop.value, focused, theme)).style(row_style), control);
        }
        PropertyKind::Slider { min, max, unit, .. } => {
            let current = numeric_value(&prop.value);
            let ratio = current.map_or(0.0, |value| {
                let span = (max - min).max(1);
                f64::from(value.clamp(min, max) - min) / f64::from(span)
            });
            let label = current.map_or_else(|| "inherit".to_string(), |value| format!("{value} {unit}"));
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(theme.primary).bg(theme.surface))
                .label(label)
                .ratio(ratio);
            f.render_widget(gauge, control);
        }
        PropertyKind::Number { unit, .. } => {
            let shown = numeric_value(&prop.value)
                .map_or_else(|| "inherit".to_string(), |value| value.to_string());
            let line = Line::from(vec![
                Span::styled("◂ ", Style::default().fg(theme.text_muted)),
                Span::styled(shown, Style::default().fg(theme.text)),
                Span::styled(format!(" ▸ {unit}"), Style::default().fg(theme.text_muted)),
            ]);
            f.render_widget(Paragraph::new(line).style(row_style), control);
        }
        PropertyKind::Select { options } => {
            let current = prop.value.as_str().filter(|value| !value.is_empty());
            let mut spans = vec![Span::styled("◂ ", Style::default().fg(theme.text_muted))];
            for option in options {
                let style = if current == Some(*option) {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(theme.text_muted)
                };
                spans.push(Span::styled(format!(" {option} "), style));
            }
            spans.push(Span::styled(" ▸", Style::default().fg(theme.text_muted)));
            f.render_widget(Paragraph::new(Line::from(spans)).style(row_style), control);
        }
        PropertyKind::Toggle => {
            let line = match prop.value.as_bool() {
                Some(true) => Line::from(Span::styled("[x] on", Style::default().fg(theme.success))),
                Some(false) => Line::from(Span::styled("[ ] off", Style::default().fg(theme.error))),
                None => Line::from(Span::styled("[x] on (default)", Style::default().fg(theme.text_muted))),
            };
            f.render_widget(Paragraph::new(line).style(row_style), control);
        }
        PropertyKind::ImageUpload => {}
    }
}

fn text_line(value: &str, placeholder: Option<&'static str>, focused: bool, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    if value.is_empty() {
        if let Some(hint) = placeholder {
            spans.push(Span::styled(hint.to_string(), Style::default().fg(theme.text_muted)));
        } else {
            spans.push(Span::styled("inherit", Style::default().fg(theme.text_muted)));
        }
    } else {
        spans.push(Span::styled(value.to_string(), Style::default().fg(theme.text)));
    }
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
    }
    Line::from(spans)
}

fn color_line(value: &OverrideValue, focused: bool, theme: &Theme) -> Line<'static> {
    let raw = value.as_str().unwrap_or_default();
    let mut spans = Vec::new();
    if raw.is_empty() {
        spans.push(Span::styled("inherit", Style::default().fg(theme.text_muted)));
    } else {
        match RgbColor::parse_lenient(raw) {
            Some(color) => {
                spans.push(Span::styled("  ", Style::default().bg(color.to_ratatui_color())));
                spans.push(Span::raw(" "));
                spans.push(Span::styled(raw.to_string(), Style::default().fg(theme.text)));
            }
            None => {
                spans.push(Span::styled(raw.to_string(), Style::default().fg(theme.text)));
                spans.push(Span::styled(" (not a color)", Style::default().fg(theme.warning)));
            }
        }
    }
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
    }
    Line::from(spans)
}

fn numeric_value(value: &OverrideValue) -> Option<i32> {
    value.as_str()?.trim().parse().ok()
}

/// Maps a key press on a focused control to an update.
#[must_use]
pub fn handle_key(prop: &EditableProp, key: KeyEvent) -> Option<PropertyUpdate> {
    let update = |value: OverrideValue| {
        Some(PropertyUpdate {
            key: prop.descriptor.key,
            value,
        })
    };

    match prop.descriptor.kind {
        PropertyKind::Text { .. } | PropertyKind::Color => {
            let mut text = prop.value.as_str().unwrap_or_default().to_string();
            match (key.code, key.modifiers) {
                (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => text.push(c),
                (KeyCode::Backspace, _) => {
                    text.pop()?;
                }
                _ => return None,
            }
            update(text.into())
        }
        PropertyKind::Slider { min, max, step, .. } | PropertyKind::Number { min, max, step, .. } => {
            let current = numeric_value(&prop.value);
            let next = match key.code {
                KeyCode::Right | KeyCode::Char('+' | 'l') => {
                    current.map_or(min, |value| value.saturating_add(step))
                }
                KeyCode::Left | KeyCode::Char('-' | 'h') => {
                    current.map_or(min, |value| value.saturating_sub(step))
                }
                KeyCode::Home => min,
                KeyCode::End => max,
                _ => return None,
            };
            update(next.clamp(min, max).to_string().into())
        }
        PropertyKind::Select { options } => {
            if options.is_empty() {
                return None;
            }
            let current = prop
                .value
                .as_str()
                .and_then(|value| options.iter().position(|option| *option == value));
            let next = match (key.code, current) {
                (KeyCode::Right | KeyCode::Char(' '), Some(index)) => (index + 1) % options.len(),
                (KeyCode::Left, Some(index)) => (index + options.len() - 1) % options.len(),
                (KeyCode::Right | KeyCode::Char(' '), None) => 0,
                (KeyCode::Left, None) => options.len() - 1,
                _ => return None,
            };
            update(options[next].into())
        }
        PropertyKind::Toggle => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                // Absent means the element is shown
                let current = prop.value.as_bool().unwrap_or(true);
                update((!current).into())
            }
            _ => None,
        },
        PropertyKind::ImageUpload => None,
    }
}
