//! Preview header and the header height propagator.
//!
//! The header is drawn on top of the page content, which starts below it by
//! a top padding equal to the header's height. The propagator supplies that
//! padding: a prediction computed from the project settings until the first
//! frame is drawn, then the rows the header actually used.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::host::LayoutMeasurementSource;
use crate::models::overrides::keys;
use crate::models::{ElementId, Page, ProjectConfig, RgbColor};
use crate::registry::{ComponentType, Trait};
use crate::resolver::{is_display_size, override_style, resolve_color, resolve_text, Visibility};
use crate::tui::selectable::{HitMap, PreviewAction, SelectContext, SelectTarget, Selectable};

/// Id of the header band.
pub const HEADER_ID: &str = "header_main";

const QUICK_MENU: [&str; 3] = ["Tickets", "Scores", "News"];
const SUBTITLE: &str = "Official App";

/// Project settings that change the header's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderInputs {
    /// Page shown
    pub page: Page,
    /// Quick-access menu row under the band
    pub quick_access_menu: bool,
    /// Tab row inside the header
    pub header_tabs: bool,
}

impl HeaderInputs {
    /// Reads the header settings of a project.
    #[must_use]
    pub const fn from_project(project: &ProjectConfig) -> Self {
        Self {
            page: project.page,
            quick_access_menu: project.quick_access_menu,
            header_tabs: project.header_tabs,
        }
    }

    /// Expected header rows assuming the title fits on one line.
    #[must_use]
    pub const fn predict(&self) -> u16 {
        // padding + title + padding, plus a subtitle on the home page
        let band = match self.page {
            Page::Home => 4,
            Page::Roster | Page::Shop => 3,
        };
        band + self.header_tabs as u16 + self.quick_access_menu as u16
    }
}

/// Current estimate of the header height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderHeight {
    /// Computed from settings, nothing observed yet
    Predicted(u16),
    /// Observed from a drawn frame
    Measured(u16),
}

impl HeaderHeight {
    /// Height in rows.
    #[must_use]
    pub const fn rows(&self) -> u16 {
        match self {
            Self::Predicted(rows) | Self::Measured(rows) => *rows,
        }
    }
}

/// Feeds the header height to the page content as top padding.
///
/// A settings change recomputes a prediction right away; an observation
/// always replaces the current value with the newest measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderHeightPropagator {
    inputs: HeaderInputs,
    height: HeaderHeight,
}

impl HeaderHeightPropagator {
    /// Starts in the predicted state for `inputs`.
    #[must_use]
    pub const fn new(inputs: HeaderInputs) -> Self {
        Self {
            height: HeaderHeight::Predicted(inputs.predict()),
            inputs,
        }
    }

    /// Current estimate.
    #[must_use]
    pub const fn state(&self) -> HeaderHeight {
        self.height
    }

    /// Top padding for the page content.
    #[must_use]
    pub const fn top_padding(&self) -> u16 {
        self.height.rows()
    }

    /// Recomputes the prediction when header settings changed.
    pub fn on_config_change(&mut self, inputs: HeaderInputs) {
        if inputs == self.inputs {
            return;
        }
        self.inputs = inputs;
        self.height = HeaderHeight::Predicted(inputs.predict());
        tracing::trace!(rows = self.height.rows(), "header height predicted");
    }

    /// Takes the newest measurement, if the source has one.
    pub fn observe(&mut self, source: &dyn LayoutMeasurementSource) {
        let Some(rows) = source.measured_header_height() else {
            return;
        };
        if self.height != HeaderHeight::Measured(rows) {
            tracing::trace!(rows, "header height measured");
        }
        self.height = HeaderHeight::Measured(rows);
    }
}

/// Greedy word wrap; words longer than `width` are split.
#[must_use]
pub fn wrap_words(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let needed = if current.is_empty() {
            word.len()
        } else {
            current.chars().count() + 1 + word.len()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Gradient band with centered lines of text.
struct GradientBand {
    start: RgbColor,
    end: RgbColor,
    lines: Vec<Line<'static>>,
}

impl Widget for GradientBand {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let span = u32::from(area.width.saturating_sub(1).max(1));
        for x in area.left()..area.right() {
            let t = u16::try_from(u32::from(x - area.x) * 1000 / span).map_or(1000, |t| t.min(1000));
            let color = self.start.lerp(&self.end, t).to_ratatui_color();
            for y in area.top()..area.bottom() {
                buf[(x, y)].set_bg(color);
            }
        }
        let text_area = Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(2));
        Paragraph::new(self.lines)
            .alignment(Alignment::Center)
            .render(text_area, buf);
    }
}

/// The preview header: gradient band, optional tab row, optional quick menu.
pub struct Header<'a> {
    project: &'a ProjectConfig,
}

impl<'a> Header<'a> {
    /// Header for `project`.
    #[must_use]
    pub const fn new(project: &'a ProjectConfig) -> Self {
        Self { project }
    }

    fn title(&self) -> String {
        let entry = self.project.component_overrides.entry(&ElementId::new(HEADER_ID));
        let title = resolve_text(entry, &self.project.team.name);
        if is_display_size(entry) {
            title.to_uppercase()
        } else {
            title
        }
    }

    /// Draws the header at the top of `area` and returns the rows it used.
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        hits: &mut HitMap,
        context: &SelectContext<'_>,
    ) -> u16 {
        let project = self.project;
        let store = &project.component_overrides;
        let id = ElementId::new(HEADER_ID);
        let entry = store.entry(&id);

        let title_lines = wrap_words(&self.title(), area.width.saturating_sub(4));
        let title_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
            .patch(override_style(entry));
        let mut lines: Vec<Line<'static>> = title_lines
            .into_iter()
            .map(|line| Line::styled(line, title_style))
            .collect();
        let is_home = project.page == Page::Home;
        if is_home {
            lines.push(Line::styled(
                SUBTITLE,
                Style::default().fg(Color::Rgb(226, 232, 240)),
            ));
        }

        let band_rows = (lines.len() as u16 + 2).min(area.height);
        let band = GradientBand {
            start: resolve_color(entry, keys::GRADIENT_START).unwrap_or(project.team.primary),
            end: resolve_color(entry, keys::GRADIENT_END).unwrap_or(project.team.secondary),
            lines,
        };
        let target = SelectTarget::new(id, ComponentType::Header, "Header").with_breadcrumb(&["Header"]);
        let band_area = Rect::new(area.x, area.y, area.width, band_rows);
        let mut used = 0;
        if Selectable::new(target, entry, band).render(band_area, buf, hits, context) != Visibility::Removed {
            used = band_rows;
        }

        if project.header_tabs && used < area.height {
            self.render_tabs(Rect::new(area.x, area.y + used, area.width, 1), buf, hits, context);
            used += 1;
        }
        if project.quick_access_menu && used < area.height {
            self.render_quick_menu(Rect::new(area.x, area.y + used, area.width, 1), buf, hits, context);
            used += 1;
        }
        used
    }

    fn render_tabs(&self, row: Rect, buf: &mut Buffer, hits: &mut HitMap, context: &SelectContext<'_>) {
        let store = &self.project.component_overrides;
        let base = self.project.team.primary.dim(60).to_ratatui_color();
        buf.set_style(row, Style::default().bg(base));

        let width = row.width / Page::ALL.len() as u16;
        for (index, page) in Page::ALL.into_iter().enumerate() {
            let id = ElementId::new(format!("header_tab_{}", page.title().to_lowercase()));
            let entry = store.entry(&id);
            let mut style = Style::default().fg(Color::Rgb(203, 213, 225));
            if page == self.project.page {
                style = style.fg(Color::White).add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            let text = resolve_text(entry, page.title());
            let cell = Rect::new(row.x + width * index as u16, row.y, width, 1);
            let target = SelectTarget::new(id, ComponentType::Tab, page.title())
                .with_traits(&[Trait::Content, Trait::Typography, Trait::Interaction])
                .with_breadcrumb(&["Header", "Tabs"])
                .with_action(PreviewAction::SwitchPage(page));
            let widget = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(style.patch(override_style(entry)));
            Selectable::new(target, entry, widget).render(cell, buf, hits, context);
        }
    }

    fn render_quick_menu(&self, row: Rect, buf: &mut Buffer, hits: &mut HitMap, context: &SelectContext<'_>) {
        let store = &self.project.component_overrides;
        buf.set_style(row, Style::default().bg(Color::Rgb(30, 41, 59)));

        let width = row.width / QUICK_MENU.len() as u16;
        for (index, label) in QUICK_MENU.into_iter().enumerate() {
            let id = ElementId::indexed("quick_menu", index);
            let entry = store.entry(&id);
            let text = format!("◆ {}", resolve_text(entry, label));
            let cell = Rect::new(row.x + width * index as u16, row.y, width, 1);
            let target = SelectTarget::new(id, ComponentType::Button, label)
                .with_traits(&[Trait::Content, Trait::Background, Trait::Interaction])
                .with_breadcrumb(&["Header", "Quick Menu"]);
            let widget = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Rgb(148, 163, 184)).patch(override_style(entry)));
            Selectable::new(target, entry, widget).render(cell, buf, hits, context);
        }
    }
}
