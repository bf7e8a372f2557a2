//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the preview/inspector widgets using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod component;
pub mod header;
pub mod inspector;
pub mod preview;
pub mod property_editor;
pub mod selectable;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{Config, InspectorLayout};
use crate::host::MouseModifiers;
use crate::models::{Page, ProjectConfig};
use crate::session::{EditorSession, TracingObserver};

pub use component::{Component, ComponentEvent};
pub use header::{HeaderHeightPropagator, HeaderInputs};
pub use inspector::InspectorHost;
pub use preview::{Preview, PreviewFrame};
pub use selectable::{ClickOutcome, HitMap, PreviewAction, SelectContext};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Width of the simulated phone screen, borders included.
const PHONE_WIDTH: u16 = 48;
/// Width of the docked inspector panel.
const DOCKED_WIDTH: u16 = 42;

/// Screen areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar
    pub title: Rect,
    /// Phone frame around the preview
    pub phone: Rect,
    /// Preview content inside the phone frame
    pub preview: Rect,
    /// Inspector panel, when one is shown
    pub inspector: Option<Rect>,
    /// Status bar
    pub status: Rect,
}

/// Splits the terminal into title, phone preview, inspector and status.
///
/// The docked inspector takes a column to the right of the phone; the
/// floating one is a popup over the main area and is only laid out when
/// something is selected.
#[must_use]
pub fn compute_layout(
    size: Rect,
    layout: InspectorLayout,
    inspector_mode: bool,
    has_selection: bool,
) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(8),    // Main content
            Constraint::Length(5), // Status bar
        ])
        .split(size);
    let main = rows[1];

    let docked = layout == InspectorLayout::Docked && (inspector_mode || has_selection);
    let (preview_column, inspector) = if docked {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(PHONE_WIDTH / 2), Constraint::Length(DOCKED_WIDTH)])
            .split(main);
        (columns[0], Some(columns[1]))
    } else if has_selection {
        (main, Some(floating_rect(main)))
    } else {
        (main, None)
    };

    let phone_width = PHONE_WIDTH.min(preview_column.width);
    let phone = Rect::new(
        preview_column.x + (preview_column.width - phone_width) / 2,
        preview_column.y,
        phone_width,
        preview_column.height,
    );
    let preview = phone_frame().inner(phone);

    ScreenLayout {
        title: rows[0],
        phone,
        preview,
        inspector,
        status: rows[2],
    }
}

fn floating_rect(main: Rect) -> Rect {
    let width = DOCKED_WIDTH.min(main.width);
    let height = (main.height * 3 / 4).max(12).min(main.height);
    Rect::new(
        main.right().saturating_sub(width + 2).max(main.x),
        main.y + 1.min(main.height),
        width,
        height.saturating_sub(1),
    )
}

fn phone_frame() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Application state - single source of truth
///
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Editor session owning the project aggregate and the selection
    pub session: EditorSession,
    /// Path of the project file
    pub source_path: Option<PathBuf>,
    /// Application configuration
    pub config: Config,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Inspector panel presenting the selection
    pub inspector: InspectorHost,
    /// Header height shared with the page content
    pub header_height: HeaderHeightPropagator,
    /// Items added through the simulated shop
    pub cart_items: usize,
    /// Last pointer position over the terminal
    pub hover: Option<Position>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Whether the unsaved-changes prompt is shown
    pub confirm_quit: bool,

    // Last frame
    /// Click targets of the last drawn preview
    pub hits: HitMap,
    /// Areas of the last drawn frame
    pub screen: Option<ScreenLayout>,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the editor state for `project`.
    #[must_use]
    pub fn new(project: ProjectConfig, source_path: Option<PathBuf>, config: Config) -> Self {
        let header_height = HeaderHeightPropagator::new(HeaderInputs::from_project(&project));
        let mut session = EditorSession::new(project, config.inspector.start_active);
        session.add_observer(Box::new(TracingObserver));

        Self {
            session,
            source_path,
            theme: Theme::from_mode(config.ui.theme_mode),
            inspector: InspectorHost::new(config.inspector.layout),
            header_height,
            cart_items: 0,
            hover: None,
            status_message: "Press i to inspect the preview".to_string(),
            error_message: None,
            confirm_quit: false,
            hits: HitMap::new(),
            screen: None,
            config,
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Saves the project to its file.
    ///
    /// # Errors
    ///
    /// Returns error if no path is known or the write fails
    pub fn save(&mut self) -> Result<()> {
        let path = self
            .source_path
            .clone()
            .context("No project file to save to")?;
        self.session.project().save(&path)?;
        self.session.mark_saved();
        self.set_status(format!("Saved {}", path.display()));
        Ok(())
    }

    /// Processes an event emitted by the inspector.
    pub fn handle_component_event(&mut self, event: ComponentEvent) {
        match event {
            ComponentEvent::Override { id, command } => {
                self.session.apply(&id, command);
                // The session re-reads the stored value; keep the panel on it.
                self.inspector.show(self.session.selection().cloned());
            }
            ComponentEvent::Closed => {
                self.session.close_inspector();
                self.inspector.show(None);
            }
        }
    }

    /// Turns inspector mode on or off.
    pub fn toggle_inspector_mode(&mut self) {
        self.session.toggle_inspector_mode();
        if self.session.selection().is_none() {
            self.inspector.show(None);
        }
        self.hover = None;
        let mode = if self.session.inspector_mode() {
            "Inspector on: click an element to edit it"
        } else {
            "Inspector off"
        };
        self.set_status(mode);
    }

    /// Switches the preview page and re-predicts the header.
    pub fn set_page(&mut self, page: Page) {
        self.session.set_page(page);
        self.header_settings_changed();
    }

    /// Applies a click that reached the simulated app.
    pub fn perform(&mut self, action: PreviewAction) {
        match action {
            PreviewAction::SwitchPage(page) => self.set_page(page),
            PreviewAction::AddToCart(index) => {
                self.cart_items += 1;
                let product = preview::PRODUCTS.get(index).map_or("item", |p| p.0);
                self.set_status(format!("Added {product} to cart"));
            }
        }
    }

    /// Switches between docked and floating inspector.
    pub fn toggle_inspector_layout(&mut self) {
        let layout = self.inspector.layout().toggled();
        self.inspector.set_layout(layout);
        self.config.inspector.layout = layout;
        self.set_status(format!("Inspector {}", layout_name(layout)));
    }

    fn header_settings_changed(&mut self) {
        self.header_height
            .on_config_change(HeaderInputs::from_project(self.session.project()));
    }
}

const fn layout_name(layout: InspectorLayout) -> &'static str {
    match layout {
        InspectorLayout::Docked => "docked",
        InspectorLayout::Floating => "floating",
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(state, mouse),
                // Terminal resized, will re-render on next loop
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state and record the frame's click targets.
pub fn render(f: &mut Frame, state: &mut AppState) {
    let theme = state.theme.clone();
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        f.area(),
    );

    let screen = compute_layout(
        f.area(),
        state.inspector.layout(),
        state.session.inspector_mode(),
        state.session.selection().is_some(),
    );

    render_title_bar(f, screen.title, state);

    let project = state.session.project();
    f.render_widget(
        phone_frame()
            .title(format!(" {} ", project.name))
            .border_style(Style::default().fg(theme.text_muted)),
        screen.phone,
    );
    let selected = state.session.selection().map(|meta| &meta.id);
    let context = SelectContext {
        inspector_active: state.session.inspector_mode(),
        selected,
        hover: state.hover,
        theme: &theme,
    };
    let frame = Preview::new(project, state.cart_items, state.header_height.top_padding())
        .render(screen.preview, f.buffer_mut(), &context);

    if let Some(area) = screen.inspector {
        state.inspector.render(f, area, &theme);
    }

    StatusBar::render(f, screen.status, state, &theme);

    if state.confirm_quit {
        render_unsaved_prompt(f, &theme);
    }

    state.header_height.observe(&frame.layout);
    state.hits = frame.hits;
    state.screen = Some(screen);
}

/// Render title bar with project name and dirty indicator
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let dirty_indicator = if state.session.is_dirty() { " *" } else { "" };
    let title = format!(
        " {} - {}{}",
        crate::constants::APP_NAME,
        state.session.project().name,
        dirty_indicator
    );

    let title_widget = Paragraph::new(title).style(
        Style::default()
            .fg(state.theme.primary)
            .bg(state.theme.surface)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title_widget, area);
}

/// Render unsaved changes prompt
fn render_unsaved_prompt(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from("You have unsaved changes."),
        Line::from(""),
        Line::from("  [S] Save and quit"),
        Line::from("  [Q] Quit without saving"),
        Line::from("  [Esc] Cancel"),
    ];

    let prompt = Paragraph::new(text).block(
        Block::default()
            .title(" Unsaved Changes ")
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.warning).bg(theme.background)),
    );

    f.render_widget(prompt, area);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events. Returns `true` when the editor should exit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> bool {
    if state.confirm_quit {
        return handle_quit_prompt(state, key);
    }

    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        return false;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => {
                if let Err(err) = state.save() {
                    tracing::warn!(error = %err, "save failed");
                    state.set_error(format!("{err:#}"));
                }
                return false;
            }
            KeyCode::Char('q' | 'c') => {
                if state.session.is_dirty() {
                    state.confirm_quit = true;
                    return false;
                }
                return true;
            }
            _ => {}
        }
    }

    // The open inspector owns the keyboard
    if state.session.selection().is_some() {
        if let Some(event) = state.inspector.handle_input(key) {
            state.handle_component_event(event);
        }
        return false;
    }

    match key.code {
        KeyCode::Char('i') => state.toggle_inspector_mode(),
        KeyCode::Tab => {
            let page = state.session.project().page.next();
            state.set_page(page);
        }
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            state.set_page(Page::ALL[index]);
        }
        KeyCode::Char('q') => {
            state.session.toggle_quick_access_menu();
            state.header_settings_changed();
        }
        KeyCode::Char('t') => {
            state.session.toggle_header_tabs();
            state.header_settings_changed();
        }
        KeyCode::Char('d') => state.toggle_inspector_layout(),
        _ => {}
    }
    false
}

fn handle_quit_prompt(state: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('s' | 'S') => match state.save() {
            Ok(()) => true,
            Err(err) => {
                state.confirm_quit = false;
                state.set_error(format!("{err:#}"));
                false
            }
        },
        KeyCode::Char('q' | 'Q') => true,
        KeyCode::Esc => {
            state.confirm_quit = false;
            false
        }
        _ => false,
    }
}

/// Handle mouse input: inspector buttons first, then preview clicks.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) {
    let Some(screen) = state.screen else { return };
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Moved => {
            state.hover = (state.session.inspector_mode() && screen.preview.contains(position))
                .then_some(position);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if state.confirm_quit || state.error_message.is_some() {
                return;
            }
            if let Some(area) = screen.inspector.filter(|area| area.contains(position)) {
                if let Some(event) = state.inspector.handle_click(area, mouse.column, mouse.row) {
                    state.handle_component_event(event);
                }
                return;
            }
            let modifiers = MouseModifiers::from_event(&mouse, state.config.inspector.passthrough_modifier);
            let outcome = selectable::resolve_click(
                &state.hits,
                mouse.column,
                mouse.row,
                state.session.inspector_mode(),
                &modifiers,
                state.session.overrides(),
            );
            match outcome {
                ClickOutcome::Selected(metadata) => {
                    state.inspector.show(Some((*metadata).clone()));
                    state.session.select(*metadata);
                }
                ClickOutcome::PassThrough(Some(action)) => state.perform(action),
                ClickOutcome::PassThrough(None) | ClickOutcome::Missed => {}
            }
        }
        _ => {}
    }
}

/// Runs the editor on a project file until the user quits.
///
/// # Errors
///
/// Returns error if the project cannot be loaded or the terminal fails
pub fn run_editor(path: Option<PathBuf>, config: Config) -> Result<()> {
    let project = match &path {
        Some(path) => ProjectConfig::load_or_new(path)?,
        None => ProjectConfig::default(),
    };
    let mut state = AppState::new(project, path, config);

    let mut terminal = setup_terminal()?;
    let result = run_tui(&mut state, &mut terminal);
    restore_terminal(terminal)?;

    // Keep the last inspector shell for the next session
    if let Err(err) = state.config.save() {
        tracing::warn!(error = %err, "could not persist configuration");
    }
    result
}
