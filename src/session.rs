//! Editor session: the context object that owns the project aggregate.
//!
//! The session is created when a project is opened and dropped at project
//! switch. It is the single writer of the override store and the only place
//! that talks to the hosting page through [`SessionObserver`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{ElementId, Page, ProjectConfig};
use crate::resolver::{current_value, ComponentMetadata};
use crate::store::{OverrideCommand, OverrideStore};

/// Partial config change reported to the host after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeUpdate {
    /// The override store changed for one element
    Overrides {
        /// Element that was edited or reset
        element: ElementId,
        /// Store snapshot after the change
        component_overrides: OverrideStore,
    },
    /// A header-affecting project setting changed
    Header {
        /// Current page
        page: Page,
        /// Quick-access menu row shown
        quick_access_menu: bool,
        /// Tabs embedded in the header
        header_tabs: bool,
    },
}

/// Callbacks crossing from the engine into the hosting page.
///
/// All methods default to doing nothing.
pub trait SessionObserver {
    /// The project changed; the host decides how to persist it.
    fn on_theme_update(&mut self, _update: &ThemeUpdate) {}

    /// An element was selected for inspection.
    fn on_element_select(&mut self, _metadata: &ComponentMetadata) {}

    /// The inspector was closed.
    fn on_inspector_close(&mut self) {}
}

/// Observer that only emits tracing events.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl SessionObserver for TracingObserver {
    fn on_theme_update(&mut self, update: &ThemeUpdate) {
        match update {
            ThemeUpdate::Overrides {
                element,
                component_overrides,
            } => tracing::debug!(
                element = %element,
                entries = component_overrides.len(),
                "theme update"
            ),
            ThemeUpdate::Header {
                page,
                quick_access_menu,
                header_tabs,
            } => tracing::debug!(?page, quick_access_menu, header_tabs, "header config update"),
        }
    }

    fn on_element_select(&mut self, metadata: &ComponentMetadata) {
        tracing::debug!(
            id = %metadata.id,
            component_type = %metadata.component_type,
            props = metadata.editable_props.len(),
            "element selected"
        );
    }

    fn on_inspector_close(&mut self) {
        tracing::debug!("inspector closed");
    }
}

/// A callback delivered by the session, as seen by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// `on_theme_update`
    ThemeUpdate(ThemeUpdate),
    /// `on_element_select`, carrying the selected id
    ElementSelect(ElementId),
    /// `on_inspector_close`
    InspectorClose,
}

/// Observer that records every callback into a shared log.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    events: Rc<RefCell<Vec<SessionEvent>>>,
}

impl RecordingObserver {
    /// Creates an observer with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events seen so far.
    #[must_use]
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.borrow().clone()
    }

    /// Empties the log.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl SessionObserver for RecordingObserver {
    fn on_theme_update(&mut self, update: &ThemeUpdate) {
        self.events
            .borrow_mut()
            .push(SessionEvent::ThemeUpdate(update.clone()));
    }

    fn on_element_select(&mut self, metadata: &ComponentMetadata) {
        self.events
            .borrow_mut()
            .push(SessionEvent::ElementSelect(metadata.id.clone()));
    }

    fn on_inspector_close(&mut self) {
        self.events.borrow_mut().push(SessionEvent::InspectorClose);
    }
}

/// Owns the project aggregate, the inspector-mode flag and the selection.
pub struct EditorSession {
    project: ProjectConfig,
    inspector_mode: bool,
    selection: Option<ComponentMetadata>,
    dirty: bool,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl EditorSession {
    /// Opens a session on `project`.
    #[must_use]
    pub fn new(project: ProjectConfig, inspector_mode: bool) -> Self {
        Self {
            project,
            inspector_mode,
            selection: None,
            dirty: false,
            observers: Vec::new(),
        }
    }

    /// Registers a host callback receiver.
    pub fn add_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// The project aggregate.
    #[must_use]
    pub const fn project(&self) -> &ProjectConfig {
        &self.project
    }

    /// The override store.
    #[must_use]
    pub const fn overrides(&self) -> &OverrideStore {
        &self.project.component_overrides
    }

    /// Whether inspector mode is on.
    #[must_use]
    pub const fn inspector_mode(&self) -> bool {
        self.inspector_mode
    }

    /// The current selection, if the inspector is open.
    #[must_use]
    pub const fn selection(&self) -> Option<&ComponentMetadata> {
        self.selection.as_ref()
    }

    /// Whether there are changes not yet saved.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the project as persisted.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Turns inspector mode on or off. Leaving it closes the inspector.
    pub fn set_inspector_mode(&mut self, active: bool) {
        if self.inspector_mode == active {
            return;
        }
        self.inspector_mode = active;
        tracing::debug!(active, "inspector mode changed");
        if !active {
            self.close_inspector();
        }
    }

    /// Flips inspector mode.
    pub fn toggle_inspector_mode(&mut self) {
        self.set_inspector_mode(!self.inspector_mode);
    }

    /// Opens the inspector on `metadata`.
    pub fn select(&mut self, metadata: ComponentMetadata) {
        for observer in &mut self.observers {
            observer.on_element_select(&metadata);
        }
        self.selection = Some(metadata);
    }

    /// Closes the inspector. Does nothing when nothing is selected.
    pub fn close_inspector(&mut self) {
        if self.selection.take().is_none() {
            return;
        }
        for observer in &mut self.observers {
            observer.on_inspector_close();
        }
    }

    /// Applies an override command and keeps the open selection in sync.
    pub fn apply(&mut self, id: &ElementId, command: OverrideCommand) {
        let before = self.project.component_overrides.clone();
        let mirrored_key = match &command {
            OverrideCommand::Update { key, .. } => Some(key.clone()),
            OverrideCommand::Reset => None,
        };
        self.project.component_overrides.apply(id, command);

        if let Some(selection) = self.selection.as_mut().filter(|sel| &sel.id == id) {
            match &mirrored_key {
                Some(key) => {
                    let stored = current_value(self.project.component_overrides.entry(id), key);
                    selection.set_value(key, stored);
                }
                None => selection.clear_values(),
            }
        }

        if self.project.component_overrides.same_snapshot(&before) {
            return;
        }
        self.project.touch();
        self.dirty = true;
        let update = ThemeUpdate::Overrides {
            element: id.clone(),
            component_overrides: self.project.component_overrides.clone(),
        };
        self.notify(&update);
    }

    /// Switches the preview page.
    pub fn set_page(&mut self, page: Page) {
        if self.project.page == page {
            return;
        }
        self.project.page = page;
        self.header_changed();
    }

    /// Shows or hides the quick-access menu row.
    pub fn toggle_quick_access_menu(&mut self) {
        self.project.quick_access_menu = !self.project.quick_access_menu;
        self.header_changed();
    }

    /// Embeds tabs in the header or moves them out.
    pub fn toggle_header_tabs(&mut self) {
        self.project.header_tabs = !self.project.header_tabs;
        self.header_changed();
    }

    /// Replaces the whole aggregate (project load or switch).
    pub fn load_project(&mut self, project: ProjectConfig) {
        tracing::info!(name = %project.name, id = %project.id, "project loaded into session");
        self.close_inspector();
        self.project = project;
        self.dirty = false;
    }

    fn header_changed(&mut self) {
        self.project.touch();
        self.dirty = true;
        let update = ThemeUpdate::Header {
            page: self.project.page,
            quick_access_menu: self.project.quick_access_menu,
            header_tabs: self.project.header_tabs,
        };
        self.notify(&update);
    }

    fn notify(&mut self, update: &ThemeUpdate) {
        for observer in &mut self.observers {
            observer.on_theme_update(update);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::overrides::keys;
    use crate::registry::{ComponentType, Trait};
    use crate::resolver::build_metadata;

    fn session_with_recorder() -> (EditorSession, RecordingObserver) {
        let mut session = EditorSession::new(ProjectConfig::new("Test"), true);
        let recorder = RecordingObserver::new();
        session.add_observer(Box::new(recorder.clone()));
        (session, recorder)
    }

    fn player_name(session: &EditorSession) -> ComponentMetadata {
        let id = ElementId::new("player_name_7");
        build_metadata(
            &id,
            ComponentType::Text,
            "Player Name",
            None,
            &[Trait::Content, Trait::Typography, Trait::Interaction],
            session.overrides().entry(&id),
        )
    }

    #[test]
    fn test_apply_notifies_and_syncs_selection() {
        let (mut session, recorder) = session_with_recorder();
        let meta = player_name(&session);
        session.select(meta);

        let id = ElementId::new("player_name_7");
        session.apply(&id, OverrideCommand::update(keys::TEXT_COLOR, "#ff0000"));

        let selection = session.selection().unwrap();
        assert_eq!(selection.value(keys::TEXT_COLOR), Some(&"#ff0000".into()));
        assert!(session.is_dirty());

        let events = recorder.events();
        assert_eq!(events[0], SessionEvent::ElementSelect(id.clone()));
        assert!(matches!(
            &events[1],
            SessionEvent::ThemeUpdate(ThemeUpdate::Overrides { element, .. }) if element == &id
        ));
    }

    #[test]
    fn test_reset_clears_selection_copy() {
        let (mut session, _) = session_with_recorder();
        let id = ElementId::new("player_name_7");
        session.apply(&id, OverrideCommand::update(keys::TEXT, "Ace"));
        session.select(player_name(&session));
        assert_eq!(session.selection().unwrap().value(keys::TEXT), Some(&"Ace".into()));

        session.apply(&id, OverrideCommand::Reset);
        let selection = session.selection().unwrap();
        assert!(selection.editable_props.iter().all(|p| !p.is_overridden()));
        assert!(!session.overrides().contains(&id));
    }

    #[test]
    fn test_reset_of_missing_entry_is_silent() {
        let (mut session, recorder) = session_with_recorder();
        session.apply(&ElementId::new("shop_add_0"), OverrideCommand::Reset);
        assert!(recorder.events().is_empty());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_rejected_update_is_silent() {
        let (mut session, recorder) = session_with_recorder();
        let id = ElementId::new("shop_add_0");
        session.apply(&id, OverrideCommand::update(keys::VISIBLE, "maybe"));
        assert!(!session.overrides().contains(&id));
        assert!(recorder.events().is_empty());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_leaving_inspector_mode_closes_inspector() {
        let (mut session, recorder) = session_with_recorder();
        session.select(player_name(&session));
        session.toggle_inspector_mode();
        assert!(!session.inspector_mode());
        assert!(session.selection().is_none());
        assert_eq!(recorder.events().last(), Some(&SessionEvent::InspectorClose));
    }

    #[test]
    fn test_load_project_replaces_aggregate() {
        let (mut session, _) = session_with_recorder();
        let id = ElementId::new("header_main");
        session.apply(&id, OverrideCommand::update(keys::TEXT, "Old"));
        session.select(player_name(&session));
        let held = session.overrides().clone();

        session.load_project(ProjectConfig::new("Fresh"));
        assert!(session.selection().is_none());
        assert!(session.overrides().is_empty());
        assert!(!session.is_dirty());
        // A reference taken before the load still sees the old map
        assert_eq!(held.read(&id, keys::TEXT), Some("Old".into()));
    }

    #[test]
    fn test_header_settings_emit_header_update() {
        let (mut session, recorder) = session_with_recorder();
        session.toggle_quick_access_menu();
        session.set_page(Page::Shop);
        session.set_page(Page::Shop);
        let events = recorder.events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            SessionEvent::ThemeUpdate(ThemeUpdate::Header {
                page: Page::Shop,
                quick_access_menu: true,
                header_tabs: true,
            })
        );
    }
}
