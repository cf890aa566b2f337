use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashSet;

use crate::ui::{FocusedPane, UI};

/// Result of handling a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    /// The user selector committed a change; reload the feed.
    SelectorChange,
    /// Toggle the comment section of one rendered post.
    ToggleComments(u64),
}

/// Toggle handlers, keyed by post id. Every feed refresh unbinds all of
/// them and binds exactly one per rendered toggle button, so the binding
/// count always equals the rendered button count.
#[derive(Debug, Default)]
pub struct ToggleBindings {
    bound: HashSet<u64>,
}

impl ToggleBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every binding. Returns how many were detached.
    pub fn unbind_all(&mut self) -> usize {
        let detached = self.bound.len();
        self.bound.clear();
        detached
    }

    /// Replace all bindings with one per given post id.
    pub fn rebind(&mut self, post_ids: impl IntoIterator<Item = u64>) {
        self.unbind_all();
        self.bound.extend(post_ids);
    }

    pub fn is_bound(&self, post_id: u64) -> bool {
        self.bound.contains(&post_id)
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}

pub struct EventHandler {
    bindings: ToggleBindings,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            bindings: ToggleBindings::new(),
        }
    }

    pub fn bindings(&self) -> &ToggleBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut ToggleBindings {
        &mut self.bindings
    }

    /// Translate a key event into the action the app loop should take.
    pub fn handle_key_event(&mut self, key: KeyEvent, ui: &mut UI) -> EventResult {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return EventResult::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return EventResult::Quit;
            }
            KeyCode::Tab => {
                ui.toggle_focus();
                return EventResult::Continue;
            }
            _ => {}
        }

        match ui.focused_pane() {
            FocusedPane::Selector => self.handle_selector_keys(key, ui),
            FocusedPane::Feed => self.handle_feed_keys(key, ui),
        }
    }

    fn handle_selector_keys(&mut self, key: KeyEvent, ui: &mut UI) -> EventResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                ui.selector_mut().select_previous();
                EventResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                ui.selector_mut().select_next();
                EventResult::Continue
            }
            KeyCode::Enter => {
                if ui.selector().is_disabled() {
                    EventResult::Continue
                } else {
                    EventResult::SelectorChange
                }
            }
            _ => EventResult::Continue,
        }
    }

    fn handle_feed_keys(&mut self, key: KeyEvent, ui: &mut UI) -> EventResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                ui.feed_mut().select_previous();
                EventResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                ui.feed_mut().select_next();
                EventResult::Continue
            }
            KeyCode::Enter | KeyCode::Char(' ') => match ui.feed().selected_post_id() {
                Some(post_id) if self.bindings.is_bound(post_id) => {
                    EventResult::ToggleComments(post_id)
                }
                _ => EventResult::Continue,
            },
            _ => EventResult::Continue,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_rebind_replaces_previous_bindings() {
        let mut bindings = ToggleBindings::new();
        bindings.rebind([1, 2, 3]);
        assert_eq!(bindings.len(), 3);

        bindings.rebind([4, 5]);
        assert_eq!(bindings.len(), 2);
        assert!(!bindings.is_bound(1));
        assert!(bindings.is_bound(4));
    }

    #[test]
    fn test_unbind_all_reports_the_detached_count() {
        let mut bindings = ToggleBindings::new();
        bindings.rebind([1, 2]);

        assert_eq!(bindings.unbind_all(), 2);
        assert!(bindings.is_empty());
        assert_eq!(bindings.unbind_all(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut handler = EventHandler::new();
        let mut ui = UI::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('q')), &mut ui),
            EventResult::Quit
        );
        assert_eq!(
            handler.handle_key_event(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &mut ui
            ),
            EventResult::Quit
        );
    }

    #[test]
    fn test_tab_switches_focus() {
        let mut handler = EventHandler::new();
        let mut ui = UI::new();
        assert_eq!(ui.focused_pane(), FocusedPane::Selector);

        handler.handle_key_event(key(KeyCode::Tab), &mut ui);
        assert_eq!(ui.focused_pane(), FocusedPane::Feed);
    }

    #[test]
    fn test_enter_on_enabled_selector_commits_a_change() {
        let mut handler = EventHandler::new();
        let mut ui = UI::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Enter), &mut ui),
            EventResult::SelectorChange
        );

        ui.selector_mut().set_disabled(true);
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Enter), &mut ui),
            EventResult::Continue
        );
    }

    #[test]
    fn test_toggle_requires_a_binding_for_the_focused_post() {
        let mut handler = EventHandler::new();
        let mut ui = UI::new();
        ui.set_focus(FocusedPane::Feed);

        // empty feed, nothing focused
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Enter), &mut ui),
            EventResult::Continue
        );
    }
}
