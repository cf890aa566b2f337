pub mod post_list;
pub mod selector;

pub use selector::{UserSelector, DEFAULT_USER_ID};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::feed::PostFeed;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Selector,
    Feed,
}

/// The rendered page: user selector on the left, post feed on the right.
pub struct UI {
    selector: UserSelector,
    feed: PostFeed,
    theme: Theme,
    focus: FocusedPane,
}

impl UI {
    pub fn new() -> Self {
        Self {
            selector: UserSelector::new(),
            feed: PostFeed::new(),
            theme: Theme::default(),
            focus: FocusedPane::Selector,
        }
    }

    pub fn selector(&self) -> &UserSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut UserSelector {
        &mut self.selector
    }

    pub fn feed(&self) -> &PostFeed {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut PostFeed {
        &mut self.feed
    }

    pub fn focused_pane(&self) -> FocusedPane {
        self.focus
    }

    pub fn set_focus(&mut self, pane: FocusedPane) {
        self.focus = pane;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusedPane::Selector => FocusedPane::Feed,
            FocusedPane::Feed => FocusedPane::Selector,
        };
    }

    /// Flip one post's comment section and report the new state, or
    /// `None` when that post is not rendered.
    pub fn toggle_comments(&mut self, post_id: u64) -> Option<bool> {
        let expanded = self.feed.toggle_comments(post_id);
        match expanded {
            Some(state) => tracing::debug!("Post {} comments expanded={}", post_id, state),
            None => tracing::debug!("Toggle ignored, post {} is not rendered", post_id),
        }
        expanded
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(0)])
            .split(frame.size());

        let selector_focused = self.focus == FocusedPane::Selector;
        self.selector
            .render(frame, chunks[0], &self.theme, selector_focused);
        post_list::render_feed(frame, chunks[1], &self.feed, &self.theme, !selector_focused);
    }
}

impl Default for UI {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Company, User};
    use ratatui::{backend::TestBackend, Terminal};

    fn users() -> Vec<User> {
        vec![User {
            id: 1,
            name: "Leanne".to_string(),
            username: "leanne".to_string(),
            email: "leanne@example.com".to_string(),
            company: Company {
                name: "Romaguera-Crona".to_string(),
                catch_phrase: "catchy".to_string(),
            },
        }]
    }

    fn rendered_text(ui: &mut UI) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_disabled_selector_renders_the_loading_title() {
        let mut ui = UI::new();
        ui.selector_mut().populate(&users());

        let content = rendered_text(&mut ui);
        assert!(content.contains("Employees"));
        assert!(!content.contains("(loading)"));

        ui.selector_mut().set_disabled(true);
        let content = rendered_text(&mut ui);
        assert!(content.contains("Employees (loading)"));
    }
}
