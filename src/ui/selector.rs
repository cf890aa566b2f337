use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::api::User;
use crate::theme::Theme;

/// User id applied when a change is committed with no explicit choice.
pub const DEFAULT_USER_ID: u64 = 1;

/// One selectable row: user id plus display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: u64,
    pub label: String,
}

/// Single-selection control over the fetched users. While disabled it
/// accepts no input, which serializes feed refreshes.
#[derive(Debug, Default)]
pub struct UserSelector {
    options: Vec<SelectOption>,
    state: ListState,
    disabled: bool,
}

impl UserSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the option list from a fresh user fetch. Any previous
    /// options and selection are dropped.
    pub fn populate(&mut self, users: &[User]) {
        if users.is_empty() {
            tracing::warn!("No users available to populate the selector");
        }

        self.options = users
            .iter()
            .map(|user| SelectOption {
                value: user.id,
                label: user.name.clone(),
            })
            .collect();
        self.state = ListState::default();
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// The explicitly chosen user id, if any.
    pub fn chosen_user_id(&self) -> Option<u64> {
        let index = self.state.selected()?;
        self.options.get(index).map(|option| option.value)
    }

    /// The user id a change commit targets: the chosen one, or the
    /// default user when nothing was picked.
    pub fn resolve_user_id(&self) -> u64 {
        self.chosen_user_id().unwrap_or(DEFAULT_USER_ID)
    }

    /// Move the cursor onto the option with the given value, if present.
    pub fn select_value(&mut self, value: u64) {
        if let Some(index) = self.options.iter().position(|option| option.value == value) {
            self.state.select(Some(index));
        }
    }

    pub fn select_next(&mut self) {
        if self.disabled || self.options.is_empty() {
            return;
        }
        let next = match self.state.selected() {
            Some(index) => (index + 1).min(self.options.len() - 1),
            None => 0,
        };
        self.state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.disabled || self.options.is_empty() {
            return;
        }
        let previous = self.state.selected().map_or(0, |index| index.saturating_sub(1));
        self.state.select(Some(previous));
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let item_style = if self.disabled {
            theme.selector_disabled
        } else {
            theme.selector_item
        };

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|option| ListItem::new(Line::styled(option.label.clone(), item_style)))
            .collect();

        let title = if self.disabled {
            "Employees (loading)"
        } else {
            "Employees"
        };
        let border_style = if focused {
            theme.border_focused
        } else {
            theme.border
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border_style),
            )
            .highlight_style(theme.highlight);

        frame.render_stateful_widget(list, area, &mut self.state);
    }
}
