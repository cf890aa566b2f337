use ratatui::style::{Color, Modifier, Style};

/// Styles for the rendered page. One flat set, no runtime switching.
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub body: Style,
    pub meta: Style,
    pub button: Style,
    pub comment_author: Style,
    pub comment_body: Style,
    pub placeholder: Style,
    pub selector_item: Style,
    pub selector_disabled: Style,
    pub highlight: Style,
    pub border: Style,
    pub border_focused: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            body: Style::default().fg(Color::Gray),
            meta: Style::default().fg(Color::DarkGray),
            button: Style::default().fg(Color::Yellow),
            comment_author: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            comment_body: Style::default().fg(Color::Gray),
            placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            selector_item: Style::default().fg(Color::White),
            selector_disabled: Style::default().fg(Color::DarkGray),
            highlight: Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Blue),
        }
    }
}
