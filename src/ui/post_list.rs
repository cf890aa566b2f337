use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::api::Comment;
use crate::feed::{PostEntry, PostFeed};
use crate::theme::Theme;

/// Build the display fragment for one post: title, body, post id, author
/// line, catch phrase, toggle button, and (when expanded) the comment
/// section.
pub fn entry_item(entry: &PostEntry, theme: &Theme) -> ListItem<'static> {
    let mut lines: Vec<Line<'static>> = vec![
        Line::styled(entry.post.title.clone(), theme.title),
        Line::styled(entry.post.body.clone(), theme.body),
        Line::styled(format!("Post ID: {}", entry.post.id), theme.meta),
        Line::styled(entry.author_line(), theme.meta),
    ];

    if let Some(phrase) = entry.catch_phrase() {
        lines.push(Line::styled(phrase.to_string(), theme.meta));
    }

    lines.push(Line::styled(
        format!("[ {} ]", entry.button_label()),
        theme.button,
    ));

    if entry.expanded {
        lines.extend(comment_lines(&entry.comments, theme));
    }

    lines.push(Line::raw(""));
    ListItem::new(Text::from(lines))
}

/// Build the comment-section fragment: a header plus one article per
/// comment. An empty thread still gets the header, so the section exists
/// even with zero comments.
pub fn comment_lines(comments: &[Comment], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(
        format!("  Comments ({})", comments.len()),
        theme.comment_author,
    )];

    for comment in comments {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(comment.name.clone(), theme.comment_author),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(comment.body.clone(), theme.comment_body),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("From: {}", comment.email), theme.meta),
        ]));
    }

    lines
}

/// Render the post feed, or the placeholder when nothing is displayed.
pub fn render_feed(frame: &mut Frame, area: Rect, feed: &PostFeed, theme: &Theme, focused: bool) {
    let border_style = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Posts")
        .border_style(border_style);

    if feed.is_empty() {
        let text = feed.placeholder().unwrap_or_default();
        let placeholder = Paragraph::new(Line::styled(text.to_string(), theme.placeholder))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = feed
        .entries()
        .iter()
        .map(|entry| entry_item(entry, theme))
        .collect();

    let list = List::new(items).block(block);
    let mut state = ListState::default().with_selected(Some(feed.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}
