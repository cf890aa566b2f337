use std::collections::HashMap;

use crate::api::{Comment, Post, PostDirectory, User};

/// Message shown instead of the list when no posts are rendered.
pub const EMPTY_FEED_PLACEHOLDER: &str = "Select an Employee to display their posts.";

pub const SHOW_COMMENTS_LABEL: &str = "Show Comments";
pub const HIDE_COMMENTS_LABEL: &str = "Hide Comments";

/// One rendered post: the post itself, its author (if the lookup
/// succeeded), its comment thread, and the thread's visibility.
#[derive(Debug, Clone)]
pub struct PostEntry {
    pub post: Post,
    pub author: Option<User>,
    pub comments: Vec<Comment>,
    pub expanded: bool,
}

impl PostEntry {
    /// Toggle-button label, derived from visibility so the two can never
    /// disagree.
    pub fn button_label(&self) -> &'static str {
        if self.expanded {
            HIDE_COMMENTS_LABEL
        } else {
            SHOW_COMMENTS_LABEL
        }
    }

    pub fn author_line(&self) -> String {
        match &self.author {
            Some(author) => format!("Author: {} with {}", author.name, author.company.name),
            None => "Author: unknown".to_string(),
        }
    }

    pub fn catch_phrase(&self) -> Option<&str> {
        self.author
            .as_ref()
            .map(|author| author.company.catch_phrase.as_str())
    }
}

/// View state for the displayed post list. Visibility lives here, in
/// memory, keyed by post id; the rendered widgets are derived from it on
/// every draw.
#[derive(Debug, Default)]
pub struct PostFeed {
    entries: Vec<PostEntry>,
    by_post: HashMap<u64, usize>,
    placeholder: Option<&'static str>,
    selected: usize,
}

impl PostFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole feed with a freshly built one for the given
    /// posts. Prior entries and their visibility state are discarded;
    /// every rebuilt entry starts collapsed.
    ///
    /// Authors and comments are fetched one post at a time, in input
    /// order, so the displayed order always matches the input order and a
    /// failed author lookup degrades only its own entry.
    pub async fn refresh(&mut self, posts: Vec<Post>, directory: &dyn PostDirectory) {
        self.clear();

        if posts.is_empty() {
            self.placeholder = Some(EMPTY_FEED_PLACEHOLDER);
            return;
        }

        for post in posts {
            let author = directory.get_user(post.user_id).await;
            if author.is_none() {
                tracing::debug!("No author record for post {}", post.id);
            }
            let comments = directory.post_comments(post.id).await;

            self.by_post.insert(post.id, self.entries.len());
            self.entries.push(PostEntry {
                post,
                author,
                comments,
                expanded: false,
            });
        }

        tracing::debug!("Feed rebuilt with {} posts", self.entries.len());
    }

    /// Remove every entry and reset the cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.by_post.clear();
        self.placeholder = None;
        self.selected = 0;
    }

    /// Flip the comment-section visibility for one post. Returns the new
    /// expanded state, or `None` (and mutates nothing) when the post is
    /// not currently rendered.
    pub fn toggle_comments(&mut self, post_id: u64) -> Option<bool> {
        let index = *self.by_post.get(&post_id)?;
        let entry = self.entries.get_mut(index)?;
        entry.expanded = !entry.expanded;
        Some(entry.expanded)
    }

    pub fn entries(&self) -> &[PostEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        self.placeholder
    }

    /// Ids of all rendered posts, in display order.
    pub fn post_ids(&self) -> Vec<u64> {
        self.entries.iter().map(|entry| entry.post.id).collect()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&PostEntry> {
        self.entries.get(self.selected)
    }

    pub fn selected_post_id(&self) -> Option<u64> {
        self.selected_entry().map(|entry| entry.post.id)
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() && self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
