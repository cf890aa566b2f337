use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::time::Duration;

use crate::api::{Post, PostDirectory};
use crate::events::{EventHandler, EventResult};
use crate::ui::UI;

pub struct App {
    should_quit: bool,
    ui: UI,
    event_handler: EventHandler,
    directory: Arc<dyn PostDirectory>,
    initial_user: Option<u64>,
}

impl App {
    pub fn new(directory: Arc<dyn PostDirectory>, initial_user: Option<u64>) -> Self {
        Self {
            should_quit: false,
            ui: UI::new(),
            event_handler: EventHandler::new(),
            directory,
            initial_user,
        }
    }

    pub fn ui(&self) -> &UI {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut UI {
        &mut self.ui
    }

    pub fn event_handler(&self) -> &EventHandler {
        &self.event_handler
    }

    /// Fetch the user list, populate the selector, and render the
    /// initial page. With `--user` the feed is loaded immediately;
    /// otherwise the placeholder is shown until the first selection.
    pub async fn initialize(&mut self) -> Result<()> {
        let users = self.directory.list_users().await;
        tracing::info!("Loaded {} users", users.len());
        self.ui.selector_mut().populate(&users);

        if let Some(user_id) = self.initial_user {
            self.ui.selector_mut().select_value(user_id);
            self.handle_selector_change().await;
        } else {
            self.refresh_feed(Vec::new()).await;
        }

        Ok(())
    }

    /// Run the TUI until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        if !io::stdout().is_tty() {
            return Err(anyhow::anyhow!(
                "Postboard requires a terminal (TTY) to run."
            ));
        }

        enable_raw_mode()
            .map_err(|e| anyhow::anyhow!("Failed to enable raw mode: {}", e))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| anyhow::anyhow!("Failed to setup terminal: {}", e))?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal =
            Terminal::new(backend).map_err(|e| anyhow::anyhow!("Failed to create terminal: {}", e))?;

        let result = self.run_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let tick_rate = Duration::from_millis(50);

        loop {
            terminal.draw(|f| self.ui.render(f))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match self.event_handler.handle_key_event(key, &mut self.ui) {
                        EventResult::Continue => {}
                        EventResult::Quit => self.should_quit = true,
                        EventResult::ToggleComments(post_id) => {
                            self.ui.toggle_comments(post_id);
                        }
                        EventResult::SelectorChange => {
                            // show the dimmed selector before the fetch
                            // suspends the loop
                            self.ui.selector_mut().set_disabled(true);
                            terminal.draw(|f| self.ui.render(f))?;
                            self.handle_selector_change().await;
                        }
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Selector change commit: disable the selector for the whole async
    /// span, load the chosen user's posts, rebuild the feed, re-enable.
    /// The disabled selector is what serializes concurrent changes.
    pub async fn handle_selector_change(&mut self) {
        self.ui.selector_mut().set_disabled(true);

        let user_id = self.ui.selector().resolve_user_id();
        tracing::debug!("Selection changed, loading posts for user {}", user_id);
        let posts = self.directory.user_posts(user_id).await;
        self.refresh_feed(posts).await;

        self.ui.selector_mut().set_disabled(false);
    }

    /// Full view refresh: detach every toggle binding, rebuild the feed
    /// from scratch, then bind one toggle per rendered button.
    pub async fn refresh_feed(&mut self, posts: Vec<Post>) {
        self.event_handler.bindings_mut().unbind_all();
        self.ui.feed_mut().refresh(posts, self.directory.as_ref()).await;
        let post_ids = self.ui.feed().post_ids();
        self.event_handler.bindings_mut().rebind(post_ids);
    }
}
