//! Line-oriented terminal front end
//!
//! Parses commands, forwards them to a [`SearchSession`] and renders the
//! resulting snapshot. Kept in the library so the binary stays a thin
//! wiring layer.

mod command;
mod render;

pub use command::{Command, HELP_TEXT};
pub use render::{render_galleries, render_snapshot};

use crate::gallery_search::{GalleryDirectory, SearchProvider, SearchQuery};
use crate::session::{SearchSession, SessionError, is_valid_gallery_id};

/// What the driver loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print this text and keep reading
    Print(String),
    Quit,
}

/// Driver state: the session plus the gallery selected for the next search
pub struct Driver<P, D> {
    session: SearchSession<P>,
    directory: D,
    gallery: String,
}

impl<P: SearchProvider, D: GalleryDirectory> Driver<P, D> {
    #[must_use]
    pub fn new(session: SearchSession<P>, directory: D, gallery: impl Into<String>) -> Self {
        Self {
            session,
            directory,
            gallery: gallery.into(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &SearchSession<P> {
        &self.session
    }

    #[must_use]
    pub fn gallery(&self) -> &str {
        &self.gallery
    }

    /// Execute one command
    ///
    /// Session errors are rendered, not returned: the driver keeps running.
    pub async fn execute(&mut self, command: Command) -> Step {
        match command {
            Command::Quit => Step::Quit,
            Command::Help => Step::Print(format!("{HELP_TEXT}\n")),
            Command::Gallery(id) => {
                if is_valid_gallery_id(&id) {
                    self.gallery = id;
                    Step::Print(format!("gallery: {}\n", self.gallery))
                } else {
                    Step::Print(format!("'{id}' is not a valid gallery id\n"))
                }
            }
            Command::Presets => Step::Print(render_galleries(&self.directory.presets())),
            Command::Galleries(keyword) => match self.directory.search_galleries(&keyword).await {
                Ok(galleries) => Step::Print(render_galleries(&galleries)),
                Err(e) => Step::Print(format!("gallery lookup failed: {e}\n")),
            },
            Command::Search(keyword) => {
                let query = SearchQuery::new(self.gallery.clone(), keyword);
                let result = self.session.start_search(query).await;
                self.after_fetch(result.map(|_| ()))
            }
            Command::More => {
                let result = self.session.continue_search().await;
                self.after_fetch(result.map(|_| ()))
            }
            Command::Page(n) => {
                self.session.set_window_index(n);
                self.redraw()
            }
            Command::Next => {
                self.session.next_window();
                self.redraw()
            }
            Command::Prev => {
                self.session.previous_window();
                self.redraw()
            }
            Command::Show => self.redraw(),
        }
    }

    fn after_fetch(&self, result: Result<(), SessionError>) -> Step {
        match result {
            // Transport failures are already recorded in the snapshot's last_error.
            Ok(()) | Err(SessionError::Transport(_)) => self.redraw(),
            Err(e) => Step::Print(format!("{}\n", e.user_message())),
        }
    }

    fn redraw(&self) -> Step {
        Step::Print(render_snapshot(&self.session.snapshot()))
    }
}
