mod help;
mod navigation;
mod scroll;
mod types;
mod viewer;

pub use navigation::{Navigation, Ply};
pub use scroll::{MoveListScroll, ScrollStrategy};
pub use types::*;
pub use viewer::Viewer;

#[cfg(test)]
pub(crate) use viewer::tests as fixtures;

use crate::config::Config;
use crate::record::{Game, RecordError};
use crate::services::clipboard::ClipboardService;
use std::time::Duration;

const STATUS_TOAST_DURATION: Duration = Duration::from_millis(1500);

/// Main application state
pub struct App {
    pub mode: AppMode,
    pub should_quit: bool,
    /// The loaded game, or why there is nothing to show
    pub viewer: Result<Viewer, RecordError>,
    pub board: BoardOptions,
    pub status_toast: Option<StatusToast>,
    pub clipboard_service: ClipboardService,
    /// Set by transitions, consumed once the move list has been scrolled
    scroll_pending: bool,
}

impl App {
    /// Builds the application around a loaded (or failed) game record
    pub fn new(record: Result<Game, RecordError>, config: &Config) -> Self {
        let strategy = ScrollStrategy::detect(config.moves.smooth_scroll);
        let viewer = record
            .inspect_err(|error| tracing::warn!(%error, "game data not available"))
            .map(|game| Viewer::new(game, strategy, config.moves.scroll_padding));

        Self {
            mode: AppMode::Viewer,
            should_quit: false,
            viewer,
            board: BoardOptions::from(config.board),
            status_toast: None,
            clipboard_service: ClipboardService::new(),
            scroll_pending: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn show_status_toast(&mut self, message: impl Into<String>) {
        self.status_toast = Some(StatusToast::new(message));
    }

    pub fn clear_expired_status_toast(&mut self) {
        let should_clear = self
            .status_toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired(STATUS_TOAST_DURATION));
        if should_clear {
            self.status_toast = None;
        }
    }

    #[must_use]
    pub fn status_toast_message(&self) -> Option<&str> {
        self.status_toast.as_ref().map(|toast| toast.message.as_str())
    }

    #[must_use]
    pub fn viewer(&self) -> Option<&Viewer> {
        self.viewer.as_ref().ok()
    }
}
