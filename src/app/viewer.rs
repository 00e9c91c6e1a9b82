use crate::app::{App, Control, MoveListScroll, Navigation, ScrollStrategy};
use crate::position::position_at;
use crate::record::Game;

/// A loaded game together with where the user currently is in it
#[derive(Debug, Clone)]
pub struct Viewer {
    pub game: Game,
    pub navigation: Navigation,
    pub scroll: MoveListScroll,
}

impl Viewer {
    #[must_use]
    pub fn new(game: Game, strategy: ScrollStrategy, padding: usize) -> Self {
        let navigation = Navigation::new(game.moves.len());
        Self {
            game,
            navigation,
            scroll: MoveListScroll::new(strategy, padding),
        }
    }

    /// FEN of the position currently on the board
    #[must_use]
    pub fn position(&self) -> &str {
        position_at(&self.game.moves, self.navigation.ply())
    }

    /// Row of the move list that matches the current ply
    #[must_use]
    pub fn highlighted_row(&self) -> Option<usize> {
        self.navigation.ply().last_played()
    }

    #[must_use]
    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Start | Control::Back => !self.navigation.at_start(),
            Control::Next | Control::End => !self.navigation.at_end(),
        }
    }

    /// The `Move: i/N` readout between the buttons
    #[must_use]
    pub fn progress(&self) -> String {
        format!(
            "Move: {}/{}",
            self.navigation.index(),
            self.navigation.len()
        )
    }
}

impl App {
    fn navigate(&mut self, transition: impl FnOnce(&mut Navigation) -> bool) {
        if let Ok(viewer) = &mut self.viewer
            && transition(&mut viewer.navigation)
        {
            self.scroll_pending = true;
        }
    }

    pub fn advance(&mut self) {
        self.navigate(Navigation::advance);
    }

    pub fn retreat(&mut self) {
        self.navigate(Navigation::retreat);
    }

    pub fn jump_to(&mut self, ply: usize) {
        self.navigate(|navigation| navigation.jump_to(ply));
    }

    pub fn jump_to_start(&mut self) {
        self.navigate(Navigation::jump_to_start);
    }

    pub fn jump_to_end(&mut self) {
        self.navigate(Navigation::jump_to_end);
    }

    /// Runs a control bar action; disabled buttons do nothing
    pub fn activate(&mut self, control: Control) {
        let enabled = self
            .viewer()
            .is_some_and(|viewer| viewer.is_enabled(control));
        if !enabled {
            return;
        }
        match control {
            Control::Start => self.jump_to_start(),
            Control::Back => self.retreat(),
            Control::Next => self.advance(),
            Control::End => self.jump_to_end(),
        }
    }

    /// A click on move list row `row` shows the position after that move
    pub fn select_row(&mut self, row: usize) {
        self.jump_to(row.saturating_add(1));
    }

    /// Brings the current move into view after a transition.
    ///
    /// `viewport` is the number of move rows the list pane can show in the
    /// current terminal layout.
    pub fn sync_move_list_scroll(&mut self, viewport: usize) {
        if !std::mem::take(&mut self.scroll_pending) {
            return;
        }
        if let Ok(viewer) = &mut self.viewer {
            let ply = viewer.navigation.index();
            viewer.scroll.reveal(ply, viewport);
            tracing::trace!(ply, offset = viewer.scroll.offset(), "move list synced");
        }
    }

    pub fn tick_scroll_animation(&mut self) {
        if let Ok(viewer) = &mut self.viewer {
            viewer.scroll.tick();
        }
    }

    #[must_use]
    pub fn is_scroll_animating(&self) -> bool {
        self.viewer()
            .is_some_and(|viewer| viewer.scroll.is_animating())
    }

    pub fn scroll_move_list_up(&mut self, rows: usize) {
        if let Ok(viewer) = &mut self.viewer {
            viewer.scroll.scroll_up(rows);
        }
    }

    pub fn scroll_move_list_down(&mut self, rows: usize, viewport: usize) {
        if let Ok(viewer) = &mut self.viewer {
            let row_count = viewer.game.moves.len();
            viewer.scroll.scroll_down(rows, row_count, viewport);
        }
    }

    pub fn toggle_board_flip(&mut self) {
        self.board.flipped = !self.board.flipped;
        self.show_status_toast(if self.board.flipped {
            "BLACK AT BOTTOM"
        } else {
            "WHITE AT BOTTOM"
        });
    }

    pub fn toggle_notation(&mut self) {
        self.board.show_notation = !self.board.show_notation;
    }

    pub fn copy_current_fen(&mut self) {
        let Some(fen) = self.viewer().map(|viewer| viewer.position().to_string()) else {
            return;
        };
        match self.clipboard_service.copy_text(&fen) {
            Ok(()) => self.show_status_toast("COPIED"),
            Err(error) => {
                tracing::warn!(%error, "could not copy position to clipboard");
                self.show_status_toast("COPY FAILED");
            }
        }
    }
}
