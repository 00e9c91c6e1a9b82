use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::app::Control;
use crate::ui::controls::{self, Segment};

/// Columns taken by the board pane: 8 squares of 3 cells, rank labels, borders
pub const BOARD_PANE_WIDTH: u16 = 30;

/// Screen regions of the viewer, shared by rendering and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerLayout {
    pub header: Rect,
    pub board: Rect,
    pub moves: Rect,
    pub controls: Rect,
    pub footer: Rect,
}

impl ViewerLayout {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(0),    // Board and moves
                Constraint::Length(3), // Controls
                Constraint::Length(3), // Footer
            ])
            .split(area);
        let (header, body, controls, footer) = match rows[..] {
            [header, body, controls, footer] => (header, body, controls, footer),
            _ => (area, area, area, area),
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_PANE_WIDTH), Constraint::Min(0)])
            .split(body);
        let (board, moves) = match columns[..] {
            [board, moves] => (board, moves),
            _ => (body, body),
        };

        Self {
            header,
            board,
            moves,
            controls,
            footer,
        }
    }

    /// Area inside the move list border where rows are drawn
    #[must_use]
    pub fn move_rows(&self) -> Rect {
        inner(self.moves)
    }

    /// Number of move rows visible at once
    #[must_use]
    pub fn viewport(&self) -> usize {
        usize::from(self.move_rows().height)
    }

    #[must_use]
    pub fn is_in_moves(&self, column: u16, row: u16) -> bool {
        self.moves.contains(Position::new(column, row))
    }

    /// Move list row under the pointer, given the current scroll offset
    #[must_use]
    pub fn row_at(&self, column: u16, row: u16, offset: usize) -> Option<usize> {
        let rows = self.move_rows();
        if !rows.contains(Position::new(column, row)) {
            return None;
        }
        Some(offset + usize::from(row - rows.y))
    }

    /// Control bar button under the pointer
    #[must_use]
    pub fn control_at(&self, column: u16, row: u16, progress: &str) -> Option<Control> {
        let point = Position::new(column, row);
        controls::segments(inner(self.controls), progress)
            .into_iter()
            .find(|(_, area)| area.contains(point))
            .and_then(|(segment, _)| match segment {
                Segment::Button(control) => Some(control),
                Segment::Progress => None,
            })
    }
}

/// Rect without its one-cell border
#[must_use]
pub fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ViewerLayout {
        ViewerLayout::new(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_regions_stack_vertically() {
        let layout = layout();
        assert_eq!(layout.header, Rect::new(0, 0, 80, 4));
        assert_eq!(layout.footer, Rect::new(0, 21, 80, 3));
        assert_eq!(layout.controls, Rect::new(0, 18, 80, 3));
        assert_eq!(layout.board.width, BOARD_PANE_WIDTH);
        assert_eq!(layout.moves.x, BOARD_PANE_WIDTH);
        assert_eq!(layout.viewport(), 12);
    }

    #[test]
    fn test_row_at_accounts_for_offset() {
        let layout = layout();
        let rows = layout.move_rows();
        assert_eq!(layout.row_at(rows.x, rows.y, 0), Some(0));
        assert_eq!(layout.row_at(rows.x + 3, rows.y + 2, 5), Some(7));
        // Border of the pane is not a row
        assert_eq!(layout.row_at(layout.moves.x, rows.y, 0), None);
        assert_eq!(layout.row_at(0, rows.y, 0), None);
    }

    #[test]
    fn test_control_at_finds_buttons() {
        let layout = layout();
        let progress = "Move: 0/7";
        let bar = inner(layout.controls);
        let found: Vec<Control> = (bar.x..bar.x + bar.width)
            .filter_map(|column| layout.control_at(column, bar.y, progress))
            .fold(Vec::new(), |mut seen, control| {
                if seen.last() != Some(&control) {
                    seen.push(control);
                }
                seen
            });
        assert_eq!(
            found,
            vec![Control::Start, Control::Back, Control::Next, Control::End]
        );
        assert_eq!(layout.control_at(bar.x, layout.header.y, progress), None);
    }
}
