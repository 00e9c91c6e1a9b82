use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::Viewer;
use crate::record::{Move, Side};

const HIGHLIGHT_BACKGROUND: Color = Color::Rgb(230, 247, 255);
const ACCENT: Color = Color::Rgb(24, 144, 255);

pub fn render_move_list(f: &mut Frame, area: Rect, viewer: &Viewer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Moves ")
        .border_style(Style::default().fg(Color::DarkGray));

    let moves = &viewer.game.moves;
    if moves.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "  No moves recorded",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block),
            area,
        );
        return;
    }

    let viewport = usize::from(area.height.saturating_sub(2));
    let offset = viewer.scroll.visible_offset(moves.len(), viewport);
    let highlighted = viewer.highlighted_row();
    let lines: Vec<Line> = moves
        .iter()
        .enumerate()
        .skip(offset)
        .take(viewport)
        .map(|(row, mv)| move_line(mv, highlighted == Some(row)))
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// One row of the move list; the current move gets an accent bar and a tinted background
#[must_use]
pub fn move_line(mv: &Move, is_current: bool) -> Line<'static> {
    let prefix_style = if mv.color == Side::White {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let accent = if is_current {
        Span::styled("▌", Style::default().fg(ACCENT))
    } else {
        Span::raw(" ")
    };

    let line = Line::from(vec![
        accent,
        Span::raw(" "),
        Span::styled(mv.prefix(), prefix_style),
        Span::raw(" "),
        Span::raw(mv.notation()),
    ]);

    if is_current {
        line.style(Style::default().fg(Color::Black).bg(HIGHLIGHT_BACKGROUND))
    } else {
        line
    }
}
