use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Viewer};
use crate::ui::components::{self, FooterConfig};
use crate::ui::layout::ViewerLayout;
use crate::ui::utils::centered_box;
use crate::ui::{board, controls, moves};

pub const UNAVAILABLE_MESSAGE: &str = "Error: Game data not available";

pub fn render_viewer(f: &mut Frame, app: &App) {
    let Some(viewer) = app.viewer() else {
        render_unavailable(f);
        return;
    };

    let layout = ViewerLayout::new(f.area());
    render_header(f, layout.header, viewer);
    board::render_board(f, layout.board, viewer.position(), app.board);
    moves::render_move_list(f, layout.moves, viewer);
    controls::render_controls(f, layout.controls, viewer);
    render_viewer_footer(f, layout.footer, app);
}

/// The only thing drawn when there is no usable game record
fn render_unavailable(f: &mut Frame) {
    let area = centered_box(44, 5, f.area());
    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                UNAVAILABLE_MESSAGE,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press q to quit",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        ),
        area,
    );
}

fn render_header(f: &mut Frame, area: Rect, viewer: &Viewer) {
    let game = &viewer.game;
    let mut result_line = vec![Span::styled(
        format!("Result: {}", game.result),
        Style::default().fg(Color::Cyan),
    )];
    if !game.eco_code.is_empty() {
        result_line.push(Span::styled(
            format!("  ECO {}", game.eco_code),
            Style::default().fg(Color::DarkGray),
        ));
    }

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                game.title(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(result_line),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn render_viewer_footer(f: &mut Frame, area: Rect, app: &App) {
    components::render_navigation_footer(
        f,
        area,
        &FooterConfig {
            mode: "REPLAY",
            keybindings: &[
                ("←→", "step"),
                ("Home/End", "jump"),
                ("f", "flip"),
                ("y", "copy FEN"),
                ("?", "help"),
                ("q", "quit"),
            ],
            status: &[("NOTATION", app.board.show_notation)],
            toast: app.status_toast_message(),
        },
    );
}
