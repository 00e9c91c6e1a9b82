use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::components::{self, FooterConfig};

const SHORTCUTS: &[(&str, &str)] = &[
    ("→ ↓ l j", "Next move"),
    ("← ↑ h k", "Previous move"),
    ("Home g", "Starting position"),
    ("End G", "Final position"),
    ("Click", "Jump to a move or press a button"),
    ("Wheel", "Scroll the move list"),
    ("PgUp PgDn", "Scroll the move list a page"),
    ("f", "Flip the board"),
    ("n", "Toggle coordinates"),
    ("y", "Copy the current FEN"),
    ("q Ctrl+C", "Quit"),
];

pub fn render_help_view(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, body, footer] = &chunks[..] {
        render_help_header(f, *header);
        render_help_body(f, *body);
        components::render_navigation_footer(
            f,
            *footer,
            &FooterConfig {
                mode: "HELP",
                keybindings: &[("Esc", "back")],
                status: &[],
                toast: None,
            },
        );
    }
}

fn render_help_header(f: &mut Frame, area: Rect) {
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "Replay",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ", Style::default().fg(Color::DarkGray)),
            Span::styled("Help", Style::default().fg(Color::Cyan)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Left),
        area,
    );
}

fn render_help_body(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Navigation", Style::default().fg(Color::Cyan))),
        Line::from(""),
    ];
    lines.extend(SHORTCUTS.iter().map(|(keys, action)| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", keys), Style::default().fg(Color::Yellow)),
            Span::styled(*action, Style::default().fg(Color::White)),
        ])
    }));

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Shortcuts ")
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}
