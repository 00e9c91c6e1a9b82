use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::layout::inner;

const SEPARATOR: &str = "  ";

/// What the footer shows besides the mode badge
pub struct FooterConfig<'a> {
    pub mode: &'a str,
    pub keybindings: &'a [(&'a str, &'a str)],
    pub status: &'a [(&'a str, bool)],
    pub toast: Option<&'a str>,
}

/// Renders a footer with mode indicator, keybindings, status flags and an optional toast
pub fn render_navigation_footer(f: &mut Frame, area: Rect, config: &FooterConfig) {
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
        area,
    );

    let content = inner(area);
    let toast_width = config
        .toast
        .map_or(0, |message| message.chars().count() as u16 + 2);
    let left = Rect {
        width: content.width.saturating_sub(toast_width.saturating_add(1)),
        ..content
    };

    f.render_widget(Paragraph::new(Line::from(footer_spans(config))), left);

    if let Some(message) = config.toast {
        let toast_area = Rect {
            x: content.x + content.width.saturating_sub(toast_width),
            width: toast_width.min(content.width),
            ..content
        };
        render_status_toast(f, toast_area, message);
    }
}

fn footer_spans(config: &FooterConfig) -> Vec<Span<'static>> {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", config.mode),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    for &(key, desc) in config.keybindings {
        spans.push(Span::raw(SEPARATOR));
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    for &(label, active) in config.status {
        spans.push(Span::raw(SEPARATOR));
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
    }

    spans
}

pub fn render_status_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {} ", message),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Right);

    frame.render_widget(toast, area);
}
