use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{Control, Viewer};
use crate::ui::layout::inner;

const GAP: u16 = 1;

/// One piece of the control bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Button(Control),
    Progress,
}

fn segment_text(segment: Segment, progress: &str) -> String {
    match segment {
        Segment::Button(control) => format!(" {} ", control.label()),
        Segment::Progress => format!(" {} ", progress),
    }
}

/// Lays the bar out centered in `area`: Start, Back, progress, Next, End
#[must_use]
pub fn segments(area: Rect, progress: &str) -> Vec<(Segment, Rect)> {
    let order = [
        Segment::Button(Control::Start),
        Segment::Button(Control::Back),
        Segment::Progress,
        Segment::Button(Control::Next),
        Segment::Button(Control::End),
    ];
    let widths: Vec<u16> = order
        .iter()
        .map(|segment| {
            u16::try_from(segment_text(*segment, progress).width()).unwrap_or(u16::MAX)
        })
        .collect();
    let total = widths
        .iter()
        .fold(0u16, |sum, width| sum.saturating_add(*width))
        .saturating_add(GAP * 4);

    let mut x = area.x + area.width.saturating_sub(total) / 2;
    let right = area.x.saturating_add(area.width);
    let mut placed = Vec::with_capacity(order.len());
    for (segment, width) in order.into_iter().zip(widths) {
        let width = width.min(right.saturating_sub(x));
        placed.push((segment, Rect::new(x, area.y, width, area.height.min(1))));
        x = x.saturating_add(width).saturating_add(GAP).min(right);
    }
    placed
}

pub fn render_controls(f: &mut Frame, area: Rect, viewer: &Viewer) {
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
        area,
    );

    let progress = viewer.progress();
    for (segment, rect) in segments(inner(area), &progress) {
        let text = segment_text(segment, &progress);
        let style = match segment {
            Segment::Progress => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            Segment::Button(control) if viewer.is_enabled(control) => {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            }
            Segment::Button(_) => Style::default().fg(Color::DarkGray),
        };
        f.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), rect);
    }
}
