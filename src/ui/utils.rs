use ratatui::layout::Rect;

/// Creates a rectangle of at most `width` x `height` centered in `area`
#[must_use]
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_box() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_box(40, 4, area), Rect::new(20, 10, 40, 4));
    }

    #[test]
    fn test_centered_box_shrinks_to_area() {
        let area = Rect::new(2, 3, 10, 5);
        assert_eq!(centered_box(40, 20, area), area);
    }
}
