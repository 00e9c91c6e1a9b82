/// How the move list follows the current ply, decided once from host capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStrategy {
    /// Animate toward the target offset over a few frames
    Smooth,
    /// Jump straight to the target offset
    Instant,
}

impl ScrollStrategy {
    /// Smooth scrolling needs both the user's preference and a terminal that redraws cheaply
    #[must_use]
    pub fn detect(prefer_smooth: bool) -> Self {
        Self::for_terminal(prefer_smooth, std::env::var("TERM").ok().as_deref())
    }

    /// Same decision as `detect`, for an explicit `TERM` value
    #[must_use]
    pub fn for_terminal(prefer_smooth: bool, term: Option<&str>) -> Self {
        if prefer_smooth && term != Some("dumb") {
            Self::Smooth
        } else {
            Self::Instant
        }
    }
}

/// Smallest offset change that puts rows `top..bottom` inside a viewport
/// of `height` rows starting at `offset`, keeping `padding` rows around
/// the target when there is room. `None` means the rows are already visible.
#[must_use]
pub fn nearest_offset(
    top: usize,
    bottom: usize,
    offset: usize,
    height: usize,
    padding: usize,
) -> Option<usize> {
    let view_bottom = offset.saturating_add(height);
    if top < offset {
        Some(top.saturating_sub(padding))
    } else if bottom > view_bottom {
        Some(
            bottom
                .saturating_add(padding)
                .saturating_sub(height),
        )
    } else {
        None
    }
}

/// Scroll position of the move list pane
#[derive(Debug, Clone)]
pub struct MoveListScroll {
    offset: usize,
    target: Option<usize>,
    strategy: ScrollStrategy,
    padding: usize,
}

impl MoveListScroll {
    #[must_use]
    pub fn new(strategy: ScrollStrategy, padding: usize) -> Self {
        Self {
            offset: 0,
            target: None,
            strategy,
            padding,
        }
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Brings the row for `ply` into view. Ply zero has no row and is left alone.
    ///
    /// A pending animation is replaced by the new target.
    pub fn reveal(&mut self, ply: usize, viewport: usize) {
        let Some(row) = ply.checked_sub(1) else {
            return;
        };
        if viewport == 0 {
            return;
        }
        let padding = self.padding.min(viewport.saturating_sub(1) / 2);
        let Some(target) = nearest_offset(row, row + 1, self.offset, viewport, padding) else {
            self.target = None;
            return;
        };
        match self.strategy {
            ScrollStrategy::Smooth => self.target = Some(target),
            ScrollStrategy::Instant => {
                self.offset = target;
                self.target = None;
            }
        }
    }

    /// Advances a running animation by one frame, easing toward the target
    pub fn tick(&mut self) {
        let Some(target) = self.target else {
            return;
        };
        let distance = self.offset.abs_diff(target);
        let step = distance.div_ceil(2).max(1);
        if distance <= 1 {
            self.offset = target;
            self.target = None;
        } else if self.offset < target {
            self.offset += step;
        } else {
            self.offset -= step;
        }
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.target = None;
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: usize, row_count: usize, viewport: usize) {
        self.target = None;
        self.offset = self
            .offset
            .saturating_add(rows)
            .min(max_offset(row_count, viewport));
    }

    /// Offset to render with, never scrolled past the last row
    #[must_use]
    pub fn visible_offset(&self, row_count: usize, viewport: usize) -> usize {
        self.offset.min(max_offset(row_count, viewport))
    }
}

fn max_offset(row_count: usize, viewport: usize) -> usize {
    row_count.saturating_sub(viewport)
}
