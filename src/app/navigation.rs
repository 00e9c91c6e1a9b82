/// Number of half-moves played, bounded by the length of the game it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ply {
    value: usize,
    max: usize,
}

impl Ply {
    /// Returns `None` when `value` lies outside `0..=max`
    #[must_use]
    pub fn new(value: usize, max: usize) -> Option<Self> {
        (value <= max).then_some(Self { value, max })
    }

    #[must_use]
    pub fn start(max: usize) -> Self {
        Self { value: 0, max }
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.value
    }

    #[must_use]
    pub fn max(self) -> usize {
        self.max
    }

    /// Index of the move that produced this position, `None` at the start
    #[must_use]
    pub fn last_played(self) -> Option<usize> {
        self.value.checked_sub(1)
    }
}

/// Linear navigation over the plies of a recorded game.
///
/// Every transition returns whether the ply changed, so callers know when
/// the move list has to be scrolled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    ply: Ply,
}

impl Navigation {
    #[must_use]
    pub fn new(move_count: usize) -> Self {
        Self {
            ply: Ply::start(move_count),
        }
    }

    #[must_use]
    pub fn ply(&self) -> Ply {
        self.ply
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.ply.value()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ply.max()
    }

    #[must_use]
    pub fn at_start(&self) -> bool {
        self.ply.value() == 0
    }

    #[must_use]
    pub fn at_end(&self) -> bool {
        self.ply.value() == self.ply.max()
    }

    pub fn advance(&mut self) -> bool {
        self.jump_to(self.index().saturating_add(1))
    }

    pub fn retreat(&mut self) -> bool {
        match self.index().checked_sub(1) {
            Some(previous) => self.jump_to(previous),
            None => false,
        }
    }

    /// Moves to ply `target`; requests past the end are ignored
    pub fn jump_to(&mut self, target: usize) -> bool {
        match Ply::new(target, self.len()) {
            Some(ply) if ply != self.ply => {
                self.ply = ply;
                true
            }
            Some(_) | None => false,
        }
    }

    pub fn jump_to_start(&mut self) -> bool {
        self.jump_to(0)
    }

    pub fn jump_to_end(&mut self) -> bool {
        self.jump_to(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ply_bounds() {
        assert!(Ply::new(0, 0).is_some());
        assert!(Ply::new(3, 3).is_some());
        assert!(Ply::new(4, 3).is_none());
        assert_eq!(Ply::start(5).last_played(), None);
        assert_eq!(Ply::new(2, 5).unwrap().last_played(), Some(1));
    }

    #[test]
    fn test_jump_to_every_valid_ply() {
        let mut navigation = Navigation::new(6);
        for k in 0..=6 {
            navigation.jump_to(k);
            assert_eq!(navigation.index(), k);
        }
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut navigation = Navigation::new(4);
        navigation.jump_to(2);
        for k in [5, 6, 100, usize::MAX] {
            assert!(!navigation.jump_to(k));
            assert_eq!(navigation.index(), 2);
        }
    }

    #[test]
    fn test_advance_to_end_then_noop() {
        let mut navigation = Navigation::new(5);
        for _ in 0..5 {
            assert!(navigation.advance());
        }
        assert_eq!(navigation.index(), 5);
        assert!(navigation.at_end());
        assert!(!navigation.advance());
        assert_eq!(navigation.index(), 5);
    }

    #[test]
    fn test_retreat_to_start_then_noop() {
        let mut navigation = Navigation::new(5);
        navigation.jump_to_end();
        for _ in 0..5 {
            assert!(navigation.retreat());
        }
        assert_eq!(navigation.index(), 0);
        assert!(navigation.at_start());
        assert!(!navigation.retreat());
        assert_eq!(navigation.index(), 0);
    }

    #[test]
    fn test_jump_to_current_reports_no_change() {
        let mut navigation = Navigation::new(3);
        assert!(!navigation.jump_to(0));
        assert!(navigation.jump_to(3));
        assert!(!navigation.jump_to_end());
    }

    #[test]
    fn test_empty_game_is_at_both_boundaries() {
        let mut navigation = Navigation::new(0);
        assert!(navigation.at_start());
        assert!(navigation.at_end());
        assert!(!navigation.advance());
        assert!(!navigation.retreat());
        assert!(!navigation.jump_to(1));
    }
}
