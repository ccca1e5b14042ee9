#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub offset: f64,
    pub last_offset: f64,
    pub direction: ScrollDirection,
}

impl ScrollState {
    /// Records a new offset and derives the direction from the previous one.
    pub fn advance(&mut self, offset: f64) -> ScrollDirection {
        self.last_offset = self.offset;
        self.offset = offset;
        self.direction = if offset > self.last_offset {
            ScrollDirection::Down
        } else if offset < self.last_offset {
            ScrollDirection::Up
        } else {
            ScrollDirection::None
        };
        self.direction
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavVisibility {
    #[default]
    Visible,
    Hidden,
}

impl NavVisibility {
    pub fn is_visible(self) -> bool {
        self == NavVisibility::Visible
    }

    /// Hidden only while moving down past the threshold; anything else shows
    /// the nav again.
    pub fn next(self, offset: f64, previous: f64, hide_threshold: f64) -> Self {
        let hide = offset > previous && offset > hide_threshold;
        match (self, hide) {
            (NavVisibility::Visible, true) => NavVisibility::Hidden,
            (NavVisibility::Hidden, false) => NavVisibility::Visible,
            (state, _) => state,
        }
    }
}

/// Scroll bookkeeping plus the visibility machine of the floating nav.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingNavState {
    scroll: ScrollState,
    visibility: NavVisibility,
    hide_threshold: f64,
}

impl FloatingNavState {
    pub fn new(hide_threshold: f64) -> Self {
        Self {
            scroll: ScrollState::default(),
            visibility: NavVisibility::Visible,
            hide_threshold,
        }
    }

    pub fn on_scroll(&mut self, offset: f64) -> NavVisibility {
        self.scroll.advance(offset);
        self.visibility = self
            .visibility
            .next(self.scroll.offset, self.scroll.last_offset, self.hide_threshold);
        self.visibility
    }

    pub fn visibility(&self) -> NavVisibility {
        self.visibility
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(offsets: &[f64]) -> Vec<NavVisibility> {
        let mut nav = FloatingNavState::new(100.0);
        offsets.iter().map(|&o| nav.on_scroll(o)).collect()
    }

    #[test]
    fn hides_past_threshold_and_returns_on_scroll_up() {
        use NavVisibility::*;
        assert_eq!(run(&[0.0, 50.0, 150.0, 120.0]), vec![Visible, Visible, Hidden, Visible]);
    }

    #[test]
    fn starts_visible() {
        let nav = FloatingNavState::new(100.0);
        assert!(nav.visibility().is_visible());
        assert_eq!(nav.scroll().direction, ScrollDirection::None);
    }

    #[test]
    fn stationary_events_never_hide() {
        let mut nav = FloatingNavState::new(100.0);
        nav.on_scroll(500.0);
        nav.on_scroll(300.0);
        for _ in 0..5 {
            assert_eq!(nav.on_scroll(300.0), NavVisibility::Visible);
        }
    }

    #[test]
    fn stationary_event_shows_hidden_nav() {
        let mut nav = FloatingNavState::new(100.0);
        assert_eq!(nav.on_scroll(400.0), NavVisibility::Hidden);
        assert_eq!(nav.on_scroll(400.0), NavVisibility::Visible);
    }

    #[test]
    fn threshold_is_exclusive() {
        use NavVisibility::*;
        assert_eq!(run(&[100.0, 101.0]), vec![Visible, Hidden]);
    }

    #[test]
    fn jumping_back_above_threshold_shows_nav() {
        let mut nav = FloatingNavState::new(100.0);
        nav.on_scroll(2000.0);
        assert_eq!(nav.visibility(), NavVisibility::Hidden);
        assert_eq!(nav.on_scroll(40.0), NavVisibility::Visible);
        assert_eq!(nav.scroll().direction, ScrollDirection::Up);
    }

    #[test]
    fn direction_follows_offsets() {
        let mut state = ScrollState::default();
        assert_eq!(state.advance(10.0), ScrollDirection::Down);
        assert_eq!(state.advance(10.0), ScrollDirection::None);
        assert_eq!(state.advance(3.0), ScrollDirection::Up);
        assert_eq!(state.last_offset, 10.0);
    }
}
