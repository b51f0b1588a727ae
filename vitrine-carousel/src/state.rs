//! CarouselState: the index math of a paged card strip.
//!
//! Pure data; nothing here touches a view or a timer so the navigation
//! rules can be checked without a rendering surface.

/// Index and geometry of one carousel.
///
/// Invariant: `current_index <= max_index` and
/// `max_index == total_slides.saturating_sub(per_view)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    /// Leftmost fully visible card.
    current_index: usize,
    /// Cards visible at once, at least 1.
    per_view: usize,
    /// Cards currently in the track.
    total_slides: usize,
    /// Highest valid `current_index`.
    max_index: usize,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            current_index: 0,
            per_view: 1,
            total_slides: 0,
            max_index: 0,
        }
    }
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute geometry for a new card count and page size, clamping the
    /// current index down if it is no longer reachable.
    pub fn recalc(&mut self, total_slides: usize, per_view: usize) {
        self.total_slides = total_slides;
        self.per_view = per_view.max(1);
        self.max_index = total_slides.saturating_sub(self.per_view);
        if self.current_index > self.max_index {
            self.current_index = self.max_index;
        }
    }

    /// Move to `index`, saturating into `[0, max_index]`. Returns whether the
    /// index changed.
    pub fn go_to(&mut self, index: isize) -> bool {
        let clamped = usize::try_from(index).unwrap_or(0).min(self.max_index);
        let changed = clamped != self.current_index;
        self.current_index = clamped;
        changed
    }

    /// One page forward. Stops at `max_index`.
    pub fn next(&mut self) -> bool {
        self.go_to(self.signed_index().saturating_add(1))
    }

    /// One page back. Stops at 0.
    pub fn prev(&mut self) -> bool {
        self.go_to(self.signed_index().saturating_sub(1))
    }

    /// Timer-driven advance: one page forward, wrapping to the first page
    /// from `max_index`.
    pub fn auto_advance(&mut self) -> bool {
        if self.current_index >= self.max_index {
            self.go_to(0)
        } else {
            self.next()
        }
    }

    /// Horizontal translation of the track in pixels.
    pub fn offset(&self, card_width: f32, gap: f32) -> f32 {
        self.current_index as f32 * (card_width.max(0.0) + gap.max(0.0))
    }

    pub fn prev_disabled(&self) -> bool {
        self.current_index == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.current_index >= self.max_index
    }

    /// Number of reachable pages, one dot each.
    pub fn page_count(&self) -> usize {
        self.max_index + 1
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    fn signed_index(&self) -> isize {
        isize::try_from(self.current_index).unwrap_or(isize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(total: usize, per_view: usize) -> CarouselState {
        let mut s = CarouselState::new();
        s.recalc(total, per_view);
        s
    }

    #[test]
    fn max_index_saturates_when_fewer_cards_than_page() {
        for (total, per_view, expected) in
            [(5, 3, 2), (3, 3, 0), (2, 3, 0), (0, 1, 0), (7, 1, 6)]
        {
            assert_eq!(
                state(total, per_view).max_index(),
                expected,
                "total={total} per_view={per_view}"
            );
        }
    }

    #[test]
    fn go_to_clamps_both_ends() {
        let mut s = state(5, 3);
        s.go_to(5);
        assert_eq!(s.current_index(), 2);
        s.go_to(-1);
        assert_eq!(s.current_index(), 0);
        s.go_to(isize::MAX);
        assert_eq!(s.current_index(), 2);
        s.go_to(isize::MIN);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn manual_next_stops_at_last_page() {
        let mut s = state(5, 3);
        s.go_to(2);
        assert!(!s.next());
        assert_eq!(s.current_index(), 2);
        assert!(!state(0, 3).next());
    }

    #[test]
    fn auto_advance_wraps_to_first_page() {
        let mut s = state(5, 3);
        assert!(s.auto_advance());
        assert!(s.auto_advance());
        assert_eq!(s.current_index(), 2);
        assert!(s.auto_advance());
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn shrinking_content_pulls_index_back() {
        let mut s = state(8, 2);
        s.go_to(6);
        s.recalc(4, 2);
        assert_eq!(s.current_index(), 2);
        assert!(s.next_disabled());
    }

    #[test]
    fn narrowing_viewport_keeps_valid_index() {
        let mut s = state(5, 3);
        s.go_to(2);
        s.recalc(5, 1);
        assert_eq!(s.max_index(), 4);
        assert_eq!(s.current_index(), 2);
        assert!(!s.prev_disabled());
        assert!(!s.next_disabled());
        assert_eq!(s.page_count(), 5);
    }

    #[test]
    fn offset_is_index_times_stride() {
        let mut s = state(6, 2);
        s.go_to(3);
        assert_eq!(s.offset(300.0, 24.0), 972.0);
        assert_eq!(state(0, 1).offset(300.0, 24.0), 0.0);
    }

    #[test]
    fn empty_track_disables_both_arrows() {
        let s = state(0, 3);
        assert!(s.prev_disabled());
        assert!(s.next_disabled());
        assert_eq!(s.page_count(), 1);
    }
}
