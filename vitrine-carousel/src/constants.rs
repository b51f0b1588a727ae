//! Default tuning for carousels. Every value can be overridden through
//! [`crate::types::CarouselOptions`].

/// Delay between automatic page advances.
pub const AUTO_PLAY_INTERVAL_MS: u64 = 5_000;

/// Horizontal drag distance a swipe must exceed to change page.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Spacing between cards; must match the gap the stylesheet renders.
pub const CARD_GAP_PX: f32 = 24.0;

/// Quiet period after the last resize event before geometry is recomputed.
pub const RESIZE_DEBOUNCE_MS: u64 = 150;

pub mod breakpoints {
    /// Viewports up to this width show a single card.
    pub const NARROW_MAX_WIDTH: f32 = 600.0;
    pub const NARROW_PER_VIEW: usize = 1;

    /// Viewports up to this width show two cards.
    pub const MEDIUM_MAX_WIDTH: f32 = 960.0;
    pub const MEDIUM_PER_VIEW: usize = 2;

    /// Anything wider.
    pub const WIDE_PER_VIEW: usize = 3;
}
