//! Rendering boundary of the carousel.
//!
//! The controller only reads element counts and widths and writes an offset
//! plus the `active` / `disabled` toggles. How those map to markup, CSS
//! transforms or widgets is up to the implementor.

/// The surface a [`crate::Carousel`] manipulates.
#[cfg_attr(test, mockall::automock)]
pub trait CarouselView {
    /// Number of card elements currently in the track.
    fn card_count(&self) -> usize;

    /// Rendered width of the first card, `None` for an empty track.
    fn card_width(&self) -> Option<f32>;

    /// Width of the viewport the responsive page size is derived from.
    fn viewport_width(&self) -> f32;

    /// Translate the track left by `offset_px`. `animate == false` must apply
    /// the offset without a transition.
    fn set_track_offset(&mut self, offset_px: f32, animate: bool);

    fn set_prev_disabled(&mut self, disabled: bool);

    fn set_next_disabled(&mut self, disabled: bool);

    /// Replace every dot with `count` new ones, `active` marked. Each dot
    /// must dispatch a navigation to its own page when activated.
    fn rebuild_dots(&mut self, count: usize, active: usize);

    /// Move the active marker without touching the dot elements.
    fn set_active_dot(&mut self, index: usize);
}

/// Which optional controls exist next to the track. Calls for missing ones
/// are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub dots: bool,
    pub prev: bool,
    pub next: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            dots: true,
            prev: true,
            next: true,
        }
    }
}

impl Controls {
    /// A bare track with no dots or arrows.
    pub const fn track_only() -> Self {
        Self {
            dots: false,
            prev: false,
            next: false,
        }
    }
}
