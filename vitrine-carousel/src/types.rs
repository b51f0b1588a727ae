//! Shared types for the carousel module

use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::constants::{self, breakpoints as bp};

/// Unique key for one carousel instance. Carousels never share state; the
/// id only scopes log output and handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarouselId(Uuid);

impl CarouselId {
    pub fn unique() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for CarouselId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Short form keeps log lines readable
        let s = self.0.simple().to_string();
        write!(f, "{}", &s[..8])
    }
}

/// One step of the responsive sizing function: viewports no wider than
/// `max_width` show `per_view` cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub max_width: f32,
    pub per_view: usize,
}

/// Step function from viewport width to visible card count.
///
/// Steps are checked in order; the first whose `max_width` is at least the
/// viewport width wins. Wider viewports fall through to `wide_per_view`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub steps: Vec<Breakpoint>,
    pub wide_per_view: usize,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            steps: vec![
                Breakpoint {
                    max_width: bp::NARROW_MAX_WIDTH,
                    per_view: bp::NARROW_PER_VIEW,
                },
                Breakpoint {
                    max_width: bp::MEDIUM_MAX_WIDTH,
                    per_view: bp::MEDIUM_PER_VIEW,
                },
            ],
            wide_per_view: bp::WIDE_PER_VIEW,
        }
    }
}

impl Breakpoints {
    pub fn per_view_for(&self, viewport_width: f32) -> usize {
        self.steps
            .iter()
            .find(|step| viewport_width <= step.max_width)
            .map(|step| step.per_view)
            .unwrap_or(self.wide_per_view)
            .max(1)
    }
}

/// How many cards a page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PerView {
    /// Always this many, regardless of viewport.
    Fixed(usize),
    /// Derived from the viewport width on every recalculation.
    Responsive(Breakpoints),
}

impl PerView {
    pub fn resolve(&self, viewport_width: f32) -> usize {
        match self {
            PerView::Fixed(count) => (*count).max(1),
            PerView::Responsive(breakpoints) => {
                breakpoints.per_view_for(viewport_width)
            }
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, PerView::Fixed(_))
    }
}

/// Per-instance carousel configuration.
///
/// Deserializes with defaults for every missing field so a config file only
/// has to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselOptions {
    /// Fixed visible card count. `None` sizes pages from the viewport.
    pub per_view: Option<usize>,
    /// Responsive step function used when `per_view` is `None`.
    pub breakpoints: Breakpoints,
    /// Visual gap between cards in pixels.
    pub card_gap_px: f32,
    /// Period of the automatic page advance.
    pub auto_play_interval_ms: u64,
    /// Minimum horizontal drag that commits a swipe.
    pub swipe_threshold_px: f32,
    /// Quiet period before a resize burst is applied.
    pub resize_debounce_ms: u64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            per_view: None,
            breakpoints: Breakpoints::default(),
            card_gap_px: constants::CARD_GAP_PX,
            auto_play_interval_ms: constants::AUTO_PLAY_INTERVAL_MS,
            swipe_threshold_px: constants::SWIPE_THRESHOLD_PX,
            resize_debounce_ms: constants::RESIZE_DEBOUNCE_MS,
        }
    }
}

impl CarouselOptions {
    /// Options with a fixed number of visible cards.
    pub fn fixed(per_view: usize) -> Self {
        Self {
            per_view: Some(per_view),
            ..Self::default()
        }
    }

    pub fn per_view_mode(&self) -> PerView {
        match self.per_view {
            Some(count) => PerView::Fixed(count),
            None => PerView::Responsive(self.breakpoints.clone()),
        }
    }

    pub fn auto_play_interval(&self) -> Duration {
        Duration::from_millis(self.auto_play_interval_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_breakpoints_follow_layout_steps() {
        let bps = Breakpoints::default();
        assert_eq!(bps.per_view_for(320.0), 1);
        assert_eq!(bps.per_view_for(600.0), 1);
        assert_eq!(bps.per_view_for(601.0), 2);
        assert_eq!(bps.per_view_for(960.0), 2);
        assert_eq!(bps.per_view_for(961.0), 3);
        assert_eq!(bps.per_view_for(2560.0), 3);
    }

    #[test]
    fn fixed_per_view_ignores_viewport_and_never_drops_below_one() {
        assert_eq!(PerView::Fixed(4).resolve(200.0), 4);
        assert_eq!(PerView::Fixed(0).resolve(1200.0), 1);
    }

    #[test]
    fn options_fill_missing_fields_with_defaults() {
        let options: CarouselOptions =
            serde_json::from_str(r#"{"per_view": 2}"#).unwrap();
        assert_eq!(options.per_view_mode(), PerView::Fixed(2));
        assert_eq!(options.auto_play_interval_ms, 5_000);
        assert_eq!(options.swipe_threshold_px, 50.0);
        assert_eq!(options.resize_debounce(), Duration::from_millis(150));
    }
}
