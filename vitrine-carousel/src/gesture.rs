//! Touch swipe tracking.
//!
//! A gesture lives from touch start to touch end. Movement that is more
//! vertical than horizontal is treated as page scrolling and the gesture is
//! abandoned for the rest of that interaction.

/// Result of feeding one touch-move sample to the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeMove {
    /// Horizontal drag in progress; the track should follow the finger.
    Follow { dx: f32 },
    /// The interaction turned into a vertical scroll.
    Abandoned,
    /// No touch is in progress.
    Idle,
}

/// Decision taken when the finger lifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Dragged left past the threshold.
    Next,
    /// Dragged right past the threshold.
    Prev,
    /// Not far enough; return to the current page.
    SnapBack,
    /// Gesture was reclassified as a scroll; re-snap to the current page.
    Abandoned,
}

#[derive(Debug, Clone, Copy)]
struct Gesture {
    start_x: f32,
    start_y: f32,
    dx: f32,
    swiping: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    active: Option<Gesture>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, x: f32, y: f32) {
        self.active = Some(Gesture {
            start_x: x,
            start_y: y,
            dx: 0.0,
            swiping: true,
        });
    }

    pub fn update(&mut self, x: f32, y: f32) -> SwipeMove {
        let Some(gesture) = self.active.as_mut() else {
            return SwipeMove::Idle;
        };
        if !gesture.swiping {
            return SwipeMove::Abandoned;
        }

        let dx = x - gesture.start_x;
        let dy = y - gesture.start_y;
        if dy.abs() > dx.abs() {
            gesture.swiping = false;
            return SwipeMove::Abandoned;
        }

        gesture.dx = dx;
        SwipeMove::Follow { dx }
    }

    /// End the gesture. `None` when no touch was in progress.
    pub fn finish(&mut self, threshold: f32) -> Option<SwipeOutcome> {
        let gesture = self.active.take()?;
        if !gesture.swiping {
            return Some(SwipeOutcome::Abandoned);
        }

        let outcome = if gesture.dx < -threshold {
            SwipeOutcome::Next
        } else if gesture.dx > threshold {
            SwipeOutcome::Prev
        } else {
            SwipeOutcome::SnapBack
        };
        Some(outcome)
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// True while a horizontal drag is being followed.
    pub fn is_swiping(&self) -> bool {
        self.active.is_some_and(|g| g.swiping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(points: &[(f32, f32)]) -> Option<SwipeOutcome> {
        let mut tracker = SwipeTracker::new();
        let (x0, y0) = points[0];
        tracker.start(x0, y0);
        for &(x, y) in &points[1..] {
            tracker.update(x, y);
        }
        tracker.finish(50.0)
    }

    #[test]
    fn leftward_drag_past_threshold_is_next() {
        assert_eq!(swipe(&[(200.0, 10.0), (140.0, 12.0)]), Some(SwipeOutcome::Next));
    }

    #[test]
    fn rightward_drag_past_threshold_is_prev() {
        assert_eq!(swipe(&[(100.0, 0.0), (151.0, 0.0)]), Some(SwipeOutcome::Prev));
    }

    #[test]
    fn short_drag_snaps_back() {
        assert_eq!(swipe(&[(200.0, 0.0), (170.0, 0.0)]), Some(SwipeOutcome::SnapBack));
        assert_eq!(swipe(&[(200.0, 0.0), (150.0, 0.0)]), Some(SwipeOutcome::SnapBack));
    }

    #[test]
    fn vertical_movement_abandons_for_rest_of_touch() {
        let mut tracker = SwipeTracker::new();
        tracker.start(200.0, 100.0);
        assert_eq!(tracker.update(190.0, 140.0), SwipeMove::Abandoned);
        // Later horizontal movement does not resurrect the swipe
        assert_eq!(tracker.update(40.0, 140.0), SwipeMove::Abandoned);
        assert!(!tracker.is_swiping());
        assert_eq!(tracker.finish(50.0), Some(SwipeOutcome::Abandoned));
    }

    #[test]
    fn follow_reports_signed_delta() {
        let mut tracker = SwipeTracker::new();
        tracker.start(300.0, 0.0);
        assert_eq!(tracker.update(280.0, 5.0), SwipeMove::Follow { dx: -20.0 });
        assert!(tracker.is_swiping());
    }

    #[test]
    fn finish_without_start_is_none_and_state_is_discarded() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.finish(50.0), None);
        tracker.start(0.0, 0.0);
        tracker.finish(50.0);
        assert_eq!(tracker.update(100.0, 0.0), SwipeMove::Idle);
    }
}
