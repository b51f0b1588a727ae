//! Carousel controller: applies [`CarouselState`] to a [`CarouselView`].
//!
//! All inputs end up in [`Carousel::go_to`] (manual navigation) or
//! [`Carousel::auto_tick`] (timer). The controller holds no card data; the
//! caller fills the track and calls [`Carousel::refresh`].

use tracing::{debug, trace};

use crate::autoplay::AutoPlay;
use crate::dots::{DotStrip, DotSync};
use crate::gesture::{SwipeMove, SwipeOutcome, SwipeTracker};
use crate::messages::CarouselMessage;
use crate::state::CarouselState;
use crate::types::{CarouselId, CarouselOptions, PerView};
use crate::view::{CarouselView, Controls};

/// Point-in-time view of a carousel, for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSnapshot {
    pub current_index: usize,
    pub max_index: usize,
    pub per_view: usize,
    pub total_slides: usize,
    pub page_count: usize,
    pub auto_playing: bool,
    pub hovered: bool,
    pub swiping: bool,
}

#[derive(Debug)]
pub struct Carousel<V> {
    id: CarouselId,
    view: V,
    controls: Controls,
    options: CarouselOptions,
    per_view: PerView,
    state: CarouselState,
    dots: DotStrip,
    swipe: SwipeTracker,
    auto: AutoPlay,
}

impl<V: CarouselView> Carousel<V> {
    /// Build a controller around `track`. Returns `None` when there is no
    /// track, leaving callers nothing to drive.
    pub fn init(
        track: Option<V>,
        controls: Controls,
        options: CarouselOptions,
    ) -> Option<Self> {
        let Some(view) = track else {
            debug!("No carousel track present; nothing to control");
            return None;
        };

        let id = CarouselId::unique();
        let per_view = options.per_view_mode();
        debug!(
            carousel = %id,
            fixed_per_view = per_view.is_fixed(),
            ?controls,
            "Carousel initialized"
        );

        Some(Self {
            id,
            view,
            controls,
            options,
            per_view,
            state: CarouselState::new(),
            dots: DotStrip::new(),
            swipe: SwipeTracker::new(),
            auto: AutoPlay::new(),
        })
    }

    /// Re-measure the track, reposition without animation and (re)start
    /// auto-play. Call after the track contents were rendered or replaced.
    pub fn refresh(&mut self) {
        self.recalc();
        self.slide(false);
        self.reset_auto();
    }

    /// Recompute card count, page size and `max_index` from the view.
    pub fn recalc(&mut self) {
        let total = self.view.card_count();
        let per_view = self.per_view.resolve(self.view.viewport_width());
        let before = self.state;
        self.state.recalc(total, per_view);

        if before != self.state {
            debug!(
                carousel = %self.id,
                total_slides = total,
                per_view,
                max_index = self.state.max_index(),
                current_index = self.state.current_index(),
                "Carousel geometry recalculated"
            );
        }
    }

    /// Apply the current index to the view: track offset, arrow states and
    /// dots.
    pub fn slide(&mut self, animate: bool) {
        let offset = self.base_offset();
        self.view.set_track_offset(offset, animate);

        if self.controls.prev {
            self.view.set_prev_disabled(self.state.prev_disabled());
        }
        if self.controls.next {
            self.view.set_next_disabled(self.state.next_disabled());
        }
        self.update_dots();
    }

    /// Bring the dots in line with the page count, rebuilding only when the
    /// count changed.
    pub fn update_dots(&mut self) {
        if !self.controls.dots {
            return;
        }
        let sync = self
            .dots
            .sync(self.state.page_count(), self.state.current_index());
        match sync {
            DotSync::Rebuild { count, active } => {
                trace!(carousel = %self.id, count, "Rebuilding carousel dots");
                self.view.rebuild_dots(count, active);
            }
            DotSync::MoveActive(active) => self.view.set_active_dot(active),
        }
    }

    /// Manual navigation. Saturates into `[0, max_index]`, animates, and
    /// pushes the next automatic advance out by a full interval.
    pub fn go_to(&mut self, index: isize) {
        let changed = self.state.go_to(index);
        if changed {
            debug!(
                carousel = %self.id,
                requested = index,
                current_index = self.state.current_index(),
                "Carousel navigated"
            );
        }
        self.slide(true);
        self.reset_auto();
    }

    /// Manual step forward. A no-op at the last page.
    pub fn next(&mut self) {
        let index = self.signed_index().saturating_add(1);
        self.go_to(index);
    }

    /// Manual step back. A no-op at the first page.
    pub fn prev(&mut self) {
        let index = self.signed_index().saturating_sub(1);
        self.go_to(index);
    }

    /// Schedule automatic advancing. Runs whatever the page count; at a
    /// single page every tick is a no-op. Refused while hovered.
    pub fn start_auto(&mut self) {
        if self.auto.start() {
            trace!(
                carousel = %self.id,
                epoch = ?self.auto.epoch(),
                "Auto-play started"
            );
        }
    }

    pub fn stop_auto(&mut self) {
        if self.auto.stop() {
            trace!(carousel = %self.id, "Auto-play stopped");
        }
    }

    /// Timer callback. Advances one page, wrapping to the first page from
    /// the last. Ticks that arrive while idle are dropped, and a single page
    /// leaves the track untouched. Returns whether the track moved.
    pub fn auto_tick(&mut self) -> bool {
        if !self.auto.is_running() {
            trace!(carousel = %self.id, "Auto-play tick ignored while idle");
            return false;
        }
        if !self.state.auto_advance() {
            return false;
        }
        self.slide(true);
        true
    }

    pub fn mouse_enter(&mut self) {
        self.auto.hover_enter();
    }

    pub fn mouse_leave(&mut self) {
        self.auto.hover_leave();
        self.start_auto();
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.swipe.start(x, y);
        // Drop the transition so the track follows the finger exactly
        let offset = self.base_offset();
        self.view.set_track_offset(offset, false);
    }

    pub fn touch_move(&mut self, x: f32, y: f32) {
        if let SwipeMove::Follow { dx } = self.swipe.update(x, y) {
            let offset = self.base_offset() - dx;
            self.view.set_track_offset(offset, false);
        }
    }

    pub fn touch_end(&mut self) {
        match self.swipe.finish(self.options.swipe_threshold_px) {
            Some(SwipeOutcome::Next) => self.next(),
            Some(SwipeOutcome::Prev) => self.prev(),
            Some(SwipeOutcome::SnapBack) | Some(SwipeOutcome::Abandoned) => {
                self.slide(true)
            }
            None => {}
        }
    }

    /// Geometry may have changed with the viewport; reposition without
    /// animation.
    pub fn resize(&mut self) {
        self.recalc();
        self.slide(false);
    }

    /// Stop timers and drop any in-flight gesture.
    pub fn teardown(&mut self) {
        self.auto.stop();
        self.swipe.cancel();
        debug!(carousel = %self.id, "Carousel torn down");
    }

    pub fn update(&mut self, message: CarouselMessage) {
        match message {
            CarouselMessage::PrevPressed => self.prev(),
            CarouselMessage::NextPressed => self.next(),
            CarouselMessage::DotPressed(page) => {
                self.go_to(isize::try_from(page).unwrap_or(isize::MAX))
            }
            CarouselMessage::GoTo(index) => self.go_to(index),
            CarouselMessage::TouchStart { x, y } => self.touch_start(x, y),
            CarouselMessage::TouchMove { x, y } => self.touch_move(x, y),
            CarouselMessage::TouchEnd => self.touch_end(),
            CarouselMessage::MouseEnter => self.mouse_enter(),
            CarouselMessage::MouseLeave => self.mouse_leave(),
            CarouselMessage::Resized => self.resize(),
            CarouselMessage::ContentChanged => self.refresh(),
            CarouselMessage::AutoTick => {
                self.auto_tick();
            }
            CarouselMessage::Inspect(reply) => {
                let _ = reply.send(self.snapshot());
            }
            CarouselMessage::Shutdown => self.teardown(),
        }
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.state.current_index(),
            max_index: self.state.max_index(),
            per_view: self.state.per_view(),
            total_slides: self.state.total_slides(),
            page_count: self.state.page_count(),
            auto_playing: self.auto.is_running(),
            hovered: self.auto.is_hovered(),
            swiping: self.swipe.is_swiping(),
        }
    }

    pub fn id(&self) -> CarouselId {
        self.id
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn auto_play(&self) -> &AutoPlay {
        &self.auto
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn reset_auto(&mut self) {
        if self.auto.restart() {
            trace!(
                carousel = %self.id,
                epoch = ?self.auto.epoch(),
                "Auto-play rescheduled"
            );
        }
    }

    fn base_offset(&self) -> f32 {
        let card_width = self.view.card_width().unwrap_or(0.0);
        self.state.offset(card_width, self.options.card_gap_px)
    }

    fn signed_index(&self) -> isize {
        isize::try_from(self.state.current_index()).unwrap_or(isize::MAX)
    }
}
