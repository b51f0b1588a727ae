//! In-memory [`CarouselView`] for tests and non-graphical front ends.
//!
//! Geometry and the last rendered output live behind a shared lock so a
//! [`TrackProbe`] can read (and re-render) the track while a driver task
//! owns the view.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::view::CarouselView;

/// Everything the controller last wrote to the track.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackRecord {
    pub offset_px: f32,
    pub animated: bool,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub dot_count: usize,
    pub active_dot: Option<usize>,
    /// How many times the dot container was rebuilt from scratch.
    pub dot_rebuilds: usize,
    pub offset_writes: usize,
}

#[derive(Debug)]
struct Track {
    card_count: usize,
    card_width: f32,
    viewport_width: f32,
    record: TrackRecord,
}

#[derive(Debug, Clone)]
pub struct HeadlessTrack {
    inner: Arc<Mutex<Track>>,
}

impl HeadlessTrack {
    pub fn new(card_count: usize, card_width: f32, viewport_width: f32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Track {
                card_count,
                card_width,
                viewport_width,
                record: TrackRecord::default(),
            })),
        }
    }

    pub fn probe(&self) -> TrackProbe {
        TrackProbe {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl CarouselView for HeadlessTrack {
    fn card_count(&self) -> usize {
        self.inner.lock().card_count
    }

    fn card_width(&self) -> Option<f32> {
        let track = self.inner.lock();
        (track.card_count > 0).then_some(track.card_width)
    }

    fn viewport_width(&self) -> f32 {
        self.inner.lock().viewport_width
    }

    fn set_track_offset(&mut self, offset_px: f32, animate: bool) {
        let mut track = self.inner.lock();
        track.record.offset_px = offset_px;
        track.record.animated = animate;
        track.record.offset_writes += 1;
    }

    fn set_prev_disabled(&mut self, disabled: bool) {
        self.inner.lock().record.prev_disabled = disabled;
    }

    fn set_next_disabled(&mut self, disabled: bool) {
        self.inner.lock().record.next_disabled = disabled;
    }

    fn rebuild_dots(&mut self, count: usize, active: usize) {
        let mut track = self.inner.lock();
        track.record.dot_count = count;
        track.record.active_dot = (active < count).then_some(active);
        track.record.dot_rebuilds += 1;
    }

    fn set_active_dot(&mut self, index: usize) {
        let mut track = self.inner.lock();
        track.record.active_dot = (index < track.record.dot_count).then_some(index);
    }
}

/// Shared handle onto a [`HeadlessTrack`].
#[derive(Debug, Clone)]
pub struct TrackProbe {
    inner: Arc<Mutex<Track>>,
}

impl TrackProbe {
    pub fn record(&self) -> TrackRecord {
        self.inner.lock().record.clone()
    }

    /// Simulate the caller re-rendering the track with `count` cards.
    pub fn set_card_count(&self, count: usize) {
        self.inner.lock().card_count = count;
    }

    /// Simulate a window resize.
    pub fn set_viewport_width(&self, width: f32) {
        self.inner.lock().viewport_width = width;
    }
}
