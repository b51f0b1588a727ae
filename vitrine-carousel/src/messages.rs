//! Input events for a carousel.
//!
//! Every source (arrows, dots, touch, pointer hover, window resize, timer,
//! content updates) is funnelled through [`CarouselMessage`] into
//! [`crate::Carousel::update`].

use tokio::sync::oneshot;

use crate::controller::CarouselSnapshot;

#[derive(Debug)]
pub enum CarouselMessage {
    // Navigation
    PrevPressed,
    NextPressed,
    DotPressed(usize),
    GoTo(isize),

    // Touch
    TouchStart { x: f32, y: f32 },
    TouchMove { x: f32, y: f32 },
    TouchEnd,

    // Pointer hover
    MouseEnter,
    MouseLeave,

    /// Window resized. The driver debounces these; a direct `update` applies
    /// the resize immediately.
    Resized,
    /// Caller re-rendered the track contents.
    ContentChanged,
    /// Auto-play timer fired.
    AutoTick,

    /// Reply with the current state.
    Inspect(oneshot::Sender<CarouselSnapshot>),
    /// Stop timers and end the driver loop.
    Shutdown,
}
