//! Carousel controller for paged strips of equal-width cards.
//!
//! The crate separates the index math ([`state`]), the dot, gesture and
//! auto-play sub-machines, and the rendering boundary ([`view`]). The
//! [`controller::Carousel`] glues them together and applies state to a
//! [`view::CarouselView`]; the [`driver`] runs one controller on a tokio
//! task and owns its timers.

pub mod autoplay;
pub mod constants;
pub mod controller;
pub mod dots;
pub mod driver;
pub mod gesture;
pub mod headless;
pub mod messages;
pub mod state;
pub mod types;
pub mod view;

pub use autoplay::{AutoPlay, AutoPlayState};
pub use controller::{Carousel, CarouselSnapshot};
pub use driver::{CarouselDriver, CarouselHandle, channel};
pub use headless::{HeadlessTrack, TrackProbe, TrackRecord};
pub use messages::CarouselMessage;
pub use state::CarouselState;
pub use types::*;
pub use view::{CarouselView, Controls};
