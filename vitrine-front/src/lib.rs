//! Museum front end built on the vitrine carousel.
//!
//! [`infra`] talks to the museum REST API, [`cards`] turns records into card
//! content and [`showcase`] puts a list of cards behind a running carousel.

pub mod cards;
pub mod infra;
pub mod showcase;

pub use cards::{Card, CardKind};
pub use infra::api_client::{ApiError, MuseumApiClient};
pub use infra::content::ContentSource;
pub use showcase::{Showcase, TrackLayout};
