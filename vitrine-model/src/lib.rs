//! Content records served by the museum REST API.
#![allow(missing_docs)]

pub mod error;
pub mod exhibition;
pub mod ids;
pub mod news;
pub mod text;

pub use error::{ModelError, Result as ModelResult};
pub use exhibition::{Exhibit, Exhibition};
pub use ids::{ExhibitID, ExhibitionID, NewsID};
pub use news::News;
