//! Configuration for the vitrine front end.
//!
//! One [`FrontConfig`] carries the API location, carousel tuning and the log
//! filter. [`FrontConfig::load_from_env`] discovers it from environment
//! variables and well-known file names; [`apply_guard_rails`] rejects values
//! the carousel cannot work with.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigFormat, ConfigLoad};
pub use loader::error::ConfigLoadError;
pub use models::{ApiSettings, ConfigSource, FrontConfig, LoggingSettings};
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails,
};
