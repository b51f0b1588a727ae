use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use vitrine_carousel::CarouselOptions;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/museum";

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Top-level front end settings. Every section falls back to defaults so a
/// file only names what it changes.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FrontConfig {
    /// Museum REST API location.
    pub api: ApiSettings,
    /// Tuning shared by every carousel on the page: page sizing, gap,
    /// auto-play period, swipe threshold and resize debounce.
    pub carousel: CarouselOptions,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL the `/exhibitions` and `/news` paths hang off. A missing
    /// scheme is filled in with `http://` by the client.
    pub base_url: String,
    /// Per-request timeout. Content loads are best-effort, so a slow API
    /// leaves the page with empty carousels instead of a hang.
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_ms: 30_000,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is
    /// unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
