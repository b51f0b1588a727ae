use std::fmt;

use thiserror::Error;
use url::Url;
use vitrine_carousel::CarouselOptions;

use crate::models::FrontConfig;

/// Auto-play faster than this is legal but makes cards hard to read.
const MIN_COMFORTABLE_INTERVAL_MS: u64 = 1_500;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("carousel.per_view must be at least 1")]
    ZeroPerView,
    #[error("carousel breakpoint {index} shows no cards")]
    EmptyBreakpoint { index: usize },
    #[error("carousel breakpoint {index} has a non-finite max_width")]
    NonFiniteBreakpoint { index: usize },
    #[error(
        "carousel breakpoints must be strictly ascending by max_width (breakpoint {index})"
    )]
    UnorderedBreakpoints { index: usize },
    #[error("carousel.breakpoints.wide_per_view must be at least 1")]
    ZeroWidePerView,
    #[error("carousel.auto_play_interval_ms must be greater than zero")]
    ZeroAutoPlayInterval,
    #[error("carousel.swipe_threshold_px must be positive, got {value}")]
    InvalidSwipeThreshold { value: f32 },
    #[error("carousel.card_gap_px must be zero or more, got {value}")]
    NegativeGap { value: f32 },
    #[error("api.base_url '{url}' is not a valid URL: {reason}")]
    InvalidApiUrl { url: String, reason: String },
}

/// A setting that works but is probably not what was meant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the offending setting, e.g. `carousel.card_gap_px`.
    pub key: String,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({hint})")?;
        }
        Ok(())
    }
}

/// Warnings collected while discovering and checking a configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn note(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.items.push(ConfigWarning {
            key: key.into(),
            message: message.into(),
            hint: None,
        });
    }

    pub fn note_with_hint(
        &mut self,
        key: impl Into<String>,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.items.push(ConfigWarning {
            key: key.into(),
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn append(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First warning about `key`, if any.
    pub fn for_key(&self, key: &str) -> Option<&ConfigWarning> {
        self.items.iter().find(|warning| warning.key == key)
    }
}

pub fn apply_guard_rails(
    config: &FrontConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    validate_carousel(&config.carousel, &mut warnings)?;
    validate_api_url(&config.api.base_url)?;

    if config.api.timeout_ms == 0 {
        warnings.note_with_hint(
            "api.timeout_ms",
            "0 disables the request timeout",
            "a stalled API would then hang the page instead of leaving its carousels empty",
        );
    }

    Ok(warnings)
}

fn validate_carousel(
    carousel: &CarouselOptions,
    warnings: &mut ConfigWarnings,
) -> Result<(), ConfigGuardRailError> {
    if carousel.per_view == Some(0) {
        return Err(ConfigGuardRailError::ZeroPerView);
    }

    let steps = &carousel.breakpoints.steps;
    for (index, step) in steps.iter().enumerate() {
        if !step.max_width.is_finite() {
            return Err(ConfigGuardRailError::NonFiniteBreakpoint { index });
        }
        if step.per_view == 0 {
            return Err(ConfigGuardRailError::EmptyBreakpoint { index });
        }
        if index > 0 && step.max_width <= steps[index - 1].max_width {
            return Err(ConfigGuardRailError::UnorderedBreakpoints { index });
        }
    }
    if carousel.breakpoints.wide_per_view == 0 {
        return Err(ConfigGuardRailError::ZeroWidePerView);
    }

    if carousel.auto_play_interval_ms == 0 {
        return Err(ConfigGuardRailError::ZeroAutoPlayInterval);
    }
    if carousel.auto_play_interval_ms < MIN_COMFORTABLE_INTERVAL_MS {
        warnings.note_with_hint(
            "carousel.auto_play_interval_ms",
            format!("{} ms between pages", carousel.auto_play_interval_ms),
            "cards change before visitors can read them; 5000 ms is the usual period",
        );
    }

    let threshold = carousel.swipe_threshold_px;
    if threshold.is_nan() || threshold <= 0.0 {
        return Err(ConfigGuardRailError::InvalidSwipeThreshold {
            value: threshold,
        });
    }
    let gap = carousel.card_gap_px;
    if gap.is_nan() || gap < 0.0 {
        return Err(ConfigGuardRailError::NegativeGap { value: gap });
    }

    if carousel.resize_debounce_ms == 0 {
        warnings.note(
            "carousel.resize_debounce_ms",
            "0 repositions the track on every resize event",
        );
    }

    Ok(())
}

fn validate_api_url(raw: &str) -> Result<(), ConfigGuardRailError> {
    let trimmed = raw.trim();
    let candidate = if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
    {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    Url::parse(&candidate).map(|_| ()).map_err(|err| {
        ConfigGuardRailError::InvalidApiUrl {
            url: raw.to_string(),
            reason: err.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_carousel::Breakpoint;

    #[test]
    fn defaults_pass_without_warnings() {
        let warnings = apply_guard_rails(&FrontConfig::default()).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn zero_fixed_per_view_is_rejected() {
        let mut config = FrontConfig::default();
        config.carousel.per_view = Some(0);
        assert_eq!(
            apply_guard_rails(&config).unwrap_err(),
            ConfigGuardRailError::ZeroPerView
        );
    }

    #[test]
    fn descending_breakpoints_are_rejected() {
        let mut config = FrontConfig::default();
        config.carousel.breakpoints.steps = vec![
            Breakpoint {
                max_width: 960.0,
                per_view: 2,
            },
            Breakpoint {
                max_width: 600.0,
                per_view: 1,
            },
        ];
        assert_eq!(
            apply_guard_rails(&config).unwrap_err(),
            ConfigGuardRailError::UnorderedBreakpoints { index: 1 }
        );
    }

    #[test]
    fn nan_swipe_threshold_is_rejected() {
        let mut config = FrontConfig::default();
        config.carousel.swipe_threshold_px = f32::NAN;
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::InvalidSwipeThreshold { .. })
        ));
    }

    #[test]
    fn nan_breakpoint_width_is_rejected() {
        let mut config = FrontConfig::default();
        config.carousel.breakpoints.steps[1].max_width = f32::NAN;
        assert_eq!(
            apply_guard_rails(&config).unwrap_err(),
            ConfigGuardRailError::NonFiniteBreakpoint { index: 1 }
        );
    }

    #[test]
    fn nan_gap_is_rejected() {
        let mut config = FrontConfig::default();
        config.carousel.card_gap_px = f32::NAN;
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::NegativeGap { .. })
        ));
    }

    #[test]
    fn fast_auto_play_only_warns() {
        let mut config = FrontConfig::default();
        config.carousel.auto_play_interval_ms = 800;
        let warnings = apply_guard_rails(&config).unwrap();
        assert_eq!(warnings.len(), 1);
        let warning = warnings
            .for_key("carousel.auto_play_interval_ms")
            .expect("interval warning");
        assert!(warning.hint.is_some());
        assert!(warning.to_string().starts_with("carousel.auto_play_interval_ms: 800 ms"));
    }

    #[test]
    fn scheme_less_api_url_is_accepted() {
        let mut config = FrontConfig::default();
        config.api.base_url = "museum.local:8080/museum".into();
        assert!(apply_guard_rails(&config).is_ok());
    }

    #[test]
    fn broken_api_url_is_rejected() {
        let mut config = FrontConfig::default();
        config.api.base_url = "http://[::1".into();
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::InvalidApiUrl { .. })
        ));
    }
}
