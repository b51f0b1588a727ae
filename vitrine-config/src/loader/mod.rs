pub mod error;

use anyhow::{Context, anyhow};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::models::{ConfigSource, FrontConfig};
use crate::validation::{ConfigWarnings, apply_guard_rails};
use error::ConfigLoadError;

pub const CONFIG_PATH_VAR: &str = "VITRINE_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "VITRINE_CONFIG_JSON";
pub const API_URL_VAR: &str = "VITRINE_API_URL";

/// Files looked for in the working directory, in order.
pub const DEFAULT_CANDIDATES: &[&str] = &[
    "vitrine.toml",
    "vitrine.json",
    "config/vitrine.toml",
    "config/vitrine.json",
];

/// Serialization format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Format implied by the file extension, `None` when there is none we
    /// know.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" | "tml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Best guess for an untyped document: JSON configs are objects.
    fn sniff(contents: &str) -> Self {
        if contents.trim_start().starts_with('{') {
            Self::Json
        } else {
            Self::Toml
        }
    }

    fn parse(self, contents: &str) -> anyhow::Result<FrontConfig> {
        match self {
            Self::Toml => toml::from_str(contents).map_err(|err| anyhow!(err)),
            Self::Json => {
                serde_json::from_str(contents).map_err(|err| anyhow!(err))
            }
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Toml => Self::Json,
            Self::Json => Self::Toml,
        }
    }
}

/// A validated configuration plus its provenance.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: FrontConfig,
    pub source: ConfigSource,
    /// Discovery notes followed by guard rail warnings.
    pub warnings: ConfigWarnings,
}

impl ConfigLoad {
    fn validate(
        config: FrontConfig,
        source: ConfigSource,
        mut warnings: ConfigWarnings,
    ) -> Result<Self, ConfigLoadError> {
        warnings.append(apply_guard_rails(&config)?);
        Ok(Self {
            config,
            source,
            warnings,
        })
    }

    /// Emit every warning at `warn` level. Call once a subscriber is
    /// installed.
    pub fn log_warnings(&self) {
        for warning in self.warnings.iter() {
            warn!(key = %warning.key, "{}", warning);
        }
    }
}

impl FrontConfig {
    /// Load front end configuration.
    /// Evaluation order:
    /// 1) `$VITRINE_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$VITRINE_CONFIG_JSON` (inline JSON),
    /// 3) the first of [`DEFAULT_CANDIDATES`] that is a readable file,
    /// 4) defaults.
    ///
    /// `$VITRINE_API_URL` then overrides `api.base_url` whatever the source.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        let (config, source, notes) = Self::discover()?;
        for note in notes.iter() {
            debug!(key = %note.key, "{}", note);
        }
        Ok((config, source))
    }

    /// [`Self::load_from_env`] followed by the guard rails. Warnings are
    /// returned, not logged; see [`ConfigLoad::log_warnings`].
    pub fn load_validated() -> Result<ConfigLoad, ConfigLoadError> {
        let (config, source, notes) =
            Self::discover().map_err(ConfigLoadError::Load)?;
        ConfigLoad::validate(config, source, notes)
    }

    /// Load an explicit file, apply the `$VITRINE_API_URL` override and run
    /// the guard rails.
    pub fn load_validated_from(
        path: &Path,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let mut config =
            Self::load_from_file(path).map_err(ConfigLoadError::Load)?;
        let mut notes = ConfigWarnings::default();
        config.apply_env_override(&mut notes);
        let source = ConfigSource::File(path.to_path_buf());
        ConfigLoad::validate(config, source, notes)
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read front end config from {}", path.display())
        })?;

        match ConfigFormat::from_path(path) {
            Some(format) => format.parse(&contents).with_context(|| {
                format!("invalid front end config {}", path.display())
            }),
            None => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Parse a document of unknown format. The likelier format is tried
    /// first; the error names both failures when neither parses.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        let first = ConfigFormat::sniff(contents);
        let first_err = match first.parse(contents) {
            Ok(config) => return Ok(config),
            Err(err) => err,
        };
        first.other().parse(contents).map_err(|second_err| {
            let (toml_err, json_err) = match first {
                ConfigFormat::Toml => (first_err, second_err),
                ConfigFormat::Json => (second_err, first_err),
            };
            anyhow!(
                "failed to parse front end config {origin}: toml error: {toml_err}; json error: {json_err}"
            )
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        ConfigFormat::Json
            .parse(raw)
            .context("invalid front end config json")
    }

    fn discover() -> anyhow::Result<(Self, ConfigSource, ConfigWarnings)> {
        let mut notes = ConfigWarnings::default();
        let (mut config, source) = Self::discover_base(&mut notes)?;
        config.apply_env_override(&mut notes);
        Ok((config, source, notes))
    }

    fn discover_base(
        notes: &mut ConfigWarnings,
    ) -> anyhow::Result<(Self, ConfigSource)> {
        match env::var(CONFIG_PATH_VAR) {
            Ok(raw) if !raw.trim().is_empty() => {
                let path = PathBuf::from(raw.trim());
                let config = Self::load_from_file(&path)?;
                return Ok((config, ConfigSource::EnvPath(path)));
            }
            Ok(_) => notes.note(CONFIG_PATH_VAR, "set but blank; ignored"),
            Err(_) => {}
        }

        match env::var(CONFIG_JSON_VAR) {
            Ok(raw) if !raw.trim().is_empty() => {
                let parsed = Self::parse_json(&raw)
                    .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
                return Ok((parsed, ConfigSource::EnvInline));
            }
            Ok(_) => notes.note(CONFIG_JSON_VAR, "set but blank; ignored"),
            Err(_) => {}
        }

        if let Some(path) = Self::find_default_file(Path::new("."), notes) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    /// First candidate under `root` that is a regular file. Candidates that
    /// exist but cannot be used are noted with the reason.
    pub fn find_default_file(
        root: &Path,
        notes: &mut ConfigWarnings,
    ) -> Option<PathBuf> {
        for candidate in DEFAULT_CANDIDATES {
            let path = root.join(candidate);
            match fs::metadata(&path) {
                Ok(meta) if meta.is_file() => return Some(path),
                Ok(_) => notes.note(
                    path.display().to_string(),
                    "skipped: not a regular file",
                ),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => notes.note(
                    path.display().to_string(),
                    format!("skipped: {err}"),
                ),
            }
        }
        None
    }

    fn apply_env_override(&mut self, notes: &mut ConfigWarnings) {
        let Ok(url) = env::var(API_URL_VAR) else {
            return;
        };
        let url = url.trim();
        if url.is_empty() {
            notes.note(API_URL_VAR, "set but blank; ignored");
            return;
        }
        debug!(url = %url, "API URL overridden from environment");
        self.api.base_url = url.to_string();
    }
}
