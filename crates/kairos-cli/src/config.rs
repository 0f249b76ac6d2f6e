//! Optional `kairos.toml` with rendering and watch defaults.
//!
//! Only presentation knobs live here. Canon constants are compiled into
//! `kairos-core` and cannot be overridden.

use std::fmt;
use std::path::{Path, PathBuf};

use kairos_core::{CanvasSize, DEFAULT_LINE_SCALE, DEFAULT_SAMPLE_COUNT};
use serde::Deserialize;

pub const CONFIG_ENV: &str = "KAIROS_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "kairos.toml";

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "cannot read {}: {e}", path.display()),
            ConfigError::Parse(e) => write!(f, "invalid TOML: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub sigil: SigilConfig,
    pub watch: WatchConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SigilConfig {
    pub width: f64,
    pub height: f64,
    pub samples: usize,
    pub line_scale: f64,
}

impl Default for SigilConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 320.0,
            samples: DEFAULT_SAMPLE_COUNT,
            line_scale: DEFAULT_LINE_SCALE,
        }
    }
}

impl SigilConfig {
    pub fn canvas(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatchConfig {
    /// Upper bound on how long the watch loop sleeps between checks.
    pub interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve and load the config file.
    /// Priority: explicit path > KAIROS_CONFIG env > ./kairos.toml > defaults.
    ///
    /// An explicit or env-named file must exist; the implicit one may not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let path = match named {
            Some(path) => path,
            None => {
                let implicit = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !implicit.is_file() {
                    tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                implicit
            }
        };

        let content =
            std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(path.clone(), e))?;
        let config = Self::from_toml(&content)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let s = &self.sigil;
        for (name, value) in [
            ("sigil.width", s.width),
            ("sigil.height", s.height),
            ("sigil.line_scale", s.line_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if s.samples < 2 {
            return Err(ConfigError::Invalid(format!(
                "sigil.samples must be at least 2, got {}",
                s.samples
            )));
        }
        if self.watch.interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "watch.interval_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_section() {
        let config = Config::from_toml("[sigil]\nwidth = 512.0\n").unwrap();
        assert_eq!(config.sigil.width, 512.0);
        assert_eq!(config.sigil.height, 320.0);
        assert_eq!(config.sigil.samples, 360);
        assert_eq!(config.watch.interval_ms, 1000);
    }

    #[test]
    fn test_full_file() {
        let config = Config::from_toml(
            "[sigil]\nwidth = 100.0\nheight = 50.0\nsamples = 720\nline_scale = 2.5\n\n\
             [watch]\ninterval_ms = 250\n",
        )
        .unwrap();
        assert_eq!(config.sigil.canvas(), CanvasSize::new(100.0, 50.0));
        assert_eq!(config.sigil.samples, 720);
        assert_eq!(config.sigil.line_scale, 2.5);
        assert_eq!(config.watch.interval_ms, 250);
    }

    #[test]
    fn test_rejects_nonpositive_canvas() {
        let err = Config::from_toml("[sigil]\nheight = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref m) if m.contains("sigil.height")));
    }

    #[test]
    fn test_rejects_single_sample() {
        let err = Config::from_toml("[sigil]\nsamples = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_canon_is_not_configurable() {
        let err = Config::from_toml("breath_ms = 1000.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {err}");
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/kairos.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
        assert!(err.to_string().contains("/nonexistent/kairos.toml"));
    }
}
