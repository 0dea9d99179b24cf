//! Front-end configuration
//!
//! Only presentation is configurable. Resolution order:
//! 1. `--config <path>` or `$TSDB_ADVISOR_CONFIG` (must exist)
//! 2. `<config dir>/tsdb-advisor/config.json` (optional)
//! 3. built-in defaults
//!
//! `TSDB_ADVISOR_GAUGE_WIDTH`, `TSDB_ADVISOR_OUTPUT` and `TSDB_ADVISOR_EXPLAIN`
//! override whatever the file said.

use crate::error::AdvisorError;
use crate::render::{RenderOptions, DEFAULT_GAUGE_WIDTH, MAX_GAUGE_WIDTH, MIN_GAUGE_WIDTH};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "TSDB_ADVISOR_CONFIG";
const GAUGE_WIDTH_ENV: &str = "TSDB_ADVISOR_GAUGE_WIDTH";
const OUTPUT_ENV: &str = "TSDB_ADVISOR_OUTPUT";
const EXPLAIN_ENV: &str = "TSDB_ADVISOR_EXPLAIN";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub gauge_width: usize,
    pub output: OutputFormat,
    /// Show the per-question score breakdown
    pub explain: bool,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            gauge_width: DEFAULT_GAUGE_WIDTH,
            output: OutputFormat::Text,
            explain: false,
        }
    }
}

impl AdvisorConfig {
    /// Resolve, load, apply environment overrides and validate
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let path = resolve_path(explicit, env_path, default_config_path());
        Self::load_resolved(path.as_deref(), std::env::vars())
    }

    fn load_resolved<I>(path: Option<&Path>, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(vars);
        config
            .validate()
            .with_context(|| format!("Invalid configuration (file: {:?})", path))?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {:?}", path))?;
        tracing::debug!(?path, "config loaded");
        Ok(config)
    }

    /// Apply `TSDB_ADVISOR_*` overrides. Unparseable values are ignored with a warning.
    pub fn apply_env<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            match key.as_str() {
                GAUGE_WIDTH_ENV => match value.parse() {
                    Ok(width) => self.gauge_width = width,
                    Err(_) => tracing::warn!(%key, %value, "ignoring non-numeric gauge width"),
                },
                OUTPUT_ENV => match value.to_ascii_lowercase().as_str() {
                    "text" => self.output = OutputFormat::Text,
                    "json" => self.output = OutputFormat::Json,
                    _ => tracing::warn!(%key, %value, "ignoring unknown output format"),
                },
                EXPLAIN_ENV => match value.to_ascii_lowercase().as_str() {
                    "1" | "true" | "yes" => self.explain = true,
                    "0" | "false" | "no" => self.explain = false,
                    _ => tracing::warn!(%key, %value, "ignoring unknown explain flag"),
                },
                _ => {}
            }
        }
    }

    pub fn validate(&self) -> std::result::Result<(), AdvisorError> {
        if !(MIN_GAUGE_WIDTH..=MAX_GAUGE_WIDTH).contains(&self.gauge_width) {
            return Err(AdvisorError::Config(format!(
                "gauge_width must be between {} and {}, got {}",
                MIN_GAUGE_WIDTH, MAX_GAUGE_WIDTH, self.gauge_width
            )));
        }
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            gauge_width: self.gauge_width,
        }
    }
}

/// Default location: `<config dir>/tsdb-advisor/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tsdb-advisor").join("config.json"))
}

/// Explicit path, then the env path, then the default path if it exists
fn resolve_path(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    default_path: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or(env_path)
        .or_else(|| default_path.filter(|path| path.exists()))
}
