//! Configuration management and validation.
//!
//! Configuration is resolved in layers: built-in defaults, then an optional
//! TOML file, then environment variables, then command-line overrides applied
//! by the CLI. The result is validated once all layers are in place.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_INPUT_FILE, DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_FILE,
    DEFAULT_REPORT_FILE, env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Log levels accepted in the `[logging]` section
const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Input, output and pipeline settings
    pub processing: ProcessingConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Pipeline paths and switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Raw incident table written by the collector
    pub input_path: PathBuf,

    /// Enriched incident table
    pub output_path: PathBuf,

    /// Quality report artifact
    pub report_path: PathBuf,

    /// Generate the quality report after enrichment
    pub write_report: bool,

    /// Run enrichment without writing any files
    pub dry_run: bool,

    /// Draw progress bars while processing
    pub show_progress: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
            write_report: true,
            dry_run: false,
            show_progress: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is not set
    pub level: String,

    /// Timestamped output; compact output when false
    pub structured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            structured: true,
        }
    }
}

impl Config {
    /// Location of the per-user config file
    ///
    /// `<config_dir>/incident-processor/config.toml`, where `config_dir` is the
    /// platform configuration directory.
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Read configuration from a TOML file
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Build configuration from defaults, an optional file and the environment
    ///
    /// CLI overrides are applied by the caller afterwards.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file: {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply `INCIDENT_*` environment variables
    pub fn apply_env_overrides(&mut self) {
        self.apply_env_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply path overrides looked up through `lookup`
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = value(env_vars::INPUT_PATH) {
            debug!("{} overrides input path: {}", env_vars::INPUT_PATH, path);
            self.processing.input_path = PathBuf::from(path);
        }
        if let Some(path) = value(env_vars::OUTPUT_PATH) {
            debug!("{} overrides output path: {}", env_vars::OUTPUT_PATH, path);
            self.processing.output_path = PathBuf::from(path);
        }
        if let Some(path) = value(env_vars::REPORT_PATH) {
            debug!("{} overrides report path: {}", env_vars::REPORT_PATH, path);
            self.processing.report_path = PathBuf::from(path);
        }
    }

    /// Check the resolved configuration for contradictions
    pub fn validate(&self) -> Result<()> {
        let processing = &self.processing;

        if processing.input_path.as_os_str().is_empty() {
            return Err(Error::configuration("Input path must not be empty"));
        }
        if processing.output_path.as_os_str().is_empty() {
            return Err(Error::configuration("Output path must not be empty"));
        }
        if same_file(&processing.output_path, &processing.input_path) {
            return Err(Error::configuration(format!(
                "Output path '{}' would overwrite the input table",
                processing.output_path.display()
            )));
        }
        if processing.report_path.as_os_str().is_empty() {
            return Err(Error::configuration("Report path must not be empty"));
        }
        if same_file(&processing.report_path, &processing.input_path)
            || same_file(&processing.report_path, &processing.output_path)
        {
            return Err(Error::configuration(format!(
                "Report path '{}' collides with a data table",
                processing.report_path.display()
            )));
        }
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Invalid log level '{}', expected one of: {}",
                self.logging.level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Set the raw input table
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.processing.input_path = path.into();
        self
    }

    /// Set the enriched output table
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.processing.output_path = path.into();
        self
    }

    /// Set the quality report artifact
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.processing.report_path = path.into();
        self
    }
}

/// Whether two configured paths name the same file
///
/// Paths are compared after resolving them against the working directory and
/// folding `.` and `..` components. When the parent directory exists its
/// symlinks are resolved too.
fn same_file(first: &Path, second: &Path) -> bool {
    resolve_path(first) == resolve_path(second)
}

fn resolve_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }

    match (resolved.parent(), resolved.file_name()) {
        (Some(parent), Some(name)) => parent
            .canonicalize()
            .map(|parent| parent.join(name))
            .unwrap_or(resolved),
        _ => resolved,
    }
}
