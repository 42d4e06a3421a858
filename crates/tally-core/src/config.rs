//! Configuration for the `tally` command-line front end.
//!
//! The library itself needs no configuration; this only covers logging and
//! output rendering. Every field is optional and command-line flags take
//! precedence over the file.
//!
//! # Example config
//!
//! ```json
//! {
//!   "logging": { "level": "debug", "dir": "/tmp/log", "module_name": "tally" },
//!   "output": { "format": "json" }
//! }
//! ```

use serde::Deserialize;

use crate::error::TallyError;

/// Default log level when neither `RUST_LOG`, a flag nor the file set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file prefix.
pub const DEFAULT_MODULE_NAME: &str = "tally";

/// Top-level application config, deserialized from a JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub logging: Option<LoggingConfig>,
    pub output: Option<OutputConfig>,
}

/// Logging block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Level or filter directive (e.g. `"info"`, `"tally_core=debug"`).
    pub level: Option<String>,
    /// Directory for daily-rotating log files.
    pub dir: Option<String>,
    /// Log file prefix.
    pub module_name: Option<String>,
}

/// Output block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

/// How lookup results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    pub fn log_level(&self) -> &str {
        self.logging.as_ref().and_then(|l| l.level.as_deref()).unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_dir(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.dir.as_deref())
    }

    pub fn module_name(&self) -> &str {
        self.logging.as_ref().and_then(|l| l.module_name.as_deref()).unwrap_or(DEFAULT_MODULE_NAME)
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.as_ref().and_then(|o| o.format).unwrap_or_default()
    }

    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, TallyError> {
        serde_json::from_str(text).map_err(|e| TallyError::Config(e.to_string()))
    }
}

/// Load and parse a JSON config file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = AppConfig::from_json(&content)?;
    Ok(config)
}
