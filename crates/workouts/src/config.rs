//! Configuration for the `workouts` driver.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::batch::{ErrorPolicy, reference_packages};
use crate::dispatcher::WorkoutPackage;
use crate::errors::{Result, WorkoutError};

/// Environment variable selecting [`ErrorPolicy`].
pub const ON_ERROR_VAR: &str = "WORKOUTS_ON_ERROR";

/// Environment variable selecting [`OutputFormat`].
pub const OUTPUT_VAR: &str = "WORKOUTS_OUTPUT";

/// How summaries are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The one-line training message.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(WorkoutError::InvalidInput(format!(
                "{OUTPUT_VAR} must be `text` or `json`, got `{other}`"
            ))),
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(WorkoutError::InvalidInput(format!(
                "{ON_ERROR_VAR} must be `abort` or `skip`, got `{other}`"
            ))),
        }
    }
}

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Packages to summarize, in order.
    pub packages: Vec<WorkoutPackage>,

    /// Handling of malformed packages.
    pub on_error: ErrorPolicy,

    /// Output format for summaries.
    pub output: OutputFormat,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            packages: reference_packages(),
            on_error: ErrorPolicy::default(),
            output: OutputFormat::default(),
        }
    }
}

impl DriverConfig {
    /// Defaults overlaid with `WORKOUTS_ON_ERROR` and `WORKOUTS_OUTPUT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`DriverConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = lookup(ON_ERROR_VAR) {
            config.on_error = value.parse()?;
        }
        if let Some(value) = lookup(OUTPUT_VAR) {
            config.output = value.parse()?;
        }
        Ok(config)
    }
}
