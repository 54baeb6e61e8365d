//! # Harness Configuration
//!
//! Layered in order: built-in defaults, then `MAILSCREEN_*` environment
//! variables, then command-line flags. Unparsable environment values are
//! logged and ignored.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use ms_01_probabilistic_set::{BloomConfig, IndexMode};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::HarnessError;

pub const ENV_SUSPICIOUS_FILE: &str = "MAILSCREEN_SUSPICIOUS_FILE";
pub const ENV_EMAILS_FILE: &str = "MAILSCREEN_EMAILS_FILE";
pub const ENV_BIT_SIZE: &str = "MAILSCREEN_BIT_SIZE";
pub const ENV_HASH_COUNT: &str = "MAILSCREEN_HASH_COUNT";
pub const ENV_INDEX_MODE: &str = "MAILSCREEN_INDEX_MODE";

/// Report output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{other}' (expected 'text' or 'json')"
            )),
        }
    }
}

/// Complete harness configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Newline-delimited suspicious domains
    pub suspicious_path: PathBuf,
    /// Newline-delimited email addresses
    pub emails_path: PathBuf,
    /// Filter parameters
    pub filter: BloomConfig,
    /// Report output format
    pub format: OutputFormat,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            suspicious_path: PathBuf::from("suspicious.txt"),
            emails_path: PathBuf::from("emails.txt"),
            filter: BloomConfig::default(),
            format: OutputFormat::Text,
        }
    }
}

impl HarnessConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `MAILSCREEN_*` overrides read through `lookup`
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(ENV_SUSPICIOUS_FILE) {
            self.suspicious_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_EMAILS_FILE) {
            self.emails_path = PathBuf::from(path);
        }
        if let Some(bit_size) = parse_env::<i64>(&lookup, ENV_BIT_SIZE) {
            self.filter.bit_size = bit_size;
        }
        if let Some(hash_count) = parse_env::<i64>(&lookup, ENV_HASH_COUNT) {
            self.filter.hash_count = hash_count;
        }
        if let Some(index_mode) = parse_env::<IndexMode>(&lookup, ENV_INDEX_MODE) {
            info!(%index_mode, "Loaded index mode from environment");
            self.filter.index_mode = index_mode;
        }
        self
    }

    /// Check the filter parameters before any input is read
    pub fn validate(&self) -> Result<(), HarnessError> {
        self.filter.validate()?;
        Ok(())
    }
}

fn parse_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{} has an invalid value '{}': {}", key, raw, e);
            None
        }
    }
}
