//! Configuration file and flag resolution

use anyhow::{Context, Result};
use clap::ValueEnum;
use lit_core::{ParseOptions, PointerWidth};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG: &str = "intlit.toml";

/// Output format of the commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable lines and diagnostics
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Contents of `intlit.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `[check]` table
    pub check: CheckConfig,
}

/// `[check]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CheckConfig {
    /// Output format
    pub format: OutputFormat,
    /// Reject literals that overflow the 64-bit accumulator
    pub strict: bool,
    /// Pointer width for `_z` literals
    pub pointer_width: Option<u32>,
}

/// Command line flags that take precedence over the file
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    /// `--format`
    pub format: Option<OutputFormat>,
    /// `--strict`
    pub strict: bool,
    /// `--pointer-width`
    pub pointer_width: Option<u32>,
}

/// Effective settings after merging file and flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Output format
    pub format: OutputFormat,
    /// Options handed to the literal parser
    pub options: ParseOptions,
}

impl Config {
    /// Loads a config file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&source).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parses config file contents
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Loads `explicit` if given, else `intlit.toml` if it exists, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let default_path = PathBuf::from(DEFAULT_CONFIG);
        if default_path.is_file() {
            debug!(path = %default_path.display(), "loading config");
            Self::load(&default_path)
        } else {
            debug!("no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Merges the file with command line flags
    pub fn resolve(&self, overrides: &Overrides) -> Result<Settings> {
        let pointer_width = match overrides.pointer_width.or(self.check.pointer_width) {
            Some(bits) => PointerWidth::from_bits(bits)
                .with_context(|| format!("unsupported pointer width {bits} (expected 16, 32 or 64)"))?,
            None => PointerWidth::TARGET,
        };

        let settings = Settings {
            format: overrides.format.unwrap_or(self.check.format),
            options: ParseOptions {
                pointer_width,
                strict: overrides.strict || self.check.strict,
            },
        };
        debug!(?settings, "resolved settings");
        Ok(settings)
    }
}
