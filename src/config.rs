//! Application configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `HELLO_ADD_*` environment variables. The binary applies CLI flags
//! on top with the `with_*` builders.

use std::path::Path;

use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix for environment overrides, e.g. `HELLO_ADD_RETRY_BUDGET=5`.
pub const ENV_PREFIX: &str = "HELLO_ADD";

/// Default number of interactive attempts per operand.
pub const DEFAULT_RETRY_BUDGET: u32 = 4;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// Effective configuration could not be rendered as TOML.
    #[error("failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),

    /// A value was loaded but is out of range.
    #[error("invalid value for {0}")]
    Invalid(String),
}

/// Runtime settings for one program run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Interactive attempts allowed per operand (must be at least 1)
    pub retry_budget: u32,

    /// Clear the terminal before showing the banner
    pub clear_screen: bool,

    /// Wait for ENTER before exiting an interactive run
    pub pause_on_exit: bool,

    /// Use coloured output for the banner and diagnostics
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            retry_budget: DEFAULT_RETRY_BUDGET,
            clear_screen: true,
            pause_on_exit: true,
            color: console::colors_enabled(),
        }
    }
}

impl AppConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from an optional TOML file and the environment.
    ///
    /// A file passed explicitly must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    /// Same as [`AppConfig::load`] with a custom environment prefix.
    pub fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(
                File::new(&path.to_string_lossy(), FileFormat::Toml).required(true),
            );
        }

        let settings = builder
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        tracing::debug!(?config, "configuration loaded");
        config.validate()
    }

    /// Set the retry budget.
    pub fn with_retry_budget(mut self, attempts: u32) -> Self {
        self.retry_budget = attempts;
        self
    }

    /// Set whether to clear the screen.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Set whether to pause before exiting.
    pub fn with_pause_on_exit(mut self, pause: bool) -> Self {
        self.pause_on_exit = pause;
        self
    }

    /// Enable or disable colour.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Reject settings the program cannot run with.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.retry_budget == 0 {
            return Err(ConfigError::Invalid("retry_budget (must be at least 1)".to_string()));
        }
        Ok(self)
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
