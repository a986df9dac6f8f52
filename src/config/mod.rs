pub mod toml_config;

use crate::domain::model::DEFAULT_PIN;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_log_level, validate_pin, Validate};
use std::fmt;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "atm-sim")]
#[command(about = "A simulated ATM: PIN entry, deposits, withdrawals and balance inquiry")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the expected PIN
    #[arg(long)]
    pub pin: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads and validates the optional config file, then layers the flags over it.
    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        Ok(Settings::resolve(
            file.as_ref(),
            self.pin.as_deref(),
            self.json_logs,
        ))
    }
}

/// Effective settings after merging flags, file and defaults.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub pin: String,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl Settings {
    /// Flag beats file beats default.
    pub fn resolve(file: Option<&TomlConfig>, pin: Option<&str>, json_logs: bool) -> Self {
        let pin = pin
            .or_else(|| file.and_then(TomlConfig::pin))
            .unwrap_or(DEFAULT_PIN)
            .to_string();

        Self {
            pin,
            log_level: file.and_then(TomlConfig::log_level).map(str::to_string),
            json_logs: json_logs || file.is_some_and(TomlConfig::json_logs),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(None, None, false)
    }
}

// Keeps the PIN out of debug logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("pin", &"****")
            .field("log_level", &self.log_level)
            .field("json_logs", &self.json_logs)
            .finish()
    }
}

impl ConfigProvider for Settings {
    fn expected_pin(&self) -> &str {
        &self.pin
    }

    fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_pin("pin", &self.pin)?;
        if let Some(level) = &self.log_level {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}
