//! Configuration management for neofetch-mc.
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file (JSON)
//! 4. Default values

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::report::{ReportMode, DEFAULT_PROGRAM, DEFAULT_TIMEOUT};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report binary configuration.
    pub provider: ProviderSection,
    /// Logging configuration.
    pub logging: LoggingSection,
}

/// Report binary configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSection {
    /// Binary to run.
    pub program: String,
    /// Argument selecting info-only output.
    pub info_arg: String,
    /// Argument selecting logo-only output.
    pub logo_arg: String,
    /// Seconds to wait for the binary before using partial output.
    pub timeout_secs: u64,
}

impl Default for ProviderSection {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            info_arg: ReportMode::Info.default_arg().to_string(),
            logo_arg: ReportMode::Logo.default_arg().to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Filter directive (error, warn, info, debug, trace, or `target=level`).
    ///
    /// When unset, `RUST_LOG` or the built-in default applies.
    pub level: Option<String>,
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Json)
    }

    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(program) = std::env::var("NEOFETCH_MC_PROGRAM") {
            if !program.is_empty() {
                self.provider.program = program;
            }
        }

        if let Ok(timeout) = std::env::var("NEOFETCH_MC_TIMEOUT") {
            self.provider.timeout_secs = timeout
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(timeout))?;
        }

        if let Ok(level) = std::env::var("NEOFETCH_MC_LOG_LEVEL") {
            self.logging.level = Some(level);
        }

        Ok(())
    }

    /// Apply CLI argument overrides.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(ref program) = args.program {
            self.provider.program = program.clone();
        }

        if let Some(timeout) = args.timeout_secs {
            self.provider.timeout_secs = timeout;
        }

        if let Some(ref level) = args.log_level {
            self.logging.level = Some(level.clone());
        }
    }

    /// Load configuration with full priority chain.
    ///
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match args.config {
            Some(ref path) => Config::from_file(path)?,
            None => Config::default(),
        };

        config.apply_env()?;
        config.apply_args(args);

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the provider cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.program.trim().is_empty() {
            return Err(ConfigError::EmptyProgram);
        }
        Ok(())
    }

    /// Get the log filter directive, if one was configured.
    pub fn log_filter(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(std::io::Error),
    /// JSON parsing error.
    Json(serde_json::Error),
    /// Timeout is not a whole number of seconds.
    InvalidTimeout(String),
    /// No report binary configured.
    EmptyProgram,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config file: {}", e),
            Self::Json(e) => write!(f, "failed to parse config file: {}", e),
            Self::InvalidTimeout(value) => write!(f, "invalid timeout: '{}'", value),
            Self::EmptyProgram => write!(f, "provider program must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.provider.program, "neofetch");
        assert_eq!(config.provider.info_arg, "--off");
        assert_eq!(config.provider.logo_arg, "-L");
        assert_eq!(config.provider.timeout_secs, 10);
        assert!(config.log_filter().is_none());
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "provider": {
                "program": "/opt/neofetch/neofetch",
                "timeout_secs": 3
            },
            "logging": {
                "level": "debug"
            }
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.provider.program, "/opt/neofetch/neofetch");
        assert_eq!(config.provider.timeout_secs, 3);
        assert_eq!(config.provider.logo_arg, "-L"); // Default
        assert_eq!(config.log_filter(), Some("debug"));
    }

    #[test]
    fn test_config_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_config_missing_file() {
        let result = Config::from_file(Path::new("/nonexistent/neofetch-mc.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_apply_args() {
        let mut config = Config::default();
        let args = Args {
            program: Some("fastfetch".to_string()),
            timeout_secs: Some(30),
            log_level: Some("trace".to_string()),
            ..Args::default()
        };

        config.apply_args(&args);

        assert_eq!(config.provider.program, "fastfetch");
        assert_eq!(config.provider.timeout_secs, 30);
        assert_eq!(config.log_filter(), Some("trace"));
    }

    #[test]
    fn test_apply_args_keeps_unset_fields() {
        let mut config = Config::default();
        config.provider.program = "custom".to_string();

        config.apply_args(&Args::default());
        assert_eq!(config.provider.program, "custom");
    }

    #[test]
    fn test_validate_empty_program() {
        let mut config = Config::default();
        config.provider.program = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyProgram)));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"program\""));
        assert!(json.contains("\"timeout_secs\""));
    }
}
