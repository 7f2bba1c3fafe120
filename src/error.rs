//! Error types for neofetch-mc.

use thiserror::Error;

/// Main error type for neofetch-mc operations.
#[derive(Error, Debug)]
pub enum NeofetchError {
    /// The report binary could not be started.
    #[error("failed to start {program}: {source}")]
    ProviderUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The report binary did not finish normally; output may be partial.
    #[error("report process interrupted: {0}")]
    ProviderInterrupted(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Command-line arguments were invalid.
    #[error("argument error: {0}")]
    Args(#[from] crate::cli::ArgsError),
}

/// Convenience Result type for neofetch-mc operations.
pub type Result<T> = std::result::Result<T, NeofetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_unavailable_display() {
        let err = NeofetchError::ProviderUnavailable {
            program: "neofetch".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("neofetch"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_provider_interrupted_display() {
        let err = NeofetchError::ProviderInterrupted("timed out after 10s".into());
        assert!(err.to_string().contains("interrupted"));
        assert!(err.to_string().contains("10s"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NeofetchError = io_err.into();
        assert!(matches!(err, NeofetchError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_args_error_conversion() {
        let err: NeofetchError = crate::cli::ArgsError::UnexpectedArgument("x".into()).into();
        assert!(matches!(err, NeofetchError::Args(_)));
        assert!(err.to_string().contains("unexpected argument"));
    }
}
