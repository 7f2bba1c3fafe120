//! Report capture and assembly.
//!
//! A [`ReportSource`] supplies raw terminal output for each [`ReportMode`];
//! [`Report`] transcodes both parts and joins them into the final message.
//!
//! # Example
//!
//! ```
//! use neofetch_mc::report::{Report, StaticSource};
//!
//! # tokio_test::block_on(async {
//! let source = StaticSource::new("\x1b[31mlogo\n", "\x1b[32mOS\x1b[0m: Linux\n");
//! let text = Report::new(source).render().await;
//! assert_eq!(text, "\u{00A7}clogo\u{00A7}r\n\n\u{00A7}aOS\u{00A7}r: Linux");
//! # });
//! ```

mod neofetch;

use std::fmt;
use std::future::Future;
use std::path::Path;

use tracing::{debug, error};

use crate::format;
use crate::Result;

pub use neofetch::{NeofetchSource, DEFAULT_PROGRAM, DEFAULT_TIMEOUT};

/// Shown in place of the report when the binary cannot be run.
pub const SENTINEL_MISSING: &str = "The Neofetch executable was not found on the system.";

/// Which half of the report to capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportMode {
    /// System information fields only.
    Info,
    /// Distribution logo only.
    Logo,
}

impl ReportMode {
    /// Argument that selects this mode on the neofetch command line.
    pub const fn default_arg(self) -> &'static str {
        match self {
            ReportMode::Info => "--off",
            ReportMode::Logo => "-L",
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportMode::Info => f.write_str("info"),
            ReportMode::Logo => f.write_str("logo"),
        }
    }
}

/// Supplier of raw, ANSI-formatted report output.
pub trait ReportSource {
    /// Capture the output for `mode`, lines joined with `\n`.
    ///
    /// Returns [`NeofetchError::ProviderUnavailable`](crate::NeofetchError::ProviderUnavailable)
    /// when the underlying binary cannot be started.
    fn capture(&self, mode: ReportMode) -> impl Future<Output = Result<String>> + Send;
}

/// Pre-captured output, e.g. read from files.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    logo: String,
    info: String,
}

impl StaticSource {
    /// Create a source from captured logo and info text.
    pub fn new(logo: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            logo: logo.into(),
            info: info.into(),
        }
    }

    /// Load captured logo and info output from files.
    pub fn from_files(logo: &Path, info: &Path) -> Result<Self> {
        let logo = std::fs::read_to_string(logo)?;
        let info = std::fs::read_to_string(info)?;
        Ok(Self::new(logo, info))
    }
}

impl ReportSource for StaticSource {
    async fn capture(&self, mode: ReportMode) -> Result<String> {
        Ok(match mode {
            ReportMode::Logo => self.logo.clone(),
            ReportMode::Info => self.info.clone(),
        })
    }
}

/// Combined logo and info report.
#[derive(Debug)]
pub struct Report<S> {
    source: S,
}

impl<S: ReportSource> Report<S> {
    /// Create a report backed by `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Capture both parts concurrently and render the final message.
    ///
    /// Never fails: a source error is logged and replaced by
    /// [`SENTINEL_MISSING`].
    pub async fn render(&self) -> String {
        let (logo, info) = tokio::join!(self.raw(ReportMode::Logo), self.raw(ReportMode::Info));

        format::combine(&format::format_logo(&logo), &format::format_info(&info))
    }

    async fn raw(&self, mode: ReportMode) -> String {
        match self.source.capture(mode).await {
            Ok(output) => {
                debug!(%mode, bytes = output.len(), "captured report output");
                output
            }
            Err(err) => {
                error!(%mode, error = %err, "{}", SENTINEL_MISSING);
                SENTINEL_MISSING.to_string()
            }
        }
    }
}
