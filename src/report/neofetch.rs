//! Process-backed report source.

use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::process::{Child, ChildStdout, Command};
use tracing::{debug, error, warn};

use super::{ReportMode, ReportSource};
use crate::config::ProviderSection;
use crate::error::NeofetchError;
use crate::Result;

/// Binary run when none is configured.
pub const DEFAULT_PROGRAM: &str = "neofetch";

/// How long to wait for the binary before using what it printed so far.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs `neofetch` (or a compatible binary) and captures its stdout.
#[derive(Debug, Clone)]
pub struct NeofetchSource {
    program: String,
    info_arg: String,
    logo_arg: String,
    timeout: Duration,
}

impl NeofetchSource {
    /// Create a source running `program` with the default mode arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            info_arg: ReportMode::Info.default_arg().to_string(),
            logo_arg: ReportMode::Logo.default_arg().to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a source from the provider configuration section.
    pub fn from_config(section: &ProviderSection) -> Self {
        Self {
            program: section.program.clone(),
            info_arg: section.info_arg.clone(),
            logo_arg: section.logo_arg.clone(),
            timeout: Duration::from_secs(section.timeout_secs),
        }
    }

    /// Set the argument passed for `mode`.
    pub fn mode_arg(mut self, mode: ReportMode, arg: impl Into<String>) -> Self {
        match mode {
            ReportMode::Info => self.info_arg = arg.into(),
            ReportMode::Logo => self.logo_arg = arg.into(),
        }
        self
    }

    /// Set the capture timeout.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// The configured binary.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The argument passed for `mode`.
    pub fn arg(&self, mode: ReportMode) -> &str {
        match mode {
            ReportMode::Info => &self.info_arg,
            ReportMode::Logo => &self.logo_arg,
        }
    }
}

impl Default for NeofetchSource {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl ReportSource for NeofetchSource {
    async fn capture(&self, mode: ReportMode) -> Result<String> {
        let arg = self.arg(mode);
        debug!(program = %self.program, arg, "running report binary");

        let mut child = Command::new(&self.program)
            .arg(arg)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| NeofetchError::ProviderUnavailable {
                program: self.program.clone(),
                source,
            })?;

        let Some(mut stdout) = child.stdout.take() else {
            let err = NeofetchError::ProviderInterrupted("stdout was not captured".into());
            error!(%mode, error = %err, "no output captured");
            return Ok(String::new());
        };

        let mut raw = Vec::new();
        let outcome =
            tokio::time::timeout(self.timeout, drain(&mut child, &mut stdout, &mut raw)).await;

        match outcome {
            Ok(Ok(status)) if status.success() => {}
            Ok(Ok(status)) => {
                warn!(%mode, %status, "report binary exited unsuccessfully");
            }
            Ok(Err(e)) => {
                let err = NeofetchError::ProviderInterrupted(e.to_string());
                error!(%mode, error = %err, "using partial output");
            }
            Err(_) => {
                let err = NeofetchError::ProviderInterrupted(format!(
                    "timed out after {:?}",
                    self.timeout
                ));
                error!(%mode, error = %err, "using partial output");
                if let Err(e) = child.start_kill() {
                    debug!(error = %e, "failed to kill report binary");
                }
            }
        }

        Ok(join_lines(&raw))
    }
}

/// Read stdout to the end, then wait for the process to exit.
async fn drain(
    child: &mut Child,
    stdout: &mut ChildStdout,
    raw: &mut Vec<u8>,
) -> io::Result<ExitStatus> {
    stdout.read_to_end(raw).await?;
    child.wait().await
}

/// Decode captured bytes and rejoin their lines with `\n`.
///
/// The final line terminator, if any, is not kept.
fn join_lines(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .lines()
        .collect::<Vec<_>>()
        .join("\n")
}
