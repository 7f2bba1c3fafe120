//! Command-line interface for neofetch-mc.
//!
//! Uses lexopt for minimal binary size overhead (~34KB).

use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Path to configuration file.
    pub config: Option<PathBuf>,
    /// Report binary (overrides config file).
    pub program: Option<String>,
    /// Provider timeout in seconds (overrides config file).
    pub timeout_secs: Option<u64>,
    /// Captured logo output to use instead of running the binary.
    pub logo_file: Option<PathBuf>,
    /// Captured info output to use instead of running the binary.
    pub info_file: Option<PathBuf>,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

impl Args {
    /// Captured logo and info files, when both were given.
    pub fn captured_files(&self) -> Option<(&PathBuf, &PathBuf)> {
        self.logo_file.as_ref().zip(self.info_file.as_ref())
    }
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Short('c') | Long("config") => {
                result.config = Some(parser.value()?.parse()?);
            }
            Short('p') | Long("program") => {
                result.program = Some(parser.value()?.parse()?);
            }
            Short('t') | Long("timeout") => {
                let value: String = parser.value()?.parse()?;
                result.timeout_secs = Some(
                    value
                        .parse()
                        .map_err(|_| ArgsError::InvalidValue("timeout", value))?,
                );
            }
            Long("logo-file") => {
                result.logo_file = Some(parser.value()?.parse()?);
            }
            Long("info-file") => {
                result.info_file = Some(parser.value()?.parse()?);
            }
            Short('l') | Long("log-level") => {
                result.log_level = Some(parser.value()?.parse()?);
            }
            Value(val) => {
                return Err(ArgsError::UnexpectedArgument(val.to_string_lossy().into()));
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    if result.logo_file.is_some() != result.info_file.is_some() {
        return Err(ArgsError::IncompleteCapture);
    }

    Ok(result)
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"neofetch-mc {version}
Render neofetch output as Minecraft formatting-code text

USAGE:
    neofetch-mc [OPTIONS]

OPTIONS:
    -c, --config <FILE>      Path to configuration file (JSON)
    -p, --program <PATH>     Report binary to run [default: neofetch]
    -t, --timeout <SECS>     Seconds to wait for the binary [default: 10]
        --logo-file <FILE>   Use captured logo output instead of running the binary
        --info-file <FILE>   Use captured info output instead of running the binary
    -l, --log-level <LVL>    Log level (error, warn, info, debug, trace)
    -h, --help               Print help
    -V, --version            Print version

ENVIRONMENT VARIABLES:
    NEOFETCH_MC_PROGRAM      Report binary (overrides config)
    NEOFETCH_MC_TIMEOUT      Timeout in seconds (overrides config)
    NEOFETCH_MC_LOG_LEVEL    Log level (overrides config)
    RUST_LOG                 Log filter when no level is configured

EXAMPLES:
    # Run neofetch and print the formatted report
    neofetch-mc

    # Transcode previously captured output
    neofetch -L > logo.txt; neofetch --off > info.txt
    neofetch-mc --logo-file logo.txt --info-file info.txt
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("neofetch-mc {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// Invalid argument value.
    InvalidValue(&'static str, String),
    /// Unexpected positional argument.
    UnexpectedArgument(String),
    /// Only one of `--logo-file` / `--info-file` was given.
    IncompleteCapture,
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::InvalidValue(name, value) => {
                write!(f, "invalid value for --{}: '{}'", name, value)
            }
            Self::UnexpectedArgument(arg) => {
                write!(f, "unexpected argument: '{}'", arg)
            }
            Self::IncompleteCapture => {
                write!(f, "--logo-file and --info-file must be given together")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}
