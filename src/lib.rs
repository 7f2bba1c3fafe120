//! # neofetch-mc
//!
//! Render `neofetch` output as Minecraft formatting-code text.
//!
//! Terminal programs style their output with ANSI SGR escape sequences.
//! Minecraft chat uses `§`-prefixed formatting codes instead, and resets
//! styling at every line break. This crate converts one into the other.
//!
//! ## Features
//!
//! - **Transcoding**: ANSI colours, italic, underline and reset mapped to
//!   formatting codes; every other escape sequence removed
//! - **Style carry**: logo lines inherit the previous line's style
//! - **Graceful degradation**: a missing binary yields a readable message,
//!   never an error
//!
//! ## Quick Start
//!
//! ```no_run
//! use neofetch_mc::{NeofetchSource, Report};
//!
//! #[tokio::main]
//! async fn main() {
//!     neofetch_mc::logging::try_init(None).ok();
//!
//!     let report = Report::new(NeofetchSource::default());
//!     println!("{}", report.render().await);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod report;

// Re-export commonly used types
pub use error::{NeofetchError, Result};
pub use format::{format_info, format_logo, transcode, StyleCode};
pub use report::{NeofetchSource, Report, ReportMode, ReportSource, StaticSource};
