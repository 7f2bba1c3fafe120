//! ANSI to formatting-code transcoding.
//!
//! This module turns terminal output into text for a renderer that uses
//! `§`-prefixed formatting codes:
//! - SGR colour and style sequences are mapped through a fixed table
//! - every other escape sequence is removed
//! - blank lines and the trailing newline are cleaned up
//! - logo output additionally carries styles across line breaks
//!
//! # Example
//!
//! ```
//! use neofetch_mc::format::{format_info, format_logo};
//!
//! let info = format_info("\x1b[32mHello\x1b[0m\nWorld\n");
//! assert_eq!(info, "\u{00A7}aHello\u{00A7}r\nWorld");
//!
//! let logo = format_logo("\x1b[33mFoo\nBar\n");
//! assert_eq!(logo, "\u{00A7}eFoo\u{00A7}r\n\u{00A7}eBar\u{00A7}r");
//! ```

mod carry;
mod cleanup;
mod escape;
mod style;

pub use carry::{carry_styles, strip_resets};
pub use cleanup::{remove_blank_lines, trim_trailing_newline};
pub use escape::{map_escapes, segments, strip_escapes, Segment};
pub use style::{last_target_token, translate, StyleCode, TARGET_MARKER, TARGET_RESET};

/// Separator placed between the logo and the info block.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Shared pipeline: map, strip, drop blank lines, trim the final newline.
pub fn transcode(raw: &str) -> String {
    let mapped = map_escapes(raw);
    let stripped = strip_escapes(&mapped);
    let compact = remove_blank_lines(&stripped);
    trim_trailing_newline(&compact).to_owned()
}

/// Transcode logo output.
///
/// Embedded resets are dropped, each line inherits the previous line's last
/// style and every line ends with a reset.
pub fn format_logo(raw: &str) -> String {
    let transcoded = transcode(raw);
    carry_styles(&strip_resets(&transcoded))
}

/// Transcode info output. Lines are left independent.
pub fn format_info(raw: &str) -> String {
    transcode(raw)
}

/// Join formatted logo and info into the final message.
pub fn combine(logo: &str, info: &str) -> String {
    let mut output = String::with_capacity(logo.len() + SECTION_SEPARATOR.len() + info.len());
    output.push_str(logo);
    output.push_str(SECTION_SEPARATOR);
    output.push_str(info);
    output
}
