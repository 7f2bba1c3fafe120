//! End-to-end transcoding tests.
//!
//! These run realistic neofetch-style output through the public API.

use neofetch_mc::format::{strip_escapes, transcode, TARGET_RESET};
use neofetch_mc::report::SENTINEL_MISSING;
use neofetch_mc::{
    format_info, format_logo, NeofetchError, Report, ReportMode, ReportSource, StaticSource,
    StyleCode,
};

/// Logo output as neofetch prints it: cursor hiding, colours, no resets
/// between lines and a trailing blank line.
const LOGO: &str = "\x1b[?25l\x1b[?7l\x1b[1m\x1b[34m       /\\\n      /  \\\n     /\x1b[36m\\   \\\n\x1b[0m\n\x1b[?25h\x1b[?7h";

/// Info output with bold labels, which have no formatting code.
const INFO: &str = "\x1b[?25l\x1b[?7l\x1b[0m\x1b[1m\x1b[34muser\x1b[0m@\x1b[1m\x1b[34mhost\x1b[0m \n\x1b[0m-------\x1b[0m \n\x1b[0m\x1b[1m\x1b[34mOS\x1b[0m\x1b[0m:\x1b[0m Arch Linux \n\n\x1b[?25h\x1b[?7h";

// ============================================================================
// Shared Pipeline
// ============================================================================

#[test]
fn test_each_style_transcodes_to_its_code() {
    for code in StyleCode::ALL {
        assert_eq!(transcode(code.ansi()), code.target());
    }
}

#[test]
fn test_unsupported_escape_removed_text_kept() {
    let raw = "before \x1b[38;5;208mafter\x1b[K end";
    assert_eq!(transcode(raw), "before after end");
}

#[test]
fn test_whitespace_only_lines_removed() {
    let raw = "one\n \t \ntwo\n\n";
    assert_eq!(transcode(raw), "one\ntwo");
}

#[test]
fn test_strip_twice_is_noop() {
    let once = strip_escapes(INFO);
    assert_eq!(strip_escapes(&once), once);
}

#[test]
fn test_info_scenario() {
    assert_eq!(
        format_info("\x1b[32mHello\x1b[0m\nWorld\n"),
        "\u{00A7}aHello\u{00A7}r\nWorld"
    );
}

#[test]
fn test_logo_scenario() {
    let output = format_logo("\x1b[33mFoo\nBar\n");
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines, ["\u{00A7}eFoo\u{00A7}r", "\u{00A7}eBar\u{00A7}r"]);
}

// ============================================================================
// Realistic Output
// ============================================================================

#[test]
fn test_neofetch_logo() {
    let output = format_logo(LOGO);
    let lines: Vec<_> = output.lines().collect();

    assert_eq!(
        lines,
        [
            "\u{00A7}9       /\\\u{00A7}r",
            "\u{00A7}9      /  \\\u{00A7}r",
            "\u{00A7}9     /\u{00A7}b\\   \\\u{00A7}r",
        ]
    );
    assert!(lines.iter().all(|line| line.ends_with(TARGET_RESET)));
}

#[test]
fn test_neofetch_info() {
    let output = format_info(INFO);
    let lines: Vec<_> = output.lines().collect();

    assert_eq!(
        lines,
        [
            "\u{00A7}r\u{00A7}9user\u{00A7}r@\u{00A7}9host\u{00A7}r ",
            "\u{00A7}r-------\u{00A7}r ",
            "\u{00A7}r\u{00A7}9OS\u{00A7}r\u{00A7}r:\u{00A7}r Arch Linux ",
        ]
    );
}

// ============================================================================
// Report Assembly
// ============================================================================

struct UnavailableSource;

impl ReportSource for UnavailableSource {
    async fn capture(&self, _mode: ReportMode) -> neofetch_mc::Result<String> {
        Err(NeofetchError::ProviderUnavailable {
            program: "neofetch".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        })
    }
}

#[tokio::test]
async fn test_report_layout() {
    let text = Report::new(StaticSource::new(LOGO, INFO)).render().await;
    let (logo, info) = text.split_once("\n\n").unwrap();

    assert_eq!(logo, format_logo(LOGO));
    assert_eq!(info, format_info(INFO));
}

#[tokio::test]
async fn test_unavailable_provider_yields_sentinel() {
    let text = Report::new(UnavailableSource).render().await;
    let (logo, info) = text.split_once("\n\n").unwrap();

    assert_eq!(logo, format!("{SENTINEL_MISSING}{TARGET_RESET}"));
    assert_eq!(info, SENTINEL_MISSING);
}
