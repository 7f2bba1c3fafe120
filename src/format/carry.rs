//! Per-line style carry for block-structured output.
//!
//! A terminal keeps the active style until it is changed. The host resets
//! styling at every line break, so the last style of each line has to be
//! repeated at the start of the next one.

use super::style::{last_target_token, TARGET_RESET};

/// Remove every reset code from `input`.
pub fn strip_resets(input: &str) -> String {
    input.replace(TARGET_RESET, "")
}

/// Carry each line's last style onto the following line, then close every
/// line with a reset.
///
/// Lines are processed top to bottom and each one looks at its predecessor
/// as already rewritten, so a style keeps flowing down through lines that
/// set none of their own. Trailing empty lines are dropped; empty input
/// still produces one (reset-only) line.
pub fn carry_styles(input: &str) -> String {
    let mut lines: Vec<String> = input.split('\n').map(str::to_owned).collect();
    while lines.len() > 1 && lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }

    for i in 1..lines.len() {
        if let Some(token) = last_target_token(&lines[i - 1]) {
            let token = token.to_owned();
            lines[i].insert_str(0, &token);
        }
    }

    for line in &mut lines {
        line.push_str(TARGET_RESET);
    }

    lines.join("\n")
}
