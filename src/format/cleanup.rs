//! Whitespace cleanup for captured report output.

/// Remove every line made only of spaces and tabs, terminator included.
///
/// A line counts as terminated by `\n` or `\r\n`. A trailing line with no
/// terminator is always kept.
pub fn remove_blank_lines(input: &str) -> String {
    input
        .split_inclusive('\n')
        .filter(|line| !is_blank_line(line))
        .collect()
}

fn is_blank_line(line: &str) -> bool {
    let Some(body) = line.strip_suffix('\n') else {
        return false;
    };
    let body = body.strip_suffix('\r').unwrap_or(body);
    body.chars().all(|c| c == ' ' || c == '\t')
}

/// Drop the final newline left behind by the report binary.
///
/// Empty input, or input not ending in `\n`, is returned unchanged.
pub fn trim_trailing_newline(input: &str) -> &str {
    input.strip_suffix('\n').unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_removed() {
        assert_eq!(remove_blank_lines("a\n\nb\n"), "a\nb\n");
        assert_eq!(remove_blank_lines("a\n  \t \nb"), "a\nb");
        assert_eq!(remove_blank_lines("\n\n\n"), "");
    }

    #[test]
    fn test_crlf_blank_lines_removed() {
        assert_eq!(remove_blank_lines("a\r\n \r\nb\r\n"), "a\r\nb\r\n");
    }

    #[test]
    fn test_lines_with_content_kept() {
        let input = "  x  \n\t.\n";
        assert_eq!(remove_blank_lines(input), input);
    }

    #[test]
    fn test_unterminated_blank_tail_kept() {
        assert_eq!(remove_blank_lines("a\n   "), "a\n   ");
    }

    #[test]
    fn test_other_whitespace_is_content() {
        // Only spaces and tabs make a line blank.
        assert_eq!(remove_blank_lines("\u{00a0}\nx"), "\u{00a0}\nx");
        assert_eq!(remove_blank_lines("\r\r\nx"), "\r\r\nx");
    }

    #[test]
    fn test_trim_trailing_newline() {
        assert_eq!(trim_trailing_newline("abc\n"), "abc");
        assert_eq!(trim_trailing_newline("abc\n\n"), "abc\n");
    }

    #[test]
    fn test_trim_empty_is_noop() {
        assert_eq!(trim_trailing_newline(""), "");
    }

    #[test]
    fn test_trim_without_newline_is_noop() {
        assert_eq!(trim_trailing_newline("abc."), "abc.");
    }
}
