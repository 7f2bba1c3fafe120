//! Style codes and the ANSI → formatting-code table.

/// Marker character that introduces a formatting code (`§`).
pub const TARGET_MARKER: char = '\u{00A7}';

/// Formatting-code reset token.
pub const TARGET_RESET: &str = "\u{00A7}r";

/// A single formatting directive shared by both markups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCode {
    Reset,
    Italic,
    Underline,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl StyleCode {
    /// Every supported style, in table order.
    pub const ALL: [StyleCode; 11] = [
        StyleCode::Reset,
        StyleCode::Italic,
        StyleCode::Underline,
        StyleCode::Black,
        StyleCode::Red,
        StyleCode::Green,
        StyleCode::Yellow,
        StyleCode::Blue,
        StyleCode::Magenta,
        StyleCode::Cyan,
        StyleCode::White,
    ];

    /// The exact SGR sequence a terminal program emits for this style.
    pub const fn ansi(self) -> &'static str {
        match self {
            StyleCode::Reset => "\x1b[0m",
            StyleCode::Italic => "\x1b[3m",
            StyleCode::Underline => "\x1b[4m",
            StyleCode::Black => "\x1b[30m",
            StyleCode::Red => "\x1b[31m",
            StyleCode::Green => "\x1b[32m",
            StyleCode::Yellow => "\x1b[33m",
            StyleCode::Blue => "\x1b[34m",
            StyleCode::Magenta => "\x1b[35m",
            StyleCode::Cyan => "\x1b[36m",
            StyleCode::White => "\x1b[37m",
        }
    }

    /// The formatting code the host renders for this style.
    ///
    /// See <https://minecraft.wiki/w/Formatting_codes>.
    pub const fn target(self) -> &'static str {
        match self {
            StyleCode::Reset => TARGET_RESET,
            StyleCode::Italic => "\u{00A7}o",
            StyleCode::Underline => "\u{00A7}n",
            StyleCode::Black => "\u{00A7}0",
            StyleCode::Red => "\u{00A7}c",
            StyleCode::Green => "\u{00A7}a",
            StyleCode::Yellow => "\u{00A7}e",
            StyleCode::Blue => "\u{00A7}9",
            StyleCode::Magenta => "\u{00A7}5",
            StyleCode::Cyan => "\u{00A7}b",
            StyleCode::White => "\u{00A7}f",
        }
    }

    /// Look up a style by its exact SGR text. No normalization is applied,
    /// so `"\x1b[00m"` is not a reset.
    pub fn from_ansi(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.ansi() == token)
    }

    /// Look up a style by its formatting code.
    pub fn from_target(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.target() == token)
    }
}

/// Translate an SGR sequence into its formatting code, if it has one.
pub fn translate(token: &str) -> Option<&'static str> {
    StyleCode::from_ansi(token).map(StyleCode::target)
}

/// Whether `c` may follow [`TARGET_MARKER`] in a formatting code.
pub fn is_target_code(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Find the last formatting code in `line`, in scan order.
pub fn last_target_token(line: &str) -> Option<&str> {
    let mut last = None;
    let mut chars = line.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c != TARGET_MARKER {
            continue;
        }
        if let Some(&(code_at, code)) = chars.peek() {
            if is_target_code(code) {
                last = Some(&line[start..code_at + code.len_utf8()]);
                chars.next();
            }
        }
    }

    last
}
