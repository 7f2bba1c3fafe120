//! Escape-sequence scanning, mapping and stripping.
//!
//! The input is scanned once with a VTE parser. Every control sequence the
//! parser dispatches is recorded as a byte span of the source, so escapes
//! keep their exact text and everything between them stays untouched.

use std::ops::Range;

use vte::{Params, Parser, Perform};

use super::style;

const ESC: u8 = 0x1b;

/// A piece of scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain text between escape sequences.
    Text(&'a str),
    /// One complete escape sequence, as it appeared in the input.
    Escape(&'a str),
}

impl<'a> Segment<'a> {
    /// The source text of this segment.
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text(s) | Segment::Escape(s) => s,
        }
    }
}

/// Split `input` into plain runs and escape sequences.
///
/// Concatenating the returned segments reproduces `input` exactly.
pub fn segments(input: &str) -> Vec<Segment<'_>> {
    let spans = escape_spans(input);
    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans {
        if span.start > cursor {
            segments.push(Segment::Text(&input[cursor..span.start]));
        }
        segments.push(Segment::Escape(&input[span.clone()]));
        cursor = span.end;
    }

    if cursor < input.len() {
        segments.push(Segment::Text(&input[cursor..]));
    }

    segments
}

/// Replace every supported SGR sequence with its formatting code.
///
/// Unsupported sequences are left in place; [`strip_escapes`] removes them.
pub fn map_escapes(input: &str) -> String {
    let mut output = String::with_capacity(input.len());

    for segment in segments(input) {
        match segment {
            Segment::Escape(seq) => match style::translate(seq) {
                Some(code) => output.push_str(code),
                None => output.push_str(seq),
            },
            Segment::Text(text) => output.push_str(text),
        }
    }

    output
}

/// Remove every escape sequence, keeping the text around them.
pub fn strip_escapes(input: &str) -> String {
    segments(input)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Text(text) => Some(text),
            Segment::Escape(_) => None,
        })
        .collect()
}

/// Byte spans of every escape sequence in `input`, in order.
fn escape_spans(input: &str) -> Vec<Range<usize>> {
    let mut collector = SpanCollector::default();
    let mut parser = Parser::new();

    // One byte at a time so each dispatch can be pinned to its final byte.
    for (offset, byte) in input.bytes().enumerate() {
        collector.offset = offset;
        collector.byte = byte;
        parser.advance(&mut collector, &[byte]);

        if byte == ESC && collector.pending.is_none() {
            collector.pending = Some(offset);
        }
    }

    collector.spans
}

/// VTE performer that records where each dispatched sequence starts and ends.
#[derive(Default)]
struct SpanCollector {
    /// Offset of the byte currently being fed to the parser.
    offset: usize,
    /// The byte currently being fed to the parser.
    byte: u8,
    /// Start of the sequence in progress, if any.
    pending: Option<usize>,
    spans: Vec<Range<usize>>,
}

impl SpanCollector {
    fn close(&mut self) {
        let Some(start) = self.pending.take() else {
            return;
        };

        // An ESC that terminates a string sequence also opens the next one.
        let end = if self.byte == ESC {
            self.offset
        } else {
            self.offset + 1
        };

        if end > start {
            self.spans.push(start..end);
        }
    }
}

impl Perform for SpanCollector {
    fn print(&mut self, _c: char) {
        // Ground state: anything pending was abandoned and stays as text.
        self.pending = None;
    }

    fn execute(&mut self, _byte: u8) {}

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {}

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {
        self.close();
    }

    fn osc_dispatch(&mut self, _params: &[&[u8]], _bell_terminated: bool) {
        self.close();
    }

    fn csi_dispatch(
        &mut self,
        _params: &Params,
        _intermediates: &[u8],
        _ignore: bool,
        _action: char,
    ) {
        self.close();
    }

    fn esc_dispatch(&mut self, _intermediates: &[u8], _ignore: bool, _byte: u8) {
        self.close();
    }
}
