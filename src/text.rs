//! Read-only text buffer access.
//!
//! The engine never owns the editor's text. It reads through [`TextBuffer`],
//! which exposes the character sequence plus line/offset lookups. [`SourceText`]
//! is the in-memory implementation used by the CLI and the tests.

use std::ops::Range;

/// Immutable view of the host text buffer.
///
/// Offsets are byte offsets. Line numbers are 0-based. Out-of-range queries
/// clamp to the buffer bounds instead of failing.
pub trait TextBuffer {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn line_count(&self) -> usize;

    /// Line containing `offset`. Offsets past the end map to the last line.
    fn line_of_offset(&self, offset: usize) -> usize;

    fn line_start(&self, line: usize) -> usize;

    /// End of the line's content, excluding the line terminator.
    fn line_end(&self, line: usize) -> usize;

    /// Text in `range`, or an empty string when the range is not a valid slice.
    fn slice(&self, range: Range<usize>) -> &str;
}

/// Owned text with a precomputed line index.
#[derive(Debug, Clone, Default)]
pub struct SourceText {
    text: String,
    line_starts: Vec<usize>,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = Vec::with_capacity(text.len() / 32 + 1);
        line_starts.push(0);
        line_starts.extend(memchr::memchr_iter(b'\n', text.as_bytes()).map(|i| i + 1));
        Self { text, line_starts }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Converts a 0-based (line, column) pair into a byte offset, where the
    /// column counts characters. Columns past the line end clamp to it.
    pub fn offset_at(&self, line: usize, column: usize) -> Option<usize> {
        if line >= self.line_starts.len() {
            return None;
        }
        let start = self.line_start(line);
        let end = self.line_end(line);
        let offset = self.text[start..end]
            .char_indices()
            .nth(column)
            .map(|(i, _)| start + i)
            .unwrap_or(end);
        Some(offset)
    }
}

impl TextBuffer for SourceText {
    fn len(&self) -> usize {
        self.text.len()
    }

    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line_of_offset(&self, offset: usize) -> usize {
        let offset = offset.min(self.text.len());
        self.line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    fn line_start(&self, line: usize) -> usize {
        self.line_starts
            .get(line)
            .copied()
            .unwrap_or(self.text.len())
    }

    fn line_end(&self, line: usize) -> usize {
        let Some(&next) = self.line_starts.get(line + 1) else {
            return self.text.len();
        };
        // next - 1 is the '\n'; drop a preceding '\r' as well
        let mut end = next - 1;
        if end > self.line_start(line) && self.text.as_bytes()[end - 1] == b'\r' {
            end -= 1;
        }
        end
    }

    fn slice(&self, range: Range<usize>) -> &str {
        self.text.get(range).unwrap_or("")
    }
}
