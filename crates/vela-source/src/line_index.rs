use crate::{TextRange, TextSize};

/// A line/column position, both 0-indexed.
///
/// `col` is the byte offset from the start of the line, which is also what
/// the LSP wire format expects for ASCII-clean Verilog sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets to line/column positions and back.
///
/// Expansion needs whole lines as often as it needs positions (the
/// renderer copies a line's indentation before emitting a fill-in), so the
/// index stores the byte range of every line up front, terminating newline
/// included, rather than only the start offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// One range per line, in order. The final line has no trailing
    /// newline and may be empty; empty text still has exactly one line.
    lines: Vec<TextRange>,
}

impl LineIndex {
    /// Build a `LineIndex` by scanning `text` for newlines.
    ///
    /// Lines split on `\n`; for CRLF input the `\r` counts as an ordinary
    /// byte in column math.
    pub fn new(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut start = 0u32;
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                #[allow(clippy::cast_possible_truncation)]
                let end = i as u32 + 1;
                lines.push(TextRange::new(TextSize::new(start), TextSize::new(end)));
                start = end;
            }
        }
        #[allow(clippy::cast_possible_truncation)]
        let len = text.len() as u32;
        lines.push(TextRange::new(TextSize::new(start), TextSize::new(len)));
        Self { lines }
    }

    // Index of the line containing `offset`. Offsets at a line's end
    // (its newline's far side) belong to the next line; offsets past the
    // end of text land on the last line.
    fn line_at(&self, offset: TextSize) -> usize {
        self.lines
            .partition_point(|line| line.end() <= offset)
            .min(self.lines.len() - 1)
    }

    /// Convert a byte offset to a line/column position.
    ///
    /// Offsets past the end of text clamp to the EOF position.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self.line_at(offset);
        let range = self.lines[line];
        let clamped = offset.min(range.end());
        LineCol {
            line: line as u32,
            col: u32::from(clamped) - u32::from(range.start()),
        }
    }

    /// Convert a line/column position back to a byte offset.
    ///
    /// Returns `None` if `line` is out of range or `col` is past the end
    /// of the line.
    pub fn offset(&self, lc: LineCol) -> Option<TextSize> {
        let line = *self.lines.get(lc.line as usize)?;
        let raw = u32::from(line.start()).checked_add(lc.col)?;
        let offset = TextSize::new(raw);
        (offset <= line.end()).then_some(offset)
    }

    /// Full byte range of the line containing `offset`, including the
    /// terminating newline if present. This is what the renderer reads a
    /// line's indentation from.
    pub fn line_range(&self, offset: TextSize) -> TextRange {
        self.lines[self.line_at(offset)]
    }

    /// Number of lines in the source text.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
