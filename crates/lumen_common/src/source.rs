//! Source text with line-start indexing for fast line/column lookup.

use crate::span::Span;

/// A named source text loaded for one simulation or lint run.
///
/// Stores the content along with precomputed line-start offsets for
/// efficient line/column resolution during diagnostic rendering.
#[derive(Clone, Debug)]
pub struct SourceText {
    /// Display name (a file path or a synthetic name for in-memory sources).
    pub name: String,
    /// The full text content.
    pub content: String,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<u32>,
}

impl SourceText {
    /// Creates a new `SourceText` with precomputed line starts.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let line_starts = compute_line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Converts a byte offset into 1-indexed (line, column) coordinates.
    pub fn line_col(&self, byte_offset: u32) -> (u32, u32) {
        let line_idx = match self.line_starts.binary_search(&byte_offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line = (line_idx as u32) + 1;
        let col = byte_offset - self.line_starts[line_idx] + 1;
        (line, col)
    }

    /// Returns the text of the line containing `byte_offset`, without the
    /// line terminator.
    pub fn line_text(&self, byte_offset: u32) -> &str {
        let offset = (byte_offset as usize).min(self.content.len());
        let start = self.content[..offset].rfind('\n').map_or(0, |pos| pos + 1);
        let end = self.content[offset..]
            .find('\n')
            .map_or(self.content.len(), |pos| offset + pos);
        self.content[start..end].trim_end_matches('\r')
    }

    /// Returns the source text covered by a span.
    pub fn snippet(&self, span: Span) -> &str {
        &self.content[span.start as usize..span.end as usize]
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

/// Computes the byte offsets of each line start in the given content.
fn compute_line_starts(content: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push((i + 1) as u32);
        }
    }
    starts
}
