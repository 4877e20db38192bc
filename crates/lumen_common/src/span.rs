//! Byte ranges into a source file.

use serde::{Deserialize, Serialize};

/// A half-open byte range `start..end` into the source.
///
/// The expression tokenizer works on the expression text alone, so its
/// spans start at zero; [`Span::shifted`] rebases them onto the file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Span {
    /// First byte.
    pub start: u32,
    /// One past the last byte.
    pub end: u32,
}

impl Span {
    /// Placeholder for diagnostics with nowhere to point.
    pub const DUMMY: Span = Span {
        start: u32::MAX,
        end: u32::MAX,
    };

    /// `start..end`.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// `start..end` from slice offsets.
    pub fn from_range(start: usize, end: usize) -> Self {
        Self::new(start as u32, end as u32)
    }

    /// Rebases an expression-relative span onto the file. [`Span::DUMMY`]
    /// stays dummy.
    pub fn shifted(self, base: u32) -> Span {
        if self.is_dummy() {
            return self;
        }
        Span::new(self.start + base, self.end + base)
    }

    /// Width in bytes.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// `true` for a zero-width span.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` for [`Span::DUMMY`].
    pub fn is_dummy(&self) -> bool {
        *self == Span::DUMMY
    }
}
