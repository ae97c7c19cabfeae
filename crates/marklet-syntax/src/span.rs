/// A byte range `[start, end)` into the source text.
///
/// Tokens and tree nodes store spans rather than copied text, so rendering a
/// large input never duplicates it: slicing the source with any span
/// reproduces the exact characters it covers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Creates a span covering `len` bytes from `start`.
    pub fn at(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    /// An empty span anchored at `offset`.
    pub fn empty(offset: usize) -> Self {
        Self::at(offset, 0)
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `source` with this span.
    ///
    /// Returns an empty string when the span does not fall on character
    /// boundaries inside `source`.
    pub fn text(self, source: &str) -> &str {
        source.get(self.start..self.end).unwrap_or("")
    }
}
