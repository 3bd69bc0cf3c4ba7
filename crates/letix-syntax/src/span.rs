//! Source location tracking for tokens and AST nodes.
//!
//! Every token and AST node carries a [`Span`] recording where it came
//! from in the source text. Spans are byte-offset based, with the line
//! and column of the start position kept for human-readable reporting.

use std::fmt;

/// A half-open byte range into the source, plus the line/column of its
/// start (both 1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first character (0-indexed).
    pub start: usize,

    /// Byte offset one past the last character.
    pub end: usize,

    /// Line of the start position (1-indexed).
    pub line: usize,

    /// Column of the start position (1-indexed, in bytes).
    pub col: usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: usize, col: usize) -> Self {
        Self { start, end, line, col }
    }

    /// Creates an empty span at a single position.
    #[must_use]
    pub const fn point(at: usize, line: usize, col: usize) -> Self {
        Self::new(at, at, line, col)
    }

    /// A span for synthesized nodes with no source position.
    #[must_use]
    pub const fn dummy() -> Self {
        Self::new(0, 0, 1, 1)
    }

    /// Merges two spans into one covering both.
    ///
    /// The result starts at the earlier span's start and ends at the
    /// later span's end.
    ///
    /// ```
    /// use letix_syntax::span::Span;
    ///
    /// let left = Span::new(0, 3, 1, 1);
    /// let right = Span::new(8, 11, 1, 9);
    /// let merged = Span::merge(left, right);
    /// assert_eq!((merged.start, merged.end), (0, 11));
    /// ```
    #[must_use]
    pub fn merge(a: Span, b: Span) -> Span {
        let (first, last) = if a.start <= b.start { (a, b) } else { (b, a) };
        Span {
            start: first.start,
            end: last.end.max(first.end),
            line: first.line,
            col: first.col,
        }
    }

    /// Number of bytes covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// True if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Anything that knows its own source location.
pub trait Spanned {
    /// Returns the source span of this item.
    fn span(&self) -> Span;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_ordered() {
        let merged = Span::merge(Span::new(0, 5, 1, 1), Span::new(10, 15, 2, 3));
        assert_eq!(merged, Span::new(0, 15, 1, 1));
    }

    #[test]
    fn test_merge_reversed() {
        let merged = Span::merge(Span::new(10, 15, 2, 3), Span::new(0, 5, 1, 1));
        assert_eq!(merged, Span::new(0, 15, 1, 1));
    }

    #[test]
    fn test_merge_nested() {
        // One span contained in the other keeps the outer extent.
        let merged = Span::merge(Span::new(0, 20, 1, 1), Span::new(5, 8, 1, 6));
        assert_eq!(merged, Span::new(0, 20, 1, 1));
    }

    #[test]
    fn test_point_is_empty() {
        let span = Span::point(7, 1, 8);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::new(4, 9, 2, 5).to_string(), "2:5");
    }
}
