//! Source spans.

use std::ops::Range;

/// A byte range into markup source text.
///
/// Nodes built programmatically (rather than parsed) carry an empty span at
/// offset zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span covering `range`.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Start offset of the span.
    pub fn start(&self) -> usize {
        self.start
    }

    /// End offset of the span (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    pub fn union(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_accessors() {
        let span = Span::new(3..10);
        assert_eq!(span.start(), 3);
        assert_eq!(span.end(), 10);
        assert_eq!(span.len(), 7);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_inverted_range_is_empty() {
        #[allow(clippy::reversed_empty_ranges)]
        let span = Span::new(8..2);
        assert!(span.is_empty());
        assert_eq!(span.start(), 8);
    }

    #[test]
    fn test_span_union() {
        let a = Span::new(5..10);
        let b = Span::new(2..7);
        assert_eq!(a.union(b), Span::new(2..10));
    }
}
