// Token and Region public API types

use serde::Serialize;

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A piece of the input between two separators (whitespace or hyphen).
///
/// Consecutive separators produce empty tokens, so `index` counts every
/// split position and two tokens are adjacent exactly when their indices
/// differ by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Position of this token in the split sequence.
    pub index: usize,

    /// The raw text of this token, as it appears in the input.
    pub text: String,

    /// Lookup key: lowercased, accent-folded, punctuation removed. In fuzzy
    /// mode this holds the corrected word.
    pub key: String,

    /// Byte offset of the first character in the input.
    pub start: usize,

    /// Byte offset one past the last character in the input.
    pub end: usize,
}

impl Token {
    /// Create a new token, deriving its key from the raw text.
    pub fn new(index: usize, text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let key = crate::character::lookup_key(&text);
        let end = start + text.len();
        Self {
            index,
            text,
            key,
            start,
            end,
        }
    }

    /// Returns `true` if the token has no usable characters.
    pub fn is_blank(&self) -> bool {
        self.key.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A span of the input recognized as one number phrase.
///
/// `start` and `end` are byte offsets into the original input; `text` is
/// the space-joined sequence of normalized words the span contains and is
/// what the grammar parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Normalized words of the region joined by single spaces.
    pub text: String,

    /// Byte offset where the region starts.
    pub start: usize,

    /// Byte offset one past the end of the region.
    pub end: usize,

    /// Whether a decimal separator is part of the region.
    pub point_reached: bool,
}

impl Region {
    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for a zero-length span.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The slice of `input` this region covers.
    ///
    /// Returns `None` if the offsets do not fit `input`.
    pub fn source<'a>(&self, input: &'a str) -> Option<&'a str> {
        input.get(self.start..self.end)
    }
}
