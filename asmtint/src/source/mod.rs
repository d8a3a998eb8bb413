///
/// Source Slices
///
/// Views into the listing text that avoid copying it. Every token produced
/// by the lexer is a (position, length) pair into the input buffer; the
/// text itself is only materialized when rendered or classified.
///
/// Design decisions:
/// - Offsets are byte-based, not character-based (faster, works with UTF-8)
/// - Slice equality and hashing look at the text only, never at offsets, so
///   a slice of the listing can be matched against keyword tables directly
///

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A view of `length` bytes starting at `position` inside `text`.
///
/// Always satisfies `position + length <= text.len()` and lies on char
/// boundaries; both constructors check this.
#[derive(Clone, Copy)]
pub struct StringSlice<'a> {
    text: &'a str,
    position: usize,
    length: usize,
}

impl<'a> StringSlice<'a> {
    /// A slice covering the whole of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            position: 0,
            length: text.len(),
        }
    }

    /// A slice of `text`, or `None` when the range is out of bounds or
    /// splits a UTF-8 sequence.
    pub fn from_range(text: &'a str, position: usize, length: usize) -> Option<Self> {
        let end = position.checked_add(length)?;
        text.get(position..end)?;
        Some(Self { text, position, length })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub fn as_str(&self) -> &'a str {
        &self.text[self.position..self.position + self.length]
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.as_str().as_bytes()
    }

    /// The slice with surrounding `"` removed, if both are present.
    pub fn trim_quotes(&self) -> &'a str {
        let s = self.as_str();
        let s = s.strip_prefix('"').unwrap_or(s);
        s.strip_suffix('"').unwrap_or(s)
    }
}

impl PartialEq for StringSlice<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for StringSlice<'_> {}

impl PartialEq<str> for StringSlice<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for StringSlice<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Hash for StringSlice<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Borrow<str> for StringSlice<'_> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for StringSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.as_str(), self.position)
    }
}

impl fmt::Display for StringSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
