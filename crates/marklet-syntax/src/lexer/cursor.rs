/// A cursor for left-to-right scanning with byte position tracking.
///
/// The position always sits on a UTF-8 character boundary: single-step
/// advances move by a whole character, multi-byte advances are only made
/// over text the caller has already matched.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    s: &'a str,
    /// Current byte index into `s`.
    i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The unscanned remainder of the input.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Advances past the current character, returning its width in bytes.
    pub fn bump_char(&mut self) -> Option<usize> {
        let width = utf8_width(self.peek()?);
        self.i = (self.i + width).min(self.s.len());
        Some(width)
    }

    /// Advances by `n` bytes. The caller must land on a character boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}

/// Width of the UTF-8 sequence introduced by `lead`.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        _ => 4,
    }
}
