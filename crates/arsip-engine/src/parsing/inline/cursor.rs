/// A byte cursor over one line of inline content.
///
/// Every delimiter the inline grammar knows is ASCII, so positions the
/// parser slices at (start, end, or next to a delimiter) are always char
/// boundaries even though the cursor steps one byte at a time.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes().get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes. No bounds check; `eof` stays true past the end.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances until `byte` is under the cursor or input ends.
    /// Returns true if `byte` was found.
    pub fn bump_until(&mut self, byte: u8) -> bool {
        while let Some(b) = self.peek() {
            if b == byte {
                return true;
            }
            self.i += 1;
        }
        false
    }

    /// Slice of the input between two byte positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}
