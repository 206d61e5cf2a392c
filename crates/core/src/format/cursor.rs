/// A forward-only scanner over a string slice.
///
/// Both the format compiler and the line tokenizer drive one of these. All
/// operations are total: reads past the end are clamped rather than erroring,
/// and [`Cursor::get_upto`] treats a missing delimiter as "consume to end of
/// input". That permissiveness is what keeps the line tokenizer resilient to
/// truncated or unusual lines.
///
/// Positions are byte offsets and always land on UTF-8 char boundaries:
/// `skip` advances by whole characters and `get_upto` only stops at
/// delimiter positions, which are themselves boundaries.
#[derive(Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `src`.
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// True while the cursor has not reached the end of the input.
    pub fn has_more(&self) -> bool {
        self.pos < self.src.len()
    }

    /// The character at the current position, or `None` at end of input.
    /// Does not advance.
    pub fn looking_at(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    /// Advance past the current character. A no-op at end of input.
    pub fn skip(&mut self) {
        if let Some(c) = self.looking_at() {
            self.pos += c.len_utf8();
        }
    }

    /// Advance past zero or more consecutive space characters.
    pub fn skip_spaces(&mut self) {
        while self.looking_at() == Some(' ') {
            self.skip();
        }
    }

    /// Read everything from the current position up to (not including) the
    /// next occurrence of `delimiter`, advancing to the delimiter's position.
    ///
    /// If the delimiter never occurs, the rest of the input is returned and
    /// the cursor lands at the end. The delimiter itself is never consumed.
    pub fn get_upto(&mut self, delimiter: char) -> &'a str {
        let rest = &self.src[self.pos..];
        match rest.find(delimiter) {
            Some(i) => {
                self.pos += i;
                &rest[..i]
            }
            None => {
                self.pos = self.src.len();
                rest
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_upto_stops_at_delimiter() {
        let mut cur = Cursor::new("abc def");
        assert_eq!(cur.get_upto(' '), "abc");
        // Delimiter itself is not consumed.
        assert_eq!(cur.looking_at(), Some(' '));
    }

    #[test]
    fn get_upto_missing_delimiter_consumes_to_end() {
        let mut cur = Cursor::new("no-delimiter-here");
        assert_eq!(cur.get_upto('"'), "no-delimiter-here");
        assert!(!cur.has_more());
        assert_eq!(cur.looking_at(), None);
    }

    #[test]
    fn skip_is_clamped_at_end() {
        let mut cur = Cursor::new("x");
        cur.skip();
        cur.skip();
        cur.skip();
        assert!(!cur.has_more());
    }

    #[test]
    fn skip_spaces_handles_runs_and_none() {
        let mut cur = Cursor::new("   a b");
        cur.skip_spaces();
        assert_eq!(cur.looking_at(), Some('a'));
        cur.skip();
        cur.skip_spaces();
        assert_eq!(cur.looking_at(), Some('b'));
    }

    #[test]
    fn multibyte_input_advances_by_char() {
        let mut cur = Cursor::new("é x");
        cur.skip();
        assert_eq!(cur.looking_at(), Some(' '));
        cur.skip_spaces();
        assert_eq!(cur.get_upto(' '), "x");
    }
}
