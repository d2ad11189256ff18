/// Byte-position cursor over source text used by both lexers.
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    pub(crate) fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    pub(crate) fn bump_str(&mut self, prefix: &str) {
        debug_assert!(self.starts_with(prefix));
        self.pos += prefix.len();
    }

    pub(crate) fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    /// Consume up to (not including) the next line break.
    pub(crate) fn eat_to_line_end(&mut self) {
        self.eat_while(|ch| ch != '\n' && ch != '\r');
    }

    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.text[start..self.pos]
    }

    /// Whether only horizontal whitespace lies between the last line break and `pos`.
    pub(crate) fn at_line_start(&self) -> bool {
        self.text[..self.pos]
            .chars()
            .rev()
            .take_while(|ch| *ch != '\n' && *ch != '\r')
            .all(|ch| ch == ' ' || ch == '\t')
    }
}

/// Horizontal whitespace (line breaks are separate tokens).
pub(crate) fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace() && ch != '\n' && ch != '\r'
}

pub(crate) fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

pub(crate) fn is_identifier_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
