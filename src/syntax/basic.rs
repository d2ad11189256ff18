//! Lexer for the line-oriented variant. Keywords are case-insensitive.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::cursor::{is_identifier_continue, is_identifier_start, is_whitespace, Cursor};
use super::documentation::check_documentation;
use super::{Lexed, SyntaxToken, TokenKind};
use crate::core::{Diagnostic, DocumentationMode, TextSpan};

static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "addhandler", "addressof", "alias", "and", "andalso", "as", "boolean", "byref", "byte",
        "byval", "call", "case", "catch", "cbool", "cbyte", "cchar", "cdate", "cdbl", "cdec",
        "char", "cint", "class", "clng", "cobj", "const", "continue", "csbyte", "cshort", "csng",
        "cstr", "ctype", "cuint", "culng", "cushort", "date", "decimal", "declare", "default",
        "delegate", "dim", "directcast", "do", "double", "each", "else", "elseif", "end",
        "endif", "enum", "erase", "error", "event", "exit", "false", "finally", "for", "friend",
        "function", "get", "gettype", "getxmlnamespace", "global", "gosub", "goto", "handles",
        "if", "implements", "imports", "in", "inherits", "integer", "interface", "is", "isnot",
        "let", "lib", "like", "long", "loop", "me", "mod", "module", "mustinherit",
        "mustoverride", "mybase", "myclass", "namespace", "narrowing", "new", "next", "not",
        "nothing", "notinheritable", "notoverridable", "object", "of", "on", "operator",
        "option", "optional", "or", "orelse", "overloads", "overridable", "overrides",
        "paramarray", "partial", "private", "property", "protected", "public", "raiseevent",
        "readonly", "redim", "rem", "removehandler", "resume", "return", "sbyte", "select",
        "set", "shadows", "shared", "short", "single", "static", "step", "stop", "string",
        "structure", "sub", "synclock", "then", "throw", "to", "true", "try", "trycast",
        "typeof", "uinteger", "ulong", "ushort", "using", "variant", "wend", "when", "while",
        "widening", "with", "withevents", "writeonly", "xor",
    ]
    .into_iter()
    .collect()
});

pub(crate) const OPERATORS: &[&str] = &[
    "<<=", ">>=", "<>", "<=", ">=", ":=", "+=", "-=", "*=", "/=", "\\=", "&=", "^=", "<<", ">>",
];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word.to_ascii_lowercase().as_str())
}

pub(crate) fn lex(text: &str, documentation_mode: DocumentationMode) -> Lexed {
    let mut lexer = Lexer {
        cursor: Cursor::new(text),
        tokens: Vec::new(),
        diagnostics: Vec::new(),
        documentation_mode,
    };
    lexer.run();

    let mut diagnostics = lexer.diagnostics;
    if documentation_mode == DocumentationMode::Diagnose {
        diagnostics.extend(check_documentation(&lexer.tokens, "'''", "BC42304", 1));
    }
    diagnostics.sort_by_key(|d| d.span.start);

    Lexed {
        tokens: lexer.tokens,
        diagnostics,
    }
}

struct Lexer<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<SyntaxToken>,
    diagnostics: Vec<Diagnostic>,
    documentation_mode: DocumentationMode,
}

impl<'a> Lexer<'a> {
    fn run(&mut self) {
        while let Some(ch) = self.cursor.peek() {
            let start = self.cursor.pos();
            let kind = self.scan(ch, start);
            let text = self.cursor.slice_from(start);
            self.tokens.push(SyntaxToken::new(kind, text, start));
        }
    }

    fn scan(&mut self, ch: char, start: usize) -> TokenKind {
        match ch {
            '\r' | '\n' => {
                if self.cursor.starts_with("\r\n") {
                    self.cursor.bump_str("\r\n");
                } else {
                    self.cursor.bump();
                }
                TokenKind::Newline
            }
            c if is_whitespace(c) => {
                self.cursor.eat_while(is_whitespace);
                TokenKind::Whitespace
            }
            '\'' => {
                let is_doc = self.cursor.starts_with("'''") && !self.cursor.starts_with("''''");
                self.cursor.eat_to_line_end();
                if is_doc && self.documentation_mode.recognizes_documentation() {
                    TokenKind::DocComment
                } else {
                    TokenKind::Comment
                }
            }
            '#' if self.cursor.at_line_start() => {
                self.cursor.eat_to_line_end();
                TokenKind::Directive
            }
            '#' if self.date_literal_len().is_some() => {
                let len = self.date_literal_len().unwrap_or(1);
                for _ in 0..len {
                    self.cursor.bump();
                }
                TokenKind::Number
            }
            '"' => {
                self.string(start);
                TokenKind::String
            }
            '&' if self
                .cursor
                .peek_nth(1)
                .is_some_and(|c| matches!(c.to_ascii_uppercase(), 'H' | 'O' | 'B'))
                && self.cursor.peek_nth(2).is_some_and(|c| c.is_ascii_hexdigit()) =>
            {
                self.cursor.bump();
                self.cursor.bump();
                self.cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
                TokenKind::Number
            }
            c if is_identifier_start(c) => {
                self.cursor.eat_while(is_identifier_continue);
                // Type characters such as `name$` belong to the identifier.
                if matches!(self.cursor.peek(), Some('$' | '%')) {
                    self.cursor.bump();
                }
                let word = self.cursor.slice_from(start);
                if word.eq_ignore_ascii_case("rem") {
                    self.cursor.eat_to_line_end();
                    TokenKind::Comment
                } else if is_keyword(word) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                }
            }
            c if c.is_ascii_digit() => {
                self.number();
                TokenKind::Number
            }
            _ => self.operator_or_punctuation(ch),
        }
    }

    /// Length in chars of a `#…#` literal closed on the current line.
    fn date_literal_len(&self) -> Option<usize> {
        let body = self.cursor.rest().get(1..)?;
        let line = body.split(['\n', '\r']).next()?;
        let close = line.find('#')?;
        let inner = &line[..close];
        let looks_like_date = !inner.trim().is_empty()
            && inner
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | ':' | ' '));
        looks_like_date.then(|| inner.chars().count() + 2)
    }

    fn string(&mut self, start: usize) {
        self.cursor.bump();
        loop {
            match self.cursor.peek() {
                None | Some('\n') | Some('\r') => {
                    let span = TextSpan::from_bounds(start, self.cursor.pos());
                    self.diagnostics.push(Diagnostic::error(
                        "BC30648",
                        "String constants must end with a double quote.",
                        span,
                    ));
                    return;
                }
                Some('"') => {
                    self.cursor.bump();
                    if self.cursor.peek() == Some('"') {
                        self.cursor.bump();
                        continue;
                    }
                    // Character literal suffix.
                    if matches!(self.cursor.peek(), Some('c' | 'C'))
                        && !self.cursor.peek_nth(1).is_some_and(is_identifier_continue)
                    {
                        self.cursor.bump();
                    }
                    return;
                }
                Some(_) => {
                    self.cursor.bump();
                }
            }
        }
    }

    fn number(&mut self) {
        loop {
            self.cursor
                .eat_while(|ch| ch.is_ascii_alphanumeric() || ch == '_');
            let fraction = self.cursor.peek() == Some('.')
                && self.cursor.peek_nth(1).is_some_and(|ch| ch.is_ascii_digit());
            if !fraction {
                break;
            }
            self.cursor.bump();
        }
        if matches!(self.cursor.peek(), Some('!' | '#' | '@' | '%')) {
            self.cursor.bump();
        }
    }

    fn operator_or_punctuation(&mut self, ch: char) -> TokenKind {
        if let Some(op) = OPERATORS.iter().find(|op| self.cursor.starts_with(op)) {
            self.cursor.bump_str(op);
            return TokenKind::Operator(*op);
        }
        self.cursor.bump();
        if ch.is_ascii_punctuation() {
            TokenKind::Punctuation(ch)
        } else {
            TokenKind::Unknown
        }
    }
}
