//! Lexer for the brace-delimited variant.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::cursor::{is_identifier_continue, is_identifier_start, is_whitespace, Cursor};
use super::documentation::check_documentation;
use super::{Lexed, SyntaxToken, TokenKind};
use crate::core::{Diagnostic, DocumentationMode, TextSpan};

static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed",
        "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw",
        "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using",
        "virtual", "void", "volatile", "while",
    ]
    .into_iter()
    .collect()
});

/// Multi-character operators, longest first. `>>` is deliberately absent so that
/// nested generic closers stay separate tokens.
pub(crate) const OPERATORS: &[&str] = &[
    "<<=", ">>=", "??=", "...", "->", "=>", "==", "!=", "<=", ">=", "&&", "||", "++", "--",
    "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", "??", "?.", "::", "..",
];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
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
    diagnostics.extend(check_delimiters(&lexer.tokens));
    if documentation_mode == DocumentationMode::Diagnose {
        diagnostics.extend(check_documentation(&lexer.tokens, "///", "CS1570", 1));
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
            '/' if self.cursor.starts_with("//") => {
                let is_doc = self.cursor.starts_with("///") && !self.cursor.starts_with("////");
                self.cursor.eat_to_line_end();
                if is_doc && self.documentation_mode.recognizes_documentation() {
                    TokenKind::DocComment
                } else {
                    TokenKind::Comment
                }
            }
            '/' if self.cursor.starts_with("/*") => {
                self.block_comment(start);
                TokenKind::Comment
            }
            '#' => {
                let at_line_start = self.cursor.at_line_start();
                self.cursor.eat_to_line_end();
                if !at_line_start {
                    self.error(
                        "CS1040",
                        "Preprocessor directives must appear as the first non-whitespace character on a line",
                        start,
                    );
                }
                TokenKind::Directive
            }
            '"' => {
                self.cursor.bump();
                self.regular_string(start);
                TokenKind::String
            }
            '\'' => {
                self.char_literal(start);
                TokenKind::Char
            }
            '$' | '@' if self.string_prefix().is_some() => {
                let (prefix_len, verbatim, interpolated) = self.string_prefix().unwrap_or_default();
                for _ in 0..prefix_len {
                    self.cursor.bump();
                }
                match (verbatim, interpolated) {
                    (true, _) => self.verbatim_string(start, interpolated),
                    (false, true) => self.interpolated_string(start),
                    (false, false) => self.regular_string(start),
                }
                TokenKind::String
            }
            '@' if self.cursor.peek_nth(1).is_some_and(is_identifier_start) => {
                self.cursor.bump();
                self.cursor.eat_while(is_identifier_continue);
                TokenKind::Identifier
            }
            c if is_identifier_start(c) => {
                self.cursor.eat_while(is_identifier_continue);
                if is_keyword(self.cursor.slice_from(start)) {
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

    /// Length of a string prefix (`$`, `@`, `$@`, `@$`) followed by `"`, with its flags.
    fn string_prefix(&self) -> Option<(usize, bool, bool)> {
        let rest = self.cursor.rest();
        [("$@\"", 2, true, true), ("@$\"", 2, true, true), ("@\"", 1, true, false), ("$\"", 1, false, true)]
            .into_iter()
            .find(|(prefix, ..)| rest.starts_with(prefix))
            .map(|(_, len, verbatim, interpolated)| (len + 1, verbatim, interpolated))
    }

    fn block_comment(&mut self, start: usize) {
        self.cursor.bump_str("/*");
        match self.cursor.rest().find("*/") {
            Some(offset) => {
                let end = self.cursor.pos() + offset + 2;
                while self.cursor.pos() < end {
                    self.cursor.bump();
                }
            }
            None => {
                while self.cursor.bump().is_some() {}
                self.error("CS1035", "End-of-file found, '*/' expected", start);
            }
        }
    }

    /// Body of a `"…"` literal after the opening quote.
    fn regular_string(&mut self, start: usize) {
        loop {
            match self.cursor.peek() {
                None | Some('\n') | Some('\r') => {
                    self.error("CS1010", "Newline in constant", start);
                    return;
                }
                Some('\\') => {
                    self.cursor.bump();
                    if !matches!(self.cursor.peek(), Some('\n') | Some('\r') | None) {
                        self.cursor.bump();
                    }
                }
                Some('"') => {
                    self.cursor.bump();
                    return;
                }
                Some(_) => {
                    self.cursor.bump();
                }
            }
        }
    }

    /// Body of a verbatim literal; `""` is an escaped quote and line breaks are allowed.
    fn verbatim_string(&mut self, start: usize, interpolated: bool) {
        let mut depth = 0usize;
        loop {
            match self.cursor.peek() {
                None => {
                    self.error("CS1039", "Unterminated string literal", start);
                    return;
                }
                Some('"') if depth == 0 => {
                    self.cursor.bump();
                    if self.cursor.peek() == Some('"') {
                        self.cursor.bump();
                    } else {
                        return;
                    }
                }
                Some('{') if interpolated => {
                    self.cursor.bump();
                    if depth == 0 && self.cursor.peek() == Some('{') {
                        self.cursor.bump();
                    } else {
                        depth += 1;
                    }
                }
                Some('}') if interpolated && depth > 0 => {
                    self.cursor.bump();
                    depth -= 1;
                }
                Some('"') => {
                    let nested = self.cursor.pos();
                    self.cursor.bump();
                    self.regular_string(nested);
                }
                Some(_) => {
                    self.cursor.bump();
                }
            }
        }
    }

    /// Body of a `$"…"` literal; holes may contain nested strings.
    fn interpolated_string(&mut self, start: usize) {
        let mut depth = 0usize;
        loop {
            match self.cursor.peek() {
                None | Some('\n') | Some('\r') if depth == 0 => {
                    self.error("CS1010", "Newline in constant", start);
                    return;
                }
                None => {
                    self.error("CS1010", "Newline in constant", start);
                    return;
                }
                Some('\\') if depth == 0 => {
                    self.cursor.bump();
                    if !matches!(self.cursor.peek(), Some('\n') | Some('\r') | None) {
                        self.cursor.bump();
                    }
                }
                Some('"') if depth == 0 => {
                    self.cursor.bump();
                    return;
                }
                Some('"') => {
                    let nested = self.cursor.pos();
                    self.cursor.bump();
                    self.regular_string(nested);
                }
                Some('{') => {
                    self.cursor.bump();
                    if depth == 0 && self.cursor.peek() == Some('{') {
                        self.cursor.bump();
                    } else {
                        depth += 1;
                    }
                }
                Some('}') if depth > 0 => {
                    self.cursor.bump();
                    depth -= 1;
                }
                Some(_) => {
                    self.cursor.bump();
                }
            }
        }
    }

    fn char_literal(&mut self, start: usize) {
        self.cursor.bump();
        loop {
            match self.cursor.peek() {
                None | Some('\n') | Some('\r') => {
                    self.error("CS1010", "Newline in constant", start);
                    return;
                }
                Some('\\') => {
                    self.cursor.bump();
                    if !matches!(self.cursor.peek(), Some('\n') | Some('\r') | None) {
                        self.cursor.bump();
                    }
                }
                Some('\'') => {
                    self.cursor.bump();
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
                return;
            }
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

    fn error(&mut self, id: &str, message: &str, start: usize) {
        let span = TextSpan::from_bounds(start, self.cursor.pos());
        self.diagnostics.push(Diagnostic::error(id, message, span));
    }
}

/// Report unbalanced `{}`, `()` and `[]` pairs.
fn check_delimiters(tokens: &[SyntaxToken]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut open: Vec<&SyntaxToken> = Vec::new();

    for token in tokens {
        let TokenKind::Punctuation(ch) = token.kind else {
            continue;
        };
        match ch {
            '{' | '(' | '[' => open.push(token),
            '}' | ')' | ']' => {
                let expected = match ch {
                    '}' => '{',
                    ')' => '(',
                    _ => '[',
                };
                match open.last() {
                    Some(top) if top.is_punct(expected) => {
                        open.pop();
                    }
                    _ => diagnostics.push(Diagnostic::error(
                        "CS1519",
                        format!("Invalid token '{}'", ch),
                        token.span,
                    )),
                }
            }
            _ => {}
        }
    }

    for token in open {
        let (id, message) = match token.text.as_str() {
            "{" => ("CS1513", "} expected"),
            "(" => ("CS1026", ") expected"),
            _ => ("CS1003", "Syntax error, ']' expected"),
        };
        diagnostics.push(Diagnostic::error(id, message, token.span));
    }

    diagnostics
}
