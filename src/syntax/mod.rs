//! Lossless syntax trees for fixture documents.
//!
//! Each variant has a lexer that splits the source into tokens, trivia included,
//! so the concatenated token texts always reproduce the input exactly. Lexical
//! problems are recorded as diagnostics on the tree; parsing never fails.

mod basic;
mod csharp;
mod cursor;
mod documentation;

use std::sync::Arc;

use crate::core::{Diagnostic, LanguageVariant, TextSpan};
use crate::options::ParseOptions;

pub use basic::is_keyword as is_basic_keyword;
pub use csharp::is_keyword as is_csharp_keyword;
pub(crate) use basic::OPERATORS as BASIC_OPERATORS;
pub(crate) use csharp::OPERATORS as CSHARP_OPERATORS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Horizontal whitespace.
    Whitespace,
    /// One line break (`\n`, `\r\n` or `\r`).
    Newline,
    Identifier,
    Keyword,
    Number,
    String,
    Char,
    Comment,
    DocComment,
    /// Preprocessor directive, from `#` to the end of the line.
    Directive,
    Punctuation(char),
    Operator(&'static str),
    Unknown,
}

impl TokenKind {
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Newline)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::DocComment)
    }

    /// Identifiers, keywords and literals: tokens that need a space between them.
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Keyword
                | TokenKind::Number
                | TokenKind::String
                | TokenKind::Char
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntaxToken {
    pub kind: TokenKind,
    pub text: String,
    pub span: TextSpan,
}

impl SyntaxToken {
    pub(crate) fn new(kind: TokenKind, text: &str, start: usize) -> Self {
        Self {
            kind,
            text: text.to_string(),
            span: TextSpan::new(start, text.len()),
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_punct(&self, ch: char) -> bool {
        self.kind == TokenKind::Punctuation(ch)
    }

    pub fn is_operator(&self, op: &str) -> bool {
        matches!(self.kind, TokenKind::Operator(o) if o == op)
    }

    /// Keyword or identifier text comparison, ignoring case.
    pub fn is_word_ignore_case(&self, word: &str) -> bool {
        matches!(self.kind, TokenKind::Keyword | TokenKind::Identifier)
            && self.text.eq_ignore_ascii_case(word)
    }
}

/// Output of a lexer run.
pub(crate) struct Lexed {
    pub(crate) tokens: Vec<SyntaxToken>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

/// Parsed representation of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    file_path: String,
    options: ParseOptions,
    text: Arc<str>,
    tokens: Vec<SyntaxToken>,
    diagnostics: Vec<Diagnostic>,
}

impl SyntaxTree {
    pub fn parse(text: Arc<str>, file_path: impl Into<String>, options: &ParseOptions) -> Self {
        let lexed = match options.language {
            LanguageVariant::CSharp => csharp::lex(&text, options.documentation_mode),
            LanguageVariant::VisualBasic => basic::lex(&text, options.documentation_mode),
        };
        Self {
            file_path: file_path.into(),
            options: options.clone(),
            text,
            tokens: lexed.tokens,
            diagnostics: lexed.diagnostics,
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn language(&self) -> LanguageVariant {
        self.options.language
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[SyntaxToken] {
        &self.tokens
    }

    /// Tokens other than whitespace and line breaks.
    pub fn significant_tokens(&self) -> impl Iterator<Item = &SyntaxToken> + '_ {
        self.tokens.iter().filter(|token| !token.kind.is_trivia())
    }

    pub fn documentation_comments(&self) -> impl Iterator<Item = &SyntaxToken> + '_ {
        self.tokens.iter().filter(|token| token.is(TokenKind::DocComment))
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Reassemble the source from the tokens.
    pub fn to_full_string(&self) -> String {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }
}
