//! Canonical formatting of fixture documents.
//!
//! Formatting works on the lossless token stream of the document's syntax tree and
//! only ever changes whitespace: the significant tokens of the output are those of
//! the input, in the same order. Output is deterministic and idempotent.

mod basic;
mod csharp;
mod layout;

use serde::{Deserialize, Serialize};

use crate::builders::to_document;
use crate::context::AnalyzerTestContext;
use crate::core::LanguageVariant;
use crate::syntax::SyntaxTree;
use crate::workspace::Document;

pub const MIN_INDENT_SIZE: usize = 1;
pub const MAX_INDENT_SIZE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewlineStyle {
    #[default]
    Lf,
    Crlf,
}

impl NewlineStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewlineStyle::Lf => "\n",
            NewlineStyle::Crlf => "\r\n",
        }
    }
}

/// Layout settings applied by the formatter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormattingOptions {
    /// Spaces per indentation level when not using tabs.
    pub indent_size: usize,
    pub use_tabs: bool,
    pub newline: NewlineStyle,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            indent_size: 4,
            use_tabs: false,
            newline: NewlineStyle::Lf,
        }
    }
}

impl FormattingOptions {
    pub fn with_indent_size(self, indent_size: usize) -> Self {
        Self {
            indent_size,
            ..self
        }
    }

    pub fn with_use_tabs(self, use_tabs: bool) -> Self {
        Self { use_tabs, ..self }
    }

    pub fn with_newline(self, newline: NewlineStyle) -> Self {
        Self { newline, ..self }
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(MIN_INDENT_SIZE..=MAX_INDENT_SIZE).contains(&self.indent_size) {
            return Err(format!(
                "indent_size must be between {} and {}, got {}",
                MIN_INDENT_SIZE, MAX_INDENT_SIZE, self.indent_size
            ));
        }
        Ok(())
    }

    /// Leading whitespace for an indentation `level`.
    pub fn indentation(&self, level: usize) -> String {
        if self.use_tabs {
            "\t".repeat(level)
        } else {
            " ".repeat(level * self.indent_size)
        }
    }
}

/// Format a document with its workspace's formatting options.
pub fn format_document(document: &Document) -> String {
    format_document_with(document, document.project().workspace().formatting_options())
}

pub fn format_document_with(document: &Document, options: &FormattingOptions) -> String {
    log::debug!("Formatting document '{}'", document.name());
    format_tree(document.syntax_tree(), options)
}

pub fn format_tree(tree: &SyntaxTree, options: &FormattingOptions) -> String {
    match tree.language() {
        LanguageVariant::CSharp => csharp::format(tree, options),
        LanguageVariant::VisualBasic => basic::format(tree, options),
    }
}

/// Build a document for `code` from `context` and return its formatted text.
/// Empty code formats to the empty string.
pub fn format_source_code(code: &str, context: &AnalyzerTestContext) -> String {
    format_document(&to_document(code, context))
}

fn ends_with_newline(text: &str) -> bool {
    text.ends_with('\n') || text.ends_with('\r')
}
