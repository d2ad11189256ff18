use super::FormattingOptions;
use crate::syntax::{SyntaxToken, TokenKind};

/// A significant token together with the trivia that preceded it in the source.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Item<'t> {
    pub(crate) token: &'t SyntaxToken,
    /// Line breaks between the previous significant token and this one.
    pub(crate) breaks: usize,
    /// Whether horizontal whitespace separated it from the previous token on the same line.
    pub(crate) spaced: bool,
}

pub(crate) fn collect_items(tokens: &[SyntaxToken]) -> Vec<Item<'_>> {
    let mut items = Vec::new();
    let mut breaks = 0;
    let mut spaced = false;

    for token in tokens {
        match token.kind {
            TokenKind::Newline => {
                breaks += 1;
                spaced = false;
            }
            TokenKind::Whitespace => spaced = true,
            _ => {
                items.push(Item {
                    token,
                    breaks,
                    spaced,
                });
                breaks = 0;
                spaced = false;
            }
        }
    }

    items
}

#[derive(Debug, Default)]
struct Line {
    text: String,
    /// Holds part of a token that spans lines; never trimmed or collapsed.
    verbatim: bool,
}

/// Accumulates formatted lines and applies the final whitespace cleanup.
pub(crate) struct LineWriter<'o> {
    options: &'o FormattingOptions,
    lines: Vec<Line>,
}

impl<'o> LineWriter<'o> {
    pub(crate) fn new(options: &'o FormattingOptions) -> Self {
        Self {
            options,
            lines: vec![Line::default()],
        }
    }

    /// End the current line, emit `breaks - 1` blank lines and start an indented line.
    pub(crate) fn break_lines(&mut self, breaks: usize, level: usize) {
        for _ in 1..breaks {
            self.lines.push(Line::default());
        }
        self.lines.push(Line {
            text: self.options.indentation(level),
            verbatim: false,
        });
    }

    /// Indent the current line, which must still be empty.
    pub(crate) fn indent(&mut self, level: usize) {
        let indentation = self.options.indentation(level);
        self.current().text.push_str(&indentation);
    }

    pub(crate) fn push_space(&mut self) {
        self.current().text.push(' ');
    }

    pub(crate) fn push_token(&mut self, text: &str) {
        let mut parts = text.split('\n');
        if let Some(first) = parts.next() {
            self.current().text.push_str(strip_cr(first));
        }
        for part in parts {
            self.current().verbatim = true;
            self.lines.push(Line {
                text: strip_cr(part).to_string(),
                verbatim: true,
            });
        }
    }

    /// Join the lines: trailing whitespace trimmed, leading and trailing blank lines
    /// dropped, runs of blank lines collapsed to one.
    pub(crate) fn finish(self, final_newline: bool) -> String {
        let mut out: Vec<String> = Vec::with_capacity(self.lines.len());
        let mut pending_blank = false;

        for line in self.lines {
            let text = if line.verbatim {
                line.text
            } else {
                line.text.trim_end().to_string()
            };
            if !line.verbatim && text.is_empty() {
                pending_blank = !out.is_empty();
                continue;
            }
            if pending_blank {
                out.push(String::new());
                pending_blank = false;
            }
            out.push(text);
        }

        let newline = self.options.newline.as_str();
        let mut result = out.join(newline);
        if final_newline && !result.is_empty() {
            result.push_str(newline);
        }
        result
    }

    fn current(&mut self) -> &mut Line {
        if self.lines.is_empty() {
            self.lines.push(Line::default());
        }
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }
}

fn strip_cr(text: &str) -> &str {
    text.strip_suffix('\r').unwrap_or(text)
}

/// Whether joining `prev` and `next` without a space would lex differently.
pub(crate) fn fuses(prev: &SyntaxToken, next: &SyntaxToken, operators: &[&str]) -> bool {
    let is_symbol =
        |token: &SyntaxToken| matches!(token.kind, TokenKind::Punctuation(_) | TokenKind::Operator(_));
    if !is_symbol(prev) || !is_symbol(next) {
        return false;
    }
    let joined = format!("{}{}", prev.text, next.text);
    joined.starts_with("//")
        || joined.starts_with("/*")
        || operators
            .iter()
            .any(|op| op.len() > prev.text.len() && joined.starts_with(op))
}
