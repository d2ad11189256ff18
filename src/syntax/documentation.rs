use super::{SyntaxToken, TokenKind};
use crate::core::{Diagnostic, TextSpan};

/// Check every run of adjacent documentation comments for balanced markup.
///
/// A run is a sequence of doc-comment tokens separated only by trivia. Each
/// malformed run yields one warning spanning the whole run.
pub(crate) fn check_documentation(
    tokens: &[SyntaxToken],
    prefix: &str,
    id: &str,
    warning_level: u32,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut run: Vec<&SyntaxToken> = Vec::new();

    let mut flush = |run: &mut Vec<&SyntaxToken>| {
        if let (Some(first), Some(last)) = (run.first(), run.last()) {
            let markup = run
                .iter()
                .map(|token| token.text.strip_prefix(prefix).unwrap_or(&token.text))
                .collect::<Vec<_>>()
                .join("\n");
            if !is_well_formed(&markup) {
                diagnostics.push(Diagnostic::warning(
                    id,
                    "XML comment has badly formed XML",
                    TextSpan::from_bounds(first.span.start, last.span.end()),
                    warning_level,
                ));
            }
        }
        run.clear();
    };

    for token in tokens {
        match token.kind {
            TokenKind::DocComment => run.push(token),
            TokenKind::Whitespace | TokenKind::Newline => {}
            _ => flush(&mut run),
        }
    }
    flush(&mut run);

    diagnostics
}

/// Whether every element opened in `markup` is closed in order.
pub(crate) fn is_well_formed(markup: &str) -> bool {
    let mut open: Vec<&str> = Vec::new();
    let mut rest = markup;

    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('>') else {
            return false;
        };
        let tag = after[..end].trim();
        rest = &after[end + 1..];

        if tag.starts_with('!') || tag.starts_with('?') || tag.ends_with('/') {
            continue;
        }
        if let Some(closing) = tag.strip_prefix('/') {
            if open.pop() != Some(tag_name(closing)) {
                return false;
            }
        } else {
            let name = tag_name(tag);
            if name.is_empty() {
                return false;
            }
            open.push(name);
        }
    }

    open.is_empty()
}

fn tag_name(tag: &str) -> &str {
    tag.trim()
        .split(|ch: char| ch.is_whitespace() || ch == '/')
        .next()
        .unwrap_or("")
}
