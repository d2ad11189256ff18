use super::Document;
use crate::core::{
    Diagnostic, DiagnosticSeverity, LanguageVariant, ReferenceSet, ReportDiagnostic, TextSpan,
    ValidationMode,
};
use crate::options::CompileOptions;
use crate::syntax::{SyntaxToken, TokenKind};

/// Compilation view over a single document.
///
/// Collects the syntax diagnostics of the document plus the diagnostics implied by
/// the compile options, then filters and escalates warnings the way the options ask.
#[derive(Debug, Clone)]
pub struct Compilation {
    assembly_name: String,
    options: CompileOptions,
    references: ReferenceSet,
    diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    pub(crate) fn new(document: &Document) -> Self {
        let project = document.project();
        let options = project.compile_options().clone();
        let tree = document.syntax_tree();
        let tokens: Vec<&SyntaxToken> = tree
            .significant_tokens()
            .filter(|token| !token.kind.is_comment() && !token.is(TokenKind::Directive))
            .collect();

        let mut raw = tree.diagnostics().to_vec();
        raw.extend(entry_point_diagnostic(&tokens, &options, project.assembly_name()));
        raw.extend(unsafe_diagnostics(&tokens, &options));

        let mut diagnostics: Vec<Diagnostic> = raw
            .into_iter()
            .filter_map(|diagnostic| apply_options(diagnostic, &options))
            .collect();
        diagnostics.sort_by(|a, b| (a.span.start, &a.id).cmp(&(b.span.start, &b.id)));

        log::debug!(
            "Compiled '{}' with {} diagnostic(s)",
            project.assembly_name(),
            diagnostics.len()
        );

        Self {
            assembly_name: project.assembly_name().to_string(),
            options,
            references: project.references().clone(),
            diagnostics,
        }
    }

    pub fn assembly_name(&self) -> &str {
        &self.assembly_name
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn references(&self) -> &ReferenceSet {
        &self.references
    }

    /// Reported diagnostics, ordered by position.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Diagnostics `validation_mode` does not tolerate.
    pub fn unexpected_diagnostics(&self, validation_mode: ValidationMode) -> Vec<Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diagnostic| !validation_mode.tolerates(diagnostic))
            .cloned()
            .collect()
    }
}

/// Apply warning level and the general diagnostic option. `None` drops the diagnostic.
fn apply_options(diagnostic: Diagnostic, options: &CompileOptions) -> Option<Diagnostic> {
    if diagnostic.severity != DiagnosticSeverity::Warning {
        return Some(diagnostic);
    }
    if let Some(level) = options.warning_level {
        if level == 0 || diagnostic.warning_level > level {
            return None;
        }
    }
    match options.general_diagnostic_option {
        ReportDiagnostic::Error => Some(diagnostic.escalated()),
        ReportDiagnostic::Suppress => None,
        _ => Some(diagnostic),
    }
}

fn entry_point_diagnostic(
    tokens: &[&SyntaxToken],
    options: &CompileOptions,
    assembly_name: &str,
) -> Option<Diagnostic> {
    if !options.output_kind.requires_entry_point() || has_entry_point(tokens, options.language) {
        return None;
    }
    let span = TextSpan::new(0, 0);
    Some(match options.language {
        LanguageVariant::CSharp => Diagnostic::error(
            "CS5001",
            "Program does not contain a static 'Main' method suitable for an entry point",
            span,
        ),
        LanguageVariant::VisualBasic => Diagnostic::error(
            "BC30420",
            format!("'Sub Main' was not found in '{}'.", assembly_name),
            span,
        ),
    })
}

fn has_entry_point(tokens: &[&SyntaxToken], language: LanguageVariant) -> bool {
    tokens.iter().enumerate().any(|(index, token)| match language {
        LanguageVariant::CSharp => {
            token.is(TokenKind::Identifier)
                && token.text == "Main"
                && tokens.get(index + 1).is_some_and(|next| next.is_punct('('))
                && tokens[index.saturating_sub(4)..index]
                    .iter()
                    .any(|prev| prev.is(TokenKind::Keyword) && prev.text == "static")
        }
        LanguageVariant::VisualBasic => {
            token.is_word_ignore_case("Main")
                && index > 0
                && tokens[index - 1].is_word_ignore_case("Sub")
        }
    })
}

fn unsafe_diagnostics(tokens: &[&SyntaxToken], options: &CompileOptions) -> Vec<Diagnostic> {
    if options.language != LanguageVariant::CSharp || options.allow_unsafe {
        return Vec::new();
    }
    tokens
        .iter()
        .filter(|token| token.is(TokenKind::Keyword) && token.text == "unsafe")
        .map(|token| {
            Diagnostic::error(
                "CS0227",
                "Unsafe code may only appear if compiling with /unsafe",
                token.span,
            )
        })
        .collect()
}
