//! Resolution of parse and compile options from a fixture configuration.
//!
//! Each language variant owns a baseline for both option kinds. Resolution starts
//! from that baseline and applies the configuration fields in a fixed order, so
//! the result depends only on the field values, never on the order in which a
//! context's transforms were called.

use serde::{Deserialize, Serialize};

use crate::context::AnalyzerTestContext;
use crate::core::{DocumentationMode, LanguageVariant, LanguageVersion, OutputKind, ReportDiagnostic};

/// Warning level the brace variant's compiler uses when none is requested.
pub const DEFAULT_WARNING_LEVEL: u32 = 4;

/// Kind of source text being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SourceCodeKind {
    #[default]
    Regular,
    Script,
}

/// Settings controlling how fixture source text is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParseOptions {
    pub language: LanguageVariant,
    pub language_version: LanguageVersion,
    pub documentation_mode: DocumentationMode,
    pub kind: SourceCodeKind,
}

impl ParseOptions {
    /// Baseline parse options for a variant: latest grammar, regular source,
    /// documentation comments ignored.
    pub fn baseline(language: LanguageVariant) -> Self {
        Self {
            language,
            language_version: LanguageVersion::Latest,
            documentation_mode: DocumentationMode::None,
            kind: SourceCodeKind::Regular,
        }
    }

    pub fn with_documentation_mode(self, documentation_mode: DocumentationMode) -> Self {
        Self {
            documentation_mode,
            ..self
        }
    }

    pub fn with_language_version(self, language_version: LanguageVersion) -> Self {
        Self {
            language_version,
            ..self
        }
    }

    pub fn with_kind(self, kind: SourceCodeKind) -> Self {
        Self { kind, ..self }
    }
}

/// Settings controlling how the fixture compilation reports diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompileOptions {
    pub language: LanguageVariant,
    pub output_kind: OutputKind,
    pub allow_unsafe: bool,
    /// `None` for variants without graduated warning levels.
    pub warning_level: Option<u32>,
    pub general_diagnostic_option: ReportDiagnostic,
}

impl CompileOptions {
    /// Baseline compile options for a variant.
    pub fn baseline(language: LanguageVariant) -> Self {
        match language {
            LanguageVariant::CSharp => Self {
                language,
                output_kind: OutputKind::DynamicallyLinkedLibrary,
                allow_unsafe: true,
                warning_level: Some(DEFAULT_WARNING_LEVEL),
                general_diagnostic_option: ReportDiagnostic::Default,
            },
            LanguageVariant::VisualBasic => Self {
                language,
                output_kind: OutputKind::DynamicallyLinkedLibrary,
                allow_unsafe: false,
                warning_level: None,
                general_diagnostic_option: ReportDiagnostic::Default,
            },
        }
    }

    pub fn with_output_kind(self, output_kind: OutputKind) -> Self {
        Self {
            output_kind,
            ..self
        }
    }

    /// Apply a warning level. No-op for variants without graduated levels.
    pub fn with_warning_level(self, warning_level: u32) -> Self {
        if !self.language.supports_warning_levels() {
            log::debug!(
                "Ignoring warning level {} for {}",
                warning_level,
                self.language
            );
            return self;
        }
        Self {
            warning_level: Some(warning_level),
            ..self
        }
    }

    pub fn with_general_diagnostic_option(self, option: ReportDiagnostic) -> Self {
        Self {
            general_diagnostic_option: option,
            ..self
        }
    }

    pub fn with_allow_unsafe(self, allow_unsafe: bool) -> Self {
        Self {
            allow_unsafe,
            ..self
        }
    }
}

/// Parse options for `language` with `documentation_mode` applied.
pub fn resolve_parse_options(
    documentation_mode: DocumentationMode,
    language: LanguageVariant,
) -> ParseOptions {
    ParseOptions::baseline(language).with_documentation_mode(documentation_mode)
}

/// Compile options for `language`, applying output kind, optional warning level
/// and the warnings-as-error policy on top of the variant baseline.
pub fn resolve_compile_options(
    language: LanguageVariant,
    output_kind: OutputKind,
    warning_level: Option<u32>,
    warnings_as_error: bool,
) -> CompileOptions {
    let options = CompileOptions::baseline(language).with_output_kind(output_kind);

    let options = match warning_level {
        Some(level) => options.with_warning_level(level),
        None => options,
    };

    if warnings_as_error {
        options.with_general_diagnostic_option(ReportDiagnostic::Error)
    } else {
        options
    }
}

/// Both option values for a fixture configuration.
pub fn resolve(context: &AnalyzerTestContext) -> (ParseOptions, CompileOptions) {
    (
        resolve_parse_options(context.documentation_mode(), context.language()),
        resolve_compile_options(
            context.language(),
            context.output_kind(),
            context.compiler_warning_level(),
            context.warnings_as_error(),
        ),
    )
}
