//! Immutable description of one analyzer test fixture.
//!
//! An [`AnalyzerTestContext`] is created from the mandatory inputs and then refined
//! through a chain of transforms. Every transform validates its own argument,
//! copies all other fields and returns a new value; the receiver is never touched.
//!
//! ```rust,ignore
//! use analyzer_fixtures::context::AnalyzerTestContext;
//! use analyzer_fixtures::core::{AnalyzerOptions, LanguageVariant, OutputKind};
//!
//! let context = AnalyzerTestContext::new("class C{}", [], LanguageVariant::CSharp, AnalyzerOptions::empty())?
//!     .in_file_named("Program.cs")?
//!     .with_output_kind(OutputKind::ConsoleApplication)
//!     .compile_with_warnings_as_error(true);
//! ```

mod fix_provider;

pub use fix_provider::{FixProviderTestContext, TextComparisonMode};

use crate::core::{
    AnalyzerOptions, DiagnosticsCaptureMode, DocumentationMode, LanguageVariant, MetadataReference,
    OutputKind, ReferenceSet, TextSpan, ValidationMode,
};
use crate::errors::{ensure_not_blank, FixtureError, Result};
use crate::references::default_references;

pub const DEFAULT_FILE_NAME: &str = "TestDocument";
pub const DEFAULT_ASSEMBLY_NAME: &str = "TestProject";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerTestContext {
    source_code: String,
    source_spans: im::Vector<TextSpan>,
    language: LanguageVariant,
    file_name: String,
    assembly_name: String,
    references: ReferenceSet,
    documentation_mode: DocumentationMode,
    output_kind: OutputKind,
    compiler_warning_level: Option<u32>,
    warnings_as_error: bool,
    validation_mode: ValidationMode,
    diagnostics_capture_mode: DiagnosticsCaptureMode,
    options: AnalyzerOptions,
}

impl AnalyzerTestContext {
    /// Create a context from the mandatory inputs, with defaults for everything else.
    ///
    /// Fails with `InvalidArgument` for blank source or spans outside the source,
    /// and with `EnvironmentResolution` when the default reference set cannot be
    /// resolved on this host.
    pub fn new(
        source_code: impl Into<String>,
        source_spans: impl IntoIterator<Item = TextSpan>,
        language: LanguageVariant,
        options: AnalyzerOptions,
    ) -> Result<Self> {
        let source_code = source_code.into();
        let source_spans = validate_code(&source_code, source_spans)?;

        Ok(Self {
            source_code,
            source_spans,
            language,
            file_name: DEFAULT_FILE_NAME.to_string(),
            assembly_name: DEFAULT_ASSEMBLY_NAME.to_string(),
            references: default_references()?,
            documentation_mode: DocumentationMode::default(),
            output_kind: OutputKind::default(),
            compiler_warning_level: None,
            warnings_as_error: false,
            validation_mode: ValidationMode::default(),
            diagnostics_capture_mode: DiagnosticsCaptureMode::default(),
            options,
        })
    }

    /// Like [`AnalyzerTestContext::new`], taking the language by name (`"C#"`, `"Visual Basic"`).
    pub fn from_language_name(
        source_code: impl Into<String>,
        source_spans: impl IntoIterator<Item = TextSpan>,
        language_name: &str,
        options: AnalyzerOptions,
    ) -> Result<Self> {
        let language = LanguageVariant::from_name(language_name)?;
        Self::new(source_code, source_spans, language, options)
    }

    pub fn source_code(&self) -> &str {
        &self.source_code
    }

    pub fn source_spans(&self) -> &im::Vector<TextSpan> {
        &self.source_spans
    }

    pub fn language(&self) -> LanguageVariant {
        self.language
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn assembly_name(&self) -> &str {
        &self.assembly_name
    }

    pub fn references(&self) -> &ReferenceSet {
        &self.references
    }

    pub fn documentation_mode(&self) -> DocumentationMode {
        self.documentation_mode
    }

    pub fn output_kind(&self) -> OutputKind {
        self.output_kind
    }

    pub fn compiler_warning_level(&self) -> Option<u32> {
        self.compiler_warning_level
    }

    pub fn warnings_as_error(&self) -> bool {
        self.warnings_as_error
    }

    pub fn validation_mode(&self) -> ValidationMode {
        self.validation_mode
    }

    pub fn diagnostics_capture_mode(&self) -> DiagnosticsCaptureMode {
        self.diagnostics_capture_mode
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    pub fn with_code(
        &self,
        source_code: impl Into<String>,
        source_spans: impl IntoIterator<Item = TextSpan>,
    ) -> Result<Self> {
        let source_code = source_code.into();
        let source_spans = validate_code(&source_code, source_spans)?;
        Ok(Self {
            source_code,
            source_spans,
            ..self.clone()
        })
    }

    pub fn in_file_named(&self, file_name: impl Into<String>) -> Result<Self> {
        let file_name = file_name.into();
        ensure_not_blank(&file_name, "file_name")?;
        Ok(Self {
            file_name,
            ..self.clone()
        })
    }

    pub fn in_assembly_named(&self, assembly_name: impl Into<String>) -> Result<Self> {
        let assembly_name = assembly_name.into();
        ensure_not_blank(&assembly_name, "assembly_name")?;
        Ok(Self {
            assembly_name,
            ..self.clone()
        })
    }

    /// Replace the whole reference set. Duplicate entries collapse.
    pub fn with_references(&self, references: impl IntoIterator<Item = MetadataReference>) -> Self {
        Self {
            references: references.into_iter().collect(),
            ..self.clone()
        }
    }

    pub fn with_documentation_mode(&self, documentation_mode: DocumentationMode) -> Self {
        Self {
            documentation_mode,
            ..self.clone()
        }
    }

    pub fn with_output_kind(&self, output_kind: OutputKind) -> Self {
        Self {
            output_kind,
            ..self.clone()
        }
    }

    pub fn compile_at_warning_level(&self, warning_level: u32) -> Self {
        Self {
            compiler_warning_level: Some(warning_level),
            ..self.clone()
        }
    }

    pub fn compile_with_warnings_as_error(&self, warnings_as_error: bool) -> Self {
        Self {
            warnings_as_error,
            ..self.clone()
        }
    }

    pub fn in_validation_mode(&self, validation_mode: ValidationMode) -> Self {
        Self {
            validation_mode,
            ..self.clone()
        }
    }

    pub fn allowing_diagnostics_outside_source_tree(&self) -> Self {
        Self {
            diagnostics_capture_mode: DiagnosticsCaptureMode::AllowOutsideSourceTree,
            ..self.clone()
        }
    }

    pub fn with_options(&self, options: AnalyzerOptions) -> Self {
        Self {
            options,
            ..self.clone()
        }
    }
}

fn validate_code(
    source_code: &str,
    source_spans: impl IntoIterator<Item = TextSpan>,
) -> Result<im::Vector<TextSpan>> {
    let spans: im::Vector<TextSpan> = source_spans.into_iter().collect();
    let out_of_bounds = |span: &&TextSpan| {
        span.start
            .checked_add(span.length)
            .is_none_or(|end| end > source_code.len())
    };
    if let Some(outside) = spans.iter().find(out_of_bounds) {
        return Err(FixtureError::invalid_argument(
            "source_spans",
            format!(
                "span {} lies outside the source text of length {}.",
                outside,
                source_code.len()
            ),
        ));
    }
    Ok(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> AnalyzerTestContext {
        AnalyzerTestContext::new(
            "class C{}",
            [TextSpan::new(6, 1)],
            LanguageVariant::CSharp,
            AnalyzerOptions::empty(),
        )
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let context = context();
        assert_eq!(context.file_name(), DEFAULT_FILE_NAME);
        assert_eq!(context.assembly_name(), DEFAULT_ASSEMBLY_NAME);
        assert_eq!(context.references(), &default_references().unwrap());
        assert_eq!(context.documentation_mode(), DocumentationMode::None);
        assert_eq!(context.output_kind(), OutputKind::DynamicallyLinkedLibrary);
        assert_eq!(context.compiler_warning_level(), None);
        assert!(!context.warnings_as_error());
        assert_eq!(context.validation_mode(), ValidationMode::AllowCompileWarnings);
        assert_eq!(
            context.diagnostics_capture_mode(),
            DiagnosticsCaptureMode::RequireInSourceTree
        );
    }

    #[test]
    fn test_empty_source_is_accepted() {
        let empty = AnalyzerTestContext::new("", [], LanguageVariant::CSharp, AnalyzerOptions::empty())
            .unwrap();
        assert_eq!(empty.source_code(), "");

        let blank = context().with_code("  \n", [TextSpan::new(3, 0)]).unwrap();
        assert_eq!(blank.source_code(), "  \n");
    }

    #[test]
    fn test_overflowing_span_is_rejected() {
        let err = AnalyzerTestContext::new(
            "class C{}",
            [TextSpan::new(1, usize::MAX)],
            LanguageVariant::CSharp,
            AnalyzerOptions::empty(),
        )
        .unwrap_err();
        assert_eq!(err.parameter(), Some("source_spans"));
        assert!(err.to_string().contains("outside the source text"));
    }

    #[test]
    fn test_span_outside_source_is_rejected() {
        let err = context().with_code("class C{}", [TextSpan::new(8, 5)]).unwrap_err();
        assert_eq!(err.parameter(), Some("source_spans"));
    }

    #[test]
    fn test_span_order_is_kept() {
        let spans = [TextSpan::new(6, 1), TextSpan::new(0, 5)];
        let context = context().with_code("class C{}", spans).unwrap();
        assert_eq!(context.source_spans().iter().copied().collect::<Vec<_>>(), spans);
    }

    #[test]
    fn test_blank_names_are_rejected() {
        assert_eq!(
            context().in_file_named("").unwrap_err().parameter(),
            Some("file_name")
        );
        assert_eq!(
            context().in_assembly_named("\t").unwrap_err().parameter(),
            Some("assembly_name")
        );
    }

    #[test]
    fn test_unknown_language_name_is_rejected() {
        let err = AnalyzerTestContext::from_language_name(
            "class C{}",
            [],
            " ",
            AnalyzerOptions::empty(),
        )
        .unwrap_err();
        assert_eq!(err.parameter(), Some("language_name"));
    }
}
