//! Immutable fixture configurations for analyzer tests, and the machinery that
//! turns them into documents and canonically formatted source.
//!
//! ```rust,ignore
//! use analyzer_fixtures::{build, format_document, AnalyzerOptions, AnalyzerTestContext, LanguageVariant};
//!
//! let context = AnalyzerTestContext::new("class C{}", [], LanguageVariant::CSharp, AnalyzerOptions::empty())?;
//! assert_eq!(format_document(&build(&context)), "class C\n{\n}");
//! ```

// Export modules for library usage
pub mod builders;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod options;
pub mod references;
pub mod syntax;
pub mod testkit;
pub mod workspace;

// Re-export commonly used types
pub use crate::core::{
    AnalyzerOptions, Diagnostic, DiagnosticSeverity, DiagnosticsCaptureMode, DocumentationMode,
    LanguageVariant, LanguageVersion, MetadataReference, OutputKind, ReferenceSet,
    ReportDiagnostic, TextSpan, ValidationMode,
};

pub use crate::builders::{build, to_document};
pub use crate::context::{AnalyzerTestContext, FixProviderTestContext, TextComparisonMode};
pub use crate::errors::{FixtureError, Result};
pub use crate::formatting::{format_document, format_source_code, FormattingOptions, NewlineStyle};
pub use crate::options::{resolve_compile_options, resolve_parse_options, CompileOptions, ParseOptions};
pub use crate::references::default_references;
pub use crate::workspace::{Compilation, Document, Project, Workspace};
