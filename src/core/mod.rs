//! Value types shared by the configuration model and the document pipeline.

pub mod analyzer_options;
pub mod diagnostics;
pub mod language;
pub mod modes;
pub mod references;
pub mod text;

pub use analyzer_options::AnalyzerOptions;
pub use diagnostics::{Diagnostic, DiagnosticSeverity};
pub use language::{LanguageVariant, LanguageVersion};
pub use modes::{
    DiagnosticsCaptureMode, DocumentationMode, OutputKind, ReportDiagnostic, ValidationMode,
};
pub use references::{MetadataReference, ReferenceSet};
pub use text::TextSpan;
