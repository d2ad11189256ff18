//! Assemble an ephemeral workspace, project and document from a fixture context.
//!
//! The builder is a pure function of the context (plus the ambient formatting
//! configuration held by the workspace): equal contexts give equal documents.

use crate::context::AnalyzerTestContext;
use crate::options;
use crate::workspace::{Document, Workspace};

/// Build the document described by `context`.
pub fn build(context: &AnalyzerTestContext) -> Document {
    to_document(context.source_code(), context)
}

/// Build a document from `code`, taking every other setting from `context`.
pub fn to_document(code: &str, context: &AnalyzerTestContext) -> Document {
    let (parse_options, compile_options) = options::resolve(context);

    log::debug!(
        "Building {} document '{}' in project '{}' with {} reference(s)",
        context.language(),
        context.file_name(),
        context.assembly_name(),
        context.references().len()
    );

    Workspace::ephemeral()
        .add_project(
            context.assembly_name(),
            context.assembly_name(),
            context.language(),
        )
        .with_parse_options(parse_options)
        .with_compile_options(compile_options)
        .add_references(context.references().iter().cloned())
        .add_document(context.file_name(), code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AnalyzerOptions, DocumentationMode, LanguageVariant, OutputKind};
    use crate::references::default_references;

    fn context() -> AnalyzerTestContext {
        AnalyzerTestContext::new(
            "class C{}",
            [],
            LanguageVariant::CSharp,
            AnalyzerOptions::empty(),
        )
        .unwrap()
    }

    #[test]
    fn test_document_carries_context_settings() {
        let context = context()
            .in_file_named("Program.cs")
            .unwrap()
            .in_assembly_named("Fixtures")
            .unwrap()
            .with_documentation_mode(DocumentationMode::Diagnose)
            .with_output_kind(OutputKind::ConsoleApplication);
        let document = build(&context);

        assert_eq!(document.name(), "Program.cs");
        assert_eq!(document.text(), "class C{}");
        assert_eq!(document.project().name(), "Fixtures");
        assert_eq!(document.project().assembly_name(), "Fixtures");
        assert_eq!(document.language(), LanguageVariant::CSharp);
        assert_eq!(
            document.project().parse_options().documentation_mode,
            DocumentationMode::Diagnose
        );
        assert_eq!(
            document.project().compile_options().output_kind,
            OutputKind::ConsoleApplication
        );
        assert_eq!(document.project().references(), &default_references().unwrap());
    }

    #[test]
    fn test_to_document_replaces_code_only() {
        let context = context();
        let document = to_document("class D{}", &context);
        assert_eq!(document.text(), "class D{}");
        assert_eq!(document.name(), context.file_name());
    }

    #[test]
    fn test_equal_contexts_build_equal_documents() {
        assert_eq!(build(&context()), build(&context()));
    }
}
