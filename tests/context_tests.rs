//! Integration tests for fixture configuration contexts.
//!
//! Covers construction defaults, transform immutability, argument validation and
//! reference set handling through the public API.

use analyzer_fixtures::context::{DEFAULT_ASSEMBLY_NAME, DEFAULT_FILE_NAME};
use analyzer_fixtures::testkit::{basic_context, csharp_context, init_test_logging};
use analyzer_fixtures::{
    assert_invalid_argument, assert_result_ok, default_references, AnalyzerOptions,
    AnalyzerTestContext, DocumentationMode, FixProviderTestContext, LanguageVariant,
    MetadataReference, OutputKind, TextComparisonMode, TextSpan, ValidationMode,
};
use pretty_assertions::assert_eq;

#[test]
fn test_new_context_uses_defaults() {
    init_test_logging();
    let context = csharp_context("class C{}");

    assert_eq!(context.source_code(), "class C{}");
    assert!(context.source_spans().is_empty());
    assert_eq!(context.file_name(), DEFAULT_FILE_NAME);
    assert_eq!(context.assembly_name(), DEFAULT_ASSEMBLY_NAME);
    assert_eq!(context.references(), &default_references().unwrap());
    assert_eq!(context.references().len(), 4);
    assert_eq!(context.output_kind(), OutputKind::DynamicallyLinkedLibrary);
    assert_eq!(context.validation_mode(), ValidationMode::AllowCompileWarnings);
    assert!(context.options().is_empty());
}

#[test]
fn test_from_language_name() {
    let context = assert_result_ok!(AnalyzerTestContext::from_language_name(
        "Class C\nEnd Class",
        [],
        "Visual Basic",
        AnalyzerOptions::empty(),
    ));
    assert_eq!(context.language(), LanguageVariant::VisualBasic);

    assert_invalid_argument!(
        AnalyzerTestContext::from_language_name("x", [], "Cobol", AnalyzerOptions::empty()),
        "language_name"
    );
    assert_invalid_argument!(
        AnalyzerTestContext::from_language_name("x", [], " ", AnalyzerOptions::empty()),
        "language_name"
    );
}

#[test]
fn test_transforms_leave_receiver_untouched() {
    let original = csharp_context("class C{}");
    let snapshot = original.clone();

    let _ = original.in_file_named("Program.cs").unwrap();
    let _ = original.in_assembly_named("Other").unwrap();
    let _ = original.with_code("class D{}", [TextSpan::new(0, 5)]).unwrap();
    let _ = original.with_references([MetadataReference::from_file("/lib/a.dll")]);
    let _ = original.with_documentation_mode(DocumentationMode::Diagnose);
    let _ = original.with_output_kind(OutputKind::ConsoleApplication);
    let _ = original.compile_at_warning_level(2);
    let _ = original.compile_with_warnings_as_error(true);
    let _ = original.in_validation_mode(ValidationMode::Strict);
    let _ = original.allowing_diagnostics_outside_source_tree();

    assert_eq!(original, snapshot);
}

#[test]
fn test_transform_changes_only_its_field() {
    let original = csharp_context("class C{}");
    let renamed = original.in_file_named("Program.cs").unwrap();

    assert_eq!(renamed.file_name(), "Program.cs");
    assert_eq!(renamed.source_code(), original.source_code());
    assert_eq!(renamed.assembly_name(), original.assembly_name());
    assert_eq!(renamed.references(), original.references());
    assert_eq!(renamed.output_kind(), original.output_kind());
}

#[test]
fn test_same_argument_transforms_are_idempotent() {
    let context = csharp_context("class C{}");

    let once = context.compile_at_warning_level(3);
    assert_eq!(once.compile_at_warning_level(3), once);

    let once = context.in_assembly_named("Fixtures").unwrap();
    assert_eq!(once.in_assembly_named("Fixtures").unwrap(), once);

    let once = context.with_documentation_mode(DocumentationMode::Parse);
    assert_eq!(once.with_documentation_mode(DocumentationMode::Parse), once);
}

#[test]
fn test_blank_required_fields_name_the_parameter() {
    let context = csharp_context("class C{}");

    assert_invalid_argument!(context.in_file_named(""), "file_name");
    assert_invalid_argument!(context.in_file_named(" \t"), "file_name");
    assert_invalid_argument!(context.in_assembly_named("\n"), "assembly_name");
}

#[test]
fn test_empty_source_is_a_valid_fixture() {
    let empty = assert_result_ok!(AnalyzerTestContext::new(
        "",
        [],
        LanguageVariant::CSharp,
        AnalyzerOptions::empty(),
    ));
    assert_eq!(empty.source_code(), "");

    let blank = assert_result_ok!(empty.with_code("   ", [TextSpan::new(0, 3)]));
    assert_eq!(blank.source_code(), "   ");
    assert_invalid_argument!(empty.with_code("", [TextSpan::new(0, 1)]), "source_spans");
}

#[test]
fn test_spans_must_lie_within_source() {
    let context = csharp_context("class C{}");

    assert_invalid_argument!(
        context.with_code("class C{}", [TextSpan::new(9, 1)]),
        "source_spans"
    );

    let at_end = assert_result_ok!(context.with_code("class C{}", [TextSpan::new(9, 0)]));
    assert_eq!(at_end.source_spans().len(), 1);
}

#[test]
fn test_span_length_overflow_is_invalid_argument() {
    assert_invalid_argument!(
        AnalyzerTestContext::new(
            "class C{}",
            [TextSpan::new(1, usize::MAX)],
            LanguageVariant::CSharp,
            AnalyzerOptions::empty(),
        ),
        "source_spans"
    );
    assert_invalid_argument!(
        csharp_context("class C{}").with_code("class C{}", [TextSpan::new(usize::MAX, 2)]),
        "source_spans"
    );
}

#[test]
fn test_with_references_replaces_and_deduplicates() {
    let context = csharp_context("class C{}");
    let a = MetadataReference::from_file("/lib/a.dll");
    let b = MetadataReference::from_file("/lib/b.dll");

    let replaced = context.with_references([a.clone(), b.clone(), a.clone()]);

    assert_eq!(replaced.references().len(), 2);
    assert!(replaced.references().contains(&a));
    assert!(replaced.references().contains(&b));
    assert!(!replaced
        .references()
        .iter()
        .any(|r| r.display_name() == "mscorlib.dll"));

    let emptied = replaced.with_references([]);
    assert!(emptied.references().is_empty());
}

#[test]
fn test_default_references_are_shared() {
    let first = csharp_context("class C{}");
    let second = basic_context("Class C\nEnd Class");

    assert_eq!(first.references(), second.references());
    assert_eq!(default_references().unwrap(), default_references().unwrap());
}

#[test]
fn test_analyzer_options_are_carried() {
    let options = AnalyzerOptions::empty()
        .with_value("dotnet_diagnostic.XX0001.severity", "error")
        .unwrap();
    let context = csharp_context("class C{}").with_options(options.clone());

    assert_eq!(context.options(), &options);
    assert_eq!(
        context.options().get("dotnet_diagnostic.XX0001.severity"),
        Some("error")
    );
}

#[test]
fn test_fix_provider_context_wraps_analyzer_context() {
    let context = csharp_context("class C{}");
    let fix = FixProviderTestContext::new(
        context.clone(),
        ["class C\n{\n}"],
        TextComparisonMode::Exact,
    );

    assert_eq!(fix.analyzer_test_context(), &context);
    assert_eq!(fix.expected_code().len(), 1);
    assert_eq!(fix.code_comparison_mode(), TextComparisonMode::Exact);

    let updated = fix.with_expected_code(["a", "b"]);
    assert_eq!(updated.expected_code().len(), 2);
    assert_eq!(fix.expected_code().len(), 1);
}
