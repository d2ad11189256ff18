//! Property-based tests for fixture contexts and formatting
//!
//! These tests verify invariants that should hold for all inputs:
//! - Transforms never alter the receiver
//! - Applying a transform twice with the same argument equals applying it once
//! - Building and formatting is deterministic
//! - Formatting is idempotent

use analyzer_fixtures::syntax::is_basic_keyword;
use analyzer_fixtures::testkit::{basic_context, csharp_context};
use analyzer_fixtures::{build, format_document, format_source_code, MetadataReference};
use proptest::prelude::*;

/// Generate an identifier that is a keyword in neither variant
fn identifier() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,8}".prop_filter("not a keyword", |s| !is_basic_keyword(s))
}

/// Generate a small brace-variant class with a few members
fn csharp_source() -> impl Strategy<Value = String> {
    (
        identifier(),
        prop::collection::vec((identifier(), 0u32..100), 0..4),
        prop::sample::select(vec!["", " ", "\n", "\n\n"]),
    )
        .prop_map(|(class, fields, gap)| {
            let members: String = fields
                .iter()
                .map(|(name, value)| format!("int {}={};{}", name, value, gap))
                .collect();
            format!("class {}{{{}void Run(){{if(true){{return;}}}}}}", class, members)
        })
}

/// Generate a small keyword-variant module
fn basic_source() -> impl Strategy<Value = String> {
    (identifier(), prop::collection::vec(identifier(), 0..4)).prop_map(|(module, locals)| {
        let body: String = locals
            .iter()
            .map(|name| format!("Dim {} As Integer\n", name))
            .collect();
        format!("Module {}\nSub Run()\n{}End Sub\nEnd Module\n", module, body)
    })
}

proptest! {
    /// Property: transforms return new values and leave the receiver intact
    #[test]
    fn prop_transforms_do_not_mutate(
        source in csharp_source(),
        file in "[A-Za-z]{1,10}\\.cs",
        level in 0u32..5,
    ) {
        let context = csharp_context(&source);
        let snapshot = context.clone();

        let _ = context.in_file_named(file).unwrap();
        let _ = context.compile_at_warning_level(level);
        let _ = context.compile_with_warnings_as_error(true);

        prop_assert_eq!(context, snapshot);
    }

    /// Property: same-argument transforms are idempotent
    #[test]
    fn prop_transforms_are_idempotent(
        source in csharp_source(),
        assembly in "[A-Za-z]{1,10}",
        level in 0u32..5,
    ) {
        let context = csharp_context(&source);

        let once = context.in_assembly_named(assembly.clone()).unwrap();
        prop_assert_eq!(once.in_assembly_named(assembly).unwrap(), once.clone());

        let once = context.compile_at_warning_level(level);
        prop_assert_eq!(once.compile_at_warning_level(level), once.clone());
    }

    /// Property: a reference set never holds the same path twice
    #[test]
    fn prop_references_deduplicate(names in prop::collection::vec("[a-c]", 0..10)) {
        let references: Vec<MetadataReference> = names
            .iter()
            .map(|name| MetadataReference::from_file(format!("/lib/{}.dll", name)))
            .collect();
        let distinct: std::collections::BTreeSet<_> = names.iter().collect();

        let context = csharp_context("class C{}").with_references(references);

        prop_assert_eq!(context.references().len(), distinct.len());
    }

    /// Property: formatting a built document is deterministic
    #[test]
    fn prop_formatting_is_deterministic(source in csharp_source()) {
        let context = csharp_context(&source);
        prop_assert_eq!(format_document(&build(&context)), format_document(&build(&context)));
    }

    /// Property: formatting already formatted brace-variant text changes nothing
    #[test]
    fn prop_csharp_formatting_is_idempotent(source in csharp_source()) {
        let context = csharp_context(&source);
        let once = format_source_code(&source, &context);
        let twice = format_source_code(&once, &context);
        prop_assert_eq!(once, twice);
    }

    /// Property: formatting already formatted keyword-variant text changes nothing
    #[test]
    fn prop_basic_formatting_is_idempotent(source in basic_source()) {
        let context = basic_context(&source);
        let once = format_source_code(&source, &context);
        let twice = format_source_code(&once, &context);
        prop_assert_eq!(once, twice);
    }
}
