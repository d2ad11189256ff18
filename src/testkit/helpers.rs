//! Test helper functions for creating fixtures.
//!
//! | Helper | Purpose |
//! |--------|---------|
//! | [`csharp_context`] | Brace-variant context with default settings |
//! | [`basic_context`] | Keyword-variant context with default settings |
//! | [`context_for`] | Context for any variant |
//! | [`format_context`] | Build and format a context's own source |
//! | [`init_test_logging`] | Route `log` output through the test harness |

use crate::builders::build;
use crate::context::AnalyzerTestContext;
use crate::core::{AnalyzerOptions, LanguageVariant};
use crate::formatting::format_document;

/// Create a context for `code` in `language` with empty analyzer options.
///
/// # Panics
///
/// Panics if the default references cannot be resolved.
pub fn context_for(code: &str, language: LanguageVariant) -> AnalyzerTestContext {
    AnalyzerTestContext::new(code, [], language, AnalyzerOptions::empty())
        .unwrap_or_else(|e| panic!("Failed to create test context for:\n{}\n\nError: {}", code, e))
}

pub fn csharp_context(code: &str) -> AnalyzerTestContext {
    context_for(code, LanguageVariant::CSharp)
}

pub fn basic_context(code: &str) -> AnalyzerTestContext {
    context_for(code, LanguageVariant::VisualBasic)
}

/// Build the context's document and return its formatted text.
pub fn format_context(context: &AnalyzerTestContext) -> String {
    format_document(&build(context))
}

/// Install `env_logger` in test mode. Safe to call from every test.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
