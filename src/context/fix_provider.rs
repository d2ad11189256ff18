use serde::{Deserialize, Serialize};

use super::AnalyzerTestContext;

/// How expected fix output is compared with the actual output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextComparisonMode {
    /// Texts must match exactly.
    #[default]
    Exact,
    /// Whitespace differences are ignored.
    IgnoreWhitespace,
}

/// An analyzer fixture paired with the code a fix provider is expected to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixProviderTestContext {
    analyzer_test_context: AnalyzerTestContext,
    expected_code: im::Vector<String>,
    code_comparison_mode: TextComparisonMode,
}

impl FixProviderTestContext {
    pub fn new(
        analyzer_test_context: AnalyzerTestContext,
        expected_code: impl IntoIterator<Item = impl Into<String>>,
        code_comparison_mode: TextComparisonMode,
    ) -> Self {
        Self {
            analyzer_test_context,
            expected_code: expected_code.into_iter().map(Into::into).collect(),
            code_comparison_mode,
        }
    }

    pub fn analyzer_test_context(&self) -> &AnalyzerTestContext {
        &self.analyzer_test_context
    }

    /// Expected outputs, in the order the fixes are applied.
    pub fn expected_code(&self) -> &im::Vector<String> {
        &self.expected_code
    }

    pub fn code_comparison_mode(&self) -> TextComparisonMode {
        self.code_comparison_mode
    }

    pub fn with_expected_code(&self, expected_code: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(
            self.analyzer_test_context.clone(),
            expected_code,
            self.code_comparison_mode,
        )
    }
}
