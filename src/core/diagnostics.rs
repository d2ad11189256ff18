use serde::{Deserialize, Serialize};
use std::fmt;

use super::text::TextSpan;

/// Severity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DiagnosticSeverity {
    Hidden,
    Info,
    Warning,
    Error,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DiagnosticSeverity::Hidden => "hidden",
            DiagnosticSeverity::Info => "info",
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Error => "error",
        };
        f.write_str(label)
    }
}

/// A compiler diagnostic located in a fixture document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    pub id: String,
    pub message: String,
    pub severity: DiagnosticSeverity,
    pub span: TextSpan,
    /// Warning level at which a warning becomes visible; 0 for errors.
    pub warning_level: u32,
    /// Set when a warning was escalated by the general diagnostic option.
    pub is_warning_as_error: bool,
}

impl Diagnostic {
    pub fn new(
        id: impl Into<String>,
        message: impl Into<String>,
        severity: DiagnosticSeverity,
        span: TextSpan,
    ) -> Self {
        let warning_level = if severity == DiagnosticSeverity::Warning { 1 } else { 0 };
        Self {
            id: id.into(),
            message: message.into(),
            severity,
            span,
            warning_level,
            is_warning_as_error: false,
        }
    }

    pub fn error(id: impl Into<String>, message: impl Into<String>, span: TextSpan) -> Self {
        Self::new(id, message, DiagnosticSeverity::Error, span)
    }

    pub fn warning(
        id: impl Into<String>,
        message: impl Into<String>,
        span: TextSpan,
        warning_level: u32,
    ) -> Self {
        Self {
            warning_level,
            ..Self::new(id, message, DiagnosticSeverity::Warning, span)
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }

    /// Report this warning as an error.
    pub fn escalated(self) -> Self {
        if self.severity != DiagnosticSeverity::Warning {
            return self;
        }
        Self {
            severity: DiagnosticSeverity::Error,
            is_warning_as_error: true,
            ..self
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} at {}",
            self.severity, self.id, self.message, self.span
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escalation_only_touches_warnings() {
        let warning = Diagnostic::warning("CS1570", "bad xml", TextSpan::new(0, 3), 1);
        let escalated = warning.escalated();
        assert!(escalated.is_error());
        assert!(escalated.is_warning_as_error);
        assert_eq!(escalated.warning_level, 1);

        let error = Diagnostic::error("CS1010", "newline in constant", TextSpan::new(0, 1));
        assert!(!error.clone().escalated().is_warning_as_error);
    }

    #[test]
    fn test_display() {
        let error = Diagnostic::error("CS1513", "} expected", TextSpan::new(8, 1));
        assert_eq!(error.to_string(), "error CS1513: } expected at [8..9)");
    }
}
