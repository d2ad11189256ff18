//! Enumerated policies carried by a fixture configuration.

use serde::{Deserialize, Serialize};

use super::diagnostics::{Diagnostic, DiagnosticSeverity};

/// How documentation comments are treated by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DocumentationMode {
    /// Documentation comments are ordinary comments.
    #[default]
    None,
    /// Documentation comments are recognised but not checked.
    Parse,
    /// Documentation comments are recognised and checked for well-formed markup.
    Diagnose,
}

impl DocumentationMode {
    pub fn recognizes_documentation(&self) -> bool {
        !matches!(self, DocumentationMode::None)
    }
}

/// Kind of unit a compilation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutputKind {
    #[default]
    DynamicallyLinkedLibrary,
    ConsoleApplication,
    WindowsApplication,
    NetModule,
}

impl OutputKind {
    /// Executables need an entry point; libraries and modules do not.
    pub fn requires_entry_point(&self) -> bool {
        matches!(
            self,
            OutputKind::ConsoleApplication | OutputKind::WindowsApplication
        )
    }
}

/// How a diagnostic (or the general diagnostic policy) is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReportDiagnostic {
    #[default]
    Default,
    Error,
    Warn,
    Info,
    Hidden,
    Suppress,
}

/// How strictly a harness treats compiler diagnostics in the fixture source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ValidationMode {
    /// Any compiler warning or error fails the test.
    Strict,
    /// Compiler warnings are tolerated, errors are not.
    #[default]
    AllowCompileWarnings,
    /// Compiler warnings and errors are both tolerated.
    AllowCompileErrors,
}

impl ValidationMode {
    /// Whether a compiler diagnostic is acceptable under this mode.
    pub fn tolerates(&self, diagnostic: &Diagnostic) -> bool {
        match (self, diagnostic.severity) {
            (_, DiagnosticSeverity::Hidden | DiagnosticSeverity::Info) => true,
            (ValidationMode::Strict, _) => false,
            (ValidationMode::AllowCompileWarnings, severity) => {
                severity == DiagnosticSeverity::Warning
            }
            (ValidationMode::AllowCompileErrors, _) => true,
        }
    }
}

/// Whether diagnostics reported outside the fixture's own source tree are captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DiagnosticsCaptureMode {
    #[default]
    RequireInSourceTree,
    AllowOutsideSourceTree,
}

impl DiagnosticsCaptureMode {
    pub fn captures(&self, in_source_tree: bool) -> bool {
        in_source_tree || matches!(self, DiagnosticsCaptureMode::AllowOutsideSourceTree)
    }
}
