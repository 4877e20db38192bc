//! W101 (malformed assign): a line mentions `assign` but was skipped.

use lumen_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Severity};

use crate::{Analysis, LintRule};

/// Detects lines containing the word `assign` that the extractor did not
/// recognise, typically a missing `;` or a malformed target index.
///
/// Such lines contribute nothing: their target keeps its previous or
/// default value.
pub struct SkippedAssign;

impl LintRule for SkippedAssign {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 101)
    }

    fn name(&self) -> &str {
        "malformed-assign"
    }

    fn description(&self) -> &str {
        "assign statement does not match `assign <name> = <expression>;` and is skipped"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, analysis: &Analysis, sink: &DiagnosticSink) {
        for bad in &analysis.malformed {
            sink.emit(
                Diagnostic::warning(self.code(), "malformed assign statement is skipped", bad.span)
                    .with_help("expected `assign <name> = <expression>;` or `assign <name>[<index>] = <expression>;`"),
            );
        }
    }
}
