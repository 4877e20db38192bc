//! W106 (duplicate assign): the same target is assigned more than once.

use std::collections::HashMap;

use lumen_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};

use crate::{Analysis, LintRule};

/// Detects targets assigned on more than one line.
///
/// Only the last occurrence is evaluated, at its own position; earlier
/// occurrences are discarded.
pub struct DuplicateAssign;

impl LintRule for DuplicateAssign {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 106)
    }

    fn name(&self) -> &str {
        "duplicate-assign"
    }

    fn description(&self) -> &str {
        "target is assigned more than once; only the last assignment is evaluated"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, analysis: &Analysis, sink: &DiagnosticSink) {
        let mut last = HashMap::new();
        for (i, occ) in analysis.occurrences.iter().enumerate() {
            last.insert(occ.target.as_str(), i);
        }

        for (i, occ) in analysis.occurrences.iter().enumerate() {
            let winner = last[occ.target.as_str()];
            if winner == i {
                continue;
            }
            let kept = &analysis.occurrences[winner];
            sink.emit(
                Diagnostic::warning(
                    self.code(),
                    format!("`{}` is assigned more than once", occ.target),
                    occ.span,
                )
                .with_label(Label::primary(occ.span, "this assignment is discarded"))
                .with_label(Label::secondary(kept.span, "only this one is evaluated"))
                .with_note(format!(
                    "`{}` is evaluated at line {}, after every assignment before it",
                    occ.target, kept.line
                )),
            );
        }
    }
}
