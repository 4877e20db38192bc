//! W108 (unused operands): values left on the stack after evaluation.

use lumen_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};

use crate::{Analysis, LintRule};

/// Detects expressions that leave more than one value on the stack, e.g.
/// two operands with no operator between them. Only the last value pushed
/// becomes the result.
pub struct UnusedOperands;

impl LintRule for UnusedOperands {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 108)
    }

    fn name(&self) -> &str {
        "unused-operands"
    }

    fn description(&self) -> &str {
        "expression leaves unused values on the stack"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, analysis: &Analysis, sink: &DiagnosticSink) {
        for step in &analysis.trace.steps {
            let depth = step.evaluation.stack_depth;
            if depth <= 1 {
                continue;
            }
            let span = step.assignment.expr_span;
            let message = match depth - 1 {
                1 => "1 value is never combined".to_string(),
                n => format!("{n} values are never combined"),
            };
            sink.emit(
                Diagnostic::warning(self.code(), message, span)
                    .with_label(Label::primary(span, format!("{depth} values left on the stack")))
                    .with_help("join operands with `&`, `|` or `^`; only the last value is used"),
            );
        }
    }
}
