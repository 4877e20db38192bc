//! W104 (missing operand): an operator ran with fewer than two values.

use lumen_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};
use lumen_sim::Resolution;

use crate::{Analysis, LintRule};

/// Detects binary operators that found fewer than two values on the stack.
///
/// The missing operand reads as `false`. The usual cause is a unary
/// reduction form such as `&bus`, `|bus` or `^bus`, which is not supported:
/// `&bus` evaluates as `false & bus`.
pub struct MissingOperand;

impl LintRule for MissingOperand {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 104)
    }

    fn name(&self) -> &str {
        "missing-operand"
    }

    fn description(&self) -> &str {
        "binary operator is missing an operand, which reads as false"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, analysis: &Analysis, sink: &DiagnosticSink) {
        for step in &analysis.trace.steps {
            let events = &step.evaluation.events;
            for (i, event) in events.iter().enumerate() {
                let Resolution::Operator { missing } = event.resolution else {
                    continue;
                };
                if missing == 0 {
                    continue;
                }

                let span = Analysis::token_span(step, event);
                let noun = if missing == 1 { "operand" } else { "operands" };
                let leading = events[..i]
                    .iter()
                    .all(|e| e.resolution == Resolution::Unresolved);
                let mut diag = Diagnostic::warning(
                    self.code(),
                    format!("operator `{}` is missing {missing} {noun}", event.token.kind),
                    span,
                )
                .with_label(Label::primary(span, format!("{missing} {noun} taken as false")));
                if leading {
                    diag = diag
                        .with_note("reduction operators are not supported")
                        .with_help(format!(
                            "`{op}x` evaluates as `false {op} x`",
                            op = event.token.kind
                        ));
                }
                sink.emit(diag);
            }
        }
    }
}
