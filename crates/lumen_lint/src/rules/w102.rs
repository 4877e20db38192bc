//! W102 (forward reference): a wire is read before its assignment.

use lumen_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};
use lumen_sim::{Resolution, RouteOutcome};

use crate::{Analysis, LintRule};

/// Detects expression tokens naming a wire that is assigned only at the
/// same or a later position in evaluation order.
///
/// Assignments are evaluated once, strictly in order, so such a token
/// resolves to nothing and is skipped.
pub struct ForwardReference;

impl LintRule for ForwardReference {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 102)
    }

    fn name(&self) -> &str {
        "forward-reference"
    }

    fn description(&self) -> &str {
        "wire is read before it is assigned"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, analysis: &Analysis, sink: &DiagnosticSink) {
        let steps = &analysis.trace.steps;
        for (pos, step) in steps.iter().enumerate() {
            for event in &step.evaluation.events {
                if event.resolution != Resolution::Unresolved {
                    continue;
                }
                let Some(key) = event.token.kind.signal_key() else {
                    continue;
                };
                let Some(later) = analysis.position_of(&key) else {
                    continue;
                };
                let driver = &steps[later];
                if later < pos || driver.outcome != RouteOutcome::Wire {
                    continue;
                }

                let span = Analysis::token_span(step, event);
                sink.emit(
                    Diagnostic::warning(
                        self.code(),
                        format!("`{key}` is read before it is assigned"),
                        span,
                    )
                    .with_label(Label::primary(span, "resolves to nothing at this point"))
                    .with_label(Label::secondary(
                        driver.assignment.target_span,
                        "assigned here",
                    ))
                    .with_note("assignments are evaluated strictly in source order"),
                );
            }
        }
    }
}
