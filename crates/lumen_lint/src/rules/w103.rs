//! W103 (unresolved token): an identifier that names nothing.

use lumen_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};
use lumen_sim::{classify_target, Resolution, RouteOutcome, Target};

use crate::{Analysis, LintRule};

/// Detects identifier tokens that are neither an input nor a wire assigned
/// anywhere in the source.
///
/// The evaluator skips such tokens, so the expression is computed as if
/// they were absent.
pub struct UnresolvedToken;

impl LintRule for UnresolvedToken {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 103)
    }

    fn name(&self) -> &str {
        "unresolved-token"
    }

    fn description(&self) -> &str {
        "identifier does not name an input or an assigned wire"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, analysis: &Analysis, sink: &DiagnosticSink) {
        let wires = analysis.wire_targets();
        for step in &analysis.trace.steps {
            for event in &step.evaluation.events {
                if event.resolution != Resolution::Unresolved {
                    continue;
                }
                let Some(key) = event.token.kind.signal_key() else {
                    continue;
                };
                if wires.contains(key.as_str()) {
                    // Assigned as a wire somewhere: reported as a forward reference.
                    continue;
                }

                let span = Analysis::token_span(step, event);
                let mut diag = Diagnostic::warning(
                    self.code(),
                    format!("`{}` does not name an input or an assigned wire", event.token.kind),
                    span,
                )
                .with_label(Label::primary(span, "skipped during evaluation"));

                if analysis.inputs.vector(&key).is_some() {
                    diag = diag.with_help("`!` applies to single input bits like `!sw[0]`, not whole vectors");
                } else if key.bytes().all(|b| b.is_ascii_digit()) {
                    diag = diag.with_help("bit slices and numeric literals are not supported");
                } else if classify_target(&key) != Target::Wire
                    || analysis
                        .trace
                        .steps
                        .iter()
                        .any(|s| s.assignment.target == key && s.outcome != RouteOutcome::Wire)
                {
                    diag = diag.with_help("LED and display outputs cannot be read back; assign a wire and read that");
                }
                sink.emit(diag);
            }
        }
    }
}
