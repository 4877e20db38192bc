//! W105 (index out of range): input reads or output writes off the board.

use lumen_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};
use lumen_sim::{classify_target, Resolution, RouteOutcome, Target};

use crate::{Analysis, LintRule};

/// Detects `sw[i]`/`btn[i]` reads past the input width and `LED[i]`,
/// `dN` or `dN[s]` targets past the board layout.
///
/// Out-of-range reads yield `false`; out-of-range writes are dropped.
pub struct IndexOutOfRange;

impl LintRule for IndexOutOfRange {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 105)
    }

    fn name(&self) -> &str {
        "index-out-of-range"
    }

    fn description(&self) -> &str {
        "index is outside the input vector or the board layout"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, analysis: &Analysis, sink: &DiagnosticSink) {
        for step in &analysis.trace.steps {
            for event in &step.evaluation.events {
                if event.resolution != (Resolution::InputBit { in_range: false }) {
                    continue;
                }
                let name = event.token.kind.name().unwrap_or_default();
                let width = analysis.inputs.vector(name).map_or(0, <[bool]>::len);
                let span = Analysis::token_span(step, event);
                sink.emit(
                    Diagnostic::warning(
                        self.code(),
                        format!("`{}` is outside `{name}`, which has {width} bits", event.token.kind),
                        span,
                    )
                    .with_label(Label::primary(span, "reads as false")),
                );
            }

            if step.outcome == RouteOutcome::OutOfRange {
                let layout = &analysis.layout;
                let board = match classify_target(&step.assignment.target) {
                    Target::Led(_) => format!("the board has {} LEDs", layout.leds),
                    _ => format!(
                        "the board has {} displays of {} segments",
                        layout.displays, layout.segments
                    ),
                };
                let span = step.assignment.target_span;
                sink.emit(
                    Diagnostic::warning(
                        self.code(),
                        format!("`{}` is not on the board", step.assignment.target),
                        span,
                    )
                    .with_label(Label::primary(span, "this write is dropped"))
                    .with_note(board),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{check, snippet};

    #[test]
    fn input_read_past_width() {
        let src = "assign LED[0] = sw[8] | !btn[5];";
        let diags = check(&IndexOutOfRange, src);
        assert_eq!(diags.len(), 2);
        assert_eq!(snippet(src, &diags[0]), "sw[8]");
        assert_eq!(diags[0].message, "`sw[8]` is outside `sw`, which has 8 bits");
        assert_eq!(snippet(src, &diags[1]), "!btn[5]");
    }

    #[test]
    fn led_past_layout() {
        let src = "assign LED[10] = sw[0];";
        let diags = check(&IndexOutOfRange, src);
        assert_eq!(diags.len(), 1);
        assert_eq!(snippet(src, &diags[0]), "LED[10]");
        assert_eq!(diags[0].notes, vec!["the board has 10 LEDs"]);
    }

    #[test]
    fn display_and_segment_past_layout() {
        let diags = check(&IndexOutOfRange, "assign d8 = sw;\nassign d0[8] = sw[0];");
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[1].notes, vec!["the board has 8 displays of 8 segments"]);
    }

    #[test]
    fn in_range_is_clean() {
        assert!(check(&IndexOutOfRange, "assign LED[9] = sw[7] & btn[4];\nassign d7[7] = sw[0];").is_empty());
    }
}
