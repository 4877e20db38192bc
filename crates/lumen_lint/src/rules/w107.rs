//! W107 (ignored characters): expression text that produces no token.

use lumen_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};

use crate::{Analysis, LintRule};

/// Detects characters the expression lexer drops, such as parentheses,
/// `~`, `:` or a second `!`.
///
/// Grouping is not supported and evaluation is strictly left to right, so
/// dropped characters usually mean the expression does not compute what it
/// looks like.
pub struct IgnoredCharacters;

impl LintRule for IgnoredCharacters {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 107)
    }

    fn name(&self) -> &str {
        "ignored-characters"
    }

    fn description(&self) -> &str {
        "expression contains characters that are ignored"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, analysis: &Analysis, sink: &DiagnosticSink) {
        for step in &analysis.trace.steps {
            let mut spans = step
                .evaluation
                .ignored
                .iter()
                .map(|&s| Analysis::ignored_span(step, s));
            let Some(first) = spans.next() else {
                continue;
            };

            let mut diag = Diagnostic::warning(
                self.code(),
                format!("expression for `{}` contains ignored characters", step.assignment.target),
                first,
            )
            .with_label(Label::primary(first, "ignored"));
            for span in spans {
                diag = diag.with_label(Label::secondary(span, "ignored"));
            }
            sink.emit(diag.with_note(
                "only names, `!`, `[index]` and `&& || & | ^` are recognised; evaluation runs left to right without grouping",
            ));
        }
    }
}
