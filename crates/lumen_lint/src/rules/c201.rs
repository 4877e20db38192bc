//! C201 (undeclared wire): a wire target with no `wire name;` declaration.

use lumen_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};
use lumen_sim::RouteOutcome;

use crate::{Analysis, LintRule};

/// Detects assignments stored as wires whose base name has no matching
/// `wire` declaration. Declarations never gate evaluation, so this is a
/// convention check only.
pub struct UndeclaredWire;

impl LintRule for UndeclaredWire {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Convention, 201)
    }

    fn name(&self) -> &str {
        "undeclared-wire"
    }

    fn description(&self) -> &str {
        "wire is assigned without a `wire` declaration"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, analysis: &Analysis, sink: &DiagnosticSink) {
        let module = &analysis.module;
        for step in &analysis.trace.steps {
            if step.outcome != RouteOutcome::Wire {
                continue;
            }
            let target = step.assignment.target.as_str();
            let base = target.split('[').next().unwrap_or(target);
            if module.wires.contains(base)
                || module.inputs.contains_key(base)
                || module.outputs.contains_key(base)
            {
                continue;
            }
            let span = step.assignment.target_span;
            sink.emit(
                Diagnostic::warning(self.code(), format!("`{base}` is not declared"), span)
                    .with_label(Label::primary(span, "assigned here"))
                    .with_help(format!("add `wire {base};`")),
            );
        }
    }
}
