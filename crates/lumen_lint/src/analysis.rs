//! Facts about a source file shared by the lint rules.
//!
//! The analysis runs the real evaluator once with all inputs off and keeps
//! the per-token trace. Which tokens resolve, which operators lack operands
//! and which targets land on the board depend only on input widths, never
//! on input values, so one run answers every rule.

use std::collections::HashSet;

use lumen_common::Span;
use lumen_parser::{
    extract_assignments, find_malformed_assigns, parse_module, Assignment, MalformedAssign,
    ModuleDescriptor,
};
use lumen_sim::{simulate_module, BoardLayout, RouteOutcome, SimInputs, SimResult, StepRecord, TokenEvent};

/// Everything the lint rules inspect for one source text.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The parsed module, one assignment per target.
    pub module: ModuleDescriptor,
    /// Every assignment occurrence in source order, duplicates included.
    pub occurrences: Vec<Assignment>,
    /// Lines mentioning `assign` that were skipped.
    pub malformed: Vec<MalformedAssign>,
    /// Evaluation trace with all inputs off.
    pub trace: SimResult,
    /// Board the trace was produced for.
    pub layout: BoardLayout,
    /// The all-off inputs, sized to the board's switch and button widths.
    pub inputs: SimInputs,
}

impl Analysis {
    /// Analyzes `source` for a board with the given layout and input widths.
    pub fn new(source: &str, layout: BoardLayout, switches: usize, buttons: usize) -> Self {
        let module = parse_module(source);
        let inputs = SimInputs::zeros(switches, buttons);
        let trace = simulate_module(&module, &inputs, &layout);
        Self {
            occurrences: extract_assignments(source),
            malformed: find_malformed_assigns(source),
            module,
            trace,
            layout,
            inputs,
        }
    }

    /// Analyzes `source` for the reference board.
    pub fn with_defaults(source: &str) -> Self {
        let inputs = SimInputs::default();
        Self::new(source, BoardLayout::default(), inputs.sw.len(), inputs.btn.len())
    }

    /// Evaluation-order position of the assignment driving `target`.
    pub fn position_of(&self, target: &str) -> Option<usize> {
        self.module
            .assignments
            .iter()
            .position(|a| a.target == target)
    }

    /// Targets whose values were stored as wires during the trace.
    pub fn wire_targets(&self) -> HashSet<&str> {
        self.trace
            .steps
            .iter()
            .filter(|s| s.outcome == RouteOutcome::Wire)
            .map(|s| s.assignment.target.as_str())
            .collect()
    }

    /// Source span of a token, converted from expression-relative offsets.
    pub fn token_span(step: &StepRecord, event: &TokenEvent) -> Span {
        event.token.span.shifted(step.assignment.expr_span.start)
    }

    /// Source span of an ignored run inside a step's expression.
    pub fn ignored_span(step: &StepRecord, span: Span) -> Span {
        span.shifted(step.assignment.expr_span.start)
    }
}
