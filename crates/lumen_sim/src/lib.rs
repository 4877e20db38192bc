//! Combinational evaluator for the Lumen HDL subset.
//!
//! [`simulate`] is a pure function from source text and input vectors to
//! LED and seven-segment outputs. Each call re-parses the source, evaluates
//! every assignment once in source order, and routes each result to an
//! output or to the evaluation context. Nothing is cached between calls and
//! malformed text never produces an error: affected outputs stay off.
//!
//! # Modules
//!
//! - `board`: layout, inputs and outputs
//! - `context`: wire values built up during one run
//! - `evaluator`: the left-to-right stack evaluator
//! - `router`: target classification and output writes

#![warn(missing_docs)]

pub mod board;
pub mod context;
pub mod evaluator;
pub mod router;

pub use board::{BoardLayout, SimInputs, SimOutputs};
pub use context::EvalContext;
pub use evaluator::{eval_expression, evaluate, Evaluation, Resolution, TokenEvent};
pub use router::{classify_target, route, RouteOutcome, Target};

use lumen_parser::{parse_module, Assignment, ModuleDescriptor};
use serde::Serialize;

/// One evaluated assignment.
#[derive(Clone, Debug, Serialize)]
pub struct StepRecord {
    /// The assignment as extracted from the source.
    pub assignment: Assignment,
    /// Evaluation details, including the resulting value.
    pub evaluation: Evaluation,
    /// Where the value went.
    pub outcome: RouteOutcome,
}

/// Outputs plus a step-by-step record of how they were produced.
#[derive(Clone, Debug, Serialize)]
pub struct SimResult {
    /// Final LED and display state.
    pub outputs: SimOutputs,
    /// One record per assignment, in evaluation order.
    pub steps: Vec<StepRecord>,
    /// Wire values at the end of the run.
    pub wires: EvalContext,
}

/// Simulates `source` on the reference board (10 LEDs, 8×8 displays).
pub fn simulate(source: &str, inputs: &SimInputs) -> SimOutputs {
    simulate_with(source, inputs, &BoardLayout::default())
}

/// Simulates `source` with an explicit board layout.
pub fn simulate_with(source: &str, inputs: &SimInputs, layout: &BoardLayout) -> SimOutputs {
    simulate_traced(source, inputs, layout).outputs
}

/// Simulates `source` and keeps the per-assignment record.
pub fn simulate_traced(source: &str, inputs: &SimInputs, layout: &BoardLayout) -> SimResult {
    simulate_module(&parse_module(source), inputs, layout)
}

/// Evaluates an already-parsed module.
pub fn simulate_module(
    module: &ModuleDescriptor,
    inputs: &SimInputs,
    layout: &BoardLayout,
) -> SimResult {
    let mut outputs = SimOutputs::new(layout);
    let mut ctx = EvalContext::new();
    let mut steps = Vec::with_capacity(module.assignments.len());

    for assignment in &module.assignments {
        let evaluation = evaluate(&assignment.expr, inputs, &ctx);
        let outcome = route(&assignment.target, &evaluation.value, layout, &mut outputs);
        tracing::debug!(
            line = assignment.line,
            signal = %assignment.target,
            value = %evaluation.value,
            ?outcome,
            "assign"
        );
        if outcome == RouteOutcome::Wire {
            ctx = ctx.with_wire(assignment.target.clone(), evaluation.value.clone());
        }
        steps.push(StepRecord {
            assignment: assignment.clone(),
            evaluation,
            outcome,
        });
    }

    SimResult {
        outputs,
        steps,
        wires: ctx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_common::Value;

    fn sw(bits: [u8; 8]) -> SimInputs {
        SimInputs::new(bits.iter().map(|&b| b != 0).collect(), vec![false; 5])
    }

    #[test]
    fn pass_through() {
        let src = "assign LED[0] = sw[0];";
        assert!(simulate(src, &sw([1, 0, 0, 0, 0, 0, 0, 0])).led(0));
        assert!(!simulate(src, &sw([0, 0, 0, 0, 0, 0, 0, 0])).led(0));
    }

    #[test]
    fn wire_then_use() {
        let src = "assign w1 = sw[0];\nassign LED[3] = w1;";
        let out = simulate(src, &sw([1, 0, 0, 0, 0, 0, 0, 0]));
        assert!(out.led(3));
    }

    #[test]
    fn forward_reference_is_false() {
        let src = "assign LED[3] = w1;\nassign w1 = sw[0];";
        let out = simulate(src, &sw([1, 0, 0, 0, 0, 0, 0, 0]));
        assert!(!out.led(3));
    }

    #[test]
    fn vector_wire_to_display() {
        let src = "assign bus = sw ^ btn[0];\nassign d2 = bus;\nassign d3[7] = !btn[0];";
        let inputs = SimInputs::new(vec![true, false, true, false, false, false, false, true], vec![true]);
        let out = simulate(src, &inputs);
        assert_eq!(
            out.displays[2],
            vec![false, true, false, true, true, true, true, false]
        );
        assert!(!out.segment(3, 7));
    }

    #[test]
    fn traced_run_records_steps_and_wires() {
        let src = "assign w = sw[0];\nassign LED[0] = w;\nassign LED[99] = w;";
        let result = simulate_traced(src, &sw([1, 0, 0, 0, 0, 0, 0, 0]), &BoardLayout::default());
        assert_eq!(result.steps.len(), 3);
        assert_eq!(result.steps[0].outcome, RouteOutcome::Wire);
        assert_eq!(result.steps[1].outcome, RouteOutcome::Led { index: 0 });
        assert_eq!(result.steps[2].outcome, RouteOutcome::OutOfRange);
        assert_eq!(result.wires.get("w"), Some(&Value::Scalar(true)));
        assert_eq!(result.wires.len(), 1);
    }

    #[test]
    fn custom_layout() {
        let layout = BoardLayout::new(16, 2, 7);
        let out = simulate_with("assign LED[15] = sw[0];\nassign d1 = sw;", &sw([1; 8]), &layout);
        assert_eq!(out.leds.len(), 16);
        assert!(out.led(15));
        assert_eq!(out.displays.len(), 2);
        assert_eq!(out.displays[1], vec![true; 7]);
    }

    #[test]
    fn scalar_display_target_becomes_wire() {
        let src = "assign d0 = sw[0];\nassign LED[0] = d0;";
        let result = simulate_traced(src, &sw([1, 0, 0, 0, 0, 0, 0, 0]), &BoardLayout::default());
        assert!(result.outputs.led(0));
        assert!(result.outputs.displays[0].iter().all(|b| !b));
        assert!(result.wires.contains("d0"));
    }

    #[test]
    fn result_serializes() {
        let result = simulate_traced("assign LED[1] = sw[1];", &SimInputs::default(), &BoardLayout::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["steps"][0]["outcome"]["kind"], "led");
        assert_eq!(json["steps"][0]["evaluation"]["value"]["kind"], "scalar");
        assert_eq!(json["outputs"]["leds"].as_array().unwrap().len(), 10);
    }
}
