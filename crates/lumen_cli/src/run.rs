//! `lumen run`: simulate a source once and show the board.
//!
//! Loads the source and config, resolves the input vectors, evaluates
//! every assignment in order, and prints the LED row and display art (or
//! a JSON object with `--format json`).

use lumen_common::format_bits;
use lumen_sim::{simulate_traced, RouteOutcome, SimResult, StepRecord};

use crate::pipeline::{board_layout, load_config, load_source, resolve_inputs};
use crate::render::render_outputs;
use crate::{GlobalArgs, ReportFormat, RunArgs};

/// Runs the `lumen run` command. Always returns exit code 0 once the
/// inputs are valid; simulation itself cannot fail.
pub fn run(args: &RunArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let source = load_source(&args.file)?;
    let config = load_config(global, &args.file)?;
    let layout = board_layout(&config.board);
    let inputs = resolve_inputs(args.sw.as_deref(), args.btn.as_deref(), &config)?;

    if !global.quiet {
        eprintln!("   Simulating {}", args.file);
    }
    tracing::info!(
        sw = %format_bits(&inputs.sw),
        btn = %format_bits(&inputs.btn),
        "inputs"
    );

    let result = simulate_traced(&source.content, &inputs, &layout);

    match args.format {
        ReportFormat::Text => {
            if args.explain {
                for step in &result.steps {
                    println!("{}", explain_step(step));
                }
                println!();
            }
            println!("{}", render_outputs(&result.outputs));
        }
        ReportFormat::Json => {
            let json = result_json(&result, &inputs.sw, &inputs.btn, args.explain);
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string())
            );
        }
    }

    Ok(0)
}

/// Describes where a routed value ended up.
fn describe_outcome(outcome: &RouteOutcome) -> String {
    match outcome {
        RouteOutcome::Led { index } => format!("LED {index}"),
        RouteOutcome::Segment { display, segment } => {
            format!("display {display} segment {segment}")
        }
        RouteOutcome::Display { index } => format!("display {index}"),
        RouteOutcome::Wire => "wire".to_string(),
        RouteOutcome::OutOfRange => "dropped, out of range".to_string(),
    }
}

/// One `--explain` line: `line N: target = expr => value (destination)`.
fn explain_step(step: &StepRecord) -> String {
    format!(
        "line {:>3}: {} = {} => {} ({})",
        step.assignment.line,
        step.assignment.target,
        step.assignment.expr,
        step.evaluation.value,
        describe_outcome(&step.outcome)
    )
}

fn result_json(
    result: &SimResult,
    sw: &[bool],
    btn: &[bool],
    explain: bool,
) -> serde_json::Value {
    let mut json = serde_json::json!({
        "inputs": {
            "sw": format_bits(sw),
            "btn": format_bits(btn),
        },
        "leds": result.outputs.leds,
        "displays": result.outputs.displays,
        "wires": result.wires,
    });
    if explain {
        json["steps"] = serde_json::to_value(&result.steps).unwrap_or_default();
    }
    json
}
