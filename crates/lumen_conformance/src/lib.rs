//! Conformance test helpers for the Lumen simulator.
//!
//! Provides shared pipeline functions that run source text through the
//! simulator or the lint pass and return structured results for assertion
//! in integration tests.

#![warn(missing_docs)]

use lumen_common::parse_bits_with_width;
use lumen_config::LumenConfig;
use lumen_diagnostics::{Diagnostic, DiagnosticSink};
use lumen_lint::{Analysis, LintEngine};
use lumen_sim::{simulate, SimInputs, SimOutputs};

/// The program the simulator opens with: ten LED examples over the
/// reference board, including the reduction forms the evaluator does not
/// support (`LED[6]` to `LED[8]`).
pub const DEMO_PROGRAM: &str = r#"module main(
  input [7:0] sw,
  input [4:0] btn,
  output [9:0] LED
);

  // Example: LED[0] is on when switch 0 is on
  assign LED[0] = sw[0];

  // Example: LED[1] is on when button 0 is pressed
  assign LED[1] = btn[0];

  // Example: LED[2] is on when switch 1 AND switch 2 are on
  assign LED[2] = sw[1] & sw[2];

  // Example: LED[3] is on when switch 3 OR button 1 is on
  assign LED[3] = sw[3] | btn[1];

  // Example: LED[4] is on when switch 4 XOR switch 5 is true
  assign LED[4] = sw[4] ^ sw[5];

  // Example: LED[5] is the inverse of switch 6
  assign LED[5] = !sw[6];

  // Example: LED[6] is on when any of the first 4 switches are on
  assign LED[6] = |sw[3:0];

  // Example: LED[7] is on when all of the last 4 switches are on
  assign LED[7] = &sw[7:4];

  // Example: LED[8] is on when an odd number of the first 3 buttons are pressed
  assign LED[8] = ^btn[2:0];

  // Example: LED[9] is on when switch 7 is on AND button 4 is not pressed
  assign LED[9] = sw[7] && !btn[4];

endmodule
"#;

/// Result of running the lint pass over one source text.
pub struct LintResult {
    /// All diagnostics emitted, in source order.
    pub diagnostics: Vec<Diagnostic>,
    /// Whether any errors were emitted.
    pub has_errors: bool,
    /// Number of error-severity diagnostics.
    pub error_count: usize,
    /// Number of warning-severity diagnostics.
    pub warning_count: usize,
}

impl LintResult {
    /// Returns the diagnostics with the given code, e.g. `"W102"`.
    pub fn with_code(&self, code: &str) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.code.to_string() == code)
            .collect()
    }

    /// Returns `true` if any diagnostic has the given code.
    pub fn has_code(&self, code: &str) -> bool {
        !self.with_code(code).is_empty()
    }
}

/// Builds reference-board inputs from MSB-first bit strings.
///
/// # Panics
///
/// Panics if either string is not a valid bit string that fits the
/// reference widths (8 switches, 5 buttons).
pub fn inputs(sw: &str, btn: &str) -> SimInputs {
    SimInputs::new(
        parse_bits_with_width(sw, 8).unwrap(),
        parse_bits_with_width(btn, 5).unwrap(),
    )
}

/// Simulates `source` on the reference board with MSB-first input strings.
pub fn run_source(source: &str, sw: &str, btn: &str) -> SimOutputs {
    simulate(source, &inputs(sw, btn))
}

/// Creates a `LumenConfig` from TOML text.
pub fn make_config(toml_str: &str) -> LumenConfig {
    toml::from_str(toml_str).unwrap()
}

/// Creates a `LumenConfig` with lint deny/allow overrides.
pub fn make_config_with_lint(deny: &[&str], allow: &[&str]) -> LumenConfig {
    let deny_list: Vec<String> = deny.iter().map(|s| format!("\"{s}\"")).collect();
    let allow_list: Vec<String> = allow.iter().map(|s| format!("\"{s}\"")).collect();
    make_config(&format!(
        r#"
[lint]
deny = [{deny}]
allow = [{allow}]
"#,
        deny = deny_list.join(", "),
        allow = allow_list.join(", "),
    ))
}

/// Lints `source` for the reference board with the default rule set.
pub fn lint_source(source: &str) -> LintResult {
    lint_source_with_config(source, &LumenConfig::default())
}

/// Lints `source` with deny/allow overrides.
pub fn lint_source_with_lint(source: &str, deny: &[&str], allow: &[&str]) -> LintResult {
    lint_source_with_config(source, &make_config_with_lint(deny, allow))
}

/// Lints `source` for the board and lint settings in `config`.
pub fn lint_source_with_config(source: &str, config: &LumenConfig) -> LintResult {
    let board = &config.board;
    let layout = lumen_sim::BoardLayout::new(board.leds, board.displays, board.segments);
    let analysis = Analysis::new(source, layout, board.switches, board.buttons);

    let sink = DiagnosticSink::new();
    LintEngine::new(&config.lint).run(&analysis, &sink);

    LintResult {
        has_errors: sink.has_errors(),
        diagnostics: sink.take_sorted(),
        error_count: sink.error_count(),
        warning_count: sink.warning_count(),
    }
}
