//! Lint rules and engine for Lumen sources.
//!
//! The simulator never rejects input: unknown tokens are skipped, missing
//! operands read as false, and writes off the board are dropped. The rules
//! in this crate report each of those silent degradations so they can be
//! found without changing simulation results.
//!
//! # Rule Categories
//!
//! - **W-series (warnings):** skipped statements, unresolved or forward
//!   references, missing operands, out-of-range indices, duplicate targets,
//!   ignored characters, unused operands
//! - **C-series (conventions):** wires assigned without a declaration

#![warn(missing_docs)]

mod analysis;
mod engine;
mod rules;

pub use analysis::Analysis;
pub use engine::LintEngine;
pub use rules::register_builtin_rules;
pub use rules::{
    DuplicateAssign, ForwardReference, IgnoredCharacters, IndexOutOfRange, MissingOperand,
    SkippedAssign, UndeclaredWire, UnresolvedToken, UnusedOperands,
};

use lumen_diagnostics::{DiagnosticCode, DiagnosticSink, Severity};

/// A single lint rule that checks an analyzed source for issues.
///
/// Each rule has a unique diagnostic code, a human-readable name, a description,
/// and a default severity. The `check` method should emit diagnostics via the
/// provided sink.
pub trait LintRule: Send + Sync {
    /// Returns the diagnostic code for this rule (e.g., W101, C201).
    fn code(&self) -> DiagnosticCode;

    /// Returns the short kebab-case name of this rule (e.g., "forward-reference").
    fn name(&self) -> &str;

    /// Returns a human-readable description of what this rule checks.
    fn description(&self) -> &str;

    /// Returns the default severity for diagnostics emitted by this rule.
    fn default_severity(&self) -> Severity;

    /// Checks the analysis and emits diagnostics to the sink.
    fn check(&self, analysis: &Analysis, sink: &DiagnosticSink);
}
