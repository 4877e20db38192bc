//! The module descriptor produced by scanning a source file.

use lumen_common::Span;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A declared bit range `[high:low]`.
///
/// The range is informational only: nothing checks it against how the
/// signal is used.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct BitRange {
    /// The left-hand bound as written.
    pub high: u32,
    /// The right-hand bound as written.
    pub low: u32,
}

impl BitRange {
    /// Creates a range from its two bounds.
    pub fn new(high: u32, low: u32) -> Self {
        Self { high, low }
    }

    /// Number of bits covered, regardless of bound order.
    pub fn width(&self) -> u64 {
        u64::from(self.high.abs_diff(self.low)) + 1
    }
}

/// One `assign target = expression;` statement.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Assignment {
    /// Target text exactly as written, including any `[index]` suffix.
    pub target: String,
    /// Expression text, trimmed.
    pub expr: String,
    /// 1-based source line.
    pub line: u32,
    /// Span of the whole statement, from `assign` through `;`.
    pub span: Span,
    /// Span of the target text.
    pub target_span: Span,
    /// Span of the trimmed expression text.
    pub expr_span: Span,
}

/// Declarations and assignments extracted from one source text.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Declared inputs by name. A later declaration replaces an earlier one.
    pub inputs: BTreeMap<String, BitRange>,
    /// Declared outputs by name.
    pub outputs: BTreeMap<String, BitRange>,
    /// Declared wire names.
    pub wires: BTreeSet<String>,
    /// Assignments in evaluation order, one per distinct target.
    pub assignments: Vec<Assignment>,
}

impl ModuleDescriptor {
    /// Creates an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment at the end of the evaluation order.
    ///
    /// If the target was already assigned, the earlier entry is removed so
    /// the target evaluates once, at the position of its last occurrence.
    pub fn push_assignment(&mut self, assignment: Assignment) {
        self.assignments.retain(|a| a.target != assignment.target);
        self.assignments.push(assignment);
    }

    /// Looks up the assignment that drives `target`.
    pub fn assignment(&self, target: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.target == target)
    }

    /// Returns `true` if nothing was declared or assigned.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
            && self.outputs.is_empty()
            && self.wires.is_empty()
            && self.assignments.is_empty()
    }
}
