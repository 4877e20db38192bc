//! Line-oriented scanner for the Lumen HDL subset.
//!
//! This crate turns source text into a [`ModuleDescriptor`] and splits
//! assignment expressions into tokens. It never fails: anything that does
//! not fit one of the recognised line shapes is skipped.
//!
//! # Architecture
//!
//! - **Declarations** (`decl`): `input [H:L] name`, `output [H:L] name`,
//!   `wire name;`, searched per line.
//! - **Assignments** ([`stmt`]): `assign target = expression;` in source
//!   order; a repeated target evaluates at its last position.
//! - **Lexer** ([`lexer`]): splits an expression into [`ExprToken`]s.
//! - **AST** ([`ast`]): the descriptor types, with serde support.

#![warn(missing_docs)]

/// Module descriptor types.
pub mod ast;
mod decl;
/// Expression lexer.
pub mod lexer;
mod lines;
/// Assignment extraction.
pub mod stmt;
/// Expression token types.
pub mod token;

pub use ast::{Assignment, BitRange, ModuleDescriptor};
pub use lexer::{lex, tokenize, LexedExpr};
pub use stmt::{extract_assignments, find_malformed_assigns, MalformedAssign};
pub use token::{ExprToken, Token};

use lines::source_lines;

/// Scans source text into a module descriptor.
///
/// Every line is checked for each declaration kind and for an assignment.
/// Lines matching nothing are ignored without diagnostic.
pub fn parse_module(source: &str) -> ModuleDescriptor {
    let mut module = ModuleDescriptor::new();
    for line in source_lines(source) {
        decl::scan_line(line.text, &mut module);
        if let Some(assignment) = stmt::assign_on_line(line) {
            module.push_assignment(assignment);
        }
    }
    module
}

/// Scans only the declarations, leaving `assignments` empty.
pub fn scan_declarations(source: &str) -> ModuleDescriptor {
    let mut module = ModuleDescriptor::new();
    for line in source_lines(source) {
        decl::scan_line(line.text, &mut module);
    }
    module
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: &str = "\
module top(
    input [7:0] sw,
    input [4:0] btn,
    output [9:0] LED
);
    wire w1;
    assign w1 = sw[0];
    assign LED[0] = w1;
    assign LED[2] = sw[1] & sw[2];
endmodule
";

    #[test]
    fn parse_declarations_and_assignments() {
        let m = parse_module(TOP);
        assert_eq!(m.inputs["sw"], BitRange::new(7, 0));
        assert_eq!(m.inputs["btn"], BitRange::new(4, 0));
        assert_eq!(m.outputs["LED"], BitRange::new(9, 0));
        assert!(m.wires.contains("w1"));
        let targets: Vec<_> = m.assignments.iter().map(|a| a.target.as_str()).collect();
        assert_eq!(targets, vec!["w1", "LED[0]", "LED[2]"]);
        assert_eq!(m.assignments[2].line, 9);
    }

    #[test]
    fn scan_declarations_skips_assignments() {
        let m = scan_declarations(TOP);
        assert_eq!(m.inputs.len(), 2);
        assert!(m.assignments.is_empty());
    }

    #[test]
    fn last_occurrence_sets_position() {
        let m = parse_module("assign a = sw[0];\nassign b = a;\nassign a = sw[1];\n");
        let targets: Vec<_> = m.assignments.iter().map(|a| a.target.as_str()).collect();
        assert_eq!(targets, vec!["b", "a"]);
        assert_eq!(m.assignments[1].expr, "sw[1]");
        assert_eq!(m.assignments[1].line, 3);
    }

    #[test]
    fn garbage_produces_empty_descriptor() {
        assert!(parse_module("}{ not verilog at all ;;; [[[").is_empty());
        assert!(parse_module("").is_empty());
    }

    #[test]
    fn undeclared_names_still_extracted() {
        let m = parse_module("assign mystery = nothing;");
        assert!(m.wires.is_empty());
        assert_eq!(m.assignments.len(), 1);
    }

    #[test]
    fn descriptor_json_shape() {
        let m = parse_module("input [1:0] a\nassign b = a;");
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["inputs"]["a"]["low"], 0);
        assert_eq!(json["assignments"][0]["target"], "b");
        assert_eq!(json["assignments"][0]["line"], 2);
    }
}
