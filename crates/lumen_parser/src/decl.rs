//! Declaration scanner: `input [H:L] name`, `output [H:L] name`, `wire name;`.
//!
//! Each line is searched independently and at most one declaration per
//! category is taken from it. Patterns are searched anywhere in the line.
//! A bound too large for `u32` makes the line a non-match for that category.

use crate::ast::{BitRange, ModuleDescriptor};
use once_cell::sync::Lazy;
use regex::Regex;

static INPUT_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"input\s+\[([0-9]+):([0-9]+)\]\s+([0-9A-Za-z_]+)").expect("input pattern")
});

static OUTPUT_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"output\s+\[([0-9]+):([0-9]+)\]\s+([0-9A-Za-z_]+)").expect("output pattern")
});

static WIRE_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"wire\s+([0-9A-Za-z_]+);").expect("wire pattern"));

/// Records every declaration found on `line` into `module`.
pub(crate) fn scan_line(line: &str, module: &mut ModuleDescriptor) {
    if let Some((name, range)) = ranged_decl(&INPUT_DECL, line) {
        module.inputs.insert(name, range);
    }
    if let Some((name, range)) = ranged_decl(&OUTPUT_DECL, line) {
        module.outputs.insert(name, range);
    }
    if let Some(caps) = WIRE_DECL.captures(line) {
        module.wires.insert(caps[1].to_string());
    }
}

fn ranged_decl(pattern: &Regex, line: &str) -> Option<(String, BitRange)> {
    let caps = pattern.captures(line)?;
    let high = caps[1].parse().ok()?;
    let low = caps[2].parse().ok()?;
    Some((caps[3].to_string(), BitRange::new(high, low)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(lines: &[&str]) -> ModuleDescriptor {
        let mut m = ModuleDescriptor::new();
        for line in lines {
            scan_line(line, &mut m);
        }
        m
    }

    #[test]
    fn input_declaration() {
        let m = scan(&["    input [7:0] sw,"]);
        assert_eq!(m.inputs["sw"], BitRange::new(7, 0));
    }

    #[test]
    fn output_declaration() {
        let m = scan(&["output [9:0] LED"]);
        assert_eq!(m.outputs["LED"], BitRange::new(9, 0));
        assert!(m.inputs.is_empty());
    }

    #[test]
    fn wire_requires_semicolon() {
        let m = scan(&["wire w1;", "wire w2"]);
        assert!(m.wires.contains("w1"));
        assert!(!m.wires.contains("w2"));
    }

    #[test]
    fn later_declaration_wins() {
        let m = scan(&["input [7:0] sw", "input [3:0] sw"]);
        assert_eq!(m.inputs.len(), 1);
        assert_eq!(m.inputs["sw"], BitRange::new(3, 0));
    }

    #[test]
    fn reversed_range_kept_as_written() {
        let m = scan(&["input [0:4] btn"]);
        assert_eq!(m.inputs["btn"], BitRange::new(0, 4));
    }

    #[test]
    fn missing_range_is_ignored() {
        let m = scan(&["input sw", "input [7] sw", "input [a:0] sw"]);
        assert!(m.inputs.is_empty());
    }

    #[test]
    fn overflowing_bound_is_ignored() {
        let m = scan(&["input [99999999999:0] sw"]);
        assert!(m.inputs.is_empty());
    }

    #[test]
    fn match_anywhere_in_line() {
        let m = scan(&["// old: input [1:0] legacy", "module top(input [4:0] btn);"]);
        assert_eq!(m.inputs["legacy"], BitRange::new(1, 0));
        assert_eq!(m.inputs["btn"], BitRange::new(4, 0));
    }

    #[test]
    fn one_line_several_categories() {
        let m = scan(&["input [1:0] a output [2:0] b wire c;"]);
        assert_eq!(m.inputs["a"], BitRange::new(1, 0));
        assert_eq!(m.outputs["b"], BitRange::new(2, 0));
        assert!(m.wires.contains("c"));
    }
}
