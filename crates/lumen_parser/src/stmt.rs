//! Assignment extractor: `assign <target> = <expression>;`.
//!
//! The target is an identifier with at most one bracketed decimal index.
//! The expression runs up to the last `;` on the line and is trimmed. Lines
//! that mention `assign` but do not fit the pattern are skipped; they can be
//! listed with [`find_malformed_assigns`].

use crate::ast::Assignment;
use crate::lines::{source_lines, SourceLine};
use lumen_common::Span;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ASSIGN_STMT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"assign\s+([0-9A-Za-z_]+(?:\[[0-9]+\])?)\s*=\s*(.+);").expect("assign pattern")
});

static ASSIGN_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bassign\b").expect("assign keyword pattern"));

/// A line that mentions `assign` but was not recognised as a statement.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MalformedAssign {
    /// 1-based source line.
    pub line: u32,
    /// Span from the `assign` keyword to the end of the line.
    pub span: Span,
}

/// Extracts the assignment on one line, if any.
pub(crate) fn assign_on_line(line: SourceLine<'_>) -> Option<Assignment> {
    let caps = ASSIGN_STMT.captures(line.text)?;
    let whole = caps.get(0)?;
    let target = caps.get(1)?;
    let expr = caps.get(2)?;

    let raw = expr.as_str();
    let trimmed = raw.trim();
    let lead = raw.len() - raw.trim_start().len();
    let expr_start = line.offset + expr.start() + lead;

    Some(Assignment {
        target: target.as_str().to_string(),
        expr: trimmed.to_string(),
        line: line.number,
        span: Span::from_range(line.offset + whole.start(), line.offset + whole.end()),
        target_span: Span::from_range(line.offset + target.start(), line.offset + target.end()),
        expr_span: Span::from_range(expr_start, expr_start + trimmed.len()),
    })
}

/// Returns every assignment in source order, duplicates included.
///
/// [`crate::parse_module`] keeps only the last occurrence of each target;
/// this raw list is what duplicate detection works from.
pub fn extract_assignments(source: &str) -> Vec<Assignment> {
    source_lines(source).filter_map(assign_on_line).collect()
}

/// Lists lines containing the word `assign` that the extractor skipped.
pub fn find_malformed_assigns(source: &str) -> Vec<MalformedAssign> {
    source_lines(source)
        .filter(|line| !ASSIGN_STMT.is_match(line.text))
        .filter_map(|line| {
            let kw = ASSIGN_WORD.find(line.text)?;
            let end = line.text.trim_end().len();
            tracing::debug!(line = line.number, "skipping malformed assign");
            Some(MalformedAssign {
                line: line.number,
                span: Span::from_range(line.offset + kw.start(), line.offset + end),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_and_indexed_targets() {
        let a = extract_assignments("assign w1 = sw[0];\nassign LED[3] = w1 & btn[2];\n");
        assert_eq!(a.len(), 2);
        assert_eq!(a[0].target, "w1");
        assert_eq!(a[0].expr, "sw[0]");
        assert_eq!(a[0].line, 1);
        assert_eq!(a[1].target, "LED[3]");
        assert_eq!(a[1].expr, "w1 & btn[2]");
        assert_eq!(a[1].line, 2);
    }

    #[test]
    fn spans_point_into_source() {
        let src = "  assign LED[3] =   sw[1] ^ sw[2]  ;";
        let a = &extract_assignments(src)[0];
        assert_eq!(&src[a.span.start as usize..a.span.end as usize], "assign LED[3] =   sw[1] ^ sw[2]  ;");
        assert_eq!(&src[a.target_span.start as usize..a.target_span.end as usize], "LED[3]");
        assert_eq!(&src[a.expr_span.start as usize..a.expr_span.end as usize], "sw[1] ^ sw[2]");
    }

    #[test]
    fn expression_runs_to_last_semicolon() {
        let a = extract_assignments("assign x = a; // b;");
        assert_eq!(a[0].expr, "a; // b");
    }

    #[test]
    fn no_space_around_equals() {
        let a = extract_assignments("assign d0=sw;");
        assert_eq!(a[0].target, "d0");
        assert_eq!(a[0].expr, "sw");
    }

    #[test]
    fn duplicates_are_all_reported() {
        let a = extract_assignments("assign a = sw[0];\nassign a = sw[1];");
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn malformed_lines_skipped() {
        let src = "assign LED[0] = sw[0]\nassign LED[a] = sw[1];\nassign = sw[2];\nassign LED[1] = sw[1];";
        let a = extract_assignments(src);
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].target, "LED[1]");

        let bad = find_malformed_assigns(src);
        let lines: Vec<_> = bad.iter().map(|m| m.line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
        assert_eq!(
            &src[bad[0].span.start as usize..bad[0].span.end as usize],
            "assign LED[0] = sw[0]"
        );
    }

    #[test]
    fn word_inside_identifier_is_not_malformed() {
        assert!(find_malformed_assigns("wire reassigned;\nwire assign_ok;").is_empty());
    }

    #[test]
    fn nested_brackets_rejected() {
        assert!(extract_assignments("assign a[1][2] = sw;").is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let a = extract_assignments("assign a = sw[0];\r\nassign b = a;\r\n");
        assert_eq!(a.len(), 2);
        assert_eq!(a[1].expr, "a");
    }
}
