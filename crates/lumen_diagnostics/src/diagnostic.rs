//! A single finding: where it is, what it is, and what to do about it.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use lumen_common::Span;
use serde::{Deserialize, Serialize};

/// Whether a label marks the finding itself or a related location.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// Underlined with `^`.
    Primary,
    /// Printed as a `= file:line:col: message` pointer, e.g. the later
    /// assignment a forward reference was waiting for.
    Secondary,
}

/// A span with a short message attached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The bytes this label refers to.
    pub span: Span,
    /// Text printed with the span.
    pub message: String,
    /// Primary or secondary.
    pub style: LabelStyle,
}

impl Label {
    /// A `^^^` label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::styled(span, message, LabelStyle::Primary)
    }

    /// A pointer to related context.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::styled(span, message, LabelStyle::Secondary)
    }

    fn styled(span: Span, message: impl Into<String>, style: LabelStyle) -> Self {
        Self {
            span,
            message: message.into(),
            style,
        }
    }
}

/// A lint finding anchored at `primary_span`.
///
/// Rules build these with the `with_*` methods:
///
/// ```
/// use lumen_common::Span;
/// use lumen_diagnostics::{Category, Diagnostic, DiagnosticCode, Label};
///
/// let diag = Diagnostic::warning(
///     DiagnosticCode::new(Category::Warning, 104),
///     "`&` has only one operand",
///     Span::new(16, 17),
/// )
/// .with_label(Label::primary(Span::new(16, 17), "1 operand taken as false"))
/// .with_help("`&x` evaluates as `false & x`");
/// assert_eq!(diag.labels.len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Warning unless the rule was denied.
    pub severity: Severity,
    /// Code of the rule that fired.
    pub code: DiagnosticCode,
    /// One-line summary, printed in the header.
    pub message: String,
    /// Where the finding is reported.
    pub primary_span: Span,
    /// Underlined spans, in the order the rule attached them.
    pub labels: Vec<Label>,
    /// `= note:` lines.
    pub notes: Vec<String>,
    /// `= help:` lines.
    pub help: Vec<String>,
}

impl Diagnostic {
    /// A diagnostic with no labels, notes or help yet.
    pub fn new(
        severity: Severity,
        code: DiagnosticCode,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            primary_span: span,
            labels: Vec::new(),
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Shorthand for [`Diagnostic::new`] with [`Severity::Error`].
    pub fn error(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Error, code, message, span)
    }

    /// Shorthand for [`Diagnostic::new`] with [`Severity::Warning`].
    pub fn warning(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Warning, code, message, span)
    }

    /// Appends a label.
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Appends a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Appends a help line.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Labels drawn with `^`.
    pub fn primary_labels(&self) -> impl Iterator<Item = &Label> {
        self.labels
            .iter()
            .filter(|l| l.style == LabelStyle::Primary)
    }
}
