//! Diagnostic accumulator shared by the lint rules.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Collects diagnostics from lint rules and keeps per-severity tallies.
///
/// Rules emit in whatever order they walk the trace; [`take_sorted`]
/// hands them back in source order for rendering.
///
/// [`take_sorted`]: DiagnosticSink::take_sorted
pub struct DiagnosticSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
    errors: AtomicUsize,
    warnings: AtomicUsize,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            errors: AtomicUsize::new(0),
            warnings: AtomicUsize::new(0),
        }
    }

    /// Records a diagnostic and bumps the tally for its severity.
    pub fn emit(&self, diag: Diagnostic) {
        let counter = match diag.severity {
            Severity::Error => &self.errors,
            Severity::Warning => &self.warnings,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        self.lock().push(diag);
    }

    /// Returns `true` if a denied rule fired.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Number of error diagnostics emitted so far.
    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }

    /// Number of warning diagnostics emitted so far.
    pub fn warning_count(&self) -> usize {
        self.warnings.load(Ordering::Relaxed)
    }

    /// Drains the sink in emission order. Tallies are not reset.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    /// Drains the sink ordered by span start, ties broken by code.
    pub fn take_sorted(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.take_all();
        diagnostics.sort_by(|a, b| {
            a.primary_span
                .start
                .cmp(&b.primary_span.start)
                .then_with(|| a.code.to_string().cmp(&b.code.to_string()))
        });
        diagnostics
    }

    /// Returns a copy of everything emitted so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    // A rule that panicked mid-push still leaves a usable Vec.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}
