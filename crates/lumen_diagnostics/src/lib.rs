//! Lint findings and how they are shown.
//!
//! Rules build a [`Diagnostic`] per finding and push it into a shared
//! [`DiagnosticSink`]. `lumen check` then either prints them through
//! [`TerminalRenderer`], which underlines spans of the
//! [`SourceText`](lumen_common::SourceText) rustc-style, or serializes them
//! as JSON.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode, ParseCodeError};
pub use diagnostic::{Diagnostic, Label, LabelStyle};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
