//! All built-in lint rule implementations.
//!
//! This module re-exports all individual rule types and provides
//! `register_builtin_rules` to add all 9 rules to a `LintEngine`.

mod c201;
mod w101;
mod w102;
mod w103;
mod w104;
mod w105;
mod w106;
mod w107;
mod w108;

pub use c201::UndeclaredWire;
pub use w101::SkippedAssign;
pub use w102::ForwardReference;
pub use w103::UnresolvedToken;
pub use w104::MissingOperand;
pub use w105::IndexOutOfRange;
pub use w106::DuplicateAssign;
pub use w107::IgnoredCharacters;
pub use w108::UnusedOperands;

use crate::LintEngine;

/// Registers all 9 built-in lint rules with the engine.
///
/// This adds rules W101-W108 and C201.
pub fn register_builtin_rules(engine: &mut LintEngine) {
    engine.register(Box::new(SkippedAssign));
    engine.register(Box::new(ForwardReference));
    engine.register(Box::new(UnresolvedToken));
    engine.register(Box::new(MissingOperand));
    engine.register(Box::new(IndexOutOfRange));
    engine.register(Box::new(DuplicateAssign));
    engine.register(Box::new(IgnoredCharacters));
    engine.register(Box::new(UnusedOperands));
    engine.register(Box::new(UndeclaredWire));
}
