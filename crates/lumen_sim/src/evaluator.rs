//! Stack evaluation of assignment expressions.
//!
//! Tokens are consumed left to right against a value stack. An operator
//! waits only for its right-hand operand: as soon as that value is pushed,
//! the two most recent values are popped and their combination is pushed.
//! There is no precedence, so `a | b & c` is `(a | b) & c`. An operator
//! followed by another operator, or by the end of the expression, fires
//! with whatever the stack holds. A missing operand reads as
//! `Scalar(false)` and unresolvable tokens are skipped.

use crate::board::SimInputs;
use crate::context::EvalContext;
use lumen_common::{BitOp, Span, Value};
use lumen_parser::{lex, ExprToken, Token};
use serde::Serialize;

/// How a single token was resolved.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Bare `sw` or `btn`: the whole input vector.
    InputVector,
    /// `sw[i]`, `btn[i]` or a negated form. `in_range` is `false` when the
    /// index is past the vector and the default `false` was used.
    InputBit {
        /// Whether the index was inside the input vector.
        in_range: bool,
    },
    /// A wire from the context, pushed unchanged.
    Wire,
    /// `!name` for a wire in the context, pushed complemented.
    NegatedWire,
    /// A binary operator. `missing` operands were taken as `false`.
    Operator {
        /// Number of operands the stack could not supply (0 to 2).
        missing: u8,
    },
    /// Nothing matched; the token was skipped.
    Unresolved,
}

/// One token and what the evaluator did with it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct TokenEvent {
    /// The token, spanned relative to the expression text.
    pub token: Token,
    /// How it was resolved.
    pub resolution: Resolution,
}

/// Full record of evaluating one expression.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Evaluation {
    /// The result: top of the stack, or `Scalar(false)` if it was empty.
    pub value: Value,
    /// Per-token resolution in token order.
    pub events: Vec<TokenEvent>,
    /// Characters the lexer dropped.
    pub ignored: Vec<Span>,
    /// Values left on the stack at the end, including the result.
    pub stack_depth: usize,
}

/// Evaluates an expression and returns only its value.
pub fn eval_expression(expr: &str, inputs: &SimInputs, ctx: &EvalContext) -> Value {
    evaluate(expr, inputs, ctx).value
}

/// An operator waiting for its right-hand operand.
struct Pending {
    op: BitOp,
    event: usize,
}

/// Evaluates an expression, recording how every token was resolved.
pub fn evaluate(expr: &str, inputs: &SimInputs, ctx: &EvalContext) -> Evaluation {
    let lexed = lex(expr);
    let mut stack: Vec<Value> = Vec::new();
    let mut events: Vec<TokenEvent> = Vec::with_capacity(lexed.tokens.len());
    let mut pending: Option<Pending> = None;

    for token in lexed.tokens {
        if let Some(op) = token.kind.operator() {
            if let Some(prev) = pending.take() {
                apply(&mut stack, prev, &mut events);
            }
            events.push(TokenEvent {
                token,
                resolution: Resolution::Operator { missing: 0 },
            });
            pending = Some(Pending {
                op,
                event: events.len() - 1,
            });
            continue;
        }

        let resolution = match resolve_operand(&token.kind, inputs, ctx) {
            Some((value, resolution)) => {
                stack.push(value);
                resolution
            }
            None => Resolution::Unresolved,
        };
        tracing::trace!(token = %token.kind, ?resolution, "operand");
        events.push(TokenEvent { token, resolution });

        if resolution != Resolution::Unresolved {
            if let Some(op) = pending.take() {
                apply(&mut stack, op, &mut events);
            }
        }
    }
    if let Some(op) = pending.take() {
        apply(&mut stack, op, &mut events);
    }

    let stack_depth = stack.len();
    Evaluation {
        value: stack.pop().unwrap_or_default(),
        events,
        ignored: lexed.ignored,
        stack_depth,
    }
}

/// Pops `b` then `a`, pushes `a op b`, and records missing operands.
fn apply(stack: &mut Vec<Value>, pending: Pending, events: &mut [TokenEvent]) {
    let b = stack.pop();
    let a = stack.pop();
    let missing = u8::from(a.is_none()) + u8::from(b.is_none());
    let result = Value::combine(&a.unwrap_or_default(), &b.unwrap_or_default(), pending.op);
    tracing::trace!(op = %pending.op, missing, result = %result, "operator");
    stack.push(result);
    if let Some(event) = events.get_mut(pending.event) {
        event.resolution = Resolution::Operator { missing };
    }
}

/// Resolves a non-operator token in priority order: whole input vector,
/// input bit, context wire, negated context wire.
fn resolve_operand(
    token: &ExprToken,
    inputs: &SimInputs,
    ctx: &EvalContext,
) -> Option<(Value, Resolution)> {
    if let ExprToken::Identifier(name) = token {
        if let Some(bits) = inputs.vector(name) {
            return Some((Value::Vector(bits.to_vec()), Resolution::InputVector));
        }
    }

    if let (Some(name), Some(_)) = (token.name(), token.index()) {
        if let Some(bits) = inputs.vector(name) {
            let index = token.index_value();
            let in_range = index.is_some_and(|i| i < bits.len());
            let bit = inputs.bit(name, index);
            let bit = if token.is_negated() { !bit } else { bit };
            return Some((Value::Scalar(bit), Resolution::InputBit { in_range }));
        }
    }

    let key = token.signal_key()?;
    let value = ctx.get(&key)?;
    if token.is_negated() {
        Some((value.negate(), Resolution::NegatedWire))
    } else {
        Some((value.clone(), Resolution::Wire))
    }
}
