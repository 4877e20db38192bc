//! The evaluation context: wire values computed so far.

use lumen_common::Value;
use serde::Serialize;
use std::collections::BTreeMap;

/// Wire values visible to the next expression.
///
/// Keys are assignment targets exactly as written, including any bracket
/// suffix. The context only grows: each step produces a new context from the
/// previous one with [`EvalContext::with_wire`].
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize)]
#[serde(transparent)]
pub struct EvalContext {
    wires: BTreeMap<String, Value>,
}

impl EvalContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this context extended with `name = value`.
    pub fn with_wire(mut self, name: impl Into<String>, value: Value) -> Self {
        self.wires.insert(name.into(), value);
        self
    }

    /// Looks up a wire by its exact key.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.wires.get(name)
    }

    /// Returns `true` if `name` has been assigned.
    pub fn contains(&self, name: &str) -> bool {
        self.wires.contains_key(name)
    }

    /// Number of wires.
    pub fn len(&self) -> usize {
        self.wires.len()
    }

    /// Returns `true` if no wire has been assigned.
    pub fn is_empty(&self) -> bool {
        self.wires.is_empty()
    }

    /// Iterates over wires in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.wires.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates() {
        let ctx = EvalContext::new()
            .with_wire("w1", Value::Scalar(true))
            .with_wire("bus[2]", Value::Vector(vec![true, false]));
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.get("w1"), Some(&Value::Scalar(true)));
        assert!(ctx.contains("bus[2]"));
        assert!(!ctx.contains("bus"));
    }

    #[test]
    fn earlier_context_unchanged() {
        let before = EvalContext::new().with_wire("a", Value::Scalar(false));
        let after = before.clone().with_wire("b", Value::Scalar(true));
        assert!(!before.contains("b"));
        assert!(after.contains("a"));
    }

    #[test]
    fn iter_in_name_order() {
        let ctx = EvalContext::new()
            .with_wire("z", Value::default())
            .with_wire("a", Value::default());
        let names: Vec<_> = ctx.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["a", "z"]);
    }
}
