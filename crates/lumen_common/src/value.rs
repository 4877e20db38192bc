//! Signal values carried through expression evaluation.
//!
//! A [`Value`] is either a single boolean or a fixed-size vector of booleans.
//! Binary operators combine two values with implicit broadcasting: a scalar
//! operand is applied to every element of a vector operand, and two vectors
//! are combined over their overlapping indices only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A signal value: a scalar bit or a vector of bits (index 0 = LSB).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "bits", rename_all = "lowercase")]
pub enum Value {
    /// A single boolean.
    Scalar(bool),
    /// A vector of booleans, index 0 first.
    Vector(Vec<bool>),
}

impl Default for Value {
    /// The value every degenerate lookup falls back to: `Scalar(false)`.
    fn default() -> Self {
        Value::Scalar(false)
    }
}

impl Value {
    /// Returns the element-wise logical complement of this value.
    pub fn negate(&self) -> Value {
        match self {
            Value::Scalar(b) => Value::Scalar(!b),
            Value::Vector(bits) => Value::Vector(bits.iter().map(|b| !b).collect()),
        }
    }

    /// Returns the scalar this value holds, or `false` for a vector.
    ///
    /// Single-bit outputs (LEDs, individual segments) cannot hold a vector;
    /// a vector written to one reads as off.
    pub fn as_scalar(&self) -> bool {
        match self {
            Value::Scalar(b) => *b,
            Value::Vector(_) => false,
        }
    }

    /// Returns the bits of a vector value, or `None` for a scalar.
    pub fn as_vector(&self) -> Option<&[bool]> {
        match self {
            Value::Scalar(_) => None,
            Value::Vector(bits) => Some(bits),
        }
    }

    /// Returns `true` if this is a [`Value::Vector`].
    pub fn is_vector(&self) -> bool {
        matches!(self, Value::Vector(_))
    }

    /// Returns the number of bits: 1 for a scalar, the length for a vector.
    pub fn width(&self) -> usize {
        match self {
            Value::Scalar(_) => 1,
            Value::Vector(bits) => bits.len(),
        }
    }

    /// Combines two values with a binary operator, broadcasting as needed.
    ///
    /// - vector ∘ vector: element-wise over the overlapping indices; trailing
    ///   elements of the longer vector are dropped.
    /// - vector ∘ scalar (either side): the scalar is applied to every element.
    /// - scalar ∘ scalar: the operator applied directly.
    pub fn combine(a: &Value, b: &Value, op: BitOp) -> Value {
        match (a, b) {
            (Value::Vector(xs), Value::Vector(ys)) => Value::Vector(
                xs.iter()
                    .zip(ys.iter())
                    .map(|(&x, &y)| op.apply(x, y))
                    .collect(),
            ),
            (Value::Vector(xs), Value::Scalar(y)) => {
                Value::Vector(xs.iter().map(|&x| op.apply(x, *y)).collect())
            }
            (Value::Scalar(x), Value::Vector(ys)) => {
                Value::Vector(ys.iter().map(|&y| op.apply(*x, y)).collect())
            }
            (Value::Scalar(x), Value::Scalar(y)) => Value::Scalar(op.apply(*x, *y)),
        }
    }
}

impl fmt::Display for Value {
    /// Scalars print as `0`/`1`; vectors print MSB first with a width prefix,
    /// e.g. `4'b1010`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(b) => write!(f, "{}", u8::from(*b)),
            Value::Vector(bits) => {
                write!(f, "{}'b", bits.len())?;
                for b in bits.iter().rev() {
                    write!(f, "{}", u8::from(*b))?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({self})")
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(b)
    }
}

impl From<Vec<bool>> for Value {
    fn from(bits: Vec<bool>) -> Self {
        Value::Vector(bits)
    }
}

/// A binary bitwise operator.
///
/// `&&` and `&` both map to [`BitOp::And`]; `||` and `|` both map to
/// [`BitOp::Or`]. The logical and bitwise spellings are indistinguishable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum BitOp {
    /// Conjunction (`&&`, `&`).
    And,
    /// Disjunction (`||`, `|`).
    Or,
    /// Exclusive or, i.e. not-equal (`^`).
    Xor,
}

impl BitOp {
    /// Applies the operator to two bits.
    pub fn apply(self, x: bool, y: bool) -> bool {
        match self {
            BitOp::And => x && y,
            BitOp::Or => x || y,
            BitOp::Xor => x != y,
        }
    }

    /// Returns the canonical single-character spelling.
    pub fn symbol(self) -> &'static str {
        match self {
            BitOp::And => "&",
            BitOp::Or => "|",
            BitOp::Xor => "^",
        }
    }
}

impl fmt::Display for BitOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
