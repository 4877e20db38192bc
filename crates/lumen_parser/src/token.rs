//! Expression token types.
//!
//! Defines the [`ExprToken`] variants the expression lexer produces and the
//! [`Token`] struct pairing a token with its [`Span`] inside the expression.

use lumen_common::{BitOp, Span};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An expression token.
///
/// Index digits are kept as written so that `w[03]` and `w[3]` stay distinct
/// names, matching how assignment targets are stored.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ExprToken {
    /// A bare name: `sw`, `w1`, `d0`.
    Identifier(String),
    /// A name with one bracketed index: `sw[3]`.
    IndexedIdentifier {
        /// The name before the bracket.
        name: String,
        /// The decimal index digits.
        index: String,
    },
    /// `!` followed by a bare name.
    NegatedIdentifier(String),
    /// `!` followed by an indexed name.
    NegatedIndexedIdentifier {
        /// The name before the bracket.
        name: String,
        /// The decimal index digits.
        index: String,
    },
    /// A binary operator. `&&`/`&` and `||`/`|` share a variant.
    Operator(BitOp),
}

impl ExprToken {
    /// Returns `true` for the two `Negated*` variants.
    pub fn is_negated(&self) -> bool {
        matches!(
            self,
            ExprToken::NegatedIdentifier(_) | ExprToken::NegatedIndexedIdentifier { .. }
        )
    }

    /// Returns the operator, if this is an operator token.
    pub fn operator(&self) -> Option<BitOp> {
        match self {
            ExprToken::Operator(op) => Some(*op),
            _ => None,
        }
    }

    /// Returns the name part of an identifier token.
    pub fn name(&self) -> Option<&str> {
        match self {
            ExprToken::Identifier(name)
            | ExprToken::NegatedIdentifier(name)
            | ExprToken::IndexedIdentifier { name, .. }
            | ExprToken::NegatedIndexedIdentifier { name, .. } => Some(name),
            ExprToken::Operator(_) => None,
        }
    }

    /// Returns the index digits of an indexed token.
    pub fn index(&self) -> Option<&str> {
        match self {
            ExprToken::IndexedIdentifier { index, .. }
            | ExprToken::NegatedIndexedIdentifier { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Returns the numeric index, or `None` if absent or too large for `usize`.
    pub fn index_value(&self) -> Option<usize> {
        self.index().and_then(|digits| digits.parse().ok())
    }

    /// The signal this token names, without any `!`: `w1` or `LED[3]`.
    ///
    /// This is the key under which an assignment to the same text would be
    /// stored in the evaluation context.
    pub fn signal_key(&self) -> Option<String> {
        let name = self.name()?;
        Some(match self.index() {
            Some(index) => format!("{name}[{index}]"),
            None => name.to_string(),
        })
    }
}

impl fmt::Display for ExprToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprToken::Operator(op) => write!(f, "{op}"),
            _ => {
                if self.is_negated() {
                    f.write_str("!")?;
                }
                if let Some(key) = self.signal_key() {
                    f.write_str(&key)?;
                }
                Ok(())
            }
        }
    }
}

/// A token with its location inside the expression text.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Token {
    /// The kind of this token.
    pub kind: ExprToken,
    /// Byte span relative to the start of the expression.
    pub span: Span,
}
