//! Shared foundational types used across the Lumen simulator.
//!
//! This crate provides the two-variant signal [`Value`] with its broadcasting
//! combinators, bit-string parsing for input vectors, byte-offset [`Span`]s,
//! and [`SourceText`] for line/column lookup.

#![warn(missing_docs)]

pub mod bits;
pub mod source;
pub mod span;
pub mod value;

pub use bits::{bits_from_u64, format_bits, parse_bits, parse_bits_with_width, ParseBitsError};
pub use source::SourceText;
pub use span::Span;
pub use value::{BitOp, Value};
