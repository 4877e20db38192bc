//! Output routing: where an assignment's value goes.
//!
//! Targets are classified by shape alone. `LED[i]` is an LED, `dN[s]` one
//! segment of display `N`, bare `dN` a whole display, and anything else a
//! wire. Writes outside the board layout are dropped.

use crate::board::{BoardLayout, SimOutputs};
use lumen_common::Value;
use serde::Serialize;

/// Syntactic class of an assignment target.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Target {
    /// `LED[index]`.
    Led(usize),
    /// `dN[s]`.
    Segment {
        /// Display number `N`.
        display: usize,
        /// Segment index `s`.
        segment: usize,
    },
    /// Bare `dN`.
    Display(usize),
    /// Any other name, stored in the evaluation context.
    Wire,
}

/// What routing actually did with a value.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteOutcome {
    /// Written to an LED.
    Led {
        /// LED index.
        index: usize,
    },
    /// Written to one segment.
    Segment {
        /// Display number.
        display: usize,
        /// Segment index.
        segment: usize,
    },
    /// Written to a whole display row.
    Display {
        /// Display number.
        index: usize,
    },
    /// To be stored in the evaluation context under the target text.
    Wire,
    /// Target addresses an LED, display or segment the board does not have.
    OutOfRange,
}

/// Splits `name[digits]` into its parts. Anything else has no index.
fn split_index(target: &str) -> (&str, Option<&str>) {
    if let Some(body) = target.strip_suffix(']') {
        if let Some((name, digits)) = body.split_once('[') {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                return (name, Some(digits));
            }
        }
    }
    (target, None)
}

/// Parses decimal digits; values too large for `usize` saturate, which puts
/// them out of range of any board.
fn parse_index(digits: &str) -> usize {
    digits.parse().unwrap_or(usize::MAX)
}

/// Classifies a target by its shape.
pub fn classify_target(target: &str) -> Target {
    let (name, index) = split_index(target);
    if name == "LED" {
        if let Some(i) = index {
            return Target::Led(parse_index(i));
        }
    }
    if let Some(num) = name.strip_prefix('d') {
        if !num.is_empty() && num.bytes().all(|b| b.is_ascii_digit()) {
            let display = parse_index(num);
            return match index {
                Some(s) => Target::Segment {
                    display,
                    segment: parse_index(s),
                },
                None => Target::Display(display),
            };
        }
    }
    Target::Wire
}

/// Writes `value` into `outputs` according to the target's class.
///
/// Returns [`RouteOutcome::Wire`] when the caller should store the value in
/// the evaluation context instead. A bare `dN` receiving a scalar is a wire.
/// LEDs and segments take [`Value::as_scalar`], so a vector reads as off.
pub fn route(
    target: &str,
    value: &Value,
    layout: &BoardLayout,
    outputs: &mut SimOutputs,
) -> RouteOutcome {
    let outcome = match classify_target(target) {
        Target::Led(index) => match outputs.leds.get_mut(index) {
            Some(led) => {
                *led = value.as_scalar();
                RouteOutcome::Led { index }
            }
            None => RouteOutcome::OutOfRange,
        },
        Target::Segment { display, segment } => {
            match outputs.displays.get_mut(display).and_then(|row| row.get_mut(segment)) {
                Some(seg) => {
                    *seg = value.as_scalar();
                    RouteOutcome::Segment { display, segment }
                }
                None => RouteOutcome::OutOfRange,
            }
        }
        Target::Display(index) => match value.as_vector() {
            Some(bits) => match outputs.displays.get_mut(index) {
                Some(row) => {
                    let n = bits.len().min(layout.segments);
                    row.clear();
                    row.extend_from_slice(&bits[..n]);
                    row.resize(layout.segments, false);
                    RouteOutcome::Display { index }
                }
                None => RouteOutcome::OutOfRange,
            },
            None => RouteOutcome::Wire,
        },
        Target::Wire => RouteOutcome::Wire,
    };

    if outcome == RouteOutcome::OutOfRange {
        tracing::debug!(signal = target, "ignoring write outside the board layout");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_shapes() {
        assert_eq!(classify_target("LED[3]"), Target::Led(3));
        assert_eq!(
            classify_target("d2[6]"),
            Target::Segment {
                display: 2,
                segment: 6
            }
        );
        assert_eq!(classify_target("d07"), Target::Display(7));
        assert_eq!(classify_target("w1"), Target::Wire);
        assert_eq!(classify_target("LED"), Target::Wire);
        assert_eq!(classify_target("led[0]"), Target::Wire);
        assert_eq!(classify_target("add1"), Target::Wire);
        assert_eq!(classify_target("xd1[2]"), Target::Wire);
        assert_eq!(classify_target("d"), Target::Wire);
        assert_eq!(classify_target("d1x"), Target::Wire);
        assert_eq!(classify_target("w[3]"), Target::Wire);
    }

    #[test]
    fn huge_index_saturates() {
        assert_eq!(
            classify_target("LED[99999999999999999999999]"),
            Target::Led(usize::MAX)
        );
    }

    #[test]
    fn led_write() {
        let layout = BoardLayout::default();
        let mut out = SimOutputs::new(&layout);
        let r = route("LED[9]", &Value::Scalar(true), &layout, &mut out);
        assert_eq!(r, RouteOutcome::Led { index: 9 });
        assert!(out.led(9));
    }

    #[test]
    fn vector_to_led_reads_off() {
        let layout = BoardLayout::default();
        let mut out = SimOutputs::new(&layout);
        out.leds[1] = true;
        route("LED[1]", &Value::Vector(vec![true, true]), &layout, &mut out);
        assert!(!out.led(1));
    }

    #[test]
    fn out_of_range_targets_dropped() {
        let layout = BoardLayout::default();
        let mut out = SimOutputs::new(&layout);
        let on = Value::Scalar(true);
        assert_eq!(route("LED[10]", &on, &layout, &mut out), RouteOutcome::OutOfRange);
        assert_eq!(route("d8[0]", &on, &layout, &mut out), RouteOutcome::OutOfRange);
        assert_eq!(route("d0[8]", &on, &layout, &mut out), RouteOutcome::OutOfRange);
        assert_eq!(
            route("d9", &Value::Vector(vec![true]), &layout, &mut out),
            RouteOutcome::OutOfRange
        );
        assert!(out.is_dark());
    }

    #[test]
    fn segment_write() {
        let layout = BoardLayout::default();
        let mut out = SimOutputs::new(&layout);
        route("d3[6]", &Value::Scalar(true), &layout, &mut out);
        assert!(out.segment(3, 6));
        assert!(!out.segment(3, 5));
    }

    #[test]
    fn display_row_truncated_and_padded() {
        let layout = BoardLayout::default();
        let mut out = SimOutputs::new(&layout);

        route("d0", &Value::Vector(vec![true; 12]), &layout, &mut out);
        assert_eq!(out.displays[0], vec![true; 8]);

        out.displays[1][7] = true;
        route("d1", &Value::Vector(vec![true, false, true]), &layout, &mut out);
        assert_eq!(
            out.displays[1],
            vec![true, false, true, false, false, false, false, false]
        );
    }

    #[test]
    fn scalar_to_display_is_wire() {
        let layout = BoardLayout::default();
        let mut out = SimOutputs::new(&layout);
        assert_eq!(
            route("d0", &Value::Scalar(true), &layout, &mut out),
            RouteOutcome::Wire
        );
        assert!(out.is_dark());
    }
}
