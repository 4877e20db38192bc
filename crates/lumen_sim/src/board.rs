//! Board layout, input vectors and output slots.

use serde::{Deserialize, Serialize};

/// Sizes of the output side of the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Number of LEDs (`LED[0]` ..).
    pub leds: usize,
    /// Number of seven-segment displays (`d0` ..).
    pub displays: usize,
    /// Segments per display (`dN[0]` ..).
    pub segments: usize,
}

impl BoardLayout {
    /// Creates a layout with the given sizes.
    pub fn new(leds: usize, displays: usize, segments: usize) -> Self {
        Self {
            leds,
            displays,
            segments,
        }
    }
}

impl Default for BoardLayout {
    /// 10 LEDs and 8 displays of 8 segments.
    fn default() -> Self {
        Self::new(10, 8, 8)
    }
}

/// The two input vectors, index 0 = LSB.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SimInputs {
    /// Switch states.
    pub sw: Vec<bool>,
    /// Button states.
    pub btn: Vec<bool>,
}

impl SimInputs {
    /// Creates inputs from explicit vectors. Their lengths are the widths
    /// expressions see.
    pub fn new(sw: Vec<bool>, btn: Vec<bool>) -> Self {
        Self { sw, btn }
    }

    /// All-false inputs of the given widths.
    pub fn zeros(switches: usize, buttons: usize) -> Self {
        Self::new(vec![false; switches], vec![false; buttons])
    }

    /// Returns the vector named `sw` or `btn`.
    pub fn vector(&self, name: &str) -> Option<&[bool]> {
        match name {
            "sw" => Some(&self.sw),
            "btn" => Some(&self.btn),
            _ => None,
        }
    }

    /// Reads one bit of a named input. Unknown names, missing indices and
    /// out-of-range indices read as `false`.
    pub fn bit(&self, name: &str, index: Option<usize>) -> bool {
        match (self.vector(name), index) {
            (Some(bits), Some(i)) => bits.get(i).copied().unwrap_or(false),
            _ => false,
        }
    }
}

impl Default for SimInputs {
    /// 8 switches and 5 buttons, all off.
    fn default() -> Self {
        Self::zeros(8, 5)
    }
}

/// LED vector and display matrix produced by one simulation.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SimOutputs {
    /// LED states, index 0 first.
    pub leds: Vec<bool>,
    /// One row of segments per display, in `a b c d e f g dp` order.
    pub displays: Vec<Vec<bool>>,
}

impl SimOutputs {
    /// All-false outputs sized by `layout`.
    pub fn new(layout: &BoardLayout) -> Self {
        Self {
            leds: vec![false; layout.leds],
            displays: vec![vec![false; layout.segments]; layout.displays],
        }
    }

    /// LED state, `false` when out of range.
    pub fn led(&self, index: usize) -> bool {
        self.leds.get(index).copied().unwrap_or(false)
    }

    /// Segment state, `false` when out of range.
    pub fn segment(&self, display: usize, segment: usize) -> bool {
        self.displays
            .get(display)
            .and_then(|row| row.get(segment))
            .copied()
            .unwrap_or(false)
    }

    /// Returns `true` if every LED and segment is off.
    pub fn is_dark(&self) -> bool {
        self.leds.iter().all(|b| !b) && self.displays.iter().flatten().all(|b| !b)
    }
}

impl Default for SimOutputs {
    fn default() -> Self {
        Self::new(&BoardLayout::default())
    }
}
