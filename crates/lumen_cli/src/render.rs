//! Text rendering of the simulated board.
//!
//! LEDs print as one row of `*` (on) and `.` (off) in index order.
//! Displays print as three-line ASCII seven-segment digits, left to right
//! from `d0`, with segments taken in `a b c d e f g dp` order:
//!
//! ```text
//!  _      a
//! |_|   f g b
//! |_|.  e d c dp
//! ```

use lumen_sim::SimOutputs;

const LED_ON: char = '*';
const LED_OFF: char = '.';

/// LED states as `*`/`.` in index order.
pub fn led_bits(leds: &[bool]) -> String {
    leds.iter()
        .map(|&on| if on { LED_ON } else { LED_OFF })
        .collect()
}

/// Renders the LED row, e.g. `LED[0..9]  *..*......`.
pub fn led_row(leds: &[bool]) -> String {
    let bits = led_bits(leds);
    match leds.len() {
        0 => "LED  (none)".to_string(),
        n => format!("LED[0..{}]  {bits}", n - 1),
    }
}

/// Renders every display as three lines of ASCII art.
pub fn segment_art(displays: &[Vec<bool>]) -> String {
    let mut lines = [String::new(), String::new(), String::new()];
    for (i, row) in displays.iter().enumerate() {
        if i > 0 {
            for line in lines.iter_mut() {
                line.push(' ');
            }
        }
        let seg = |s: usize, on: char| if row.get(s).copied().unwrap_or(false) { on } else { ' ' };
        lines[0].extend([' ', seg(0, '_'), ' ', ' ']);
        lines[1].extend([seg(5, '|'), seg(6, '_'), seg(1, '|'), ' ']);
        lines[2].extend([seg(4, '|'), seg(3, '_'), seg(2, '|'), seg(7, '.')]);
    }
    lines
        .iter()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the full board: the LED row, then the display art if any
/// display has a segment lit.
pub fn render_outputs(outputs: &SimOutputs) -> String {
    let mut out = led_row(&outputs.leds);
    if outputs.displays.iter().flatten().any(|&b| b) {
        out.push('\n');
        out.push_str(&segment_art(&outputs.displays));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_sim::BoardLayout;

    fn row(bits: &str) -> Vec<bool> {
        bits.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn led_row_in_index_order() {
        let leds = row("1001000000");
        assert_eq!(led_row(&leds), "LED[0..9]  *..*......");
    }

    #[test]
    fn led_row_empty_board() {
        assert_eq!(led_row(&[]), "LED  (none)");
    }

    #[test]
    fn digit_eight_with_point() {
        let art = segment_art(&[row("11111111")]);
        assert_eq!(art, " _\n|_|\n|_|.");
    }

    #[test]
    fn digit_one() {
        // b and c only
        let art = segment_art(&[row("01100000")]);
        assert_eq!(art, "\n  |\n  |");
    }

    #[test]
    fn displays_side_by_side() {
        // d0 shows 7 (a b c), d1 shows a lone g
        let art = segment_art(&[row("11100000"), row("00000010")]);
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines[0], " _");
        assert_eq!(lines[1], "  |   _");
        assert_eq!(lines[2], "  |");
    }

    #[test]
    fn short_rows_read_as_dark() {
        let art = segment_art(&[row("1")]);
        assert_eq!(art, " _\n\n");
    }

    #[test]
    fn dark_displays_are_omitted() {
        let mut outputs = SimOutputs::new(&BoardLayout::default());
        outputs.leds[0] = true;
        assert_eq!(render_outputs(&outputs), "LED[0..9]  *.........");

        outputs.displays[2][6] = true;
        let text = render_outputs(&outputs);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "           _");
    }

    #[test]
    fn lit_displays_are_one_column_apart() {
        let art = segment_art(&[row("11111111"), row("11111111")]);
        assert_eq!(art, " _    _\n|_|  |_|\n|_|. |_|.");
    }
}
