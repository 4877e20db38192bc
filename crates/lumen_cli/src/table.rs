//! `lumen table`: sweep every switch combination.
//!
//! Prints one row per switch value, counting up from all-off, with the
//! LED row that value produces. Buttons are held at `--btn`, the config
//! default, or all-off.

use lumen_common::{bits_from_u64, format_bits};
use lumen_sim::{simulate_with, BoardLayout, SimInputs};

use crate::pipeline::{board_layout, load_config, load_source, resolve_inputs};
use crate::render::led_bits;
use crate::{GlobalArgs, TableArgs};

/// Widest switch vector a table is printed for (4096 rows).
pub const MAX_TABLE_SWITCHES: usize = 12;

/// Runs the `lumen table` command.
pub fn run(args: &TableArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let source = load_source(&args.file)?;
    let config = load_config(global, &args.file)?;
    let switches = config.board.switches;
    if switches > MAX_TABLE_SWITCHES {
        return Err(format!(
            "board has {switches} switches; tables are limited to {MAX_TABLE_SWITCHES}"
        )
        .into());
    }
    let btn = resolve_inputs(None, args.btn.as_deref(), &config)?.btn;

    if !global.quiet {
        eprintln!("   Tabulating {} ({} rows)", args.file, 1u64 << switches);
    }

    let layout = board_layout(&config.board);
    for line in table_rows(&source.content, switches, &btn, &layout) {
        println!("{line}");
    }
    Ok(0)
}

/// Builds the header and one line per switch combination. Every row is a
/// fresh simulation of `source`.
fn table_rows(
    source: &str,
    switches: usize,
    btn: &[bool],
    layout: &BoardLayout,
) -> Vec<String> {
    let sw_col = switches.max(2);
    let mut rows = vec![format!("{:<sw_col$}  LED", "sw")];
    for value in 0..(1u64 << switches) {
        let inputs = SimInputs::new(bits_from_u64(value, switches), btn.to_vec());
        let outputs = simulate_with(source, &inputs, layout);
        rows.push(format!(
            "{:<sw_col$}  {}",
            format_bits(&inputs.sw),
            led_bits(&outputs.leds)
        ));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_switch_table() {
        let src = "assign LED[0] = sw[0] ^ sw[1];\nassign LED[1] = sw[0] & sw[1];";
        let layout = BoardLayout::new(2, 0, 0);
        let rows = table_rows(src, 2, &[false; 5], &layout);
        assert_eq!(rows, vec!["sw  LED", "00  ..", "01  *.", "10  *.", "11  .*"]);
    }

    #[test]
    fn buttons_are_held() {
        let src = "assign LED[0] = sw[0] | btn[0];";
        let layout = BoardLayout::new(1, 0, 0);
        let rows = table_rows(src, 1, &[true], &layout);
        assert_eq!(rows, vec!["sw  LED", "0   *", "1   *"]);
    }

    #[test]
    fn wide_header_pads_to_switch_width() {
        let rows = table_rows("", 3, &[], &BoardLayout::new(1, 0, 0));
        assert_eq!(rows[0], "sw   LED");
        assert_eq!(rows[8], "111  .");
        assert_eq!(rows.len(), 9);
    }

    #[test]
    fn rows_match_single_simulations() {
        let src = "assign w = sw[1] & !sw[0];\nassign LED[1] = w | btn[0];";
        let layout = BoardLayout::new(2, 0, 0);
        let rows = table_rows(src, 2, &[false], &layout);
        for value in 0..4u64 {
            let inputs = SimInputs::new(bits_from_u64(value, 2), vec![false]);
            let leds = simulate_with(src, &inputs, &layout).leds;
            assert!(rows[value as usize + 1].ends_with(&led_bits(&leds)));
        }
        assert_eq!(rows[3], "10  .*");
    }
}
