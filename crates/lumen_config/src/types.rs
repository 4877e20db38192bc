//! Configuration types deserialized from `lumen.toml`.

use serde::Deserialize;

/// The top-level configuration parsed from `lumen.toml`.
///
/// Every section is optional. An empty file describes the reference board:
/// 8 switches, 5 buttons, 10 LEDs and 8 seven-segment displays of 8 segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LumenConfig {
    /// Input widths and output sizes.
    pub board: BoardConfig,
    /// Default input state used when none is given on the command line.
    pub inputs: InputDefaults,
    /// Lint settings (deny/allow lists).
    pub lint: LintConfig,
}

/// Physical layout of the simulated board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Width of the `sw` input vector.
    pub switches: usize,
    /// Width of the `btn` input vector.
    pub buttons: usize,
    /// Number of LEDs addressable as `LED[i]`.
    pub leds: usize,
    /// Number of seven-segment displays addressable as `dN`.
    pub displays: usize,
    /// Segments per display addressable as `dN[s]`.
    pub segments: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            switches: 8,
            buttons: 5,
            leds: 10,
            displays: 8,
            segments: 8,
        }
    }
}

/// Default input bit strings, written MSB first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    /// Default switch state, e.g. `"00000001"`.
    pub sw: Option<String>,
    /// Default button state, e.g. `"00000"`.
    pub btn: Option<String>,
}

/// Lint configuration controlling which rules are promoted or suppressed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Rules whose diagnostics are promoted to errors (name or code).
    pub deny: Vec<String>,
    /// Rules that are not run at all (name or code).
    pub allow: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_board_defaults() {
        let board = BoardConfig::default();
        assert_eq!(board.switches, 8);
        assert_eq!(board.buttons, 5);
        assert_eq!(board.leds, 10);
        assert_eq!(board.displays, 8);
        assert_eq!(board.segments, 8);
    }

    #[test]
    fn partial_board_section_keeps_other_defaults() {
        let config: LumenConfig = toml::from_str("[board]\nleds = 16\n").unwrap();
        assert_eq!(config.board.leds, 16);
        assert_eq!(config.board.switches, 8);
        assert!(config.inputs.sw.is_none());
        assert!(config.lint.deny.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: LumenConfig = toml::from_str("[board]\ncolor = \"red\"\n").unwrap();
        assert_eq!(config.board, BoardConfig::default());
    }
}
