//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::LumenConfig;
use lumen_common::parse_bits_with_width;
use std::path::Path;

/// File name looked up next to the simulated source file.
pub const CONFIG_FILE_NAME: &str = "lumen.toml";

/// Loads `lumen.toml` from a directory.
///
/// A missing file is not an error: the reference board configuration is
/// returned instead.
pub fn load_config(dir: &Path) -> Result<LumenConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        return Ok(LumenConfig::default());
    }
    load_config_file(&config_path)
}

/// Loads and validates a configuration from an explicit file path.
pub fn load_config_file(path: &Path) -> Result<LumenConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `lumen.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<LumenConfig, ConfigError> {
    let config: LumenConfig = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks board sizes and that default inputs fit the declared widths.
fn validate_config(config: &LumenConfig) -> Result<(), ConfigError> {
    let board = &config.board;
    for (field, size) in [
        ("switches", board.switches),
        ("buttons", board.buttons),
        ("leds", board.leds),
        ("displays", board.displays),
        ("segments", board.segments),
    ] {
        if size == 0 {
            return Err(ConfigError::EmptyBoard { field });
        }
    }

    for (field, value, width) in [
        ("sw", &config.inputs.sw, board.switches),
        ("btn", &config.inputs.btn, board.buttons),
    ] {
        if let Some(bits) = value {
            parse_bits_with_width(bits, width)
                .map_err(|source| ConfigError::InvalidInput { field, source })?;
        }
    }
    Ok(())
}
