//! `lumen.toml`: the board a source is simulated on, default inputs, and
//! lint policy.
//!
//! The file is optional and so is every key in it. Whatever is missing
//! falls back to the reference board: 8 switches, 5 buttons, 10 LEDs and
//! eight 8-segment displays.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::{BoardConfig, InputDefaults, LintConfig, LumenConfig};
