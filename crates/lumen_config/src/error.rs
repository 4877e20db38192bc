//! Errors raised while reading `lumen.toml`.

use lumen_common::ParseBitsError;

/// Why a `lumen.toml` was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not valid TOML or has fields of the wrong type.
    #[error("failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A `[board]` size is zero.
    #[error("board.{field} must be at least 1")]
    EmptyBoard {
        /// The offending key under `[board]`.
        field: &'static str,
    },

    /// A default under `[inputs]` is not a bit string that fits the board.
    #[error("inputs.{field}: {source}")]
    InvalidInput {
        /// `sw` or `btn`.
        field: &'static str,
        /// What was wrong with the bit string.
        #[source]
        source: ParseBitsError,
    },
}
