//! Shared pipeline helpers for CLI commands.
//!
//! Source loading, config resolution, board and input construction, and
//! diagnostic rendering used by `run`, `check`, `parse` and `table`.

use std::path::{Path, PathBuf};

use lumen_common::{parse_bits_with_width, SourceText};
use lumen_config::{BoardConfig, LumenConfig};
use lumen_diagnostics::{Diagnostic, DiagnosticRenderer, TerminalRenderer};
use lumen_sim::{BoardLayout, SimInputs};

use crate::GlobalArgs;

/// Reads a source file into a [`SourceText`] named after its path.
pub fn load_source(path: &str) -> Result<SourceText, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read {path}: {e}"))?;
    Ok(SourceText::new(path, content))
}

/// Resolves the directory searched for `lumen.toml`.
///
/// If `--config` is specified, uses that path (file → parent dir, dir → itself).
/// Otherwise uses the directory containing the source file.
pub fn resolve_config_dir(global: &GlobalArgs, source_path: &str) -> PathBuf {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        if p.is_file() {
            p.parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from("."))
        } else {
            p
        }
    } else {
        match Path::new(source_path).parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Loads the configuration that applies to `source_path`.
///
/// An explicit `--config` file is loaded as-is, so it may have any name.
/// Otherwise a missing `lumen.toml` yields the reference board.
pub fn load_config(
    global: &GlobalArgs,
    source_path: &str,
) -> Result<LumenConfig, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = Path::new(config_path);
        if p.is_file() {
            return Ok(lumen_config::load_config_file(p)?);
        }
    }
    let dir = resolve_config_dir(global, source_path);
    tracing::debug!(dir = %dir.display(), "loading configuration");
    Ok(lumen_config::load_config(&dir)?)
}

/// Converts the configured board sizes into the simulator's layout.
pub fn board_layout(board: &BoardConfig) -> BoardLayout {
    BoardLayout::new(board.leds, board.displays, board.segments)
}

/// Builds the input vectors for a run.
///
/// Each vector comes from the command line if given, else from the
/// config's `[inputs]` section, else all zeros. Strings shorter than the
/// configured width are zero-extended; longer ones are rejected.
pub fn resolve_inputs(
    sw: Option<&str>,
    btn: Option<&str>,
    config: &LumenConfig,
) -> Result<SimInputs, Box<dyn std::error::Error>> {
    let sw = resolve_vector(sw, config.inputs.sw.as_deref(), config.board.switches)
        .map_err(|e| format!("--sw: {e}"))?;
    let btn = resolve_vector(btn, config.inputs.btn.as_deref(), config.board.buttons)
        .map_err(|e| format!("--btn: {e}"))?;
    Ok(SimInputs::new(sw, btn))
}

fn resolve_vector(
    cli: Option<&str>,
    default: Option<&str>,
    width: usize,
) -> Result<Vec<bool>, lumen_common::ParseBitsError> {
    match cli.or(default) {
        Some(bits) => parse_bits_with_width(bits, width),
        None => Ok(vec![false; width]),
    }
}

/// Renders diagnostics to stderr. Returns the number rendered.
pub fn render_diagnostics(diagnostics: &[Diagnostic], source: &SourceText, color: bool) -> usize {
    let renderer = TerminalRenderer::new(color);
    for diag in diagnostics {
        eprintln!("{}", renderer.render(diag, source));
    }
    diagnostics.len()
}
