//! `lumen check`: static analysis of a source file.
//!
//! The pipeline:
//!
//! 1. Load the source and the nearest `lumen.toml`
//! 2. Merge `--allow`/`--deny` with the config's `[lint]` section
//! 3. Trace the source on the configured board with all inputs off
//! 4. Run the lint engine over the trace
//! 5. Render diagnostics in source order

use lumen_config::{LintConfig, LumenConfig};
use lumen_diagnostics::DiagnosticSink;
use lumen_lint::{Analysis, LintEngine};

use crate::pipeline::{board_layout, load_config, load_source, render_diagnostics};
use crate::{CheckArgs, GlobalArgs, ReportFormat};

/// Runs the `lumen check` command.
///
/// Returns exit code 0 if no errors, 1 if any rule was denied and fired.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let source = load_source(&args.file)?;
    let config = load_config(global, &args.file)?;

    if !global.quiet {
        eprintln!("   Checking {}", args.file);
    }

    let merged = merge_lint_config(&config, args);
    let engine = LintEngine::new(&merged);
    tracing::debug!(rules = engine.rule_count(), "lint engine ready");

    let analysis = Analysis::new(
        &source.content,
        board_layout(&config.board),
        config.board.switches,
        config.board.buttons,
    );
    let sink = DiagnosticSink::new();
    engine.run(&analysis, &sink);

    let diagnostics = sink.take_sorted();

    match args.format {
        ReportFormat::Text => {
            render_diagnostics(&diagnostics, &source, global.color);
        }
        ReportFormat::Json => {
            let json =
                serde_json::to_string_pretty(&diagnostics).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }

    if !global.quiet && args.format == ReportFormat::Text {
        eprintln!(
            "   Result: {} error(s), {} warning(s)",
            sink.error_count(),
            sink.warning_count()
        );
    }

    if sink.has_errors() {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Merges CLI `--allow`/`--deny` flags with the config file's lint section.
///
/// CLI flags take precedence: if a rule appears in both CLI `--allow` and
/// config `deny`, the CLI `--allow` wins.
fn merge_lint_config(config: &LumenConfig, args: &CheckArgs) -> LintConfig {
    let mut deny: Vec<String> = config.lint.deny.clone();
    let mut allow: Vec<String> = config.lint.allow.clone();

    for rule in &args.deny {
        allow.retain(|r| r != rule);
        if !deny.contains(rule) {
            deny.push(rule.clone());
        }
    }
    for rule in &args.allow {
        deny.retain(|r| r != rule);
        if !allow.contains(rule) {
            allow.push(rule.clone());
        }
    }

    LintConfig { deny, allow }
}
