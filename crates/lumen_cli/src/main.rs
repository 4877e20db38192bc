//! Lumen CLI: simulate and check single-module HDL sources from the terminal.
//!
//! Provides `lumen run` to evaluate a source against switch and button
//! states, `lumen check` for lint diagnostics, `lumen parse` to dump the
//! module descriptor, and `lumen table` to sweep every switch combination.

#![warn(missing_docs)]

mod check;
mod parse;
mod pipeline;
mod render;
mod run;
mod table;

use std::io::IsTerminal;
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Lumen, a tiny combinational HDL simulator.
#[derive(Parser, Debug)]
#[command(name = "lumen", version, about = "Lumen HDL simulator")]
pub struct Cli {
    /// Suppress all output except errors and results.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `lumen.toml` file, or a directory containing one.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate a source file once and show the outputs.
    Run(RunArgs),
    /// Report lint diagnostics for a source file.
    Check(CheckArgs),
    /// Print the parsed module descriptor as JSON.
    Parse(ParseArgs),
    /// Print the LED outputs for every switch combination.
    Table(TableArgs),
}

/// Arguments for the `lumen run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Source file to simulate.
    pub file: String,

    /// Switch state, MSB first (e.g. `10110001` or `0b1011_0001`).
    #[arg(long)]
    pub sw: Option<String>,

    /// Button state, MSB first.
    #[arg(long)]
    pub btn: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Show each assignment's value and where it was routed.
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for the `lumen check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Source file to check.
    pub file: String,

    /// Rules to suppress, by name or code (e.g., `--allow undeclared-wire`).
    #[arg(long, num_args = 1..)]
    pub allow: Vec<String>,

    /// Rules to promote to errors, by name or code (e.g., `--deny W102`).
    #[arg(long, num_args = 1..)]
    pub deny: Vec<String>,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `lumen parse` subcommand.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Source file to parse.
    pub file: String,
}

/// Arguments for the `lumen table` subcommand.
#[derive(Parser, Debug)]
pub struct TableArgs {
    /// Source file to simulate.
    pub file: String,

    /// Button state held for every row, MSB first.
    #[arg(long)]
    pub btn: Option<String>,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Output format for results and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress status output.
    pub quiet: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file or directory.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let color = match cli.color {
        ColorChoice::Auto => auto_color(std::io::stderr().is_terminal(), no_color_set()),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Run(ref args) => run::run(args, &global),
        Command::Check(ref args) => check::run(args, &global),
        Command::Parse(ref args) => parse::run(args, &global),
        Command::Table(ref args) => table::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Maps `-v` counts to a log level; `RUST_LOG` takes precedence when set.
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `--color auto`: color only when diagnostics go to a terminal and
/// `NO_COLOR` is unset.
fn auto_color(stderr_is_terminal: bool, no_color: bool) -> bool {
    stderr_is_terminal && !no_color
}

fn no_color_set() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn auto_color_needs_a_terminal() {
        assert!(auto_color(true, false));
        assert!(!auto_color(false, false));
        assert!(!auto_color(true, true));
    }

    #[test]
    fn parse_run_default() {
        let cli = Cli::parse_from(["lumen", "run", "top.v"]);
        match cli.command {
            Command::Run(ref args) => {
                assert_eq!(args.file, "top.v");
                assert!(args.sw.is_none());
                assert!(args.btn.is_none());
                assert_eq!(args.format, ReportFormat::Text);
                assert!(!args.explain);
            }
            _ => panic!("expected Run command"),
        }
    }

    #[test]
    fn parse_run_with_inputs() {
        let cli = Cli::parse_from([
            "lumen", "run", "top.v", "--sw", "10110001", "--btn", "0b00001", "--format", "json",
            "--explain",
        ]);
        match cli.command {
            Command::Run(ref args) => {
                assert_eq!(args.sw.as_deref(), Some("10110001"));
                assert_eq!(args.btn.as_deref(), Some("0b00001"));
                assert_eq!(args.format, ReportFormat::Json);
                assert!(args.explain);
            }
            _ => panic!("expected Run command"),
        }
    }

    #[test]
    fn parse_check_with_args() {
        let cli = Cli::parse_from([
            "lumen",
            "check",
            "top.v",
            "--allow",
            "undeclared-wire",
            "W107",
            "--deny",
            "forward-reference",
            "--format",
            "json",
        ]);
        match cli.command {
            Command::Check(ref args) => {
                assert_eq!(args.allow, vec!["undeclared-wire", "W107"]);
                assert_eq!(args.deny, vec!["forward-reference"]);
                assert_eq!(args.format, ReportFormat::Json);
            }
            _ => panic!("expected Check command"),
        }
    }

    #[test]
    fn parse_parse_and_table() {
        let cli = Cli::parse_from(["lumen", "parse", "a.v"]);
        assert!(matches!(cli.command, Command::Parse(ref a) if a.file == "a.v"));

        let cli = Cli::parse_from(["lumen", "table", "a.v", "--btn", "1"]);
        match cli.command {
            Command::Table(ref args) => assert_eq!(args.btn.as_deref(), Some("1")),
            _ => panic!("expected Table command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["lumen", "--quiet", "--color", "never", "parse", "a.v"]);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::parse_from(["lumen", "-vv", "run", "a.v"]);
        assert_eq!(cli.verbose, 2);
        let cli = Cli::parse_from(["lumen", "run", "a.v", "-v", "-v", "-v"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(2), "debug");
        assert_eq!(log_level(7), "trace");
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["lumen", "--config", "/path/to/lumen.toml", "check", "a.v"]);
        assert_eq!(cli.config.as_deref(), Some("/path/to/lumen.toml"));
    }

    #[test]
    fn missing_file_is_a_usage_error() {
        assert!(Cli::try_parse_from(["lumen", "run"]).is_err());
    }
}
