//! `lumen parse`: dump the module descriptor as JSON.

use lumen_parser::parse_module;

use crate::pipeline::load_source;
use crate::{GlobalArgs, ParseArgs};

/// Runs the `lumen parse` command.
pub fn run(args: &ParseArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let source = load_source(&args.file)?;
    if !global.quiet {
        eprintln!("   Parsing {}", args.file);
    }

    let module = parse_module(&source.content);
    tracing::info!(
        inputs = module.inputs.len(),
        outputs = module.outputs.len(),
        wires = module.wires.len(),
        assignments = module.assignments.len(),
        "parsed"
    );
    println!("{}", serde_json::to_string_pretty(&module)?);
    Ok(0)
}
