// netify/src/commands/instructions.rs
//
// USE CASE: Print the psql commands for the generated file.

use netify_core::application::LoadInstructions;

use crate::cli::TableArgs;
use crate::commands::resolve_config;

pub fn execute(args: TableArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;

    if !config.output_path().exists() {
        eprintln!(
            "⚠️  {} does not exist yet. Run 'netify prepare' first.",
            config.output_path().display()
        );
    }

    println!("{}", LoadInstructions::new(&config.output));
    Ok(())
}
