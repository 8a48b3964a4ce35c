// netify/src/commands/clean.rs
//
// USE CASE: Remove the generated output file.

use netify_core::application::clean_output;

use crate::cli::TableArgs;
use crate::commands::{fail, resolve_config};

pub fn execute(args: TableArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;

    match clean_output(&config) {
        Ok(true) => {}
        Ok(false) => println!("   Nothing to clean."),
        Err(e) => fail("Clean failed", e),
    }
    Ok(())
}
