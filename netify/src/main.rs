// netify/src/main.rs

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug netify prepare ... to see the details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.into_command() {
        // --- USE CASE: BUILD netify.csv ---
        Commands::Prepare(args) => commands::prepare::execute(args),

        // --- USE CASE: PRINT LOAD INSTRUCTIONS ---
        Commands::Instructions(args) => commands::instructions::execute(args),

        // --- USE CASE: CLEAN ---
        Commands::Clean(args) => commands::clean::execute(args),
    }
}
