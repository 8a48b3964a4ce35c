// netify/src/commands/prepare.rs
//
// USE CASE: Join the Netify tables into netify.csv.

use netify_core::application::{LoadInstructions, run_pipeline};

use crate::cli::TableArgs;
use crate::commands::{fail, resolve_config};

pub fn execute(args: TableArgs) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Load the Config (Infra)
    let config = resolve_config(&args)?;

    println!("This tool will process Netify CSV files:");
    println!(
        "  {} -- list of known internet applications",
        config.applications.display()
    );
    println!(
        "  {} -- list of recognized domain names",
        config.domains.display()
    );
    println!("  {} -- list of IP addresses", config.ips.display());

    // B. Run the Pipeline (Application Layer)
    let report = match run_pipeline(&config) {
        Ok(report) => report,
        Err(e) => fail("CRITICAL PIPELINE ERROR", e),
    };

    println!(
        "Netify CSV file '{}' has been created. Number of domain records={}, ip records={}.",
        config.output.display(),
        report.matches.domains,
        report.matches.ips
    );
    println!("✨ Finished in {:.2?}", start.elapsed());

    // C. Downstream load (psql)
    println!();
    println!("{}", LoadInstructions::new(&config.output));
    println!();

    Ok(())
}
