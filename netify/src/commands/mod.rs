// netify/src/commands/mod.rs

pub mod clean;
pub mod instructions;
pub mod prepare;

use anyhow::Context;
use netify_core::NetifyError;
use netify_core::infrastructure::config::{PipelineConfig, load_pipeline_config};

use crate::cli::TableArgs;

/// Layering: netify.yaml, then environment, then the command line.
pub fn resolve_config(args: &TableArgs) -> anyhow::Result<PipelineConfig> {
    let mut config = load_pipeline_config(&args.data_dir).with_context(|| {
        format!(
            "Failed to load configuration from {:?}",
            args.data_dir
        )
    })?;
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    tracing::debug!(?config, "Resolved pipeline configuration");
    Ok(config)
}

/// Prints the error (plus its diagnostic help when it has one) and exits with status 1.
pub fn fail(context: &str, err: NetifyError) -> ! {
    eprintln!("\n💥 {}: {}", context, err);
    match err {
        NetifyError::Domain(e) => eprintln!("{:?}", miette::Report::new(e)),
        NetifyError::Infrastructure(e) => eprintln!("{:?}", miette::Report::new(e)),
        _ => {}
    }
    std::process::exit(1);
}
