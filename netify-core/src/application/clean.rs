// netify-core/src/application/clean.rs

use std::fs;
use std::path::Component;

use crate::domain::config::PipelineConfig;
use crate::error::NetifyError;

/// Removes the generated output file. Returns whether something was deleted.
pub fn clean_output(config: &PipelineConfig) -> Result<bool, NetifyError> {
    tracing::info!("🧹 Initializing Netify cleanup sequence...");

    let full_path = config.output_path();

    // Zero-Trust Path Traversal Guard
    let escapes = config
        .output
        .components()
        .any(|c| matches!(c, Component::ParentDir));
    if escapes || !full_path.starts_with(&config.data_dir) {
        return Err(NetifyError::UnsafePath(
            config.output.display().to_string(),
        ));
    }

    if !full_path.is_file() {
        return Ok(false);
    }

    fs::remove_file(&full_path)?;
    println!("   🗑️  Artifact removed: {}", config.output.display());
    Ok(true)
}
