// netify-core/src/infrastructure/config/pipeline.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::domain::config::PipelineConfig;
use crate::infrastructure::error::InfrastructureError;

const CONFIG_CANDIDATES: [&str; 2] = ["netify.yaml", "netify.yml"];

pub const ENV_OUTPUT: &str = "NETIFY_OUTPUT";

// --- LOADER ---

/// Builds the run configuration for `data_dir`: file (optional) then environment.
#[instrument]
pub fn load_pipeline_config(data_dir: &Path) -> Result<PipelineConfig, InfrastructureError> {
    if !data_dir.is_dir() {
        return Err(InfrastructureError::ConfigError(format!(
            "Data directory {:?} does not exist",
            data_dir
        )));
    }

    // 1. Optional YAML file, defaults otherwise
    let mut config = match find_config_file(data_dir) {
        Some(path) => {
            info!(path = ?path, "Loading pipeline configuration");
            let content = fs::read_to_string(&path)?;
            parse_config(&content)?
        }
        None => PipelineConfig::default(),
    };
    config.data_dir = data_dir.to_path_buf();

    // 2. Override via environment variables (Layering pattern)
    // NETIFY_OUTPUT=/tmp/netify.csv netify prepare
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    Ok(config)
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
}

pub fn parse_config(content: &str) -> Result<PipelineConfig, InfrastructureError> {
    // An empty file is a valid "all defaults" configuration.
    if content.trim().is_empty() {
        return Ok(PipelineConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// `lookup` abstracts the process environment so overrides stay testable.
pub fn apply_env_overrides<F>(config: &mut PipelineConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(ENV_OUTPUT).filter(|v| !v.is_empty()) {
        info!(old = ?config.output, new = ?val, "Overriding output path via ENV");
        config.output = PathBuf::from(val);
    }
}
