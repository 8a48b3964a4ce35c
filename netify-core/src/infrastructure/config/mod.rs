pub mod pipeline;

pub use crate::domain::config::PipelineConfig;
pub use pipeline::{apply_env_overrides, load_pipeline_config};
