// netify-core/src/application/mod.rs

pub mod catalog;
pub mod clean;
pub mod instructions;
pub mod pipeline;

// --- RE-EXPORTS (FACADE PATTERN) ---
// The CLI can do `use netify_core::application::{run_pipeline, clean_output};`
// without knowing the internal file layout.

pub use catalog::{load_catalog, read_catalog};
pub use clean::clean_output;
pub use instructions::LoadInstructions;
pub use pipeline::{MatchCounts, PipelineReport, join_and_emit, run_pipeline};
