// netify-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(netify::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    #[error("Cannot open input table '{}': {}", .path.display(), .source)]
    #[diagnostic(
        code(netify::infra::source_unavailable),
        help("Download the Netify tables into the data directory (see --data-dir).")
    )]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot create output file '{}': {}", .path.display(), .source)]
    #[diagnostic(code(netify::infra::output_unavailable))]
    OutputUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    // --- CSV ---
    #[error("CSV Error: {0}")]
    #[diagnostic(
        code(netify::infra::csv),
        help("Netify tables are ';'-delimited UTF-8 text.")
    )]
    Csv(#[from] csv::Error),

    // --- JSON ---
    #[error("JSON Encoding Error: {0}")]
    #[diagnostic(code(netify::infra::json))]
    Json(#[from] serde_json::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(netify::infra::yaml),
        help("Check your YAML syntax (indentation, types, key names).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(netify::infra::config))]
    ConfigError(String),
}
