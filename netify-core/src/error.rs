// netify-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetifyError {
    // --- DOMAIN ERRORS (source layout violations) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, CSV, JSON, YAML) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- APPLICATION ERRORS ---
    #[error("Unsafe path traversal detected: {0}")]
    UnsafePath(String),
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for NetifyError {
    fn from(err: std::io::Error) -> Self {
        NetifyError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<csv::Error> for NetifyError {
    fn from(err: csv::Error) -> Self {
        NetifyError::Infrastructure(InfrastructureError::Csv(err))
    }
}
