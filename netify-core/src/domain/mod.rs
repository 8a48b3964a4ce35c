pub mod catalog;
pub mod classification;
pub mod config;
pub mod error;
pub mod record;

// Handy re-exports to keep imports short elsewhere
pub use catalog::{ApplicationDetails, ApplicationRecord, Catalog, CatalogEntry};
pub use classification::{ClassificationKind, ColumnLayout};
pub use config::PipelineConfig;
pub use error::DomainError;
pub use record::{OutputRecord, RecordType};
