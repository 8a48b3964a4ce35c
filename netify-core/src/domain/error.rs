// netify-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Source '{source_name}' has no header row")]
    #[diagnostic(
        code(netify::domain::missing_header),
        help("Every Netify table starts with one header line, even when it has no data rows.")
    )]
    MissingHeader { source_name: String },

    #[error(
        "Source '{source_name}' line {line}: column {index} is missing (row has {found} fields)"
    )]
    #[diagnostic(
        code(netify::domain::missing_column),
        help("The table layout does not match the expected Netify export. Check the ';' delimiter.")
    )]
    MissingColumn {
        source_name: String,
        line: u64,
        index: usize,
        found: usize,
    },
}
