// netify-core/src/application/catalog.rs

use csv::StringRecord;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::domain::catalog::{
    ApplicationDetails, ApplicationRecord, CATEGORY_COLUMN, Catalog, FULL_NAME_COLUMN, ID_COLUMN,
    SHORT_NAME_COLUMN, TAG_COLUMN,
};
use crate::error::NetifyError;
use crate::infrastructure::csv::{DelimitedSource, column};
use crate::infrastructure::json::encode_details;

/// Loads the applications table. The pipeline cannot run without it, so any
/// failure (missing file, short row) is returned as is.
#[instrument]
pub fn load_catalog(path: &Path) -> Result<Catalog, NetifyError> {
    let source = DelimitedSource::open(path)?;
    let catalog = read_catalog(source)?;
    info!(applications = catalog.len(), "Application catalog loaded");
    Ok(catalog)
}

pub fn read_catalog<R: Read>(mut source: DelimitedSource<R>) -> Result<Catalog, NetifyError> {
    source.skip_header()?;

    let mut catalog = Catalog::new();
    let mut row = StringRecord::new();
    while source.next_row(&mut row)? {
        let record = parse_application(&row, source.name())?;
        let details_json = encode_details(&record.details)?;
        if let Some(previous) = catalog.insert(record, details_json) {
            debug!(tag = %previous.details.tag, "Duplicate application id, keeping the later row");
        }
    }
    Ok(catalog)
}

fn parse_application(row: &StringRecord, source_name: &str) -> Result<ApplicationRecord, NetifyError> {
    let field = |index| column(row, index, source_name).map(str::to_string);

    // Category is the right-most column we read, so check it first: a short
    // row fails on the same index whatever its length.
    let category = field(CATEGORY_COLUMN)?;
    Ok(ApplicationRecord {
        id: field(ID_COLUMN)?,
        details: ApplicationDetails {
            tag: field(TAG_COLUMN)?,
            short_name: field(SHORT_NAME_COLUMN)?,
            full_name: field(FULL_NAME_COLUMN)?,
            category,
        },
    })
}
