// netify-core/src/domain/catalog.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Positional layout of the applications table:
// [id, tag, short_name, full_name, (unused), category, ...]
pub const ID_COLUMN: usize = 0;
pub const TAG_COLUMN: usize = 1;
pub const SHORT_NAME_COLUMN: usize = 2;
pub const FULL_NAME_COLUMN: usize = 3;
pub const CATEGORY_COLUMN: usize = 5;

/// Descriptive metadata of an application, as serialized into `details`.
/// Field order is part of the output contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ApplicationDetails {
    pub tag: String,
    pub short_name: String,
    pub full_name: String,
    pub category: String,
}

/// One row of the applications table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRecord {
    pub id: String,
    pub details: ApplicationDetails,
}

/// Catalog value: the metadata plus its pre-encoded `details` blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub details: ApplicationDetails,
    pub details_json: String,
}

impl CatalogEntry {
    pub fn tag(&self) -> &str {
        &self.details.tag
    }
}

/// Read-only lookup from application identifier to its metadata.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last insert wins: a later row with the same identifier replaces the earlier one.
    pub fn insert(
        &mut self,
        record: ApplicationRecord,
        details_json: String,
    ) -> Option<CatalogEntry> {
        self.entries.insert(
            record.id,
            CatalogEntry {
                details: record.details,
                details_json,
            },
        )
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
