// netify-core/src/domain/record.rs

use std::fmt;

use crate::domain::catalog::CatalogEntry;
use crate::domain::classification::ClassificationKind;

// Column widths of netify_data.key and netify_data.value.
pub const KEY_MAX_CHARS: usize = 64;
pub const VALUE_MAX_CHARS: usize = 128;

pub const RELIABILITY: f64 = 1.0;
pub const VALIDITY: &str = "[-infinity,infinity]";

pub const OUTPUT_HEADER: [&str; 6] = ["type", "key", "value", "reliability", "validity", "details"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    NetifyDomain,
    NetifyIp,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NetifyDomain => "NetifyDomain",
            Self::NetifyIp => "NetifyIp",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One `netify_data` row. Borrows from the source row and the catalog,
/// so it lives only until the sink has written it.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord<'a> {
    pub record_type: RecordType,
    pub key: &'a str,
    pub value: &'a str,
    pub reliability: f64,
    pub validity: &'static str,
    pub details: &'a str,
}

impl<'a> OutputRecord<'a> {
    pub fn resolve(kind: ClassificationKind, subject: &'a str, entry: &'a CatalogEntry) -> Self {
        Self {
            record_type: kind.record_type(),
            key: truncate_chars(subject, KEY_MAX_CHARS),
            value: truncate_chars(entry.tag(), VALUE_MAX_CHARS),
            reliability: RELIABILITY,
            validity: VALIDITY,
            details: &entry.details_json,
        }
    }

    /// `{:?}` keeps the trailing `.0` that the loader expects.
    pub fn reliability_text(&self) -> String {
        format!("{:?}", self.reliability)
    }
}

/// Keeps at most `max` characters (Unicode scalar values), never splitting one.
pub fn truncate_chars(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((end, _)) => {
            tracing::debug!(original_len = value.chars().count(), max, "Truncating field");
            &value[..end]
        }
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ApplicationDetails;

    fn entry(tag: &str) -> CatalogEntry {
        CatalogEntry {
            details: ApplicationDetails {
                tag: tag.to_string(),
                short_name: "ZM".to_string(),
                full_name: "Zoom Meetings".to_string(),
                category: "Conferencing".to_string(),
            },
            details_json: "{}".to_string(),
        }
    }

    #[test]
    fn test_truncate_keeps_short_values() {
        assert_eq!(truncate_chars("zoom.us", 64), "zoom.us");
        assert_eq!(truncate_chars("", 64), "");
    }

    #[test]
    fn test_truncate_exact_boundary() {
        let exact = "a".repeat(64);
        assert_eq!(truncate_chars(&exact, 64), exact);
    }

    #[test]
    fn test_truncate_seventy_chars_to_sixty_four() {
        let subject = format!("{}{}", "x".repeat(64), "abcdef");
        assert_eq!(subject.chars().count(), 70);
        assert_eq!(truncate_chars(&subject, 64), "x".repeat(64));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let subject = "é".repeat(70);
        let truncated = truncate_chars(&subject, 64);
        assert_eq!(truncated.chars().count(), 64);
        assert_eq!(truncated.len(), 128);
    }

    #[test]
    fn test_resolve_domain_record() {
        let entry = entry("Zoom");
        let record = OutputRecord::resolve(ClassificationKind::Domain, "zoom.us", &entry);

        assert_eq!(record.record_type, RecordType::NetifyDomain);
        assert_eq!(record.key, "zoom.us");
        assert_eq!(record.value, "Zoom");
        assert_eq!(record.reliability_text(), "1.0");
        assert_eq!(record.validity, "[-infinity,infinity]");
        assert_eq!(record.details, "{}");
    }

    #[test]
    fn test_resolve_truncates_tag() {
        let long_tag = "t".repeat(200);
        let entry = entry(&long_tag);
        let record = OutputRecord::resolve(ClassificationKind::Ip, "10.0.0.1", &entry);

        assert_eq!(record.record_type, RecordType::NetifyIp);
        assert_eq!(record.value.chars().count(), 128);
    }
}
