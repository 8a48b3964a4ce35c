// netify-core/src/domain/classification.rs

use std::fmt;

use crate::domain::record::RecordType;

/// Where the subject and the application reference live in a classification row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub subject: usize,
    pub application: usize,
}

impl ColumnLayout {
    /// Minimal number of fields a row needs for both lookups to succeed.
    pub const fn required_fields(&self) -> usize {
        let max = if self.subject > self.application {
            self.subject
        } else {
            self.application
        };
        max + 1
    }
}

// The two vendor tables do not share a schema: the application id sits at
// index 2 in domains.csv and at index 4 in ips.csv.
pub const DOMAIN_LAYOUT: ColumnLayout = ColumnLayout {
    subject: 1,
    application: 2,
};
pub const IP_LAYOUT: ColumnLayout = ColumnLayout {
    subject: 1,
    application: 4,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationKind {
    Domain,
    Ip,
}

impl ClassificationKind {
    pub const fn layout(&self) -> ColumnLayout {
        match self {
            Self::Domain => DOMAIN_LAYOUT,
            Self::Ip => IP_LAYOUT,
        }
    }

    pub const fn record_type(&self) -> RecordType {
        match self {
            Self::Domain => RecordType::NetifyDomain,
            Self::Ip => RecordType::NetifyIp,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domains",
            Self::Ip => "ips",
        }
    }
}

impl fmt::Display for ClassificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_are_asymmetric() {
        assert_eq!(ClassificationKind::Domain.layout().subject, 1);
        assert_eq!(ClassificationKind::Domain.layout().application, 2);
        assert_eq!(ClassificationKind::Ip.layout().subject, 1);
        assert_eq!(ClassificationKind::Ip.layout().application, 4);
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(DOMAIN_LAYOUT.required_fields(), 3);
        assert_eq!(IP_LAYOUT.required_fields(), 5);
    }

    #[test]
    fn test_record_type_per_source() {
        assert_eq!(
            ClassificationKind::Domain.record_type(),
            RecordType::NetifyDomain
        );
        assert_eq!(ClassificationKind::Ip.record_type(), RecordType::NetifyIp);
    }
}
