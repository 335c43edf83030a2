use crate::record_type::RecordType;

/// A single (domain, record type) lookup to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub domain: String,
    pub record_type: RecordType,
}

impl QueryRequest {
    pub fn new(domain: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }
}

/// The values a lookup returned for one record type, already rendered as
/// display strings (addresses, target names, MX "preference exchange", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAnswer {
    pub record_type: RecordType,
    pub values: Vec<String>,
}

impl QueryAnswer {
    pub fn new(record_type: RecordType, values: Vec<String>) -> Self {
        Self {
            record_type,
            values,
        }
    }
}
