use crate::record_type::RecordType;
use thiserror::Error;

/// Pre-network validation failures. Surfaced to the user with a non-zero
/// exit before any query is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unsupported record type: {0} (expected one of A, AAAA, CNAME, MX, NS, SOA, TXT)")]
    UnsupportedRecordType(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),
}

/// Outcomes of a failed DNS lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("NXDOMAIN: domain does not exist")]
    NxDomain,

    #[error("query timed out")]
    Timeout,

    #[error("server failure: {0}")]
    ServerFailure(String),

    #[error("no {0} records found")]
    NoAnswer(RecordType),

    #[error("{0}")]
    Other(String),
}
