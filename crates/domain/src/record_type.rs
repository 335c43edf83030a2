use crate::errors::ValidationError;
use std::fmt;
use std::str::FromStr;

/// DNS record types this tool can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    NS,
    SOA,
    TXT,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::SOA => "SOA",
            RecordType::TXT => "TXT",
        }
    }

    /// All supported record types, in the order they are queried by default.
    pub fn all() -> &'static [RecordType] {
        &[
            RecordType::A,
            RecordType::AAAA,
            RecordType::CNAME,
            RecordType::MX,
            RecordType::NS,
            RecordType::SOA,
            RecordType::TXT,
        ]
    }

    /// Validates a record type name without constructing one.
    pub fn is_supported(name: &str) -> bool {
        Self::from_str(name).is_ok()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "MX" => Ok(RecordType::MX),
            "NS" => Ok(RecordType::NS),
            "SOA" => Ok(RecordType::SOA),
            "TXT" => Ok(RecordType::TXT),
            _ => Err(ValidationError::UnsupportedRecordType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_all_supported_types() {
        for record_type in RecordType::all() {
            assert_eq!(
                RecordType::from_str(record_type.as_str()).unwrap(),
                *record_type
            );
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(RecordType::from_str("aaaa").unwrap(), RecordType::AAAA);
        assert_eq!(RecordType::from_str("Mx").unwrap(), RecordType::MX);
    }

    #[test]
    fn test_from_str_rejects_unknown_type() {
        let err = RecordType::from_str("FOO").unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedRecordType(name) if name == "FOO"));
    }

    #[test]
    fn test_all_covers_the_supported_set() {
        let all = RecordType::all();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0], RecordType::A);
        assert_eq!(all[6], RecordType::TXT);
    }

    #[test]
    fn test_is_supported() {
        assert!(RecordType::is_supported("cname"));
        assert!(!RecordType::is_supported("SRV"));
    }
}
