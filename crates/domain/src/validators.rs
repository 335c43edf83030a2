use crate::errors::ValidationError;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Checks a domain name against RFC 1035 shape rules before it is handed to
/// the resolver. Underscores are allowed for service labels (e.g. `_dmarc`).
pub fn validate_domain(domain: &str) -> Result<(), ValidationError> {
    let name = domain.strip_suffix('.').unwrap_or(domain);

    if name.is_empty() {
        return Err(ValidationError::InvalidDomainName(
            "domain cannot be empty".to_string(),
        ));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::InvalidDomainName(format!(
            "'{domain}' exceeds {MAX_NAME_LEN} characters"
        )));
    }

    for label in name.split('.') {
        if label.is_empty() {
            return Err(ValidationError::InvalidDomainName(format!(
                "'{domain}' contains an empty label"
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(ValidationError::InvalidDomainName(format!(
                "label '{label}' exceeds {MAX_LABEL_LEN} characters"
            )));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(ValidationError::InvalidDomainName(format!(
                "label '{label}' cannot start or end with a hyphen"
            )));
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::InvalidDomainName(format!(
                "label '{label}' contains invalid characters"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_domain_accepts_common_names() {
        assert!(validate_domain("example.com").is_ok());
        assert!(validate_domain("sub.example.co.uk").is_ok());
        assert!(validate_domain("example.com.").is_ok());
        assert!(validate_domain("_dmarc.example.com").is_ok());
        assert!(validate_domain("localhost").is_ok());
    }

    #[test]
    fn test_validate_domain_rejects_empty() {
        assert!(validate_domain("").is_err());
        assert!(validate_domain(".").is_err());
    }

    #[test]
    fn test_validate_domain_rejects_empty_label() {
        assert!(validate_domain("example..com").is_err());
        assert!(validate_domain(".example.com").is_err());
    }

    #[test]
    fn test_validate_domain_rejects_bad_hyphens() {
        assert!(validate_domain("-example.com").is_err());
        assert!(validate_domain("example-.com").is_err());
    }

    #[test]
    fn test_validate_domain_rejects_invalid_characters() {
        assert!(validate_domain("exa mple.com").is_err());
        assert!(validate_domain("example!.com").is_err());
    }

    #[test]
    fn test_validate_domain_rejects_oversized_label() {
        let label = "a".repeat(64);
        assert!(validate_domain(&format!("{label}.com")).is_err());
    }

    #[test]
    fn test_validate_domain_rejects_oversized_name() {
        let name = vec!["a".repeat(63); 4].join(".");
        assert!(name.len() > 253);
        assert!(validate_domain(&name).is_err());
    }
}
