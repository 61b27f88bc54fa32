use ferrous_dig_domain::{DomainError, Question, RecordType};

#[derive(Debug)]
pub struct QueryInput {
    pub question: Question,
    /// Set when the type is outside A, MX, NS, CNAME but the query goes
    /// ahead anyway.
    pub warning: Option<String>,
}

/// Validates the command-line hostname and query type.
///
/// Types outside the supported set are refused in strict mode; otherwise
/// they produce a warning and are queried as given, as long as they name a
/// real record type.
pub fn parse_query(hostname: &str, record_type: &str, strict: bool) -> Result<QueryInput, DomainError> {
    let parsed: RecordType = record_type.parse()?;

    let warning = if parsed.is_user_queryable() {
        None
    } else if strict {
        return Err(DomainError::InvalidRecordType(format!(
            "{} (choose from A, MX, NS or CNAME)",
            record_type
        )));
    } else {
        Some(format!(
            "INVALID QUERY TYPE! Choose from A, MX, NS or CNAME; querying {} anyway",
            parsed
        ))
    };

    Ok(QueryInput {
        question: Question::parse(hostname, parsed)?,
        warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_type_has_no_warning() {
        let input = parse_query("example.com", "mx", false).unwrap();
        assert_eq!(input.question.record_type, RecordType::MX);
        assert!(input.warning.is_none());
    }

    #[test]
    fn test_other_type_warns_but_proceeds() {
        let input = parse_query("example.com", "AAAA", false).unwrap();
        assert_eq!(input.question.record_type, RecordType::AAAA);
        assert!(input.warning.unwrap().contains("INVALID QUERY TYPE"));
    }

    #[test]
    fn test_other_type_is_refused_in_strict_mode() {
        assert!(matches!(
            parse_query("example.com", "TXT", true),
            Err(DomainError::InvalidRecordType(_))
        ));
    }

    #[test]
    fn test_unknown_mnemonic_is_refused() {
        assert!(parse_query("example.com", "BOGUS", false).is_err());
    }

    #[test]
    fn test_bad_hostname_is_refused() {
        assert!(matches!(
            parse_query("exa..mple.com", "A", false),
            Err(DomainError::InvalidDomainName(_))
        ));
    }
}
