//! Error types for resource name parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating resource names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrnError {
    /// An identifier was required but the value is empty.
    #[error("ID not set")]
    NotSet,

    /// None of the supplied patterns matched the identifier.
    #[error("ID invalid: expected one of {}", .patterns.join(", "))]
    NoMatch { patterns: Vec<String> },

    /// Strict parsing was handed an empty string.
    #[error("ID cannot be empty")]
    EmptyInput,

    /// The identifier does not follow the `ns:service:type:value` grammar.
    #[error("invalid ID format: '{id}'")]
    Invalid { id: String },
}

impl FrnError {
    /// Returns true if this error indicates the identifier was absent.
    pub fn is_not_set(&self) -> bool {
        matches!(self, FrnError::NotSet | FrnError::EmptyInput)
    }

    /// Returns true if this error indicates a pattern mismatch.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, FrnError::NoMatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_lists_patterns() {
        let err = FrnError::NoMatch {
            patterns: vec!["project".to_string(), "project/contract".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "ID invalid: expected one of project, project/contract"
        );
        assert!(err.is_mismatch());
        assert!(!err.is_not_set());
    }

    #[test]
    fn test_not_set() {
        assert!(FrnError::NotSet.is_not_set());
        assert_eq!(FrnError::NotSet.to_string(), "ID not set");
    }
}
