//! Error taxonomy for the migration pipeline
//!
//! Credential and listing failures are fatal to the run; a [`StoreError`]
//! from a single copy or delete is recovered at the per-item level.

use thiserror::Error;

/// Failures while resolving a profile from the credentials file.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credentials file not found at {0}")]
    FileNotFound(String),

    #[error("could not parse credentials file: {0}")]
    ParseError(String),

    #[error("profile '{0}' not found in credentials file")]
    ProfileNotFound(String),

    #[error("profile '{0}' has no aws_access_key_id")]
    IncompleteProfile(String),
}

/// A failed object-store call.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store attached a service error code to the failure.
    #[error("{code}: {message}")]
    Service { code: String, message: String },

    /// Transport or other failure with no service error code.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Classification of a store error by service error code. Callers match on
/// the tag to decide logging detail, never control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorClass {
    Known(String),
    Unknown,
}

impl StoreError {
    pub fn classify(&self) -> ErrorClass {
        match self {
            StoreError::Service { code, .. } => ErrorClass::Known(code.clone()),
            StoreError::Other(_) => ErrorClass::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_classifies_as_known() {
        let err = StoreError::Service {
            code: "ObjectNotInActiveTierError".to_string(),
            message: "source object is archived".to_string(),
        };
        assert_eq!(
            err.classify(),
            ErrorClass::Known("ObjectNotInActiveTierError".to_string())
        );
        assert_eq!(
            err.to_string(),
            "ObjectNotInActiveTierError: source object is archived"
        );
    }

    #[test]
    fn test_other_error_classifies_as_unknown() {
        let err = StoreError::Other(anyhow::anyhow!("connection reset"));
        assert_eq!(err.classify(), ErrorClass::Unknown);
        assert_eq!(err.to_string(), "connection reset");
    }

    #[test]
    fn test_credential_error_messages_name_the_profile() {
        let err = CredentialError::ProfileNotFound("staging".to_string());
        assert!(err.to_string().contains("staging"));

        let err = CredentialError::IncompleteProfile("staging".to_string());
        assert!(err.to_string().contains("aws_access_key_id"));
    }
}
