//! Error types for Issuer resources
//!
//! The fixture generators never fail. Errors come from validating an
//! Issuer spec or from parsing manifests into typed resources.

use thiserror::Error;

/// Main error type for certgen operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Validation error for Issuer specs
    #[error("validation error: {message}")]
    Validation {
        /// Description of what's invalid
        message: String,
        /// The invalid field path (e.g., "spec.acme.server")
        field: Option<String>,
    },

    /// Serialization/deserialization error
    #[error("serialization error: {message}")]
    Serialization {
        /// Description of what failed
        message: String,
        /// The resource kind being parsed (if known)
        kind: Option<String>,
    },
}

impl Error {
    /// Create a validation error with the given message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a validation error pointing at a field path
    pub fn validation_field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a serialization error with the given message
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization {
            message: msg.into(),
            kind: None,
        }
    }

    /// Create a serialization error for a specific resource kind
    pub fn serialization_for(kind: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Serialization {
            message: msg.into(),
            kind: Some(kind.into()),
        }
    }

    /// Field path of a validation error, if one was recorded
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Story Tests: Error Reporting for Issuer Resources
    // ==========================================================================

    /// Story: Validation errors name the offending field
    ///
    /// When an Issuer is configured for ACME without a server URL, the
    /// error points at the exact spec field so the user can fix the manifest.
    #[test]
    fn story_validation_error_points_at_field() {
        let err = Error::validation_field("spec.acme.server", "ACME server URL must be set");
        assert!(err.to_string().contains("validation error"));
        assert!(err.to_string().contains("server URL"));
        assert_eq!(err.field(), Some("spec.acme.server"));

        match Error::validation("any message") {
            Error::Validation { message, field } => {
                assert_eq!(message, "any message");
                assert!(field.is_none());
            }
            _ => panic!("Expected Validation variant"),
        }
    }

    /// Story: Malformed manifests surface as serialization errors
    #[test]
    fn story_serialization_errors_carry_kind() {
        let err = Error::serialization_for("Issuer", "missing field `metadata`");
        assert!(err.to_string().contains("serialization error"));
        match err {
            Error::Serialization { kind, .. } => assert_eq!(kind.as_deref(), Some("Issuer")),
            _ => panic!("Expected Serialization variant"),
        }
    }

    #[test]
    fn serde_json_errors_convert() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json")
            .expect_err("invalid json should fail");
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization { kind: None, .. }));
        assert!(err.field().is_none());
    }
}
