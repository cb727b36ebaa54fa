//! Error types for client configuration.
//!
//! This module contains the error type returned when building or validating
//! configuration values.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation: a client cannot be built from incomplete or
//! malformed credentials, so misconfiguration surfaces at startup rather
//! than on the first API call.
//!
//! # Example
//!
//! ```rust
//! use netsuite_suitetalk::{ConsumerKey, ConfigError};
//!
//! let result = ConsumerKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyConsumerKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URI is invalid.
    #[error("Invalid base URI '{uri}'. Expected a URL with scheme and host (e.g., 'https://123456.suitetalk.api.netsuite.com/services/rest').")]
    InvalidBaseUri {
        /// The invalid URI that was provided.
        uri: String,
    },

    /// Realm cannot be empty.
    #[error("Realm cannot be empty. Please provide the NetSuite account id (e.g., '123456' or '123456_SB1').")]
    EmptyRealm,

    /// Consumer key cannot be empty.
    #[error("Consumer key cannot be empty. Please provide the integration record's consumer key.")]
    EmptyConsumerKey,

    /// Consumer secret cannot be empty.
    #[error("Consumer secret cannot be empty. Please provide the integration record's consumer secret.")]
    EmptyConsumerSecret,

    /// Token id cannot be empty.
    #[error("Token cannot be empty. Please provide the access token id issued for the integration.")]
    EmptyToken,

    /// Token secret cannot be empty.
    #[error("Token secret cannot be empty. Please provide the access token secret issued for the integration.")]
    EmptyTokenSecret,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_uri_error_message() {
        let error = ConfigError::InvalidBaseUri {
            uri: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("scheme and host"));
    }

    #[test]
    fn test_empty_consumer_key_error_message() {
        let error = ConfigError::EmptyConsumerKey;
        let message = error.to_string();
        assert!(message.contains("Consumer key cannot be empty"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "realm" };
        let message = error.to_string();
        assert!(message.contains("realm"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyToken;
        // Verify it implements std::error::Error by using it as a dyn Error
        let _: &dyn std::error::Error = &error;
    }
}
