//! HTTP-specific error types for the SuiteTalk client.
//!
//! This module contains error types for transport-level failures. A
//! response from SuiteTalk, whatever its status code, is not an error
//! at this layer: the transport returns it as an
//! [`HttpResponse`](crate::clients::HttpResponse), and record
//! operations fold non-2xx statuses into their result type. An
//! [`HttpError`] means the exchange never completed.
//!
//! # Example
//!
//! ```rust,ignore
//! use netsuite_suitetalk::clients::HttpError;
//!
//! match client.request(&request).await {
//!     Ok(response) => println!("Status: {}", response.status_code),
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {e}");
//!     }
//!     Err(HttpError::InvalidUrl { url }) => {
//!         println!("Bad URL: {url}");
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {e}");
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks, such as:
/// - Missing body for POST/PATCH/PUT requests
/// - Body provided for GET/DELETE requests
///
/// # Example
///
/// ```rust
/// use netsuite_suitetalk::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "POST".to_string(),
/// };
///
/// println!("{}", error); // "Cannot use POST without specifying data."
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST, PATCH or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send a body with {method} requests.")]
    UnexpectedBody {
        /// The HTTP method that forbids a body.
        method: String,
    },
}

/// Unified error type for transport failures.
///
/// This enum provides a single error type for HTTP operations, making it
/// easier to handle errors at API boundaries. Use pattern matching to
/// handle specific error types.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request path and query did not form a valid URL.
    #[error("Invalid request URL: {url}")]
    InvalidUrl {
        /// The URL that could not be parsed.
        url: String,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "POST".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot use POST without specifying data."
        );
    }

    #[test]
    fn test_invalid_request_error_unexpected_body() {
        let error = InvalidHttpRequestError::UnexpectedBody {
            method: "GET".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot send a body with GET requests.");
    }

    #[test]
    fn test_invalid_url_error_includes_url() {
        let error = HttpError::InvalidUrl {
            url: "https://example.com/record/v1/%zz".to_string(),
        };
        assert!(error.to_string().contains("record/v1/%zz"));
    }

    #[test]
    fn test_http_error_wraps_invalid_request_transparently() {
        let error = HttpError::from(InvalidHttpRequestError::MissingBody {
            method: "PATCH".to_string(),
        });
        assert_eq!(
            error.to_string(),
            "Cannot use PATCH without specifying data."
        );
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::MissingBody {
            method: "POST".to_string(),
        };
        let _ = invalid_error;

        let url_error: &dyn std::error::Error = &HttpError::InvalidUrl {
            url: "bad".to_string(),
        };
        let _ = url_error;
    }
}
