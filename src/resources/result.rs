//! Operation results for record operations.
//!
//! Every record operation resolves to exactly one [`OperationResult`]
//! variant. Operations never panic and never propagate transport errors
//! to the caller; whatever happens on the wire is folded into the
//! result.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::{HttpError, HttpResponse};

/// The outcome of a record operation.
///
/// # Variants
///
/// - [`Success`](Self::Success): a 2xx response (other than 202/204) whose
///   body decoded cleanly; an empty body decodes to [`Value::Null`].
/// - [`AsyncAccepted`](Self::AsyncAccepted): a 202 or 204 response. The
///   body is never decoded; the response headers carry the job location.
/// - [`Failure`](Self::Failure): a non-2xx response, or a transport
///   failure (in which case `status_code` is `None` and `details` holds
///   the error message).
/// - [`DecodeFailure`](Self::DecodeFailure): a 2xx response whose
///   non-empty body was not valid JSON. The raw body is preserved.
///
/// # Example
///
/// ```rust
/// use netsuite_suitetalk::resources::OperationResult;
/// use netsuite_suitetalk::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(
///     200,
///     Some("OK".to_string()),
///     HashMap::new(),
///     r#"{"id": "42"}"#.to_string(),
/// );
///
/// match OperationResult::from_response(response) {
///     OperationResult::Success { status_code, body } => {
///         assert_eq!(status_code, 200);
///         assert_eq!(body["id"], "42");
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult {
    /// The operation completed and returned a decoded body.
    Success {
        /// The HTTP status code.
        status_code: u16,
        /// The decoded response body; `Null` when the body was empty.
        body: Value,
    },

    /// The operation was accepted for asynchronous processing.
    AsyncAccepted {
        /// The HTTP status code (202 or 204).
        status_code: u16,
        /// The response headers, including the async job location.
        headers: HashMap<String, Vec<String>>,
    },

    /// The operation failed, either with an error response or before a
    /// response was received.
    Failure {
        /// The HTTP status code, or `None` when the exchange never
        /// completed.
        status_code: Option<u16>,
        /// The canonical reason phrase, if known.
        reason: Option<String>,
        /// The decoded error body, the raw body as a JSON string when it
        /// was not valid JSON, the error message for transport failures,
        /// or `Null` when there was no body.
        details: Value,
    },

    /// The server reported success but the body could not be decoded.
    DecodeFailure {
        /// The HTTP status code.
        status_code: u16,
        /// The raw response body.
        body: String,
        /// The decode error message.
        error: String,
    },
}

impl OperationResult {
    /// Folds an HTTP response into a result.
    ///
    /// 202 and 204 become [`AsyncAccepted`](Self::AsyncAccepted) without
    /// the body ever being inspected. Other 2xx codes decode the body;
    /// everything else becomes a [`Failure`](Self::Failure) with the
    /// best available details.
    #[must_use]
    pub fn from_response(response: HttpResponse) -> Self {
        let status_code = response.status_code;

        if status_code == 202 || status_code == 204 {
            return Self::AsyncAccepted {
                status_code,
                headers: response.headers,
            };
        }

        if response.is_ok() {
            if response.body.is_empty() {
                return Self::Success {
                    status_code,
                    body: Value::Null,
                };
            }
            return match serde_json::from_str(&response.body) {
                Ok(body) => Self::Success { status_code, body },
                Err(error) => Self::DecodeFailure {
                    status_code,
                    body: response.body,
                    error: error.to_string(),
                },
            };
        }

        let details = if response.body.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&response.body).unwrap_or_else(|_| Value::String(response.body))
        };

        Self::Failure {
            status_code: Some(status_code),
            reason: response.reason,
            details,
        }
    }

    /// Folds a transport failure into a result.
    ///
    /// The exchange never completed, so there is no status code; the
    /// error message becomes the failure details.
    #[must_use]
    pub fn from_transport_error(error: &HttpError) -> Self {
        Self::Failure {
            status_code: None,
            reason: None,
            details: Value::String(error.to_string()),
        }
    }

    /// Returns `true` for [`Success`](Self::Success).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns `true` for [`AsyncAccepted`](Self::AsyncAccepted).
    #[must_use]
    pub const fn is_async_accepted(&self) -> bool {
        matches!(self, Self::AsyncAccepted { .. })
    }

    /// Returns `true` for [`Failure`](Self::Failure).
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Returns `true` for [`DecodeFailure`](Self::DecodeFailure).
    #[must_use]
    pub const fn is_decode_failure(&self) -> bool {
        matches!(self, Self::DecodeFailure { .. })
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Success { status_code, .. }
            | Self::AsyncAccepted { status_code, .. }
            | Self::DecodeFailure { status_code, .. } => Some(*status_code),
            Self::Failure { status_code, .. } => *status_code,
        }
    }

    /// Returns the decoded body of a successful operation.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        match self {
            Self::Success { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns the failure details, if the operation failed.
    #[must_use]
    pub const fn details(&self) -> Option<&Value> {
        match self {
            Self::Failure { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Returns the response headers of an asynchronously accepted
    /// operation.
    #[must_use]
    pub const fn headers(&self) -> Option<&HashMap<String, Vec<String>>> {
        match self {
            Self::AsyncAccepted { headers, .. } => Some(headers),
            _ => None,
        }
    }

    /// Consumes the result and returns the decoded body of a successful
    /// operation.
    #[must_use]
    pub fn into_body(self) -> Option<Value> {
        match self {
            Self::Success { body, .. } => Some(body),
            _ => None,
        }
    }
}
