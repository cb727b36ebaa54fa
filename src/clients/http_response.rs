//! HTTP response types for the SuiteTalk client.
//!
//! This module provides the [`HttpResponse`] type for accessing raw
//! response data returned by the transport.

use std::collections::HashMap;

/// An HTTP response from the SuiteTalk REST API.
///
/// The body is kept as raw text. Whether and how to decode it is an
/// operation-level decision: asynchronous acceptances (202 and 204)
/// carry no meaningful body and are never decoded, while other
/// responses are interpreted by the caller.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status_code: u16,
    /// The canonical reason phrase for the status code, if known.
    pub reason: Option<String>,
    /// Response headers, with lowercased names. Headers may have
    /// multiple values.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        status_code: u16,
        reason: Option<String>,
        headers: HashMap<String, Vec<String>>,
        body: String,
    ) -> Self {
        Self {
            status_code,
            reason,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status_code >= 200 && self.status_code <= 299
    }

    /// Returns the first value of the named header, if present.
    ///
    /// Header names are stored lowercased, so `name` must be lowercase.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Location` header value, if present.
    ///
    /// SuiteTalk reports the URL of a created record, or of the job
    /// status endpoint for an asynchronously accepted operation, in
    /// this header.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, None, HashMap::new(), String::new());
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 404, 429, 500, 503] {
            let response = HttpResponse::new(code, None, HashMap::new(), String::new());
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_header_returns_first_value() {
        let mut headers = HashMap::new();
        headers.insert(
            "preference-applied".to_string(),
            vec!["respond-async".to_string(), "transient".to_string()],
        );

        let response = HttpResponse::new(202, None, headers, String::new());
        assert_eq!(response.header("preference-applied"), Some("respond-async"));
        assert_eq!(response.header("content-type"), None);
    }

    #[test]
    fn test_location_extraction() {
        let mut headers = HashMap::new();
        headers.insert(
            "location".to_string(),
            vec!["https://123456.suitetalk.api.netsuite.com/services/rest/record/v1/customer/42".to_string()],
        );

        let response = HttpResponse::new(204, None, headers, String::new());
        assert_eq!(
            response.location(),
            Some("https://123456.suitetalk.api.netsuite.com/services/rest/record/v1/customer/42")
        );
    }

    #[test]
    fn test_body_is_kept_verbatim() {
        let response = HttpResponse::new(
            200,
            Some("OK".to_string()),
            HashMap::new(),
            "not json at all".to_string(),
        );
        assert_eq!(response.body, "not json at all");
        assert_eq!(response.reason.as_deref(), Some("OK"));
    }
}
