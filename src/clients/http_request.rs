//! HTTP request types for the SuiteTalk client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the SuiteTalk REST API.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the SuiteTalk REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving records.
    Get,
    /// HTTP POST method for creating and transforming records.
    Post,
    /// HTTP PATCH method for partially updating records.
    Patch,
    /// HTTP PUT method for upserting records by external id.
    Put,
    /// HTTP DELETE method for removing records.
    Delete,
}

impl HttpMethod {
    /// Returns the canonical wire form of the method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Content type for SuiteTalk requests.
///
/// SuiteTalk expects a `Content-Type` header on every request, including
/// GET and DELETE. Record writes use the Oracle singular-resource media
/// type; everything else uses plain JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentType {
    /// Plain JSON (`application/json`).
    Json,
    /// Oracle singular resource (`application/vnd.oracle.resource+json; type=singular`).
    SingularResource,
}

impl ContentType {
    /// Returns the MIME type string for this content type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::SingularResource => "application/vnd.oracle.resource+json; type=singular",
        }
    }
}

/// An HTTP request to be sent to the SuiteTalk REST API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use netsuite_suitetalk::clients::{HttpRequest, HttpMethod, ContentType};
/// use serde_json::json;
///
/// // GET request
/// let get_request = HttpRequest::builder(HttpMethod::Get, "record/v1/customer/42")
///     .build()
///     .unwrap();
///
/// // POST request with a record body
/// let post_request = HttpRequest::builder(HttpMethod::Post, "record/v1/customer")
///     .body(json!({"companyName": "Acme Rentals"}))
///     .content_type(ContentType::SingularResource)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the account base URI) for this request.
    pub path: String,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
    /// The content type advertised for this request.
    pub content_type: ContentType,
    /// Query parameters to append to the URL, in order. Values must
    /// already be in final wire form; they are not re-encoded.
    pub query: Vec<(String, String)>,
    /// Additional headers to include in the request.
    pub headers: HashMap<String, String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method for the request
    /// * `path` - The path (relative to the account base URI) for the request
    ///
    /// # Example
    ///
    /// ```rust
    /// use netsuite_suitetalk::clients::{HttpRequest, HttpMethod};
    ///
    /// let request = HttpRequest::builder(HttpMethod::Get, "record/v1/customer")
    ///     .query_param("limit", "10")
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `http_method` is `Post`, `Patch` or `Put` but `body` is `None`
    /// - `http_method` is `Get` or `Delete` but `body` is `Some`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match self.http_method {
            HttpMethod::Post | HttpMethod::Patch | HttpMethod::Put => {
                if self.body.is_none() {
                    return Err(InvalidHttpRequestError::MissingBody {
                        method: self.http_method.to_string(),
                    });
                }
            }
            HttpMethod::Get | HttpMethod::Delete => {
                if self.body.is_some() {
                    return Err(InvalidHttpRequestError::UnexpectedBody {
                        method: self.http_method.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
///
/// Provides a fluent API for building requests with optional parameters.
/// The content type defaults to [`ContentType::Json`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    content_type: ContentType,
    query: Vec<(String, String)>,
    headers: HashMap<String, String>,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and path.
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            content_type: ContentType::Json,
            query: Vec::new(),
            headers: HashMap::new(),
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request.
    #[must_use]
    pub const fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Sets all query parameters at once, replacing any already added.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets all extra headers at once, replacing any already added.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            content_type: self.content_type,
            query: self.query,
            headers: self.headers,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_as_str() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
    }

    #[test]
    fn test_content_type_strings() {
        assert_eq!(ContentType::Json.as_str(), "application/json");
        assert_eq!(
            ContentType::SingularResource.as_str(),
            "application/vnd.oracle.resource+json; type=singular"
        );
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "record/v1/customer")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "record/v1/customer");
        assert!(request.body.is_none());
        assert_eq!(request.content_type, ContentType::Json);
        assert!(request.query.is_empty());
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_builder_creates_valid_post_request() {
        let request = HttpRequest::builder(HttpMethod::Post, "record/v1/customer")
            .body(json!({"companyName": "Acme Rentals"}))
            .content_type(ContentType::SingularResource)
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Post);
        assert!(request.body.is_some());
        assert_eq!(request.content_type, ContentType::SingularResource);
    }

    #[test]
    fn test_verify_requires_body_for_write_methods() {
        for method in [HttpMethod::Post, HttpMethod::Patch, HttpMethod::Put] {
            let result = HttpRequest::builder(method, "record/v1/customer").build();
            assert!(matches!(
                result,
                Err(InvalidHttpRequestError::MissingBody { method: m }) if m == method.as_str()
            ));
        }
    }

    #[test]
    fn test_verify_rejects_body_on_get_and_delete() {
        for method in [HttpMethod::Get, HttpMethod::Delete] {
            let result = HttpRequest::builder(method, "record/v1/customer/42")
                .body(json!({"companyName": "Acme Rentals"}))
                .build();
            assert!(matches!(
                result,
                Err(InvalidHttpRequestError::UnexpectedBody { method: m }) if m == method.as_str()
            ));
        }
    }

    #[test]
    fn test_builder_preserves_query_param_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "record/v1/customer")
            .query_param("limit", "1000")
            .query_param("offset", "0")
            .query_param("q", "email IS test@example.com")
            .build()
            .unwrap();

        assert_eq!(
            request.query,
            vec![
                ("limit".to_string(), "1000".to_string()),
                ("offset".to_string(), "0".to_string()),
                ("q".to_string(), "email IS test@example.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_builder_with_extra_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, "record/v1/customer")
            .header("Prefer", "respond-async")
            .build()
            .unwrap();

        assert_eq!(
            request.headers.get("Prefer"),
            Some(&"respond-async".to_string())
        );
    }
}
