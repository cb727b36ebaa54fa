//! HTTP client for SuiteTalk REST API communication.
//!
//! This module provides the [`HttpClient`] type for making OAuth1-signed
//! requests to a NetSuite account.

use std::collections::HashMap;

use crate::auth::OAuth1Signer;
use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUri, SuiteTalkConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the SuiteTalk REST API.
///
/// The client handles:
/// - URL construction from the account base URI
/// - Default headers including User-Agent
/// - OAuth1 signing of every outbound request
/// - Response header parsing
///
/// Each request is attempted exactly once. The response is returned
/// whatever its status code; only a failed exchange (validation, URL or
/// network problem) is an error.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use netsuite_suitetalk::{HttpClient, HttpRequest, HttpMethod, SuiteTalkConfig};
///
/// let config = SuiteTalkConfig::from_env()?;
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "record/v1/customer")
///     .query_param("limit", "10")
///     .build()?;
///
/// let response = client.request(&request).await?;
/// println!("{}: {}", response.status_code, response.body);
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI of the account's REST endpoint.
    base_uri: BaseUri,
    /// Signs each outbound request.
    signer: OAuth1Signer,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use netsuite_suitetalk::{
    ///     BaseUri, ConsumerKey, ConsumerSecret, Realm, SuiteTalkConfig, Token, TokenSecret,
    /// };
    /// use netsuite_suitetalk::clients::HttpClient;
    ///
    /// let config = SuiteTalkConfig::builder()
    ///     .base_uri(BaseUri::new("https://123456.suitetalk.api.netsuite.com/services/rest").unwrap())
    ///     .realm(Realm::new("123456").unwrap())
    ///     .consumer_key(ConsumerKey::new("key").unwrap())
    ///     .consumer_secret(ConsumerSecret::new("secret").unwrap())
    ///     .token(Token::new("token").unwrap())
    ///     .token_secret(TokenSecret::new("token-secret").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// ```
    #[must_use]
    pub fn new(config: &SuiteTalkConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}NetSuite SuiteTalk Library v{SDK_VERSION} | Rust {rust_version}"
        );

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri: config.base_uri().clone(),
            signer: OAuth1Signer::new(config),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub const fn base_uri(&self) -> &BaseUri {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the SuiteTalk REST API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction
    /// - OAuth1 signing
    /// - Header merging (defaults, then content type and authorization,
    ///   then request headers, which win)
    ///
    /// The response body is returned as raw text; callers decide whether
    /// to decode it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The path and query do not form a valid URL (`InvalidUrl`)
    /// - A network error occurs (`Network`)
    pub async fn request(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        // Build and parse the full URL. Query values are already in wire
        // form, so they are appended as-is rather than re-encoded.
        let url = self.request_url(request);
        let url = reqwest::Url::parse(&url).map_err(|_| HttpError::InvalidUrl { url })?;

        // Sign against the final URL
        let authorization = self
            .signer
            .authorization_header(request.http_method.as_str(), &url);

        // Merge headers; request headers are applied last and win
        let mut headers = self.default_headers.clone();
        headers.insert(
            "Content-Type".to_string(),
            request.content_type.as_str().to_string(),
        );
        headers.insert("Authorization".to_string(), authorization);
        for (key, value) in &request.headers {
            headers.insert(key.clone(), value.clone());
        }

        tracing::debug!(
            "Sending {} request to {}",
            request.http_method,
            request.path
        );

        // Build the reqwest request
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Patch => self.client.patch(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        // Add headers
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        // Add body
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        // Send request
        let res = req_builder.send().await?;

        // Parse response
        let status = res.status();
        let status_code = status.as_u16();
        let reason = status.canonical_reason().map(String::from);
        let res_headers = Self::parse_response_headers(res.headers());
        // Propagate body-read failures; a truncated body must not pass for
        // an empty one.
        let body = res.text().await?;

        tracing::debug!("Received {} from {}", status_code, request.path);

        Ok(HttpResponse::new(status_code, reason, res_headers, body))
    }

    /// Builds the full request URL, appending query pairs verbatim.
    fn request_url(&self, request: &HttpRequest) -> String {
        let mut url = self.base_uri.join(&request.path);
        if !request.query.is_empty() {
            let query = request
                .query
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConsumerKey, ConsumerSecret, Realm, Token, TokenSecret};

    fn create_test_config() -> SuiteTalkConfig {
        SuiteTalkConfig::builder()
            .base_uri(
                BaseUri::new("https://123456.suitetalk.api.netsuite.com/services/rest").unwrap(),
            )
            .realm(Realm::new("123456").unwrap())
            .consumer_key(ConsumerKey::new("consumer-key").unwrap())
            .consumer_secret(ConsumerSecret::new("consumer-secret").unwrap())
            .token(Token::new("token-id").unwrap())
            .token_secret(TokenSecret::new("token-secret").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.base_uri().as_ref(),
            "https://123456.suitetalk.api.netsuite.com/services/rest"
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("NetSuite SuiteTalk Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = SuiteTalkConfig::builder()
            .base_uri(
                BaseUri::new("https://123456.suitetalk.api.netsuite.com/services/rest").unwrap(),
            )
            .realm(Realm::new("123456").unwrap())
            .consumer_key(ConsumerKey::new("consumer-key").unwrap())
            .consumer_secret(ConsumerSecret::new("consumer-secret").unwrap())
            .token(Token::new("token-id").unwrap())
            .token_secret(TokenSecret::new("token-secret").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("NetSuite SuiteTalk Library"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_request_url_without_query() {
        let client = HttpClient::new(&create_test_config());
        let request = HttpRequest::builder(HttpMethod::Get, "record/v1/customer/42")
            .build()
            .unwrap();

        assert_eq!(
            client.request_url(&request),
            "https://123456.suitetalk.api.netsuite.com/services/rest/record/v1/customer/42"
        );
    }

    #[test]
    fn test_request_url_appends_query_pairs_verbatim() {
        let client = HttpClient::new(&create_test_config());
        let request = HttpRequest::builder(HttpMethod::Get, "record/v1/customer")
            .query_param("limit", "1000")
            .query_param("offset", "0")
            .query_param("q", "companyName IS \"Acme\"")
            .build()
            .unwrap();

        // Pairs land in order and unmodified; any escaping happened upstream.
        assert_eq!(
            client.request_url(&request),
            "https://123456.suitetalk.api.netsuite.com/services/rest/record/v1/customer\
             ?limit=1000&offset=0&q=companyName IS \"Acme\""
        );
    }
}
