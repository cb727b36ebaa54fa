//! OAuth 1.0a request signing with HMAC-SHA256.
//!
//! This module produces the `Authorization` header NetSuite expects on every
//! SuiteTalk REST request (RFC 5849, token-based authentication). The realm
//! travels in the header but is excluded from the signature; the signature is
//! transmitted in the header, never in the query string.
//!
//! # Signing
//!
//! The signature base string is `METHOD&enc(base-uri)&enc(parameter-string)`,
//! where the parameter string merges the protocol parameters with the
//! request's decoded query pairs, percent-encodes keys and values with the
//! RFC 3986 unreserved set, and sorts by encoded key then value. The signing
//! key is `enc(consumer_secret)&enc(token_secret)` and the signature is the
//! base64 HMAC-SHA256 tag.
//!
//! # Example
//!
//! ```rust
//! use netsuite_suitetalk::{
//!     BaseUri, ConsumerKey, ConsumerSecret, OAuth1Signer, Realm, SuiteTalkConfig, Token,
//!     TokenSecret,
//! };
//!
//! let config = SuiteTalkConfig::builder()
//!     .base_uri(BaseUri::new("https://123456.suitetalk.api.netsuite.com/services/rest").unwrap())
//!     .realm(Realm::new("123456").unwrap())
//!     .consumer_key(ConsumerKey::new("key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("secret").unwrap())
//!     .token(Token::new("token").unwrap())
//!     .token_secret(TokenSecret::new("token-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let signer = OAuth1Signer::new(&config);
//! let url: reqwest::Url = "https://123456.suitetalk.api.netsuite.com/services/rest/record/v1/customer"
//!     .parse()
//!     .unwrap();
//! let header = signer.authorization_header("GET", &url);
//! assert!(header.starts_with("OAuth realm=\"123456\""));
//! ```

use base64::prelude::*;
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::Url;
use sha2::Sha256;

use crate::config::{ConsumerKey, ConsumerSecret, Realm, SuiteTalkConfig, Token, TokenSecret};

type HmacSha256 = Hmac<Sha256>;

/// OAuth signature method transmitted with every request.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA256";

/// OAuth protocol version transmitted with every request.
pub const OAUTH_VERSION: &str = "1.0";

/// Length of generated nonces.
const NONCE_LENGTH: usize = 32;

/// Signs SuiteTalk requests per OAuth 1.0a.
///
/// The signer holds a copy of the credential set and is cheap to clone.
/// Signing is a pure computation over the request method and final URL; the
/// nonce and timestamp are drawn per call.
///
/// # Thread Safety
///
/// `OAuth1Signer` is `Send + Sync` and can sign concurrently from multiple
/// tasks.
#[derive(Clone, Debug)]
pub struct OAuth1Signer {
    realm: Realm,
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    token: Token,
    token_secret: TokenSecret,
}

// Verify OAuth1Signer is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuth1Signer>();
};

impl OAuth1Signer {
    /// Creates a signer from the client configuration.
    #[must_use]
    pub fn new(config: &SuiteTalkConfig) -> Self {
        Self {
            realm: config.realm().clone(),
            consumer_key: config.consumer_key().clone(),
            consumer_secret: config.consumer_secret().clone(),
            token: config.token().clone(),
            token_secret: config.token_secret().clone(),
        }
    }

    /// Computes the `Authorization` header value for a request.
    ///
    /// A fresh nonce and the current Unix timestamp are drawn for each call.
    #[must_use]
    pub fn authorization_header(&self, method: &str, url: &Url) -> String {
        let nonce = generate_nonce();
        let timestamp = Utc::now().timestamp().to_string();
        self.authorization_header_with(method, url, &nonce, &timestamp)
    }

    /// Computes the `Authorization` header with an explicit nonce and
    /// timestamp.
    ///
    /// Exposed so the header layout and signature are reproducible; prefer
    /// [`authorization_header`](Self::authorization_header) for real traffic.
    #[must_use]
    pub fn authorization_header_with(
        &self,
        method: &str,
        url: &Url,
        nonce: &str,
        timestamp: &str,
    ) -> String {
        let oauth_params = self.oauth_params(nonce, timestamp);
        let signature = self.signature(method, url, &oauth_params);

        let mut params = oauth_params;
        params.push(("oauth_signature", signature));
        params.sort_by(|a, b| a.0.cmp(b.0));

        let pairs = params
            .iter()
            .map(|(key, value)| format!("{key}=\"{}\"", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "OAuth realm=\"{}\", {pairs}",
            urlencoding::encode(self.realm.as_ref())
        )
    }

    /// Protocol parameters in sorted order, signature excluded.
    fn oauth_params(&self, nonce: &str, timestamp: &str) -> Vec<(&'static str, String)> {
        vec![
            ("oauth_consumer_key", self.consumer_key.as_ref().to_string()),
            ("oauth_nonce", nonce.to_string()),
            ("oauth_signature_method", SIGNATURE_METHOD.to_string()),
            ("oauth_timestamp", timestamp.to_string()),
            ("oauth_token", self.token.as_ref().to_string()),
            ("oauth_version", OAUTH_VERSION.to_string()),
        ]
    }

    fn signature(&self, method: &str, url: &Url, oauth_params: &[(&'static str, String)]) -> String {
        let base_string = signature_base_string(method, url, oauth_params);
        hmac_sha256_base64(&self.signing_key(), &base_string)
    }

    /// `enc(consumer_secret)&enc(token_secret)` per RFC 5849 §3.4.2.
    fn signing_key(&self) -> String {
        format!(
            "{}&{}",
            urlencoding::encode(self.consumer_secret.as_ref()),
            urlencoding::encode(self.token_secret.as_ref())
        )
    }
}

/// Computes the signature base string for a request (RFC 5849 §3.4.1).
fn signature_base_string(
    method: &str,
    url: &Url,
    oauth_params: &[(&'static str, String)],
) -> String {
    let mut pairs: Vec<(String, String)> = oauth_params
        .iter()
        .map(|(key, value)| {
            (
                urlencoding::encode(key).into_owned(),
                urlencoding::encode(value).into_owned(),
            )
        })
        .collect();
    for (key, value) in url.query_pairs() {
        pairs.push((
            urlencoding::encode(&key).into_owned(),
            urlencoding::encode(&value).into_owned(),
        ));
    }
    pairs.sort();

    let parameter_string = pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        urlencoding::encode(&base_string_uri(url)),
        urlencoding::encode(&parameter_string)
    )
}

/// Scheme, host, optional non-default port, and path — query excluded.
fn base_string_uri(url: &Url) -> String {
    let scheme = url.scheme();
    let host = url.host_str().unwrap_or_default();
    url.port().map_or_else(
        || format!("{scheme}://{host}{}", url.path()),
        |port| format!("{scheme}://{host}:{port}{}", url.path()),
    )
}

#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
fn hmac_sha256_base64(key: &str, message: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    BASE64_STANDARD.encode(mac.finalize().into_bytes())
}

/// Generates a random alphanumeric nonce.
fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}
