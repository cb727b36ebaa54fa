//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated SuiteTalk base URI.
///
/// This newtype validates that the URI has an `http` or `https` scheme and a
/// non-empty host, and normalizes away any trailing slash so relative paths
/// can be joined with a single separator.
///
/// For production accounts the base URI has the form
/// `https://{account}.suitetalk.api.netsuite.com/services/rest`.
///
/// # Serialization
///
/// `BaseUri` serializes to and deserializes from the normalized URI string,
/// re-validating on deserialization:
///
/// ```rust
/// use netsuite_suitetalk::BaseUri;
///
/// let uri = BaseUri::new("https://123456.suitetalk.api.netsuite.com/services/rest/").unwrap();
/// let json = serde_json::to_string(&uri).unwrap();
/// assert_eq!(json, r#""https://123456.suitetalk.api.netsuite.com/services/rest""#);
/// ```
///
/// # Example
///
/// ```rust
/// use netsuite_suitetalk::BaseUri;
///
/// let uri = BaseUri::new("https://123456.suitetalk.api.netsuite.com/services/rest").unwrap();
/// assert_eq!(uri.scheme(), "https");
/// assert_eq!(uri.host_name(), "123456.suitetalk.api.netsuite.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUri {
    uri: String,
    scheme_end: usize,
    host_end: usize,
}

impl BaseUri {
    /// Creates a new validated base URI.
    ///
    /// Trailing slashes are stripped so `record/v1/customer` style paths can
    /// be appended with a single `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUri`] if the URI has no `http`/`https`
    /// scheme or no host.
    pub fn new(uri: impl Into<String>) -> Result<Self, ConfigError> {
        let uri = uri.into();
        let mut uri = uri.trim().to_string();
        while uri.ends_with('/') {
            uri.pop();
        }

        // Find scheme
        let scheme_end = uri
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUri { uri: uri.clone() })?;

        let scheme = &uri[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidBaseUri { uri: uri.clone() });
        }

        // Host ends at port, path, query, or end of string
        let host_start = scheme_end + 3;
        if host_start >= uri.len() {
            return Err(ConfigError::InvalidBaseUri { uri: uri.clone() });
        }
        let remainder = &uri[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(uri.len(), |i| host_start + i);

        if uri[host_start..host_end].is_empty() {
            return Err(ConfigError::InvalidBaseUri { uri });
        }

        Ok(Self {
            uri,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URI scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.uri[..self.scheme_end]
    }

    /// Returns the host name portion of the URI.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.uri[self.scheme_end + 3..self.host_end]
    }

    /// Joins a relative API path onto the base URI.
    ///
    /// # Example
    ///
    /// ```rust
    /// use netsuite_suitetalk::BaseUri;
    ///
    /// let uri = BaseUri::new("https://123456.suitetalk.api.netsuite.com/services/rest").unwrap();
    /// assert_eq!(
    ///     uri.join("record/v1/customer"),
    ///     "https://123456.suitetalk.api.netsuite.com/services/rest/record/v1/customer"
    /// );
    /// ```
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.uri)
    }
}

impl AsRef<str> for BaseUri {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

impl fmt::Display for BaseUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

impl Serialize for BaseUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.uri)
    }
}

impl<'de> Deserialize<'de> for BaseUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated NetSuite account realm.
///
/// The realm is the NetSuite account id (e.g., `123456`, or `123456_SB1` for
/// a sandbox) and is transmitted in the OAuth `Authorization` header. It
/// participates in the header only, never in the signature.
///
/// # Example
///
/// ```rust
/// use netsuite_suitetalk::Realm;
///
/// let realm = Realm::new("123456_SB1").unwrap();
/// assert_eq!(realm.as_ref(), "123456_SB1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Realm(String);

impl Realm {
    /// Creates a new validated realm.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyRealm`] if the realm is empty.
    pub fn new(realm: impl Into<String>) -> Result<Self, ConfigError> {
        let realm = realm.into();
        let realm = realm.trim().to_string();
        if realm.is_empty() {
            return Err(ConfigError::EmptyRealm);
        }
        Ok(Self(realm))
    }
}

impl AsRef<str> for Realm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated OAuth1 consumer key.
///
/// Issued by the NetSuite integration record. This newtype ensures the key is
/// non-empty and provides type safety to prevent accidental misuse of raw
/// strings.
///
/// # Example
///
/// ```rust
/// use netsuite_suitetalk::ConsumerKey;
///
/// let key = ConsumerKey::new("my-consumer-key").unwrap();
/// assert_eq!(key.as_ref(), "my-consumer-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerKey(String);

impl ConsumerKey {
    /// Creates a new validated consumer key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyConsumerKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ConsumerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated OAuth1 consumer secret.
///
/// This newtype ensures the secret is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ConsumerSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use netsuite_suitetalk::ConsumerSecret;
///
/// let secret = ConsumerSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ConsumerSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ConsumerSecret(String);

impl ConsumerSecret {
    /// Creates a new validated consumer secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyConsumerSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ConsumerSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ConsumerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConsumerSecret(*****)")
    }
}

/// A validated OAuth1 token id.
///
/// Issued when an access token is created for the integration and role.
///
/// # Example
///
/// ```rust
/// use netsuite_suitetalk::Token;
///
/// let token = Token::new("my-token-id").unwrap();
/// assert_eq!(token.as_ref(), "my-token-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Creates a new validated token id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated OAuth1 token secret.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `TokenSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use netsuite_suitetalk::TokenSecret;
///
/// let secret = TokenSecret::new("my-token-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "TokenSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct TokenSecret(String);

impl TokenSecret {
    /// Creates a new validated token secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTokenSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyTokenSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for TokenSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenSecret(*****)")
    }
}
