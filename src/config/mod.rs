//! Configuration types for the SuiteTalk client.
//!
//! This module provides the configuration needed to talk to a NetSuite
//! account: the REST base URI plus the OAuth1 credential set (realm,
//! consumer key/secret, token id/secret).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`SuiteTalkConfig`]: The configuration struct holding all client settings
//! - [`SuiteTalkConfigBuilder`]: A builder for constructing [`SuiteTalkConfig`] instances
//! - [`BaseUri`]: A validated REST base URI
//! - [`Realm`]: The NetSuite account id
//! - [`ConsumerKey`] / [`ConsumerSecret`]: Integration record credentials
//! - [`Token`] / [`TokenSecret`]: Access token credentials
//!
//! Secrets mask their `Debug` output, so a logged configuration never leaks
//! credential material.
//!
//! # Example
//!
//! ```rust
//! use netsuite_suitetalk::{
//!     BaseUri, ConsumerKey, ConsumerSecret, Realm, SuiteTalkConfig, Token, TokenSecret,
//! };
//!
//! let config = SuiteTalkConfig::builder()
//!     .base_uri(BaseUri::new("https://123456.suitetalk.api.netsuite.com/services/rest").unwrap())
//!     .realm(Realm::new("123456").unwrap())
//!     .consumer_key(ConsumerKey::new("consumer-key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("consumer-secret").unwrap())
//!     .token(Token::new("token-id").unwrap())
//!     .token_secret(TokenSecret::new("token-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{BaseUri, ConsumerKey, ConsumerSecret, Realm, Token, TokenSecret};

use crate::error::ConfigError;

/// Configuration for the SuiteTalk client.
///
/// This struct holds everything needed to construct the transport: the REST
/// base URI and the four-part OAuth1 credential set, plus an optional
/// User-Agent prefix for outbound requests. All six credential fields are
/// required; construction fails fast when any is missing or malformed.
///
/// # Thread Safety
///
/// `SuiteTalkConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use netsuite_suitetalk::{
///     BaseUri, ConsumerKey, ConsumerSecret, Realm, SuiteTalkConfig, Token, TokenSecret,
/// };
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
/// assert_eq!(config.realm().as_ref(), "123456");
/// ```
#[derive(Clone, Debug)]
pub struct SuiteTalkConfig {
    base_uri: BaseUri,
    realm: Realm,
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    token: Token,
    token_secret: TokenSecret,
    user_agent_prefix: Option<String>,
}

impl SuiteTalkConfig {
    /// Creates a new builder for constructing a `SuiteTalkConfig`.
    #[must_use]
    pub fn builder() -> SuiteTalkConfigBuilder {
        SuiteTalkConfigBuilder::new()
    }

    /// Loads the configuration from `NETSUITE_*` environment variables.
    ///
    /// Reads `NETSUITE_BASE_URI`, `NETSUITE_REALM`, `NETSUITE_CONSUMER_KEY`,
    /// `NETSUITE_CONSUMER_SECRET`, `NETSUITE_TOKEN`, and
    /// `NETSUITE_TOKEN_SECRET`, applying the same validation as the builder.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] naming the absent
    /// variable, or the corresponding validation error when a variable is
    /// present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_uri: BaseUri::new(env_var("NETSUITE_BASE_URI")?)?,
            realm: Realm::new(env_var("NETSUITE_REALM")?)?,
            consumer_key: ConsumerKey::new(env_var("NETSUITE_CONSUMER_KEY")?)?,
            consumer_secret: ConsumerSecret::new(env_var("NETSUITE_CONSUMER_SECRET")?)?,
            token: Token::new(env_var("NETSUITE_TOKEN")?)?,
            token_secret: TokenSecret::new(env_var("NETSUITE_TOKEN_SECRET")?)?,
            user_agent_prefix: None,
        })
    }

    /// Returns the REST base URI.
    #[must_use]
    pub const fn base_uri(&self) -> &BaseUri {
        &self.base_uri
    }

    /// Returns the account realm.
    #[must_use]
    pub const fn realm(&self) -> &Realm {
        &self.realm
    }

    /// Returns the consumer key.
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret.
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }

    /// Returns the access token id.
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// Returns the access token secret.
    #[must_use]
    pub const fn token_secret(&self) -> &TokenSecret {
        &self.token_secret
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify SuiteTalkConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SuiteTalkConfig>();
};

fn env_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingRequiredField { field: name })
}

/// Builder for constructing [`SuiteTalkConfig`] instances.
///
/// All six credential fields are required; `user_agent_prefix` is optional.
///
/// # Example
///
/// ```rust
/// use netsuite_suitetalk::{
///     BaseUri, ConsumerKey, ConsumerSecret, Realm, SuiteTalkConfig, Token, TokenSecret,
/// };
///
/// let config = SuiteTalkConfig::builder()
///     .base_uri(BaseUri::new("https://123456.suitetalk.api.netsuite.com/services/rest").unwrap())
///     .realm(Realm::new("123456").unwrap())
///     .consumer_key(ConsumerKey::new("key").unwrap())
///     .consumer_secret(ConsumerSecret::new("secret").unwrap())
///     .token(Token::new("token").unwrap())
///     .token_secret(TokenSecret::new("token-secret").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SuiteTalkConfigBuilder {
    base_uri: Option<BaseUri>,
    realm: Option<Realm>,
    consumer_key: Option<ConsumerKey>,
    consumer_secret: Option<ConsumerSecret>,
    token: Option<Token>,
    token_secret: Option<TokenSecret>,
    user_agent_prefix: Option<String>,
}

impl SuiteTalkConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the REST base URI (required).
    #[must_use]
    pub fn base_uri(mut self, uri: BaseUri) -> Self {
        self.base_uri = Some(uri);
        self
    }

    /// Sets the account realm (required).
    #[must_use]
    pub fn realm(mut self, realm: Realm) -> Self {
        self.realm = Some(realm);
        self
    }

    /// Sets the consumer key (required).
    #[must_use]
    pub fn consumer_key(mut self, key: ConsumerKey) -> Self {
        self.consumer_key = Some(key);
        self
    }

    /// Sets the consumer secret (required).
    #[must_use]
    pub fn consumer_secret(mut self, secret: ConsumerSecret) -> Self {
        self.consumer_secret = Some(secret);
        self
    }

    /// Sets the access token id (required).
    #[must_use]
    pub fn token(mut self, token: Token) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the access token secret (required).
    #[must_use]
    pub fn token_secret(mut self, secret: TokenSecret) -> Self {
        self.token_secret = Some(secret);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`SuiteTalkConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] naming the first missing
    /// field.
    pub fn build(self) -> Result<SuiteTalkConfig, ConfigError> {
        let base_uri = self
            .base_uri
            .ok_or(ConfigError::MissingRequiredField { field: "base_uri" })?;
        let realm = self
            .realm
            .ok_or(ConfigError::MissingRequiredField { field: "realm" })?;
        let consumer_key = self.consumer_key.ok_or(ConfigError::MissingRequiredField {
            field: "consumer_key",
        })?;
        let consumer_secret = self
            .consumer_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_secret",
            })?;
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;
        let token_secret = self.token_secret.ok_or(ConfigError::MissingRequiredField {
            field: "token_secret",
        })?;

        Ok(SuiteTalkConfig {
            base_uri,
            realm,
            consumer_key,
            consumer_secret,
            token,
            token_secret,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
