//! Request authentication for the SuiteTalk REST API.
//!
//! SuiteTalk uses token-based authentication: every request carries an OAuth
//! 1.0a `Authorization` header signed with HMAC-SHA256 using the integration
//! consumer key/secret and the access token id/secret.
//!
//! # Overview
//!
//! - [`OAuth1Signer`]: Computes signed `Authorization` header values

pub mod oauth1;

pub use oauth1::OAuth1Signer;
