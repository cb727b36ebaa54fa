//! # NetSuite SuiteTalk Rust SDK
//!
//! A Rust client for the NetSuite SuiteTalk REST record API, providing
//! type-safe configuration, OAuth 1.0a request signing, and uniform record
//! operations over every supported record type.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`SuiteTalkConfig`] and [`SuiteTalkConfigBuilder`]
//! - Validated newtypes for the account base URI, realm, and token credentials
//! - OAuth 1.0a HMAC-SHA256 request signing via [`auth::oauth1`]
//! - A per-record-type resource handle ([`RecordResource`]) with create, get,
//!   list, update, upsert, delete, and transform operations
//! - SuiteQL queries via [`SuiteTalkClient::suiteql`]
//! - Asynchronous request processing (`Prefer: respond-async`) and idempotency
//!   keys on every write operation
//! - A uniform [`OperationResult`] for every outcome, including transport
//!   failures and undecodable bodies
//!
//! ## Quick Start
//!
//! ```rust
//! use netsuite_suitetalk::{
//!     BaseUri, ConsumerKey, ConsumerSecret, Realm, SuiteTalkConfig, Token, TokenSecret,
//! };
//!
//! // Create configuration using the builder pattern
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
//!
//! Credentials can also come from the environment (`NETSUITE_BASE_URI`,
//! `NETSUITE_REALM`, `NETSUITE_CONSUMER_KEY`, `NETSUITE_CONSUMER_SECRET`,
//! `NETSUITE_TOKEN`, `NETSUITE_TOKEN_SECRET`):
//!
//! ```rust,ignore
//! let config = SuiteTalkConfig::from_env()?;
//! ```
//!
//! ## Record Operations
//!
//! Every record type exposes the same seven operations. Results are returned
//! as [`OperationResult`] rather than `Err` so that API-level failures can be
//! inspected without unwinding:
//!
//! ```rust,ignore
//! use netsuite_suitetalk::{
//!     CreateOptions, GetOptions, ListOptions, OperationResult, SuiteTalkClient,
//! };
//! use serde_json::json;
//!
//! let client = SuiteTalkClient::new(&config);
//!
//! // Create a customer
//! let created = client
//!     .customer()
//!     .create(json!({ "companyName": "Acme Co." }), CreateOptions::default())
//!     .await;
//!
//! // Fetch it back with sub-resources expanded
//! let fetched = client
//!     .customer()
//!     .get(42, GetOptions { expand_sub_resources: true, ..GetOptions::default() })
//!     .await;
//!
//! match fetched {
//!     OperationResult::Success { body, .. } => println!("{body}"),
//!     OperationResult::Failure { status_code, details, .. } => {
//!         eprintln!("request failed ({status_code:?}): {details}");
//!     }
//!     other => eprintln!("unexpected outcome: {other:?}"),
//! }
//!
//! // Search with a query filter
//! let matches = client
//!     .customer()
//!     .list(ListOptions {
//!         q: Some("email IS bob@example.com".to_string()),
//!         ..ListOptions::default()
//!     })
//!     .await;
//! ```
//!
//! Resources can also be resolved dynamically by their SuiteTalk wire name:
//!
//! ```rust,ignore
//! let resource = client.resource("salesOrder")?;
//! let orders = resource.list(ListOptions::default()).await;
//! ```
//!
//! ## Record Transforms
//!
//! NetSuite can transform certain records into related ones, such as a sales
//! order into an item fulfillment. The supported targets are validated before
//! any request is sent:
//!
//! ```rust,ignore
//! use netsuite_suitetalk::{CreateOptions, TransformTarget};
//! use serde_json::json;
//!
//! let result = client
//!     .sales_order()
//!     .transform(7, TransformTarget::ItemFulfillment, json!({}), CreateOptions::default())?
//!     .await;
//! ```
//!
//! ## SuiteQL
//!
//! ```rust,ignore
//! let result = client
//!     .suiteql(
//!         "SELECT id, companyName FROM customer WHERE isInactive = 'F'",
//!         vec![("limit".to_string(), "10".to_string())],
//!     )
//!     .await;
//! ```
//!
//! ## Asynchronous Processing and Idempotency
//!
//! Long-running operations can be submitted with `Prefer: respond-async`;
//! NetSuite then answers `202 Accepted` with a `Location` header to poll.
//! Such responses surface as [`OperationResult::AsyncAccepted`] and the body
//! is never decoded. Write operations may also carry an idempotency key so
//! retries cannot duplicate work:
//!
//! ```rust,ignore
//! use netsuite_suitetalk::{CreateOptions, IdempotencyKey, OperationResult, RequestOptions};
//! use serde_json::json;
//!
//! let options = CreateOptions {
//!     request: RequestOptions {
//!         respond_async: true,
//!         idempotency_key: Some(IdempotencyKey::new("7f2e6e2c-6bfa-4f7c-9c2e-1f0a8d2b4c6d")),
//!         ..RequestOptions::default()
//!     },
//!     ..CreateOptions::default()
//! };
//!
//! if let OperationResult::AsyncAccepted { headers, .. } =
//!     client.vendor_bill().create(json!({ "entity": { "id": "5" } }), options).await
//! {
//!     println!("poll {:?}", headers.get("location"));
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Uniform outcomes**: One result type for success, failure, async
//!   acceptance, and decode errors

pub mod auth;
pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::OAuth1Signer;
pub use client::SuiteTalkClient;
pub use config::{
    BaseUri, ConsumerKey, ConsumerSecret, Realm, SuiteTalkConfig, SuiteTalkConfigBuilder, Token,
    TokenSecret,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ContentType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, SDK_VERSION,
};

// Re-export record resource types
pub use resources::{
    CreateOptions, GetOptions, IdempotencyKey, ListOptions, OperationResult, RecordResource,
    RequestOptions, ResourceDescriptor, ResourceError, ResourceKind, TransformTarget,
    UpdateOptions,
};
