//! Record resource infrastructure for the SuiteTalk REST API.
//!
//! This module provides everything above the transport:
//!
//! - **[`RecordResource`]**: the uniform operation set (create, get, list,
//!   update, upsert, delete, transform) for one record type
//! - **[`ResourceDescriptor`] and [`DESCRIPTORS`]**: the static table of
//!   addressable record types, their paths and transform sets
//! - **[`OperationResult`]**: the single result shape every operation
//!   resolves to
//! - **Query sanitization**: [`sanitize_query_params`] turns loose JSON
//!   parameter maps into wire-ready pairs
//! - **[`ResourceError`]**: resolution errors raised before any network
//!   traffic
//!
//! # Example
//!
//! ```rust,ignore
//! use netsuite_suitetalk::{
//!     CreateOptions, GetOptions, ListOptions, SuiteTalkClient, SuiteTalkConfig,
//! };
//! use serde_json::json;
//!
//! let client = SuiteTalkClient::new(SuiteTalkConfig::from_env()?);
//!
//! // Create a record
//! let created = client
//!     .customer()
//!     .create(json!({"companyName": "Acme Rentals"}), CreateOptions::default())
//!     .await;
//!
//! // Fetch it back, sublists expanded
//! let fetched = client
//!     .customer()
//!     .get(42, GetOptions { expand_sub_resources: true, ..GetOptions::default() })
//!     .await;
//!
//! // Page through the collection
//! let page = client.customer().list(ListOptions::default()).await;
//! ```

mod errors;
mod path;
mod query;
mod resource;
mod result;

// Public exports
pub use errors::ResourceError;
pub use path::{
    find_descriptor, ResourceDescriptor, ResourceKind, TransformTarget, DESCRIPTORS,
};
pub use query::sanitize_query_params;
pub use resource::{
    CreateOptions, GetOptions, IdempotencyKey, ListOptions, RecordResource, RequestOptions,
    UpdateOptions,
};
pub use result::OperationResult;
