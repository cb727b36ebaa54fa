//! HTTP client types for SuiteTalk REST API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! OAuth1-signed requests to a NetSuite account. It handles URL
//! construction, request validation, header merging and response
//! capture; interpreting response bodies is left to the record
//! operations built on top.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, PUT, DELETE)
//! - [`ContentType`]: Content types for SuiteTalk requests
//!
//! # Example
//!
//! ```rust,ignore
//! use netsuite_suitetalk::{HttpClient, HttpRequest, HttpMethod, SuiteTalkConfig};
//!
//! let config = SuiteTalkConfig::from_env()?;
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "record/v1/customer")
//!     .query_param("limit", "10")
//!     .build()?;
//!
//! let response = client.request(&request).await?;
//! if response.is_ok() {
//!     println!("{}", response.body);
//! }
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{ContentType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
