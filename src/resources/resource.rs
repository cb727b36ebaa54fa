//! Record operations against the SuiteTalk REST API.
//!
//! A [`RecordResource`] executes the uniform operation set (create, get,
//! list, update, upsert, delete, transform) for one record type. Every
//! operation follows the same pipeline: interpolate the path, sanitize
//! the applicable query parameters, assemble headers, issue the signed
//! request, and fold the outcome into an
//! [`OperationResult`](crate::resources::OperationResult). Nothing that
//! happens on the wire escapes as an error.
//!
//! # Example
//!
//! ```rust,ignore
//! use netsuite_suitetalk::{ListOptions, SuiteTalkClient, SuiteTalkConfig};
//!
//! let client = SuiteTalkClient::new(SuiteTalkConfig::from_env()?);
//!
//! let result = client
//!     .customer()
//!     .list(ListOptions {
//!         q: Some("email IS bob@example.com".to_string()),
//!         ..ListOptions::default()
//!     })
//!     .await;
//!
//! if let Some(body) = result.body() {
//!     println!("{} matches", body["count"]);
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use serde_json::{Map, Value};

use crate::clients::{ContentType, HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::resources::errors::ResourceError;
use crate::resources::path::{ResourceDescriptor, TransformTarget};
use crate::resources::query::sanitize_query_params;
use crate::resources::result::OperationResult;

/// Header carrying the client-supplied idempotency key.
const IDEMPOTENCY_KEY_HEADER: &str = "X-NetSuite-Idempotency-Key";

/// Header requesting a server behavior.
const PREFER_HEADER: &str = "Prefer";

/// `Prefer` value requesting asynchronous execution.
const RESPOND_ASYNC: &str = "respond-async";

/// A client-supplied idempotency key for asynchronous requests.
///
/// Forwarded untouched as `X-NetSuite-Idempotency-Key`. NetSuite
/// recommends a UUID in string form (RFC 4122); the server ignores the
/// key when the request executes synchronously.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    /// Creates a new idempotency key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl AsRef<str> for IdempotencyKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdempotencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Options shared by every record operation.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    /// Request asynchronous execution via `Prefer: respond-async`. The
    /// server signals acceptance with `Preference-applied: respond-async`
    /// and a 202 status.
    pub respond_async: bool,
    /// Idempotency key for asynchronous requests.
    pub idempotency_key: Option<IdempotencyKey>,
    /// Extra headers, applied last; they may override anything the
    /// operation set, including `Content-Type`.
    pub extra_headers: HashMap<String, String>,
}

/// Options for [`RecordResource::create`] and [`RecordResource::transform`].
#[derive(Clone, Debug, Default)]
pub struct CreateOptions {
    /// Comma-delimited sublist names whose lines are replaced rather
    /// than merged (`replace` parameter).
    pub replace: Option<String>,
    /// Shared request options.
    pub request: RequestOptions,
}

/// Options for [`RecordResource::get`].
#[derive(Clone, Debug, Default)]
pub struct GetOptions {
    /// Expand sublists and subrecords in the response
    /// (`expandSubResources`).
    pub expand_sub_resources: bool,
    /// Return enumerations in simple format (`simpleEnumFormat`).
    pub simple_enum_format: bool,
    /// Comma-delimited field names to return (`fields`).
    pub fields: Option<String>,
    /// Shared request options.
    pub request: RequestOptions,
}

/// Options for [`RecordResource::list`].
#[derive(Clone, Debug)]
pub struct ListOptions {
    /// Search expression filtering the results (`q`), forwarded
    /// unescaped. `None` sends no `q` parameter.
    pub q: Option<String>,
    /// Page size (`limit`); SuiteTalk serves at most 1000 per page.
    pub limit: u32,
    /// Zero-based offset into the result set (`offset`).
    pub offset: u64,
    /// Shared request options.
    pub request: RequestOptions,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            q: None,
            limit: 1000,
            offset: 0,
            request: RequestOptions::default(),
        }
    }
}

/// Options for [`RecordResource::update`] and [`RecordResource::upsert`].
#[derive(Clone, Debug, Default)]
pub struct UpdateOptions {
    /// Comma-delimited sublist names whose lines are replaced rather
    /// than merged (`replace` parameter).
    pub replace: Option<String>,
    /// Replace only the fields present in the request body
    /// (`replaceSelectedFields`).
    pub replace_selected_fields: bool,
    /// Shared request options.
    pub request: RequestOptions,
}

/// Operations on one record type.
///
/// A `RecordResource` borrows the shared transport and a static
/// descriptor; it is handed out by
/// [`SuiteTalkClient`](crate::SuiteTalkClient) and is free to copy.
///
/// Records travel as loose JSON ([`serde_json::Value`]): SuiteTalk
/// record shapes are account-specific, so the library does not model
/// them as typed structs.
#[derive(Clone, Copy, Debug)]
pub struct RecordResource<'a> {
    transport: &'a HttpClient,
    descriptor: &'static ResourceDescriptor,
}

impl<'a> RecordResource<'a> {
    /// Creates a resource bound to one record type.
    pub(crate) const fn new(
        transport: &'a HttpClient,
        descriptor: &'static ResourceDescriptor,
    ) -> Self {
        Self {
            transport,
            descriptor,
        }
    }

    /// Returns the descriptor for this record type.
    #[must_use]
    pub const fn descriptor(&self) -> &'static ResourceDescriptor {
        self.descriptor
    }

    /// Returns the SuiteTalk wire name of this record type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Creates a record.
    ///
    /// Issues `POST record/v1/{resource}` with the record as the body.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use netsuite_suitetalk::CreateOptions;
    /// use serde_json::json;
    ///
    /// let result = client
    ///     .customer()
    ///     .create(
    ///         json!({"companyName": "Acme Rentals", "subsidiary": {"id": "1"}}),
    ///         CreateOptions::default(),
    ///     )
    ///     .await;
    /// ```
    pub async fn create(&self, record: Value, options: CreateOptions) -> OperationResult {
        let mut params = Map::new();
        params.insert("replace".to_string(), optional_string(options.replace));

        self.execute(
            HttpMethod::Post,
            self.descriptor.base_path.to_string(),
            Some(record),
            ContentType::SingularResource,
            &params,
            &options.request,
        )
        .await
    }

    /// Retrieves a record by internal id.
    ///
    /// Issues `GET record/v1/{resource}/{id}`. The id is interpolated
    /// into the path verbatim.
    pub async fn get(&self, id: impl fmt::Display, options: GetOptions) -> OperationResult {
        let mut params = Map::new();
        params.insert(
            "expandSubResources".to_string(),
            Value::Bool(options.expand_sub_resources),
        );
        params.insert(
            "simpleEnumFormat".to_string(),
            Value::Bool(options.simple_enum_format),
        );
        params.insert("fields".to_string(), optional_string(options.fields));

        self.execute(
            HttpMethod::Get,
            self.descriptor.record_path(id),
            None,
            ContentType::Json,
            &params,
            &options.request,
        )
        .await
    }

    /// Lists records, optionally filtered by a search expression.
    ///
    /// Issues `GET record/v1/{resource}` with paging parameters. Without
    /// a search expression the query carries only `limit` and `offset`.
    pub async fn list(&self, options: ListOptions) -> OperationResult {
        let mut params = Map::new();
        params.insert("q".to_string(), optional_string(options.q));
        params.insert("limit".to_string(), Value::from(options.limit));
        params.insert("offset".to_string(), Value::from(options.offset));

        self.execute(
            HttpMethod::Get,
            self.descriptor.base_path.to_string(),
            None,
            ContentType::Json,
            &params,
            &options.request,
        )
        .await
    }

    /// Partially updates a record by internal id.
    ///
    /// Issues `PATCH record/v1/{resource}/{id}`; only the fields present
    /// in `record` change, subject to the `replace` options.
    pub async fn update(
        &self,
        id: impl fmt::Display,
        record: Value,
        options: UpdateOptions,
    ) -> OperationResult {
        let params = update_params(options.replace, options.replace_selected_fields);

        self.execute(
            HttpMethod::Patch,
            self.descriptor.record_path(id),
            Some(record),
            ContentType::SingularResource,
            &params,
            &options.request,
        )
        .await
    }

    /// Updates or creates a record addressed by external id.
    ///
    /// Issues `PUT record/v1/{resource}/{external_id}`. The id names the
    /// caller's own identifier, not the NetSuite internal id.
    pub async fn upsert(
        &self,
        external_id: impl fmt::Display,
        record: Value,
        options: UpdateOptions,
    ) -> OperationResult {
        let params = update_params(options.replace, options.replace_selected_fields);

        self.execute(
            HttpMethod::Put,
            self.descriptor.record_path(external_id),
            Some(record),
            ContentType::SingularResource,
            &params,
            &options.request,
        )
        .await
    }

    /// Removes a record by internal id.
    ///
    /// Issues `DELETE record/v1/{resource}/{id}` with no query
    /// parameters.
    pub async fn delete(&self, id: impl fmt::Display, options: RequestOptions) -> OperationResult {
        self.execute(
            HttpMethod::Delete,
            self.descriptor.record_path(id),
            None,
            ContentType::Json,
            &Map::new(),
            &options,
        )
        .await
    }

    /// Transforms a record into a related record type.
    ///
    /// Issues `POST record/v1/{resource}/{id}/!transform/{target}` with
    /// the target record body. The target must be one SuiteTalk accepts
    /// for this record type; an unsupported pairing fails before any
    /// network traffic.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnsupportedTransform`] if this record
    /// type cannot be transformed into `target`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use netsuite_suitetalk::{CreateOptions, TransformTarget};
    /// use serde_json::json;
    ///
    /// let result = client
    ///     .sales_order()
    ///     .transform(12, TransformTarget::Invoice, json!({}), CreateOptions::default())
    ///     .await?;
    /// ```
    pub async fn transform(
        &self,
        id: impl fmt::Display,
        target: TransformTarget,
        record: Value,
        options: CreateOptions,
    ) -> Result<OperationResult, ResourceError> {
        if !self.descriptor.supports_transform(target) {
            return Err(ResourceError::UnsupportedTransform {
                resource: self.descriptor.name,
                target,
            });
        }

        let mut params = Map::new();
        params.insert("replace".to_string(), optional_string(options.replace));

        Ok(self
            .execute(
                HttpMethod::Post,
                self.descriptor.transform_path(id, target),
                Some(record),
                ContentType::SingularResource,
                &params,
                &options.request,
            )
            .await)
    }

    /// Runs one operation through the shared pipeline.
    async fn execute(
        &self,
        method: HttpMethod,
        path: String,
        body: Option<Value>,
        content_type: ContentType,
        params: &Map<String, Value>,
        options: &RequestOptions,
    ) -> OperationResult {
        let mut builder = HttpRequest::builder(method, path)
            .content_type(content_type)
            .query(sanitize_query_params(params))
            .headers(operation_headers(options));
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let request = match builder.build() {
            Ok(request) => request,
            Err(error) => return OperationResult::from_transport_error(&HttpError::from(error)),
        };

        match self.transport.request(&request).await {
            Ok(response) => OperationResult::from_response(response),
            Err(error) => {
                tracing::warn!("{} {} failed: {error}", request.http_method, request.path);
                OperationResult::from_transport_error(&error)
            }
        }
    }
}

/// Builds the per-operation header map from the shared options.
fn operation_headers(options: &RequestOptions) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    if options.respond_async {
        headers.insert(PREFER_HEADER.to_string(), RESPOND_ASYNC.to_string());
    }
    if let Some(key) = &options.idempotency_key {
        headers.insert(IDEMPOTENCY_KEY_HEADER.to_string(), key.as_ref().to_string());
    }
    for (name, value) in &options.extra_headers {
        headers.insert(name.clone(), value.clone());
    }
    headers
}

fn update_params(replace: Option<String>, replace_selected_fields: bool) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("replace".to_string(), optional_string(replace));
    params.insert(
        "replaceSelectedFields".to_string(),
        Value::Bool(replace_selected_fields),
    );
    params
}

fn optional_string(value: Option<String>) -> Value {
    value.map_or(Value::Null, Value::String)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options_defaults() {
        let options = ListOptions::default();
        assert_eq!(options.q, None);
        assert_eq!(options.limit, 1000);
        assert_eq!(options.offset, 0);
        assert!(!options.request.respond_async);
    }

    #[test]
    fn test_operation_headers_empty_by_default() {
        let headers = operation_headers(&RequestOptions::default());
        assert!(headers.is_empty());
    }

    #[test]
    fn test_operation_headers_prefer_and_idempotency() {
        let options = RequestOptions {
            respond_async: true,
            idempotency_key: Some(IdempotencyKey::new("3f2a76a1-57e4-4712-9100-5d4d1a94fb82")),
            extra_headers: HashMap::new(),
        };

        let headers = operation_headers(&options);
        assert_eq!(headers.get("Prefer"), Some(&"respond-async".to_string()));
        assert_eq!(
            headers.get("X-NetSuite-Idempotency-Key"),
            Some(&"3f2a76a1-57e4-4712-9100-5d4d1a94fb82".to_string())
        );
    }

    #[test]
    fn test_extra_headers_win_over_operation_headers() {
        let mut extra = HashMap::new();
        extra.insert("Prefer".to_string(), "transient".to_string());
        let options = RequestOptions {
            respond_async: true,
            idempotency_key: None,
            extra_headers: extra,
        };

        let headers = operation_headers(&options);
        assert_eq!(headers.get("Prefer"), Some(&"transient".to_string()));
    }

    #[test]
    fn test_update_params_carry_both_keys() {
        let params = update_params(Some("addressBook".to_string()), true);
        assert_eq!(params["replace"], Value::String("addressBook".to_string()));
        assert_eq!(params["replaceSelectedFields"], Value::Bool(true));

        let params = update_params(None, false);
        assert_eq!(params["replace"], Value::Null);
        assert_eq!(params["replaceSelectedFields"], Value::Bool(false));
    }

    #[test]
    fn test_idempotency_key_display() {
        let key = IdempotencyKey::new("abc-123");
        assert_eq!(key.to_string(), "abc-123");
        assert_eq!(key.as_ref(), "abc-123");
    }
}
