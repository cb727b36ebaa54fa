//! The account-level SuiteTalk client.
//!
//! [`SuiteTalkClient`] owns the signed transport and hands out
//! [`RecordResource`] values for each addressable record type, plus the
//! SuiteQL query endpoint.

use serde_json::json;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::SuiteTalkConfig;
use crate::resources::{
    find_descriptor, OperationResult, RecordResource, ResourceError, ResourceKind,
};

/// Path of the SuiteQL endpoint under the REST base URI.
const SUITEQL_PATH: &str = "query/v1/suiteql";

/// Client for one NetSuite account.
///
/// Construct it once from a [`SuiteTalkConfig`] and share it; record
/// resources borrow its transport and cost nothing to create.
///
/// # Thread Safety
///
/// `SuiteTalkClient` is `Clone + Send + Sync`, making it safe to share
/// across async tasks. Clones reuse the underlying connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use netsuite_suitetalk::{GetOptions, SuiteTalkClient, SuiteTalkConfig};
///
/// let client = SuiteTalkClient::new(&SuiteTalkConfig::from_env()?);
///
/// // Typed accessor
/// let customer = client.customer().get(42, GetOptions::default()).await;
///
/// // Resolution by wire name
/// let invoice = client.resource("invoice")?.get(7, GetOptions::default()).await;
/// ```
#[derive(Clone, Debug)]
pub struct SuiteTalkClient {
    transport: HttpClient,
}

// Verify SuiteTalkClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SuiteTalkClient>();
};

impl SuiteTalkClient {
    /// Creates a client for the account described by `config`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &SuiteTalkConfig) -> Self {
        Self {
            transport: HttpClient::new(config),
        }
    }

    /// Returns the resource for a record type.
    #[must_use]
    pub fn record(&self, kind: ResourceKind) -> RecordResource<'_> {
        RecordResource::new(&self.transport, kind.descriptor())
    }

    /// Resolves a resource by its SuiteTalk wire name.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownResource`] if `name` is not an
    /// addressable record type.
    pub fn resource(&self, name: &str) -> Result<RecordResource<'_>, ResourceError> {
        find_descriptor(name)
            .map(|descriptor| RecordResource::new(&self.transport, descriptor))
            .ok_or_else(|| ResourceError::UnknownResource {
                name: name.to_string(),
            })
    }

    /// Runs a SuiteQL statement.
    ///
    /// Issues `POST query/v1/suiteql` with the statement as the `q` body
    /// field and the `Prefer: transient` header the endpoint requires.
    /// `params` are appended to the query string percent-encoded; the
    /// endpoint understands `limit` and `offset` for paging.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let result = client
    ///     .suiteql(
    ///         "SELECT id, companyName FROM customer WHERE isInactive = 'F'",
    ///         vec![("limit".to_string(), "10".to_string())],
    ///     )
    ///     .await;
    /// ```
    pub async fn suiteql(
        &self,
        statement: &str,
        params: Vec<(String, String)>,
    ) -> OperationResult {
        let query = params
            .iter()
            .map(|(key, value)| {
                (
                    urlencoding::encode(key).into_owned(),
                    urlencoding::encode(value).into_owned(),
                )
            })
            .collect();

        let request = match HttpRequest::builder(HttpMethod::Post, SUITEQL_PATH)
            .body(json!({ "q": statement }))
            .query(query)
            .header("Prefer", "transient")
            .build()
        {
            Ok(request) => request,
            Err(error) => return OperationResult::from_transport_error(&HttpError::from(error)),
        };

        match self.transport.request(&request).await {
            Ok(response) => OperationResult::from_response(response),
            Err(error) => OperationResult::from_transport_error(&error),
        }
    }

    /// Returns the customer resource.
    #[must_use]
    pub fn customer(&self) -> RecordResource<'_> {
        self.record(ResourceKind::Customer)
    }

    /// Returns the employee resource.
    #[must_use]
    pub fn employee(&self) -> RecordResource<'_> {
        self.record(ResourceKind::Employee)
    }

    /// Returns the expense category resource.
    #[must_use]
    pub fn expense_category(&self) -> RecordResource<'_> {
        self.record(ResourceKind::ExpenseCategory)
    }

    /// Returns the expense report resource.
    #[must_use]
    pub fn expense_report(&self) -> RecordResource<'_> {
        self.record(ResourceKind::ExpenseReport)
    }

    /// Returns the inventory adjustment resource.
    #[must_use]
    pub fn inventory_adjustment(&self) -> RecordResource<'_> {
        self.record(ResourceKind::InventoryAdjustment)
    }

    /// Returns the inventory item resource.
    #[must_use]
    pub fn inventory_item(&self) -> RecordResource<'_> {
        self.record(ResourceKind::InventoryItem)
    }

    /// Returns the invoice resource.
    #[must_use]
    pub fn invoice(&self) -> RecordResource<'_> {
        self.record(ResourceKind::Invoice)
    }

    /// Returns the non-inventory purchase item resource.
    #[must_use]
    pub fn non_inventory_purchase_item(&self) -> RecordResource<'_> {
        self.record(ResourceKind::NonInventoryPurchaseItem)
    }

    /// Returns the non-inventory resale item resource.
    #[must_use]
    pub fn non_inventory_resale_item(&self) -> RecordResource<'_> {
        self.record(ResourceKind::NonInventoryResaleItem)
    }

    /// Returns the non-inventory sale item resource.
    #[must_use]
    pub fn non_inventory_sale_item(&self) -> RecordResource<'_> {
        self.record(ResourceKind::NonInventorySaleItem)
    }

    /// Returns the opportunity resource.
    #[must_use]
    pub fn opportunity(&self) -> RecordResource<'_> {
        self.record(ResourceKind::Opportunity)
    }

    /// Returns the sales order resource.
    #[must_use]
    pub fn sales_order(&self) -> RecordResource<'_> {
        self.record(ResourceKind::SalesOrder)
    }

    /// Returns the service purchase item resource.
    #[must_use]
    pub fn service_purchase_item(&self) -> RecordResource<'_> {
        self.record(ResourceKind::ServicePurchaseItem)
    }

    /// Returns the service resale item resource.
    #[must_use]
    pub fn service_resale_item(&self) -> RecordResource<'_> {
        self.record(ResourceKind::ServiceResaleItem)
    }

    /// Returns the service sale item resource.
    #[must_use]
    pub fn service_sale_item(&self) -> RecordResource<'_> {
        self.record(ResourceKind::ServiceSaleItem)
    }

    /// Returns the vendor bill resource.
    #[must_use]
    pub fn vendor_bill(&self) -> RecordResource<'_> {
        self.record(ResourceKind::VendorBill)
    }
}
