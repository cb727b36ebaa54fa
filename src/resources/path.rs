//! Record type descriptors and path building.
//!
//! Every record type the client can address is described by a
//! [`ResourceDescriptor`] in a static table: its wire name, its base path
//! under `record/v1`, and the transform targets SuiteTalk accepts for it.
//! The table is fixed at compile time; there is no runtime registration.
//!
//! # Example
//!
//! ```rust
//! use netsuite_suitetalk::resources::{ResourceKind, TransformTarget};
//!
//! let descriptor = ResourceKind::Customer.descriptor();
//! assert_eq!(descriptor.record_path(7), "record/v1/customer/7");
//! assert_eq!(
//!     descriptor.transform_path(7, TransformTarget::SalesOrder),
//!     "record/v1/customer/7/!transform/salesOrder"
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// The record types addressable through this client.
///
/// Variant order matches [`DESCRIPTORS`]; the serialized form is the
/// SuiteTalk wire name (e.g. `salesOrder`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    /// A customer record.
    Customer,
    /// An employee record.
    Employee,
    /// An expense category record.
    ExpenseCategory,
    /// An expense report record.
    ExpenseReport,
    /// An inventory adjustment record.
    InventoryAdjustment,
    /// An inventory item record.
    InventoryItem,
    /// An invoice record.
    Invoice,
    /// A non-inventory purchase item record.
    NonInventoryPurchaseItem,
    /// A non-inventory resale item record.
    NonInventoryResaleItem,
    /// A non-inventory sale item record.
    NonInventorySaleItem,
    /// An opportunity record.
    Opportunity,
    /// A sales order record.
    SalesOrder,
    /// A service purchase item record.
    ServicePurchaseItem,
    /// A service resale item record.
    ServiceResaleItem,
    /// A service sale item record.
    ServiceSaleItem,
    /// A vendor bill record.
    VendorBill,
}

impl ResourceKind {
    /// Every addressable record type, in descriptor order.
    pub const ALL: [Self; 16] = [
        Self::Customer,
        Self::Employee,
        Self::ExpenseCategory,
        Self::ExpenseReport,
        Self::InventoryAdjustment,
        Self::InventoryItem,
        Self::Invoice,
        Self::NonInventoryPurchaseItem,
        Self::NonInventoryResaleItem,
        Self::NonInventorySaleItem,
        Self::Opportunity,
        Self::SalesOrder,
        Self::ServicePurchaseItem,
        Self::ServiceResaleItem,
        Self::ServiceSaleItem,
        Self::VendorBill,
    ];

    /// Returns the SuiteTalk wire name for this record type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Employee => "employee",
            Self::ExpenseCategory => "expenseCategory",
            Self::ExpenseReport => "expenseReport",
            Self::InventoryAdjustment => "inventoryAdjustment",
            Self::InventoryItem => "inventoryItem",
            Self::Invoice => "invoice",
            Self::NonInventoryPurchaseItem => "nonInventoryPurchaseItem",
            Self::NonInventoryResaleItem => "nonInventoryResaleItem",
            Self::NonInventorySaleItem => "nonInventorySaleItem",
            Self::Opportunity => "opportunity",
            Self::SalesOrder => "salesOrder",
            Self::ServicePurchaseItem => "servicePurchaseItem",
            Self::ServiceResaleItem => "serviceResaleItem",
            Self::ServiceSaleItem => "serviceSaleItem",
            Self::VendorBill => "vendorBill",
        }
    }

    /// Resolves a SuiteTalk wire name to a record type.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Returns the descriptor for this record type.
    #[must_use]
    pub fn descriptor(self) -> &'static ResourceDescriptor {
        &DESCRIPTORS[self as usize]
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Record types a source record can be transformed into.
///
/// SuiteTalk exposes transformation through the `!transform` path
/// segment; each source record type accepts a fixed set of targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformTarget {
    /// Transform into a cash sale.
    CashSale,
    /// Transform into a customer payment.
    CustomerPayment,
    /// Transform into an estimate.
    Estimate,
    /// Transform into a fulfillment request.
    FulfillmentRequest,
    /// Transform into an invoice.
    Invoice,
    /// Transform into an item fulfillment.
    ItemFulfillment,
    /// Transform into an opportunity.
    Opportunity,
    /// Transform into a return authorization.
    ReturnAuthorization,
    /// Transform into a sales order.
    SalesOrder,
    /// Transform into a vendor.
    Vendor,
}

impl TransformTarget {
    /// Returns the SuiteTalk wire name for this target.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CashSale => "cashSale",
            Self::CustomerPayment => "customerPayment",
            Self::Estimate => "estimate",
            Self::FulfillmentRequest => "fulfillmentRequest",
            Self::Invoice => "invoice",
            Self::ItemFulfillment => "itemFulfillment",
            Self::Opportunity => "opportunity",
            Self::ReturnAuthorization => "returnAuthorization",
            Self::SalesOrder => "salesOrder",
            Self::Vendor => "vendor",
        }
    }
}

impl fmt::Display for TransformTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Describes one record type: its wire name, base path and transform set.
///
/// Descriptors are defined as `const` data in [`DESCRIPTORS`] and handed
/// out as `&'static` references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// The record type this descriptor describes.
    pub kind: ResourceKind,
    /// The SuiteTalk wire name (e.g. `salesOrder`).
    pub name: &'static str,
    /// The collection path under the REST base URI (e.g. `record/v1/salesOrder`).
    pub base_path: &'static str,
    /// Transform targets SuiteTalk accepts for this record type.
    pub transforms: &'static [TransformTarget],
}

impl ResourceDescriptor {
    /// Creates a new descriptor.
    ///
    /// This is a `const fn` to allow descriptors to be defined as constants.
    #[must_use]
    pub const fn new(
        kind: ResourceKind,
        name: &'static str,
        base_path: &'static str,
        transforms: &'static [TransformTarget],
    ) -> Self {
        Self {
            kind,
            name,
            base_path,
            transforms,
        }
    }

    /// Returns the path of a single record.
    ///
    /// The id is interpolated verbatim; callers pass NetSuite internal or
    /// external ids, which are plain integers or simple tokens.
    #[must_use]
    pub fn record_path(&self, id: impl fmt::Display) -> String {
        format!("{}/{id}", self.base_path)
    }

    /// Returns the transformation path of a single record.
    #[must_use]
    pub fn transform_path(&self, id: impl fmt::Display, target: TransformTarget) -> String {
        format!("{}/{id}/!transform/{}", self.base_path, target.name())
    }

    /// Returns `true` if SuiteTalk accepts transforming this record type
    /// into `target`.
    #[must_use]
    pub fn supports_transform(&self, target: TransformTarget) -> bool {
        self.transforms.contains(&target)
    }
}

const CUSTOMER_TRANSFORMS: &[TransformTarget] = &[
    TransformTarget::CashSale,
    TransformTarget::CustomerPayment,
    TransformTarget::Estimate,
    TransformTarget::Invoice,
    TransformTarget::Opportunity,
    TransformTarget::SalesOrder,
    TransformTarget::Vendor,
];

const SALES_ORDER_TRANSFORMS: &[TransformTarget] = &[
    TransformTarget::CashSale,
    TransformTarget::FulfillmentRequest,
    TransformTarget::Invoice,
    TransformTarget::ItemFulfillment,
    TransformTarget::ReturnAuthorization,
];

const NO_TRANSFORMS: &[TransformTarget] = &[];

/// The full descriptor table, in [`ResourceKind`] order.
pub static DESCRIPTORS: [ResourceDescriptor; 16] = [
    ResourceDescriptor::new(
        ResourceKind::Customer,
        "customer",
        "record/v1/customer",
        CUSTOMER_TRANSFORMS,
    ),
    ResourceDescriptor::new(
        ResourceKind::Employee,
        "employee",
        "record/v1/employee",
        NO_TRANSFORMS,
    ),
    ResourceDescriptor::new(
        ResourceKind::ExpenseCategory,
        "expenseCategory",
        "record/v1/expenseCategory",
        NO_TRANSFORMS,
    ),
    ResourceDescriptor::new(
        ResourceKind::ExpenseReport,
        "expenseReport",
        "record/v1/expenseReport",
        NO_TRANSFORMS,
    ),
    ResourceDescriptor::new(
        ResourceKind::InventoryAdjustment,
        "inventoryAdjustment",
        "record/v1/inventoryAdjustment",
        NO_TRANSFORMS,
    ),
    ResourceDescriptor::new(
        ResourceKind::InventoryItem,
        "inventoryItem",
        "record/v1/inventoryItem",
        NO_TRANSFORMS,
    ),
    ResourceDescriptor::new(
        ResourceKind::Invoice,
        "invoice",
        "record/v1/invoice",
        NO_TRANSFORMS,
    ),
    ResourceDescriptor::new(
        ResourceKind::NonInventoryPurchaseItem,
        "nonInventoryPurchaseItem",
        "record/v1/nonInventoryPurchaseItem",
        NO_TRANSFORMS,
    ),
    ResourceDescriptor::new(
        ResourceKind::NonInventoryResaleItem,
        "nonInventoryResaleItem",
        "record/v1/nonInventoryResaleItem",
        NO_TRANSFORMS,
    ),
    ResourceDescriptor::new(
        ResourceKind::NonInventorySaleItem,
        "nonInventorySaleItem",
        "record/v1/nonInventorySaleItem",
        NO_TRANSFORMS,
    ),
    ResourceDescriptor::new(
        ResourceKind::Opportunity,
        "opportunity",
        "record/v1/opportunity",
        NO_TRANSFORMS,
    ),
    ResourceDescriptor::new(
        ResourceKind::SalesOrder,
        "salesOrder",
        "record/v1/salesOrder",
        SALES_ORDER_TRANSFORMS,
    ),
    ResourceDescriptor::new(
        ResourceKind::ServicePurchaseItem,
        "servicePurchaseItem",
        "record/v1/servicePurchaseItem",
        NO_TRANSFORMS,
    ),
    ResourceDescriptor::new(
        ResourceKind::ServiceResaleItem,
        "serviceResaleItem",
        "record/v1/serviceResaleItem",
        NO_TRANSFORMS,
    ),
    ResourceDescriptor::new(
        ResourceKind::ServiceSaleItem,
        "serviceSaleItem",
        "record/v1/serviceSaleItem",
        NO_TRANSFORMS,
    ),
    ResourceDescriptor::new(
        ResourceKind::VendorBill,
        "vendorBill",
        "record/v1/vendorBill",
        NO_TRANSFORMS,
    ),
];

/// Resolves a SuiteTalk wire name to its descriptor.
#[must_use]
pub fn find_descriptor(name: &str) -> Option<&'static ResourceDescriptor> {
    ResourceKind::from_name(name).map(ResourceKind::descriptor)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceKind>();
    assert_send_sync::<TransformTarget>();
    assert_send_sync::<ResourceDescriptor>();
};
