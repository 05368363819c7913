//! Label catalog for quick search actions.
//!
//! Every user-visible label is addressed by a [`MessageId`]. The catalog ships
//! English defaults and accepts per-message overrides from configuration.
//! Templates may contain `{name}` placeholders filled in by [`MessageCatalog::format`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageId {
    // Mode hints
    CommandsModeHint,
    OrdersModeHint,
    ModeHintCaption,

    // Views
    ViewCategories,
    ViewCollections,
    ViewConfiguration,
    ViewCustomers,
    ViewDraftOrders,
    ViewHome,
    ViewOrders,
    ViewProducts,
    ViewProductTypes,
    ViewSales,
    ViewShippingMethods,
    ViewSiteSettings,
    ViewStaff,
    ViewVouchers,
    ViewWarehouses,

    // Commands
    CreateCategory,
    CreateCollection,
    CreateCustomer,
    CreateOrder,
    CreateProduct,
    CreateSale,
    CreateVoucher,

    // Orders
    GoToOrder,
    CreateNewOrder,
}

impl MessageId {
    /// Built-in English template
    pub fn default_template(self) -> &'static str {
        match self {
            MessageId::CommandsModeHint => "Run a command",
            MessageId::OrdersModeHint => "Search orders by number",
            MessageId::ModeHintCaption => "Type \"{prefix}\" to start",

            MessageId::ViewCategories => "Categories",
            MessageId::ViewCollections => "Collections",
            MessageId::ViewConfiguration => "Configuration",
            MessageId::ViewCustomers => "Customers",
            MessageId::ViewDraftOrders => "Draft Orders",
            MessageId::ViewHome => "Home",
            MessageId::ViewOrders => "Orders",
            MessageId::ViewProducts => "Products",
            MessageId::ViewProductTypes => "Product Types",
            MessageId::ViewSales => "Sales",
            MessageId::ViewShippingMethods => "Shipping Methods",
            MessageId::ViewSiteSettings => "Site Settings",
            MessageId::ViewStaff => "Staff Members",
            MessageId::ViewVouchers => "Vouchers",
            MessageId::ViewWarehouses => "Warehouses",

            MessageId::CreateCategory => "Create Category",
            MessageId::CreateCollection => "Create Collection",
            MessageId::CreateCustomer => "Create Customer",
            MessageId::CreateOrder => "Create Order",
            MessageId::CreateProduct => "Create Product",
            MessageId::CreateSale => "Create Sale",
            MessageId::CreateVoucher => "Create Voucher",

            MessageId::GoToOrder => "Go to order #{orderNumber}",
            MessageId::CreateNewOrder => "Create new order",
        }
    }
}

/// Resolves message ids to formatted labels
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    overrides: HashMap<MessageId, String>,
}

impl MessageCatalog {
    /// Catalog with only the built-in English templates
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: HashMap<MessageId, String>) -> Self {
        Self { overrides }
    }

    /// Raw template for `id`, preferring configured overrides
    pub fn template(&self, id: MessageId) -> &str {
        self.overrides
            .get(&id)
            .map(String::as_str)
            .unwrap_or_else(|| id.default_template())
    }

    /// Format `id` with `{name}` placeholders replaced from `args`.
    ///
    /// Placeholders without a matching argument are left as-is.
    pub fn format(&self, id: MessageId, args: &[(&str, &str)]) -> String {
        let mut label = self.template(id).to_string();
        for (name, value) in args {
            label = label.replace(&format!("{{{name}}}"), value);
        }
        label
    }

    pub fn message(&self, id: MessageId) -> String {
        self.format(id, &[])
    }
}
