//! Static registry of dashboard sections offered as navigation actions

use crate::intl::{MessageCatalog, MessageId};
use crate::navigator::actions::{ActionCommand, QuickSearchAction, QuickSearchActionType};
use crate::navigator::score::filter_actions;
use crate::routes;

pub const VIEWS: &[(MessageId, &str)] = &[
    (MessageId::ViewCategories, routes::CATEGORIES_PATH),
    (MessageId::ViewCollections, routes::COLLECTIONS_PATH),
    (MessageId::ViewConfiguration, routes::CONFIGURATION_PATH),
    (MessageId::ViewCustomers, routes::CUSTOMERS_PATH),
    (MessageId::ViewDraftOrders, routes::DRAFT_ORDERS_PATH),
    (MessageId::ViewHome, routes::HOME_PATH),
    (MessageId::ViewOrders, routes::ORDERS_PATH),
    (MessageId::ViewProducts, routes::PRODUCTS_PATH),
    (MessageId::ViewProductTypes, routes::PRODUCT_TYPES_PATH),
    (MessageId::ViewSales, routes::SALES_PATH),
    (MessageId::ViewShippingMethods, routes::SHIPPING_PATH),
    (MessageId::ViewSiteSettings, routes::SITE_SETTINGS_PATH),
    (MessageId::ViewStaff, routes::STAFF_PATH),
    (MessageId::ViewVouchers, routes::VOUCHERS_PATH),
    (MessageId::ViewWarehouses, routes::WAREHOUSES_PATH),
];

/// Views whose label matches `query`, unsorted
pub fn get_views(query: &str, messages: &MessageCatalog) -> Vec<QuickSearchAction> {
    let views = VIEWS
        .iter()
        .map(|(label, path)| {
            QuickSearchAction::new(
                messages.message(*label),
                QuickSearchActionType::View,
                ActionCommand::Navigate((*path).to_string()),
            )
        })
        .collect();

    filter_actions(views, query)
}
