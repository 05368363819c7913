//! Dashboard paths the palette can navigate to.

use url::form_urlencoded::byte_serialize;

pub const HOME_PATH: &str = "/";
pub const CATEGORIES_PATH: &str = "/categories/";
pub const COLLECTIONS_PATH: &str = "/collections/";
pub const CONFIGURATION_PATH: &str = "/configuration/";
pub const CUSTOMERS_PATH: &str = "/customers/";
pub const DRAFT_ORDERS_PATH: &str = "/orders/drafts/";
pub const ORDERS_PATH: &str = "/orders/";
pub const PRODUCTS_PATH: &str = "/products/";
pub const PRODUCT_TYPES_PATH: &str = "/product-types/";
pub const SALES_PATH: &str = "/discounts/sales/";
pub const SHIPPING_PATH: &str = "/shipping/";
pub const SITE_SETTINGS_PATH: &str = "/site-settings/";
pub const STAFF_PATH: &str = "/staff/";
pub const VOUCHERS_PATH: &str = "/discounts/vouchers/";
pub const WAREHOUSES_PATH: &str = "/warehouses/";

pub const CATEGORY_ADD_PATH: &str = "/categories/add";
pub const COLLECTION_ADD_PATH: &str = "/collections/add";
pub const CUSTOMER_ADD_PATH: &str = "/customers/add";
pub const PRODUCT_ADD_PATH: &str = "/products/add";
pub const SALE_ADD_PATH: &str = "/discounts/sales/add";
pub const VOUCHER_ADD_PATH: &str = "/discounts/vouchers/add";

/// Encode a path segment the way `encodeURIComponent` would for ids.
///
/// `form_urlencoded` turns spaces into `+`; ids never contain spaces but the
/// result is normalised to `%20` anyway so it stays a valid path segment.
fn encode_segment(segment: &str) -> String {
    byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Page of a single order, keyed by its global id
pub fn order_url(order_id: &str) -> String {
    format!("{}{}", ORDERS_PATH, encode_segment(order_id))
}

/// Join a dashboard path onto the configured base URL
pub fn absolute_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
