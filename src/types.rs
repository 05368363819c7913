use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashnavError;

pub const DASHNAV_DIR: &str = ".dashnav";

/// Interpretation context of the quick search field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuickSearchMode {
    #[default]
    Default,
    Commands,
    Orders,
}

pub const VALID_MODES: &[&str] = &["default", "commands", "orders"];

impl QuickSearchMode {
    pub fn is_default(&self) -> bool {
        matches!(self, QuickSearchMode::Default)
    }
}

impl fmt::Display for QuickSearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuickSearchMode::Default => write!(f, "default"),
            QuickSearchMode::Commands => write!(f, "commands"),
            QuickSearchMode::Orders => write!(f, "orders"),
        }
    }
}

impl FromStr for QuickSearchMode {
    type Err = DashnavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(QuickSearchMode::Default),
            "commands" => Ok(QuickSearchMode::Commands),
            "orders" => Ok(QuickSearchMode::Orders),
            _ => Err(DashnavError::InvalidMode(s.to_string())),
        }
    }
}

/// An order as far as the palette cares about it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Global GraphQL id (e.g. base64 of `Order:42`)
    pub id: String,
    /// Human-facing order number
    pub number: Option<String>,
    pub status: Option<String>,
}

/// Externally fetched data the action registry reads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickSearchData {
    pub order: Option<OrderSummary>,
}
