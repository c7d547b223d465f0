use serde::{Deserialize, Serialize};

pub const OUT_OF_STOCK: &str = "Requested quantity is out of stock";
pub const ADD_FAILED: &str = "Failed to add product";
pub const REMOVE_FAILED: &str = "Failed to remove product";
pub const UPDATE_FAILED: &str = "Failed to update product quantity";

/// User-facing notification texts. Every field can be overridden from the
/// `[messages]` table of the TOML config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub out_of_stock: String,
    pub add_failed: String,
    pub remove_failed: String,
    pub update_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            out_of_stock: OUT_OF_STOCK.to_string(),
            add_failed: ADD_FAILED.to_string(),
            remove_failed: REMOVE_FAILED.to_string(),
            update_failed: UPDATE_FAILED.to_string(),
        }
    }
}
