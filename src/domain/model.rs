use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type ProductId = u64;

/// Product record returned by `GET /products/{id}`.
///
/// Everything except `id` is kept as an opaque payload and copied verbatim
/// into the cart entry. The echoed `id` may be missing or any JSON type; the
/// cart keys entries by the requested id instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Stock record returned by `GET /stock/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub amount: u32,
}

/// One line of the cart. Serialized as `{ "id": .., ...details, "amount": .. }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: ProductId,
    #[serde(flatten)]
    pub details: Map<String, Value>,
    pub amount: u32,
}

impl CartEntry {
    pub fn new(id: ProductId, mut details: Map<String, Value>, amount: u32) -> Self {
        // 購物車數量只能有一個來源
        details.remove("amount");
        details.remove("id");
        Self {
            id,
            details,
            amount,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.details
            .get("title")
            .or_else(|| self.details.get("name"))
            .and_then(Value::as_str)
    }

    pub fn price(&self) -> Option<f64> {
        self.details.get("price").and_then(Value::as_f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountUpdate {
    pub product_id: ProductId,
    pub amount: i64,
}

/// Result of a cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    /// The cart changed and the new snapshot was persisted.
    Applied,
    OutOfStock { requested: u64, available: u32 },
    NotFound,
    /// Amount below 1; nothing happened and nobody was notified.
    Ignored,
    /// The catalog or stock lookup failed.
    TransientFailure,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartSummary {
    pub lines: usize,
    pub items: u64,
    pub subtotal: f64,
}

impl CartSummary {
    pub fn from_entries(entries: &[CartEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut summary, entry| {
            summary.lines += 1;
            summary.items += u64::from(entry.amount);
            if let Some(price) = entry.price() {
                summary.subtotal += price * f64::from(entry.amount);
            }
            summary
        })
    }
}
