pub mod cart;
pub mod session;

pub use crate::domain::messages::Messages;
pub use crate::domain::model::{
    AmountUpdate, CartEntry, CartOutcome, CartSummary, Product, ProductId, Stock,
};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, KeyValueStore, Notifier};
pub use crate::utils::error::Result;
