use crate::domain::messages::Messages;
use crate::domain::model::{Product, ProductId, Stock};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Remote product catalog and stock lookups.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn product(&self, id: ProductId) -> Result<Product>;
    async fn stock(&self, id: ProductId) -> Result<Stock>;
}

/// Synchronous string key-value store, shaped like browser `localStorage`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Fire-and-forget sink for user-facing error messages.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn storage_path(&self) -> &str;
    fn namespace(&self) -> &str;
    fn request_timeout(&self) -> Duration;

    fn messages(&self) -> Messages {
        Messages::default()
    }
}
