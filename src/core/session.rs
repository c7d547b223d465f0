use crate::adapters::http::HttpCatalog;
use crate::adapters::storage::LocalStorage;
use crate::core::cart::{storage_key, CartManager};
use crate::core::{ConfigProvider, Notifier, Result};

pub type HttpCartManager<N> = CartManager<HttpCatalog, LocalStorage, N>;

/// One client session: the HTTP catalog, the storage file and the cart
/// loaded from it. Hand `cart_mut()` to whatever needs to change the cart.
pub struct CartSession<N: Notifier> {
    manager: HttpCartManager<N>,
}

impl<N: Notifier> CartSession<N> {
    pub fn open<C: ConfigProvider>(config: &C, notifier: N) -> Result<Self> {
        let catalog = HttpCatalog::from_config(config)?;
        let store = LocalStorage::new(config.storage_path());
        let key = storage_key(config.namespace());

        tracing::debug!(
            "Opening cart session: api={}, storage={}, key={}",
            catalog.base_url(),
            store.path().display(),
            key
        );

        let manager =
            CartManager::load(catalog, store, notifier, key)?.with_messages(config.messages());

        tracing::info!("🛒 Cart session opened with {} entries", manager.cart().len());
        Ok(Self { manager })
    }

    pub fn cart(&self) -> &HttpCartManager<N> {
        &self.manager
    }

    pub fn cart_mut(&mut self) -> &mut HttpCartManager<N> {
        &mut self.manager
    }

    pub fn into_cart(self) -> HttpCartManager<N> {
        self.manager
    }
}
