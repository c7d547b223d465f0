use crate::core::{
    AmountUpdate, CartEntry, CartOutcome, CartSummary, CatalogSource, KeyValueStore, Messages,
    Notifier, ProductId, Result,
};
use crate::utils::error::CartError;

pub const CART_KEY: &str = "cart";

/// Store key for the cart snapshot, e.g. `@cart-sync:cart`.
pub fn storage_key(namespace: &str) -> String {
    format!("{}:{}", namespace, CART_KEY)
}

/// Owns the cart and keeps it consistent with remote stock and the store.
///
/// Every mutation validates against a fresh stock lookup, writes the full
/// snapshot to the store, and only then replaces the in-memory cart. Rule
/// violations and lookup failures notify the user and leave the cart as it
/// was. Only store failures come back as `Err`.
///
/// Mutations take `&mut self`, so calls on one manager never overlap. Share
/// it across tasks behind a `tokio::sync::Mutex`.
pub struct CartManager<C: CatalogSource, S: KeyValueStore, N: Notifier> {
    catalog: C,
    store: S,
    notifier: N,
    messages: Messages,
    storage_key: String,
    cart: Vec<CartEntry>,
}

impl<C: CatalogSource, S: KeyValueStore, N: Notifier> CartManager<C, S, N> {
    /// Restores the cart saved under `storage_key`, or starts empty.
    pub fn load(catalog: C, store: S, notifier: N, storage_key: impl Into<String>) -> Result<Self> {
        let storage_key = storage_key.into();
        let cart = match store.get(&storage_key)? {
            Some(snapshot) => serde_json::from_str(&snapshot)?,
            None => Vec::new(),
        };

        tracing::debug!("Loaded cart '{}' with {} entries", storage_key, cart.len());

        Ok(Self {
            catalog,
            store,
            notifier,
            messages: Messages::default(),
            storage_key,
            cart,
        })
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn cart(&self) -> &[CartEntry] {
        &self.cart
    }

    pub fn entry(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.cart.iter().find(|entry| entry.id == product_id)
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::from_entries(&self.cart)
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub async fn add_product(&mut self, product_id: ProductId) -> Result<CartOutcome> {
        let stock = match self.catalog.stock(product_id).await {
            Ok(stock) => stock,
            Err(e) => return Ok(self.report_failure("add_product", &self.messages.add_failed, &e)),
        };

        let mut updated = self.cart.clone();
        let position = updated.iter().position(|entry| entry.id == product_id);
        let current = position.map_or(0, |index| updated[index].amount);
        let requested = u64::from(current) + 1;

        if requested > u64::from(stock.amount) {
            return Ok(self.report_out_of_stock(product_id, requested, stock.amount));
        }

        match position {
            // requested <= stock.amount，不會溢位
            Some(index) => updated[index].amount = current + 1,
            None => {
                let product = match self.catalog.product(product_id).await {
                    Ok(product) => product,
                    Err(e) => {
                        return Ok(self.report_failure(
                            "add_product",
                            &self.messages.add_failed,
                            &e,
                        ))
                    }
                };
                // id comes from the request so the cart never holds two entries for one product
                updated.push(CartEntry::new(product_id, product.details, 1));
            }
        }

        self.commit(updated)?;
        tracing::info!("🛒 Product {} now at quantity {}", product_id, requested);
        Ok(CartOutcome::Applied)
    }

    pub fn remove_product(&mut self, product_id: ProductId) -> Result<CartOutcome> {
        if self.entry(product_id).is_none() {
            tracing::debug!("Product {} is not in the cart", product_id);
            self.notifier.error(&self.messages.remove_failed);
            return Ok(CartOutcome::NotFound);
        }

        let updated: Vec<CartEntry> = self
            .cart
            .iter()
            .filter(|entry| entry.id != product_id)
            .cloned()
            .collect();

        self.commit(updated)?;
        tracing::info!("🗑️ Product {} removed from cart", product_id);
        Ok(CartOutcome::Applied)
    }

    pub async fn update_product_amount(&mut self, update: AmountUpdate) -> Result<CartOutcome> {
        let AmountUpdate { product_id, amount } = update;

        let stock = match self.catalog.stock(product_id).await {
            Ok(stock) => stock,
            Err(e) => {
                return Ok(self.report_failure(
                    "update_product_amount",
                    &self.messages.update_failed,
                    &e,
                ))
            }
        };

        if amount > i64::from(stock.amount) {
            return Ok(self.report_out_of_stock(product_id, amount.unsigned_abs(), stock.amount));
        }

        // 非正數的數量直接忽略，不通知使用者
        let Ok(amount) = u32::try_from(amount) else {
            return Ok(CartOutcome::Ignored);
        };
        if amount < 1 {
            return Ok(CartOutcome::Ignored);
        }

        let Some(index) = self.cart.iter().position(|entry| entry.id == product_id) else {
            tracing::debug!("Product {} is not in the cart, nothing to update", product_id);
            return Ok(CartOutcome::NotFound);
        };

        let mut updated = self.cart.clone();
        updated[index].amount = amount;

        self.commit(updated)?;
        tracing::info!("🛒 Product {} set to quantity {}", product_id, amount);
        Ok(CartOutcome::Applied)
    }

    /// Empties the cart and persists the empty snapshot.
    pub fn clear(&mut self) -> Result<()> {
        self.commit(Vec::new())?;
        tracing::info!("🧹 Cart cleared");
        Ok(())
    }

    fn commit(&mut self, updated: Vec<CartEntry>) -> Result<()> {
        let snapshot = serde_json::to_string(&updated)?;
        self.store.set(&self.storage_key, &snapshot)?;
        self.cart = updated;
        Ok(())
    }

    fn report_out_of_stock(&self, product_id: ProductId, requested: u64, available: u32) -> CartOutcome {
        tracing::debug!(
            "Product {}: requested {} but only {} in stock",
            product_id,
            requested,
            available
        );
        self.notifier.error(&self.messages.out_of_stock);
        CartOutcome::OutOfStock {
            requested,
            available,
        }
    }

    fn report_failure(&self, operation: &str, message: &str, error: &CartError) -> CartOutcome {
        tracing::warn!(
            "{} failed: {} (Category: {:?}, retryable: {})",
            operation,
            error,
            error.category(),
            error.is_retryable()
        );
        self.notifier.error(message);
        CartOutcome::TransientFailure
    }
}
