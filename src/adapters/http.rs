use crate::domain::model::{Product, ProductId, Stock};
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::{CartError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Catalog and stock lookups over HTTP.
///
/// Products live at `{base}/products/{id}` and stock records at
/// `{base}/stock/{id}`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
}

impl HttpCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join 會取代最後一段路徑，所以補上結尾斜線
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_base_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, resource: &str, id: ProductId) -> Result<Url> {
        Ok(self.base_url.join(&format!("{}/{}", resource, id))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(CartError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalog {
    async fn product(&self, id: ProductId) -> Result<Product> {
        let url = self.endpoint("products", id)?;
        self.get_json(url).await
    }

    async fn stock(&self, id: ProductId) -> Result<Stock> {
        let url = self.endpoint("stock", id)?;
        self.get_json(url).await
    }
}
