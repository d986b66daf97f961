//! Catalog retrieval.
//!
//! One request, one decode, one snapshot. There is no retry, caching or
//! pagination: a failed fetch is reported once and the caller decides what an
//! empty catalog looks like.

use std::sync::Arc;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::product::Product;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetrievalError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("parse error: {0}")]
    Parse(String),
}

/// Anything that can produce a catalog snapshot.
#[allow(async_fn_in_trait)]
pub trait ProductSource {
    async fn fetch_products(&self) -> Result<Catalog, RetrievalError>;
}

impl<S> ProductSource for Arc<S>
where
    S: ProductSource,
{
    async fn fetch_products(&self) -> Result<Catalog, RetrievalError> {
        (**self).fetch_products().await
    }
}

/// Fetches the catalog from the product-listing endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalogFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCatalogFetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ProductSource for HttpCatalogFetcher {
    async fn fetch_products(&self) -> Result<Catalog, RetrievalError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching product catalog");

        let resp = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| RetrievalError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| RetrievalError::Transport(e.to_string()))?;
        let products: Vec<Product> =
            serde_json::from_str(&body).map_err(|e| RetrievalError::Parse(e.to_string()))?;
        let catalog = Catalog::new(products);

        tracing::info!(endpoint = %self.endpoint, count = catalog.len(), "product catalog fetched");
        Ok(catalog)
    }
}

/// In-memory source for development and tests.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    outcome: Result<Vec<Product>, RetrievalError>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            outcome: Ok(products),
        }
    }

    /// A source whose every fetch fails with `error`.
    pub fn failing(error: RetrievalError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

impl ProductSource for StaticCatalog {
    async fn fetch_products(&self) -> Result<Catalog, RetrievalError> {
        match &self.outcome {
            Ok(products) => Ok(Catalog::new(products.clone())),
            Err(e) => Err(e.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Price, ProductId};

    #[tokio::test]
    async fn static_catalog_returns_its_products() {
        let source = StaticCatalog::new(vec![
            Product::new(1, "a", Price::ZERO),
            Product::new(2, "b", Price::ZERO),
        ]);
        let catalog = source.fetch_products().await.unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn static_catalog_drops_repeated_ids() {
        let source = StaticCatalog::new(vec![
            Product::new(1, "a", Price::ZERO),
            Product::new(2, "b", Price::ZERO),
            Product::new(2, "c", Price::ZERO),
        ]);
        let catalog = source.fetch_products().await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&ProductId::from(2)).map(|p| p.title()), Some("b"));
    }

    #[tokio::test]
    async fn failing_source_fails_every_time() {
        let source = Arc::new(StaticCatalog::failing(RetrievalError::Transport("down".into())));
        assert!(source.fetch_products().await.is_err());
        assert!(source.fetch_products().await.is_err());
    }
}
