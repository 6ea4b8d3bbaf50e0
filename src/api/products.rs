//! Products service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{ListQuery, ListResponse, Record};
use crate::Result;

/// Service for products.
pub struct ProductsService {
    inner: Arc<ClientInner>,
}

impl ProductsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List products.
    pub async fn list(&self, query: Option<ListQuery>) -> Result<ListResponse> {
        let query = query.unwrap_or_default();
        self.inner.get_with_query("product", &query.to_pairs()).await
    }

    /// Get a specific product by ID.
    pub async fn get(&self, id: u64) -> Result<Record> {
        self.inner.get(&format!("product/{}", id)).await
    }
}
