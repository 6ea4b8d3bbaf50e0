//! Cost centers service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{ListQuery, ListResponse, Record};
use crate::Result;

/// Service for cost centers.
pub struct CostCentersService {
    inner: Arc<ClientInner>,
}

impl CostCentersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List cost centers.
    pub async fn list(&self, query: Option<ListQuery>) -> Result<ListResponse> {
        let query = query.unwrap_or_default();
        self.inner.get_with_query("costcenter", &query.to_pairs()).await
    }

    /// Get a specific cost center by ID.
    pub async fn get(&self, id: u64) -> Result<Record> {
        self.inner.get(&format!("costcenter/{}", id)).await
    }
}
