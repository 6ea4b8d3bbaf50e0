//! Invoices service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{ListQuery, ListResponse, Record};
use crate::Result;

/// Service for sales invoices.
///
/// # Example
///
/// ```no_run
/// use serde_json::json;
///
/// # async fn example(client: eboekhouden::EBoekhoudenClient) -> eboekhouden::Result<()> {
/// let created = client.invoices().create(&json!({
///     "relationId": 42,
///     "templateId": 1,
///     "items": [{ "description": "Consultancy", "quantity": 8, "pricePerUnit": 95.0 }]
/// })).await?;
/// println!("Created invoice {:?}", created.get("id"));
/// # Ok(())
/// # }
/// ```
pub struct InvoicesService {
    inner: Arc<ClientInner>,
}

impl InvoicesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List invoices.
    pub async fn list(&self, query: Option<ListQuery>) -> Result<ListResponse> {
        let query = query.unwrap_or_default();
        self.inner.get_with_query("invoice", &query.to_pairs()).await
    }

    /// Get a specific invoice by ID.
    pub async fn get(&self, id: u64) -> Result<Record> {
        self.inner.get(&format!("invoice/{}", id)).await
    }

    /// Create an invoice.
    pub async fn create<B: Serialize + ?Sized>(&self, invoice: &B) -> Result<Record> {
        self.inner.post("invoice", invoice).await
    }
}
