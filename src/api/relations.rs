//! Relations (customers and suppliers) service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{ListQuery, ListResponse, Record};
use crate::Result;

/// Service for relations.
///
/// # Example
///
/// ```no_run
/// use eboekhouden::{filter, ListQuery};
/// use serde_json::json;
///
/// # async fn example(client: eboekhouden::EBoekhoudenClient) -> eboekhouden::Result<()> {
/// let companies = client
///     .relations()
///     .list(Some(ListQuery::new().param("type", filter::eq("B"))))
///     .await?;
///
/// let created = client.relations().create(&json!({
///     "type": "B",
///     "name": "Test Company",
///     "city": "Test City"
/// })).await?;
/// # Ok(())
/// # }
/// ```
pub struct RelationsService {
    inner: Arc<ClientInner>,
}

impl RelationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List relations.
    pub async fn list(&self, query: Option<ListQuery>) -> Result<ListResponse> {
        let query = query.unwrap_or_default();
        self.inner.get_with_query("relation", &query.to_pairs()).await
    }

    /// Get a specific relation by ID.
    pub async fn get(&self, id: u64) -> Result<Record> {
        self.inner.get(&format!("relation/{}", id)).await
    }

    /// Create a relation.
    pub async fn create<B: Serialize + ?Sized>(&self, relation: &B) -> Result<Record> {
        self.inner.post("relation", relation).await
    }

    /// Update a relation.
    pub async fn update<B: Serialize + ?Sized>(&self, id: u64, changes: &B) -> Result<()> {
        self.inner.patch(&format!("relation/{}", id), changes).await
    }
}
