//! Ledgers service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{ListQuery, ListResponse, Record};
use crate::Result;

/// Service for ledger accounts.
///
/// # Example
///
/// ```no_run
/// use eboekhouden::{filter, ListQuery};
/// use serde_json::json;
///
/// # async fn example(client: eboekhouden::EBoekhoudenClient) -> eboekhouden::Result<()> {
/// let balance = client
///     .ledgers()
///     .balance(1010, Some(ListQuery::new().param("date", filter::date_range("2024-01-01", "2024-12-31"))))
///     .await?;
///
/// client.ledgers().update(1010, &json!({ "description": "Bank" })).await?;
/// # Ok(())
/// # }
/// ```
pub struct LedgersService {
    inner: Arc<ClientInner>,
}

impl LedgersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List ledgers.
    pub async fn list(&self, query: Option<ListQuery>) -> Result<ListResponse> {
        let query = query.unwrap_or_default();
        self.inner.get_with_query("ledger", &query.to_pairs()).await
    }

    /// Get a specific ledger by ID.
    pub async fn get(&self, id: u64) -> Result<Record> {
        self.inner.get(&format!("ledger/{}", id)).await
    }

    /// Create a ledger.
    pub async fn create<B: Serialize + ?Sized>(&self, ledger: &B) -> Result<Record> {
        self.inner.post("ledger", ledger).await
    }

    /// Update a ledger.
    pub async fn update<B: Serialize + ?Sized>(&self, id: u64, changes: &B) -> Result<()> {
        self.inner.patch(&format!("ledger/{}", id), changes).await
    }

    /// Get the balance of a ledger.
    pub async fn balance(&self, id: u64, query: Option<ListQuery>) -> Result<Record> {
        let query = query.unwrap_or_default();
        self.inner
            .get_with_query(&format!("ledger/{}/balance", id), &query.to_pairs())
            .await
    }
}
