//! Mutations (journal entries) service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{CredDeb, ListQuery, ListResponse, Record};
use crate::Result;

/// Service for mutations and outstanding invoices.
///
/// # Example
///
/// ```no_run
/// use eboekhouden::CredDeb;
///
/// # async fn example(client: eboekhouden::EBoekhoudenClient) -> eboekhouden::Result<()> {
/// let unpaid = client
///     .mutations()
///     .outstanding_invoices(CredDeb::Debtor, None)
///     .await?;
/// for invoice in unpaid {
///     println!("{:?}", invoice.get("invoiceNumber"));
/// }
/// # Ok(())
/// # }
/// ```
pub struct MutationsService {
    inner: Arc<ClientInner>,
}

impl MutationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List mutations.
    pub async fn list(&self, query: Option<ListQuery>) -> Result<ListResponse> {
        let query = query.unwrap_or_default();
        self.inner.get_with_query("mutation", &query.to_pairs()).await
    }

    /// Get a specific mutation by ID.
    pub async fn get(&self, id: u64) -> Result<Record> {
        self.inner.get(&format!("mutation/{}", id)).await
    }

    /// Create a mutation.
    pub async fn create<B: Serialize + ?Sized>(&self, mutation: &B) -> Result<Record> {
        self.inner.post("mutation", mutation).await
    }

    /// List invoices still outstanding for creditors or debtors.
    ///
    /// Always sends `limit` and `offset`, defaulting to the first 100 items.
    pub async fn outstanding_invoices(
        &self,
        cred_deb: CredDeb,
        query: Option<ListQuery>,
    ) -> Result<ListResponse> {
        let mut pairs = vec![("credDeb".to_string(), cred_deb.as_str().to_string())];
        pairs.extend(query.unwrap_or_default().paged().to_pairs());
        self.inner
            .get_with_query("mutation/invoice/outstanding", &pairs)
            .await
    }
}
