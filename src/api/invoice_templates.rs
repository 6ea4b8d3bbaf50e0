//! Invoice templates service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{ListQuery, ListResponse};
use crate::Result;

/// Service for invoice templates.
pub struct InvoiceTemplatesService {
    inner: Arc<ClientInner>,
}

impl InvoiceTemplatesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List invoice templates.
    pub async fn list(&self, query: Option<ListQuery>) -> Result<ListResponse> {
        let query = query.unwrap_or_default();
        self.inner
            .get_with_query("invoicetemplate", &query.to_pairs())
            .await
    }
}
