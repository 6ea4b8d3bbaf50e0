//! Email templates service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{ListQuery, ListResponse};
use crate::Result;

/// Service for email templates.
pub struct EmailTemplatesService {
    inner: Arc<ClientInner>,
}

impl EmailTemplatesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List email templates.
    ///
    /// Always sends `limit` and `offset`, defaulting to the first 100 items.
    pub async fn list(&self, query: Option<ListQuery>) -> Result<ListResponse> {
        let query = query.unwrap_or_default().paged();
        self.inner
            .get_with_query("emailtemplate", &query.to_pairs())
            .await
    }
}
