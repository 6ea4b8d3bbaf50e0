//! Units service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{ListQuery, ListResponse};
use crate::Result;

/// Service for units of measure.
pub struct UnitsService {
    inner: Arc<ClientInner>,
}

impl UnitsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List units.
    pub async fn list(&self, query: Option<ListQuery>) -> Result<ListResponse> {
        let query = query.unwrap_or_default();
        self.inner.get_with_query("unit", &query.to_pairs()).await
    }
}
