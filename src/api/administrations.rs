//! Administrations service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{ListQuery, ListResponse};
use crate::Result;

/// Service for the administrations the access token can reach.
///
/// Both endpoints always send `limit` and `offset`, defaulting to the first
/// 100 items.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: eboekhouden::EBoekhoudenClient) -> eboekhouden::Result<()> {
/// let own = client.administrations().list(None).await?;
/// let linked = client.administrations().list_linked(None).await?;
/// println!("{} own, {} linked", own.len(), linked.len());
/// # Ok(())
/// # }
/// ```
pub struct AdministrationsService {
    inner: Arc<ClientInner>,
}

impl AdministrationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List administrations.
    pub async fn list(&self, query: Option<ListQuery>) -> Result<ListResponse> {
        let query = query.unwrap_or_default().paged();
        self.inner
            .get_with_query("administration", &query.to_pairs())
            .await
    }

    /// List administrations linked to the current one.
    pub async fn list_linked(&self, query: Option<ListQuery>) -> Result<ListResponse> {
        let query = query.unwrap_or_default().paged();
        self.inner
            .get_with_query("administration/linked", &query.to_pairs())
            .await
    }
}
