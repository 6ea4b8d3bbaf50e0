//! Query parameters for list endpoints.

/// Page size used by endpoints that always send `limit`/`offset`.
pub const DEFAULT_LIMIT: u32 = 100;

/// Query parameters for list endpoints.
///
/// Parameters are sent in the order `limit`, `offset`, then every
/// [`param`](Self::param) in insertion order. Filter values are built with
/// the [`filter`](crate::filter) functions.
///
/// # Example
///
/// ```
/// use eboekhouden::{filter, ListQuery};
///
/// let query = ListQuery::new()
///     .limit(20)
///     .offset(40)
///     .param("date", filter::date_range("2024-01-01", "2024-03-31"));
///
/// assert_eq!(query.to_pairs()[2], ("date".to_string(), "[range]2024-01-01,2024-03-31".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    limit: Option<u32>,
    offset: Option<u32>,
    params: Vec<(String, String)>,
}

impl ListQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// First page with [`DEFAULT_LIMIT`] items.
    pub fn first_page() -> Self {
        Self::new().limit(DEFAULT_LIMIT).offset(0)
    }

    /// Set the maximum number of items to return.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the number of items to skip.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Add a query parameter, usually a resource field with a filter value.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Fill in `limit` and `offset` from [`first_page`](Self::first_page)
    /// where unset.
    pub(crate) fn paged(mut self) -> Self {
        self.limit.get_or_insert(DEFAULT_LIMIT);
        self.offset.get_or_insert(0);
        self
    }

    /// The query as name/value pairs.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.params.len() + 2);
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_string(), offset.to_string()));
        }
        pairs.extend(self.params.iter().cloned());
        pairs
    }
}
