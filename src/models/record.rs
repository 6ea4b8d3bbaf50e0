//! Open response shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single resource as returned by the service.
pub type Record = Map<String, Value>;

/// A page of resources.
///
/// List endpoints answer with `{"items": [...], "count": n}`. Both fields
/// default when absent; any other top-level fields land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T = Record> {
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Total number of matching items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Remaining top-level fields
    #[serde(flatten)]
    pub extra: Record,
}

impl<T> ListResponse<T> {
    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_parses_items_and_count() {
        let page: ListResponse = serde_json::from_value(json!({
            "items": [
                { "id": 1, "type": "B", "code": "R0001" },
                { "id": 2, "type": "P", "code": "R0002" }
            ],
            "count": 2
        }))
        .unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page.count, Some(2));
        assert_eq!(page.items[1].get("code"), Some(&json!("R0002")));
        assert!(page.extra.is_empty());
    }

    #[test]
    fn test_list_response_tolerates_missing_fields() {
        let page: ListResponse = serde_json::from_value(json!({ "total": 0 })).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.count, None);
        assert_eq!(page.extra.get("total"), Some(&json!(0)));
    }
}
