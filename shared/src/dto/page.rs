use serde::{Deserialize, Serialize};

/// Pagination block returned inside every collection envelope.
///
/// The backend uses camelCase for `totalPages` only; the other fields are
/// snake_case on the wire already.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

/// Collection envelope: `{ "data": [...], "pagination": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

/// Query parameters accepted by every paginated GET.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        ListQuery {
            page: 1,
            limit: 20,
            search: None,
        }
    }
}

impl ListQuery {
    pub fn page(page: u32) -> Self {
        ListQuery {
            page: page.max(1),
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: &str) -> Self {
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_info_round_trips_total_pages_rename() {
        let json = r#"{"page":2,"limit":20,"total":55,"totalPages":3}"#;
        let info: PageInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.total_pages, 3);
        assert_eq!(serde_json::to_string(&info).unwrap(), json);
    }

    #[test]
    fn paginated_envelope_deserializes() {
        let json = r#"{"data":["a","b"],"pagination":{"page":1,"limit":2,"total":2,"totalPages":1}}"#;
        let page: Paginated<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(page.pagination.total, 2);
    }

    #[test]
    fn blank_search_is_dropped() {
        let query = ListQuery::page(1).with_search("   ");
        assert_eq!(query.search, None);
        let query = ListQuery::page(0).with_search(" awa ");
        assert_eq!(query.page, 1);
        assert_eq!(query.search, Some("awa".to_string()));
    }
}
