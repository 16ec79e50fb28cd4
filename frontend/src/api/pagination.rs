use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_SORT_BY: &str = "createdAt";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Next,
    Prev,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Next => "next",
            Direction::Prev => "prev",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub direction: Direction,
    pub token: Option<String>,
    pub search_term: String,
    pub status_filter: String,
    pub sort_by: String,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            direction: Direction::Next,
            token: None,
            search_term: String::new(),
            status_filter: String::new(),
            sort_by: DEFAULT_SORT_BY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn first_page(search_term: impl Into<String>, status_filter: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            status_filter: status_filter.into(),
            ..Self::default()
        }
    }

    pub fn query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("sortBy".to_string(), self.sort_by.clone()),
            ("pageSize".to_string(), self.page_size.to_string()),
            ("direction".to_string(), self.direction.as_str().to_string()),
        ];
        if let Some(token) = self.token.as_ref().filter(|t| !t.is_empty()) {
            params.push(("paginationToken".into(), token.clone()));
        }
        let search = self.search_term.trim();
        if !search.is_empty() {
            params.push(("searchTerm".into(), search.to_string()));
        }
        if !self.status_filter.is_empty() {
            params.push(("status".into(), self.status_filter.clone()));
        }
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMetadata {
    pub current_page: i64,
    pub total_pages: i64,
    #[serde(deserialize_with = "non_empty_token")]
    pub next_pagination_token: Option<String>,
    #[serde(deserialize_with = "non_empty_token")]
    pub prev_pagination_token: Option<String>,
    pub total_items: i64,
}

impl PageMetadata {
    pub fn has_next(&self) -> bool {
        self.next_pagination_token.is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.prev_pagination_token.is_some()
    }
}

fn non_empty_token<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub metadata: PageMetadata,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            metadata: PageMetadata::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn first_page_query_omits_token_and_empty_filters() {
        let params = PageRequest::default().query_params();
        assert_eq!(param(&params, "sortBy"), Some("createdAt"));
        assert_eq!(param(&params, "pageSize"), Some("10"));
        assert_eq!(param(&params, "direction"), Some("next"));
        assert!(param(&params, "paginationToken").is_none());
        assert!(param(&params, "searchTerm").is_none());
        assert!(param(&params, "status").is_none());
    }

    #[test]
    fn query_carries_token_search_and_status() {
        let request = PageRequest {
            direction: Direction::Prev,
            token: Some("tok-1".into()),
            search_term: "  leeds ".into(),
            status_filter: "ACTIVE".into(),
            ..PageRequest::default()
        };
        let params = request.query_params();
        assert_eq!(param(&params, "direction"), Some("prev"));
        assert_eq!(param(&params, "paginationToken"), Some("tok-1"));
        assert_eq!(param(&params, "searchTerm"), Some("leeds"));
        assert_eq!(param(&params, "status"), Some("ACTIVE"));
    }

    #[test]
    fn metadata_treats_null_and_empty_tokens_as_absent() {
        let metadata: PageMetadata = serde_json::from_value(json!({
            "currentPage": 0,
            "totalPages": 3,
            "nextPaginationToken": "abc",
            "prevPaginationToken": null
        }))
        .unwrap();
        assert!(metadata.has_next());
        assert!(!metadata.has_prev());

        let metadata: PageMetadata = serde_json::from_value(json!({
            "nextPaginationToken": "",
        }))
        .unwrap();
        assert!(!metadata.has_next());
        assert_eq!(metadata.total_pages, 0);
    }
}
