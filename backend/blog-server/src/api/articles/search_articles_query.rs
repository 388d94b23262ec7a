use blog_core::SearchFilters;

use serde::Deserialize;

/// Query string of `GET /api/articles/search`.
///
/// Unparseable dates are dropped rather than rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchArticlesQuery {
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl From<SearchArticlesQuery> for SearchFilters {
    fn from(query: SearchArticlesQuery) -> Self {
        SearchFilters {
            keyword: query.keyword,
            category: query.category,
            date_from: query
                .date_from
                .as_deref()
                .and_then(SearchFilters::parse_date_from),
            date_to: query
                .date_to
                .as_deref()
                .and_then(SearchFilters::parse_date_to),
        }
    }
}
