use crate::SearchArticlesQuery;

use blog_core::SearchFilters;

use chrono::{TimeZone, Utc};

#[test]
fn test_bare_dates_cover_whole_days() {
    let query = SearchArticlesQuery {
        date_from: Some("2024-03-01".into()),
        date_to: Some("2024-03-31".into()),
        ..SearchArticlesQuery::default()
    };

    let filters = SearchFilters::from(query);

    assert_eq!(
        filters.date_from,
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
    );
    let end = filters.date_to.unwrap();
    assert_eq!(end.date_naive().to_string(), "2024-03-31");
    assert!(end > Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap());
}

#[test]
fn test_unparseable_dates_are_dropped() {
    let query = SearchArticlesQuery {
        keyword: Some("rust".into()),
        date_from: Some("last tuesday".into()),
        ..SearchArticlesQuery::default()
    };

    let filters = SearchFilters::from(query);

    assert_eq!(filters.keyword.as_deref(), Some("rust"));
    assert!(filters.date_from.is_none());
}

#[test]
fn test_query_string_uses_camel_case_date_names() {
    let query: SearchArticlesQuery =
        serde_json::from_value(serde_json::json!({ "dateFrom": "2024-01-01" })).unwrap();

    assert_eq!(query.date_from.as_deref(), Some("2024-01-01"));
}
