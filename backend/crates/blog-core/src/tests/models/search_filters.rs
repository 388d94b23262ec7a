use crate::{Article, SearchFilters};

use chrono::{DateTime, TimeZone, Timelike, Utc};
use googletest::prelude::*;
use uuid::Uuid;

fn article(title: &str, category: &str, content: &str, created_at: DateTime<Utc>) -> Article {
    Article {
        id: Uuid::new_v4(),
        title: title.to_string(),
        category: category.to_string(),
        content: content.to_string(),
        slug: crate::slugify(title),
        created_at,
        updated_at: None,
    }
}

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, d, 12, 0, 0).unwrap()
}

#[test]
fn given_no_filters_when_matching_then_everything_matches() {
    let filters = SearchFilters::default();

    assert_that!(filters.is_empty(), eq(true));
    assert_that!(filters.matches(&article("A", "b", "c", day(1))), eq(true));
}

#[test]
fn given_keyword_when_matching_then_case_insensitive_over_title_or_content() {
    let filters = SearchFilters::default().keyword("RUST");

    assert_that!(filters.matches(&article("Learning rust", "dev", "x", day(1))), eq(true));
    assert_that!(filters.matches(&article("Other", "dev", "about Rust", day(1))), eq(true));
    assert_that!(filters.matches(&article("Other", "dev", "nothing", day(1))), eq(false));
}

#[test]
fn given_keyword_and_category_when_matching_then_both_required() {
    let filters = SearchFilters::default().keyword("rust").category("dev");

    assert_that!(filters.matches(&article("rust", "dev", "x", day(1))), eq(true));
    assert_that!(filters.matches(&article("rust", "life", "x", day(1))), eq(false));
}

#[test]
fn given_blank_filters_when_normalized_then_dropped() {
    let filters = SearchFilters::default().keyword("   ").category(" dev ");

    let normalized = filters.normalized();

    assert_that!(normalized.keyword, none());
    assert_that!(normalized.category, some(eq("dev")));
}

#[test]
fn given_date_range_when_matching_then_bounds_inclusive() {
    let filters = SearchFilters::default().date_from(day(2)).date_to(day(4));

    assert_that!(filters.matches(&article("a", "b", "c", day(1))), eq(false));
    assert_that!(filters.matches(&article("a", "b", "c", day(2))), eq(true));
    assert_that!(filters.matches(&article("a", "b", "c", day(4))), eq(true));
    assert_that!(filters.matches(&article("a", "b", "c", day(5))), eq(false));
}

#[test]
fn given_bare_date_when_parsed_as_lower_bound_then_start_of_day() {
    let parsed = SearchFilters::parse_date_from("2024-03-02").unwrap();

    assert_that!(parsed, eq(Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap()));
}

#[test]
fn given_bare_date_when_parsed_as_upper_bound_then_end_of_day() {
    let parsed = SearchFilters::parse_date_to("2024-03-02").unwrap();

    assert_that!(parsed.hour(), eq(23));
    assert_that!(parsed.minute(), eq(59));
    assert_that!(parsed.second(), eq(59));
    assert_that!(parsed > Utc.with_ymd_and_hms(2024, 3, 2, 23, 59, 59).unwrap(), eq(true));
}

#[test]
fn given_rfc3339_when_parsed_then_converted_to_utc() {
    let parsed = SearchFilters::parse_date_from("2024-03-02T10:00:00+02:00").unwrap();

    assert_that!(parsed, eq(Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap()));
}

#[test]
fn given_garbage_when_parsed_then_none() {
    assert_that!(SearchFilters::parse_date_from("yesterday"), none());
    assert_that!(SearchFilters::parse_date_to(""), none());
}
