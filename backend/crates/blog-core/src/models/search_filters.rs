use crate::Article;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Conjunctive article search criteria.
///
/// Every present filter must match. Blank keyword/category values are
/// equivalent to absent ones once [`SearchFilters::normalized`] is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Case-insensitive substring of the title or the content.
    pub keyword: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Inclusive lower bound on `created_at`.
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`.
    pub date_to: Option<DateTime<Utc>>,
}

impl SearchFilters {
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn date_from(mut self, date_from: DateTime<Utc>) -> Self {
        self.date_from = Some(date_from);
        self
    }

    pub fn date_to(mut self, date_to: DateTime<Utc>) -> Self {
        self.date_to = Some(date_to);
        self
    }

    /// Trim text filters and drop the ones that end up blank.
    pub fn normalized(&self) -> Self {
        Self {
            keyword: non_blank(self.keyword.as_deref()),
            category: non_blank(self.category.as_deref()),
            date_from: self.date_from,
            date_to: self.date_to,
        }
    }

    pub fn is_empty(&self) -> bool {
        let normalized = self.normalized();
        normalized.keyword.is_none()
            && normalized.category.is_none()
            && normalized.date_from.is_none()
            && normalized.date_to.is_none()
    }

    pub fn matches(&self, article: &Article) -> bool {
        if let Some(keyword) = non_blank(self.keyword.as_deref()) {
            let needle = keyword.to_lowercase();
            let in_title = article.title.to_lowercase().contains(&needle);
            let in_content = article.content.to_lowercase().contains(&needle);
            if !in_title && !in_content {
                return false;
            }
        }

        if let Some(category) = non_blank(self.category.as_deref()) {
            if article.category != category {
                return false;
            }
        }

        if self.date_from.is_some_and(|from| article.created_at < from) {
            return false;
        }

        if self.date_to.is_some_and(|to| article.created_at > to) {
            return false;
        }

        true
    }

    /// Parse a lower date bound. A bare date means the start of that day.
    pub fn parse_date_from(raw: &str) -> Option<DateTime<Utc>> {
        parse_bound(raw, NaiveTime::MIN)
    }

    /// Parse an upper date bound. A bare date means the end of that day.
    pub fn parse_date_to(raw: &str) -> Option<DateTime<Utc>> {
        let end_of_day = NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999)?;
        parse_bound(raw, end_of_day)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn parse_bound(raw: &str, time_of_day: NaiveTime) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(time_of_day).and_utc())
}
