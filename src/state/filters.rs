//! Query functions over a snapshot of the show collection.
//!
//! All of these are pure: they read the slice they are given and return
//! owned results. Nothing is cached.

use std::cmp::Ordering;

use crate::models::{Show, ShowPage, ShowQuery, SortBy, SortOrder};

/// Page size the API uses when a query sets none.
pub const DEFAULT_QUERY_PAGE_SIZE: u32 = 10;

/// Shows whose category list contains `category` (exact, case-sensitive).
pub fn filter_by_category(shows: &[Show], category: &str) -> Vec<Show> {
    shows
        .iter()
        .filter(|show| show.has_category(category))
        .cloned()
        .collect()
}

/// Shows released in exactly `year`.
pub fn filter_by_year(shows: &[Show], year: i32) -> Vec<Show> {
    shows.iter().filter(|show| show.year == year).cloned().collect()
}

/// Shows rated within `[min, max]`.
///
/// No validation: `min > max` gives an empty result. Non-numeric ratings
/// never match.
pub fn filter_by_rate_range(shows: &[Show], min: f64, max: f64) -> Vec<Show> {
    shows
        .iter()
        .filter(|show| show.rate.within(min, max))
        .cloned()
        .collect()
}

/// Shows produced in `area` (exact match).
pub fn filter_by_area(shows: &[Show], area: &str) -> Vec<Show> {
    shows
        .iter()
        .filter(|show| show.area.as_deref() == Some(area))
        .cloned()
        .collect()
}

/// Shows whose title contains `keyword`, ignoring case.
pub fn search_title(shows: &[Show], keyword: &str) -> Vec<Show> {
    let needle = keyword.to_lowercase();
    shows
        .iter()
        .filter(|show| show.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// The show identified by `url`.
pub fn find_by_url(shows: &[Show], url: &str) -> Option<Show> {
    shows.iter().find(|show| show.url == url).cloned()
}

/// Run a full [`ShowQuery`] locally, the way the API's list endpoint does.
///
/// Filters apply in order keyword, category, area, year, rate range. Empty
/// strings and year 0 mean "no filter". The sort is stable; ratings that
/// are not numbers sort as 0. Pages are 1-based and default to
/// [`DEFAULT_QUERY_PAGE_SIZE`] entries.
pub fn apply_query(shows: &[Show], query: &ShowQuery) -> ShowPage {
    let mut matched: Vec<&Show> = shows
        .iter()
        .filter(|show| match query.keyword.as_deref() {
            Some(keyword) if !keyword.is_empty() => {
                show.title.to_lowercase().contains(&keyword.to_lowercase())
            }
            _ => true,
        })
        .filter(|show| match query.category.as_deref() {
            Some(category) if !category.is_empty() => show.has_category(category),
            _ => true,
        })
        .filter(|show| match query.area.as_deref() {
            Some(area) if !area.is_empty() => show.area.as_deref() == Some(area),
            _ => true,
        })
        .filter(|show| match query.year {
            Some(year) if year != 0 => show.year == year,
            _ => true,
        })
        .filter(|show| query.min_rate.map_or(true, |min| show.rate.value() >= min))
        .filter(|show| query.max_rate.map_or(true, |max| show.rate.value() <= max))
        .collect();

    let sort_by = query.sort_by.unwrap_or_default();
    let order = query.sort_order.unwrap_or_default();
    matched.sort_by(|a, b| {
        let ordering = compare_by(a, b, sort_by);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let page = query.page.unwrap_or(1).max(1);
    let page_size = query.page_size.unwrap_or(DEFAULT_QUERY_PAGE_SIZE);
    let start = (page as usize - 1).saturating_mul(page_size as usize);
    let items = matched
        .iter()
        .skip(start)
        .take(page_size as usize)
        .map(|show| (*show).clone())
        .collect();

    ShowPage {
        total: matched.len() as u64,
        page,
        page_size,
        items,
    }
}

fn compare_by(a: &Show, b: &Show, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Rate => a.rate.sort_key().total_cmp(&b.rate.sort_key()),
        SortBy::Year => a.year.cmp(&b.year),
        SortBy::Title => a.title.cmp(&b.title),
    }
}
