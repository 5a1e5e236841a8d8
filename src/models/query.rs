//! Query parameters accepted by the show-list endpoint.

use std::fmt;

/// Page size used to pull the whole dataset in a single request.
pub const BULK_PAGE_SIZE: u32 = 1000;

/// Field the show list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Rate,
    Year,
    Title,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Rate => "rate",
            SortBy::Year => "year",
            SortBy::Title => "title",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters, sort and pagination for the show list.
///
/// Every field is optional; unset fields are left out of the query string
/// and the server applies its own defaults (page 1, 10 per page, rating
/// descending).
///
/// # Example
///
/// ```
/// use tvdash::models::{ShowQuery, SortBy};
///
/// let query = ShowQuery::new()
///     .with_category("Drama")
///     .with_rate_range(8.0, 10.0)
///     .with_sort(SortBy::Year, Default::default());
/// assert_eq!(query.category.as_deref(), Some("Drama"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShowQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Case-insensitive title substring
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub year: Option<i32>,
    pub min_rate: Option<f64>,
    pub max_rate: Option<f64>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

impl ShowQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// First page with [`BULK_PAGE_SIZE`] entries: "give me everything"
    /// without real pagination.
    pub fn bulk() -> Self {
        Self::new().with_page(1, BULK_PAGE_SIZE)
    }

    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_rate_range(mut self, min: f64, max: f64) -> Self {
        self.min_rate = Some(min);
        self.max_rate = Some(max);
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = Some(sort_by);
        self.sort_order = Some(sort_order);
        self
    }

    /// Set parameters as `(name, value)` pairs, in a stable order.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        if let Some(ref keyword) = self.keyword {
            pairs.push(("keyword", keyword.clone()));
        }
        if let Some(ref category) = self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(ref area) = self.area {
            pairs.push(("area", area.clone()));
        }
        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        if let Some(min_rate) = self.min_rate {
            pairs.push(("min_rate", min_rate.to_string()));
        }
        if let Some(max_rate) = self.max_rate {
            pairs.push(("max_rate", max_rate.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sort_by", sort_by.to_string()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sort_order", sort_order.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_query() {
        let pairs = ShowQuery::bulk().to_query_pairs();
        assert_eq!(
            pairs,
            vec![("page", "1".to_string()), ("page_size", "1000".to_string())]
        );
    }

    #[test]
    fn test_empty_query_has_no_pairs() {
        assert!(ShowQuery::new().to_query_pairs().is_empty());
    }

    #[test]
    fn test_full_query_order() {
        let query = ShowQuery::new()
            .with_page(2, 20)
            .with_keyword("love")
            .with_category("Drama")
            .with_area("UK")
            .with_year(2021)
            .with_rate_range(7.5, 9.0)
            .with_sort(SortBy::Title, SortOrder::Asc);

        let names: Vec<&str> = query.to_query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            vec![
                "page",
                "page_size",
                "keyword",
                "category",
                "area",
                "year",
                "min_rate",
                "max_rate",
                "sort_by",
                "sort_order"
            ]
        );
        let pairs = query.to_query_pairs();
        assert_eq!(pairs[6].1, "7.5");
        assert_eq!(pairs[8].1, "title");
        assert_eq!(pairs[9].1, "asc");
    }

    #[test]
    fn test_sort_defaults() {
        assert_eq!(SortBy::default(), SortBy::Rate);
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }
}
