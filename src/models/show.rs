//! TV-show record as served by the API.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::{deserialize_nullable_list, deserialize_nullable_string, deserialize_year};

/// A show's rating after numeric coercion.
///
/// The API sometimes sends ratings as strings ("8.7"). They are coerced on
/// the way in; a rating that is not a number at all is kept as NaN so that
/// every comparison against it is false.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rating(f64);

impl Rating {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Rating of a record that carries no `rate` at all: not a number.
    pub fn missing() -> Self {
        Self(f64::NAN)
    }

    /// The coerced numeric value (may be NaN).
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_numeric(self) -> bool {
        !self.0.is_nan()
    }

    /// `min <= rating <= max`. Always false for NaN.
    pub fn within(self, min: f64, max: f64) -> bool {
        self.0 >= min && self.0 <= max
    }

    /// Key used when sorting by rating; non-numeric ratings sort as 0.
    pub fn sort_key(self) -> f64 {
        if self.0.is_nan() {
            0.0
        } else {
            self.0
        }
    }
}

impl From<f64> for Rating {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            write!(f, "-")
        } else {
            write!(f, "{:.1}", self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::deserialize_rate(deserializer).map(Rating)
    }
}

impl Serialize for Rating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

/// One TV-show entry.
///
/// `url` is the only stable identifier; there is no numeric primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub cover: String,
    /// Absent means NaN; an explicit null means 0.
    #[serde(default = "Rating::missing")]
    pub rate: Rating,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
    /// Category labels; membership tests are exact and case-sensitive.
    #[serde(default, deserialize_with = "deserialize_nullable_list")]
    pub category: Vec<String>,
    /// Production area (country). Not every deployment of the API sends it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_list")]
    pub directors: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_list")]
    pub actors: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_year")]
    pub year: i32,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub update_time: String,
}

impl Show {
    /// Minimal constructor, mostly for tests and fixtures.
    pub fn new(title: impl Into<String>, url: impl Into<String>, rate: f64, year: i32) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            cover: String::new(),
            rate: Rating::new(rate),
            description: String::new(),
            category: Vec::new(),
            area: None,
            directors: Vec::new(),
            actors: Vec::new(),
            year,
            update_time: String::new(),
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.category.iter().any(|c| c == category)
    }

    /// Date of the snapshot this record came from, if `update_time` is a
    /// plain `YYYY-MM-DD` date.
    pub fn updated_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.update_time.trim(), "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_show_full_deserialization() {
        let show: Show = serde_json::from_value(json!({
            "title": "Severance",
            "url": "https://movie.douban.com/subject/1/",
            "cover": "https://img.example/1.jpg",
            "rate": 9.1,
            "description": "Office thriller",
            "category": ["Drama", "Sci-Fi"],
            "area": "US",
            "directors": ["Ben Stiller"],
            "actors": ["Adam Scott"],
            "year": 2022,
            "update_time": "2025-03-01"
        }))
        .unwrap();

        assert_eq!(show.title, "Severance");
        assert_eq!(show.rate.value(), 9.1);
        assert!(show.has_category("Sci-Fi"));
        assert!(!show.has_category("sci-fi"));
        assert_eq!(show.area.as_deref(), Some("US"));
        assert_eq!(show.year, 2022);
        assert_eq!(show.updated_on(), NaiveDate::from_ymd_opt(2025, 3, 1));
    }

    #[test]
    fn test_rate_as_string_is_coerced() {
        let show: Show = serde_json::from_value(json!({"title": "A", "rate": "8.7"})).unwrap();
        assert_eq!(show.rate.value(), 8.7);
    }

    #[test]
    fn test_rate_non_numeric_is_nan() {
        let show: Show = serde_json::from_value(json!({"title": "A", "rate": "n/a"})).unwrap();
        assert!(!show.rate.is_numeric());
        assert!(!show.rate.within(0.0, 10.0));
        assert_eq!(show.rate.sort_key(), 0.0);
        assert_eq!(show.rate.to_string(), "-");
    }

    #[test]
    fn test_integer_rate() {
        let show: Show = serde_json::from_value(json!({"rate": 8})).unwrap();
        assert_eq!(show.rate.value(), 8.0);
    }

    #[test]
    fn test_missing_fields_default() {
        let show: Show = serde_json::from_value(json!({"title": "Bare"})).unwrap();
        assert_eq!(show.url, "");
        assert!(!show.rate.is_numeric());
        assert!(show.category.is_empty());
        assert_eq!(show.year, 0);
        assert!(show.area.is_none());
        assert!(show.updated_on().is_none());
    }

    #[test]
    fn test_null_fields_default() {
        let show: Show = serde_json::from_value(json!({
            "title": null,
            "category": null,
            "rate": null,
            "year": null
        }))
        .unwrap();
        assert_eq!(show.title, "");
        assert!(show.category.is_empty());
        assert_eq!(show.rate.value(), 0.0);
        assert_eq!(show.year, 0);
    }

    #[test]
    fn test_missing_rate_never_matches_a_range() {
        let missing: Show = serde_json::from_value(json!({"title": "NoRate", "year": 2020})).unwrap();
        let null: Show = serde_json::from_value(json!({"title": "Null", "rate": null})).unwrap();
        assert!(missing.rate.value().is_nan());
        assert!(!missing.rate.within(0.0, 10.0));
        assert!(null.rate.within(0.0, 10.0));
    }

    #[test]
    fn test_year_as_string() {
        let show: Show = serde_json::from_value(json!({"year": "2019"})).unwrap();
        assert_eq!(show.year, 2019);

        let show: Show = serde_json::from_value(json!({"year": "unknown"})).unwrap();
        assert_eq!(show.year, 0);
    }

    #[test]
    fn test_rating_serializes_as_number() {
        let show = Show::new("A", "u", 9.1, 2020);
        let value = serde_json::to_value(&show).unwrap();
        assert_eq!(value["rate"], json!(9.1));
        assert!(value.get("area").is_none());
    }

    #[test]
    fn test_rating_within_is_closed_interval() {
        let rating = Rating::new(8.0);
        assert!(rating.within(8.0, 8.0));
        assert!(rating.within(7.0, 8.0));
        assert!(!rating.within(8.1, 9.0));
        assert!(!rating.within(9.0, 7.0));
    }
}
