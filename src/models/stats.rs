//! Precomputed distribution buckets served by the API.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{deserialize_rate, deserialize_stat_name};

/// One bucket of a distribution: a label and its value.
///
/// The API does the aggregation; the dashboard only stores and displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    /// Bucket label; numeric labels (years) arrive as numbers
    #[serde(default, deserialize_with = "deserialize_stat_name")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_rate")]
    pub value: f64,
}

impl StatEntry {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Which distribution a sequence of [`StatEntry`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    /// Rating buckets ("0-5", "5-6", ... "9-10")
    Rate,
    /// Category (genre) buckets
    Category,
    /// Release year buckets
    Year,
    /// Production area buckets
    Area,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [
        StatKind::Rate,
        StatKind::Category,
        StatKind::Year,
        StatKind::Area,
    ];

    /// API path serving this distribution.
    pub fn path(self) -> &'static str {
        match self {
            StatKind::Rate => "/api/douban/rate-stats",
            StatKind::Category => "/api/douban/category-stats",
            StatKind::Year => "/api/douban/year-stats",
            StatKind::Area => "/api/douban/area-stats",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatKind::Rate => "rate",
            StatKind::Category => "category",
            StatKind::Year => "year",
            StatKind::Area => "area",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_entry_deserialize() {
        let entries: Vec<StatEntry> = serde_json::from_str(
            r#"[{"name": "8-9", "value": 12}, {"name": "9-10", "value": 3.0}]"#,
        )
        .unwrap();
        assert_eq!(entries, vec![StatEntry::new("8-9", 12.0), StatEntry::new("9-10", 3.0)]);
    }

    #[test]
    fn test_stat_entry_numeric_and_null_names() {
        let entries: Vec<StatEntry> = serde_json::from_str(
            r#"[{"name": 2020, "value": 3}, {"name": 1999.0, "value": "2"}, {"name": null, "value": 1}]"#,
        )
        .unwrap();
        assert_eq!(
            entries,
            vec![
                StatEntry::new("2020", 3.0),
                StatEntry::new("1999", 2.0),
                StatEntry::new("", 1.0),
            ]
        );
    }

    #[test]
    fn test_stat_kind_paths_are_distinct() {
        let mut paths: Vec<_> = StatKind::ALL.iter().map(|k| k.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), StatKind::ALL.len());
    }
}
