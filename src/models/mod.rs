mod envelope;
mod query;
mod show;
mod stats;

pub use envelope::{ApiEnvelope, ApiInfo, ShowPage};
pub use query::{ShowQuery, SortBy, SortOrder, BULK_PAGE_SIZE};
pub use show::{Rating, Show};
pub use stats::{StatEntry, StatKind};

use serde::{Deserialize, Deserializer};

/// Helper to deserialize a rating as either a number or a numeric string.
///
/// Anything that does not parse becomes NaN, so it fails every range check
/// instead of silently matching.
pub(crate) fn deserialize_rate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct RateVisitor;

    impl<'de> Visitor<'de> for RateVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a numeric string")
        }

        fn visit_f64<E>(self, value: f64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }

        fn visit_u64<E>(self, value: u64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }

        fn visit_str<E>(self, value: &str) -> Result<f64, E>
        where
            E: de::Error,
        {
            let trimmed = value.trim();
            // An empty string coerces to 0, like the dashboard's Number("")
            if trimmed.is_empty() {
                return Ok(0.0);
            }
            Ok(trimmed.parse::<f64>().unwrap_or(f64::NAN))
        }

        fn visit_unit<E>(self) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(0.0)
        }

        fn visit_none<E>(self) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(0.0)
        }

        fn visit_bool<E>(self, value: bool) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(if value { 1.0 } else { 0.0 })
        }
    }

    deserializer.deserialize_any(RateVisitor)
}

/// Helper to deserialize a release year as either an integer or a numeric
/// string. Unparseable values become 0, which is what the API itself stores
/// for shows without a year.
pub(crate) fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let raw = Option::<RawYear>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawYear::Int(v)) => i32::try_from(v).unwrap_or(0),
        Some(RawYear::Float(v)) if v.fract() == 0.0 => v as i32,
        Some(RawYear::Text(s)) => s.trim().parse::<i32>().unwrap_or(0),
        _ => 0,
    })
}

/// Helper to deserialize a statistic label. Year buckets come back as
/// numbers, so numbers are rendered as text; null becomes an empty label.
pub(crate) fn deserialize_stat_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawName {
        Text(String),
        Int(i64),
        Float(f64),
        Flag(bool),
    }

    let raw = Option::<RawName>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawName::Text(s)) => s,
        Some(RawName::Int(v)) => v.to_string(),
        Some(RawName::Float(v)) => v.to_string(),
        Some(RawName::Flag(v)) => v.to_string(),
        None => String::new(),
    })
}

/// Helper to deserialize nullable strings as empty string
/// Handles both missing fields and explicit null values
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Helper to deserialize nullable string lists as an empty list
pub(crate) fn deserialize_nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
