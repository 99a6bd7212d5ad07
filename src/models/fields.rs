//! Serde field deserializers implementing the write-side coercion rules
//! shared by every entity payload: numeric fields accept numbers or numeric
//! strings, date fields accept date strings, and empty/null values count as
//! absent instead of being stored.

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumericInput {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerInput {
    Number(i64),
    Float(f64),
    Text(String),
}

/// Decimal from a JSON number or a non-empty numeric string.
pub fn decimal_opt<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumericInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumericInput::Number(n)) => Decimal::try_from(n).map(Some).map_err(de::Error::custom),
        Some(NumericInput::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(None)
            } else {
                s.parse::<Decimal>().map(Some).map_err(de::Error::custom)
            }
        }
    }
}

/// i32 from a JSON number or a non-empty numeric string.
pub fn int_opt<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntegerInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntegerInput::Number(n)) => {
            i32::try_from(n).map(Some).map_err(de::Error::custom)
        }
        // Whole-valued floats (42.0) are accepted; a fractional value is
        // rejected rather than silently truncated.
        Some(IntegerInput::Float(f)) => {
            if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
                Ok(Some(f as i32))
            } else {
                Err(de::Error::custom(format!("invalid integer: {}", f)))
            }
        }
        Some(IntegerInput::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(None)
            } else {
                s.parse::<i32>().map(Some).map_err(de::Error::custom)
            }
        }
    }
}

/// Date from a non-empty `YYYY-MM-DD` or RFC 3339 string.
pub fn date_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid date: {}", s)))
        }
    }
}

/// String with empty and whitespace-only values treated as absent.
pub fn text_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) => {
            if s.trim().is_empty() {
                Ok(None)
            } else {
                Ok(Some(s))
            }
        }
    }
}
