//! Price/earnings ratio with the `"N/A"` sentinel.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Wire sentinel for an unavailable ratio.
const NOT_AVAILABLE: &str = "N/A";

/// A P/E ratio as reported by the data source.
///
/// The source sends either a number or the literal string `"N/A"`.
/// Numeric strings are accepted as numbers; any other string is read as
/// not available rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeRatio {
    /// A reported ratio.
    Value(Decimal),
    /// The source had no ratio for this holding.
    NotAvailable,
}

impl PeRatio {
    /// Returns the ratio if one was reported.
    #[must_use]
    pub fn value(&self) -> Option<Decimal> {
        match self {
            PeRatio::Value(v) => Some(*v),
            PeRatio::NotAvailable => None,
        }
    }

    /// Returns true for the `"N/A"` sentinel.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, PeRatio::Value(_))
    }

    fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_AVAILABLE) {
            return PeRatio::NotAvailable;
        }
        Decimal::from_str(trimmed).map_or(PeRatio::NotAvailable, PeRatio::Value)
    }
}

impl fmt::Display for PeRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeRatio::Value(v) => write!(f, "{}", v.normalize()),
            PeRatio::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl Serialize for PeRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PeRatio::Value(v) => Serialize::serialize(v, serializer),
            PeRatio::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

struct PeRatioVisitor;

impl Visitor<'_> for PeRatioVisitor {
    type Value = PeRatio;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or the string \"N/A\"")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(PeRatio::Value(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(PeRatio::Value(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        // Shortest round-trip text keeps 24.5 as 24.5 instead of its binary expansion.
        Ok(Decimal::from_str(&v.to_string())
            .ok()
            .or_else(|| Decimal::from_f64(v))
            .map_or(PeRatio::NotAvailable, PeRatio::Value))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(PeRatio::from_text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(PeRatio::NotAvailable)
    }
}

impl<'de> Deserialize<'de> for PeRatio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PeRatioVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_numbers() {
        let pe: PeRatio = serde_json::from_str("24.5").unwrap();
        assert_eq!(pe, PeRatio::Value(dec!(24.5)));

        let pe: PeRatio = serde_json::from_str("18").unwrap();
        assert_eq!(pe.value(), Some(dec!(18)));
    }

    #[test]
    fn test_sentinel() {
        let pe: PeRatio = serde_json::from_str("\"N/A\"").unwrap();
        assert_eq!(pe, PeRatio::NotAvailable);
        assert!(!pe.is_available());

        let pe: PeRatio = serde_json::from_str("\"n/a\"").unwrap();
        assert_eq!(pe, PeRatio::NotAvailable);
    }

    #[test]
    fn test_numeric_and_junk_strings() {
        let pe: PeRatio = serde_json::from_str("\"31.20\"").unwrap();
        assert_eq!(pe.value(), Some(dec!(31.2)));

        let pe: PeRatio = serde_json::from_str("\"loss-making\"").unwrap();
        assert_eq!(pe, PeRatio::NotAvailable);
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_string(&PeRatio::NotAvailable).unwrap(),
            "\"N/A\""
        );
        let json = serde_json::to_string(&PeRatio::Value(dec!(12.5))).unwrap();
        assert_eq!(json, "12.5");
    }

    #[test]
    fn test_display() {
        assert_eq!(PeRatio::Value(dec!(24.50)).to_string(), "24.5");
        assert_eq!(PeRatio::NotAvailable.to_string(), "N/A");
    }
}
