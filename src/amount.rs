//! Normalization of raw transaction amounts.
//!
//! The remote store delivers amounts as numbers, numeric strings, or not at
//! all. Normalization is total: anything that does not yield a finite number
//! becomes `0.0`, treating a malformed amount as "no monetary contribution"
//! rather than an error.

use serde::Deserialize;

/// A transaction amount as it appears in a record-store snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// A plain JSON number.
    Number(f64),
    /// A numeric string such as `"42.50"`.
    Text(String),
}

/// Convert a raw amount into a finite `f64`.
///
/// Absent values, empty or non-numeric strings, NaN, and infinities all
/// normalize to `0.0`. This function never fails.
pub fn normalize_amount(raw: Option<&RawAmount>) -> f64 {
    match raw {
        Some(RawAmount::Number(number)) if number.is_finite() => *number,
        Some(RawAmount::Number(number)) => {
            tracing::debug!("discarding non-finite amount {number}");
            0.0
        }
        Some(RawAmount::Text(text)) => match text.trim().parse::<f64>() {
            Ok(number) if number.is_finite() => number,
            _ => {
                tracing::debug!("discarding unparseable amount {text:?}");
                0.0
            }
        },
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::{RawAmount, normalize_amount};

    #[test]
    fn normalize_amount_passes_finite_numbers_through() {
        assert_eq!(normalize_amount(Some(&RawAmount::Number(42.5))), 42.5);
        assert_eq!(normalize_amount(Some(&RawAmount::Number(-7.0))), -7.0);
        assert_eq!(normalize_amount(Some(&RawAmount::Number(0.0))), 0.0);
    }

    #[test]
    fn normalize_amount_parses_numeric_strings() {
        assert_eq!(
            normalize_amount(Some(&RawAmount::Text("19.99".to_owned()))),
            19.99
        );
        assert_eq!(
            normalize_amount(Some(&RawAmount::Text("  12 ".to_owned()))),
            12.0
        );
    }

    #[test]
    fn normalize_amount_rejects_unparseable_input_as_zero() {
        assert_eq!(normalize_amount(Some(&RawAmount::Text("bad".to_owned()))), 0.0);
        assert_eq!(normalize_amount(Some(&RawAmount::Text("".to_owned()))), 0.0);
        assert_eq!(normalize_amount(None), 0.0);
    }

    #[test]
    fn normalize_amount_rejects_non_finite_values_as_zero() {
        assert_eq!(normalize_amount(Some(&RawAmount::Number(f64::NAN))), 0.0);
        assert_eq!(normalize_amount(Some(&RawAmount::Number(f64::INFINITY))), 0.0);
        assert_eq!(
            normalize_amount(Some(&RawAmount::Text("inf".to_owned()))),
            0.0
        );
    }

    #[test]
    fn raw_amount_deserializes_numbers_and_strings() {
        let number: RawAmount = serde_json::from_str("50").unwrap();
        assert_eq!(number, RawAmount::Number(50.0));

        let text: RawAmount = serde_json::from_str("\"12.5\"").unwrap();
        assert_eq!(text, RawAmount::Text("12.5".to_owned()));

        let absent: Option<RawAmount> = serde_json::from_str("null").unwrap();
        assert_eq!(absent, None);
    }
}
