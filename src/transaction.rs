//! Transaction records as fetched from the store and their normalized form.

use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    amount::{RawAmount, normalize_amount},
    category::{ResolvedCategory, resolve_category},
};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// An opaque record identifier; the store may use integers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// An integer identifier.
    Number(i64),
    /// A string identifier, e.g. a UUID.
    Text(String),
}

/// A transaction exactly as received from the record store.
///
/// Every field except `id` may be missing or malformed. Cleaning the data
/// up is the engine's job, not the store's: see [Transaction::from_raw].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTransaction {
    /// The record identifier.
    pub id: RecordId,
    /// The amount spent, if present.
    #[serde(default)]
    pub amount: Option<RawAmount>,
    /// The category label, possibly empty or mixed case.
    #[serde(default)]
    pub category: Option<String>,
    /// The transaction date as a `YYYY-MM-DD` string.
    #[serde(default)]
    pub transaction_date: Option<String>,
    /// Optional free-text note.
    #[serde(default)]
    pub note: Option<String>,
}

/// A transaction date, which may be absent or unparseable.
///
/// `Unknown` orders before every known date, so transactions without a date
/// sink to the bottom of newest-first lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TransactionDate {
    /// No date, or a date string that could not be parsed.
    Unknown,
    /// A parsed calendar date.
    Known(Date),
}

impl TransactionDate {
    /// Parse a `YYYY-MM-DD` date string.
    ///
    /// Missing or malformed dates are not an error; they become
    /// [TransactionDate::Unknown].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(text) => match Date::parse(text.trim(), DATE_FORMAT) {
                Ok(date) => Self::Known(date),
                Err(error) => {
                    tracing::debug!("discarding unparseable date {text:?}: {error}");
                    Self::Unknown
                }
            },
            None => Self::Unknown,
        }
    }
}

/// A transaction after amount, category, and date normalization.
///
/// Invariants: `amount` is always finite, and `category.key` is never
/// empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The record identifier.
    pub id: RecordId,
    /// The normalized amount.
    pub amount: f64,
    /// The resolved category with display metadata.
    pub category: ResolvedCategory,
    /// The transaction date, if one could be parsed.
    pub date: TransactionDate,
    /// Optional free-text note.
    pub note: Option<String>,
}

impl Transaction {
    /// Normalize a raw record.
    ///
    /// `fallback_color` styles categories outside the fixed table; see
    /// [crate::category::LIST_FALLBACK_COLOR] and its chart counterpart.
    pub fn from_raw(raw: &RawTransaction, fallback_color: &'static str) -> Self {
        Self {
            id: raw.id.clone(),
            amount: normalize_amount(raw.amount.as_ref()),
            category: resolve_category(raw.category.as_deref(), fallback_color),
            date: TransactionDate::parse(raw.transaction_date.as_deref()),
            note: raw.note.clone(),
        }
    }
}

/// Normalize a store snapshot, preserving its order.
pub fn normalize_all(raw: &[RawTransaction], fallback_color: &'static str) -> Vec<Transaction> {
    raw.iter()
        .map(|record| Transaction::from_raw(record, fallback_color))
        .collect()
}
