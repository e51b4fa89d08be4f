//! Spendview is the aggregation and filtering core of a personal
//! expense-tracking client.
//!
//! The engine is pure and synchronous: the surrounding app fetches a
//! snapshot of raw transaction records through a
//! [stores::TransactionStore] and hands it to the functions here, which
//! never perform I/O of their own. Calling them repeatedly with different
//! snapshots is always safe; consistent input produces consistent output.
//!
//! - [aggregation] folds a snapshot into per-category totals.
//! - [breakdown] windows those totals to a calendar month for the chart.
//! - [analytics] computes the summary screen's totals.
//! - [query] filters and sorts a snapshot for the list view.
//!
//! Malformed data never raises an error: amounts that cannot be parsed
//! count as zero, unknown categories get fallback styling, and missing
//! dates sort before all real dates.

#![warn(missing_docs)]

pub mod aggregation;
pub mod amount;
pub mod analytics;
pub mod breakdown;
pub mod category;
mod error;
pub mod format;
pub mod query;
pub mod stores;
pub mod transaction;
pub mod window;

pub use aggregation::{AggregationResult, CategoryTotal, aggregate, percent_of};
pub use error::Error;
pub use query::{FilterSortCriteria, SortOption, distinct_categories, filter_and_sort};
pub use transaction::{RawTransaction, Transaction, normalize_all};
