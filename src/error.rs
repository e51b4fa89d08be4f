//! Defines the crate level error type.

/// The errors that may occur when validating new records or talking to the
/// transaction store.
///
/// Malformed *data* inside a fetched snapshot is never an error: bad amounts
/// normalize to zero, unknown categories get fallback styling, and bad dates
/// become [crate::transaction::TransactionDate::Unknown].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The amount entered for a new transaction could not be parsed as a
    /// finite number.
    #[error("amount must be a number, got \"{0}\"")]
    InvalidAmount(String),

    /// A new transaction was submitted without a category.
    #[error("please select a category")]
    MissingCategory,

    /// The requested transaction could not be found in the store.
    #[error("the requested transaction could not be found")]
    NotFound,

    /// Tried to delete a transaction that does not exist.
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,

    /// The underlying record store failed (transport or authentication).
    ///
    /// The engine performs no recovery; store implementations surface the
    /// message and callers decide how to present it.
    #[error("the record store reported an error: {0}")]
    StoreError(String),
}
