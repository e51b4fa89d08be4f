//! Defines the transaction store trait.

use time::Date;

use crate::{
    Error,
    transaction::{RawTransaction, RecordId},
    window::DateRange,
};

/// Identifies the user whose records an operation is scoped to.
///
/// Always passed explicitly; the engine keeps no ambient session state.
pub type UserId = String;

/// Defines which transactions [TransactionStore::fetch] should return.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    /// Include transactions dated within this inclusive range, typically a
    /// month window. Records without a parseable date never match a range.
    pub date_range: Option<DateRange>,
}

/// Handles the retrieval and mutation of transaction records.
///
/// Implementations own transport and persistence. Failures surface as
/// [Error::StoreError] and propagate to the caller untouched; the engine
/// has nothing to recover.
pub trait TransactionStore {
    /// Retrieve the user's transactions, newest first.
    fn fetch(&self, user: &UserId, query: &TransactionQuery)
    -> Result<Vec<RawTransaction>, Error>;

    /// Retrieve a single transaction by ID.
    ///
    /// # Errors
    ///
    /// Returns [Error::NotFound] if the user has no such record.
    fn get(&self, user: &UserId, id: &RecordId) -> Result<RawTransaction, Error>;

    /// Insert a validated transaction and return the stored record.
    fn insert(
        &mut self,
        user: &UserId,
        new_transaction: NewTransaction,
    ) -> Result<RawTransaction, Error>;

    /// Delete a transaction by ID.
    ///
    /// # Errors
    ///
    /// Returns [Error::DeleteMissingTransaction] if no such record exists.
    fn delete(&mut self, id: &RecordId) -> Result<(), Error>;
}

/// A validated new transaction, ready for [TransactionStore::insert].
///
/// Construction goes through [NewTransaction::new], which applies the
/// add-payment form rules, so a stored record is always well formed even
/// though fetched records may not be.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    amount: f64,
    category: String,
    date: Date,
    note: Option<String>,
}

impl NewTransaction {
    /// Validate the add-payment form inputs.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidAmount] if `amount` does not parse as a
    /// finite number, and [Error::MissingCategory] if no category was
    /// chosen.
    pub fn new(
        amount: &str,
        category: Option<&str>,
        date: Date,
        note: Option<&str>,
    ) -> Result<Self, Error> {
        let parsed_amount = amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite())
            .ok_or_else(|| Error::InvalidAmount(amount.to_owned()))?;

        let category = category
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .ok_or(Error::MissingCategory)?;

        Ok(Self {
            amount: parsed_amount,
            category: category.to_owned(),
            date,
            note: note.map(str::to_owned),
        })
    }

    /// The validated amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The chosen category label.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The transaction date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The optional note.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::Error;

    use super::NewTransaction;

    #[test]
    fn new_transaction_accepts_valid_form_input() {
        let transaction = NewTransaction::new(
            " 12.50 ",
            Some("food"),
            date!(2024 - 03 - 01),
            Some("lunch"),
        )
        .unwrap();

        assert_eq!(transaction.amount(), 12.5);
        assert_eq!(transaction.category(), "food");
        assert_eq!(transaction.date(), date!(2024 - 03 - 01));
        assert_eq!(transaction.note(), Some("lunch"));
    }

    #[test]
    fn new_transaction_rejects_non_numeric_amounts() {
        let result = NewTransaction::new("abc", Some("food"), date!(2024 - 03 - 01), None);

        assert_eq!(result, Err(Error::InvalidAmount("abc".to_owned())));
    }

    #[test]
    fn new_transaction_rejects_missing_categories() {
        for category in [None, Some(""), Some("  ")] {
            let result = NewTransaction::new("5", category, date!(2024 - 03 - 01), None);
            assert_eq!(result, Err(Error::MissingCategory));
        }
    }
}
