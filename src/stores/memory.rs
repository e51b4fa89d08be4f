//! An in-memory transaction store, used by tests and as the reference
//! implementation for external stores.

use crate::{
    Error,
    amount::RawAmount,
    stores::transaction::{NewTransaction, TransactionQuery, TransactionStore, UserId},
    transaction::{RawTransaction, RecordId, TransactionDate},
};

/// Stores transactions in memory, scoped per user.
#[derive(Debug, Default)]
pub struct MemoryTransactionStore {
    rows: Vec<(UserId, RawTransaction)>,
    next_id: i64,
}

impl MemoryTransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn fetch(
        &self,
        user: &UserId,
        query: &TransactionQuery,
    ) -> Result<Vec<RawTransaction>, Error> {
        let mut rows: Vec<RawTransaction> = self
            .rows
            .iter()
            .filter(|(owner, _)| owner == user)
            .map(|(_, row)| row.clone())
            .filter(|row| match &query.date_range {
                Some(range) => match TransactionDate::parse(row.transaction_date.as_deref()) {
                    TransactionDate::Known(date) => range.contains(date),
                    TransactionDate::Unknown => false,
                },
                None => true,
            })
            .collect();

        // Newest first with ties in insertion order, matching the remote
        // store's fetch order.
        rows.sort_by(|a, b| {
            TransactionDate::parse(b.transaction_date.as_deref())
                .cmp(&TransactionDate::parse(a.transaction_date.as_deref()))
        });

        Ok(rows)
    }

    fn get(&self, user: &UserId, id: &RecordId) -> Result<RawTransaction, Error> {
        self.rows
            .iter()
            .find(|(owner, row)| owner == user && &row.id == id)
            .map(|(_, row)| row.clone())
            .ok_or(Error::NotFound)
    }

    fn insert(
        &mut self,
        user: &UserId,
        new_transaction: NewTransaction,
    ) -> Result<RawTransaction, Error> {
        self.next_id += 1;
        let row = RawTransaction {
            id: RecordId::Number(self.next_id),
            amount: Some(RawAmount::Number(new_transaction.amount())),
            category: Some(new_transaction.category().to_owned()),
            transaction_date: Some(new_transaction.date().to_string()),
            note: new_transaction.note().map(str::to_owned),
        };

        tracing::debug!("inserted transaction {:?} for user {user}", row.id);
        self.rows.push((user.clone(), row.clone()));

        Ok(row)
    }

    fn delete(&mut self, id: &RecordId) -> Result<(), Error> {
        let before = self.rows.len();
        self.rows.retain(|(_, row)| &row.id != id);

        if self.rows.len() == before {
            return Err(Error::DeleteMissingTransaction);
        }

        tracing::debug!("deleted transaction {id:?}");
        Ok(())
    }
}
