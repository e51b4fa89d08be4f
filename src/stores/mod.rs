//! The record-store seam between the engine and the surrounding app.
//!
//! The engine never performs I/O; the app fetches a snapshot through a
//! [TransactionStore] and hands it to the pure functions in the rest of the
//! crate.

mod memory;
mod transaction;

pub use memory::MemoryTransactionStore;
pub use transaction::{NewTransaction, TransactionQuery, TransactionStore, UserId};
