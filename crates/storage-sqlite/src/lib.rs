//! SQLite persistence for LedgerLink, built on diesel.
//!
//! Implements the repository contracts from `ledgerlink-core`:
//! - accounts: linked-account credential upsert/lookup
//! - categories: the seeded category reference set
//! - transactions: the append-only transaction log

pub mod accounts;
pub mod categories;
pub mod db;
pub mod errors;
pub mod schema;
pub mod transactions;

pub use errors::StorageError;
