//! Core domain logic for LedgerLink.
//!
//! Holds the data model, the keyword categorizer, the repository contracts
//! implemented by storage, and the services that sit between the HTTP
//! surface and persistence.

pub mod accounts;
pub mod categories;
pub mod categorize;
pub mod errors;
pub mod sync;
pub mod transactions;

pub use errors::{Error, Result};
