//! Client for the banking-data aggregation API.
//!
//! Exposes the three calls the bridge needs: link-session creation,
//! public-token exchange, and the transactions-sync delta.

mod client;
mod error;
mod types;

pub use client::{AggregatorClient, SANDBOX_API_URL};
pub use error::{AggregatorError, Result};
pub use types::*;
