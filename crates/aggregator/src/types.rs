//! Wire types for the aggregation API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Response to a public-token exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeTokenResponse {
    pub access_token: String,
    pub item_id: String,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// One transaction in the "added" subset of a sync delta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddedTransaction {
    /// Remote transaction identity. Decoded but not persisted; the log has
    /// no uniqueness constraint on it (see DESIGN.md).
    #[serde(default)]
    pub transaction_id: Option<String>,
    pub date: NaiveDate,
    /// Merchant or counterparty description, used verbatim downstream.
    pub name: String,
    pub amount: Decimal,
}

/// Transactions-sync delta.
///
/// Only `added` is consumed by this bridge; `modified` and `removed` are
/// decoded but ignored, so corrections and retractions upstream never reach
/// the local log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionsSyncResponse {
    #[serde(default)]
    pub added: Vec<AddedTransaction>,
    #[serde(default)]
    pub modified: Vec<serde_json::Value>,
    #[serde(default)]
    pub removed: Vec<serde_json::Value>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Error envelope returned by the aggregation API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl From<AddedTransaction> for ledgerlink_core::sync::AddedTransaction {
    fn from(transaction: AddedTransaction) -> Self {
        Self {
            date: transaction.date,
            description: transaction.name,
            amount: transaction.amount,
        }
    }
}
