use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// A categorized transaction row. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i32,
    pub user_id: String,
    pub transaction_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category_id: i32,
}

/// A transaction row ready for insertion; the id is generated by storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub user_id: String,
    pub transaction_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category_id: i32,
}

/// Append-only storage contract for the transaction log.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Insert all rows atomically: either every row lands or none do.
    async fn insert_batch(&self, rows: Vec<NewTransaction>) -> Result<usize>;

    /// Rows for one user, newest first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Transaction>>;
}
