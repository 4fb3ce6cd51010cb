//! Remote delta models consumed by the sync service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One newly-added transaction reported by the aggregation API.
///
/// Only the fields this core persists; the wire layer owns the full
/// remote representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}
