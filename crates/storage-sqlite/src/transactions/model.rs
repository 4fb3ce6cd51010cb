//! Database models for the transaction log.
//!
//! Amounts are stored as TEXT and converted to `Decimal` at this boundary,
//! so SQLite never rounds monetary values through floating point.

use std::str::FromStr;

use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerlink_core::errors::{DatabaseError, Error};
use ledgerlink_core::transactions::{NewTransaction, Transaction};

#[derive(Queryable, Identifiable, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: i32,
    pub user_id: String,
    pub transaction_date: NaiveDate,
    pub description: String,
    pub amount: String,
    pub category_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NewTransactionDB {
    pub user_id: String,
    pub transaction_date: NaiveDate,
    pub description: String,
    pub amount: String,
    pub category_id: i32,
}

impl From<NewTransaction> for NewTransactionDB {
    fn from(row: NewTransaction) -> Self {
        Self {
            user_id: row.user_id,
            transaction_date: row.transaction_date,
            description: row.description,
            amount: row.amount.to_string(),
            category_id: row.category_id,
        }
    }
}

impl TryFrom<TransactionDB> for Transaction {
    type Error = Error;

    fn try_from(row: TransactionDB) -> Result<Self, Self::Error> {
        let amount = Decimal::from_str(&row.amount).map_err(|e| {
            Error::Database(DatabaseError::Internal(format!(
                "Invalid stored amount '{}': {}",
                row.amount, e
            )))
        })?;
        Ok(Transaction {
            id: row.id,
            user_id: row.user_id,
            transaction_date: row.transaction_date,
            description: row.description,
            amount,
            category_id: row.category_id,
        })
    }
}
