use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use ledgerlink_core::errors::{DatabaseError, Error, Result};
use ledgerlink_core::transactions::{NewTransaction, Transaction, TransactionRepositoryTrait};

use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::transactions;

use super::model::{NewTransactionDB, TransactionDB};

pub struct TransactionRepository {
    pool: Arc<DbPool>,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    async fn insert_batch(&self, rows: Vec<NewTransaction>) -> Result<usize> {
        if rows.is_empty() {
            return Ok(0);
        }

        let pool = Arc::clone(&self.pool);
        tokio::task::spawn_blocking(move || -> Result<usize> {
            let mut conn = get_connection(&pool)?;
            // One immediate transaction for the whole batch: a failure on any
            // row rolls back every insert issued before it.
            let inserted = conn.immediate_transaction::<_, StorageError, _>(|tx| {
                let mut inserted = 0usize;
                for row in rows {
                    let db_row = NewTransactionDB::from(row);
                    inserted += diesel::insert_into(transactions::table)
                        .values(&db_row)
                        .execute(tx)?;
                }
                Ok(inserted)
            })?;
            Ok(inserted)
        })
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::Internal(format!("Write worker failed: {}", e)))
        })?
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .filter(transactions::user_id.eq(user_id))
            .order(transactions::transaction_date.desc())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(Transaction::try_from).collect()
    }
}
