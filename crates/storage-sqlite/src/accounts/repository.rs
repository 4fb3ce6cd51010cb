use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use ledgerlink_core::accounts::{LinkedAccount, LinkedAccountRepositoryTrait};
use ledgerlink_core::errors::{DatabaseError, Error, Result};

use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::linked_accounts;

use super::model::LinkedAccountDB;

pub struct LinkedAccountRepository {
    pool: Arc<DbPool>,
}

impl LinkedAccountRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkedAccountRepositoryTrait for LinkedAccountRepository {
    fn find_by_user_id(&self, user_id: &str) -> Result<Option<LinkedAccount>> {
        let mut conn = get_connection(&self.pool)?;
        let row = linked_accounts::table
            .find(user_id)
            .first::<LinkedAccountDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(LinkedAccount::from))
    }

    async fn upsert(&self, account: LinkedAccount) -> Result<LinkedAccount> {
        let pool = Arc::clone(&self.pool);
        tokio::task::spawn_blocking(move || -> Result<LinkedAccount> {
            let mut conn = get_connection(&pool)?;
            let now = Utc::now().to_rfc3339();
            let row = LinkedAccountDB {
                user_id: account.user_id,
                access_token: account.access_token,
                item_id: account.item_id,
                created_at: now.clone(),
                updated_at: now.clone(),
            };

            let result_db = diesel::insert_into(linked_accounts::table)
                .values(&row)
                .on_conflict(linked_accounts::user_id)
                .do_update()
                .set((
                    linked_accounts::access_token.eq(row.access_token.clone()),
                    linked_accounts::item_id.eq(row.item_id.clone()),
                    linked_accounts::updated_at.eq(now),
                ))
                .returning(LinkedAccountDB::as_returning())
                .get_result(&mut conn)
                .map_err(StorageError::from)?;

            Ok(LinkedAccount::from(result_db))
        })
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::Internal(format!("Write worker failed: {}", e)))
        })?
    }
}
