//! Transaction sync: categorize the remote delta and append it to the log.

use std::collections::HashMap;
use std::sync::Arc;

use log::info;

use crate::categories::{CategoryRepositoryTrait, UNCATEGORIZED};
use crate::categorize::categorize;
use crate::errors::{DatabaseError, Error, Result};
use crate::transactions::{NewTransaction, TransactionRepositoryTrait};

use super::AddedTransaction;

/// Turns a remote "added" delta into categorized transaction rows.
pub struct TransactionSyncService {
    categories: Arc<dyn CategoryRepositoryTrait>,
    transactions: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionSyncService {
    pub fn new(
        categories: Arc<dyn CategoryRepositoryTrait>,
        transactions: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            categories,
            transactions,
        }
    }

    /// Categorize every added transaction and append it to the log.
    ///
    /// Category ids are resolved against the reference table, loaded once
    /// per call; descriptions that match no keyword resolve to the
    /// "Uncategorized" row. The whole batch is written atomically. Returns
    /// the number of rows inserted.
    pub async fn record_added(
        &self,
        user_id: &str,
        added: Vec<AddedTransaction>,
    ) -> Result<usize> {
        let category_ids: HashMap<String, i32> = self
            .categories
            .load_all()?
            .into_iter()
            .map(|category| (category.name, category.id))
            .collect();
        let uncategorized_id = *category_ids.get(UNCATEGORIZED).ok_or_else(|| {
            Error::Database(DatabaseError::Internal(format!(
                "Category table is missing the '{}' row",
                UNCATEGORIZED
            )))
        })?;

        let rows: Vec<NewTransaction> = added
            .into_iter()
            .map(|transaction| {
                let category = categorize(&transaction.description);
                let category_id = category_ids
                    .get(category)
                    .copied()
                    .unwrap_or(uncategorized_id);
                NewTransaction {
                    user_id: user_id.to_string(),
                    transaction_date: transaction.date,
                    description: transaction.description,
                    amount: transaction.amount,
                    category_id,
                }
            })
            .collect();

        if rows.is_empty() {
            return Ok(0);
        }

        let inserted = self.transactions.insert_batch(rows).await?;
        info!(
            "Synced {} new transactions for user_id: {}",
            inserted, user_id
        );
        Ok(inserted)
    }
}
