use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Durable credentials for one user's linked institution item.
///
/// The access token is an opaque secret issued by the aggregation API and
/// must never appear in logs or response bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAccount {
    pub user_id: String,
    pub access_token: String,
    pub item_id: String,
}

/// Storage contract for linked-account credentials.
#[async_trait]
pub trait LinkedAccountRepositoryTrait: Send + Sync {
    fn find_by_user_id(&self, user_id: &str) -> Result<Option<LinkedAccount>>;

    /// Insert-or-replace keyed by user_id; the last writer wins.
    async fn upsert(&self, account: LinkedAccount) -> Result<LinkedAccount>;
}
