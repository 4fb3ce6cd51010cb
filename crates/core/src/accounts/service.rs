use std::sync::Arc;

use log::info;

use crate::errors::{Error, Result};

use super::{LinkedAccount, LinkedAccountRepositoryTrait};

/// Service over the linked-account store.
pub struct LinkedAccountService {
    repository: Arc<dyn LinkedAccountRepositoryTrait>,
}

impl LinkedAccountService {
    pub fn new(repository: Arc<dyn LinkedAccountRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Persist exchanged credentials for a user, replacing any previous link.
    pub async fn link(
        &self,
        user_id: &str,
        access_token: String,
        item_id: String,
    ) -> Result<LinkedAccount> {
        let account = self
            .repository
            .upsert(LinkedAccount {
                user_id: user_id.to_string(),
                access_token,
                item_id,
            })
            .await?;
        info!("Access token saved for user_id: {}", account.user_id);
        Ok(account)
    }

    /// Credentials for a user; an absent link is a not-found error.
    pub fn get_linked(&self, user_id: &str) -> Result<LinkedAccount> {
        self.repository
            .find_by_user_id(user_id)?
            .ok_or_else(|| Error::not_found("No linked account found for this user."))
    }
}
