//! Database model for linked-account credentials.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use ledgerlink_core::accounts::LinkedAccount;

#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    Debug,
    Clone,
    Serialize,
    Deserialize,
)]
#[diesel(primary_key(user_id))]
#[diesel(table_name = crate::schema::linked_accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LinkedAccountDB {
    pub user_id: String,
    pub access_token: String,
    pub item_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<LinkedAccountDB> for LinkedAccount {
    fn from(row: LinkedAccountDB) -> Self {
        LinkedAccount {
            user_id: row.user_id,
            access_token: row.access_token,
            item_id: row.item_id,
        }
    }
}
