//! Database model for the category reference set.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use ledgerlink_core::categories::Category;

#[derive(Queryable, Identifiable, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: i32,
    pub name: String,
}

impl From<CategoryDB> for Category {
    fn from(row: CategoryDB) -> Self {
        Category {
            id: row.id,
            name: row.name,
        }
    }
}
