use std::sync::Arc;

use diesel::prelude::*;

use ledgerlink_core::categories::{Category, CategoryRepositoryTrait};
use ledgerlink_core::errors::Result;

use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::categories;

use super::model::CategoryDB;

pub struct CategoryRepository {
    pool: Arc<DbPool>,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl CategoryRepositoryTrait for CategoryRepository {
    fn load_all(&self) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = categories::table
            .order(categories::id.asc())
            .load::<CategoryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }
}
