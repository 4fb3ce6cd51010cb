use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Name of the sentinel category assigned when no keyword matches.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A row of the fixed category reference set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Read access to the category reference table.
pub trait CategoryRepositoryTrait: Send + Sync {
    /// All categories, ordered by id.
    fn load_all(&self) -> Result<Vec<Category>>;
}
