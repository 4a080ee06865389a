//! Categories repository

use sqlx::{Pool, Sqlite};

use crate::{error::AppResult, models::Category};

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Sqlite>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List every category in store order.
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, name FROM categories")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Find a category by id.
    pub async fn find(&self, id: i64) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
