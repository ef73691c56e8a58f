use sqlx::PgPool;

use crate::pkg::internal::adaptors::categories::spec::CategoryEntry;
use crate::prelude::Result;

pub struct CategorySelector<'a> {
    pool: &'a PgPool,
}

impl<'a> CategorySelector<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        CategorySelector { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<CategoryEntry>> {
        let rows = sqlx::query_as::<_, CategoryEntry>(
            "SELECT id, category_name FROM categories ORDER BY category_name",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn referenced_by_jobs(&self, id: i32) -> Result<bool> {
        let referenced = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM jobs WHERE category_id = $1)",
        )
        .bind(id)
        .fetch_one(self.pool)
        .await?;
        Ok(referenced)
    }
}
