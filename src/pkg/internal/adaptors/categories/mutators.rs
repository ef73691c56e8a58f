use sqlx::PgPool;

use crate::errors::is_foreign_key_violation;
use crate::pkg::internal::adaptors::categories::spec::{CategoryDelete, CategoryEntry};
use crate::prelude::{AppError, Result};

pub struct CategoryMutator<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryMutator<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        CategoryMutator { pool }
    }

    pub async fn create(&self, name: &str) -> Result<CategoryEntry> {
        let row = sqlx::query_as::<_, CategoryEntry>(
            "INSERT INTO categories (category_name) VALUES ($1) RETURNING id, category_name",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await?;
        Ok(row)
    }

    /// The jobs FK is ON DELETE RESTRICT, so a job created between the
    /// handler's in-use check and this delete still cannot orphan anything.
    pub async fn delete(&self, id: i32) -> Result<CategoryDelete> {
        match sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
        {
            Ok(_) => Ok(CategoryDelete::Deleted),
            Err(e) if is_foreign_key_violation(&e) => Ok(CategoryDelete::InUse),
            Err(e) => Err(AppError::Database(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::pkg::internal::adaptors::{
        categories::selectors::CategorySelector, harness, jobs::mutators::JobMutator,
        jobs::spec::{JobStatus, NewJob},
    };

    #[ignore = "needs the configured database"]
    #[tokio::test]
    async fn test_category_with_jobs_cannot_be_deleted() {
        let pool = harness::migrated_pool().await;
        let mutator = CategoryMutator::new(&pool);
        let used = mutator.create(&harness::unique("Staffed")).await.unwrap();
        JobMutator::new(&pool)
            .create(&NewJob {
                title: harness::unique("open-role"),
                description: "hiring".into(),
                requirement: "n/a".into(),
                deadline: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
                status: JobStatus::Open,
                category_id: used.id,
            })
            .await
            .unwrap();

        assert_eq!(mutator.delete(used.id).await.unwrap(), CategoryDelete::InUse);
        let categories = CategorySelector::new(&pool).get_all().await.unwrap();
        assert!(categories.iter().any(|c| c.id == used.id));

        let unused = mutator.create(&harness::unique("Empty")).await.unwrap();
        assert_eq!(
            mutator.delete(unused.id).await.unwrap(),
            CategoryDelete::Deleted
        );
    }
}
