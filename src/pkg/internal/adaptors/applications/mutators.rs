use sqlx::PgPool;

use crate::pkg::internal::adaptors::applications::spec::ApplyOutcome;
use crate::prelude::Result;

pub struct ApplicationMutator<'a> {
    pool: &'a PgPool,
}

impl<'a> ApplicationMutator<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        ApplicationMutator { pool }
    }

    /// One application per user per category. The unique constraint decides,
    /// so two concurrent submissions cannot both land.
    pub async fn apply(&self, user_id: i32, category_id: i32) -> Result<ApplyOutcome> {
        let result = sqlx::query(
            r#"
            INSERT INTO applications (user_id, category_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, category_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(category_id)
        .execute(self.pool)
        .await?;
        if result.rows_affected() == 0 {
            Ok(ApplyOutcome::AlreadyApplied)
        } else {
            Ok(ApplyOutcome::Submitted)
        }
    }

    /// Scoped to the owner; a guessed id belonging to someone else deletes
    /// nothing.
    pub async fn withdraw(&self, id: i32, user_id: i32) -> Result<()> {
        sqlx::query("DELETE FROM applications WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(self.pool)
            .await?;
        Ok(())
    }

    /// Admin removal, no ownership check.
    pub async fn delete(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use super::*;
    use crate::pkg::internal::adaptors::{
        applications::selectors::ApplicationSelector, categories::mutators::CategoryMutator,
        categories::spec::CategoryEntry, harness, users::mutators::UserMutator,
        users::spec::UserEntry,
    };

    async fn applicant(pool: &PgPool, prefix: &str) -> UserEntry {
        UserMutator::new(pool)
            .create(
                &harness::unique(prefix),
                "not-a-real-hash",
                &harness::unique_email(prefix),
                "",
            )
            .await
            .unwrap()
    }

    async fn category(pool: &PgPool, prefix: &str) -> CategoryEntry {
        CategoryMutator::new(pool)
            .create(&harness::unique(prefix))
            .await
            .unwrap()
    }

    #[ignore = "needs the configured database"]
    #[tokio::test]
    async fn test_second_application_in_the_same_category_is_rejected() {
        let pool = harness::migrated_pool().await;
        let user = applicant(&pool, "eager").await;
        let category = category(&pool, "Engineering").await;

        let mutator = ApplicationMutator::new(&pool);
        assert_eq!(
            mutator.apply(user.id, category.id).await.unwrap(),
            ApplyOutcome::Submitted
        );
        assert_eq!(
            mutator.apply(user.id, category.id).await.unwrap(),
            ApplyOutcome::AlreadyApplied
        );
        assert_eq!(
            ApplicationSelector::new(&pool)
                .get_for_user(user.id)
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[ignore = "needs the configured database"]
    #[tokio::test]
    async fn test_withdraw_only_deletes_the_callers_application() {
        let pool = harness::migrated_pool().await;
        let owner = applicant(&pool, "owner").await;
        let stranger = applicant(&pool, "stranger").await;
        let category = category(&pool, "Design").await;

        let mutator = ApplicationMutator::new(&pool);
        mutator.apply(owner.id, category.id).await.unwrap();
        let selector = ApplicationSelector::new(&pool);
        let id = selector.get_for_user(owner.id).await.unwrap()[0].id;

        // someone else guessing the id deletes nothing
        mutator.withdraw(id, stranger.id).await.unwrap();
        assert_eq!(selector.get_for_user(owner.id).await.unwrap().len(), 1);

        mutator.withdraw(id, owner.id).await.unwrap();
        assert!(selector.get_for_user(owner.id).await.unwrap().is_empty());
    }
}
