use sqlx::PgPool;

use crate::pkg::internal::adaptors::jobs::spec::NewJob;
use crate::prelude::Result;

pub struct JobMutator<'a> {
    pool: &'a PgPool,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&self, job: &NewJob) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO jobs (title, description, requirement, deadline, status, category_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.requirement)
        .bind(job.deadline)
        .bind(job.status)
        .bind(job.category_id)
        .execute(self.pool)
        .await?;
        Ok(())
    }

    /// Full overwrite; the edit form resupplies every field.
    pub async fn update(&self, id: i32, job: &NewJob) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE jobs SET title = $2, description = $3, requirement = $4,
                deadline = $5, status = $6, category_id = $7
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.requirement)
        .bind(job.deadline)
        .bind(job.status)
        .bind(job.category_id)
        .execute(self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
