use sqlx::PgPool;

use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, JobStatus};
use crate::prelude::Result;

const JOB_COLUMNS: &str = "j.id, j.title, j.description, j.requirement, j.deadline, \
     j.status, j.category_id, j.created_at, k.category_name";

pub struct JobSelector<'a> {
    pool: &'a PgPool,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        JobSelector { pool }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs j
             JOIN categories k ON j.category_id = k.id
             WHERE j.id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    pub async fn open_by_id(&self, id: i32) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs j
             JOIN categories k ON j.category_id = k.id
             WHERE j.id = $1 AND j.status = $2"
        ))
        .bind(id)
        .bind(JobStatus::Open)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_all(&self) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs j
             JOIN categories k ON j.category_id = k.id
             ORDER BY j.created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn open_newest_first(&self, limit: i64) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs j
             JOIN categories k ON j.category_id = k.id
             WHERE j.status = $1
             ORDER BY j.created_at DESC
             LIMIT $2"
        ))
        .bind(JobStatus::Open)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Homepage ordering: soonest deadline first.
    pub async fn open_by_deadline(&self, limit: i64) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs j
             JOIN categories k ON j.category_id = k.id
             WHERE j.status = $1
             ORDER BY j.deadline ASC
             LIMIT $2"
        ))
        .bind(JobStatus::Open)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::pkg::internal::adaptors::{
        categories::mutators::CategoryMutator, harness, jobs::mutators::JobMutator,
        jobs::spec::NewJob,
    };

    #[ignore = "needs the configured database"]
    #[tokio::test]
    async fn test_closed_jobs_are_invisible_to_open_by_id() {
        let pool = harness::migrated_pool().await;
        let category = CategoryMutator::new(&pool)
            .create(&harness::unique("Ops"))
            .await
            .unwrap();
        let title = harness::unique("retired-role");
        JobMutator::new(&pool)
            .create(&NewJob {
                title: title.clone(),
                description: "filled".into(),
                requirement: "n/a".into(),
                deadline: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
                status: JobStatus::Closed,
                category_id: category.id,
            })
            .await
            .unwrap();

        let selector = JobSelector::new(&pool);
        let job = selector
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .find(|j| j.title == title)
            .unwrap();
        assert!(selector.open_by_id(job.id).await.unwrap().is_none());
        assert!(selector.get_by_id(job.id).await.unwrap().is_some());
    }
}
