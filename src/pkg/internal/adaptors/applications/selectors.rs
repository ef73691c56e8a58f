use sqlx::PgPool;

use crate::pkg::internal::adaptors::applications::spec::ApplicationEntry;
use crate::prelude::Result;

const APPLICATION_COLUMNS: &str =
    "a.id, a.category_id, a.applied_at, u.username, u.email, k.category_name";

pub struct ApplicationSelector<'a> {
    pool: &'a PgPool,
}

impl<'a> ApplicationSelector<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        ApplicationSelector { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<ApplicationEntry>> {
        let rows = sqlx::query_as::<_, ApplicationEntry>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications a
             JOIN users u ON a.user_id = u.id
             JOIN categories k ON a.category_id = k.id
             ORDER BY a.applied_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<ApplicationEntry>> {
        let rows = sqlx::query_as::<_, ApplicationEntry>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications a
             JOIN users u ON a.user_id = u.id
             JOIN categories k ON a.category_id = k.id
             WHERE a.user_id = $1
             ORDER BY a.applied_at DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }
}
