use sqlx::PgPool;

use crate::pkg::internal::adaptors::users::spec::{UserCredentials, UserEntry};
use crate::prelude::Result;

pub struct UserSelector<'a> {
    pool: &'a PgPool,
}

impl<'a> UserSelector<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        UserSelector { pool }
    }

    pub async fn credentials_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>> {
        let row = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, password_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<UserEntry>> {
        let row = sqlx::query_as::<_, UserEntry>(
            "SELECT id, username, email, address, role, created_at
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    /// Single query covering both uniqueness checks at registration.
    pub async fn username_or_email_taken(&self, username: &str, email: &str) -> Result<bool> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE username = $1 OR email = $2)",
        )
        .bind(username)
        .bind(email)
        .fetch_one(self.pool)
        .await?;
        Ok(taken)
    }
}
