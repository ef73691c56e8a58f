use sqlx::PgPool;

use crate::pkg::internal::adaptors::users::spec::UserEntry;
use crate::prelude::Result;

pub struct UserMutator<'a> {
    pool: &'a PgPool,
}

impl<'a> UserMutator<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        UserMutator { pool }
    }

    /// Registration path; role always starts out as 'user'.
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        email: &str,
        address: &str,
    ) -> Result<UserEntry> {
        let row = sqlx::query_as::<_, UserEntry>(
            r#"
            INSERT INTO users (username, password_hash, email, address)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, address, role, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(email)
        .bind(address)
        .fetch_one(self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update_profile(
        &self,
        id: i32,
        username: &str,
        email: &str,
        address: &str,
    ) -> Result<()> {
        sqlx::query("UPDATE users SET username = $2, email = $3, address = $4 WHERE id = $1")
            .bind(id)
            .bind(username)
            .bind(email)
            .bind(address)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
