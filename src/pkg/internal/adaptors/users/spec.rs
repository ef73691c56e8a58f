use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::pkg::internal::auth::Role;

#[derive(FromRow, Debug, Clone)]
pub struct UserEntry {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub address: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Only what the login path needs; the hash never travels further.
#[derive(FromRow, Debug)]
pub struct UserCredentials {
    pub id: i32,
    pub password_hash: String,
}
