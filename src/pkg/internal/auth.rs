use chrono::{DateTime, Utc};
use sqlx::prelude::{FromRow, Type};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{conf::settings, prelude::Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// Authenticated identity resolved once per request from the session cookie.
#[derive(FromRow, Debug, Clone)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
    pub role: Role,
    pub email: String,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(FromRow, Debug)]
pub struct Session {
    pub session_id: Uuid,
    pub user_id: i32,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Issues a session and sweeps out every expired row while at it, so the
    /// table stays bounded even for cookies that are never presented again.
    pub async fn create(pool: &PgPool, user_id: i32) -> Result<Self> {
        let swept = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
            .execute(pool)
            .await?
            .rows_affected();
        if swept > 0 {
            tracing::debug!("swept {} expired sessions", swept);
        }
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (session_id, user_id, expires_at)
            VALUES ($1, $2, now() + make_interval(hours => $3))
            RETURNING session_id, user_id, expires_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(settings.session_ttl_hours as i32)
        .fetch_one(pool)
        .await?;
        tracing::debug!(
            "session {} issued, expires at {}",
            session.session_id,
            session.expires_at
        );
        Ok(session)
    }

    /// Looks up a live session and the user behind it. Expired sessions and
    /// sessions whose user row has vanished are destroyed on the spot, so the
    /// table does not accumulate dead rows.
    pub async fn resolve(pool: &PgPool, session_id: Uuid) -> Result<Option<CurrentUser>> {
        let session = sqlx::query_as::<_, Session>(
            "SELECT session_id, user_id, expires_at FROM sessions WHERE session_id = $1",
        )
        .bind(session_id)
        .fetch_optional(pool)
        .await?;
        let Some(session) = session else {
            return Ok(None);
        };
        if session.expires_at <= Utc::now() {
            tracing::debug!("session {} expired, removing", session_id);
            Session::destroy(pool, session_id).await?;
            return Ok(None);
        }
        let user = sqlx::query_as::<_, CurrentUser>(
            "SELECT id, username, role, email FROM users WHERE id = $1",
        )
        .bind(session.user_id)
        .fetch_optional(pool)
        .await?;
        if user.is_none() {
            tracing::warn!("session {} points at a deleted user, destroying", session_id);
            Session::destroy(pool, session_id).await?;
        }
        Ok(user)
    }

    pub async fn destroy(pool: &PgPool, session_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn test_is_admin() {
        let admin = CurrentUser {
            id: 1,
            username: "root".into(),
            role: Role::Admin,
            email: "root@hustlink.io".into(),
        };
        assert!(admin.is_admin());
        let user = CurrentUser { role: Role::User, ..admin };
        assert!(!user.is_admin());
    }

    #[ignore = "needs the configured database"]
    #[tokio::test]
    async fn test_expired_session_is_removed_on_resolve() {
        use crate::pkg::internal::adaptors::{harness, users::mutators::UserMutator};

        let pool = harness::migrated_pool().await;
        let user = UserMutator::new(&pool)
            .create(
                &harness::unique("stale"),
                "not-a-real-hash",
                &harness::unique_email("stale"),
                "",
            )
            .await
            .unwrap();
        let session = Session::create(&pool, user.id).await.unwrap();
        sqlx::query(
            "UPDATE sessions SET expires_at = now() - interval '1 minute'
             WHERE session_id = $1",
        )
        .bind(session.session_id)
        .execute(&pool)
        .await
        .unwrap();

        assert!(Session::resolve(&pool, session.session_id)
            .await
            .unwrap()
            .is_none());
        let remaining: i64 =
            sqlx::query_scalar("SELECT count(*) FROM sessions WHERE session_id = $1")
                .bind(session.session_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(remaining, 0);
    }

    #[ignore = "needs the configured database"]
    #[tokio::test]
    async fn test_login_sweeps_expired_sessions_of_abandoned_cookies() {
        use crate::pkg::internal::adaptors::{harness, users::mutators::UserMutator};

        let pool = harness::migrated_pool().await;
        let user = UserMutator::new(&pool)
            .create(
                &harness::unique("sweep"),
                "not-a-real-hash",
                &harness::unique_email("sweep"),
                "",
            )
            .await
            .unwrap();
        let abandoned = Session::create(&pool, user.id).await.unwrap();
        sqlx::query(
            "UPDATE sessions SET expires_at = now() - interval '1 minute'
             WHERE session_id = $1",
        )
        .bind(abandoned.session_id)
        .execute(&pool)
        .await
        .unwrap();

        // the expired row goes away on the next login, never mind whose
        Session::create(&pool, user.id).await.unwrap();
        let remaining: i64 =
            sqlx::query_scalar("SELECT count(*) FROM sessions WHERE session_id = $1")
                .bind(abandoned.session_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(remaining, 0);
    }
}
