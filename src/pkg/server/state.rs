use axum_extra::extract::cookie::Key;
use sqlx::{postgres::PgPoolOptions, PgPool, Pool, Postgres};
use std::sync::Arc;

use crate::{conf::settings, prelude::Result};

pub fn db_pool() -> Result<Pool<Postgres>> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy(&settings.database_url())?;
    Ok(pool)
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: Arc<PgPool>,
    pub cookie_key: Key,
}

impl AppState {
    pub fn new() -> Result<AppState> {
        Ok(AppState {
            db_pool: Arc::new(db_pool()?),
            cookie_key: Key::derive_from(settings.session_secret.as_bytes()),
        })
    }
}
