use crate::{conf::settings, prelude::Result};
use sqlx::{migrate::Migrator, postgres::PgPoolOptions};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn apply() -> Result<()> {
    let pool = PgPoolOptions::new()
        .connect(&settings.database_url())
        .await?;
    tracing::debug!("connected to db");
    MIGRATOR.run(&pool).await?;
    println!("Migrations applied successfully");
    Ok(())
}
