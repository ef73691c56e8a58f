use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Application joined with applicant and category; applications are keyed by
/// category rather than job, so there is no job column to join on.
#[derive(FromRow, Debug, Clone)]
pub struct ApplicationEntry {
    pub id: i32,
    pub category_id: i32,
    pub applied_at: DateTime<Utc>,
    pub username: String,
    pub email: String,
    pub category_name: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    Submitted,
    AlreadyApplied,
}
