use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use sqlx::prelude::{FromRow, Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Deserialize)]
#[sqlx(type_name = "job_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Closed,
}

impl JobStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, JobStatus::Open)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Open => write!(f, "Open"),
            JobStatus::Closed => write!(f, "Closed"),
        }
    }
}

/// Job row joined with its category name; every listing and detail view
/// wants the pair together.
#[derive(FromRow, Debug, Clone)]
pub struct JobEntry {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub requirement: String,
    pub deadline: NaiveDate,
    pub status: JobStatus,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub category_name: String,
}

#[derive(Debug)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub requirement: String,
    pub deadline: NaiveDate,
    pub status: JobStatus,
    pub category_id: i32,
}
