use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
    Extension, Form,
};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::{
                categories::selectors::CategorySelector,
                jobs::{
                    mutators::JobMutator,
                    selectors::JobSelector,
                    spec::{JobStatus, NewJob},
                },
            },
            auth::CurrentUser,
        },
        server::{
            flash,
            handlers::pages::render_not_found,
            middlewares::authn::MaybeUser,
            state::AppState,
            uispec::{JobCreatePage, JobDetailPage, JobEditPage, JobsPage},
        },
    },
    prelude::Result,
};

#[derive(Deserialize, Validate)]
pub struct CreateJobInput {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub requirement: String,
    #[serde(default)]
    pub deadline: String,
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub category_id: String,
}

#[derive(Deserialize)]
pub struct UpdateJobInput {
    pub title: String,
    pub description: String,
    pub requirement: String,
    pub deadline: String,
    pub status: JobStatus,
    pub category_id: i32,
}

pub async fn list(
    State(state): State<AppState>,
    Extension(MaybeUser(user)): Extension<MaybeUser>,
) -> Result<Html<String>> {
    let jobs = JobSelector::new(&state.db_pool).get_all().await?;
    let template = JobsPage {
        title: "All Jobs - HustLink".into(),
        user: user.as_deref().cloned(),
        jobs,
    };
    Ok(Html(template.render()?))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Extension(MaybeUser(user)): Extension<MaybeUser>,
) -> Result<Response> {
    let Some(job) = JobSelector::new(&state.db_pool).get_by_id(id).await? else {
        return render_not_found(user.as_deref().cloned());
    };
    let template = JobDetailPage {
        title: format!("{} - HustLink", &job.title),
        user: user.as_deref().cloned(),
        job,
    };
    Ok(Html(template.render()?).into_response())
}

pub async fn create_form(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
) -> Result<Response> {
    create_page(&state, &user, None).await
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
    Form(input): Form<CreateJobInput>,
) -> Result<Response> {
    let category_id = input.category_id.parse::<i32>().ok();
    if input.validate().is_err() || input.deadline.is_empty() || category_id.is_none() {
        return create_page(&state, &user, Some("All fields are required!")).await;
    }
    let Ok(deadline) = NaiveDate::parse_from_str(&input.deadline, "%Y-%m-%d") else {
        return create_page(&state, &user, Some("Invalid deadline date!")).await;
    };

    let job = NewJob {
        title: input.title,
        description: input.description,
        requirement: input.requirement,
        deadline,
        status: input.status.unwrap_or(JobStatus::Open),
        category_id: category_id.unwrap_or_default(),
    };
    JobMutator::new(&state.db_pool).create(&job).await?;
    tracing::info!("job created: {}", &job.title);
    Ok(flash::redirect_success("/dashboard", "Job created successfully!").into_response())
}

/// Re-renders the create form with the category list reloaded.
async fn create_page(
    state: &AppState,
    user: &CurrentUser,
    error: Option<&str>,
) -> Result<Response> {
    let categories = CategorySelector::new(&state.db_pool).get_all().await?;
    let template = JobCreatePage {
        title: "Create New Job - HustLink".into(),
        user: Some(user.clone()),
        categories,
        error: error.map(str::to_string),
    };
    Ok(Html(template.render()?).into_response())
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Extension(user): Extension<Arc<CurrentUser>>,
) -> Result<Response> {
    let pool = &*state.db_pool;
    let job_selector = JobSelector::new(pool);
    let category_selector = CategorySelector::new(pool);
    let (job, categories) = tokio::try_join!(
        job_selector.get_by_id(id),
        category_selector.get_all(),
    )?;
    let Some(job) = job else {
        return render_not_found(Some((*user).clone()));
    };
    let template = JobEditPage {
        title: "Edit Job - HustLink".into(),
        user: Some((*user).clone()),
        job,
        categories,
    };
    Ok(Html(template.render()?).into_response())
}

/// Every editable field is resupplied by the form; no partial updates.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(input): Form<UpdateJobInput>,
) -> Result<Response> {
    let Ok(deadline) = NaiveDate::parse_from_str(&input.deadline, "%Y-%m-%d") else {
        return Ok(flash::redirect_error("/dashboard", "Failed to update job").into_response());
    };
    let job = NewJob {
        title: input.title,
        description: input.description,
        requirement: input.requirement,
        deadline,
        status: input.status,
        category_id: input.category_id,
    };
    JobMutator::new(&state.db_pool).update(id, &job).await?;
    Ok(flash::redirect_success("/dashboard", "Job updated successfully!").into_response())
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Response> {
    match JobMutator::new(&state.db_pool).delete(id).await {
        Ok(()) => {
            Ok(flash::redirect_success("/dashboard", "Job deleted successfully!").into_response())
        }
        Err(e) => {
            tracing::error!("failed to delete job {}: {}", id, e);
            Ok(flash::redirect_error("/dashboard", "Failed to delete job").into_response())
        }
    }
}
