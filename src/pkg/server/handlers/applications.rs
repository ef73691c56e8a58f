use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension,
};

use crate::{
    pkg::{
        internal::{
            adaptors::{
                applications::{mutators::ApplicationMutator, spec::ApplyOutcome},
                jobs::selectors::JobSelector,
            },
            auth::CurrentUser,
        },
        server::{flash, state::AppState, uispec::ErrorPage},
    },
    prelude::Result,
};

pub async fn apply(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
    Extension(user): Extension<Arc<CurrentUser>>,
) -> Result<Response> {
    if user.is_admin() {
        let page = ErrorPage::of(
            "Access Denied",
            "Admins cannot apply for jobs.",
            Some((*user).clone()),
        );
        return Ok((StatusCode::FORBIDDEN, Html(page.render()?)).into_response());
    }

    let Some(job) = JobSelector::new(&state.db_pool).open_by_id(job_id).await? else {
        let page = ErrorPage::of(
            "Job Not Found",
            "Job not found or no longer accepting applications.",
            Some((*user).clone()),
        );
        return Ok((StatusCode::NOT_FOUND, Html(page.render()?)).into_response());
    };

    // applications are keyed by the job's category, so holding one in the
    // same category counts as already applied
    match ApplicationMutator::new(&state.db_pool)
        .apply(user.id, job.category_id)
        .await?
    {
        ApplyOutcome::AlreadyApplied => Ok(flash::redirect_error(
            "/dashboard",
            "You have already applied for this job",
        )
        .into_response()),
        ApplyOutcome::Submitted => {
            tracing::info!("user {} applied to job {}", &user.username, job.id);
            Ok(
                flash::redirect_success("/dashboard", "Application submitted successfully!")
                    .into_response(),
            )
        }
    }
}

pub async fn withdraw(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Extension(user): Extension<Arc<CurrentUser>>,
) -> Result<Response> {
    ApplicationMutator::new(&state.db_pool)
        .withdraw(id, user.id)
        .await?;
    Ok(
        flash::redirect_success("/dashboard", "Application withdrawn successfully!")
            .into_response(),
    )
}

pub async fn admin_delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response> {
    ApplicationMutator::new(&state.db_pool).delete(id).await?;
    Ok(
        flash::redirect_success("/dashboard", "Application deleted successfully!")
            .into_response(),
    )
}
