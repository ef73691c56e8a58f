use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension,
};

use crate::{
    pkg::{
        internal::{adaptors::jobs::selectors::JobSelector, auth::CurrentUser},
        server::{
            middlewares::authn::MaybeUser,
            state::AppState,
            uispec::{AboutPage, ContactPage, IndexPage, NotFoundPage},
        },
    },
    prelude::Result,
};

const HOMEPAGE_JOB_LIMIT: i64 = 6;

pub async fn home(
    State(state): State<AppState>,
    Extension(MaybeUser(user)): Extension<MaybeUser>,
) -> Result<Html<String>> {
    let jobs = JobSelector::new(&state.db_pool)
        .open_by_deadline(HOMEPAGE_JOB_LIMIT)
        .await?;
    let template = IndexPage {
        title: "HustLink - Portal Karir Terpadu".into(),
        user: user.as_deref().cloned(),
        jobs,
    };
    Ok(Html(template.render()?))
}

pub async fn about(Extension(MaybeUser(user)): Extension<MaybeUser>) -> Result<Html<String>> {
    let template = AboutPage {
        title: "About HustLink - Portal Karir Terpadu".into(),
        user: user.as_deref().cloned(),
    };
    Ok(Html(template.render()?))
}

pub async fn contact(Extension(MaybeUser(user)): Extension<MaybeUser>) -> Result<Html<String>> {
    let template = ContactPage {
        title: "Contact Us - HustLink".into(),
        user: user.as_deref().cloned(),
    };
    Ok(Html(template.render()?))
}

pub async fn not_found(Extension(MaybeUser(user)): Extension<MaybeUser>) -> Result<Response> {
    render_not_found(user.as_deref().cloned())
}

/// Shared 404 rendering for fallback and unknown-id paths.
pub fn render_not_found(user: Option<CurrentUser>) -> Result<Response> {
    let body = NotFoundPage::with_user(user).render()?;
    Ok((StatusCode::NOT_FOUND, Html(body)).into_response())
}
