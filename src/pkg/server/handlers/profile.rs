use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    errors::is_unique_violation,
    pkg::{
        internal::{
            adaptors::users::{mutators::UserMutator, selectors::UserSelector},
            auth::{CurrentUser, Session},
        },
        server::{
            flash::{self, Flash},
            middlewares::authn::SESSION_COOKIE,
            state::AppState,
            uispec::ProfilePage,
        },
    },
    prelude::{AppError, Result},
};

#[derive(Deserialize)]
pub struct ProfileInput {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

pub async fn show(
    State(state): State<AppState>,
    headers: HeaderMap,
    Extension(user): Extension<Arc<CurrentUser>>,
    Query(flash): Query<Flash>,
) -> Result<Response> {
    let Some(profile) = UserSelector::new(&state.db_pool).get_by_id(user.id).await? else {
        // account vanished between identification and now; drop the session
        let jar = SignedCookieJar::from_headers(&headers, state.cookie_key.clone());
        if let Some(cookie) = jar.get(SESSION_COOKIE) {
            if let Ok(session_id) = cookie.value().parse::<Uuid>() {
                Session::destroy(&state.db_pool, session_id).await?;
            }
        }
        let mut removal = Cookie::new(SESSION_COOKIE, "");
        removal.set_path("/");
        return Ok((jar.remove(removal), Redirect::to("/login")).into_response());
    };

    let template = ProfilePage {
        title: "My Profile - HustLink".into(),
        user: Some((*user).clone()),
        profile,
        success: flash.success,
        error: flash.error,
    };
    Ok(Html(template.render()?).into_response())
}

/// Identity is re-resolved from storage on every request, so the updated
/// username/email show up immediately without a fresh login.
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
    Form(input): Form<ProfileInput>,
) -> Result<Redirect> {
    if input.username.is_empty() || input.email.is_empty() {
        return Ok(flash::redirect_error("/profile", "Username and email are required"));
    }
    let updated = UserMutator::new(&state.db_pool)
        .update_profile(user.id, &input.username, &input.email, &input.address)
        .await;
    match updated {
        Ok(()) => Ok(flash::redirect_success("/profile", "Profile updated successfully!")),
        Err(AppError::Database(e)) if is_unique_violation(&e) => {
            Ok(flash::redirect_error("/profile", "Username or email already taken"))
        }
        Err(e) => {
            tracing::error!("failed to update profile for {}: {}", user.id, e);
            Ok(flash::redirect_error("/profile", "Failed to update profile"))
        }
    }
}
