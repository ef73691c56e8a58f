use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
    Extension,
};
use axum_extra::extract::SignedCookieJar;
use uuid::Uuid;

use crate::{
    pkg::{
        internal::auth::{CurrentUser, Session},
        server::{state::AppState, uispec::ErrorPage},
    },
    prelude::Result,
};

pub const SESSION_COOKIE: &str = "hustlink_session";

/// Identity resolved by `identify`, present on every request. Empty for
/// anonymous visitors.
#[derive(Clone)]
pub struct MaybeUser(pub Option<Arc<CurrentUser>>);

/// Resolves the session cookie into an immutable identity once, up front.
/// Handlers never touch session state directly.
pub async fn identify(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let jar = SignedCookieJar::from_headers(request.headers(), state.cookie_key.clone());
    let mut current = None;
    if let Some(cookie) = jar.get(SESSION_COOKIE).filter(|c| !c.value().is_empty()) {
        if let Ok(session_id) = cookie.value().parse::<Uuid>() {
            current = Session::resolve(&state.db_pool, session_id).await?;
        }
    }
    request.extensions_mut().insert(MaybeUser(current.map(Arc::new)));
    Ok(next.run(request).await)
}

pub async fn require_user(mut request: Request, next: Next) -> Response {
    let user = request
        .extensions()
        .get::<MaybeUser>()
        .and_then(|m| m.0.clone());
    match user {
        Some(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        None => Redirect::to("/login").into_response(),
    }
}

/// Composed after `require_user`, so the identity extension is present.
pub async fn require_admin(
    Extension(user): Extension<Arc<CurrentUser>>,
    request: Request,
    next: Next,
) -> Result<Response> {
    if !user.is_admin() {
        tracing::warn!("user {} denied admin access", &user.username);
        let page = ErrorPage::access_denied(Some((*user).clone()));
        return Ok((StatusCode::FORBIDDEN, Html(page.render()?)).into_response());
    }
    Ok(next.run(request).await)
}
