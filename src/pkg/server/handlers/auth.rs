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
            auth::Session,
            password::{hash_password, verify_password, verify_timing_pad},
        },
        server::{
            flash::{self, Flash},
            middlewares::authn::{MaybeUser, SESSION_COOKIE},
            state::AppState,
            uispec::{LoginPage, RegisterPage},
        },
    },
    prelude::{AppError, Result},
};

#[derive(Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterInput {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

impl RegisterInput {
    /// First failing check wins; messages match the rendered form.
    pub fn validate(&self) -> Option<&'static str> {
        if self.username.is_empty() || self.password.is_empty() || self.email.is_empty() {
            return Some("Username, password, and email are required!");
        }
        if self.password.len() < 3 {
            return Some("Password must be at least 3 characters!");
        }
        None
    }
}

pub async fn login_form(
    Extension(MaybeUser(user)): Extension<MaybeUser>,
    Query(flash): Query<Flash>,
) -> Result<Response> {
    if user.is_some() {
        return Ok(Redirect::to("/dashboard").into_response());
    }
    let template = LoginPage {
        title: "Login - HustLink".into(),
        user: None,
        error: flash.error,
        success: flash.success,
    };
    Ok(Html(template.render()?).into_response())
}

pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<LoginInput>,
) -> Result<Response> {
    if input.username.is_empty() || input.password.is_empty() {
        return login_error("Username and password are required!");
    }
    let credentials = UserSelector::new(&state.db_pool)
        .credentials_by_username(&input.username)
        .await?;
    let verified = match &credentials {
        Some(c) => verify_password(&input.password, &c.password_hash).await?,
        // a skipped verification would answer faster and give the username
        // away, so burn one anyway
        None => {
            verify_timing_pad(&input.password).await?;
            false
        }
    };
    // same message either way, the form never reveals which field was wrong
    let Some(credentials) = credentials.filter(|_| verified) else {
        return login_error("Invalid username or password!");
    };

    let session = Session::create(&state.db_pool, credentials.id).await?;
    tracing::info!("user logged in: {}", &input.username);
    let jar = SignedCookieJar::from_headers(&headers, state.cookie_key.clone());
    let cookie = Cookie::build((SESSION_COOKIE, session.session_id.to_string()))
        .path("/")
        .http_only(true)
        .build();
    Ok((jar.add(cookie), Redirect::to("/dashboard")).into_response())
}

fn login_error(message: &str) -> Result<Response> {
    let template = LoginPage {
        title: "Login - HustLink".into(),
        user: None,
        error: Some(message.to_string()),
        success: None,
    };
    Ok(Html(template.render()?).into_response())
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(MaybeUser(user)): Extension<MaybeUser>,
    headers: HeaderMap,
) -> Result<Response> {
    let jar = SignedCookieJar::from_headers(&headers, state.cookie_key.clone());
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Ok(session_id) = cookie.value().parse::<Uuid>() {
            Session::destroy(&state.db_pool, session_id).await?;
        }
    }
    if let Some(user) = user {
        tracing::info!("user logged out: {}", &user.username);
    }
    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.set_path("/");
    Ok((jar.remove(removal), Redirect::to("/")).into_response())
}

pub async fn register_form(
    Extension(MaybeUser(user)): Extension<MaybeUser>,
) -> Result<Response> {
    if user.is_some() {
        return Ok(Redirect::to("/dashboard").into_response());
    }
    register_error_page(None)
}

pub async fn register(
    State(state): State<AppState>,
    Form(input): Form<RegisterInput>,
) -> Result<Response> {
    if let Some(message) = input.validate() {
        return register_error_page(Some(message.to_string()));
    }
    let taken = UserSelector::new(&state.db_pool)
        .username_or_email_taken(&input.username, &input.email)
        .await?;
    if taken {
        return register_error_page(Some("Username or email already exists!".to_string()));
    }

    let hashed = hash_password(&input.password).await?;
    let created = UserMutator::new(&state.db_pool)
        .create(&input.username, &hashed, &input.email, &input.address)
        .await;
    match created {
        Ok(user) => {
            tracing::info!("new user registered: {} (id {})", &user.username, user.id);
            Ok(flash::redirect_success("/login", "Registration successful! Please login.")
                .into_response())
        }
        // a concurrent registration can slip past the existence check; the
        // unique indexes report it the same way
        Err(AppError::Database(e)) if is_unique_violation(&e) => {
            register_error_page(Some("Username or email already exists!".to_string()))
        }
        Err(e) => Err(e),
    }
}

fn register_error_page(error: Option<String>) -> Result<Response> {
    let template = RegisterPage {
        title: "Register - HustLink".into(),
        user: None,
        error,
    };
    Ok(Html(template.render()?).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(username: &str, password: &str, email: &str) -> RegisterInput {
        RegisterInput {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            address: String::new(),
        }
    }

    #[test]
    fn test_register_requires_all_fields() {
        assert_eq!(
            input("", "pw123", "a@x.com").validate(),
            Some("Username, password, and email are required!")
        );
        assert_eq!(
            input("alice", "pw123", "").validate(),
            Some("Username, password, and email are required!")
        );
    }

    #[test]
    fn test_register_rejects_short_password() {
        assert_eq!(
            input("alice", "ab", "a@x.com").validate(),
            Some("Password must be at least 3 characters!")
        );
    }

    #[test]
    fn test_register_accepts_valid_input() {
        assert_eq!(input("alice", "pw123", "a@x.com").validate(), None);
    }
}
