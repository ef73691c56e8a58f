use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use askama::Template;

use crate::pkg::server::uispec::ErrorPage;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Marker left on the 500 response so the layer that knows the visitor's
/// identity can swap in a view with their nav.
#[derive(Debug, Clone, Copy)]
pub struct InternalErrorPage;

/// Raw error text stays server-side; clients only ever see the rendered
/// generic 500 view.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", self);
        let mut response =
            render_or_plain(StatusCode::INTERNAL_SERVER_ERROR, ErrorPage::internal(None));
        response.extensions_mut().insert(InternalErrorPage);
        response
    }
}

pub fn render_or_plain<T: Template>(status: StatusCode, page: T) -> Response {
    match page.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            tracing::error!("error view failed to render: {}", e);
            (status, "something went wrong").into_response()
        }
    }
}

fn pg_error_code(e: &sqlx::Error) -> Option<String> {
    match e {
        sqlx::Error::Database(db) => db.code().map(|c| c.into_owned()),
        _ => None,
    }
}

pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    pg_error_code(e).as_deref() == Some("23505")
}

pub fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    pg_error_code(e).as_deref() == Some("23503")
}
