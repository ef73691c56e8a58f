use axum::{extract::Request, middleware::Next, response::Response};

use crate::{
    errors::{render_or_plain, InternalErrorPage},
    pkg::server::{middlewares::authn::MaybeUser, uispec::ErrorPage},
};

/// Sits inside `identify`. Failed handlers render the 500 view without an
/// identity; when the request carried one, this layer re-renders the body so
/// the visitor keeps their nav.
pub async fn personalize_errors(request: Request, next: Next) -> Response {
    let user = request
        .extensions()
        .get::<MaybeUser>()
        .and_then(|m| m.0.clone());
    let response = next.run(request).await;
    if response.extensions().get::<InternalErrorPage>().is_none() {
        return response;
    }
    let Some(user) = user else {
        return response;
    };
    let status = response.status();
    render_or_plain(status, ErrorPage::internal(Some((*user).clone())))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware::{from_fn, Next},
        response::{IntoResponse, Response},
        routing::get,
        Router,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use super::personalize_errors;
    use crate::errors::AppError;
    use crate::pkg::internal::auth::{CurrentUser, Role};
    use crate::pkg::server::middlewares::authn::MaybeUser;

    async fn boom() -> Response {
        AppError::from(std::io::Error::new(
            std::io::ErrorKind::Other,
            "backend unavailable",
        ))
        .into_response()
    }

    fn failing_app(identity: Option<CurrentUser>) -> Router {
        Router::new()
            .route("/boom", get(boom))
            .layer(from_fn(personalize_errors))
            .layer(from_fn(move |mut request: axum::extract::Request, next: Next| {
                let identity = identity.clone();
                async move {
                    request
                        .extensions_mut()
                        .insert(MaybeUser(identity.map(Arc::new)));
                    next.run(request).await
                }
            }))
    }

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[traced_test]
    #[tokio::test]
    async fn test_signed_in_visitors_keep_their_nav_on_the_500_view() {
        let alice = CurrentUser {
            id: 7,
            username: "alice".into(),
            role: Role::User,
            email: "alice@hustlink.io".into(),
        };
        let response = failing_app(Some(alice))
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(response).await;
        assert!(body.contains("Something went wrong."));
        assert!(body.contains("Logout"));
        assert!(body.contains("alice"));
    }

    #[traced_test]
    #[tokio::test]
    async fn test_anonymous_visitors_get_the_anonymous_500_view() {
        let response = failing_app(None)
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(response).await;
        assert!(body.contains("Something went wrong."));
        assert!(body.contains("/login"));
        assert!(!body.contains("Logout"));
    }
}
