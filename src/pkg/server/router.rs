use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use axum::Router;

use super::handlers::{applications, auth, categories, dashboard, jobs, pages, profile};
use super::middlewares::{authn, errors};
use super::state::AppState;

pub fn routes(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route("/jobs", get(jobs::list))
        .route("/jobs/:id", get(jobs::detail))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/register", get(auth::register_form).post(auth::register));

    let authed = Router::new()
        .route("/dashboard", get(dashboard::show))
        .route("/apply/:job_id", post(applications::apply))
        .route("/applications/:id/withdraw", post(applications::withdraw))
        .route("/profile", get(profile::show))
        .route("/profile/update", post(profile::update))
        .layer(from_fn(authn::require_user));

    // require_user wraps require_admin, so it runs first
    let admin = Router::new()
        .route("/jobs/create", get(jobs::create_form).post(jobs::create))
        .route("/jobs/:id/edit", get(jobs::edit_form))
        .route("/jobs/:id/update", post(jobs::update))
        .route("/jobs/:id/delete", post(jobs::delete))
        .route("/categories", get(categories::list))
        .route("/categories/add", post(categories::add))
        .route("/categories/:id/delete", post(categories::delete))
        .route("/admin/applications/:id/delete", post(applications::admin_delete))
        .layer(from_fn(authn::require_admin))
        .layer(from_fn(authn::require_user));

    Router::new()
        .merge(public)
        .merge(authed)
        .merge(admin)
        .fallback(pages::not_found)
        .layer(from_fn(errors::personalize_errors))
        .layer(from_fn_with_state(state.clone(), authn::identify))
        .with_state(state)
}
