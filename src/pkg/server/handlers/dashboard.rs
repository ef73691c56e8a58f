use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
    Extension,
};

use crate::{
    pkg::{
        internal::{
            adaptors::{
                applications::selectors::ApplicationSelector,
                categories::selectors::CategorySelector, jobs::selectors::JobSelector,
            },
            auth::CurrentUser,
        },
        server::{
            flash::Flash,
            state::AppState,
            uispec::{AdminDashboardPage, UserDashboardPage},
        },
    },
    prelude::Result,
};

const USER_DASHBOARD_JOB_LIMIT: i64 = 10;

/// One endpoint, two views; the branch queries run concurrently since
/// nothing orders them.
pub async fn show(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
    Query(flash): Query<Flash>,
) -> Result<Html<String>> {
    let pool = &*state.db_pool;
    if user.is_admin() {
        let job_selector = JobSelector::new(pool);
        let application_selector = ApplicationSelector::new(pool);
        let category_selector = CategorySelector::new(pool);
        let (jobs, applications, categories) = tokio::try_join!(
            job_selector.get_all(),
            application_selector.get_all(),
            category_selector.get_all(),
        )?;
        let template = AdminDashboardPage {
            title: "Admin Dashboard - HustLink".into(),
            user: Some((*user).clone()),
            jobs,
            applications,
            categories,
            success: flash.success,
            error: flash.error,
        };
        Ok(Html(template.render()?))
    } else {
        let job_selector = JobSelector::new(pool);
        let application_selector = ApplicationSelector::new(pool);
        let (jobs, applications) = tokio::try_join!(
            job_selector.open_newest_first(USER_DASHBOARD_JOB_LIMIT),
            application_selector.get_for_user(user.id),
        )?;
        let template = UserDashboardPage {
            title: "My Dashboard - HustLink".into(),
            user: Some((*user).clone()),
            jobs,
            applications,
            success: flash.success,
            error: flash.error,
        };
        Ok(Html(template.render()?))
    }
}
