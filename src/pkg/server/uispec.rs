use askama::Template;

use crate::pkg::internal::adaptors::applications::spec::ApplicationEntry;
use crate::pkg::internal::adaptors::categories::spec::CategoryEntry;
use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::pkg::internal::adaptors::users::spec::UserEntry;
use crate::pkg::internal::auth::CurrentUser;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub title: String,
    pub user: Option<CurrentUser>,
    pub jobs: Vec<JobEntry>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub title: String,
    pub user: Option<CurrentUser>,
    pub error: Option<String>,
    pub success: Option<String>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage {
    pub title: String,
    pub user: Option<CurrentUser>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "dashboard_admin.html")]
pub struct AdminDashboardPage {
    pub title: String,
    pub user: Option<CurrentUser>,
    pub jobs: Vec<JobEntry>,
    pub applications: Vec<ApplicationEntry>,
    pub categories: Vec<CategoryEntry>,
    pub success: Option<String>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "dashboard_user.html")]
pub struct UserDashboardPage {
    pub title: String,
    pub user: Option<CurrentUser>,
    pub jobs: Vec<JobEntry>,
    pub applications: Vec<ApplicationEntry>,
    pub success: Option<String>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "jobs.html")]
pub struct JobsPage {
    pub title: String,
    pub user: Option<CurrentUser>,
    pub jobs: Vec<JobEntry>,
}

#[derive(Template)]
#[template(path = "job_detail.html")]
pub struct JobDetailPage {
    pub title: String,
    pub user: Option<CurrentUser>,
    pub job: JobEntry,
}

#[derive(Template)]
#[template(path = "job_create.html")]
pub struct JobCreatePage {
    pub title: String,
    pub user: Option<CurrentUser>,
    pub categories: Vec<CategoryEntry>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "job_edit.html")]
pub struct JobEditPage {
    pub title: String,
    pub user: Option<CurrentUser>,
    pub job: JobEntry,
    pub categories: Vec<CategoryEntry>,
}

#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfilePage {
    pub title: String,
    pub user: Option<CurrentUser>,
    pub profile: UserEntry,
    pub success: Option<String>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "categories.html")]
pub struct CategoriesPage {
    pub title: String,
    pub user: Option<CurrentUser>,
    pub categories: Vec<CategoryEntry>,
    pub success: Option<String>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub title: String,
    pub user: Option<CurrentUser>,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage {
    pub title: String,
    pub user: Option<CurrentUser>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub title: String,
    pub user: Option<CurrentUser>,
    pub message: String,
}

impl ErrorPage {
    pub fn of(title: &str, message: &str, user: Option<CurrentUser>) -> Self {
        ErrorPage {
            title: title.to_string(),
            user,
            message: message.to_string(),
        }
    }

    pub fn access_denied(user: Option<CurrentUser>) -> Self {
        ErrorPage::of(
            "Access Denied",
            "You need admin privileges to access this page.",
            user,
        )
    }

    pub fn internal(user: Option<CurrentUser>) -> Self {
        ErrorPage::of(
            "Server Error",
            "Something went wrong. Please try again later.",
            user,
        )
    }
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundPage {
    pub title: String,
    pub user: Option<CurrentUser>,
}

impl NotFoundPage {
    pub fn with_user(user: Option<CurrentUser>) -> Self {
        NotFoundPage {
            title: "Page Not Found".to_string(),
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::auth::Role;

    fn admin() -> CurrentUser {
        CurrentUser {
            id: 1,
            username: "root".into(),
            role: Role::Admin,
            email: "root@hustlink.io".into(),
        }
    }

    #[test]
    fn test_login_page_renders_flash() {
        let page = LoginPage {
            title: "Login - HustLink".into(),
            user: None,
            error: Some("Invalid username or password!".into()),
            success: None,
        };
        let html = page.render().unwrap();
        assert!(html.contains("Invalid username or password!"));
    }

    #[test]
    fn test_nav_shows_admin_links_for_admins() {
        let page = AboutPage {
            title: "About HustLink".into(),
            user: Some(admin()),
        };
        let html = page.render().unwrap();
        assert!(html.contains("/categories"));
        assert!(html.contains("Logout"));
    }

    #[test]
    fn test_nav_offers_login_when_signed_out() {
        let page = AboutPage {
            title: "About HustLink".into(),
            user: None,
        };
        let html = page.render().unwrap();
        assert!(html.contains("/login"));
        assert!(!html.contains("Logout"));
    }

    #[test]
    fn test_error_page_renders_message() {
        let html = ErrorPage::access_denied(None).render().unwrap();
        assert!(html.contains("You need admin privileges to access this page."));
    }
}
