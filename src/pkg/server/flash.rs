use axum::response::Redirect;
use serde::Deserialize;

/// Status feedback travels via query-string parameters read back by the
/// rendered view, not a server-side flash store.
#[derive(Deserialize, Default)]
pub struct Flash {
    pub success: Option<String>,
    pub error: Option<String>,
}

pub fn redirect_success(path: &str, message: &str) -> Redirect {
    redirect(path, "success", message)
}

pub fn redirect_error(path: &str, message: &str) -> Redirect {
    redirect(path, "error", message)
}

fn redirect(path: &str, key: &str, message: &str) -> Redirect {
    let query = serde_urlencoded::to_string([(key, message)]).unwrap_or_default();
    Redirect::to(&format!("{path}?{query}"))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_messages_are_url_encoded() {
        let query =
            serde_urlencoded::to_string([("success", "Job created successfully!")]).unwrap();
        assert_eq!(query, "success=Job+created+successfully%21");
        let parsed: super::Flash = serde_urlencoded::from_str(&query).unwrap();
        assert_eq!(parsed.success.as_deref(), Some("Job created successfully!"));
        assert!(parsed.error.is_none());
    }
}
