use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Extension, Form,
};
use serde::Deserialize;

use crate::{
    pkg::{
        internal::{
            adaptors::categories::{
                mutators::CategoryMutator, selectors::CategorySelector, spec::CategoryDelete,
            },
            auth::CurrentUser,
        },
        server::{
            flash::{self, Flash},
            state::AppState,
            uispec::CategoriesPage,
        },
    },
    prelude::Result,
};

#[derive(Deserialize)]
pub struct CategoryInput {
    #[serde(default)]
    pub category_name: String,
}

pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<CurrentUser>>,
    Query(flash): Query<Flash>,
) -> Result<Html<String>> {
    let categories = CategorySelector::new(&state.db_pool).get_all().await?;
    let template = CategoriesPage {
        title: "Manage Categories - HustLink".into(),
        user: Some((*user).clone()),
        categories,
        success: flash.success,
        error: flash.error,
    };
    Ok(Html(template.render()?))
}

pub async fn add(
    State(state): State<AppState>,
    Form(input): Form<CategoryInput>,
) -> Result<Redirect> {
    let name = input.category_name.trim();
    if name.is_empty() {
        return Ok(flash::redirect_error("/categories", "Category name is required"));
    }
    match CategoryMutator::new(&state.db_pool).create(name).await {
        Ok(category) => {
            tracing::info!("category added: {}", &category.category_name);
            Ok(flash::redirect_success("/categories", "Category added successfully!"))
        }
        Err(e) => {
            tracing::error!("failed to add category: {}", e);
            Ok(flash::redirect_error("/categories", "Failed to add category"))
        }
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Redirect> {
    if CategorySelector::new(&state.db_pool)
        .referenced_by_jobs(id)
        .await?
    {
        return Ok(flash::redirect_error(
            "/categories",
            "Cannot delete category that is being used by jobs",
        ));
    }
    match CategoryMutator::new(&state.db_pool).delete(id).await? {
        CategoryDelete::InUse => Ok(flash::redirect_error(
            "/categories",
            "Cannot delete category that is being used by jobs",
        )),
        CategoryDelete::Deleted => {
            Ok(flash::redirect_success("/categories", "Category deleted successfully!"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_name_is_trimmed_before_the_empty_check() {
        let input = CategoryInput {
            category_name: "   ".into(),
        };
        assert!(input.category_name.trim().is_empty());
        let input = CategoryInput {
            category_name: "  Engineering  ".into(),
        };
        assert_eq!(input.category_name.trim(), "Engineering");
    }
}
